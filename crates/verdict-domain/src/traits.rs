//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the pipeline and the services
//! it orchestrates. Infrastructure implementations live in other crates.

use crate::{OutputRecord, SourceDocument};

/// Trait for enumerating the documents in a source folder
///
/// Implemented by the storage layer (filesystem, cloud folder, ...).
pub trait DocumentSource {
    /// Error type for listing operations
    type Error;

    /// List every document in the given folder, in storage order
    fn list(&self, folder_id: &str) -> Result<Vec<SourceDocument>, Self::Error>;
}

/// Trait for converting a word-processing document into plain text
///
/// The conversion itself (binary Word parsing, cloud conversion services)
/// is infrastructure; the pipeline only sees the resulting text blob.
pub trait TextExtractor {
    /// Error type for conversion operations
    type Error;

    /// Extract the full plain-text content of a supported document
    fn extract(&self, document: &SourceDocument) -> Result<String, Self::Error>;
}

/// Trait for writing output records into a target folder
pub trait RecordSink {
    /// Error type for write operations
    type Error;

    /// Create a new record file in the given folder
    fn write(&mut self, folder_id: &str, record: &OutputRecord) -> Result<(), Self::Error>;
}

/// Trait for the remote text-generation service
///
/// Implemented by the infrastructure layer (verdict-llm). A successful call
/// yields the raw response body; interpreting that body is the caller's job.
pub trait GenerationProvider {
    /// Error type for generation operations
    type Error;

    /// Send one prompt and return the raw response body of a successful call
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
