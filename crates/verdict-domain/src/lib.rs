//! Verdict Domain Layer
//!
//! Core model for the verdict conversion pipeline. It has zero external
//! dependencies and defines the fundamental value objects and trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **SourceDocument**: one input file (a Hebrew court verdict) held by the
//!   document storage collaborator
//! - **OutputRecord**: the structured JSON record derived from one document
//! - **RunSummary**: the aggregate outcome of a single batch run
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain types only
//! - Infrastructure implementations (storage, text extraction, generation
//!   API) live in other crates behind the traits in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod summary;
pub mod traits;

// Re-exports for convenience
pub use document::{OutputRecord, SourceDocument, MIME_WORD_LEGACY, MIME_WORD_XML};
pub use summary::RunSummary;
