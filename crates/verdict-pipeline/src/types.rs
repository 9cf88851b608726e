//! Per-document processing outcomes

use crate::error::GenerationFailure;
use thiserror::Error;

/// Terminal state of one document within a batch run.
///
/// Every document reaches exactly one of these states; none of them stops
/// the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// A record was written for this document
    Saved {
        /// Name of the record file that was created
        output_name: String,
    },

    /// The document's MIME type is not a supported word-processing format
    Skipped,

    /// One of the per-document steps failed
    Failed(DocumentFailure),
}

/// Which step of a document's processing failed, and why
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentFailure {
    /// The text extraction collaborator could not convert the document
    #[error("text extraction failed: {0}")]
    Extraction(String),

    /// The generation or normalization step failed
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationFailure),

    /// The storage collaborator could not write the record
    #[error("record write failed: {0}")]
    Write(String),
}
