//! Verdict Pipeline
//!
//! Converts Hebrew court verdict documents into structured JSON records
//! using a remote generation model.
//!
//! # Overview
//!
//! The pipeline enumerates the documents of a source folder, extracts the
//! text of every supported word-processing file, asks the generation model
//! to pull seven structured fields out of it, normalizes the model's answer
//! into canonical pretty-printed JSON, and writes one record file per
//! successfully processed document into a target folder.
//!
//! # Architecture
//!
//! ```text
//! DocumentSource → TextExtractor → PromptBuilder → GenerationProvider
//!                                                       ↓
//!                         RecordSink ← normalize_response
//! ```
//!
//! # Key Properties
//!
//! - **Per-document isolation**: one bad input never aborts the batch; a
//!   failed extraction, generation, or write marks that document as failed
//!   and the run continues
//! - **Single attempt**: exactly one outbound generation call per document,
//!   no retry at any layer
//! - **Canonical output**: model answers are unfenced, reparsed, and
//!   re-serialized with stable two-space indentation
//!
//! # Example Usage
//!
//! ```no_run
//! use verdict_pipeline::{BatchPipeline, PipelineConfig};
//! use verdict_llm::GeminiProvider;
//! # use verdict_domain::traits::{DocumentSource, TextExtractor, RecordSink};
//! # async fn example<F, X, W>(source: F, extractor: X, sink: W)
//! # -> Result<(), Box<dyn std::error::Error>>
//! # where
//! #     F: DocumentSource,
//! #     X: TextExtractor,
//! #     W: RecordSink,
//! #     F::Error: std::fmt::Display,
//! #     X::Error: std::fmt::Display,
//! #     W::Error: std::fmt::Display,
//! # {
//! let provider = GeminiProvider::default_endpoint("gemini-1.5-pro", "api-key");
//! let config = PipelineConfig::new("source-folder", "target-folder");
//! config.validate()?;
//!
//! let mut pipeline = BatchPipeline::new(source, extractor, sink, provider, config);
//! let summary = pipeline.run().await?;
//!
//! println!("Processed: {} documents", summary.processed);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod batch;
mod config;
mod error;
mod parser;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use batch::BatchPipeline;
pub use config::PipelineConfig;
pub use error::{GenerationFailure, PipelineError};
pub use parser::normalize_response;
pub use prompt::PromptBuilder;
pub use types::{DocumentFailure, DocumentOutcome};
