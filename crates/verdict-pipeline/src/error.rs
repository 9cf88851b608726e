//! Error types for the pipeline

use thiserror::Error;
use verdict_llm::GenerationError;

/// Why the generation step of a single document produced no canonical JSON.
///
/// A failure is a value, not an exception: the orchestrator records it and
/// moves on to the next document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The generation API answered with a non-success HTTP status
    #[error("generation API returned HTTP status {0}")]
    HttpStatus(u16),

    /// Network failure, timeout, or an unreadable response body
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not valid JSON at all
    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(String),

    /// The response carried no `candidates[0].content.parts[0].text`
    #[error("response contained no candidate text")]
    EmptyContent,

    /// The candidate text, after fence stripping, was not valid JSON
    #[error("candidate text is not valid JSON: {0}")]
    MalformedJson(String),
}

impl From<GenerationError> for GenerationFailure {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::HttpStatus(code) => GenerationFailure::HttpStatus(code),
            GenerationError::Transport(message) => GenerationFailure::Transport(message),
        }
    }
}

/// Errors that abort an entire batch run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source folder could not be listed; without a listing there is
    /// nothing to process
    #[error("failed to list source folder: {0}")]
    Listing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_conversion() {
        assert_eq!(
            GenerationFailure::from(GenerationError::HttpStatus(500)),
            GenerationFailure::HttpStatus(500)
        );
        assert_eq!(
            GenerationFailure::from(GenerationError::Transport("timed out".to_string())),
            GenerationFailure::Transport("timed out".to_string())
        );
    }

    #[test]
    fn test_failure_display() {
        assert_eq!(
            GenerationFailure::HttpStatus(500).to_string(),
            "generation API returned HTTP status 500"
        );
        assert_eq!(
            GenerationFailure::EmptyContent.to_string(),
            "response contained no candidate text"
        );
    }
}
