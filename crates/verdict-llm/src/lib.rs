//! Verdict Generation Provider Layer
//!
//! Pluggable generation provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `GenerationProvider` trait from
//! `verdict-domain`. A provider performs exactly one outbound request per
//! call and hands back the raw response body of a successful call; response
//! interpretation lives in `verdict-pipeline`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Gemini `generateContent` API integration
//!
//! # Examples
//!
//! ```
//! use verdict_llm::MockProvider;
//! use verdict_domain::traits::GenerationProvider;
//!
//! let provider = MockProvider::new("{\"candidates\":[]}");
//! let body = provider.generate("test prompt").unwrap();
//! assert_eq!(body, "{\"candidates\":[]}");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use verdict_domain::traits::GenerationProvider as GenerationProviderTrait;

pub use gemini::GeminiProvider;

/// Errors that can occur while talking to a generation API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The API answered with a non-success HTTP status
    #[error("generation API returned HTTP status {0}")]
    HttpStatus(u16),

    /// Network failure, timeout, or an unreadable response body
    #[error("transport error: {0}")]
    Transport(String),
}

/// Mock generation provider for deterministic testing
///
/// Returns pre-configured response bodies without making any network calls.
///
/// # Examples
///
/// ```
/// use verdict_llm::{GenerationError, MockProvider};
/// use verdict_domain::traits::GenerationProvider;
///
/// // Simple fixed body
/// let provider = MockProvider::new("fixed body");
/// assert_eq!(provider.generate("any prompt").unwrap(), "fixed body");
///
/// // Per-prompt overrides, including injected failures
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "body1");
/// provider.add_error("prompt2", GenerationError::HttpStatus(500));
/// assert_eq!(provider.generate("prompt1").unwrap(), "body1");
/// assert!(provider.generate("prompt2").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Result<String, GenerationError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response body for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response body for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Ok(response.into()));
    }

    /// Configure a specific error for a given prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, error: GenerationError) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Err(error));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl GenerationProviderTrait for MockProvider {
    type Error = GenerationError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            return response.clone();
        }

        Ok(self.default_response.clone())
    }
}
