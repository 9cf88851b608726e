//! Gemini Provider Implementation
//!
//! Integration with Google's Gemini `generateContent` REST API.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable endpoint, model, and API key
//! - Client-level timeout handling
//! - Exactly one request per invocation, no retry
//!
//! # Examples
//!
//! ```no_run
//! use verdict_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::default_endpoint("gemini-1.5-pro", "api-key");
//!
//! // The generate method is async; the `GenerationProvider` trait impl
//! // provides a blocking wrapper for synchronous call sites.
//! ```

use crate::GenerationError;
use serde::Serialize;
use std::time::Duration;
use verdict_domain::traits::GenerationProvider as GenerationProviderTrait;

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model for verdict extraction
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Default timeout for generation requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API provider
///
/// Sends single-turn `generateContent` requests and returns the raw response
/// body of a successful call. Non-success statuses and transport failures
/// are reported as [`GenerationError`]; they never escape as panics.
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g. `https://generativelanguage.googleapis.com`)
    /// - `model`: Model to use (e.g. `gemini-1.5-pro`)
    /// - `api_key`: API key passed as the `key` query parameter
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a provider against the public Google endpoint
    pub fn default_endpoint(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model, api_key)
    }

    /// Send one prompt to the generateContent API
    ///
    /// # Returns
    ///
    /// The raw response body of an HTTP 200 answer. The body is expected to
    /// carry `candidates[0].content.parts[0].text`, but that interpretation
    /// belongs to the response normalizer, not to this client.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::HttpStatus`] on any non-success status
    /// - [`GenerationError::Transport`] on network failure, timeout, or an
    ///   unreadable response body
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/v1/models/{}:generateContent",
            self.endpoint, self.model
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::HttpStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(format!("failed to read response body: {}", e)))
    }
}

impl GenerationProviderTrait for GeminiProvider {
    type Error = GenerationError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async client, for callers that run the
        // provider on a blocking thread
        tokio::runtime::Runtime::new()
            .map_err(|e| GenerationError::Transport(format!("failed to start runtime: {}", e)))?
            .block_on(async { self.generate(prompt).await })
    }
}
