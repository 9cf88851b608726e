//! Normalize raw generation API responses into canonical JSON

use crate::error::GenerationFailure;
use serde_json::Value;

/// Turn a raw `generateContent` response body into canonical JSON text.
///
/// Generation models routinely wrap their JSON answer in code fences or
/// stray whitespace; this isolates the payload and re-serializes it with
/// stable two-space indentation so downstream consumers always see the
/// same formatting.
///
/// Never panics: every malformed input maps to a [`GenerationFailure`].
pub fn normalize_response(body: &str) -> Result<String, GenerationFailure> {
    let envelope: Value = serde_json::from_str(body)
        .map_err(|e| GenerationFailure::MalformedEnvelope(e.to_string()))?;

    let text = envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or(GenerationFailure::EmptyContent)?;

    let cleaned = strip_code_fences(text);

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| GenerationFailure::MalformedJson(e.to_string()))?;

    serde_json::to_string_pretty(&value)
        .map_err(|e| GenerationFailure::MalformedJson(e.to_string()))
}

/// Strip a leading code fence (with an optional case-insensitive `json`
/// tag) and a trailing fence, plus surrounding whitespace.
fn strip_code_fences(text: &str) -> &str {
    let mut s = text.trim();

    if let Some(rest) = s.strip_prefix("```") {
        s = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
    }

    if let Some(rest) = s.trim_end().strip_suffix("```") {
        s = rest;
    }

    s.trim()
}
