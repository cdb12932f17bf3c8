//! Chat-completion backend client
//!
//! One blocking POST per request, no streaming, no retry. Runs on the
//! worker thread, never on the UI loop.

use thiserror::Error;

use super::prompt::{self, RequestParams};

/// Chat-completion endpoint
pub const COMPLETION_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Errors that can occur while fetching a completion
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Missing credentials
    #[error("completion backend not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request
    #[error("network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to build the request or read the response
    #[error("parse error: {0}")]
    Parse(String),
}

pub struct CompletionClient {
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Fetch a suggestion for `prompt`.
    ///
    /// `Ok(None)` means the backend answered but produced nothing usable
    /// (unexpected shape or empty content) — treated as "no suggestion".
    pub fn complete(
        &self,
        prompt: &str,
        params: &RequestParams,
    ) -> Result<Option<String>, CompletionError> {
        let body = serde_json::to_string(&prompt::request_body(prompt, params))
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let response = ureq::post(COMPLETION_API_URL)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(|e| match e {
                ureq::Error::Status(code, response) => {
                    let message = response
                        .into_string()
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    CompletionError::Api { code, message }
                }
                ureq::Error::Transport(t) => CompletionError::Network(t.to_string()),
            })?;

        let text = response
            .into_string()
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        Ok(extract_suggestion(&text))
    }
}

/// `choices[0].message.content`, trimmed; any other shape yields None.
pub fn extract_suggestion(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    let content = json
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()?;
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
