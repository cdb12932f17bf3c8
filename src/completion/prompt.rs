//! Request construction
//!
//! Everything the backend sees is a pure function of the extracted context
//! and a [`RequestParams`] snapshot taken when the debounce fired, so two
//! calls with the same inputs produce identical request bodies.

use serde_json::{Value, json};

use crate::config::CompletionConfig;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const AVAILABLE_MODELS: &[&str] = &["gpt-4", "gpt-3.5-turbo"];

/// Statement and block terminators end a completion.
pub const STOP_SEQUENCES: &[&str] = &[";", "}", "{"];

/// Sampling parameters and model for one request, snapshotted from config
/// at construction time so an in-flight request is never retargeted.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParams {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stop: Vec<String>,
}

impl RequestParams {
    pub fn from_config(config: &CompletionConfig) -> Self {
        RequestParams {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            stop: STOP_SEQUENCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The fixed instruction template with the caret context embedded verbatim.
pub fn build_prompt(context: &str) -> String {
    format!(
        "You are an expert C++ code completion assistant. Analyze the context and provide a completion that:\n\
         1. Matches the coding style in the context\n\
         2. Uses modern C++ features when appropriate\n\
         3. Considers variable names and types from the context\n\
         4. Completes the current statement or block\n\
         5. Is concise and follows best practices\n\n\
         Provide ONLY the completion code, no explanations. Context:\n\n{context}"
    )
}

/// Chat-completion request body.
pub fn request_body(prompt: &str, params: &RequestParams) -> Value {
    json!({
        "model": params.model,
        "messages": [
            {
                "role": "user",
                "content": prompt,
            }
        ],
        "temperature": params.temperature,
        "max_tokens": params.max_tokens,
        "stop": params.stop,
    })
}

/// Next entry in the model rotation (Ctrl+L in the editor).
pub fn next_model(current: &str) -> &'static str {
    match AVAILABLE_MODELS.iter().position(|m| *m == current) {
        Some(i) => AVAILABLE_MODELS[(i + 1) % AVAILABLE_MODELS.len()],
        None => AVAILABLE_MODELS[0],
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
