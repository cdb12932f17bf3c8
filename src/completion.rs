//! AI ghost-text completion
//!
//! Keystrokes in the editor restart a debounce deadline; when it expires the
//! caret context is snapshotted, a request is built as a pure function of
//! (context, params) and handed to a worker thread that performs the
//! blocking HTTP call. Responses carry the sequence number of the request
//! that produced them, and only the response matching the latest issued
//! sequence number is ever applied, so a stale reply can never replace a
//! newer suggestion.

pub mod credentials;
pub mod debouncer;
pub mod prompt;
pub mod provider;
pub mod render;
pub mod state;
pub mod worker;

pub use prompt::{AVAILABLE_MODELS, DEFAULT_MODEL, RequestParams, next_model};
pub use state::{CompletionState, Suggestion};
