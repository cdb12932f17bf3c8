//! Suggestion lifecycle and overlay state
//!
//! The overlay is Hidden or Showing; Showing is exactly "a suggestion is
//! present". All state lives on the UI thread — the worker only ever talks
//! through the channels.

use std::sync::mpsc::{Receiver, Sender};

use crate::config::CompletionConfig;

use super::debouncer::Debouncer;
use super::prompt::{self, RequestParams};
use super::worker::{CompletionEvent, CompletionJob};

/// An accepted-or-discarded-once suggestion proposed by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub text: String,
    /// Model that produced it (the config may have moved on since)
    pub model: String,
}

pub struct CompletionState {
    /// Whether completion is active at all (from config)
    pub enabled: bool,
    /// Debounce deadline between keystrokes and requests
    pub debouncer: Debouncer,
    /// Present exactly while the overlay is Showing
    pub suggestion: Option<Suggestion>,
    /// Sequence number of the most recently issued request
    pub last_seq: u64,
    /// Sequence number of the request still awaiting a response, if any
    pub in_flight: Option<u64>,
    /// Channel to hand jobs to the worker thread
    pub job_tx: Option<Sender<CompletionJob>>,
    /// Channel carrying worker responses
    pub event_rx: Option<Receiver<CompletionEvent>>,
}

impl CompletionState {
    pub fn new(config: &CompletionConfig) -> Self {
        CompletionState {
            enabled: config.enabled,
            debouncer: Debouncer::new(config.debounce_ms),
            suggestion: None,
            last_seq: 0,
            in_flight: None,
            job_tx: None,
            event_rx: None,
        }
    }

    /// Wire up the worker channels.
    pub fn set_channels(
        &mut self,
        job_tx: Sender<CompletionJob>,
        event_rx: Receiver<CompletionEvent>,
    ) {
        self.job_tx = Some(job_tx);
        self.event_rx = Some(event_rx);
    }

    /// Overlay state: Showing when a suggestion is present.
    pub fn is_showing(&self) -> bool {
        self.suggestion.is_some()
    }

    pub fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestion.as_ref()
    }

    /// Every editor keystroke lands here after overlay interception: the
    /// pending deadline is dropped, and qualifying keys start a fresh one.
    pub fn on_keystroke(&mut self, qualifying: bool) {
        self.debouncer.clear();
        if qualifying && self.enabled {
            self.debouncer.schedule();
        }
    }

    /// True once per expired debounce deadline.
    pub fn poll_debounce(&mut self) -> bool {
        self.debouncer.poll()
    }

    /// Issue a request for `context` with the given parameter snapshot.
    /// Empty-after-trimming context issues nothing.
    pub fn request(&mut self, context: &str, params: RequestParams) {
        if context.trim().is_empty() {
            return;
        }
        let Some(job_tx) = &self.job_tx else {
            return;
        };

        self.last_seq += 1;
        let job = CompletionJob {
            prompt: prompt::build_prompt(context),
            params,
            seq: self.last_seq,
        };
        if job_tx.send(job).is_ok() {
            self.in_flight = Some(self.last_seq);
        }
    }

    /// Apply any worker responses that have arrived.
    pub fn drain_events(&mut self) {
        let events: Vec<CompletionEvent> = match &self.event_rx {
            Some(event_rx) => event_rx.try_iter().collect(),
            None => return,
        };
        for event in events {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: CompletionEvent) {
        match event {
            CompletionEvent::Suggestion { text, model, seq } => {
                // Only the response to the latest issued request counts; a
                // reply to a superseded request is dropped even if it
                // arrives last.
                if seq != self.last_seq {
                    log::debug!("discarding stale completion {seq} (latest {})", self.last_seq);
                    return;
                }
                self.in_flight = None;
                self.suggestion = Some(Suggestion { text, model });
            }
            CompletionEvent::Failed { seq } => {
                if seq == self.last_seq {
                    self.in_flight = None;
                }
            }
        }
    }

    /// Accept: hand the text to the caller for insertion and hide.
    pub fn accept(&mut self) -> Option<String> {
        self.suggestion.take().map(|s| s.text)
    }

    /// Dismiss or invalidate: drop the suggestion, hide the overlay.
    pub fn dismiss(&mut self) {
        self.suggestion = None;
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
