//! Debounce timer for completion requests
//!
//! A single restartable deadline: every qualifying keystroke pushes it out
//! to `now + delay`, any other keystroke clears it, and it fires at most
//! once per quiet period. Deadlines are plain `Instant`s so the state can
//! be driven with explicit clock values in tests.

use std::time::{Duration, Instant};

pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Debouncer {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// (Re)start the delay from now.
    pub fn schedule(&mut self) {
        self.schedule_at(Instant::now());
    }

    pub(crate) fn schedule_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline.
    pub fn clear(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the deadline has passed.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub(crate) fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
