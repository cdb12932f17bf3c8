//! Completion worker thread
//!
//! Owns the blocking HTTP call so the UI loop stays responsive. Jobs arrive
//! on a channel; if several have queued up, only the newest is executed —
//! the older ones are already superseded and their sequence numbers would
//! be filtered on arrival anyway.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};

use super::credentials;
use super::prompt::RequestParams;
use super::provider::CompletionClient;

/// One completion request handed to the worker
#[derive(Debug)]
pub struct CompletionJob {
    pub prompt: String,
    pub params: RequestParams,
    /// Sequence number used to filter stale responses on the UI side
    pub seq: u64,
}

/// Worker-to-UI messages
#[derive(Debug)]
pub enum CompletionEvent {
    Suggestion { text: String, model: String, seq: u64 },
    /// Request produced nothing; the cause is already logged
    Failed { seq: u64 },
}

/// Spawn the worker thread. `env_dir` is where `.env` is looked up for
/// every request.
pub fn spawn_worker(
    env_dir: PathBuf,
    job_rx: Receiver<CompletionJob>,
    event_tx: Sender<CompletionEvent>,
) {
    std::thread::spawn(move || worker_loop(&env_dir, job_rx, event_tx));
}

fn worker_loop(env_dir: &Path, job_rx: Receiver<CompletionJob>, event_tx: Sender<CompletionEvent>) {
    while let Ok(job) = job_rx.recv() {
        let job = latest_job(job, &job_rx);
        let event = run_job(env_dir, job);
        if event_tx.send(event).is_err() {
            // Main thread disconnected
            return;
        }
    }
    log::debug!("completion worker shutting down");
}

/// Skip ahead to the newest queued job.
fn latest_job(mut job: CompletionJob, job_rx: &Receiver<CompletionJob>) -> CompletionJob {
    while let Ok(newer) = job_rx.try_recv() {
        log::debug!("completion {} superseded before start", job.seq);
        job = newer;
    }
    job
}

fn run_job(env_dir: &Path, job: CompletionJob) -> CompletionEvent {
    let Some(api_key) = credentials::load_api_key(env_dir) else {
        log::debug!("completion {} aborted: no API key", job.seq);
        return CompletionEvent::Failed { seq: job.seq };
    };

    let client = CompletionClient::new(api_key);
    match client.complete(&job.prompt, &job.params) {
        Ok(Some(text)) => CompletionEvent::Suggestion {
            text,
            model: job.params.model,
            seq: job.seq,
        },
        Ok(None) => {
            log::debug!("completion {}: response held no suggestion", job.seq);
            CompletionEvent::Failed { seq: job.seq }
        }
        Err(e) => {
            log::debug!("completion {} failed: {}", job.seq, e);
            CompletionEvent::Failed { seq: job.seq }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
