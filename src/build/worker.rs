//! Build worker thread
//!
//! Runs the compiler, then (only on success) the produced binary, relaying
//! each subprocess's stdout and stderr line by line. Completion is detected
//! by polling `try_wait` so the cancellation token can kill the child at
//! any point.

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::Sender;
use std::thread::sleep;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::pipeline::BuildEvent;

const POLL_INTERVAL_MS: u64 = 10;

pub(crate) fn spawn_build(
    compiler: String,
    file: PathBuf,
    out_path: PathBuf,
    event_tx: Sender<BuildEvent>,
    cancel: CancellationToken,
) {
    std::thread::spawn(move || run_build(&compiler, &file, &out_path, &event_tx, &cancel));
}

fn run_build(
    compiler: &str,
    file: &PathBuf,
    out_path: &PathBuf,
    event_tx: &Sender<BuildEvent>,
    cancel: &CancellationToken,
) {
    let mut compile = Command::new(compiler);
    compile
        .arg(file)
        .arg("-o")
        .arg(out_path)
        .arg("-fdiagnostics-color=always");

    match run_streaming(compile, event_tx, cancel) {
        Ok(status) if status.success() => {
            let _ = event_tx.send(BuildEvent::CompileFinished { success: true });
        }
        Ok(_) => {
            let _ = event_tx.send(BuildEvent::CompileFinished { success: false });
            return;
        }
        Err(e) => {
            let _ = event_tx.send(BuildEvent::Error(format!("failed to start {compiler}: {e}")));
            let _ = event_tx.send(BuildEvent::CompileFinished { success: false });
            return;
        }
    }

    // The run step happens only after a successful compile exit.
    match run_streaming(Command::new(out_path), event_tx, cancel) {
        Ok(status) => {
            let _ = event_tx.send(BuildEvent::RunFinished {
                code: status.code(),
            });
        }
        Err(e) => {
            let _ = event_tx.send(BuildEvent::Error(format!(
                "failed to start {}: {e}",
                out_path.display()
            )));
            let _ = event_tx.send(BuildEvent::RunFinished { code: None });
        }
    }
}

/// Spawn `cmd`, relay its output, and wait for it to exit or be cancelled.
pub(crate) fn run_streaming(
    mut cmd: Command,
    event_tx: &Sender<BuildEvent>,
    cancel: &CancellationToken,
) -> std::io::Result<ExitStatus> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let out_handle = child.stdout.take().map(|s| relay_lines(s, event_tx.clone()));
    let err_handle = child.stderr.take().map(|s| relay_lines(s, event_tx.clone()));

    let status = loop {
        if cancel.is_cancelled() {
            let _ = child.kill();
        }
        match child.try_wait()? {
            Some(status) => break status,
            None => sleep(Duration::from_millis(POLL_INTERVAL_MS)),
        }
    };

    // Drain both relays so late output still lands before the exit event.
    for handle in [out_handle, err_handle].into_iter().flatten() {
        let _ = handle.join();
    }

    Ok(status)
}

fn relay_lines<R: Read + Send + 'static>(
    reader: R,
    event_tx: Sender<BuildEvent>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        for line in BufReader::new(reader).lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(BuildEvent::Output(line)).is_err() {
                        return;
                    }
                }
                Err(_) => return,
            }
        }
    })
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
