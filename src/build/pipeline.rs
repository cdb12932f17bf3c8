//! Build pipeline state machine
//!
//! Phases: Idle → Compiling → (Running | Idle) → Idle. The phase only moves
//! forward on events reported by the build worker, so the UI can never
//! observe a run that a failed compile should have prevented.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use tokio_util::sync::CancellationToken;

use crate::error::BeachError;

use super::console::Console;
use super::worker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildPhase {
    #[default]
    Idle,
    Compiling,
    Running,
}

/// Worker-to-UI messages
#[derive(Debug)]
pub enum BuildEvent {
    /// One line of combined subprocess output
    Output(String),
    CompileFinished { success: bool },
    RunFinished { code: Option<i32> },
    /// Spawn failures and other non-output trouble
    Error(String),
}

pub struct BuildPipeline {
    compiler: String,
    phase: BuildPhase,
    event_rx: Option<Receiver<BuildEvent>>,
    cancel: Option<CancellationToken>,
}

impl BuildPipeline {
    pub fn new(compiler: String) -> Self {
        BuildPipeline {
            compiler,
            phase: BuildPhase::Idle,
            event_rx: None,
            cancel: None,
        }
    }

    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn is_busy(&self) -> bool {
        self.phase != BuildPhase::Idle
    }

    /// Output binary convention: `<file>.out` next to the source.
    pub fn output_path(file: &Path) -> PathBuf {
        PathBuf::from(format!("{}.out", file.display()))
    }

    /// Kick off compile-then-run for `file` on the worker thread.
    pub fn start(&mut self, file: &Path) -> Result<(), BeachError> {
        if self.is_busy() {
            return Err(BeachError::BuildBusy);
        }
        if which::which(&self.compiler).is_err() {
            return Err(BeachError::CompilerNotFound(self.compiler.clone()));
        }

        let (event_tx, event_rx) = channel();
        let cancel = CancellationToken::new();
        worker::spawn_build(
            self.compiler.clone(),
            file.to_path_buf(),
            Self::output_path(file),
            event_tx,
            cancel.clone(),
        );

        self.event_rx = Some(event_rx);
        self.cancel = Some(cancel);
        self.phase = BuildPhase::Compiling;
        Ok(())
    }

    /// Kill whichever subprocess is current.
    pub fn stop(&mut self) {
        if self.is_busy()
            && let Some(cancel) = &self.cancel
        {
            cancel.cancel();
        }
    }

    /// Process any worker events that have arrived.
    pub fn drain_events(&mut self, console: &mut Console) {
        let events: Vec<BuildEvent> = match &self.event_rx {
            Some(event_rx) => event_rx.try_iter().collect(),
            None => return,
        };
        for event in events {
            self.apply(event, console);
        }
    }

    pub(crate) fn apply(&mut self, event: BuildEvent, console: &mut Console) {
        match event {
            BuildEvent::Output(line) => console.append(line),
            BuildEvent::CompileFinished { success: true } => {
                console.append("Compilation successful!");
                console.append("Running program...");
                self.phase = BuildPhase::Running;
            }
            BuildEvent::CompileFinished { success: false } => {
                console.append("Compilation failed!");
                self.phase = BuildPhase::Idle;
            }
            BuildEvent::RunFinished { code } => {
                match code {
                    Some(0) => console.append("Program finished."),
                    Some(code) => console.append(format!("Program exited with code {code}.")),
                    None => console.append("Program terminated."),
                }
                self.phase = BuildPhase::Idle;
            }
            BuildEvent::Error(message) => console.append(format!("Error: {message}")),
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
