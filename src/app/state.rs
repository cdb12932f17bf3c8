//! Application state
//!
//! Owns every pane's state plus the worker-facing handles, and runs the
//! per-tick plumbing: debounce expiry, completion responses, build events.

use std::path::PathBuf;
use std::sync::mpsc::channel;

use crate::build::{BuildPipeline, Console};
use crate::completion::{self, CompletionState, RequestParams};
use crate::config::Config;
use crate::editor::{self, EditorState};
use crate::error::BeachError;
use crate::syntax::Highlighter;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Editor,
    Console,
}

pub struct App {
    pub config: Config,
    pub editor: EditorState,
    pub completion: CompletionState,
    pub build: BuildPipeline,
    pub console: Console,
    pub highlighter: Highlighter,
    pub focus: Focus,
    /// Modal error message (save/load failures)
    pub error_popup: Option<String>,
    /// Ctrl+Q was pressed once with unsaved changes
    pub quit_armed: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, path: Option<PathBuf>) -> Result<Self, BeachError> {
        let editor = match path {
            Some(path) => EditorState::open(path)?,
            None => EditorState::untitled(),
        };

        let mut completion = CompletionState::new(&config.completion);
        let (job_tx, job_rx) = channel();
        let (event_tx, event_rx) = channel();
        let env_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        completion::worker::spawn_worker(env_dir, job_rx, event_tx);
        completion.set_channels(job_tx, event_rx);

        let build = BuildPipeline::new(config.build.compiler.clone());

        let mut console = Console::new();
        console.append("Welcome to Beach IDE. F5 compiles and runs the current file.");
        if which::which(build.compiler()).is_err() {
            console.append(format!(
                "Note: compiler `{}` not found in PATH; F5 will not work.",
                build.compiler()
            ));
        }

        Ok(App {
            config,
            editor,
            completion,
            build,
            console,
            highlighter: Highlighter::new(),
            focus: Focus::Editor,
            error_popup: None,
            quit_armed: false,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// One event-loop tick: fire an expired debounce and drain the workers.
    pub fn tick(&mut self) {
        if self.completion.poll_debounce() {
            let context = editor::context_before_caret(
                self.editor.lines(),
                self.editor.caret(),
                self.config.completion.context_chars,
            );
            let params = RequestParams::from_config(&self.config.completion);
            self.completion.request(&context, params);
        }

        self.completion.drain_events();
        self.build.drain_events(&mut self.console);
    }

    /// Rotate the model used for the next request; in-flight requests keep
    /// the model they were built with.
    pub fn cycle_model(&mut self) {
        self.config.completion.model =
            completion::next_model(&self.config.completion.model).to_string();
    }
}
