//! Editor buffer state
//!
//! The buffer and all editing operations belong to `tui_textarea`; this
//! module wraps it with file bookkeeping (path, modified flag, trailing
//! newline) and the caret-context extraction the completion scheduler needs.

pub mod context;
pub mod view;

use std::io;
use std::path::{Path, PathBuf};

use ratatui::crossterm::event::KeyEvent;
use tui_textarea::TextArea;

use crate::file;

pub use context::context_before_caret;

pub struct EditorState {
    pub textarea: TextArea<'static>,
    path: Option<PathBuf>,
    modified: bool,
    /// Whether the file on disk ends with a newline, preserved on save
    trailing_newline: bool,
    /// First visible row, adjusted to follow the caret during rendering
    pub top_line: usize,
}

impl EditorState {
    pub fn untitled() -> Self {
        EditorState {
            textarea: TextArea::default(),
            path: None,
            modified: false,
            trailing_newline: true,
            top_line: 0,
        }
    }

    /// Open `path`, or start an empty buffer bound to it when the file does
    /// not exist yet.
    pub fn open(path: PathBuf) -> io::Result<Self> {
        let mut editor = if path.exists() {
            let content = file::load(&path)?;
            EditorState {
                textarea: TextArea::from(content.lines()),
                path: None,
                modified: false,
                trailing_newline: content.is_empty() || content.ends_with('\n'),
                top_line: 0,
            }
        } else {
            EditorState::untitled()
        };
        editor.path = Some(path);
        Ok(editor)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn display_name(&self) -> String {
        match &self.path {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "untitled.cpp".to_string(),
        }
    }

    /// Forward a key to the textarea; returns whether the content changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let changed = self.textarea.input(key);
        if changed {
            self.modified = true;
        }
        changed
    }

    /// Insert text at the caret (accepted ghost suggestions arrive here).
    pub fn insert_text(&mut self, text: &str) {
        self.textarea.insert_str(text);
        self.modified = true;
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// Caret position as (row, column), column counted in characters.
    pub fn caret(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Full buffer text as written to disk.
    pub fn text(&self) -> String {
        let mut text = self.textarea.lines().join("\n");
        if self.trailing_newline && !text.is_empty() {
            text.push('\n');
        }
        text
    }

    /// Save to the bound path. Returns `Ok(false)` when the buffer has no
    /// path to save to.
    pub fn save(&mut self) -> io::Result<bool> {
        let Some(path) = self.path.clone() else {
            return Ok(false);
        };
        file::save(&path, &self.text())?;
        self.modified = false;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "editor/editor_tests.rs"]
mod editor_tests;
