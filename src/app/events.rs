//! Key routing
//!
//! Order matters: the modal error popup blocks everything, global chords
//! run next, and only then does the focused pane see the key. Inside the
//! editor the ghost overlay gets first refusal — accept and dismiss are
//! swallowed, anything else hides the overlay and is typed normally.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, Focus};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error popup is modal until dismissed.
        if self.error_popup.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.error_popup = None;
            }
            return;
        }

        // Anything that is not the quit chord disarms a pending quit.
        if !is_quit_chord(key) {
            self.quit_armed = false;
        }

        if self.handle_global_key(key) {
            return;
        }

        match self.focus {
            Focus::Editor => self.handle_editor_key(key),
            Focus::Console => self.handle_console_key(key),
        }
    }

    /// Chords that work regardless of focus. Returns true when handled.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if is_quit_chord(key) {
            self.request_quit();
            return true;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => {
                self.save_file();
                true
            }
            KeyCode::Char('l') if ctrl => {
                self.cycle_model();
                true
            }
            KeyCode::Char('k') if ctrl => {
                self.build.stop();
                true
            }
            KeyCode::F(5) => {
                self.compile_and_run();
                true
            }
            KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Editor => Focus::Console,
                    Focus::Console => Focus::Editor,
                };
                true
            }
            _ => false,
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        // Ghost overlay interception: Tab accepts, Esc dismisses — both
        // swallowed. Any other key hides the overlay first and then goes to
        // the buffer as usual.
        if self.completion.is_showing() {
            match key.code {
                KeyCode::Tab => {
                    if let Some(text) = self.completion.accept() {
                        self.editor.insert_text(&text);
                    }
                    return;
                }
                KeyCode::Esc => {
                    self.completion.dismiss();
                    return;
                }
                _ => self.completion.dismiss(),
            }
        }

        self.editor.input(key);
        self.completion.on_keystroke(is_qualifying(key));
    }

    fn handle_console_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.console.scroll_up(1),
            KeyCode::Down => self.console.scroll_down(1),
            KeyCode::PageUp => self.console.scroll_up(10),
            KeyCode::PageDown => self.console.scroll_down(10),
            KeyCode::Home => self.console.jump_to_top(),
            KeyCode::End => self.console.jump_to_bottom(),
            _ => {}
        }
    }

    fn request_quit(&mut self) {
        if self.editor.is_modified() && !self.quit_armed {
            self.console
                .append("Unsaved changes. Ctrl+S to save, or Ctrl+Q again to quit anyway.");
            self.quit_armed = true;
        } else {
            self.should_quit = true;
        }
    }

    fn save_file(&mut self) {
        match self.editor.save() {
            Ok(true) => {
                self.console
                    .append(format!("Saved {}.", self.editor.display_name()));
            }
            Ok(false) => {
                self.error_popup = Some(
                    "No file path. Start beach with a file argument to save.".to_string(),
                );
            }
            Err(e) => {
                self.error_popup =
                    Some(format!("Cannot write {}: {e}", self.editor.display_name()));
            }
        }
    }

    fn compile_and_run(&mut self) {
        let Some(path) = self.editor.path().map(|p| p.to_path_buf()) else {
            self.console.append("Save the file before compiling (Ctrl+S).");
            return;
        };
        if self.editor.is_modified() {
            self.console.append("Save the file before compiling (Ctrl+S).");
            return;
        }

        self.console.clear();
        match self.build.start(&path) {
            Ok(()) => {
                self.console.append(format!(
                    "$ {} {} -o {}",
                    self.build.compiler(),
                    path.display(),
                    crate::build::BuildPipeline::output_path(&path).display()
                ));
            }
            Err(e) => self.console.append(format!("Error: {e}")),
        }
    }
}

fn is_quit_chord(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
}

/// Keys that (re)start the completion debounce timer.
fn is_qualifying(key: KeyEvent) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Char(' ' | '.' | '>' | ':')
    )
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
