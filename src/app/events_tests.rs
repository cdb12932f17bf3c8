//! Tests for key routing: overlay interception, debounce triggers, build
//! preconditions, quit arming

use super::*;
use crate::completion::Suggestion;
use crate::config::Config;

fn app() -> App {
    let mut config = Config::default();
    // Keep tests off the network path: a bogus compiler and the default
    // debounce are never exercised unless a test drives them.
    config.build.compiler = "definitely-not-a-real-compiler-4a1b".to_string();
    App::new(config, None).unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn show(app: &mut App, text: &str) {
    app.completion.suggestion = Some(Suggestion {
        text: text.to_string(),
        model: "gpt-4".to_string(),
    });
}

#[test]
fn test_tab_accepts_suggestion_verbatim() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('a')));
    show(&mut app, "foo();");

    app.handle_key(key(KeyCode::Tab));

    assert_eq!(app.editor.lines()[0], "afoo();");
    assert!(!app.completion.is_showing());
}

#[test]
fn test_tab_is_swallowed_while_showing() {
    let mut app = app();
    show(&mut app, "x");
    app.handle_key(key(KeyCode::Tab));
    // Only the suggestion text landed; no literal tab was typed.
    assert_eq!(app.editor.lines()[0], "x");
}

#[test]
fn test_tab_types_normally_when_hidden() {
    let mut app = app();
    app.handle_key(key(KeyCode::Tab));
    assert!(!app.editor.lines()[0].is_empty());
}

#[test]
fn test_esc_dismisses_without_insertion() {
    let mut app = app();
    show(&mut app, "foo();");

    app.handle_key(key(KeyCode::Esc));

    assert!(!app.completion.is_showing());
    assert_eq!(app.editor.lines()[0], "");
}

#[test]
fn test_other_key_hides_and_still_types() {
    let mut app = app();
    show(&mut app, "foo();");

    app.handle_key(key(KeyCode::Char('b')));

    assert!(!app.completion.is_showing());
    assert_eq!(app.editor.lines()[0], "b");
}

#[test]
fn test_qualifying_key_schedules_debounce() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('.')));
    assert!(app.completion.debouncer.is_pending());
}

#[test]
fn test_plain_key_cancels_pending_debounce() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char(' ')));
    assert!(app.completion.debouncer.is_pending());

    app.handle_key(key(KeyCode::Char('x')));
    assert!(!app.completion.debouncer.is_pending());
}

#[test]
fn test_compile_refused_for_untitled_buffer() {
    let mut app = app();
    app.handle_key(key(KeyCode::F(5)));
    assert!(
        app.console
            .lines()
            .iter()
            .any(|l| l.contains("Save the file before compiling"))
    );
}

#[test]
fn test_compile_refused_for_modified_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.cpp");
    std::fs::write(&path, "int main() {}\n").unwrap();

    let mut config = Config::default();
    config.build.compiler = "definitely-not-a-real-compiler-4a1b".to_string();
    let mut app = App::new(config, Some(path)).unwrap();

    app.handle_key(key(KeyCode::Char('x')));
    app.handle_key(key(KeyCode::F(5)));
    assert!(
        app.console
            .lines()
            .iter()
            .any(|l| l.contains("Save the file before compiling"))
    );
}

#[test]
fn test_compile_with_missing_compiler_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prog.cpp");
    std::fs::write(&path, "int main() {}\n").unwrap();

    let mut config = Config::default();
    config.build.compiler = "definitely-not-a-real-compiler-4a1b".to_string();
    let mut app = App::new(config, Some(path)).unwrap();

    app.handle_key(key(KeyCode::F(5)));
    assert!(app.console.lines().iter().any(|l| l.starts_with("Error:")));
}

#[test]
fn test_save_without_path_raises_error_popup() {
    let mut app = app();
    app.handle_key(ctrl('s'));
    assert!(app.error_popup.is_some());
}

#[test]
fn test_error_popup_blocks_keys_until_dismissed() {
    let mut app = app();
    app.handle_key(ctrl('s'));
    assert!(app.error_popup.is_some());

    app.handle_key(key(KeyCode::Char('z')));
    assert_eq!(app.editor.lines()[0], "");

    app.handle_key(key(KeyCode::Esc));
    assert!(app.error_popup.is_none());
}

#[test]
fn test_quit_is_immediate_when_unmodified() {
    let mut app = app();
    app.handle_key(ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn test_quit_with_unsaved_changes_needs_two_presses() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('x')));

    app.handle_key(ctrl('q'));
    assert!(!app.should_quit());
    assert!(app.quit_armed);

    app.handle_key(ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn test_typing_disarms_pending_quit() {
    let mut app = app();
    app.handle_key(key(KeyCode::Char('x')));
    app.handle_key(ctrl('q'));
    assert!(app.quit_armed);

    app.handle_key(key(KeyCode::Char('y')));
    assert!(!app.quit_armed);
}

#[test]
fn test_backtab_switches_focus() {
    let mut app = app();
    assert_eq!(app.focus, Focus::Editor);
    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Console);
    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Editor);
}

#[test]
fn test_console_focus_keys_do_not_touch_buffer() {
    let mut app = app();
    app.handle_key(key(KeyCode::BackTab));
    app.handle_key(key(KeyCode::Char('j')));
    assert_eq!(app.editor.lines()[0], "");
}

#[test]
fn test_cycle_model_changes_next_request_only() {
    let mut app = app();
    assert_eq!(app.config.completion.model, "gpt-4");
    app.handle_key(ctrl('l'));
    assert_eq!(app.config.completion.model, "gpt-3.5-turbo");
}

#[test]
fn test_debounce_expiry_issues_request_with_current_context() {
    use std::sync::mpsc;

    let mut app = app();
    // Replace the real worker channels with a probe.
    let (job_tx, job_rx) = mpsc::channel();
    let (_event_tx, event_rx) = mpsc::channel();
    app.completion.set_channels(job_tx, event_rx);

    app.handle_key(key(KeyCode::Char('x')));
    app.handle_key(key(KeyCode::Char('.')));
    app.completion.debouncer.clear();
    // Simulate the deadline having passed.
    app.completion.debouncer = crate::completion::debouncer::Debouncer::new(0);
    app.completion.debouncer.schedule();
    app.tick();

    let job = job_rx.try_recv().unwrap();
    assert!(job.prompt.contains("x."));
    assert_eq!(job.seq, 1);
}
