//! Tests for editor buffer state

use super::*;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_untitled_starts_clean() {
    let editor = EditorState::untitled();
    assert!(editor.path().is_none());
    assert!(!editor.is_modified());
    assert_eq!(editor.display_name(), "untitled.cpp");
    assert_eq!(editor.caret(), (0, 0));
}

#[test]
fn test_open_loads_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.cpp");
    std::fs::write(&path, "int main() {\n    return 0;\n}\n").unwrap();

    let editor = EditorState::open(path.clone()).unwrap();
    assert_eq!(editor.lines().len(), 3);
    assert_eq!(editor.lines()[0], "int main() {");
    assert_eq!(editor.display_name(), "main.cpp");
    assert!(!editor.is_modified());
}

#[test]
fn test_open_missing_file_binds_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.cpp");

    let editor = EditorState::open(path.clone()).unwrap();
    assert_eq!(editor.path(), Some(path.as_path()));
    assert_eq!(editor.lines(), [""]);
}

#[test]
fn test_typing_marks_modified() {
    let mut editor = EditorState::untitled();
    assert!(editor.input(key(KeyCode::Char('x'))));
    assert!(editor.is_modified());
    assert_eq!(editor.lines()[0], "x");
}

#[test]
fn test_cursor_motion_does_not_mark_modified() {
    let mut editor = EditorState::untitled();
    editor.input(key(KeyCode::Left));
    assert!(!editor.is_modified());
}

#[test]
fn test_insert_text_places_at_caret() {
    let mut editor = EditorState::untitled();
    editor.input(key(KeyCode::Char('a')));
    editor.insert_text("foo();");
    assert_eq!(editor.lines()[0], "afoo();");
    assert_eq!(editor.caret(), (0, 7));
}

#[test]
fn test_save_round_trip_preserves_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.cpp");
    std::fs::write(&path, "int x;\n").unwrap();

    let mut editor = EditorState::open(path.clone()).unwrap();
    editor.input(key(KeyCode::End));
    editor.input(key(KeyCode::Enter));
    editor.insert_text("int y;");
    assert!(editor.save().unwrap());
    assert!(!editor.is_modified());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "int x;\nint y;\n");
}

#[test]
fn test_save_without_path_is_refused() {
    let mut editor = EditorState::untitled();
    editor.insert_text("int x;");
    assert!(!editor.save().unwrap());
    assert!(editor.is_modified());
}
