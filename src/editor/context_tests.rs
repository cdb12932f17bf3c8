//! Tests for caret-context extraction

use super::*;

fn lines(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_context_clips_at_document_start() {
    let lines = lines(&["int main() {"]);
    assert_eq!(context_before_caret(&lines, (0, 3), 500), "int");
}

#[test]
fn test_context_spans_lines_with_newlines() {
    let lines = lines(&["int a;", "int b;", "return"]);
    assert_eq!(
        context_before_caret(&lines, (2, 6), 500),
        "int a;\nint b;\nreturn"
    );
}

#[test]
fn test_context_takes_tail_when_over_window() {
    let lines = lines(&["abcdefghij"]);
    assert_eq!(context_before_caret(&lines, (0, 10), 4), "ghij");
}

#[test]
fn test_newlines_count_toward_window() {
    let lines = lines(&["ab", "cd"]);
    // Full prefix is "ab\ncd"; a window of 4 keeps the last four chars.
    assert_eq!(context_before_caret(&lines, (1, 2), 4), "b\ncd");
}

#[test]
fn test_caret_at_origin_yields_empty() {
    let lines = lines(&["int x;"]);
    assert_eq!(context_before_caret(&lines, (0, 0), 500), "");
}

#[test]
fn test_window_counts_chars_not_bytes() {
    let lines = lines(&["héllo"]);
    assert_eq!(context_before_caret(&lines, (0, 5), 3), "llo");
}
