//! Tests for `.env` credential parsing

use super::*;

#[test]
fn test_plain_value() {
    let content = "OPENAI_API_KEY=sk-abc123\n";
    assert_eq!(
        parse_env_value(content, API_KEY_VAR).as_deref(),
        Some("sk-abc123")
    );
}

#[test]
fn test_double_quotes_stripped() {
    let content = "OPENAI_API_KEY=\"sk-abc123\"\n";
    assert_eq!(
        parse_env_value(content, API_KEY_VAR).as_deref(),
        Some("sk-abc123")
    );
}

#[test]
fn test_single_quotes_stripped() {
    let content = "OPENAI_API_KEY='sk-abc123'\n";
    assert_eq!(
        parse_env_value(content, API_KEY_VAR).as_deref(),
        Some("sk-abc123")
    );
}

#[test]
fn test_surrounding_whitespace_trimmed() {
    let content = "  OPENAI_API_KEY=  sk-abc123  \n";
    assert_eq!(
        parse_env_value(content, API_KEY_VAR).as_deref(),
        Some("sk-abc123")
    );
}

#[test]
fn test_other_lines_ignored() {
    let content = "# comment\nOTHER=1\nOPENAI_API_KEY=sk-abc123\nMORE=2\n";
    assert_eq!(
        parse_env_value(content, API_KEY_VAR).as_deref(),
        Some("sk-abc123")
    );
}

#[test]
fn test_similar_prefix_does_not_match() {
    let content = "OPENAI_API_KEY_BACKUP=sk-nope\n";
    assert_eq!(parse_env_value(content, API_KEY_VAR), None);
}

#[test]
fn test_missing_key_yields_none() {
    assert_eq!(parse_env_value("FOO=bar\n", API_KEY_VAR), None);
}

#[test]
fn test_empty_value_yields_none() {
    assert_eq!(parse_env_value("OPENAI_API_KEY=\n", API_KEY_VAR), None);
    assert_eq!(parse_env_value("OPENAI_API_KEY=\"\"\n", API_KEY_VAR), None);
}

#[test]
fn test_load_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(ENV_FILE), "OPENAI_API_KEY=sk-fromfile\n").unwrap();
    assert_eq!(load_api_key(dir.path()).as_deref(), Some("sk-fromfile"));
}

#[test]
fn test_load_without_env_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load_api_key(dir.path()), None);
}
