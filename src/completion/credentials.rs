//! API credential loading
//!
//! The bearer key lives in a `.env` file in the working directory as
//! `OPENAI_API_KEY=...`, optionally quoted. The file is re-read for every
//! request so a fixed key is picked up without restarting the editor. A
//! missing file or key silently aborts the request (logged only).

use std::path::Path;

pub const ENV_FILE: &str = ".env";
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Value of `key` in `KEY=value` content, with surrounding quotes stripped.
pub fn parse_env_value(content: &str, key: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix(key)
            && let Some(value) = rest.strip_prefix('=')
        {
            return normalize(value);
        }
    }
    None
}

fn normalize(value: &str) -> Option<String> {
    let mut value = value.trim();
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        value = &value[1..value.len() - 1];
    }
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Read the API key from `<dir>/.env`.
pub fn load_api_key(dir: &Path) -> Option<String> {
    let path = dir.join(ENV_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let key = parse_env_value(&content, API_KEY_VAR);
            if key.is_none() {
                log::debug!("no {} in {}", API_KEY_VAR, path.display());
            }
            key
        }
        Err(e) => {
            log::debug!("cannot read {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod credentials_tests;
