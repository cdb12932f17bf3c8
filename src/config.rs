//! Configuration loading
//!
//! Reads `~/.config/beach/config.toml`. Every field is optional; a missing
//! or unparseable file falls back to the defaults so the editor always
//! starts.

use std::path::PathBuf;

use serde::Deserialize;

/// Completion settings section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Whether ghost-text completion is active at all
    pub enabled: bool,
    /// Model identifier sent with each request
    pub model: String,
    /// Debounce delay between the last qualifying keystroke and the request
    pub debounce_ms: u64,
    /// Characters of context taken from before the caret
    pub context_chars: usize,
    /// Sampling temperature
    pub temperature: f64,
    /// Completion length cap
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            enabled: true,
            model: crate::completion::DEFAULT_MODEL.to_string(),
            debounce_ms: 500,
            context_chars: 500,
            temperature: 0.3,
            max_tokens: 50,
        }
    }
}

/// Build settings section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Compiler executable, resolved through PATH
    pub compiler: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            compiler: "g++".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub completion: CompletionConfig,
    pub build: BuildConfig,
}

/// Path of the user config file, if a config directory exists
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("beach").join("config.toml"))
}

/// Load the user configuration, falling back to defaults
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return Config::default();
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring invalid config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[completion]
enabled = false
model = "gpt-3.5-turbo"
debounce_ms = 250
context_chars = 200
temperature = 0.1
max_tokens = 32

[build]
compiler = "clang++"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(!config.completion.enabled);
        assert_eq!(config.completion.model, "gpt-3.5-turbo");
        assert_eq!(config.completion.debounce_ms, 250);
        assert_eq!(config.completion.context_chars, 200);
        assert_eq!(config.completion.max_tokens, 32);
        assert_eq!(config.build.compiler, "clang++");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.completion.enabled);
        assert_eq!(config.completion.model, "gpt-4");
        assert_eq!(config.completion.debounce_ms, 500);
        assert_eq!(config.completion.context_chars, 500);
        assert_eq!(config.build.compiler, "g++");
    }

    // For any subset of fields present in the file, parsing succeeds and the
    // absent fields take their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_completion in prop::bool::ANY,
            include_model in prop::bool::ANY,
            include_build in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_completion {
                toml_content.push_str("[completion]\n");
                if include_model {
                    toml_content.push_str("model = \"gpt-3.5-turbo\"\n");
                }
            }
            if include_build {
                toml_content.push_str("[build]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok());
            let config = config.unwrap();

            if include_completion && include_model {
                prop_assert_eq!(config.completion.model, "gpt-3.5-turbo");
            } else {
                prop_assert_eq!(config.completion.model, "gpt-4");
            }
            prop_assert_eq!(config.completion.debounce_ms, 500);
            prop_assert_eq!(config.build.compiler, "g++");
        }
    }
}
