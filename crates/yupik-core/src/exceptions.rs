//! Irregular surface forms and their corrected spelling.
//!
//! Cyrillic `г` covers both Latin `g` and `h`, so Cyrillic to Latin
//! conversion always yields `g`. The table restores `h` in the words where it
//! belongs, and the validator consults it before checking a word.
//!
//! - `ExceptionTable::init_custom(toml_content)` replaces the table before first use
//! - `ExceptionTable::global()` returns the lazily built singleton
//! - The default table is embedded via `include_str!("exceptions.toml")`

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_EXCEPTIONS_TOML: &str = include_str!("exceptions.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct ExceptionConfig {
    words: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExceptionConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[words] table is empty")]
    Empty,
    #[error("empty key")]
    EmptyKey,
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("exception table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<surface, corrected>`.
pub fn parse_exceptions_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, String>, ExceptionConfigError> {
    let config: ExceptionConfig =
        toml::from_str(toml_str).map_err(|e| ExceptionConfigError::Parse(e.to_string()))?;

    if config.words.is_empty() {
        return Err(ExceptionConfigError::Empty);
    }

    for (key, value) in &config.words {
        if key.is_empty() {
            return Err(ExceptionConfigError::EmptyKey);
        }
        if value.is_empty() {
            return Err(ExceptionConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.words)
}

pub struct ExceptionTable {
    words: HashMap<String, String>,
}

impl ExceptionTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), ExceptionConfigError> {
        parse_exceptions_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ExceptionConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ExceptionTable {
        static INSTANCE: OnceLock<ExceptionTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_EXCEPTIONS_TOML);
            let words = parse_exceptions_toml(toml_str).expect("exceptions TOML must be valid");
            ExceptionTable {
                words: words.into_iter().collect(),
            }
        })
    }

    /// Corrected form of `word`, on an exact whole-word match.
    pub fn correct(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Returns the embedded default exception TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_EXCEPTIONS_TOML
}
