//! Function surface over `yupik_core`.
//!
//! Word operations are total and return plain values. Only configuration
//! loading can fail, and it fails with [`EngineError`].

mod types;

pub use types::EngineError;

use yupik_core::exceptions::{self, ExceptionTable};
use yupik_core::explain::{self as diagnostics, ExplainResult};
use yupik_core::grapheme::{self, Script};
use yupik_core::pipeline::{self, Output};
use yupik_core::settings;
use yupik_core::translit::{self, Convention, Target};

// ---------------------------------------------------------------------------
// Word operations
// ---------------------------------------------------------------------------

pub fn tokenize(word: &str, keep_punctuation: bool, script: Script) -> Vec<String> {
    grapheme::tokenize(word, keep_punctuation, script)
}

pub fn transliterate<S: AsRef<str>>(graphemes: &[S], from: Script, target: Target) -> Vec<String> {
    translit::transliterate(graphemes, from, target)
}

pub fn latin_to_cyrillic(word: &str) -> String {
    pipeline::latin_to_cyrillic(word)
}

pub fn cyrillic_to_latin(word: &str) -> String {
    pipeline::cyrillic_to_latin(word)
}

/// Phonemes under `convention`, or under the configured default when `None`.
pub fn phonemic(word: &str, convention: Option<Convention>) -> Vec<String> {
    let convention = convention.unwrap_or(settings::settings().transcription.convention);
    pipeline::phonemic(word, convention)
}

pub fn syllabify_and_stress(word: &str, output: Output) -> String {
    pipeline::syllabify_and_stress(word, output)
}

pub fn is_legal(word: &str) -> bool {
    pipeline::is_legal(word)
}

pub fn explain(word: &str) -> ExplainResult {
    diagnostics::explain(word)
}

pub fn explain_text(word: &str) -> String {
    diagnostics::format_text(&diagnostics::explain(word))
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Replace the default settings. Must run before any word operation.
pub fn load_settings(toml_content: &str) -> Result<(), EngineError> {
    settings::init_custom(toml_content.to_string())?;
    Ok(())
}

/// Replace the exception dictionary. Must run before any Cyrillic to Latin
/// conversion or spellcheck.
pub fn load_exceptions(toml_content: &str) -> Result<(), EngineError> {
    ExceptionTable::init_custom(toml_content.to_string())?;
    Ok(())
}

pub fn default_settings() -> &'static str {
    settings::default_toml()
}

pub fn default_exceptions() -> &'static str {
    exceptions::default_toml()
}

pub fn parse_convention(name: &str) -> Result<Convention, EngineError> {
    Ok(name.parse::<Convention>()?)
}

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
