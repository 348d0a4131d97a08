//! Public surface of the St. Lawrence Island Yupik orthography engine.
//!
//! The engine itself lives in `yupik_core`; this crate re-exports the types a
//! caller needs and wraps configuration loading in a single error type.

pub mod api;
pub mod trace_init;

pub use api::{
    cyrillic_to_latin, default_exceptions, default_settings, engine_version, explain,
    explain_text, is_legal, latin_to_cyrillic, load_exceptions, load_settings, parse_convention,
    phonemic, syllabify_and_stress, tokenize, transliterate, EngineError,
};
pub use trace_init::init_tracing;
pub use yupik_core::explain::ExplainResult;
pub use yupik_core::grapheme::Script;
pub use yupik_core::pipeline::Output;
pub use yupik_core::translit::{Convention, Target};
