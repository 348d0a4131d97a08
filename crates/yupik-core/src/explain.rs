use serde::Serialize;
use tracing::debug_span;

use crate::adjust::{apply_cyrillic_adjustments, highlight, redouble_with_changes};
use crate::grapheme::{join, tokenize_latin, Script, VowelSet};
use crate::pipeline::{is_legal, phonemic, syllabify_and_stress, Output};
use crate::settings::settings;
use crate::syllable::{syllabify, Syllable};
use crate::translit::{transliterate, Convention, Target};

/// Stage-by-stage diagnostic for one Latin word.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub word: String,
    pub tokens: Vec<String>,
    pub redoubled: Vec<String>,
    /// Indices into `redoubled` changed by redoubling.
    pub changed: Vec<usize>,
    /// `redoubled` joined, changed graphemes wrapped in `<font color>`.
    pub highlighted: String,
    /// Grapheme-for-grapheme Cyrillic, before adjustments.
    pub cyrillic: Vec<String>,
    pub adjusted: Vec<String>,
    pub syllables: Vec<Syllable>,
    pub stressed: String,
    pub stressed_cyrillic: String,
    pub phonemes: Vec<ExplainPhonemes>,
    pub legal: bool,
}

/// Transcription under one convention.
#[derive(Debug, Serialize)]
pub struct ExplainPhonemes {
    pub convention: Convention,
    pub phonemes: Vec<String>,
    /// Syllabified and stressed IPA-style rendering.
    pub stressed: String,
}

/// Run every stage on `word` and keep the intermediate results.
pub fn explain(word: &str) -> ExplainResult {
    let _span = debug_span!("explain", word).entered();

    let tokens = tokenize_latin(word, settings().tokenizer.keep_punctuation);
    let (redoubled, changed) = redouble_with_changes(&tokens);
    let highlighted = highlight(&redoubled, &changed, &settings().display.highlight_color);
    let cyrillic = transliterate(&redoubled, Script::Latin, Target::Script(Script::Cyrillic));
    let adjusted = apply_cyrillic_adjustments(&cyrillic);
    let syllables = syllabify(&tokenize_latin(word, false), &VowelSet::LATIN);

    let phonemes = Convention::ALL
        .into_iter()
        .map(|convention| ExplainPhonemes {
            convention,
            phonemes: phonemic(word, convention),
            stressed: syllabify_and_stress(word, Output::Phonemic(convention)),
        })
        .collect();

    ExplainResult {
        word: word.to_string(),
        tokens,
        redoubled,
        changed,
        highlighted,
        cyrillic,
        adjusted,
        syllables,
        stressed: syllabify_and_stress(word, Output::Latin),
        stressed_cyrillic: syllabify_and_stress(word, Output::Cyrillic),
        phonemes,
        legal: is_legal(word),
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== \"{}\" ({} graphemes, {} syllables) ===\n",
        result.word,
        result.tokens.len(),
        result.syllables.len(),
    ));

    let changed = if result.changed.is_empty() {
        String::new()
    } else {
        let indices: Vec<String> = result.changed.iter().map(|i| i.to_string()).collect();
        format!("  (changed: {})", indices.join(","))
    };
    let rows = [
        ("tokens", result.tokens.join("|")),
        ("redoubled", format!("{}{}", result.redoubled.join("|"), changed)),
        ("cyrillic", result.cyrillic.join("|")),
        ("adjusted", join(&result.adjusted)),
        ("stressed", result.stressed.clone()),
        ("stressed_cyr", result.stressed_cyrillic.clone()),
        ("legal", if result.legal { "yes" } else { "no" }.to_string()),
    ];
    for (label, value) in rows {
        out.push_str(&format!("  {:<13}{}\n", label, value));
    }

    out.push_str("\n=== Phonemes ===\n");
    let column = result
        .phonemes
        .iter()
        .map(|p| display_width(&p.phonemes.concat()))
        .max()
        .unwrap_or(0)
        + 2;
    for p in &result.phonemes {
        out.push_str(&format!(
            "  {:<13}{}{}\n",
            p.convention.name(),
            pad(&p.phonemes.concat(), column),
            p.stressed,
        ));
    }

    out
}

fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    UnicodeWidthStr::width(s)
}

/// Pad to a display width; combining marks take no columns.
fn pad(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w < width {
        format!("{}{}", s, " ".repeat(width - w))
    } else {
        s.to_string()
    }
}
