//! Whole-word conversions composed from the individual stages.

use tracing::{debug, debug_span};

use crate::adjust::{
    apply_cyrillic_adjustments, apply_cyrillic_to_syllables, redouble, undo_cyrillic_adjustments,
    undouble,
};
use crate::exceptions::ExceptionTable;
use crate::grapheme::{join, tokenize_cyrillic, tokenize_latin, Script, VowelSet};
use crate::settings::settings;
use crate::stress::{format_ipa_stress, stress};
use crate::syllable::{render_ipa, render_plain, syllabify};
use crate::translit::{merge_long_vowels, transliterate, Convention, LongVowels, Target};
use crate::validate;

/// What `syllabify_and_stress` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Latin,
    Cyrillic,
    Phonemic(Convention),
}

/// Latin word to Cyrillic spelling.
pub fn latin_to_cyrillic(word: &str) -> String {
    let _span = debug_span!("latin_to_cyrillic", word).entered();
    let tokens = tokenize_latin(word, settings().tokenizer.keep_punctuation);
    let cyrillic = transliterate(
        &redouble(&tokens),
        Script::Latin,
        Target::Script(Script::Cyrillic),
    );
    let adjusted = apply_cyrillic_adjustments(&cyrillic);
    debug!(tokens = tokens.len(), graphemes = adjusted.len());
    join(&adjusted)
}

/// Cyrillic word to Latin spelling.
///
/// Words where `г` stands for `h` are restored from the exception table.
pub fn cyrillic_to_latin(word: &str) -> String {
    let _span = debug_span!("cyrillic_to_latin", word).entered();
    let keep = settings().tokenizer.keep_punctuation;
    let tokens = tokenize_cyrillic(word, keep);
    let latin = transliterate(
        &undo_cyrillic_adjustments(&tokens),
        Script::Cyrillic,
        Target::Script(Script::Latin),
    );
    // Long vowels and ya/yu come back as several Latin letters.
    let latin = tokenize_latin(&join(&latin), keep);
    let written = join(&undouble(&latin));
    let corrected = match ExceptionTable::global().correct(&written) {
        Some(corrected) => {
            debug!(%written, corrected, "exception");
            corrected.to_string()
        }
        None => written,
    };
    join(&tokenize_latin(&corrected, keep))
}

/// Phonemic transcription of a Latin word, long vowels merged.
pub fn phonemic(word: &str, convention: Convention) -> Vec<String> {
    let _span = debug_span!("phonemic", word, %convention).entered();
    let phonemes = underlying_phonemes(word, convention);
    let merged = merge_long_vowels(&phonemes, LongVowels::Phonemic);
    debug!(phonemes = merged.len());
    merged
}

/// Syllabified and stressed rendering of a Latin word.
pub fn syllabify_and_stress(word: &str, output: Output) -> String {
    let _span = debug_span!("syllabify_and_stress", word, ?output).entered();
    match output {
        Output::Latin => {
            let tokens = tokenize_latin(word, false);
            let syllables = syllabify(&tokens, &VowelSet::LATIN);
            render_plain(&stress(&syllables, &VowelSet::LATIN))
        }
        Output::Cyrillic => {
            let tokens = redouble(&tokenize_latin(word, false));
            let cyrillic = transliterate(&tokens, Script::Latin, Target::Script(Script::Cyrillic));
            let syllables = syllabify(&cyrillic, &VowelSet::CYRILLIC);
            let stressed = stress(&syllables, &VowelSet::CYRILLIC);
            render_plain(&apply_cyrillic_to_syllables(&stressed))
        }
        Output::Phonemic(convention) => {
            let phonemes = underlying_phonemes(word, convention);
            let syllables = syllabify(&phonemes, &VowelSet::PHONEMIC);
            let stressed = stress(&syllables, &VowelSet::PHONEMIC);
            render_ipa(&format_ipa_stress(&stressed))
        }
    }
}

/// Spellcheck a Latin word. Known irregular forms are replaced by their
/// corrected spelling first.
pub fn is_legal(word: &str) -> bool {
    let lower = word.to_lowercase();
    let entry = ExceptionTable::global().correct(&lower).unwrap_or(&lower);
    let tokens = tokenize_latin(entry, true);
    validate::is_legal(&tokens, &VowelSet::LATIN, entry)
}

/// One phoneme per redoubled grapheme, long vowels still doubled.
fn underlying_phonemes(word: &str, convention: Convention) -> Vec<String> {
    let tokens = redouble(&tokenize_latin(&word.to_lowercase(), false));
    transliterate(&tokens, Script::Latin, Target::Phonemic(convention))
}
