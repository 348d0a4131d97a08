//! Spellchecking of Latin words against the alphabet and the phonotactic
//! constraints of the language.

use tracing::debug;

use crate::grapheme::VowelSet;
use crate::unicode::{is_apostrophe_token, is_pass_through_token, APOSTROPHES};

/// Lowercase Latin alphabet, longest graphemes first.
pub const ALPHABET: [&str; 36] = [
    "ngngw", "ghhw", "ngng", "ghh", "ghw", "ngw", "gg", "gh", "kw", "ll", "mm", "ng", "nn", "qw",
    "rr", "wh", "a", "e", "f", "g", "h", "i", "k", "l", "m", "n", "p", "q", "r", "s", "t", "u",
    "v", "w", "y", "z",
];

/// Vowel pairs that never occur, besides `ee`.
const ILLEGAL_VOWEL_PAIRS: [&str; 12] = [
    "ia", "iu", "ie", "ai", "au", "ae", "ui", "ua", "ue", "ei", "ea", "eu",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Vowel,
    Consonant,
    Other,
}

/// Why a word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutsideAlphabet,
    ApostropheRun,
    ConsonantCluster,
    RepeatedConsonantLetter,
    VowelTriple,
    IllegalVowelPair,
    OnsetCluster,
}

/// Validate a tokenized word. `entry` is the word as written, used for the
/// letter-level checks the grapheme split hides.
pub fn is_legal<S: AsRef<str>>(graphemes: &[S], vowels: &VowelSet, entry: &str) -> bool {
    match check(graphemes, vowels, entry) {
        Ok(()) => true,
        Err(reason) => {
            debug!(entry, ?reason, "rejected");
            false
        }
    }
}

/// Same as [`is_legal`], reporting the first rule that failed.
pub fn check<S: AsRef<str>>(graphemes: &[S], vowels: &VowelSet, entry: &str) -> Result<(), Rejection> {
    let graphemes: Vec<&str> = graphemes.iter().map(AsRef::as_ref).collect();

    if !graphemes
        .iter()
        .all(|g| ALPHABET.contains(g) || is_pass_through_token(g))
    {
        return Err(Rejection::OutsideAlphabet);
    }

    let mut run = 0;
    for g in &graphemes {
        run = if is_apostrophe_token(g) { run + 1 } else { 0 };
        if run >= 3 {
            return Err(Rejection::ApostropheRun);
        }
    }

    let classes: Vec<Class> = graphemes
        .iter()
        .map(|g| {
            if vowels.contains(g) {
                Class::Vowel
            } else if is_pass_through_token(g) {
                Class::Other
            } else {
                Class::Consonant
            }
        })
        .collect();

    for segment in segments(&graphemes) {
        check_segment(&graphemes[segment.clone()], &classes[segment])?;
    }
    for part in entry.split(|c| APOSTROPHES.contains(&c)) {
        if has_repeated_consonant_letter(part, vowels) {
            return Err(Rejection::RepeatedConsonantLetter);
        }
    }
    check_onsets(&graphemes, &classes)
}

/// Index ranges between apostrophes.
fn segments(graphemes: &[&str]) -> Vec<std::ops::Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (i, g) in graphemes.iter().enumerate() {
        if is_apostrophe_token(g) {
            ranges.push(start..i);
            start = i + 1;
        }
    }
    ranges.push(start..graphemes.len());
    ranges
}

fn check_segment(graphemes: &[&str], classes: &[Class]) -> Result<(), Rejection> {
    let mut consonants = 0;
    for class in classes {
        consonants = if *class == Class::Consonant { consonants + 1 } else { 0 };
        if consonants >= 3 {
            return Err(Rejection::ConsonantCluster);
        }
    }

    for i in 0..graphemes.len() {
        if classes[i] != Class::Vowel {
            continue;
        }
        if let Some(next) = graphemes.get(i + 1).filter(|_| classes[i + 1] == Class::Vowel) {
            let pair = format!("{}{}", graphemes[i], next);
            if pair == "ee" || ILLEGAL_VOWEL_PAIRS.contains(&pair.as_str()) {
                return Err(Rejection::IllegalVowelPair);
            }
            if graphemes.get(i + 2) == Some(&graphemes[i]) && *next == graphemes[i] {
                return Err(Rejection::VowelTriple);
            }
        }
    }
    Ok(())
}

/// Three of the same consonant letter in a row, e.g. `lll`, which the
/// grapheme split reads as `l` + `ll`.
fn has_repeated_consonant_letter(text: &str, vowels: &VowelSet) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(3).any(|w| {
        w[0] == w[1]
            && w[1] == w[2]
            && w[0].is_alphabetic()
            && !vowels.contains(w[0].encode_utf8(&mut [0; 4]))
    })
}

/// No consonant cluster at the start of the word or after punctuation other
/// than an apostrophe.
fn check_onsets(graphemes: &[&str], classes: &[Class]) -> Result<(), Rejection> {
    let mut at_onset = true;
    let mut consonants = 0;
    for (g, class) in graphemes.iter().zip(classes) {
        match class {
            Class::Consonant if at_onset => {
                consonants += 1;
                if consonants >= 2 {
                    return Err(Rejection::OnsetCluster);
                }
            }
            Class::Other if !is_apostrophe_token(g) => {
                at_onset = true;
                consonants = 0;
            }
            _ => {
                at_onset = false;
                consonants = 0;
            }
        }
    }
    Ok(())
}
