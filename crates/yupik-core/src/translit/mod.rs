//! Grapheme-for-grapheme conversion between the orthographies and the
//! phonemic conventions.

mod long_vowel;
mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use long_vowel::{merge_long_vowels, LongVowels};
pub use tables::{cyrillic_to_latin_table, latin_to_cyrillic_table, phoneme_table, Table};

use crate::grapheme::{join, tokenize_latin, Script};
use crate::unicode::{is_alphabetic_token, is_pass_through_token};

/// Phonemic transcription convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    Ipa,
    Krauss1975,
    Nagai2001,
}

impl Convention {
    pub const ALL: [Convention; 3] = [
        Convention::Ipa,
        Convention::Krauss1975,
        Convention::Nagai2001,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Convention::Ipa => "ipa",
            Convention::Krauss1975 => "krauss1975",
            Convention::Nagai2001 => "nagai2001",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown convention: {0}")]
pub struct ConventionParseError(pub String);

impl FromStr for Convention {
    type Err = ConventionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Convention::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConventionParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Script(Script),
    Phonemic(Convention),
}

/// Map each grapheme through the table for `from -> target`.
///
/// Graphemes without a mapping pass through when alphabetic. Script targets
/// also keep digits and punctuation; phonemic targets drop them.
pub fn transliterate<S: AsRef<str>>(graphemes: &[S], from: Script, target: Target) -> Vec<String> {
    match (from, target) {
        (Script::Latin, Target::Script(Script::Cyrillic)) => {
            map_script(graphemes, latin_to_cyrillic_table())
        }
        (Script::Cyrillic, Target::Script(Script::Latin)) => {
            map_script(graphemes, cyrillic_to_latin_table())
        }
        (Script::Latin, Target::Script(Script::Latin))
        | (Script::Cyrillic, Target::Script(Script::Cyrillic)) => graphemes
            .iter()
            .map(AsRef::as_ref)
            .filter(|g| is_alphabetic_token(g) || is_pass_through_token(g))
            .map(str::to_string)
            .collect(),
        (Script::Latin, Target::Phonemic(convention)) => map_phonemic(graphemes, convention),
        (Script::Cyrillic, Target::Phonemic(convention)) => {
            // Long vowels and ya/yu expand to several Latin graphemes.
            let latin = join(&map_script(graphemes, cyrillic_to_latin_table()));
            map_phonemic(&tokenize_latin(&latin, false), convention)
        }
    }
}

fn map_script<S: AsRef<str>>(graphemes: &[S], table: &Table) -> Vec<String> {
    graphemes
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|g| match table.get(g) {
            Some(mapped) => Some(mapped.to_string()),
            None if is_alphabetic_token(g) || is_pass_through_token(g) => Some(g.to_string()),
            None => None,
        })
        .collect()
}

fn map_phonemic<S: AsRef<str>>(graphemes: &[S], convention: Convention) -> Vec<String> {
    let table = phoneme_table(convention);
    graphemes
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|g| {
            table
                .get(g)
                .or_else(|| table.get(&g.to_lowercase()))
                .map(str::to_string)
                .or_else(|| is_alphabetic_token(g).then(|| g.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin(graphemes: &[&str], target: Target) -> Vec<String> {
        transliterate(graphemes, Script::Latin, target)
    }

    #[test]
    fn test_latin_to_cyrillic_graphemes() {
        assert_eq!(
            latin(&["n", "u", "n", "a"], Target::Script(Script::Cyrillic)),
            vec!["\u{043D}", "\u{0443}", "\u{043D}", "\u{0430}"]
        );
        assert_eq!(
            latin(&["Ngngw"], Target::Script(Script::Cyrillic)),
            vec!["\u{04A2}\u{044C}\u{04F1}"]
        );
    }

    #[test]
    fn test_cyrillic_long_vowel_to_latin() {
        assert_eq!(
            transliterate(&["\u{0430}\u{0304}"], Script::Cyrillic, Target::Script(Script::Latin)),
            vec!["aa"]
        );
    }

    #[test]
    fn test_pass_through_policy() {
        // unmapped letters survive both kinds of target
        assert_eq!(latin(&["x"], Target::Script(Script::Cyrillic)), vec!["x"]);
        assert_eq!(latin(&["x"], Target::Phonemic(Convention::Ipa)), vec!["x"]);
        // punctuation survives script targets only
        assert_eq!(
            latin(&["a", "'", "a"], Target::Script(Script::Cyrillic)),
            vec!["\u{0430}", "'", "\u{0430}"]
        );
        assert_eq!(
            latin(&["a", "'", "a"], Target::Phonemic(Convention::Krauss1975)),
            vec!["a", "a"]
        );
        // anything else is dropped
        assert_eq!(latin(&["-"], Target::Script(Script::Cyrillic)), Vec::<String>::new());
    }

    #[test]
    fn test_phonemic_ignores_case() {
        assert_eq!(
            latin(&["Ng", "a"], Target::Phonemic(Convention::Ipa)),
            vec!["\u{014B}", "\u{0251}"]
        );
    }

    #[test]
    fn test_cyrillic_to_phonemic() {
        assert_eq!(
            transliterate(
                &["\u{043D}", "\u{04EF}", "\u{043A}"],
                Script::Cyrillic,
                Target::Phonemic(Convention::Nagai2001)
            ),
            vec!["n", "u", "u", "k"]
        );
    }

    #[test]
    fn test_convention_parse() {
        assert_eq!("nagai2001".parse::<Convention>().unwrap(), Convention::Nagai2001);
        assert_eq!("IPA".parse::<Convention>().unwrap(), Convention::Ipa);
        assert!("jacobson".parse::<Convention>().is_err());
        assert_eq!(Convention::Krauss1975.to_string(), "krauss1975");
    }
}
