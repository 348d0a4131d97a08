//! Rhythmic stress on even-numbered moras.
//!
//! Vowels are counted left to right across the whole word; both moras of a
//! long vowel count. Every vowel whose count is even receives a stress mark
//! unless it sits in the final syllable. The mark is a combining accent
//! appended to the vowel grapheme:
//!
//! | position                       | result        |
//! |--------------------------------|---------------|
//! | long vowel, open syllable      | `[V, V̂]`      |
//! | long vowel, closed syllable    | `[V, V́]`      |
//! | second mora of a long vowel    | `[V́]`         |
//! | short vowel, open syllable     | `[V̂]`         |
//! | short vowel, closed syllable   | `[V́]`         |
//!
//! Schwa never takes a circumflex.

use tracing::trace;

use crate::grapheme::VowelSet;
use crate::settings::settings;
use crate::syllable::Syllable;
use crate::translit::{merge_long_vowels, LongVowels};
use crate::unicode::{is_alphabetic_token, LENGTH_MARK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stress {
    Acute,
    Circumflex,
}

impl Stress {
    pub const fn mark(self) -> char {
        match self {
            Stress::Acute => '\u{0301}',
            Stress::Circumflex => '\u{0302}',
        }
    }

    fn from_mark(c: char) -> Option<Self> {
        match c {
            '\u{0301}' => Some(Stress::Acute),
            '\u{0302}' => Some(Stress::Circumflex),
            _ => None,
        }
    }
}

/// Vowels that take an acute where others take a circumflex.
const SCHWAS: [&str; 4] = ["e", "\u{0259}", "\u{044B}", "\u{042B}"];

/// Split one trailing stress mark off a grapheme.
pub fn split_stress(grapheme: &str) -> (&str, Option<Stress>) {
    match grapheme.chars().next_back().and_then(Stress::from_mark) {
        Some(stress) => (&grapheme[..grapheme.len() - stress.mark().len_utf8()], Some(stress)),
        None => (grapheme, None),
    }
}

/// Append a stress mark, substituting an acute for a circumflex on schwa.
pub fn with_stress(grapheme: &str, stress: Stress) -> String {
    let stress = if stress == Stress::Circumflex && SCHWAS.contains(&grapheme) {
        Stress::Acute
    } else {
        stress
    };
    let mut out = String::with_capacity(grapheme.len() + 2);
    out.push_str(grapheme);
    out.push(stress.mark());
    out
}

pub fn is_stressed(grapheme: &str) -> bool {
    grapheme.chars().any(|c| Stress::from_mark(c).is_some())
}

/// Assign stress marks to syllabified graphemes.
pub fn stress(syllables: &[Syllable], vowels: &VowelSet) -> Vec<Syllable> {
    let last = syllables.len().saturating_sub(1);
    let mut moras = 0usize;
    let mut out = Vec::with_capacity(syllables.len());

    for (s, syllable) in syllables.iter().enumerate() {
        let g = &syllable.graphemes;
        let mut stressed = Vec::with_capacity(g.len());
        let mut i = 0;
        while i < g.len() {
            let cur = g[i].as_str();
            if !vowels.contains(cur) {
                stressed.push(cur.to_string());
                i += 1;
                continue;
            }
            moras += 1;
            if moras % 2 != 0 || s == last {
                stressed.push(cur.to_string());
                i += 1;
                continue;
            }

            let next = g.get(i + 1).map(String::as_str);
            let second_mora = i > 0 && g[i - 1] == cur;
            if next == Some(cur) && !second_mora {
                // first mora of a long vowel: the mark goes on the second copy
                let open = g.get(i + 2).map_or(true, |a| !is_alphabetic_token(a));
                let mark = if open { Stress::Circumflex } else { Stress::Acute };
                trace!(syllable = s + 1, vowel = cur, ?mark, "long");
                stressed.push(cur.to_string());
                stressed.push(with_stress(cur, mark));
                moras += 1;
                i += 2;
                continue;
            }

            let open = next.map_or(true, |n| !is_alphabetic_token(n));
            let mark = if !second_mora && open {
                Stress::Circumflex
            } else {
                Stress::Acute
            };
            trace!(syllable = s + 1, vowel = cur, ?mark, "short");
            stressed.push(with_stress(cur, mark));
            i += 1;
        }
        out.push(Syllable {
            index: syllable.index,
            graphemes: stressed,
        });
    }
    out
}

/// Present stressed phonemes the IPA way.
///
/// Long vowels are merged first. A stressed syllable loses its vowel
/// diacritic (a circumflex becomes a length mark) and is prefixed with the
/// configured stress mark.
pub fn format_ipa_stress(syllables: &[Syllable]) -> Vec<Syllable> {
    let mark = &settings().stress.ipa_mark;
    syllables
        .iter()
        .map(|syllable| {
            let merged = merge_long_vowels(&syllable.graphemes, LongVowels::Phonemic);
            let was_stressed = merged.iter().any(|g| is_stressed(g));
            let mut graphemes: Vec<String> = Vec::with_capacity(merged.len() + 1);
            if was_stressed {
                graphemes.push(mark.clone());
            }
            graphemes.extend(merged.iter().map(|g| unstress_phoneme(g)));
            Syllable {
                index: syllable.index,
                graphemes,
            }
        })
        .collect()
}

fn unstress_phoneme(grapheme: &str) -> String {
    grapheme
        .chars()
        .filter_map(|c| match Stress::from_mark(c) {
            Some(Stress::Acute) => None,
            Some(Stress::Circumflex) => Some(LENGTH_MARK),
            None => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapheme::tokenize_latin;
    use crate::syllable::{render_ipa, render_with, syllabify};

    fn stressed(word: &str) -> String {
        let syllables = syllabify(&tokenize_latin(word, false), &VowelSet::LATIN);
        render_with(&stress(&syllables, &VowelSet::LATIN), "/", false)
    }

    fn phonemic(graphemes: &[&str]) -> String {
        let syllables = syllabify(graphemes, &VowelSet::PHONEMIC);
        render_ipa(&format_ipa_stress(&stress(&syllables, &VowelSet::PHONEMIC)))
    }

    #[test]
    fn test_split_stress() {
        assert_eq!(split_stress("a\u{0301}"), ("a", Some(Stress::Acute)));
        assert_eq!(split_stress("a\u{0302}"), ("a", Some(Stress::Circumflex)));
        assert_eq!(split_stress("ng"), ("ng", None));
        assert_eq!(split_stress(""), ("", None));
    }

    #[test]
    fn test_schwa_takes_acute() {
        assert_eq!(with_stress("e", Stress::Circumflex), "e\u{0301}");
        assert_eq!(with_stress("\u{044B}", Stress::Circumflex), "\u{044B}\u{0301}");
        assert_eq!(with_stress("a", Stress::Circumflex), "a\u{0302}");
    }

    #[test]
    fn test_short_vowel_open_syllable() {
        // a1 | ya2 | ka3 | ta4: moras 2 is in an open non-final syllable
        assert_eq!(stressed("ayakata"), "a/ya\u{0302}/ka/ta");
    }

    #[test]
    fn test_short_vowel_closed_syllable() {
        assert_eq!(stressed("aqsaqtaq"), "aq/sa\u{0301}q/taq");
    }

    #[test]
    fn test_final_syllable_never_stressed() {
        assert_eq!(stressed("nuna"), "nu/na");
        assert_eq!(stressed("aa"), "aa");
    }

    #[test]
    fn test_long_vowel_open_syllable() {
        // a | naa | taq: the long vowel's first mora is mora 2
        assert_eq!(stressed("anaataq"), "a/naa\u{0302}/taq");
    }

    #[test]
    fn test_long_vowel_closed_syllable() {
        assert_eq!(stressed("anaaqtaq"), "a/naa\u{0301}q/taq");
    }

    #[test]
    fn test_second_mora_of_long_vowel() {
        // aa | ta | ka: second mora of the long vowel is mora 2
        assert_eq!(stressed("aataka"), "aa\u{0301}/ta/ka");
    }

    #[test]
    fn test_triple_vowel_falls_back_to_acute() {
        assert_eq!(stressed("aaataq"), "aa\u{0301}a/taq");
    }

    #[test]
    fn test_mark_count_is_half_the_non_final_moras() {
        for word in ["ayakata", "nanevaaq", "qikmiq", "angyaghllak", "aataka"] {
            let syllables = syllabify(&tokenize_latin(word, false), &VowelSet::LATIN);
            let non_final_moras: usize = syllables[..syllables.len() - 1]
                .iter()
                .flat_map(|s| s.graphemes.iter())
                .filter(|g| VowelSet::LATIN.contains(g))
                .count();
            let marks = stress(&syllables, &VowelSet::LATIN)
                .iter()
                .flat_map(|s| s.graphemes.iter())
                .filter(|g| is_stressed(g))
                .count();
            let expected = non_final_moras / 2;
            assert_eq!(marks, expected, "word {word}");
        }
    }

    #[test]
    fn test_ipa_short_stress_lengthens() {
        // ɑ | jɑ̂ | kɑ -> ɑ.'jɑː.kɑ
        assert_eq!(
            phonemic(&["\u{0251}", "j", "\u{0251}", "k", "\u{0251}"]),
            "\u{0251}.'j\u{0251}\u{02D0}.k\u{0251}"
        );
    }

    #[test]
    fn test_ipa_long_vowel_merges() {
        // a | n a a q | t a q, stressed closed long vowel
        assert_eq!(
            phonemic(&["a", "n", "a", "a", "q", "t", "a", "q"]),
            "a.'na\u{02D0}q.taq"
        );
    }

    #[test]
    fn test_ipa_unstressed_long_vowel() {
        assert_eq!(phonemic(&["n", "u", "u", "k"]), "nu\u{02D0}k");
    }
}
