//! Syllabification over consonant/vowel classes.

use serde::Serialize;

use crate::grapheme::VowelSet;
use crate::settings::settings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    /// 1-based position in the word.
    pub index: usize,
    pub graphemes: Vec<String>,
}

impl Syllable {
    pub fn text(&self) -> String {
        self.graphemes.concat()
    }
}

/// Split graphemes into syllables.
///
/// A boundary falls before position `i` when `i-1` and `i` are both
/// consonants (and `i-1` is not the first grapheme), or when `i` is a
/// consonant between two vowels. The final grapheme always closes the last
/// syllable, so a word-final consonant is a coda.
pub fn syllabify<S: AsRef<str>>(graphemes: &[S], vowels: &VowelSet) -> Vec<Syllable> {
    let is_vowel: Vec<bool> = graphemes.iter().map(|g| vowels.contains(g.as_ref())).collect();
    let n = graphemes.len();
    let mut syllables = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (i, g) in graphemes.iter().enumerate() {
        if i > 0 && !is_vowel[i] {
            let consonant_cluster = !is_vowel[i - 1] && i - 1 > 0;
            let intervocalic = is_vowel[i - 1] && i != n - 1 && is_vowel[i + 1];
            if consonant_cluster || intervocalic {
                syllables.push(Syllable {
                    index: syllables.len() + 1,
                    graphemes: std::mem::take(&mut current),
                });
            }
        }
        current.push(g.as_ref().to_string());
    }
    if !current.is_empty() {
        syllables.push(Syllable {
            index: syllables.len() + 1,
            graphemes: current,
        });
    }
    syllables
}

/// Plain rendering with the configured boundary and optional indices: `nu1/na2`.
pub fn render_plain(syllables: &[Syllable]) -> String {
    let s = &settings().syllables;
    render_with(syllables, &s.boundary, s.show_index)
}

/// IPA rendering: syllables joined with the IPA boundary, no indices.
pub fn render_ipa(syllables: &[Syllable]) -> String {
    render_with(syllables, &settings().syllables.ipa_boundary, false)
}

pub fn render_with(syllables: &[Syllable], boundary: &str, show_index: bool) -> String {
    let mut out = String::new();
    for (k, syllable) in syllables.iter().enumerate() {
        if k > 0 {
            out.push_str(boundary);
        }
        out.push_str(&syllable.text());
        if show_index {
            out.push_str(&syllable.index.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapheme::tokenize_latin;

    fn split(word: &str) -> Vec<String> {
        syllabify(&tokenize_latin(word, false), &VowelSet::LATIN)
            .iter()
            .map(Syllable::text)
            .collect()
    }

    #[test]
    fn test_intervocalic_consonant_starts_syllable() {
        assert_eq!(split("nuna"), vec!["nu", "na"]);
    }

    #[test]
    fn test_cluster_splits_between_consonants() {
        assert_eq!(split("aghnaq"), vec!["agh", "naq"]);
        assert_eq!(split("qikmiq"), vec!["qik", "miq"]);
    }

    #[test]
    fn test_word_final_consonant_is_coda() {
        assert_eq!(split("ayaq"), vec!["a", "yaq"]);
        assert_eq!(split("aq"), vec!["aq"]);
    }

    #[test]
    fn test_long_vowel_stays_together() {
        assert_eq!(split("nanevaaq"), vec!["na", "ne", "vaaq"]);
    }

    #[test]
    fn test_initial_cluster_is_not_split() {
        // i-1 == 0 never opens a boundary
        assert_eq!(split("kfa"), vec!["kfa"]);
    }

    #[test]
    fn test_indices_are_one_based() {
        let syllables = syllabify(&tokenize_latin("nuna", false), &VowelSet::LATIN);
        assert_eq!(syllables[0].index, 1);
        assert_eq!(syllables[1].index, 2);
    }

    #[test]
    fn test_render() {
        let syllables = syllabify(&tokenize_latin("nuna", false), &VowelSet::LATIN);
        assert_eq!(render_plain(&syllables), "nu1/na2");
        assert_eq!(render_ipa(&syllables), "nu.na");
        assert_eq!(render_with(&syllables, "-", false), "nu-na");
    }

    #[test]
    fn test_empty() {
        assert!(syllabify::<&str>(&[], &VowelSet::LATIN).is_empty());
    }
}
