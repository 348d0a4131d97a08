use crate::stress::{split_stress, Stress};
use crate::unicode::{is_uppercase_token, LENGTH_MARK};

/// How a doubled vowel is written once merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongVowels {
    /// Macron forms: `ӣ а̄ ӯ`.
    Cyrillic,
    /// Length mark: `iː`, over-long `íːː` under a circumflex.
    Phonemic,
}

const CYRILLIC_LONG: [(&str, &str); 6] = [
    ("\u{0438}", "\u{04E3}"),
    ("\u{0430}", "\u{0430}\u{0304}"),
    ("\u{0443}", "\u{04EF}"),
    ("\u{0418}", "\u{04E2}"),
    ("\u{0410}", "\u{0410}\u{0304}"),
    ("\u{0423}", "\u{04EE}"),
];

const PHONEMIC_LONG: [&str; 4] = ["i", "\u{0251}", "a", "u"];

/// Collapse two identical adjacent vowels into one long vowel.
///
/// The second copy may carry a stress mark, which moves onto the long form.
/// A capital vowel followed by its lowercase copy merges into the capital.
pub fn merge_long_vowels<S: AsRef<str>>(graphemes: &[S], style: LongVowels) -> Vec<String> {
    let mut out = Vec::with_capacity(graphemes.len());
    let mut i = 0;
    while i < graphemes.len() {
        let cur = graphemes[i].as_ref();
        let merged = graphemes
            .get(i + 1)
            .and_then(|next| style.lengthen(cur, next.as_ref()));
        match merged {
            Some(long) => {
                out.push(long);
                i += 2;
            }
            None => {
                out.push(cur.to_string());
                i += 1;
            }
        }
    }
    out
}

impl LongVowels {
    fn lengthen(self, first: &str, second: &str) -> Option<String> {
        let (base, stress) = split_stress(second);
        match self {
            LongVowels::Cyrillic => {
                let &(short, long) = CYRILLIC_LONG.iter().find(|(s, _)| *s == first)?;
                let same = base == short || (is_uppercase_token(short) && base.to_uppercase() == short);
                if !same {
                    return None;
                }
                let mut out = long.to_string();
                if let Some(stress) = stress {
                    out.push(stress.mark());
                }
                Some(out)
            }
            LongVowels::Phonemic => {
                if !PHONEMIC_LONG.contains(&first) || base != first {
                    return None;
                }
                let mut out = first.to_string();
                match stress {
                    None => out.push(LENGTH_MARK),
                    Some(Stress::Acute) => {
                        out.push(Stress::Acute.mark());
                        out.push(LENGTH_MARK);
                    }
                    Some(Stress::Circumflex) => {
                        out.push(Stress::Acute.mark());
                        out.push(LENGTH_MARK);
                        out.push(LENGTH_MARK);
                    }
                }
                Some(out)
            }
        }
    }
}
