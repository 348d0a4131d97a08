//! Character-level classification shared by the tokenizers, tables and rules.

/// Punctuation the tokenizers keep when asked to.
///
/// U+2019 is the typographic apostrophe and U+2500 the box-drawing line used
/// as a dash in the source texts.
pub const PUNCTUATION: [char; 9] = ['\'', '\u{2019}', '.', ',', '!', '?', ';', ':', '\u{2500}'];

pub const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Cyrillic soft sign, used as the devoicing sign.
pub const SOFT_SIGN: &str = "\u{044C}";

/// Cyrillic small U with dieresis, the labialization mark.
pub const LABIAL_MARK: &str = "\u{04F1}";

pub const COMBINING_MACRON: char = '\u{0304}';
pub const LENGTH_MARK: char = '\u{02D0}';

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// True for a token made of exactly one punctuation character.
pub fn is_punctuation_token(s: &str) -> bool {
    single_char(s).is_some_and(is_punctuation)
}

pub fn is_apostrophe_token(s: &str) -> bool {
    single_char(s).is_some_and(|c| APOSTROPHES.contains(&c))
}

pub fn is_digit_token(s: &str) -> bool {
    single_char(s).is_some_and(|c| c.is_ascii_digit())
}

/// A grapheme is alphabetic when its base (first) code point is.
pub fn is_alphabetic_token(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_alphabetic)
}

/// Tokens the tokenizers emit besides graphemes: digits and punctuation.
pub fn is_pass_through_token(s: &str) -> bool {
    is_digit_token(s) || is_punctuation_token(s)
}

/// Upper-case the first code point only, so `ль` becomes `Ль` rather than `ЛЬ`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn is_uppercase_token(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
