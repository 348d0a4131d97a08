use tracing::trace;

use super::trie::GraphemeTrie;
use super::Script;
use crate::unicode::is_punctuation;

/// Split a word into graphemes of `script`.
///
/// Code points outside the inventory are kept when alphabetic or an ASCII
/// digit, kept when punctuation and `keep_punctuation` is set, and dropped
/// otherwise.
pub fn tokenize(word: &str, keep_punctuation: bool, script: Script) -> Vec<String> {
    match script {
        Script::Latin => tokenize_latin(word, keep_punctuation),
        Script::Cyrillic => tokenize_cyrillic(word, keep_punctuation),
    }
}

/// Right-to-left longest-suffix scan. Scanning from the end keeps
/// `ngngw` from being read as `ng` + `ngw`.
pub fn tokenize_latin(word: &str, keep_punctuation: bool) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let trie = GraphemeTrie::latin();
    let mut graphemes = Vec::with_capacity(chars.len());
    let mut end = chars.len();
    while end > 0 {
        match trie.longest_match(chars[..end].iter().rev().copied()) {
            Some(len) => {
                graphemes.push(chars[end - len..end].iter().collect());
                end -= len;
            }
            None => {
                if let Some(token) = fallback(chars[end - 1], keep_punctuation) {
                    graphemes.push(token);
                }
                end -= 1;
            }
        }
    }
    graphemes.reverse();
    graphemes
}

/// Left-to-right longest-prefix scan.
pub fn tokenize_cyrillic(word: &str, keep_punctuation: bool) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let trie = GraphemeTrie::cyrillic();
    let mut graphemes = Vec::with_capacity(chars.len());
    let mut start = 0;
    while start < chars.len() {
        match trie.longest_match(chars[start..].iter().copied()) {
            Some(len) => {
                graphemes.push(chars[start..start + len].iter().collect());
                start += len;
            }
            None => {
                if let Some(token) = fallback(chars[start], keep_punctuation) {
                    graphemes.push(token);
                }
                start += 1;
            }
        }
    }
    graphemes
}

fn fallback(c: char, keep_punctuation: bool) -> Option<String> {
    if c.is_alphabetic() || c.is_ascii_digit() || (keep_punctuation && is_punctuation(c)) {
        Some(c.to_string())
    } else {
        trace!(?c, "dropped");
        None
    }
}

/// Concatenate a grapheme sequence back into a string.
pub fn join<S: AsRef<str>>(graphemes: &[S]) -> String {
    graphemes.iter().map(AsRef::as_ref).collect()
}
