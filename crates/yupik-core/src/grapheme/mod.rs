//! Grapheme inventories and tokenizers for the Latin and Cyrillic orthographies.
//!
//! Multi-letter graphemes (`ngngw`, `ghh`, `кӱ`, `ңьӱ`) are matched with a
//! character trie built once from each inventory.

mod inventory;
mod tokenize;
mod trie;
mod vowels;

use std::fmt;

pub use inventory::{CYRILLIC_GRAPHEMES, LATIN_GRAPHEMES};
pub use tokenize::{join, tokenize, tokenize_cyrillic, tokenize_latin};
pub use trie::GraphemeTrie;
pub use vowels::VowelSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Cyrillic,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Latin => f.write_str("latin"),
            Script::Cyrillic => f.write_str("cyrillic"),
        }
    }
}
