//! Grapheme-to-grapheme mapping tables.
//!
//! Each table is built once from ordered layers; a later layer overrides an
//! earlier one, which is how the phonemic conventions share a common base.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::Convention;

type Entries = &'static [(&'static str, &'static str)];

pub struct Table {
    map: HashMap<&'static str, &'static str>,
}

impl Table {
    fn build(layers: &[Entries]) -> Self {
        let mut map = HashMap::new();
        for layer in layers {
            for &(from, to) in layer.iter() {
                map.insert(from, to);
            }
        }
        Table { map }
    }

    pub fn get(&self, grapheme: &str) -> Option<&'static str> {
        self.map.get(grapheme).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

pub fn latin_to_cyrillic_table() -> &'static Table {
    static INSTANCE: OnceLock<Table> = OnceLock::new();
    INSTANCE.get_or_init(|| Table::build(&[LATIN_TO_CYRILLIC]))
}

pub fn cyrillic_to_latin_table() -> &'static Table {
    static INSTANCE: OnceLock<Table> = OnceLock::new();
    INSTANCE.get_or_init(|| Table::build(&[CYRILLIC_TO_LATIN]))
}

pub fn phoneme_table(convention: Convention) -> &'static Table {
    static IPA: OnceLock<Table> = OnceLock::new();
    static KRAUSS: OnceLock<Table> = OnceLock::new();
    static NAGAI: OnceLock<Table> = OnceLock::new();
    match convention {
        Convention::Ipa => IPA.get_or_init(|| Table::build(&[PHONEME_BASE, IPA_OVERRIDES])),
        Convention::Krauss1975 => {
            KRAUSS.get_or_init(|| Table::build(&[PHONEME_BASE, KRAUSS_OVERRIDES]))
        }
        Convention::Nagai2001 => {
            NAGAI.get_or_init(|| Table::build(&[PHONEME_BASE, NAGAI_OVERRIDES]))
        }
    }
}

const LATIN_TO_CYRILLIC: Entries = &[
    // vowels
    ("i", "\u{0438}"),
    ("a", "\u{0430}"),
    ("u", "\u{0443}"),
    ("e", "\u{044B}"),
    ("I", "\u{0418}"),
    ("A", "\u{0410}"),
    ("U", "\u{0423}"),
    ("E", "\u{042B}"),
    // stops
    ("p", "\u{043F}"),
    ("t", "\u{0442}"),
    ("k", "\u{043A}"),
    ("kw", "\u{043A}\u{04F1}"),
    ("q", "\u{049B}"),
    ("qw", "\u{049B}\u{04F1}"),
    ("P", "\u{041F}"),
    ("T", "\u{0422}"),
    ("K", "\u{041A}"),
    ("Kw", "\u{041A}\u{04F1}"),
    ("Q", "\u{049A}"),
    ("Qw", "\u{049A}\u{04F1}"),
    // voiced fricatives
    ("v", "\u{0432}"),
    ("l", "\u{043B}"),
    ("z", "\u{0437}"),
    ("y", "\u{04E5}"),
    ("r", "\u{0440}"),
    ("g", "\u{0433}"),
    ("w", "\u{04F1}"),
    ("gh", "\u{04F7}"),
    ("ghw", "\u{04F7}\u{04F1}"),
    ("V", "\u{0412}"),
    ("L", "\u{041B}"),
    ("Z", "\u{0417}"),
    ("Y", "\u{04E4}"),
    ("R", "\u{0420}"),
    ("G", "\u{0413}"),
    ("W", "\u{04F0}"),
    ("Gh", "\u{04F6}"),
    ("Ghw", "\u{04F6}\u{04F1}"),
    // voiceless fricatives
    ("f", "\u{0444}"),
    ("ll", "\u{043B}\u{044C}"),
    ("s", "\u{0441}"),
    ("rr", "\u{0448}"),
    ("gg", "\u{0445}"),
    ("wh", "\u{0445}\u{04F1}"),
    ("ghh", "\u{04B3}"),
    ("ghhw", "\u{04B3}\u{04F1}"),
    ("h", "\u{0433}"),
    ("F", "\u{0424}"),
    ("Ll", "\u{041B}\u{044C}"),
    ("S", "\u{0421}"),
    ("Rr", "\u{0428}"),
    ("Gg", "\u{0425}"),
    ("Wh", "\u{0425}\u{04F1}"),
    ("Ghh", "\u{04B2}"),
    ("Ghhw", "\u{04B2}\u{04F1}"),
    ("H", "\u{0413}"),
    // voiced nasals
    ("m", "\u{043C}"),
    ("n", "\u{043D}"),
    ("ng", "\u{04A3}"),
    ("ngw", "\u{04A3}\u{04F1}"),
    ("M", "\u{041C}"),
    ("N", "\u{041D}"),
    ("Ng", "\u{04A2}"),
    ("Ngw", "\u{04A2}\u{04F1}"),
    // voiceless nasals
    ("mm", "\u{043C}\u{044C}"),
    ("nn", "\u{043D}\u{044C}"),
    ("ngng", "\u{04A3}\u{044C}"),
    ("ngngw", "\u{04A3}\u{044C}\u{04F1}"),
    ("Mm", "\u{041C}\u{044C}"),
    ("Nn", "\u{041D}\u{044C}"),
    ("Ngng", "\u{04A2}\u{044C}"),
    ("Ngngw", "\u{04A2}\u{044C}\u{04F1}"),
];

/// Inverse of [`LATIN_TO_CYRILLIC`] plus the long vowels and ya/yu.
///
/// `г` reads back as `g`; the `h` words are restored by the exception
/// dictionary.
const CYRILLIC_TO_LATIN: Entries = &[
    // short vowels
    ("\u{0438}", "i"),
    ("\u{0430}", "a"),
    ("\u{0443}", "u"),
    ("\u{044B}", "e"),
    ("\u{0418}", "I"),
    ("\u{0410}", "A"),
    ("\u{0423}", "U"),
    ("\u{042B}", "E"),
    // long vowels
    ("\u{04E3}", "ii"),
    ("\u{0438}\u{0304}", "ii"),
    ("\u{0430}\u{0304}", "aa"),
    ("\u{0101}", "aa"),
    ("a\u{0304}", "aa"),
    ("\u{04EF}", "uu"),
    ("\u{0443}\u{0304}", "uu"),
    ("\u{04E2}", "Ii"),
    ("\u{0418}\u{0304}", "Ii"),
    ("\u{0410}\u{0304}", "Aa"),
    ("\u{0100}", "Aa"),
    ("A\u{0304}", "Aa"),
    ("\u{04EE}", "Uu"),
    ("\u{0423}\u{0304}", "Uu"),
    // ya, yu
    ("\u{044F}", "ya"),
    ("\u{044E}", "yu"),
    ("\u{042F}", "Ya"),
    ("\u{042E}", "Yu"),
    ("\u{044F}\u{0304}", "yaa"),
    ("\u{044E}\u{0304}", "yuu"),
    ("\u{042F}\u{0304}", "Yaa"),
    ("\u{042E}\u{0304}", "Yuu"),
    // stops
    ("\u{043F}", "p"),
    ("\u{0442}", "t"),
    ("\u{043A}", "k"),
    ("\u{043A}\u{04F1}", "kw"),
    ("\u{049B}", "q"),
    ("\u{049B}\u{04F1}", "qw"),
    ("\u{041F}", "P"),
    ("\u{0422}", "T"),
    ("\u{041A}", "K"),
    ("\u{041A}\u{04F1}", "Kw"),
    ("\u{049A}", "Q"),
    ("\u{049A}\u{04F1}", "Qw"),
    // voiced fricatives
    ("\u{0432}", "v"),
    ("\u{043B}", "l"),
    ("\u{0437}", "z"),
    ("\u{0438}\u{0308}", "y"),
    ("\u{04E5}", "y"),
    ("\u{0440}", "r"),
    ("\u{0433}", "g"),
    ("\u{04F1}", "w"),
    ("\u{04F7}", "gh"),
    ("\u{04F7}\u{04F1}", "ghw"),
    ("\u{0412}", "V"),
    ("\u{041B}", "L"),
    ("\u{0417}", "Z"),
    ("\u{0418}\u{0308}", "Y"),
    ("\u{04E4}", "Y"),
    ("\u{0420}", "R"),
    ("\u{0413}", "G"),
    ("\u{04F0}", "W"),
    ("\u{04F6}", "Gh"),
    ("\u{04F6}\u{04F1}", "Ghw"),
    // voiceless fricatives
    ("\u{0444}", "f"),
    ("\u{043B}\u{044C}", "ll"),
    ("\u{0441}", "s"),
    ("\u{0448}", "rr"),
    ("\u{0445}", "gg"),
    ("\u{0445}\u{04F1}", "wh"),
    ("\u{04B3}", "ghh"),
    ("\u{04B3}\u{04F1}", "ghhw"),
    ("\u{0424}", "F"),
    ("\u{041B}\u{044C}", "Ll"),
    ("\u{0421}", "S"),
    ("\u{0428}", "Rr"),
    ("\u{0425}", "Gg"),
    ("\u{0425}\u{04F1}", "Wh"),
    ("\u{04B2}", "Ghh"),
    ("\u{04B2}\u{04F1}", "Ghhw"),
    // voiced nasals
    ("\u{043C}", "m"),
    ("\u{043D}", "n"),
    ("\u{04A3}", "ng"),
    ("\u{04A3}\u{04F1}", "ngw"),
    ("\u{041C}", "M"),
    ("\u{041D}", "N"),
    ("\u{04A2}", "Ng"),
    ("\u{04A2}\u{04F1}", "Ngw"),
    // voiceless nasals
    ("\u{043C}\u{044C}", "mm"),
    ("\u{043D}\u{044C}", "nn"),
    ("\u{04A3}\u{044C}", "ngng"),
    ("\u{04A3}\u{044C}\u{04F1}", "ngngw"),
    ("\u{041C}\u{044C}", "Mm"),
    ("\u{041D}\u{044C}", "Nn"),
    ("\u{04A2}\u{044C}", "Ngng"),
    ("\u{04A2}\u{044C}\u{04F1}", "Ngngw"),
];

/// Phonemes every convention agrees on.
const PHONEME_BASE: Entries = &[
    ("i", "i"),
    ("u", "u"),
    ("e", "\u{0259}"),
    ("p", "p"),
    ("t", "t"),
    ("k", "k"),
    ("kw", "k\u{02B7}"),
    ("q", "q"),
    ("qw", "q\u{02B7}"),
    ("v", "v"),
    ("l", "l"),
    ("z", "z"),
    ("g", "\u{0263}"),
    ("w", "\u{0263}\u{02B7}"),
    ("f", "f"),
    ("ll", "\u{026C}"),
    ("s", "s"),
    ("gg", "x"),
    ("wh", "x\u{02B7}"),
    ("h", "h"),
    ("m", "m"),
    ("n", "n"),
    ("ng", "\u{014B}"),
    ("ngw", "\u{014B}\u{02B7}"),
    ("mm", "m\u{0325}"),
    ("nn", "n\u{0325}"),
];

const IPA_OVERRIDES: Entries = &[
    ("a", "\u{0251}"),
    ("y", "j"),
    ("r", "\u{027B}"),
    ("gh", "\u{0281}"),
    ("ghw", "\u{0281}\u{02B7}"),
    ("rr", "\u{0282}"),
    ("ghh", "\u{03C7}"),
    ("ghhw", "\u{03C7}\u{02B7}"),
    ("ngng", "\u{014B}\u{030A}"),
    ("ngngw", "\u{014B}\u{030A}\u{02B7}"),
];

const KRAUSS_OVERRIDES: Entries = &[
    ("a", "a"),
    ("y", "y"),
    ("r", "r"),
    ("gh", "\u{0263}\u{0323}"),
    ("ghw", "\u{0263}\u{0323}\u{02B7}"),
    ("rr", "r\u{0325}"),
    ("ghh", "x\u{0323}"),
    ("ghhw", "x\u{0323}\u{02B7}"),
    ("ngng", "\u{014B}\u{0325}"),
    ("ngngw", "\u{014B}\u{0325}\u{02B7}"),
];

const NAGAI_OVERRIDES: Entries = &[
    ("a", "a"),
    ("y", "y"),
    ("r", "r"),
    ("gh", "\u{0263}\u{0307}"),
    ("ghw", "\u{0263}\u{0307}\u{02B7}"),
    ("rr", "r\u{0325}"),
    ("ghh", "x\u{0323}"),
    ("ghhw", "x\u{0323}\u{02B7}"),
    ("ngng", "\u{014B}\u{030A}"),
    ("ngngw", "\u{014B}\u{030A}\u{02B7}"),
];
