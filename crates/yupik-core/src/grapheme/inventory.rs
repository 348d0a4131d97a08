//! Grapheme inventories, longest entries first.

/// Latin (Jacobson) graphemes, matched by suffix.
pub const LATIN_GRAPHEMES: &[&str] = &[
    "Ngngw", "ngngw", //
    "Ghhw", "ghhw", "Ngng", "ngng", //
    "Ghh", "ghh", "Ghw", "ghw", "Ngw", "ngw", //
    "Gg", "gg", "Gh", "gh", "Kw", "kw", "Ll", "ll", "Mm", "mm", "Ng", "ng", "Nn", "nn", "Qw",
    "qw", "Rr", "rr", "Wh", "wh", //
    "A", "a", "E", "e", "F", "f", "G", "g", "H", "h", "I", "i", "K", "k", "L", "l", "M", "m",
    "N", "n", "P", "p", "Q", "q", "R", "r", "S", "s", "T", "t", "U", "u", "V", "v", "W", "w",
    "Y", "y", "Z", "z",
];

/// Cyrillic graphemes, matched by prefix.
pub const CYRILLIC_GRAPHEMES: &[&str] = &[
    // labialized voiceless velar nasal
    "\u{04A2}\u{044C}\u{04F1}",
    "\u{04A3}\u{044C}\u{04F1}",
    // consonant digraphs
    "\u{04A2}\u{044C}",
    "\u{04A3}\u{044C}",
    "\u{04A2}\u{04F1}",
    "\u{04A3}\u{04F1}",
    "\u{04B2}\u{04F1}",
    "\u{04B3}\u{04F1}",
    "\u{04F6}\u{04F1}",
    "\u{04F7}\u{04F1}",
    "\u{041A}\u{04F1}",
    "\u{043A}\u{04F1}",
    "\u{041B}\u{044C}",
    "\u{043B}\u{044C}",
    "\u{041D}\u{044C}",
    "\u{043D}\u{044C}",
    "\u{0425}\u{04F1}",
    "\u{0445}\u{04F1}",
    "\u{041C}\u{044C}",
    "\u{043C}\u{044C}",
    "\u{049A}\u{04F1}",
    "\u{049B}\u{04F1}",
    // long vowels with a combining macron
    "\u{0418}\u{0304}",
    "\u{0438}\u{0304}",
    "\u{0410}\u{0304}",
    "\u{0430}\u{0304}",
    "A\u{0304}",
    "a\u{0304}",
    "\u{0423}\u{0304}",
    "\u{0443}\u{0304}",
    "\u{042E}\u{0304}",
    "\u{044E}\u{0304}",
    "\u{042F}\u{0304}",
    "\u{044F}\u{0304}",
    // y written with a combining dieresis
    "\u{0418}\u{0308}",
    "\u{0438}\u{0308}",
    // precomposed long vowels
    "\u{04E2}",
    "\u{04E3}",
    "\u{0100}",
    "\u{0101}",
    "\u{04EE}",
    "\u{04EF}",
    // ya, yu
    "\u{042E}",
    "\u{044E}",
    "\u{042F}",
    "\u{044F}",
    // short vowels
    "\u{0418}",
    "\u{0438}",
    "\u{0410}",
    "\u{0430}",
    "\u{0423}",
    "\u{0443}",
    "\u{042B}",
    "\u{044B}",
    // consonants
    "\u{04A2}",
    "\u{04A3}",
    "\u{04B2}",
    "\u{04B3}",
    "\u{04E4}",
    "\u{04E5}",
    "\u{04F0}",
    "\u{04F1}",
    "\u{04F6}",
    "\u{04F7}",
    "\u{041A}",
    "\u{043A}",
    "\u{041B}",
    "\u{043B}",
    "\u{041C}",
    "\u{043C}",
    "\u{041D}",
    "\u{043D}",
    "\u{041F}",
    "\u{043F}",
    "\u{049A}",
    "\u{049B}",
    "\u{0412}",
    "\u{0432}",
    "\u{0413}",
    "\u{0433}",
    "\u{0417}",
    "\u{0437}",
    "\u{0420}",
    "\u{0440}",
    "\u{0421}",
    "\u{0441}",
    "\u{0422}",
    "\u{0442}",
    "\u{0424}",
    "\u{0444}",
    "\u{0425}",
    "\u{0445}",
    "\u{0428}",
    "\u{0448}",
];
