use crate::grapheme::tokenize_latin;
use crate::pipeline::{
    cyrillic_to_latin, is_legal, latin_to_cyrillic, phonemic, syllabify_and_stress, Output,
};
use crate::translit::Convention;

#[test]
fn test_tokenize_long_vowel_word() {
    assert_eq!(tokenize_latin("ngaa", false), vec!["ng", "a", "a"]);
}

#[test]
fn test_latin_to_cyrillic_redoubles_and_softens() {
    // q makes the l voiceless, and ль softens the following a
    assert_eq!(
        latin_to_cyrillic("aqlaq"),
        "\u{0430}\u{049B}\u{043B}\u{044C}\u{044F}\u{049B}"
    );
}

#[test]
fn test_latin_to_cyrillic_long_vowels() {
    assert_eq!(latin_to_cyrillic("nuna"), "\u{043D}\u{0443}\u{043D}\u{0430}");
    assert_eq!(
        latin_to_cyrillic("ngaatak"),
        "\u{04A3}\u{0430}\u{0304}\u{0442}\u{0430}\u{043A}"
    );
}

#[test]
fn test_cyrillic_to_latin_undoubles() {
    assert_eq!(
        cyrillic_to_latin("\u{0430}\u{049B}\u{043B}\u{044C}\u{044F}\u{049B}"),
        "aqlaq"
    );
}

#[test]
fn test_cyrillic_to_latin_long_vowel() {
    assert_eq!(
        cyrillic_to_latin("\u{04A3}\u{0430}\u{0304}\u{0442}\u{0430}\u{043A}"),
        "ngaatak"
    );
}

#[test]
fn test_long_ya_after_nasal_round_trips() {
    // a soft sign here would read back as the voiceless nasal
    let cyrillic = "\u{0430}\u{04A3}\u{044F}\u{0304}\u{049B}";
    assert_eq!(latin_to_cyrillic("angyaaq"), cyrillic);
    assert_eq!(cyrillic_to_latin(cyrillic), "angyaaq");
}

#[test]
fn test_cyrillic_to_latin_restores_h() {
    // г reads back as g unless the word is listed
    let cyrillic = "\u{0430}\u{0433}\u{0430}\u{0304}";
    assert_eq!(cyrillic_to_latin(cyrillic), "ahaa");
    assert_eq!(latin_to_cyrillic("ahaa"), cyrillic);
    assert_eq!(cyrillic_to_latin("\u{0430}\u{0433}\u{0430}"), "aga");
}

#[test]
fn test_phonemic_merges_long_vowels() {
    assert_eq!(phonemic("nuuk", Convention::Nagai2001), vec!["n", "u\u{02D0}", "k"]);
    assert_eq!(
        phonemic("Aqlaq", Convention::Ipa),
        vec!["\u{0251}", "q", "\u{026C}", "\u{0251}", "q"]
    );
}

#[test]
fn test_syllabify_and_stress_latin() {
    assert_eq!(syllabify_and_stress("nuna", Output::Latin), "nu1/na2");
    assert_eq!(
        syllabify_and_stress("ayakata", Output::Latin),
        "a1/ya\u{0302}2/ka3/ta4"
    );
}

#[test]
fn test_syllabify_and_stress_cyrillic() {
    assert_eq!(
        syllabify_and_stress("nuna", Output::Cyrillic),
        "\u{043D}\u{0443}1/\u{043D}\u{0430}2"
    );
    // ӥ fuses with the stressed vowel that follows it
    assert_eq!(
        syllabify_and_stress("ayakata", Output::Cyrillic),
        "\u{0430}1/\u{044F}\u{0302}2/\u{043A}\u{0430}3/\u{0442}\u{0430}4"
    );
}

#[test]
fn test_syllabify_and_stress_phonemic() {
    assert_eq!(
        syllabify_and_stress("nuna", Output::Phonemic(Convention::Nagai2001)),
        "nu.na"
    );
    assert_eq!(
        syllabify_and_stress("ayakata", Output::Phonemic(Convention::Ipa)),
        "\u{0251}.'j\u{0251}\u{02D0}.k\u{0251}.t\u{0251}"
    );
}

#[test]
fn test_is_legal() {
    assert!(is_legal("nuna"));
    assert!(is_legal("qaa'lleq"));
    assert!(!is_legal("qaallleq"));
    assert!(!is_legal("nunaaa"));
    assert!(!is_legal("xa"));
}

#[test]
fn test_is_legal_ignores_case() {
    assert!(is_legal("Nuna"));
}
