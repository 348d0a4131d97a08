use crate::adjust::{
    apply_cyrillic_adjustments, apply_cyrillic_to_syllables, undo_cyrillic_adjustments,
};
use crate::syllable::Syllable;

const A: &str = "\u{0430}";
const A_LONG: &str = "\u{0430}\u{0304}";
const U: &str = "\u{0443}";
const YERU: &str = "\u{044B}";
const CAPITAL_YERU: &str = "\u{042B}";
const Y: &str = "\u{04E5}";
const CAPITAL_Y: &str = "\u{04E4}";
const YA: &str = "\u{044F}";
const YA_LONG: &str = "\u{044F}\u{0304}";
const CAPITAL_YU: &str = "\u{042E}";
const SOFT: &str = "\u{044C}";
const W: &str = "\u{04F1}";
const K: &str = "\u{043A}";
const KW: &str = "\u{043A}\u{04F1}";
const L: &str = "\u{043B}";
const N: &str = "\u{043D}";
const NG: &str = "\u{04A3}";
const P: &str = "\u{043F}";
const CAPITAL_P: &str = "\u{041F}";
const T: &str = "\u{0442}";
const S: &str = "\u{0441}";
const MM: &str = "\u{043C}\u{044C}";
const M: &str = "\u{043C}";

fn syllables(groups: &[&[&str]]) -> Vec<Syllable> {
    groups
        .iter()
        .enumerate()
        .map(|(k, g)| Syllable {
            index: k + 1,
            graphemes: g.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

#[test]
fn test_fusion_word_initial() {
    assert_eq!(apply_cyrillic_adjustments(&[Y, A, K]), vec![YA, K]);
}

#[test]
fn test_fusion_inserts_soft_sign_after_consonant() {
    assert_eq!(apply_cyrillic_adjustments(&[A, N, Y, A]), vec![A, N, SOFT, YA]);
}

#[test]
fn test_fusion_with_long_vowel() {
    // the pair merges first, then fuses; long ya/yu take no soft sign
    assert_eq!(apply_cyrillic_adjustments(&[K, Y, A, A]), vec![K, YA_LONG]);
    assert_eq!(apply_cyrillic_adjustments(&[NG, Y, A, A]), vec![NG, YA_LONG]);
}

#[test]
fn test_fusion_capital() {
    assert_eq!(apply_cyrillic_adjustments(&[CAPITAL_Y, U]), vec![CAPITAL_YU]);
}

#[test]
fn test_fusion_keeps_stress() {
    let stressed = format!("{A}\u{0301}");
    let expected = format!("{YA}\u{0301}");
    assert_eq!(
        apply_cyrillic_adjustments(&[Y, stressed.as_str()]),
        vec![expected]
    );
}

#[test]
fn test_lateral_softening() {
    assert_eq!(apply_cyrillic_adjustments(&[L, A]), vec![L, YA]);
    assert_eq!(
        apply_cyrillic_adjustments(&[S, U]),
        vec![S, "\u{044E}"]
    );
    // long vowels are not softened
    assert_eq!(apply_cyrillic_adjustments(&[L, A, A]), vec![L, A_LONG]);
}

#[test]
fn test_labial_repositioning() {
    assert_eq!(apply_cyrillic_adjustments(&[A, KW, A]), vec![A, W, K, A]);
    // nothing to move in front of at word start
    assert_eq!(apply_cyrillic_adjustments(&[KW, A]), vec![KW, A]);
}

#[test]
fn test_schwa_syncope() {
    assert_eq!(
        apply_cyrillic_adjustments(&[T, YERU, P, T, A]),
        vec![T, P, T, A]
    );
    // one voiceless consonant is not enough
    assert_eq!(
        apply_cyrillic_adjustments(&[T, YERU, P, A]),
        vec![T, YERU, P, A]
    );
}

#[test]
fn test_schwa_syncope_capital_carries_over() {
    assert_eq!(
        apply_cyrillic_adjustments(&[CAPITAL_YERU, P, T, A]),
        vec![CAPITAL_P, T, A]
    );
}

#[test]
fn test_devoicing_omission() {
    assert_eq!(apply_cyrillic_adjustments(&[A, K, MM, A]), vec![A, K, M, A]);
    assert_eq!(apply_cyrillic_adjustments(&[A, MM, A]), vec![A, MM, A]);
}

#[test]
fn test_undo_fusion_and_labial() {
    assert_eq!(undo_cyrillic_adjustments(&[A, N, SOFT, YA]), vec![A, N, YA]);
    assert_eq!(undo_cyrillic_adjustments(&[L, YA]), vec![L, A]);
    assert_eq!(undo_cyrillic_adjustments(&[A, W, K, A]), vec![A, KW, A]);
}

#[test]
fn test_undo_leaves_syncope_and_devoicing() {
    assert_eq!(undo_cyrillic_adjustments(&[T, P, T, A]), vec![T, P, T, A]);
    assert_eq!(undo_cyrillic_adjustments(&[A, K, M, A]), vec![A, K, M, A]);
}

#[test]
fn test_syllables_keep_cross_boundary_rules() {
    let out = apply_cyrillic_to_syllables(&syllables(&[&[T, YERU, P], &[T, A]]));
    assert_eq!(out, syllables(&[&[T, P], &[T, A]]));

    let out = apply_cyrillic_to_syllables(&syllables(&[&[A, K], &[MM, A]]));
    assert_eq!(out, syllables(&[&[A, K], &[M, A]]));
}

#[test]
fn test_syllables_emptied_by_syncope_are_dropped() {
    let out = apply_cyrillic_to_syllables(&syllables(&[&[YERU], &[P, T, A]]));
    assert_eq!(out, syllables(&[&[P, T, A]]));
}

#[test]
fn test_syllables_merge_long_vowels() {
    let out = apply_cyrillic_to_syllables(&syllables(&[&[N, A, A], &[K, A]]));
    assert_eq!(out, syllables(&[&[N, A_LONG], &[K, A]]));
}
