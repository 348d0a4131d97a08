//! Spelling adjustments applied after grapheme-level Latin to Cyrillic
//! conversion, and the partial inverse used before Cyrillic to Latin.
//!
//! Every rule keeps a trailing stress mark on the vowel it rewrites.

use tracing::debug;

use super::{run_rules, run_rules_with_origin, AdjustRule, Rewrite};
use crate::grapheme::VowelSet;
use crate::stress::{split_stress, Stress};
use crate::syllable::Syllable;
use crate::translit::{merge_long_vowels, LongVowels};
use crate::unicode::{capitalize_first, is_alphabetic_token, LABIAL_MARK, SOFT_SIGN};

const SMALL_Y: &str = "\u{04E5}";
const CAPITAL_Y: &str = "\u{04E4}";

/// Vowels after merging, including ya/yu.
const VOWELS: VowelSet = VowelSet::new(&[
    "\u{0438}",
    "\u{0430}",
    "\u{0443}",
    "\u{044B}",
    "\u{04E3}",
    "\u{0430}\u{0304}",
    "\u{04EF}",
    "\u{044F}",
    "\u{044E}",
    "\u{044F}\u{0304}",
    "\u{044E}\u{0304}",
    "\u{0418}",
    "\u{0410}",
    "\u{0423}",
    "\u{042B}",
    "\u{04E2}",
    "\u{0410}\u{0304}",
    "\u{04EE}",
    "\u{042F}",
    "\u{042E}",
    "\u{042F}\u{0304}",
    "\u{042E}\u{0304}",
]);

/// (plain vowel, small fused form, capital fused form); the first two are short.
const FUSION: [(&str, &str, &str); 4] = [
    ("\u{0430}", "\u{044F}", "\u{042F}"),
    ("\u{0443}", "\u{044E}", "\u{042E}"),
    ("\u{0430}\u{0304}", "\u{044F}\u{0304}", "\u{042F}\u{0304}"),
    ("\u{04EF}", "\u{044E}\u{0304}", "\u{042E}\u{0304}"),
];

/// л з ль с, which soften a following a/u into ya/yu.
const LATERALS: [&str; 8] = [
    "\u{043B}",
    "\u{0437}",
    "\u{043B}\u{044C}",
    "\u{0441}",
    "\u{041B}",
    "\u{0417}",
    "\u{0421}",
    "\u{041B}\u{044C}",
];

/// (labialized consonant, form with the mark moved in front)
const LABIALIZED: [(&str, &str); 7] = [
    ("\u{043A}\u{04F1}", "\u{043A}"),
    ("\u{049B}\u{04F1}", "\u{049B}"),
    ("\u{04F7}\u{04F1}", "\u{04F7}"),
    ("\u{0445}\u{04F1}", "\u{0445}"),
    ("\u{04B3}\u{04F1}", "\u{04B3}"),
    ("\u{04A3}\u{04F1}", "\u{04A3}"),
    ("\u{04A3}\u{044C}\u{04F1}", "\u{04A3}\u{044C}"),
];

const VOICELESS: [&str; 19] = [
    "\u{043F}",
    "\u{0442}",
    "\u{043A}",
    "\u{043A}\u{04F1}",
    "\u{049B}",
    "\u{049B}\u{04F1}",
    "\u{0444}",
    "\u{043B}\u{044C}",
    "\u{0441}",
    "\u{0448}",
    "\u{0445}",
    "\u{0445}\u{04F1}",
    "\u{04B3}",
    "\u{04B3}\u{04F1}",
    "\u{0433}",
    "\u{043C}\u{044C}",
    "\u{043D}\u{044C}",
    "\u{04A3}\u{044C}",
    "\u{04A3}\u{044C}\u{04F1}",
];

/// (voiceless nasal, same nasal without the devoicing sign)
const VOICELESS_NASALS: [(&str, &str); 4] = [
    ("\u{043C}\u{044C}", "\u{043C}"),
    ("\u{043D}\u{044C}", "\u{043D}"),
    ("\u{04A3}\u{044C}", "\u{04A3}"),
    ("\u{04A3}\u{044C}\u{04F1}", "\u{04A3}\u{04F1}"),
];

const YERU: &str = "\u{044B}";
const CAPITAL_YERU: &str = "\u{042B}";

fn restress(base: &str, stress: Option<Stress>) -> String {
    let mut out = base.to_string();
    if let Some(stress) = stress {
        out.push(stress.mark());
    }
    out
}

fn is_consonant(g: &str) -> bool {
    is_alphabetic_token(g) && !VOWELS.contains(g)
}

fn is_voiceless(g: &str) -> bool {
    VOICELESS.contains(&g)
}

/// ӥ + a/u (short or long) fuse into ya/yu. A soft sign separates a short
/// ya/yu from a preceding consonant.
struct DiphthongFusion;

impl AdjustRule for DiphthongFusion {
    fn name(&self) -> &'static str {
        "diphthong_fusion"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        let capital = match input.get(at)?.as_str() {
            SMALL_Y => false,
            CAPITAL_Y => true,
            _ => return None,
        };
        let (base, stress) = split_stress(input.get(at + 1)?);
        let k = FUSION.iter().position(|(plain, _, _)| *plain == base)?;
        let (_, small, cap) = FUSION[k];
        let fused = restress(if capital { cap } else { small }, stress);
        let short = k < 2;
        let after_consonant = short && !capital && at > 0 && is_consonant(&input[at - 1]);
        let emit = if after_consonant {
            vec![SOFT_SIGN.to_string(), fused]
        } else {
            vec![fused]
        };
        Some(Rewrite::new(emit, 2))
    }
}

/// Short a/u after л з ль с are written ya/yu.
struct LateralSoftening;

impl AdjustRule for LateralSoftening {
    fn name(&self) -> &'static str {
        "lateral_softening"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        if at == 0 || !LATERALS.contains(&input[at - 1].as_str()) {
            return None;
        }
        let (base, stress) = split_stress(input.get(at)?);
        let &(_, small, _) = FUSION[..2].iter().find(|(plain, _, _)| *plain == base)?;
        Some(Rewrite::new(vec![restress(small, stress)], 1))
    }
}

/// After a vowel the labialization mark is written before its consonant.
struct LabialRepositioning;

impl AdjustRule for LabialRepositioning {
    fn name(&self) -> &'static str {
        "labial_repositioning"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        let cur = input.get(at)?.as_str();
        let &(_, base) = LABIALIZED.iter().find(|(labialized, _)| *labialized == cur)?;
        if at == 0 || !VOWELS.contains(&input[at - 1]) {
            return None;
        }
        Some(Rewrite::new(vec![LABIAL_MARK.to_string(), base.to_string()], 1))
    }
}

/// ы before two voiceless consonants is not written. A capital Ы hands its
/// case to the next grapheme.
struct SchwaSyncope;

impl AdjustRule for SchwaSyncope {
    fn name(&self) -> &'static str {
        "schwa_syncope"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        let cur = input.get(at)?.as_str();
        if cur != YERU && cur != CAPITAL_YERU {
            return None;
        }
        let next = input.get(at + 1)?;
        let after = input.get(at + 2)?;
        if !is_voiceless(next) || !is_voiceless(after) {
            return None;
        }
        if cur == CAPITAL_YERU {
            Some(Rewrite::new(vec![capitalize_first(next)], 2))
        } else {
            Some(Rewrite::new(Vec::new(), 1))
        }
    }
}

/// A voiceless nasal after a voiceless consonant drops its devoicing sign.
struct DevoicingOmission;

impl AdjustRule for DevoicingOmission {
    fn name(&self) -> &'static str {
        "devoicing_omission"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        let cur = input.get(at)?.as_str();
        let &(_, plain) = VOICELESS_NASALS.iter().find(|(nasal, _)| *nasal == cur)?;
        if at == 0 || !is_voiceless(&input[at - 1]) {
            return None;
        }
        Some(Rewrite::new(vec![plain.to_string()], 1))
    }
}

static FORWARD_RULES: &[&dyn AdjustRule] = &[
    &DiphthongFusion,
    &LateralSoftening,
    &LabialRepositioning,
    &SchwaSyncope,
    &DevoicingOmission,
];

/// Soft sign before ya/yu is dropped.
struct SoftSignRemoval;

impl AdjustRule for SoftSignRemoval {
    fn name(&self) -> &'static str {
        "soft_sign_removal"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        if input.get(at)? != SOFT_SIGN {
            return None;
        }
        let next = input.get(at + 1)?;
        let (base, _) = split_stress(next);
        FUSION
            .iter()
            .any(|&(_, small, _)| small == base)
            .then(|| Rewrite::new(vec![next.clone()], 2))
    }
}

/// ya/yu after л з ль с go back to a/u.
struct LateralHardening;

impl AdjustRule for LateralHardening {
    fn name(&self) -> &'static str {
        "lateral_hardening"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        let cur = input.get(at)?;
        if !LATERALS.contains(&cur.as_str()) {
            return None;
        }
        let (base, stress) = split_stress(input.get(at + 1)?);
        let &(plain, _, _) = FUSION.iter().find(|(_, small, _)| *small == base)?;
        Some(Rewrite::new(vec![cur.clone(), restress(plain, stress)], 2))
    }
}

/// The labialization mark returns behind its consonant.
struct LabialRestoration;

impl AdjustRule for LabialRestoration {
    fn name(&self) -> &'static str {
        "labial_restoration"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        if input.get(at)? != LABIAL_MARK {
            return None;
        }
        let next = input.get(at + 1)?.as_str();
        let &(labialized, _) = LABIALIZED.iter().find(|(_, base)| *base == next)?;
        Some(Rewrite::new(vec![labialized.to_string()], 2))
    }
}

static UNDO_RULES: &[&dyn AdjustRule] = &[&SoftSignRemoval, &LateralHardening, &LabialRestoration];

/// Merge long vowels, then run the forward cascade.
pub fn apply_cyrillic_adjustments<S: AsRef<str>>(graphemes: &[S]) -> Vec<String> {
    let merged = merge_long_vowels(graphemes, LongVowels::Cyrillic);
    let out = run_rules(FORWARD_RULES, &merged);
    debug!(before = merged.len(), after = out.len(), "cyrillic adjustments");
    out
}

/// Same as [`apply_cyrillic_adjustments`] over syllabified graphemes.
///
/// Rules see the whole word, so syncope and devoicing still work across a
/// boundary; each output grapheme stays in the syllable its rule fired in.
/// A syllable left empty by syncope is dropped and the rest renumbered.
pub fn apply_cyrillic_to_syllables(syllables: &[Syllable]) -> Vec<Syllable> {
    let mut flat = Vec::new();
    let mut owner = Vec::new();
    for (k, syllable) in syllables.iter().enumerate() {
        for g in merge_long_vowels(&syllable.graphemes, LongVowels::Cyrillic) {
            flat.push(g);
            owner.push(k);
        }
    }

    let mut grouped: Vec<Vec<String>> = vec![Vec::new(); syllables.len()];
    for (origin, g) in run_rules_with_origin(FORWARD_RULES, &flat) {
        grouped[owner[origin]].push(g);
    }
    grouped
        .into_iter()
        .filter(|graphemes| !graphemes.is_empty())
        .enumerate()
        .map(|(k, graphemes)| Syllable {
            index: k + 1,
            graphemes,
        })
        .collect()
}

/// Reverse fusion, lateral softening and labial repositioning. Syncope and
/// devoicing omission lose information and are left as written.
pub fn undo_cyrillic_adjustments<S: AsRef<str>>(graphemes: &[S]) -> Vec<String> {
    run_rules(UNDO_RULES, graphemes)
}
