//! Latin consonant-doubling conventions.
//!
//! The written language leaves a fricative or nasal single when voicelessness
//! is already implied by an adjacent voiceless consonant. `undouble` applies
//! that convention; `redouble` restores the underlying doubled spelling.

use tracing::debug;

use super::{run_rules, AdjustRule, Rewrite};

/// Voiceless consonants that imply voicelessness in a neighbour.
const UNDOUBLEABLE: &[&str] = &["p", "t", "k", "kw", "q", "qw", "f", "s", "wh"];

const DOUBLED_FRICATIVES: &[&str] = &["ll", "rr", "gg", "ghh", "ghhw"];
const DOUBLED_NASALS: &[&str] = &["nn", "mm", "ngng", "ngngw"];
const DOUBLED: &[&str] = &["ll", "rr", "gg", "ghh", "ghhw", "nn", "mm", "ngng", "ngngw"];

const DOUBLEABLE_FRICATIVES: &[&str] = &["l", "r", "g", "gh", "ghw"];
const DOUBLEABLE_NASALS: &[&str] = &["n", "m", "ng", "ngw"];
const DOUBLEABLE: &[&str] = &["l", "r", "g", "gh", "ghw", "n", "m", "ng", "ngw"];

const LL: &[&str] = &["ll"];

const PAIRS: [(&str, &str); 9] = [
    ("ll", "l"),
    ("rr", "r"),
    ("gg", "g"),
    ("ghh", "gh"),
    ("ghhw", "ghw"),
    ("nn", "n"),
    ("mm", "m"),
    ("ngng", "ng"),
    ("ngngw", "ngw"),
];

fn single(doubled: &str) -> Option<&'static str> {
    PAIRS.iter().find(|(d, _)| *d == doubled).map(|&(_, s)| s)
}

fn double(single: &str) -> Option<&'static str> {
    PAIRS.iter().find(|(_, s)| *s == single).map(|&(d, _)| d)
}

enum Side {
    First,
    Second,
}

/// Rewrites one member of an adjacent pair when both fall in the given
/// categories.
struct PairRule {
    name: &'static str,
    first: &'static [&'static str],
    second: &'static [&'static str],
    side: Side,
    map: fn(&str) -> Option<&'static str>,
}

impl AdjustRule for PairRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        let first = input.get(at)?;
        let second = input.get(at + 1)?;
        if !self.first.contains(&first.as_str()) || !self.second.contains(&second.as_str()) {
            return None;
        }
        let pair = match self.side {
            Side::First => vec![(self.map)(first)?.to_string(), second.clone()],
            Side::Second => vec![first.clone(), (self.map)(second)?.to_string()],
        };
        Some(Rewrite::new(pair, 2))
    }
}

static UNDOUBLE_RULES: &[&dyn AdjustRule] = &[
    &PairRule {
        name: "undouble_fricative_before_voiceless",
        first: DOUBLED_FRICATIVES,
        second: UNDOUBLEABLE,
        side: Side::First,
        map: single,
    },
    &PairRule {
        name: "undouble_fricative_after_voiceless",
        first: UNDOUBLEABLE,
        second: DOUBLED_FRICATIVES,
        side: Side::Second,
        map: single,
    },
    &PairRule {
        name: "undouble_nasal_after_voiceless",
        first: UNDOUBLEABLE,
        second: DOUBLED_NASALS,
        side: Side::Second,
        map: single,
    },
    &PairRule {
        name: "undouble_after_fricative",
        first: DOUBLED_FRICATIVES,
        second: DOUBLED,
        side: Side::Second,
        map: single,
    },
    &PairRule {
        name: "undouble_before_ll",
        first: DOUBLED,
        second: LL,
        side: Side::First,
        map: single,
    },
];

static REDOUBLE_RULES: &[&dyn AdjustRule] = &[
    &PairRule {
        name: "redouble_fricative_before_voiceless",
        first: DOUBLEABLE_FRICATIVES,
        second: UNDOUBLEABLE,
        side: Side::First,
        map: double,
    },
    &PairRule {
        name: "redouble_fricative_after_voiceless",
        first: UNDOUBLEABLE,
        second: DOUBLEABLE_FRICATIVES,
        side: Side::Second,
        map: double,
    },
    &PairRule {
        name: "redouble_nasal_after_voiceless",
        first: UNDOUBLEABLE,
        second: DOUBLEABLE_NASALS,
        side: Side::Second,
        map: double,
    },
    &PairRule {
        name: "redouble_after_fricative",
        first: DOUBLED_FRICATIVES,
        second: DOUBLEABLE,
        side: Side::Second,
        map: double,
    },
    &PairRule {
        name: "redouble_before_ll",
        first: DOUBLEABLE,
        second: LL,
        side: Side::First,
        map: double,
    },
];

/// Apply the written convention: drop the doubling voicelessness makes
/// redundant.
pub fn undouble<S: AsRef<str>>(graphemes: &[S]) -> Vec<String> {
    to_fixed_point(UNDOUBLE_RULES, graphemes)
}

/// Restore the underlying doubled spelling.
pub fn redouble<S: AsRef<str>>(graphemes: &[S]) -> Vec<String> {
    to_fixed_point(REDOUBLE_RULES, graphemes)
}

/// [`redouble`] plus the indices of the graphemes it changed.
pub fn redouble_with_changes<S: AsRef<str>>(graphemes: &[S]) -> (Vec<String>, Vec<usize>) {
    let out = redouble(graphemes);
    let changed = out
        .iter()
        .zip(graphemes)
        .enumerate()
        .filter(|(_, (after, before))| after.as_str() != before.as_ref())
        .map(|(i, _)| i)
        .collect();
    (out, changed)
}

/// Join graphemes, wrapping the changed ones in a `<font color>` element.
pub fn highlight<S: AsRef<str>>(graphemes: &[S], changed: &[usize], color: &str) -> String {
    let mut out = String::new();
    for (i, g) in graphemes.iter().enumerate() {
        if changed.contains(&i) {
            out.push_str(&format!("<font color=\"{color}\">{}</font>", g.as_ref()));
        } else {
            out.push_str(g.as_ref());
        }
    }
    out
}

/// Every rewrite moves a grapheme one way between its single and doubled
/// spelling, so repeating the pass settles within `len` rounds.
fn to_fixed_point<S: AsRef<str>>(rules: &[&dyn AdjustRule], graphemes: &[S]) -> Vec<String> {
    let mut current = run_rules(rules, graphemes);
    let mut passes = 1;
    for _ in 0..current.len() {
        let next = run_rules(rules, &current);
        if next == current {
            break;
        }
        current = next;
        passes += 1;
    }
    if passes > 1 {
        debug!(passes, "doubling settled");
    }
    current
}
