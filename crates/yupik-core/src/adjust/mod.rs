//! Context-sensitive rewrites over grapheme sequences.
//!
//! A rule looks at the cursor position (with up to two graphemes of
//! lookahead and one of lookbehind) and either declines or emits a
//! replacement and says how far to advance. The engine makes one
//! left-to-right pass and the first matching rule wins at each position.

mod cyrillic;
mod latin;

pub use cyrillic::{
    apply_cyrillic_adjustments, apply_cyrillic_to_syllables, undo_cyrillic_adjustments,
};
pub use latin::{highlight, redouble, redouble_with_changes, undouble};

use tracing::trace;

/// Replacement produced by a matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub emit: Vec<String>,
    /// Input graphemes consumed, at least 1.
    pub advance: usize,
}

impl Rewrite {
    fn new(emit: Vec<String>, advance: usize) -> Self {
        Self { emit, advance }
    }
}

pub trait AdjustRule: Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite>;
}

/// One pass of `rules` over `input`.
pub fn run_rules<S: AsRef<str>>(rules: &[&dyn AdjustRule], input: &[S]) -> Vec<String> {
    run_rules_with_origin(rules, input)
        .into_iter()
        .map(|(_, g)| g)
        .collect()
}

/// Like [`run_rules`], but each output grapheme carries the input index of
/// the cursor that produced it.
pub fn run_rules_with_origin<S: AsRef<str>>(
    rules: &[&dyn AdjustRule],
    input: &[S],
) -> Vec<(usize, String)> {
    let input: Vec<String> = input.iter().map(|g| g.as_ref().to_string()).collect();
    let mut out = Vec::with_capacity(input.len());
    let mut at = 0;
    while at < input.len() {
        match rules.iter().find_map(|rule| {
            rule.apply(&input, at).map(|rewrite| (rule.name(), rewrite))
        }) {
            Some((name, rewrite)) => {
                trace!(rule = name, at, emit = ?rewrite.emit, "rewrite");
                out.extend(rewrite.emit.into_iter().map(|g| (at, g)));
                at += rewrite.advance.max(1);
            }
            None => {
                out.push((at, input[at].clone()));
                at += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests;
