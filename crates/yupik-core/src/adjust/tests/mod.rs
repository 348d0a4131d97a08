mod cyrillic;

use super::*;

/// Deletes every `x`.
struct DropX;

impl AdjustRule for DropX {
    fn name(&self) -> &'static str {
        "drop_x"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        (input[at] == "x").then(|| Rewrite::new(Vec::new(), 1))
    }
}

/// Swaps `a b` into `b a`.
struct SwapAb;

impl AdjustRule for SwapAb {
    fn name(&self) -> &'static str {
        "swap_ab"
    }

    fn apply(&self, input: &[String], at: usize) -> Option<Rewrite> {
        if input[at] == "a" && input.get(at + 1).is_some_and(|g| g == "b") {
            Some(Rewrite::new(vec!["b".into(), "a".into()], 2))
        } else {
            None
        }
    }
}

#[test]
fn test_unmatched_positions_are_copied() {
    assert_eq!(run_rules(&[&DropX], &["a", "b", "c"]), vec!["a", "b", "c"]);
}

#[test]
fn test_rule_may_emit_nothing() {
    assert_eq!(run_rules(&[&DropX], &["x", "a", "x"]), vec!["a"]);
}

#[test]
fn test_two_grapheme_advance_skips_consumed() {
    // "a b b": the swap consumes the first two, the last b is copied
    assert_eq!(run_rules(&[&SwapAb], &["a", "b", "b"]), vec!["b", "a", "b"]);
}

#[test]
fn test_single_pass_does_not_revisit_output() {
    // "a a b" -> cursor 0 declines, cursor 1 swaps; the new "a" at the end is not re-examined
    assert_eq!(run_rules(&[&SwapAb], &["a", "a", "b"]), vec!["a", "b", "a"]);
}

#[test]
fn test_first_matching_rule_wins() {
    struct AnyToY;
    impl AdjustRule for AnyToY {
        fn name(&self) -> &'static str {
            "any_to_y"
        }
        fn apply(&self, _input: &[String], _at: usize) -> Option<Rewrite> {
            Some(Rewrite::new(vec!["y".into()], 1))
        }
    }
    assert_eq!(run_rules(&[&DropX, &AnyToY], &["x", "a"]), vec!["y"]);
    assert_eq!(run_rules(&[&AnyToY, &DropX], &["x", "a"]), vec!["y", "y"]);
}

#[test]
fn test_origin_tracks_cursor() {
    assert_eq!(
        run_rules_with_origin(&[&SwapAb], &["c", "a", "b"]),
        vec![(0, "c".to_string()), (1, "b".to_string()), (1, "a".to_string())]
    );
}
