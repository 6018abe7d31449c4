//! Property-based tests for empath_core.
//!
//! Uses proptest to verify invariants that must hold for ALL possible
//! inputs, not just hand-picked examples.

use proptest::prelude::*;
use empath_core::classify::{
    select_response, EmotionPercentages, EmotionTally, FALLBACK_RESPONSE, NEUTRAL_ACK,
};
use empath_core::{EmotionCategory, Lexicon};

// ============================================================================
// Strategies
// ============================================================================

/// Generate an arbitrary non-empty tally: a non-empty subset of categories
/// with counts in 1..=50.
fn arb_nonempty_tally() -> impl Strategy<Value = EmotionTally> {
    proptest::collection::btree_map(
        proptest::sample::select(EmotionCategory::ALL.to_vec()),
        1u32..=50,
        1..=EmotionCategory::ALL.len(),
    )
    .prop_map(|counts| {
        let mut tally = EmotionTally::new();
        for (cat, n) in counts {
            for _ in 0..n {
                tally.record(cat);
            }
        }
        tally
    })
}

// ============================================================================
// Percentage properties
// ============================================================================

proptest! {
    /// Percentages over a non-empty tally always sum to 100 (within
    /// floating-point tolerance).
    #[test]
    fn percentages_sum_to_100(tally in arb_nonempty_tally()) {
        let percentages = EmotionPercentages::from_tally(&tally);
        let sum: f64 = percentages.iter().map(|(_, share)| share).sum();
        prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
    }

    /// Every share is in (0, 100] and every tally key survives into the
    /// percentage map.
    #[test]
    fn percentages_mirror_tally_keys(tally in arb_nonempty_tally()) {
        let percentages = EmotionPercentages::from_tally(&tally);
        let tally_keys: Vec<_> = tally.iter().map(|(cat, _)| cat).collect();
        let pct_keys: Vec<_> = percentages.iter().map(|(cat, _)| cat).collect();
        prop_assert_eq!(tally_keys, pct_keys);
        for (_, share) in percentages.iter() {
            prop_assert!(share > 0.0 && share <= 100.0);
        }
    }

    /// Conversion is deterministic.
    #[test]
    fn percentages_are_deterministic(tally in arb_nonempty_tally()) {
        let a = EmotionPercentages::from_tally(&tally);
        let b = EmotionPercentages::from_tally(&tally);
        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Selection properties
// ============================================================================

proptest! {
    /// A non-empty tally always selects some category, and the winner's
    /// share is at least as large as every other share.
    #[test]
    fn selection_picks_a_maximum(tally in arb_nonempty_tally()) {
        let lexicon = Lexicon::default();
        let percentages = EmotionPercentages::from_tally(&tally);
        let (category, _) = select_response(&lexicon, &percentages);
        let winner = category.expect("non-empty tally must select a category");
        let top = percentages.get(winner);
        for (_, share) in percentages.iter() {
            prop_assert!(top >= share);
        }
    }

    /// Among tied maxima, the earliest declared category wins.
    #[test]
    fn selection_tie_break_is_declaration_order(tally in arb_nonempty_tally()) {
        let lexicon = Lexicon::default();
        let percentages = EmotionPercentages::from_tally(&tally);
        let (category, _) = select_response(&lexicon, &percentages);
        let winner = category.unwrap();
        let top = percentages.get(winner);
        let first_max = percentages
            .iter()
            .find(|(_, share)| (share - top).abs() < f64::EPSILON)
            .map(|(cat, _)| cat)
            .unwrap();
        prop_assert_eq!(winner, first_max);
    }

    /// The selected response is always one of the known strings: the
    /// fallback, the neutral acknowledgment, or a category's first table
    /// entry.
    #[test]
    fn response_is_always_a_known_string(tally in arb_nonempty_tally()) {
        let lexicon = Lexicon::default();
        let percentages = EmotionPercentages::from_tally(&tally);
        let (_, response) = select_response(&lexicon, &percentages);
        let known = response == FALLBACK_RESPONSE
            || response == NEUTRAL_ACK
            || EmotionCategory::ALL
                .iter()
                .any(|&cat| response == lexicon.primary_response(cat));
        prop_assert!(known, "unexpected response: {}", response);
    }
}

// ============================================================================
// Empty-tally behavior
// ============================================================================

#[test]
fn empty_tally_selects_fallback() {
    let lexicon = Lexicon::default();
    let percentages = EmotionPercentages::from_tally(&EmotionTally::new());
    let (category, response) = select_response(&lexicon, &percentages);
    assert_eq!(category, None);
    assert_eq!(response, FALLBACK_RESPONSE);
}
