//! The classification pipeline: keyword matching, tallying, percentage
//! normalization, and response selection.
//!
//! Every stage is a pure function over request-scoped data; nothing here
//! survives past a single call to [`Classifier::classify`].

use crate::lexicon::{EmotionCategory, Lexicon};
use crate::{TaggedWord, TextAnalyzer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Served when no keyword matched at all (including empty input).
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I couldn't understand your emotions properly. Could you express a little more?";

/// Served when the winning category is neutral, instead of the response
/// table entry.
pub const NEUTRAL_ACK: &str =
    "It seems like you're feeling neutral about things. If you'd like to share more, feel free to do so.";

// ============================================================================
// Tally and percentages
// ============================================================================

/// Per-category match counts for one request. Only categories that
/// matched at least once are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmotionTally(BTreeMap<EmotionCategory, u32>);

impl EmotionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one match for `category`.
    pub fn record(&mut self, category: EmotionCategory) {
        *self.0.entry(category).or_insert(0) += 1;
    }

    pub fn count(&self, category: EmotionCategory) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in category declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, u32)> + '_ {
        self.0.iter().map(|(&cat, &n)| (cat, n))
    }
}

/// Per-category share of total matches, 0–100. Keys mirror the tally's
/// keys; when the total is zero every present category maps to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmotionPercentages(BTreeMap<EmotionCategory, f64>);

impl EmotionPercentages {
    pub fn from_tally(tally: &EmotionTally) -> Self {
        let total = tally.total();
        let shares = tally
            .iter()
            .map(|(cat, n)| {
                let share = if total == 0 {
                    0.0
                } else {
                    f64::from(n) / f64::from(total) * 100.0
                };
                (cat, share)
            })
            .collect();
        Self(shares)
    }

    pub fn get(&self, category: EmotionCategory) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in category declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, f64)> + '_ {
        self.0.iter().map(|(&cat, &share)| (cat, share))
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Outcome of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub tally: EmotionTally,
    pub percentages: EmotionPercentages,
    /// The winning category, if any keyword matched.
    pub category: Option<EmotionCategory>,
    pub response: String,
}

/// Runs the full pipeline: analysis, matching, tallying, selection.
///
/// Built once at startup and shared read-only across requests; holds no
/// mutable state.
pub struct Classifier {
    analyzer: Arc<dyn TextAnalyzer>,
    lexicon: Lexicon,
}

impl Classifier {
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, lexicon: Lexicon) -> Self {
        Self { analyzer, lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify `text` and pick a response.
    pub fn classify(&self, text: &str) -> Classification {
        let tokens = self.analyzer.tokenize(text);
        let tagged = self.analyzer.tag(&tokens);
        let tally = self.tally(&tagged);
        let percentages = EmotionPercentages::from_tally(&tally);
        let (category, response) = select_response(&self.lexicon, &percentages);

        tracing::debug!(
            tokens = tokens.len(),
            matches = tally.total(),
            category = category.map(|c| c.as_str()),
            "classified text"
        );

        Classification {
            tally,
            percentages,
            category,
            response,
        }
    }

    /// Match every lemma against every category's keyword set. A lemma
    /// present in several sets increments each of them; the word's own
    /// grammatical class does not restrict which categories it can match.
    fn tally(&self, words: &[TaggedWord]) -> EmotionTally {
        let mut tally = EmotionTally::new();
        for word in words {
            for category in self.lexicon.categories_matching(&word.lemma) {
                tally.record(category);
            }
        }
        tally
    }
}

/// Pick the response for a set of percentages.
///
/// Categories are scanned in declaration order and the first
/// strictly-greater share wins, so ties resolve to the earliest declared
/// category. An empty map falls back to [`FALLBACK_RESPONSE`]; a neutral
/// winner gets [`NEUTRAL_ACK`] rather than its table entry.
pub fn select_response(
    lexicon: &Lexicon,
    percentages: &EmotionPercentages,
) -> (Option<EmotionCategory>, String) {
    let mut best: Option<(EmotionCategory, f64)> = None;
    for (category, share) in percentages.iter() {
        match best {
            Some((_, top)) if share <= top => {}
            _ => best = Some((category, share)),
        }
    }

    match best {
        None => (None, FALLBACK_RESPONSE.to_string()),
        Some((EmotionCategory::Neutral, _)) => {
            (Some(EmotionCategory::Neutral), NEUTRAL_ACK.to_string())
        }
        Some((category, _)) => (
            Some(category),
            lexicon.primary_response(category).to_string(),
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================
