//! Emotion keyword and response tables.
//!
//! The built-in tables are the source of truth; an operator can override
//! individual categories from a TOML file without touching the code.
//! Both tables are loaded once at startup and never written afterwards.

use crate::error::LexiconError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

// ============================================================================
// Categories
// ============================================================================

/// The fixed set of emotion categories, in tie-break order.
///
/// Declaration order matters: when two categories tie for the highest
/// match percentage, the earliest declared one wins. Extending the set
/// means adding a variant here plus entries to both default tables below.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Sad,
    Happy,
    Neutral,
}

impl EmotionCategory {
    /// All categories in declaration (tie-break) order.
    pub const ALL: [EmotionCategory; 3] = [
        EmotionCategory::Sad,
        EmotionCategory::Happy,
        EmotionCategory::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Sad => "sad",
            EmotionCategory::Happy => "happy",
            EmotionCategory::Neutral => "neutral",
        }
    }

    /// Parse a category name as it appears in lexicon files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sad" => Some(EmotionCategory::Sad),
            "happy" => Some(EmotionCategory::Happy),
            "neutral" => Some(EmotionCategory::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Default tables
// ============================================================================

const SAD_KEYWORDS: &[&str] = &["sad", "depressed", "melancholy", "unhappy", "lonely"];
const HAPPY_KEYWORDS: &[&str] = &["happy", "euphoric", "joyful", "cheerful"];
const NEUTRAL_KEYWORDS: &[&str] = &["fine", "alright", "okay"];

const SAD_RESPONSES: &[&str] = &[
    "I'm sorry to hear that you're feeling sad.",
    "It's okay to feel sad sometimes. How can I help?",
    "If you want to talk about it, I'm here for you.",
];
const HAPPY_RESPONSES: &[&str] = &[
    "That's great to hear that you're feeling happy!",
    "Happiness is contagious! Keep spreading those positive vibes.",
    "I'm glad to hear that you're in a good mood.",
];
const NEUTRAL_RESPONSES: &[&str] = &[
    "It seems like you're feeling neutral about things. That's okay.",
    "Sometimes it's normal to feel neither happy nor sad.",
    "If you ever want to talk or need support, feel free to reach out.",
];

fn default_keywords(category: EmotionCategory) -> &'static [&'static str] {
    match category {
        EmotionCategory::Sad => SAD_KEYWORDS,
        EmotionCategory::Happy => HAPPY_KEYWORDS,
        EmotionCategory::Neutral => NEUTRAL_KEYWORDS,
    }
}

fn default_responses(category: EmotionCategory) -> &'static [&'static str] {
    match category {
        EmotionCategory::Sad => SAD_RESPONSES,
        EmotionCategory::Happy => HAPPY_RESPONSES,
        EmotionCategory::Neutral => NEUTRAL_RESPONSES,
    }
}

// ============================================================================
// Lexicon
// ============================================================================

/// Immutable keyword and response tables.
///
/// Keywords are lowercase base forms; a lemma matches a category when it
/// appears in that category's set. A lemma may appear in several
/// categories' sets, in which case it counts towards each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    keywords: BTreeMap<EmotionCategory, HashSet<String>>,
    responses: BTreeMap<EmotionCategory, Vec<String>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let keywords = EmotionCategory::ALL
            .iter()
            .map(|&cat| {
                let words = default_keywords(cat)
                    .iter()
                    .map(|w| w.to_string())
                    .collect();
                (cat, words)
            })
            .collect();
        let responses = EmotionCategory::ALL
            .iter()
            .map(|&cat| {
                let lines = default_responses(cat)
                    .iter()
                    .map(|r| r.to_string())
                    .collect();
                (cat, lines)
            })
            .collect();
        Self { keywords, responses }
    }
}

/// On-disk shape of a lexicon override file. Categories absent from a
/// table keep their built-in entries.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LexiconFile {
    keywords: BTreeMap<String, Vec<String>>,
    responses: BTreeMap<String, Vec<String>>,
}

impl Lexicon {
    /// Load a lexicon from a TOML file, overriding the built-in tables
    /// per category. Category names must be one of the known set.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: LexiconFile = toml::from_str(&content)?;
        Self::with_overrides(file)
    }

    fn with_overrides(file: LexiconFile) -> Result<Self, LexiconError> {
        let mut lexicon = Self::default();

        for (name, words) in file.keywords {
            let category = EmotionCategory::from_name(&name)
                .ok_or(LexiconError::UnknownCategory(name))?;
            if words.is_empty() {
                return Err(LexiconError::EmptyKeywords(category));
            }
            let words = words.into_iter().map(|w| w.to_lowercase()).collect();
            lexicon.keywords.insert(category, words);
        }

        for (name, lines) in file.responses {
            let category = EmotionCategory::from_name(&name)
                .ok_or(LexiconError::UnknownCategory(name))?;
            if lines.is_empty() {
                return Err(LexiconError::EmptyResponses(category));
            }
            lexicon.responses.insert(category, lines);
        }

        Ok(lexicon)
    }

    /// Categories whose keyword set contains `lemma`, in declaration order.
    pub fn categories_matching<'a>(
        &'a self,
        lemma: &'a str,
    ) -> impl Iterator<Item = EmotionCategory> + 'a {
        self.keywords
            .iter()
            .filter(move |(_, words)| words.contains(lemma))
            .map(|(&cat, _)| cat)
    }

    /// The reply served for `category` (the first candidate in its list).
    pub fn primary_response(&self, category: EmotionCategory) -> &str {
        &self.responses[&category][0]
    }

    pub fn keyword_count(&self, category: EmotionCategory) -> usize {
        self.keywords[&category].len()
    }
}

// ============================================================================
// Tests
// ============================================================================
