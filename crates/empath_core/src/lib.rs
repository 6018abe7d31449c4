//! Core data model and classification pipeline.
//!
//! The text-analysis capability (tokenization, part-of-speech tagging,
//! lemmatization) sits behind the [`TextAnalyzer`] trait; `empath_nlp`
//! provides the rule-based implementation. Everything here is pure,
//! synchronous computation over tables that are immutable after startup,
//! so the whole pipeline is safe to share read-only across request
//! handlers.

pub mod classify;
pub mod config;
mod error;
pub mod lexicon;

pub use classify::{Classification, Classifier, EmotionPercentages, EmotionTally};
pub use config::EmpathConfig;
pub use error::LexiconError;
pub use lexicon::{EmotionCategory, Lexicon};

use serde::{Deserialize, Serialize};

/// Grammatical category assigned to a word, used as a lemmatization hint.
///
/// Only the classes that select distinct lemmatization rules are
/// distinguished; everything else collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Adjective,
    Adverb,
    Verb,
    Other,
}

/// A word reduced to its base form, paired with the grammatical category
/// it was lemmatized under. Request-scoped, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub lemma: String,
    pub class: WordClass,
}

impl TaggedWord {
    pub fn new(lemma: impl Into<String>, class: WordClass) -> Self {
        Self {
            lemma: lemma.into(),
            class,
        }
    }
}

/// Text analysis capability behind the classification pipeline.
///
/// Implementations must be deterministic: swapping one implementation for
/// another may change which lemmas come out, but a given implementation
/// must always produce the same output for the same input.
pub trait TextAnalyzer: Send + Sync {
    /// Split `text` into lowercase word tokens reduced to their default
    /// (part-of-speech-agnostic) base forms. Empty input yields an empty
    /// sequence; this is not an error.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Assign each token a grammatical category and re-lemmatize it using
    /// that category as a hint. The same surface word can lemmatize
    /// differently as a verb than as an adjective, and the keyword tables
    /// hold base forms, so the contextual pass improves match recall over
    /// the default pass alone.
    fn tag(&self, tokens: &[String]) -> Vec<TaggedWord>;
}
