//! # Rule-based text analysis
//!
//! The [`RuleAnalyzer`] implements [`empath_core::TextAnalyzer`] without
//! any model files or runtime downloads:
//!
//! 1. `tokenize` lowercases, splits into word tokens and applies default
//!    (part-of-speech-agnostic) lemmatization to each token.
//! 2. `tag` assigns each of those tokens a grammatical class and
//!    re-lemmatizes it under that class, which recovers base forms the
//!    default pass cannot ("feeling" only becomes "feel" once it is known
//!    to be a verb).
//!
//! All tables are static; analysis is deterministic and allocation-light.

mod lemmatizer;
mod tagger;
mod tokenizer;

pub use lemmatizer::lemmatize;
pub use tagger::tag_word;
pub use tokenizer::tokenize;

use empath_core::{TaggedWord, TextAnalyzer, WordClass};

/// Deterministic [`TextAnalyzer`] backed by static lookup tables and
/// suffix rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleAnalyzer;

impl RuleAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl TextAnalyzer for RuleAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize(text)
            .into_iter()
            .map(|token| lemmatizer::lemmatize(&token, WordClass::Other))
            .collect()
    }

    fn tag(&self, tokens: &[String]) -> Vec<TaggedWord> {
        let tagged: Vec<TaggedWord> = tokens
            .iter()
            .map(|token| {
                let class = tagger::tag_word(token);
                TaggedWord::new(lemmatizer::lemmatize(token, class), class)
            })
            .collect();
        tracing::trace!(tokens = tokens.len(), tagged = tagged.len(), "tagged tokens");
        tagged
    }
}
