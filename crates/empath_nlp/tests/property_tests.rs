//! Property-based tests for the rule analyzer.

use proptest::prelude::*;
use empath_core::classify::Classifier;
use empath_core::{Lexicon, TextAnalyzer};
use empath_nlp::RuleAnalyzer;
use std::sync::Arc;

proptest! {
    /// Tokenization never panics and never emits empty or
    /// whitespace-containing tokens, for any input.
    #[test]
    fn tokenize_emits_clean_tokens(text in ".{0,200}") {
        let analyzer = RuleAnalyzer::new();
        for token in analyzer.tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
        }
    }

    /// Word tokens come out lowercase.
    #[test]
    fn tokenize_lowercases(text in "[a-zA-Z ]{0,100}") {
        let analyzer = RuleAnalyzer::new();
        for token in analyzer.tokenize(&text) {
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }

    /// Tagging preserves length: one tagged word per token.
    #[test]
    fn tag_preserves_length(text in ".{0,200}") {
        let analyzer = RuleAnalyzer::new();
        let tokens = analyzer.tokenize(&text);
        prop_assert_eq!(analyzer.tag(&tokens).len(), tokens.len());
    }

    /// The full pipeline is a pure function: classifying the same input
    /// twice yields the same tally, percentages and response.
    #[test]
    fn classification_is_idempotent(text in ".{0,200}") {
        let classifier = Classifier::new(Arc::new(RuleAnalyzer::new()), Lexicon::default());
        let first = classifier.classify(&text);
        let second = classifier.classify(&text);
        prop_assert_eq!(first, second);
    }

    /// Lemmas never come out empty: every token maps to some base form.
    #[test]
    fn lemmas_are_never_empty(text in ".{0,200}") {
        let analyzer = RuleAnalyzer::new();
        let tokens = analyzer.tokenize(&text);
        for word in analyzer.tag(&tokens) {
            prop_assert!(!word.lemma.is_empty());
        }
    }
}
