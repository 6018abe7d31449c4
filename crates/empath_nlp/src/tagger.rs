//! Deterministic part-of-speech tagging.
//!
//! Lookup tables first (closed-class words, then common open-class
//! words), suffix heuristics second, `Other` as the default. Fine-grained
//! distinctions (past vs. gerund, comparative vs. superlative) are
//! collapsed to the four classes the lemmatizer cares about.

use empath_core::WordClass;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Determiners, pronouns, prepositions and conjunctions. None of these
/// inflect in a way the lemmatizer handles, so they all map to `Other`.
static CLOSED_CLASS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // determiners
        "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its",
        "our", "their", "all", "both", "each", "every", "some", "any", "no", "another", "such",
        // pronouns
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "who", "whom",
        "what", "which", "myself", "yourself", "himself", "herself", "itself",
        // prepositions
        "of", "in", "to", "for", "with", "on", "at", "from", "by", "about", "into", "through",
        "during", "before", "after", "above", "below", "between", "under", "since", "without",
        "within", "among", "across",
        // conjunctions
        "and", "or", "but", "nor", "yet", "because", "although", "though", "while", "if",
        "unless", "until", "when", "where",
    ]
    .into_iter()
    .collect()
});

static ADVERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "so", "very", "well", "just", "now", "then", "here", "there", "too", "also",
        "only", "really", "quite", "never", "always", "often", "sometimes", "still", "even",
        "again", "soon", "almost", "back", "out", "up", "down", "maybe", "perhaps", "rather",
        "pretty", "enough",
    ]
    .into_iter()
    .collect()
});

/// Common verbs, base and irregular inflected forms. Irregular forms are
/// listed so the lemmatizer's exception table receives the right class
/// hint; regular inflections are caught by the suffix heuristics below.
static VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "be", "am", "is", "are", "was", "were", "been", "have", "has", "had", "do", "does",
        "did", "done", "say", "said", "get", "got", "gotten", "make", "made", "go", "went",
        "gone", "know", "knew", "known", "take", "took", "taken", "see", "saw", "seen", "come",
        "came", "think", "thought", "look", "want", "give", "gave", "given", "use", "used",
        "find", "found", "tell", "told", "ask", "work", "seem", "feel", "felt", "try", "leave",
        "left", "kept", "keep", "mean", "meant", "call", "need", "become", "began", "begin",
        "begun", "help", "talk", "turn", "start", "show", "hear", "heard", "play", "run", "ran",
        "move", "like", "live", "believe", "hold", "held", "bring", "brought", "happen", "write",
        "wrote", "written", "sit", "sat", "stand", "stood", "lose", "lost", "pay", "paid",
        "meet", "met", "wear", "wore", "worn", "win", "won", "understand", "understood",
    ]
    .into_iter()
    .collect()
});

/// Common adjectives, including the emotion vocabulary the service ships
/// with. Listing them here keeps them out of the verb suffix heuristics
/// ("depressed" must lemmatize as an adjective, not as a past-tense verb).
static ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "good", "new", "first", "last", "long", "great", "little", "own", "other", "old",
        "right", "big", "high", "different", "small", "large", "next", "early", "young",
        "important", "few", "bad", "same", "able", "best", "better", "worse", "worst", "low",
        "late", "hard", "nice", "blue", "red", "warm", "cold", "tired", "calm",
        // emotion vocabulary, with its comparative/superlative forms
        "sad", "depressed", "melancholy", "unhappy", "lonely", "happy", "euphoric", "joyful",
        "cheerful", "fine", "alright", "okay", "sadder", "saddest", "happier", "happiest",
        "lonelier", "loneliest", "unhappier", "unhappiest",
    ]
    .into_iter()
    .collect()
});

/// Tag a single lowercase token.
pub fn tag_word(word: &str) -> WordClass {
    // Punctuation and number tokens carry no grammatical class here.
    if !word.chars().any(|c| c.is_alphabetic()) {
        return WordClass::Other;
    }

    if CLOSED_CLASS.contains(word) {
        return WordClass::Other;
    }
    if ADVERBS.contains(word) {
        return WordClass::Adverb;
    }
    if VERBS.contains(word) {
        return WordClass::Verb;
    }
    if ADJECTIVES.contains(word) {
        return WordClass::Adjective;
    }

    // Suffix heuristics for words outside the lookup tables.
    if word.ends_with("ly") {
        return WordClass::Adverb;
    }
    if word.ends_with("ing") || word.ends_with("ed") {
        return WordClass::Verb;
    }
    if word.ends_with("ive")
        || word.ends_with("ous")
        || word.ends_with("ful")
        || word.ends_with("less")
        || word.ends_with("able")
    {
        return WordClass::Adjective;
    }

    WordClass::Other
}
