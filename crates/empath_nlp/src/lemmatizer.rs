//! Base-form reduction.
//!
//! Two layers per word class: an irregular-forms exception table, then
//! ordered suffix detachment rules. The rule set follows the usual
//! dictionary-lemmatizer layout — nouns and verbs carry most of the
//! rules, adjectives only comparative/superlative endings, adverbs none
//! at all. A word that hits neither layer passes through unchanged, so
//! words that already are base forms survive intact.

use empath_core::WordClass;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static VERB_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "be"),
        ("is", "be"),
        ("are", "be"),
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("has", "have"),
        ("had", "have"),
        ("did", "do"),
        ("does", "do"),
        ("done", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("goes", "go"),
        ("said", "say"),
        ("made", "make"),
        ("took", "take"),
        ("taken", "take"),
        ("got", "get"),
        ("gotten", "get"),
        ("gave", "give"),
        ("given", "give"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("felt", "feel"),
        ("saw", "see"),
        ("seen", "see"),
        ("came", "come"),
        ("found", "find"),
        ("told", "tell"),
        ("left", "leave"),
        ("kept", "keep"),
        ("meant", "mean"),
        ("began", "begin"),
        ("begun", "begin"),
        ("ran", "run"),
        ("met", "meet"),
        ("paid", "pay"),
        ("sat", "sit"),
        ("held", "hold"),
        ("heard", "hear"),
        ("brought", "bring"),
        ("bought", "buy"),
        ("built", "build"),
        ("caught", "catch"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("fell", "fall"),
        ("flew", "fly"),
        ("flown", "fly"),
        ("forgot", "forget"),
        ("forgotten", "forget"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("spoke", "speak"),
        ("spoken", "speak"),
        ("stood", "stand"),
        ("understood", "understand"),
        ("won", "win"),
        ("wore", "wear"),
        ("worn", "wear"),
        ("wrote", "write"),
        ("written", "write"),
        ("lost", "lose"),
        ("used", "use"),
    ]
    .into_iter()
    .collect()
});

static NOUN_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("selves", "self"),
    ]
    .into_iter()
    .collect()
});

static ADJECTIVE_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("further", "far"),
        ("farther", "far"),
        ("elder", "old"),
        ("eldest", "old"),
    ]
    .into_iter()
    .collect()
});

static ADVERB_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [("better", "well"), ("best", "well"), ("farther", "far"), ("further", "far")]
        .into_iter()
        .collect()
});

/// Detachment rules, tried in order; the first matching suffix wins.
/// `respell` marks rules where the bare stem needs respelling fixes
/// (undoubling, restoring a dropped final "e").
struct Rule {
    suffix: &'static str,
    replacement: &'static str,
    respell: bool,
}

const fn rule(suffix: &'static str, replacement: &'static str, respell: bool) -> Rule {
    Rule {
        suffix,
        replacement,
        respell,
    }
}

const VERB_RULES: &[Rule] = &[
    rule("sses", "ss", false),
    rule("ies", "y", false),
    rule("ches", "ch", false),
    rule("shes", "sh", false),
    rule("xes", "x", false),
    rule("zes", "z", false),
    rule("es", "e", false),
    rule("ing", "", true),
    rule("ed", "", true),
    rule("s", "", false),
];

const NOUN_RULES: &[Rule] = &[
    rule("sses", "ss", false),
    rule("ies", "y", false),
    rule("ches", "ch", false),
    rule("shes", "sh", false),
    rule("xes", "x", false),
    rule("zes", "z", false),
    rule("men", "man", false),
    rule("s", "", false),
];

const ADJECTIVE_RULES: &[Rule] = &[
    rule("iest", "y", false),
    rule("ier", "y", false),
    rule("est", "", true),
    rule("er", "", true),
];

/// Reduce `word` to its base form under the given grammatical category.
/// `word` is expected to be lowercase already.
pub fn lemmatize(word: &str, class: WordClass) -> String {
    match class {
        WordClass::Verb => reduce(word, &VERB_EXCEPTIONS, VERB_RULES),
        WordClass::Adjective => reduce(word, &ADJECTIVE_EXCEPTIONS, ADJECTIVE_RULES),
        // Adverbs have no regular detachment morphology.
        WordClass::Adverb => match ADVERB_EXCEPTIONS.get(word) {
            Some(base) => (*base).to_string(),
            None => word.to_string(),
        },
        WordClass::Other => reduce(word, &NOUN_EXCEPTIONS, NOUN_RULES),
    }
}

fn reduce(
    word: &str,
    exceptions: &HashMap<&'static str, &'static str>,
    rules: &[Rule],
) -> String {
    if let Some(base) = exceptions.get(word) {
        return (*base).to_string();
    }
    apply_rules(word, rules).unwrap_or_else(|| word.to_string())
}

fn apply_rules(word: &str, rules: &[Rule]) -> Option<String> {
    for rule in rules {
        let Some(stem) = word.strip_suffix(rule.suffix) else {
            continue;
        };
        if stem.chars().count() < 2 {
            continue;
        }
        // Bare "-s" must not fire on "-ss"/"-us"/"-is" words ("class",
        // "bus", "this") or on two-letter stems ("was", "has" keep their
        // irregular handling).
        if rule.suffix == "s"
            && (stem.ends_with('s')
                || word.ends_with("us")
                || word.ends_with("is")
                || stem.chars().count() < 3)
        {
            continue;
        }

        let mut lemma = format!("{stem}{}", rule.replacement);
        if rule.respell {
            respell(&mut lemma);
        }
        return Some(lemma);
    }
    None
}

/// Fix up a stem left by stripping "-ing"/"-ed"/"-er"/"-est":
/// undouble a doubled final consonant ("stopped" -> "stop") or restore a
/// dropped final "e" after a consonant-vowel-consonant tail
/// ("loving" -> "love"). Doubled l/s/z are legitimate word endings and
/// stay ("falling" -> "fall").
fn respell(lemma: &mut String) {
    let chars: Vec<char> = lemma.chars().collect();
    let n = chars.len();
    if n < 3 {
        return;
    }

    let last = chars[n - 1];
    let prev = chars[n - 2];
    if last == prev && last.is_ascii_alphabetic() && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z')
    {
        lemma.pop();
        return;
    }

    let third = chars[n - 3];
    if !is_vowel(last)
        && !matches!(last, 'w' | 'x' | 'y')
        && is_vowel(prev)
        && !is_vowel(third)
    {
        lemma.push('e');
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
