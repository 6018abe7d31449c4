//! Word tokenizer.

/// Split `text` into lowercase tokens.
///
/// Alphanumeric runs become word tokens, with `'` and `-` allowed inside
/// a word ("don't", "well-being"). Each remaining non-whitespace
/// character becomes a standalone punctuation token; those never match
/// any keyword downstream but keep token positions faithful to the input.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' || ch == '-' {
            current.extend(ch.to_lowercase());
        } else {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            if !ch.is_whitespace() {
                tokens.push(ch.to_string());
            }
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentence() {
        assert_eq!(
            tokenize("I am feeling sad"),
            vec!["i", "am", "feeling", "sad"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn test_punctuation_becomes_own_token() {
        assert_eq!(tokenize("Hello, world!"), vec!["hello", ",", "world", "!"]);
    }

    #[test]
    fn test_apostrophe_and_hyphen_stay_inside_words() {
        assert_eq!(tokenize("don't worry"), vec!["don't", "worry"]);
        assert_eq!(tokenize("well-being"), vec!["well-being"]);
    }

    #[test]
    fn test_lowercases_unicode() {
        assert_eq!(tokenize("Café MÜDE"), vec!["café", "müde"]);
    }
}
