use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Split text into lowercase alphanumeric word tokens.
///
/// Anything that is not a letter or digit acts as a separator, so
/// contractions split at the apostrophe the way a word-level tokenizer
/// does.
pub fn tokenize_words(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Split text into sentences on `.`, `!` and `?` runs.
///
/// Returned slices are trimmed but keep their terminating punctuation;
/// whitespace-only fragments are dropped. Empty input yields no sentences.
pub fn segment_sentences(text: &str) -> Vec<&str> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty() && s.chars().any(|c| c.is_alphanumeric()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercased_and_split_on_non_alphanumerics() {
        assert_eq!(
            tokenize_words("Don't Panic, it's 42!"),
            vec!["don", "t", "panic", "it", "s", "42"]
        );
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(tokenize_words("").is_empty());
        assert!(tokenize_words("  \n\t ").is_empty());
    }

    #[test]
    fn sentences_split_on_terminator_runs() {
        let sents = segment_sentences("First one. Second one! Third?? Done");
        assert_eq!(sents, vec!["First one.", "Second one!", "Third??", "Done"]);
    }

    #[test]
    fn punctuation_only_fragments_are_not_sentences() {
        assert!(segment_sentences("...").is_empty());
        assert!(segment_sentences("").is_empty());
    }
}
