//! The linguistic annotation handle.

mod ner;
mod pos;

use std::sync::LazyLock;

use regex::Regex;

pub use pos::PosTag;

use crate::affect::AffectLexicon;
use newslens_text::segment_sentences;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?|[0-9]+(?:\.[0-9]+)?|[^\sA-Za-z0-9]").unwrap()
});

/// One token with its punctuation flag and coarse POS tag.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub is_punct: bool,
    pub pos: PosTag,
}

/// The annotation of one document: tokens, sentence lengths and entity
/// mentions. Everything the feature extractor reads in one pass.
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub tokens: Vec<Token>,
    /// Character length of each segmented sentence.
    pub sentence_lengths: Vec<usize>,
    pub num_entities: usize,
}

/// Explicitly owned bundle of annotation resources.
///
/// Construction is cheap (the lexicons are static), so every parallel
/// worker builds its own instance rather than sharing one across the
/// fan-out boundary.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    affect: AffectLexicon,
}

impl Annotator {
    pub fn new() -> Self {
        Self {
            affect: AffectLexicon::new(),
        }
    }

    pub fn affect(&self) -> &AffectLexicon {
        &self.affect
    }

    /// Run the full annotation pass over one document's text.
    pub fn annotate(&self, text: &str) -> Annotation {
        let sentences = segment_sentences(text);

        let mut tokens = Vec::new();
        let mut num_entities = 0;
        for sentence in &sentences {
            let mut sentence_words: Vec<&str> = Vec::new();
            for m in TOKEN.find_iter(sentence) {
                let raw = m.as_str();
                let is_punct = !raw.chars().next().is_some_and(char::is_alphanumeric);
                if !is_punct {
                    sentence_words.push(raw);
                }
                tokens.push(Token {
                    text: raw.to_string(),
                    is_punct,
                    pos: if is_punct { PosTag::Other } else { pos::tag(raw) },
                });
            }
            num_entities += ner::count_mentions(&sentence_words);
        }

        Annotation {
            tokens,
            sentence_lengths: sentences.iter().map(|s| s.chars().count()).collect(),
            num_entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotate_separates_words_and_punctuation() {
        let annotator = Annotator::new();
        let annotation = annotator.annotate("Hello, world!");
        let texts: Vec<_> = annotation.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", ",", "world", "!"]);
        let puncts: Vec<_> = annotation.tokens.iter().map(|t| t.is_punct).collect();
        assert_eq!(puncts, vec![false, true, false, true]);
    }

    #[test]
    fn annotate_records_sentence_lengths() {
        let annotator = Annotator::new();
        let annotation = annotator.annotate("One two. Three!");
        assert_eq!(annotation.sentence_lengths, vec![8, 6]);
    }

    #[test]
    fn annotate_empty_text_is_empty() {
        let annotator = Annotator::new();
        let annotation = annotator.annotate("");
        assert!(annotation.tokens.is_empty());
        assert!(annotation.sentence_lengths.is_empty());
        assert_eq!(annotation.num_entities, 0);
    }

    #[test]
    fn entities_are_counted_across_sentences() {
        let annotator = Annotator::new();
        let annotation =
            annotator.annotate("Donald Trump visited Berlin. Angela Merkel met him there.");
        assert!(annotation.num_entities >= 3);
    }
}
