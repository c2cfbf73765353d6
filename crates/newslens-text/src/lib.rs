//! Text normalization and lexical frequency analysis.
//!
//! Two concerns live here:
//!
//! - [`cleaner`]: a fixed-order regex normalization pipeline that reduces raw
//!   article text to ASCII Latin letters and whitespace.
//! - [`frequency`]: stopword-filtered token streams, n-gram frequency tables
//!   and the top-word / word-cloud reports built on them.

pub mod cleaner;
pub mod cloud;
pub mod frequency;
pub mod stopwords;
pub mod tokenizer;

pub use cleaner::{clean, CleanOptions};
pub use cloud::render_cloud;
pub use frequency::{filtered_tokens, ngram_report, top_words_report, FrequencyTable};
pub use stopwords::stopwords;
pub use tokenizer::{segment_sentences, tokenize_words};

use newslens_corpus::Corpus;

/// Populate `word_count`, `sentence_count` and `token_count` on every row.
///
/// Word count is a plain whitespace split, token count is the word
/// tokenizer's output and sentence count comes from the sentence segmenter.
/// The statistics reporter requires all three before it will run.
pub fn attach_counts(corpus: &mut Corpus) {
    for doc in corpus.docs_mut() {
        doc.word_count = Some(doc.text.split_whitespace().count());
        doc.sentence_count = Some(segment_sentences(&doc.text).len());
        doc.token_count = Some(tokenize_words(&doc.text).len());
    }
}

#[cfg(test)]
mod tests {
    use newslens_corpus::Document;

    use super::*;

    #[test]
    fn attach_counts_fills_all_three_columns() {
        let mut corpus = Corpus::new(vec![Document::new(
            "t",
            "One sentence here. And a second one!",
            "s",
            "fake",
        )]);
        attach_counts(&mut corpus);

        let doc = &corpus.docs()[0];
        assert_eq!(doc.word_count, Some(7));
        assert_eq!(doc.sentence_count, Some(2));
        assert_eq!(doc.token_count, Some(7));
    }

    #[test]
    fn attach_counts_on_empty_text_is_zero() {
        let mut corpus = Corpus::new(vec![Document::new("", "", "", "fake")]);
        attach_counts(&mut corpus);
        let doc = &corpus.docs()[0];
        assert_eq!(doc.word_count, Some(0));
        assert_eq!(doc.sentence_count, Some(0));
        assert_eq!(doc.token_count, Some(0));
    }
}
