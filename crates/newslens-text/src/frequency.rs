//! Stopword-filtered token streams and n-gram frequency tables.

use std::io::{self, Write};

use ahash::AHashMap;
use newslens_corpus::Corpus;
use rayon::prelude::*;
use tracing::debug;

use crate::{stopwords, tokenize_words};

/// An n-gram of 1 to 3 tokens.
pub type Ngram = Vec<String>;

/// Occurrence counts for the n-grams of one token sequence.
///
/// Insertion order is irrelevant; ranking is by count descending with
/// lexicographic n-gram order as the stable tie-break, so `top` is
/// deterministic across runs regardless of hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: AHashMap<Ngram, usize>,
}

impl FrequencyTable {
    /// Count all contiguous `n`-token windows of `tokens`.
    pub fn from_tokens(tokens: &[String], n: usize) -> Self {
        assert!((1..=3).contains(&n), "n-gram size must be 1, 2 or 3");
        let mut counts = AHashMap::new();
        if tokens.len() >= n {
            for window in tokens.windows(n) {
                *counts.entry(window.to_vec()).or_insert(0) += 1;
            }
        }
        debug!(n, distinct = counts.len(), "built frequency table");
        Self { counts }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, ngram: &[String]) -> usize {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// The `k` most frequent n-grams, count descending.
    pub fn top(&self, k: usize) -> Vec<(Ngram, usize)> {
        let mut ranked: Vec<_> = self
            .counts
            .iter()
            .map(|(ngram, &count)| (ngram.clone(), count))
            .collect();
        ranked.par_sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }
}

/// Tokens from the chosen column of all label-matching documents, lowercased,
/// alphanumeric only and with English stopwords removed.
pub fn filtered_tokens(
    corpus: &Corpus,
    label: &str,
    column: &str,
) -> newslens_corpus::Result<Vec<String>> {
    corpus.require_text_column(column)?;
    let stop = stopwords();

    let joined = corpus
        .filter_label(label)
        .filter_map(|doc| doc.text_column(column))
        .collect::<Vec<_>>()
        .join(" ");

    let tokens: Vec<String> = tokenize_words(&joined)
        .into_iter()
        .filter(|token| !stop.contains(token.as_str()))
        .collect();
    debug!(label, column, tokens = tokens.len(), "filtered corpus tokens");
    Ok(tokens)
}

fn write_ranked(w: &mut impl Write, ranked: &[(Ngram, usize)]) -> io::Result<()> {
    for (ngram, count) in ranked {
        writeln!(w, "  {}: {count}", ngram.join(" "))?;
    }
    Ok(())
}

/// Print the ten most frequent tokens of a filtered token stream.
pub fn top_words_report(
    w: &mut impl Write,
    tokens: &[String],
    label_name: &str,
    column: &str,
) -> io::Result<()> {
    let table = FrequencyTable::from_tokens(tokens, 1);
    writeln!(w, "Top 10 words for {column} ({label_name}):")?;
    write_ranked(w, &table.top(10))
}

/// Print the ten most frequent bigrams and trigrams of the two token
/// streams taken together.
pub fn ngram_report(
    w: &mut impl Write,
    tokens_a: &[String],
    tokens_b: &[String],
) -> io::Result<()> {
    let mut combined = Vec::with_capacity(tokens_a.len() + tokens_b.len());
    combined.extend_from_slice(tokens_a);
    combined.extend_from_slice(tokens_b);

    writeln!(w, "Top 10 bigrams:")?;
    write_ranked(w, &FrequencyTable::from_tokens(&combined, 2).top(10))?;
    writeln!(w, "Top 10 trigrams:")?;
    write_ranked(w, &FrequencyTable::from_tokens(&combined, 3).top(10))
}

#[cfg(test)]
mod tests {
    use newslens_corpus::Document;

    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn counts_contiguous_windows() {
        let tokens = toks(&["a", "b", "a", "b", "c"]);
        let bigrams = FrequencyTable::from_tokens(&tokens, 2);
        assert_eq!(bigrams.count(&toks(&["a", "b"])), 2);
        assert_eq!(bigrams.count(&toks(&["b", "a"])), 1);
        assert_eq!(bigrams.count(&toks(&["b", "c"])), 1);
        assert_eq!(bigrams.len(), 3);
    }

    #[test]
    fn short_input_yields_empty_table() {
        let tokens = toks(&["only", "two"]);
        assert!(FrequencyTable::from_tokens(&tokens, 3).is_empty());
        assert!(FrequencyTable::from_tokens(&[], 1).is_empty());
    }

    #[test]
    fn top_ranks_by_count_then_lexicographically() {
        let tokens = toks(&["b", "b", "c", "c", "a"]);
        let top = FrequencyTable::from_tokens(&tokens, 1).top(10);
        assert_eq!(
            top,
            vec![
                (toks(&["b"]), 2),
                (toks(&["c"]), 2),
                (toks(&["a"]), 1),
            ]
        );
    }

    #[test]
    fn top_is_deterministic_across_builds() {
        let tokens = toks(&["x", "y", "z", "x", "y", "z"]);
        let first = FrequencyTable::from_tokens(&tokens, 1).top(3);
        let second = FrequencyTable::from_tokens(&tokens, 1).top(3);
        assert_eq!(first, second);
    }

    #[test]
    fn filtered_tokens_selects_label_and_drops_stopwords() {
        let corpus = Corpus::new(vec![
            Document::new("The Election Results", "", "", "fake"),
            Document::new("Weather is Nice", "", "", "true"),
        ]);
        let tokens = filtered_tokens(&corpus, "fake", "title").unwrap();
        assert_eq!(tokens, toks(&["election", "results"]));
    }

    #[test]
    fn filtered_tokens_rejects_unknown_column() {
        let corpus = Corpus::new(vec![Document::new("t", "x", "s", "fake")]);
        let err = filtered_tokens(&corpus, "fake", "headline").unwrap_err();
        assert!(matches!(
            err,
            newslens_corpus::CorpusError::MissingColumn(name) if name == "headline"
        ));
    }

    #[test]
    fn ngram_report_merges_both_streams() {
        let a = toks(&["fake", "news"]);
        let b = toks(&["real", "news"]);
        let mut out = Vec::new();
        ngram_report(&mut out, &a, &b).unwrap();
        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Top 10 bigrams:"));
        assert!(report.contains("fake news: 1"));
        assert!(report.contains("news real: 1"));
    }
}
