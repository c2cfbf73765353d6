use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CorpusError, Document, Result};

/// An ordered collection of documents sharing a schema.
///
/// Row order is meaningful: partitioning and parallel processing elsewhere
/// in the workspace guarantee that derived values land back on the same
/// rows they were computed from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn docs_mut(&mut self) -> &mut [Document] {
        &mut self.docs
    }

    pub fn into_docs(self) -> Vec<Document> {
        self.docs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }

    /// Documents whose label matches `label`, in corpus order.
    pub fn filter_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Document> {
        self.docs.iter().filter(move |doc| doc.label == label)
    }

    /// Concatenate partitions back into one corpus, preserving partition
    /// order end to end.
    pub fn concat(parts: Vec<Corpus>) -> Self {
        let total = parts.iter().map(Corpus::len).sum();
        let mut docs = Vec::with_capacity(total);
        for part in parts {
            docs.extend(part.docs);
        }
        debug!(rows = docs.len(), "concatenated corpus partitions");
        Self { docs }
    }

    /// Collect a derived numeric column across all rows.
    ///
    /// Fails with [`CorpusError::MissingColumn`] if any row lacks the value,
    /// before returning any partial data.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>> {
        self.docs
            .iter()
            .map(|doc| {
                doc.numeric_column(column)
                    .ok_or_else(|| CorpusError::MissingColumn(column.to_string()))
            })
            .collect()
    }

    /// Check that a raw text column name is resolvable for this schema.
    pub fn require_text_column(&self, column: &str) -> Result<()> {
        match column {
            "title" | "text" | "subject" => Ok(()),
            other => Err(CorpusError::MissingColumn(other.to_string())),
        }
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            docs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Corpus {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Corpus {
        Corpus::new(vec![
            Document::new("a", "first text", "news", "fake"),
            Document::new("b", "second text", "news", "true"),
            Document::new("c", "third text", "news", "fake"),
        ])
    }

    #[test]
    fn filter_label_keeps_order() {
        let corpus = sample();
        let titles: Vec<_> = corpus.filter_label("fake").map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn concat_preserves_partition_order() {
        let corpus = sample();
        let docs = corpus.into_docs();
        let first = Corpus::new(docs[..1].to_vec());
        let rest = Corpus::new(docs[1..].to_vec());

        let rejoined = Corpus::concat(vec![first, rest]);
        let titles: Vec<_> = rejoined.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn numeric_column_fails_when_any_row_lacks_value() {
        let mut corpus = sample();
        corpus.docs_mut()[0].word_count = Some(2);
        // Row 1 and 2 still have no word_count.
        let err = corpus.numeric_column("word_count").unwrap_err();
        assert!(matches!(err, CorpusError::MissingColumn(name) if name == "word_count"));
    }

    #[test]
    fn numeric_column_collects_in_row_order() {
        let mut corpus = sample();
        for (i, doc) in corpus.docs_mut().iter_mut().enumerate() {
            doc.word_count = Some(i + 1);
        }
        assert_eq!(corpus.numeric_column("word_count").unwrap(), vec![1.0, 2.0, 3.0]);
    }
}
