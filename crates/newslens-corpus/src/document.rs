use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-document feature scores keyed by feature name.
///
/// Kept as an ordered map rather than a fixed struct so the corpus crate
/// stays agnostic about which extractor produced the values; the features
/// crate converts its typed vector into this shape before attachment.
pub type FeatureMap = BTreeMap<String, f64>;

/// A single text record with its label and any derived values attached so
/// far.
///
/// `word_count`, `sentence_count` and `token_count` are populated by the
/// text crate before the statistics reporter runs; `advanced_features` is
/// populated by the feature extractor. Both start out `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub text: String,
    pub subject: String,
    pub label: String,

    pub word_count: Option<usize>,
    pub sentence_count: Option<usize>,
    pub token_count: Option<usize>,
    pub advanced_features: Option<FeatureMap>,
}

impl Document {
    /// Build a document carrying only raw fields, no derived values.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        subject: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            subject: subject.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Resolve a raw text field by column name.
    pub fn text_column(&self, column: &str) -> Option<&str> {
        match column {
            "title" => Some(&self.title),
            "text" => Some(&self.text),
            "subject" => Some(&self.subject),
            _ => None,
        }
    }

    /// Resolve a derived numeric value by column name.
    ///
    /// The three surface counts are addressed directly; any other name is
    /// looked up in `advanced_features`. `None` means the value has not been
    /// attached to this document.
    pub fn numeric_column(&self, column: &str) -> Option<f64> {
        match column {
            "word_count" => self.word_count.map(|n| n as f64),
            "sentence_count" => self.sentence_count.map(|n| n as f64),
            "token_count" => self.token_count.map(|n| n as f64),
            key => self
                .advanced_features
                .as_ref()
                .and_then(|features| features.get(key).copied()),
        }
    }
}
