use serde::Serialize;
use tracing::trace;

use newslens_corpus::FeatureMap;

use crate::annotator::{Annotator, PosTag};
use crate::readability;

/// Fixed-schema per-document feature scores.
///
/// Computed independently per document with no cross-document state; every
/// field degenerates to 0 (or the formula's natural empty value) on empty
/// input rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    pub flesch_reading_ease: f64,
    pub gunning_fog: f64,
    pub lexical_diversity: f64,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub num_entities: usize,
    pub noun_to_verb_ratio: f64,
    pub positive_emotion_score: f64,
    pub negative_emotion_score: f64,
}

impl FeatureVector {
    /// Flatten into the name → score map that attaches to a document.
    pub fn into_map(self) -> FeatureMap {
        let mut map = FeatureMap::new();
        map.insert("flesch_reading_ease".into(), self.flesch_reading_ease);
        map.insert("gunning_fog".into(), self.gunning_fog);
        map.insert("lexical_diversity".into(), self.lexical_diversity);
        map.insert("avg_word_length".into(), self.avg_word_length);
        map.insert("avg_sentence_length".into(), self.avg_sentence_length);
        map.insert("num_entities".into(), self.num_entities as f64);
        map.insert("noun_to_verb_ratio".into(), self.noun_to_verb_ratio);
        map.insert("positive_emotion_score".into(), self.positive_emotion_score);
        map.insert("negative_emotion_score".into(), self.negative_emotion_score);
        map
    }
}

/// Compute the full feature vector for one document's text.
pub fn extract_features(annotator: &Annotator, text: &str) -> FeatureVector {
    let annotation = annotator.annotate(text);

    let words: Vec<&str> = annotation
        .tokens
        .iter()
        .filter(|t| !t.is_punct)
        .map(|t| t.text.as_str())
        .collect();
    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64
    };

    let split: Vec<&str> = text.split_whitespace().collect();
    let lexical_diversity = if split.is_empty() {
        0.0
    } else {
        let unique: ahash::AHashSet<&str> = split.iter().copied().collect();
        unique.len() as f64 / split.len() as f64
    };

    let avg_sentence_length = if annotation.sentence_lengths.is_empty() {
        0.0
    } else {
        annotation.sentence_lengths.iter().sum::<usize>() as f64
            / annotation.sentence_lengths.len() as f64
    };

    let nouns = annotation.tokens.iter().filter(|t| t.pos == PosTag::Noun).count();
    let verbs = annotation.tokens.iter().filter(|t| t.pos == PosTag::Verb).count();
    // The +1 keeps the ratio finite when verbs are absent.
    let noun_to_verb_ratio = nouns as f64 / (verbs + 1) as f64;

    let lower_words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let affect = annotator.affect().frequencies(&lower_words);

    let features = FeatureVector {
        flesch_reading_ease: readability::flesch_reading_ease(text),
        gunning_fog: readability::gunning_fog(text),
        lexical_diversity,
        avg_word_length,
        avg_sentence_length,
        num_entities: annotation.num_entities,
        noun_to_verb_ratio,
        positive_emotion_score: affect.positive,
        negative_emotion_score: affect.negative,
    };
    trace!(?features, "extracted features");
    features
}
