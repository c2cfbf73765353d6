//! Per-document linguistic feature extraction.
//!
//! [`extract_features`] computes a fixed-schema [`FeatureVector`] of
//! readability, lexical, syntactic and emotional-affect scores for one
//! document. All annotation resources (tokenizer, sentence segmenter, POS
//! and entity heuristics, affect lexicon) are bundled into an explicitly
//! owned [`Annotator`] handle so each parallel worker can hold its own
//! instance instead of sharing ambient global state.
//!
//! The only concurrency in the workspace lives in [`parallel`]: a
//! contiguous corpus partitioner and a scoped worker pool that applies a
//! pure per-shard function and rejoins results in shard order.

pub mod affect;
pub mod annotator;
pub mod extractor;
pub mod parallel;
pub mod readability;

pub use affect::AffectLexicon;
pub use annotator::Annotator;
pub use extractor::{extract_features, FeatureVector};
pub use parallel::{attach_features, parallelize_over_chunks, partition};

/// Errors from the parallel feature-extraction fan-out.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// A worker failed or panicked; the whole batch is aborted and no
    /// partial result is returned.
    #[error("worker {index} failed: {message}")]
    WorkerFailure { index: usize, message: String },
}
