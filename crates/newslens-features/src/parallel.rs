//! Contiguous corpus partitioning and the scoped worker pool.
//!
//! This is the only concurrency in the workspace and it is a plain map:
//! each worker receives an independent shard and its own annotation
//! resources, there is no cross-worker communication, and results are
//! rejoined in shard order so row order is preserved end to end. The call
//! blocks until every worker finishes; a failed or panicked worker fails
//! the whole call with no partial result.

use std::borrow::Cow;
use std::thread;

use indicatif::{ProgressBar, ProgressStyle};
use newslens_corpus::Corpus;
use tracing::debug;

use crate::annotator::Annotator;
use crate::extractor::extract_features;
use crate::FeatureError;

fn progress_bar_setup(len: usize, message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message);
    pb
}

/// Split a corpus into `parts` contiguous shards whose sizes differ by at
/// most one row: the first `len % parts` shards take the extra row.
///
/// `parts` is clamped to at least 1; shards beyond the row count come out
/// empty.
pub fn partition(corpus: Corpus, parts: usize) -> Vec<Corpus> {
    let parts = parts.max(1);
    let len = corpus.len();
    let base = len / parts;
    let extra = len % parts;

    let mut docs = corpus.into_docs().into_iter();
    let mut shards = Vec::with_capacity(parts);
    for i in 0..parts {
        let size = base + usize::from(i < extra);
        shards.push(docs.by_ref().take(size).collect());
    }
    shards
}

/// Apply `per_chunk` to `workers` contiguous shards of the corpus on
/// independent worker threads and concatenate the results in shard order.
pub fn parallelize_over_chunks<F>(
    corpus: Corpus,
    per_chunk: F,
    workers: usize,
) -> Result<Corpus, FeatureError>
where
    F: Fn(Corpus) -> Result<Corpus, FeatureError> + Sync,
{
    let workers = workers.max(1);
    debug!(rows = corpus.len(), workers, "dispatching corpus shards");
    let shards = partition(corpus, workers);

    let per_chunk = &per_chunk;
    let processed = thread::scope(|scope| {
        let handles: Vec<_> = shards
            .into_iter()
            .map(|shard| scope.spawn(move || per_chunk(shard)))
            .collect();

        // Every handle is joined before the first failure is surfaced; a
        // handle left unjoined would make the scope re-raise its panic.
        let results: Vec<_> = handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| match handle.join() {
                Ok(result) => result,
                Err(_) => Err(FeatureError::WorkerFailure {
                    index,
                    message: "worker panicked".to_string(),
                }),
            })
            .collect();
        results.into_iter().collect::<Result<Vec<_>, _>>()
    })?;

    Ok(Corpus::concat(processed))
}

/// Attach the `advanced_features` column to every row, fanning the work out
/// across `workers` shards. Each worker owns a private [`Annotator`].
pub fn attach_features(corpus: Corpus, workers: usize) -> Result<Corpus, FeatureError> {
    let pb = progress_bar_setup(corpus.len(), "Extracting features");

    let result = parallelize_over_chunks(
        corpus,
        |mut shard| {
            let annotator = Annotator::new();
            for doc in shard.docs_mut() {
                doc.advanced_features =
                    Some(extract_features(&annotator, &doc.text).into_map());
                pb.inc(1);
            }
            Ok(shard)
        },
        workers,
    )?;

    pb.finish_with_message("Feature extraction complete");
    Ok(result)
}
