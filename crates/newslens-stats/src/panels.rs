//! Histogram and boxplot panels rendered as text.

use std::io::Write;

use tracing::debug;

use newslens_corpus::Corpus;

use crate::CompareError;

const BINS: usize = 20;
const BAR_WIDTH: usize = 40;

const METRICS: [&str; 3] = ["word_count", "sentence_count", "token_count"];

fn render_histogram(
    w: &mut impl Write,
    label: &str,
    sample: &[f64],
    min: f64,
    max: f64,
) -> std::io::Result<()> {
    writeln!(w, "  {label}:")?;
    if sample.is_empty() {
        return writeln!(w, "    (empty)");
    }

    let span = (max - min).max(f64::MIN_POSITIVE);
    let mut bins = [0usize; BINS];
    for &value in sample {
        let idx = (((value - min) / span) * BINS as f64) as usize;
        bins[idx.min(BINS - 1)] += 1;
    }
    let tallest = bins.iter().copied().max().unwrap_or(1).max(1);

    for (i, &count) in bins.iter().enumerate() {
        let lo = min + span * i as f64 / BINS as f64;
        let hi = min + span * (i + 1) as f64 / BINS as f64;
        let bar = "#".repeat(count * BAR_WIDTH / tallest);
        writeln!(w, "    [{lo:9.1}, {hi:9.1}) {bar} {count}")?;
    }
    Ok(())
}

/// Five-number summary with quartiles by linear interpolation.
fn five_number_summary(sample: &[f64]) -> (f64, f64, f64, f64, f64) {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let quantile = |q: f64| -> f64 {
        let pos = q * (sorted.len() - 1) as f64;
        let lower = pos.floor() as usize;
        let upper = pos.ceil() as usize;
        let weight = pos - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    };

    (
        sorted[0],
        quantile(0.25),
        quantile(0.5),
        quantile(0.75),
        sorted[sorted.len() - 1],
    )
}

fn render_boxplot(w: &mut impl Write, label: &str, sample: &[f64]) -> std::io::Result<()> {
    if sample.is_empty() {
        return writeln!(w, "  {label}: (empty)");
    }
    let (min, q1, median, q3, max) = five_number_summary(sample);
    writeln!(
        w,
        "  {label}: |{min:.1} --[ {q1:.1} | {median:.1} | {q3:.1} ]-- {max:.1}|"
    )
}

/// Render paired histogram + boxplot panels for the three surface-count
/// metrics of two corpora.
///
/// Precondition: both corpora must already carry `word_count`,
/// `sentence_count` and `token_count` on every row; the first missing
/// column is reported by name before anything is rendered.
pub fn plot_text_statistics(
    w: &mut impl Write,
    corpus_a: &Corpus,
    label_a: &str,
    corpus_b: &Corpus,
    label_b: &str,
) -> Result<(), CompareError> {
    // Resolve every column up front so a missing one fails the whole call
    // cleanly.
    let mut samples = Vec::with_capacity(METRICS.len());
    for metric in METRICS {
        let a = corpus_a.numeric_column(metric)?;
        let b = corpus_b.numeric_column(metric)?;
        samples.push((metric, a, b));
    }
    debug!(rows_a = corpus_a.len(), rows_b = corpus_b.len(), "rendering panels");

    for (metric, a, b) in &samples {
        let all = a.iter().chain(b.iter()).copied();
        let min = all.clone().fold(f64::INFINITY, f64::min);
        let max = all.fold(f64::NEG_INFINITY, f64::max);

        writeln!(w, "{metric} distribution")?;
        render_histogram(w, label_a, a, min, max)?;
        render_histogram(w, label_b, b, min, max)?;
        writeln!(w, "{metric} boxplot")?;
        render_boxplot(w, label_a, a)?;
        render_boxplot(w, label_b, b)?;
        writeln!(w)?;
    }
    Ok(())
}
