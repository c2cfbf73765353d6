use std::io::{self, Write};

use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

use newslens_corpus::Corpus;

use crate::SIGNIFICANCE_LEVEL;

/// Result of an independent two-sample t-test.
#[derive(Debug, Clone, Copy)]
pub struct TTestOutcome {
    pub t_statistic: f64,
    pub p_value: f64,
}

impl TTestOutcome {
    #[must_use]
    pub fn significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }
}

fn mean_and_variance(sample: &[f64]) -> (f64, f64) {
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    // Sample variance with Bessel's correction.
    let variance = if sample.len() < 2 {
        0.0
    } else {
        sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
    };
    (mean, variance)
}

/// Independent two-sample Student's t-test with pooled (equal) variance.
///
/// Degenerate inputs follow the usual library behavior: fewer than two
/// values overall or on either side yields NaN statistics rather than an
/// error.
pub fn ttest_ind(sample_a: &[f64], sample_b: &[f64]) -> TTestOutcome {
    let (n_a, n_b) = (sample_a.len(), sample_b.len());
    if n_a < 2 || n_b < 2 {
        return TTestOutcome {
            t_statistic: f64::NAN,
            p_value: f64::NAN,
        };
    }

    let (mean_a, var_a) = mean_and_variance(sample_a);
    let (mean_b, var_b) = mean_and_variance(sample_b);

    let df = (n_a + n_b - 2) as f64;
    let pooled_variance =
        ((n_a as f64 - 1.0) * var_a + (n_b as f64 - 1.0) * var_b) / df;
    let standard_error =
        (pooled_variance * (1.0 / n_a as f64 + 1.0 / n_b as f64)).sqrt();

    let t_statistic = if standard_error == 0.0 {
        // Zero pooled variance: identical constants tie, distinct ones
        // separate perfectly.
        if mean_a == mean_b {
            0.0
        } else {
            f64::INFINITY * (mean_a - mean_b).signum()
        }
    } else {
        (mean_a - mean_b) / standard_error
    };

    let p_value = match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * (1.0 - dist.cdf(t_statistic.abs())),
        Err(_) => f64::NAN,
    };

    debug!(t_statistic, p_value, df, "two-sample t-test");
    TTestOutcome { t_statistic, p_value }
}

/// Compare a named numeric column between two corpora.
///
/// Fails with a precondition error naming the column if it is absent from
/// either corpus; otherwise runs [`ttest_ind`], prints a human-readable
/// verdict to `w` and returns the raw outcome.
pub fn compare_columns(
    w: &mut impl Write,
    corpus_a: &Corpus,
    corpus_b: &Corpus,
    column: &str,
) -> Result<TTestOutcome, CompareError> {
    let sample_a = corpus_a.numeric_column(column)?;
    let sample_b = corpus_b.numeric_column(column)?;

    let outcome = ttest_ind(&sample_a, &sample_b);

    writeln!(
        w,
        "t-statistic: {:.4}, p-value: {:.4}",
        outcome.t_statistic, outcome.p_value
    )?;
    if outcome.significant() {
        writeln!(
            w,
            "There is a significant difference in '{column}' between the two corpora."
        )?;
    } else {
        writeln!(
            w,
            "There is no significant difference in '{column}' between the two corpora."
        )?;
    }

    Ok(outcome)
}

/// Column comparison can fail on the precondition check or while writing
/// the report.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error(transparent)]
    Corpus(#[from] newslens_corpus::CorpusError),

    #[error("failed to write the comparison report")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use newslens_corpus::{CorpusError, Document};

    use super::*;

    fn corpus_with_counts(counts: &[usize]) -> Corpus {
        counts
            .iter()
            .map(|&n| {
                let mut doc = Document::new("", "", "", "x");
                doc.word_count = Some(n);
                doc
            })
            .collect()
    }

    #[test]
    fn separated_samples_are_significant() {
        let low = corpus_with_counts(&[10, 11, 12, 10, 11, 12, 10, 11]);
        let high = corpus_with_counts(&[50, 51, 52, 50, 51, 52, 50, 51]);
        let mut out = Vec::new();

        let outcome = compare_columns(&mut out, &low, &high, "word_count").unwrap();
        assert!(outcome.p_value < 0.05);
        assert!(outcome.significant());
        assert!(outcome.t_statistic < 0.0);

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("significant difference in 'word_count'"));
    }

    #[test]
    fn same_distribution_is_not_significant() {
        let a = corpus_with_counts(&[10, 12, 11, 13, 10, 12, 11, 13, 12, 11]);
        let b = corpus_with_counts(&[11, 13, 10, 12, 11, 13, 10, 12, 11, 12]);
        let mut out = Vec::new();

        let outcome = compare_columns(&mut out, &a, &b, "word_count").unwrap();
        assert!(outcome.p_value > 0.05);
        assert!(!outcome.significant());
    }

    #[test]
    fn missing_column_is_named_in_the_error() {
        let with = corpus_with_counts(&[1, 2, 3]);
        let without: Corpus = vec![Document::new("", "", "", "x")].into_iter().collect();
        let mut out = Vec::new();

        let err = compare_columns(&mut out, &with, &without, "word_count").unwrap_err();
        assert!(matches!(
            err,
            CompareError::Corpus(CorpusError::MissingColumn(name)) if name == "word_count"
        ));
        // Nothing was written before the precondition fired.
        assert!(out.is_empty());
    }

    #[test]
    fn compare_error_displays_the_underlying_precondition() {
        let err = CompareError::from(CorpusError::MissingColumn("word_count".into()));
        assert_eq!(
            err.to_string(),
            "the column 'word_count' must be present in both corpora"
        );
    }

    #[test]
    fn identical_constant_samples_tie() {
        let outcome = ttest_ind(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]);
        assert_eq!(outcome.t_statistic, 0.0);
        assert!((outcome.p_value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn undersized_samples_yield_nan() {
        let outcome = ttest_ind(&[1.0], &[2.0, 3.0]);
        assert!(outcome.t_statistic.is_nan());
        assert!(outcome.p_value.is_nan());
    }
}
