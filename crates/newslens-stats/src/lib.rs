//! Statistical comparison of two labeled corpora.
//!
//! [`compare_columns`] runs an independent two-sample t-test on a named
//! numeric column; [`plot_text_statistics`] renders paired histogram and
//! boxplot panels for the three surface-count columns. Both check their
//! column preconditions before doing any work.

mod panels;
mod ttest;

pub use panels::plot_text_statistics;
pub use ttest::{compare_columns, ttest_ind, CompareError, TTestOutcome};

/// Conventional significance threshold for the reported verdict.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;
