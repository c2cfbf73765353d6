use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use newslens_corpus::{load_csv, Corpus};
use newslens_features::attach_features;
use newslens_stats::{compare_columns, plot_text_statistics};
use newslens_text::{
    attach_counts, clean, filtered_tokens, ngram_report, render_cloud, top_words_report,
    CleanOptions,
};

#[derive(Parser)]
#[command(name = "newslens")]
#[command(about = "Exploratory analysis for a fake/true news dataset", long_about = None)]
struct Cli {
    /// CSV file with the fake-news articles
    #[arg(long = "fake", value_name = "PATH", global = true)]
    fake: Option<PathBuf>,

    /// CSV file with the true-news articles
    #[arg(long = "true", value_name = "PATH", global = true)]
    true_: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Word clouds, top-10 words and combined bigram/trigram report
    TopWords {
        /// Text column to analyze (title, text or subject)
        #[arg(long, default_value = "title")]
        column: String,
    },
    /// Run the text cleaner over --text or stdin
    Clean {
        /// Text to clean (stdin when absent)
        #[arg(long)]
        text: Option<String>,

        /// Keep repeated character runs
        #[arg(long)]
        keep_repeats: bool,

        /// Keep news-wire source markers
        #[arg(long)]
        keep_wire_sources: bool,

        /// Keep original casing
        #[arg(long)]
        keep_case: bool,
    },
    /// Attach per-document linguistic features
    Features {
        /// Worker count for the parallel fan-out
        #[arg(long, default_value_t = 4)]
        workers: usize,

        /// Emit the augmented corpora as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Surface-count panels and a two-sample t-test
    Stats {
        /// Numeric column to compare
        #[arg(long, default_value = "word_count")]
        column: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Cli { fake, true_, command } = Cli::parse();
    let mut stdout = io::stdout().lock();

    match command {
        Command::TopWords { column } => {
            let (fake, true_) = load_corpora(fake.as_deref(), true_.as_deref())?;
            run_top_words(&mut stdout, &fake, &true_, &column)?;
        }
        Command::Clean {
            text,
            keep_repeats,
            keep_wire_sources,
            keep_case,
        } => {
            let input = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    io::stdin()
                        .read_to_string(&mut buffer)
                        .context("failed to read from stdin")?;
                    buffer
                }
            };
            let options = CleanOptions {
                lowercase: !keep_case,
                collapse_repeats: !keep_repeats,
                strip_wire_sources: !keep_wire_sources,
            };
            writeln!(stdout, "{}", clean(&input, &options))?;
        }
        Command::Features { workers, json } => {
            let (mut fake, mut true_) = load_corpora(fake.as_deref(), true_.as_deref())?;
            attach_counts(&mut fake);
            attach_counts(&mut true_);
            run_features(&mut stdout, fake, true_, workers, json)?;
        }
        Command::Stats { column } => {
            let (mut fake, mut true_) = load_corpora(fake.as_deref(), true_.as_deref())?;
            attach_counts(&mut fake);
            attach_counts(&mut true_);
            plot_text_statistics(&mut stdout, &fake, "Fake Data", &true_, "True Data")?;
            compare_columns(&mut stdout, &fake, &true_, &column)?;
        }
    }

    Ok(())
}

fn load_corpora(fake: Option<&Path>, true_: Option<&Path>) -> Result<(Corpus, Corpus)> {
    let fake_path = fake.context("--fake <PATH> is required for this command")?;
    let true_path = true_.context("--true <PATH> is required for this command")?;

    let fake = load_csv(fake_path, "fake")
        .with_context(|| format!("failed to load {}", fake_path.display()))?;
    let true_ = load_csv(true_path, "true")
        .with_context(|| format!("failed to load {}", true_path.display()))?;
    info!(fake_rows = fake.len(), true_rows = true_.len(), "corpora loaded");
    Ok((fake, true_))
}

fn run_top_words(
    w: &mut impl Write,
    fake: &Corpus,
    true_: &Corpus,
    column: &str,
) -> Result<()> {
    let fake_tokens = filtered_tokens(fake, "fake", column)?;
    let true_tokens = filtered_tokens(true_, "true", column)?;

    render_cloud(w, &fake_tokens, &format!("{column} (fake)"))?;
    top_words_report(w, &fake_tokens, "fake", column)?;
    writeln!(w)?;

    render_cloud(w, &true_tokens, &format!("{column} (true)"))?;
    top_words_report(w, &true_tokens, "true", column)?;
    writeln!(w)?;

    ngram_report(w, &fake_tokens, &true_tokens)?;
    Ok(())
}

fn run_features(
    w: &mut impl Write,
    fake: Corpus,
    true_: Corpus,
    workers: usize,
    json: bool,
) -> Result<()> {
    let fake = attach_features(fake, workers).context("feature extraction failed (fake)")?;
    let true_ = attach_features(true_, workers).context("feature extraction failed (true)")?;

    if json {
        serde_json::to_writer_pretty(&mut *w, &serde_json::json!({
            "fake": fake,
            "true": true_,
        }))?;
        writeln!(w)?;
        return Ok(());
    }

    for (name, corpus) in [("fake", &fake), ("true", &true_)] {
        writeln!(w, "{name}: {} documents with advanced_features", corpus.len())?;
        for column in [
            "flesch_reading_ease",
            "gunning_fog",
            "lexical_diversity",
            "noun_to_verb_ratio",
        ] {
            let values = corpus.numeric_column(column)?;
            let mean = if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            writeln!(w, "  mean {column}: {mean:.3}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_corpora_requires_both_paths() {
        let err = load_corpora(None, Some(Path::new("true.csv"))).unwrap_err();
        assert!(err.to_string().contains("--fake"));

        let err = load_corpora(Some(Path::new("fake.csv")), None).unwrap_err();
        assert!(err.to_string().contains("--true"));
    }
}
