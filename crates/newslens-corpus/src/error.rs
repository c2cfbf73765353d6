use std::path::PathBuf;

/// Errors produced by corpus loading and column resolution.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// A named column is absent from (or incomplete in) a corpus.
    ///
    /// Raised before any computation begins so callers can surface the
    /// offending name directly.
    #[error("the column '{0}' must be present in both corpora")]
    MissingColumn(String),

    #[error("failed to read corpus file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus file {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
