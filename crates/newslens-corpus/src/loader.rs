use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::{Corpus, CorpusError, Document, Result};

/// Load a corpus from a headered CSV file, tagging every row with `label`.
///
/// The expected layout is the usual news-dataset shape of
/// `title,text,subject,date`; only `text` is required, the other columns
/// default to empty when absent. Extra columns are ignored.
pub fn load_csv(path: impl AsRef<Path>, label: &str) -> Result<Corpus> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let csv_err = |source| CorpusError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let position = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let text_idx = position("text")
        .ok_or_else(|| CorpusError::MissingColumn("text".to_string()))?;
    let title_idx = position("title");
    let subject_idx = position("subject");

    let mut docs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i)).unwrap_or_default().to_string()
        };
        docs.push(Document::new(
            field(title_idx),
            field(Some(text_idx)),
            field(subject_idx),
            label,
        ));
    }

    debug!(path = %path.display(), rows = docs.len(), label, "loaded corpus");
    Ok(Corpus::new(docs))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("newslens-loader-{name}-{}.csv", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_isot_layout_and_attaches_label() {
        let path = write_temp(
            "isot",
            "title,text,subject,date\n\
             Headline one,Body one,politicsNews,2017-01-01\n\
             Headline two,Body two,worldnews,2017-01-02\n",
        );
        let corpus = load_csv(&path, "true").unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(corpus.len(), 2);
        let doc = &corpus.docs()[0];
        assert_eq!(doc.title, "Headline one");
        assert_eq!(doc.text, "Body one");
        assert_eq!(doc.subject, "politicsNews");
        assert_eq!(doc.label, "true");
        assert!(doc.word_count.is_none());
    }

    #[test]
    fn missing_text_column_is_a_precondition_error() {
        let path = write_temp("no-text", "headline,body\na,b\n");
        let err = load_csv(&path, "fake").unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, CorpusError::MissingColumn(name) if name == "text"));
    }
}
