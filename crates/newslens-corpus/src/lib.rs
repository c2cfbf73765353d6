//! Data model for the news EDA toolkit: documents, labeled corpora and
//! named-column access with precondition checking.
//!
//! A [`Corpus`] is an ordered collection of [`Document`]s loaded from a CSV
//! file and tagged with a single label. Derived per-document values (surface
//! counts, extracted feature maps) are attached by the other crates; this
//! crate only defines where they live and how they are looked up by name.

mod corpus;
mod document;
mod error;
mod loader;

pub use corpus::Corpus;
pub use document::{Document, FeatureMap};
pub use error::CorpusError;
pub use loader::load_csv;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CorpusError>;
