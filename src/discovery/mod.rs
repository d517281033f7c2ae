//! URL discovery and corpus processing
//!
//! This module handles traversing the document corpus, extracting URLs
//! from document text and recording which documents reference which URLs.

pub mod extractor;
pub mod index;
pub mod path_utils;

// Re-export commonly used items
pub use extractor::Extractor;
pub use index::{OccurrenceIndex, collect_occurrences};
pub use path_utils::expand_corpus_path;
