use rustc_hash::FxHashMap;
use std::path::PathBuf;

use crate::core::error::{RefcheckError, Result};
use crate::discovery::Extractor;

/// Mapping from each unique URL to the documents referencing it.
///
/// URLs keep the order in which they were first recorded, and so does each
/// URL's document list. Built once per run and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct OccurrenceIndex {
    urls: Vec<String>,
    documents: FxHashMap<String, Vec<String>>,
}

impl OccurrenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `path` references `url`.
    ///
    /// A new URL is appended to the unique sequence; a known URL only gains
    /// the path, and only if that path is not already listed for it.
    pub fn record(&mut self, url: &str, path: &str) {
        match self.documents.get_mut(url) {
            Some(paths) => {
                if !paths.iter().any(|p| p == path) {
                    paths.push(path.to_string());
                }
            }
            None => {
                self.urls.push(url.to_string());
                self.documents
                    .insert(url.to_string(), vec![path.to_string()]);
            }
        }
    }

    /// The unique URLs in first-recorded order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// The documents referencing `url`, in recorded order.
    pub fn documents_for(&self, url: &str) -> &[String] {
        self.documents.get(url).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unique_count(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Extract URLs from every corpus document and build the occurrence index.
///
/// Documents are visited in traversal order; a document that cannot be read
/// aborts the run as a corpus access failure rather than surfacing as a
/// per-URL result.
pub fn collect_occurrences(paths: &[PathBuf]) -> Result<OccurrenceIndex> {
    let per_document = Extractor::extract_from_files(paths).map_err(|e| {
        RefcheckError::CorpusAccess(format!("could not read corpus document: {e}"))
    })?;

    let mut index = OccurrenceIndex::new();
    for (path, urls) in &per_document {
        for url in urls {
            index.record(url, path);
        }
    }

    Ok(index)
}
