use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::error::{RefcheckError, Result};

/// Expand the corpus root locator into the list of document files to scan.
///
/// The root may be a single document or a directory, which is traversed
/// recursively. Only files whose extension is in `file_types` are kept.
/// The returned paths are sorted so that one run's traversal order is
/// stable. A root that does not exist is a corpus access failure, not an
/// empty corpus.
pub fn expand_corpus_path(root: &Path, file_types: &HashSet<String>) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(RefcheckError::CorpusAccess(format!(
            "'{}' does not exist or cannot be read",
            root.display()
        )));
    }

    let mut result_paths = Vec::new();

    if root.is_file() {
        if has_matching_extension(root, file_types) {
            result_paths.push(root.to_path_buf());
        }
        return Ok(result_paths);
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false); // Include hidden files

    for entry in builder.build() {
        let entry = entry?;
        let entry_path = entry.path();

        if entry_path.is_file() && has_matching_extension(entry_path, file_types) {
            result_paths.push(entry_path.to_path_buf());
        }
    }

    result_paths.sort();
    Ok(result_paths)
}

fn has_matching_extension(path: &Path, file_types: &HashSet<String>) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => file_types.contains(ext),
        // Include files without extensions if "" is in the set
        None => file_types.contains(""),
    }
}
