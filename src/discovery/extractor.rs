use grep::regex::RegexMatcher;
use grep::searcher::Searcher;
use grep::searcher::sinks::UTF8;
use linkify::{LinkFinder, LinkKind};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use rustc_hash::FxHashSet;

use std::io;
use std::path::{Path, PathBuf};

/// Quick per-line filter; only lines carrying an HTTP(S) scheme are parsed.
const URL_SCHEME_PATTERN: &str = r"https?://";

static LINE_MATCHER: Lazy<RegexMatcher> = Lazy::new(|| {
    RegexMatcher::new(URL_SCHEME_PATTERN).expect("Failed to compile URL scheme pattern")
});

// Reuse LinkFinder instance for better performance
static LINK_FINDER: Lazy<LinkFinder> = Lazy::new(|| {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
});

// Markdown and quoting artifacts that cling to the end of a match
static TRAILING_JUNK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[)\]`"<>]+$"#).expect("Failed to compile trailing junk pattern"));

/// Parses raw document text into candidate URL strings.
///
/// Pure string-to-sequence transformation: no network or file access happens
/// here apart from the explicit file wrappers. Within one document each
/// distinct URL is reported at most once, first occurrence first; global
/// deduplication is the occurrence index's job.
#[derive(Default, Debug)]
pub struct Extractor;

impl Extractor {
    /// Extract URLs from one document's text, in first-occurrence order.
    pub fn extract_from_text(text: &str) -> Vec<String> {
        Self::dedup_in_document(text.lines().flat_map(Self::parse_line))
    }

    /// Extract URLs from one document on disk.
    ///
    /// Uses a regex pre-scan so only lines that can contain a URL are handed
    /// to the link parser.
    pub fn extract_from_file(path: &Path) -> io::Result<Vec<String>> {
        let mut candidate_lines = Vec::new();

        Searcher::new().search_path(
            &*LINE_MATCHER,
            path,
            UTF8(|_line_number, line| {
                candidate_lines.push(line.to_string());
                Ok(true)
            }),
        )?;

        Ok(Self::dedup_in_document(
            candidate_lines.iter().flat_map(|line| Self::parse_line(line)),
        ))
    }

    /// Extract URLs from every document, keeping the input order.
    ///
    /// Files are processed in parallel; the order-preserving collect keeps
    /// the result aligned with `paths`.
    pub fn extract_from_files(paths: &[PathBuf]) -> io::Result<Vec<(String, Vec<String>)>> {
        paths
            .par_iter()
            .map(|path| -> io::Result<(String, Vec<String>)> {
                let urls = Self::extract_from_file(path)
                    .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
                Ok((path.display().to_string(), urls))
            })
            .collect()
    }

    /// Parse the URLs out of a single line of text.
    ///
    /// A match must begin with `http://` or `https://`; trailing markdown
    /// and quoting artifacts are stripped and surrounding whitespace
    /// trimmed.
    fn parse_line(line: &str) -> Vec<String> {
        LINK_FINDER
            .links(line)
            .filter(|link| {
                let s = link.as_str();
                s.starts_with("http://") || s.starts_with("https://")
            })
            .filter_map(|link| {
                let stripped = TRAILING_JUNK.replace(link.as_str(), "");
                let url = stripped.trim();
                if url.is_empty() {
                    None
                } else {
                    Some(url.to_string())
                }
            })
            .collect()
    }

    fn dedup_in_document(urls: impl Iterator<Item = String>) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut unique = Vec::new();

        for url in urls {
            if seen.insert(url.clone()) {
                unique.push(url);
            }
        }

        unique
    }
}
