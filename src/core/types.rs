use serde::Serialize;
use std::fmt;

use crate::core::constants::{checking, exit_codes, http_status};
use crate::discovery::OccurrenceIndex;

/// Outcome of checking a single URL.
///
/// Exactly one of these is produced per unique URL, in the same order the
/// URL appeared in the deduplicated input sequence. Failures are captured
/// here as values and never propagate as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Final HTTP status code, or 0 when no response was received
    pub status: u16,
    /// Whether the response status was in the success range
    pub ok: bool,
    /// Failure description when no response was received
    pub error: Option<String>,
}

impl CheckResult {
    /// Create a result from an HTTP response status.
    pub fn from_status(status: u16, ok: bool) -> Self {
        Self {
            status,
            ok,
            error: None,
        }
    }

    /// Create the result for an attempt aborted by its deadline.
    pub fn timeout() -> Self {
        Self {
            status: http_status::NO_RESPONSE,
            ok: false,
            error: Some(checking::TIMEOUT_ERROR.to_string()),
        }
    }

    /// Create the result for a request that failed without a response.
    pub fn failure(description: String) -> Self {
        Self {
            status: http_status::NO_RESPONSE,
            ok: false,
            error: Some(description),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn is_not_ok(&self) -> bool {
        !self.ok
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.status != http_status::NO_RESPONSE {
            write!(f, "{}", self.status)
        } else if let Some(desc) = &self.error {
            write!(f, "{desc}")
        } else {
            write!(f, "no response")
        }
    }
}

/// A single unreachable URL together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlFailure {
    pub url: String,
    pub status: u16,
    pub error: Option<String>,
    /// Every document referencing this URL, in occurrence-index order
    pub documents: Vec<String>,
}

/// Aggregated outcome of one run.
///
/// Derived deterministically from the occurrence index and the check result
/// sequence; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub ok_count: usize,
    pub fail_count: usize,
    pub failures: Vec<UrlFailure>,
}

impl Report {
    /// Aggregate check results against the occurrence index.
    ///
    /// `results` must be aligned index-for-index with `index.urls()`, which
    /// the batch scheduler guarantees.
    pub fn build(index: &OccurrenceIndex, results: &[CheckResult]) -> Self {
        debug_assert_eq!(index.unique_count(), results.len());

        let mut ok_count = 0;
        let mut failures = Vec::new();

        for (url, result) in index.urls().iter().zip(results) {
            if result.is_ok() {
                ok_count += 1;
            } else {
                failures.push(UrlFailure {
                    url: url.clone(),
                    status: result.status,
                    error: result.error.clone(),
                    documents: index.documents_for(url).to_vec(),
                });
            }
        }

        Self {
            ok_count,
            fail_count: failures.len(),
            failures,
        }
    }

    /// Process exit status for this report: 0 when every URL was reachable.
    pub fn exit_code(&self) -> i32 {
        if self.fail_count > 0 {
            exit_codes::FAILURES
        } else {
            exit_codes::SUCCESS
        }
    }
}
