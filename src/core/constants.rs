/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values used across the application,
/// making them easier to maintain and modify.
/// Corpus defaults
pub mod corpus {
    /// Default corpus root checked when no path argument is given
    pub const DEFAULT_ROOT: &str = "articles";
    /// Document extension considered part of the corpus
    pub const DOCUMENT_EXTENSION: &str = "md";
}

/// Timeout and concurrency constants
pub mod checking {
    /// Default per-attempt timeout in milliseconds
    pub const DEFAULT_TIMEOUT_MS: u64 = 12_000;
    /// Maximum reasonable per-attempt timeout in milliseconds (24 hours)
    pub const MAX_TIMEOUT_MS: u64 = 86_400_000;
    /// Default number of URLs checked concurrently per batch
    pub const DEFAULT_CONCURRENCY: usize = 5;
    /// Maximum reasonable concurrency ceiling
    pub const MAX_CONCURRENCY: usize = 1000;
    /// Maximum redirects followed per attempt
    pub const MAX_REDIRECTS: usize = 10;
    /// Error string recorded when an attempt is aborted by its deadline
    pub const TIMEOUT_ERROR: &str = "timeout";
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 405 Method Not Allowed - server rejected the request method
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    /// HTTP 501 Not Implemented - server does not implement the method
    pub const NOT_IMPLEMENTED: u16 = 501;
    /// Status recorded when no response was received at all
    pub const NO_RESPONSE: u16 = 0;
}

/// Process exit codes
pub mod exit_codes {
    /// All URLs reachable, or no URLs found
    pub const SUCCESS: i32 = 0;
    /// At least one URL unreachable
    pub const FAILURES: i32 = 1;
    /// The run aborted outside normal per-URL handling
    pub const FATAL: i32 = 2;
}

/// Output format constants
pub mod output_formats {
    /// Text output format - human-readable lines for the console
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
