use std::fmt;

/// Comprehensive error types for refcheck operations
#[derive(Debug)]
pub enum RefcheckError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// The document corpus could not be traversed or read
    CorpusAccess(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for RefcheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefcheckError::Io(err) => write!(f, "IO error: {err}"),
            RefcheckError::Config(msg) => write!(f, "Configuration error: {msg}"),
            RefcheckError::CorpusAccess(msg) => write!(f, "Corpus access error: {msg}"),
            RefcheckError::Http(err) => write!(f, "HTTP error: {err}"),
            RefcheckError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            RefcheckError::FileWalking(err) => write!(f, "File walking error: {err}"),
            RefcheckError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for RefcheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RefcheckError::Io(err) => Some(err),
            RefcheckError::Http(err) => Some(err),
            RefcheckError::TomlParsing(err) => Some(err),
            RefcheckError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RefcheckError {
    fn from(err: std::io::Error) -> Self {
        RefcheckError::Io(err)
    }
}

impl From<reqwest::Error> for RefcheckError {
    fn from(err: reqwest::Error) -> Self {
        RefcheckError::Http(err)
    }
}

impl From<toml::de::Error> for RefcheckError {
    fn from(err: toml::de::Error) -> Self {
        RefcheckError::TomlParsing(err)
    }
}

impl From<ignore::Error> for RefcheckError {
    fn from(err: ignore::Error) -> Self {
        RefcheckError::FileWalking(err)
    }
}

/// Type alias for Results using RefcheckError
pub type Result<T> = std::result::Result<T, RefcheckError>;
