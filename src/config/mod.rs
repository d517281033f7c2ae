//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{USER_AGENT, checking, corpus, output_formats};
use crate::core::error::{RefcheckError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-attempt timeout in milliseconds for HTTP requests
    pub timeout_ms: Option<u64>,

    /// Number of URLs checked concurrently per batch
    pub concurrency: Option<usize>,

    /// File extensions considered part of the corpus
    pub file_types: Option<Vec<String>>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: Some(checking::DEFAULT_TIMEOUT_MS),
            concurrency: Some(checking::DEFAULT_CONCURRENCY),
            file_types: Some(vec![corpus::DOCUMENT_EXTENSION.to_string()]),
            user_agent: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RefcheckError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            RefcheckError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .refcheck.toml in current directory
        if let Ok(config) = Self::load_from_file(".refcheck.toml") {
            return config;
        }

        // Check for .refcheck.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.refcheck.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout_ms) = cli_config.timeout_ms {
            self.timeout_ms = Some(timeout_ms);
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(ref file_types) = cli_config.file_types {
            self.file_types = Some(file_types.clone());
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Convert file_types to HashSet for traversal filtering
    pub fn file_types_as_set(&self) -> HashSet<String> {
        self.file_types
            .as_ref()
            .map(|types| types.iter().cloned().collect())
            .unwrap_or_else(|| {
                HashSet::from([corpus::DOCUMENT_EXTENSION.to_string()])
            })
    }

    /// Get per-attempt timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(checking::DEFAULT_TIMEOUT_MS))
    }

    /// Get concurrency ceiling
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(checking::DEFAULT_CONCURRENCY)
    }

    /// Get the user agent sent with every request
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(USER_AGENT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout_ms) = self.timeout_ms {
            if timeout_ms == 0 {
                return Err(RefcheckError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing milliseconds."
                        .to_string(),
                ));
            }
            if timeout_ms > checking::MAX_TIMEOUT_MS {
                return Err(RefcheckError::Config(format!(
                    "Timeout of {timeout_ms} ms is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(RefcheckError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if concurrency > checking::MAX_CONCURRENCY {
                return Err(RefcheckError::Config(format!(
                    "Concurrency of {concurrency} is extremely high and may cause system instability. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(RefcheckError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Core options
    pub timeout_ms: Option<u64>,     // --timeout-ms
    pub concurrency: Option<usize>,  // --concurrency
    pub file_types: Option<Vec<String>>, // --include

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    // Network
    pub user_agent: Option<String>, // --user-agent

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_ms, Some(checking::DEFAULT_TIMEOUT_MS));
        assert_eq!(config.concurrency, Some(checking::DEFAULT_CONCURRENCY));
        assert_eq!(
            config.file_types,
            Some(vec![corpus::DOCUMENT_EXTENSION.to_string()])
        );
        assert_eq!(
            config.output_format,
            Some(output_formats::DEFAULT.to_string())
        );
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"timeout_ms = 5000\nconcurrency = 2\nuser_agent = \"test-agent\"")?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.timeout_ms, Some(5000));
        assert_eq!(config.concurrency, Some(2));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));

        Ok(())
    }

    #[test]
    fn test_config_load_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"timeout_ms = [not toml").unwrap();

        assert!(Config::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            timeout_ms: Some(4500),
            concurrency: Some(9),
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.timeout_ms, Some(4500));
        assert_eq!(config.concurrency, Some(9));
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_config_merge_keeps_file_values_when_cli_is_silent() {
        let mut config = Config {
            timeout_ms: Some(3000),
            ..Default::default()
        };

        config.merge_with_cli(&CliConfig::default());

        assert_eq!(config.timeout_ms, Some(3000));
    }

    #[test]
    fn test_config_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_ms: Some(0),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_rejects_zero_concurrency() {
        let config = Config {
            concurrency: Some(0),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_rejects_unknown_format() {
        let config = Config {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_accessors_fall_back_to_defaults() {
        let config = Config {
            timeout_ms: None,
            concurrency: None,
            user_agent: None,
            ..Default::default()
        };

        assert_eq!(config.timeout_duration(), Duration::from_millis(12_000));
        assert_eq!(config.concurrency(), 5);
        assert!(config.user_agent().starts_with("refcheck/"));
    }

    #[test]
    fn test_config_file_types_as_set() {
        let config = Config {
            file_types: Some(vec!["md".to_string(), "txt".to_string()]),
            ..Default::default()
        };

        let set = config.file_types_as_set();
        assert!(set.contains("md"));
        assert!(set.contains("txt"));
        assert_eq!(set.len(), 2);
    }
}
