// Command-line interface definitions and parsing for refcheck

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Document or directory to check (default: the articles/ corpus)
    pub path: Option<String>,

    // Core Options
    /// Per-attempt timeout in milliseconds (default: 12000)
    #[arg(short = 't', long, value_name = "MS", help_heading = "Core Options")]
    pub timeout_ms: Option<u64>,

    /// Concurrent requests per batch (default: 5)
    #[arg(
        short = 'c',
        long,
        value_name = "COUNT",
        help_heading = "Core Options"
    )]
    pub concurrency: Option<usize>,

    // Filtering & Content
    /// File extensions to process (e.g., md,markdown)
    #[arg(long, value_name = "EXTENSIONS", help_heading = "Filtering & Content")]
    pub include: Option<String>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into the CliConfig merge layer
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig::default();

    // Core options
    if let Some(timeout_ms) = cli.timeout_ms {
        cli_config.timeout_ms = Some(timeout_ms);
    }
    if let Some(concurrency) = cli.concurrency {
        cli_config.concurrency = Some(concurrency);
    }

    // Filtering & inclusion
    if let Some(ref include_str) = cli.include {
        cli_config.file_types = Some(
            include_str
                .split(',')
                .filter_map(|s| {
                    if s.trim().is_empty() {
                        None
                    } else {
                        Some(s.trim().to_string())
                    }
                })
                .collect(),
        );
    }

    // Output & format
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.no_progress = cli.no_progress;
    if let Some(ref format) = cli.format {
        cli_config.output_format = Some(format.clone());
    }

    // Network
    if let Some(ref user_agent) = cli.user_agent {
        cli_config.user_agent = Some(user_agent.clone());
    }

    // Configuration
    if let Some(ref config) = cli.config {
        cli_config.config_file = Some(config.clone());
    }
    cli_config.no_config = cli.no_config;

    cli_config
}
