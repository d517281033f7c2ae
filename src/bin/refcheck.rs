use clap::Parser;
use refcheck::config::{CliConfig, Config};
use refcheck::core::constants::{corpus, exit_codes, output_formats};
use refcheck::core::error::Result;
use refcheck::core::types::Report;
use refcheck::discovery::{collect_occurrences, expand_corpus_path};
use refcheck::reporting::OutputSettings;
use refcheck::reporting::logging;
use refcheck::reporting::output;
use refcheck::ui::{Cli, ProgressReporter, cli_to_config};
use refcheck::validation::{HttpChecker, run_in_batches};

use std::path::Path;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_refcheck_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::FATAL);
        }
    }
}

/// Main checking logic extracted from main() for testing
pub async fn run_refcheck_logic(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    // Walk the corpus; an unreadable root aborts the whole run
    let root = cli.path.as_deref().unwrap_or(corpus::DEFAULT_ROOT);
    let documents = expand_corpus_path(Path::new(root), &config.file_types_as_set())?;
    logging::log_corpus_info(root, documents.len());

    if output_settings.should_show_url_lines() {
        println!("Checking references under: {root}");
    }

    // Extract and deduplicate with provenance
    let index = collect_occurrences(&documents)?;
    logging::log_url_discovery(index.unique_count());

    if index.is_empty() {
        output::display_no_urls(&output_settings);
        return Ok(exit_codes::SUCCESS);
    }

    if output_settings.should_show_url_lines() {
        println!(
            "Found {} unique URL(s). Checking...\n",
            index.unique_count()
        );
    }

    // Check every unique URL in bounded, order-preserving batches
    let mut progress = ProgressReporter::new(output_settings.show_progress);
    progress.start_url_checking(index.unique_count());

    let started = Instant::now();
    let checker = HttpChecker::new(&config)?;
    let results =
        run_in_batches(&checker, index.urls(), config.concurrency(), Some(&progress)).await;

    for (url, result) in index.urls().iter().zip(&results) {
        logging::log_url_result(url, result);
    }

    let report = Report::build(&index, &results);
    progress.finish_url_checking(report.ok_count, index.unique_count());
    progress.finish_and_clear();
    logging::log_check_complete(
        index.unique_count(),
        report.fail_count,
        started.elapsed().as_millis(),
    );

    output::display_check_lines(&index, &results, &output_settings);
    output::display_report(&report, &output_settings);

    Ok(report.exit_code())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT)
        .to_string();
    let show_progress = !quiet && !cli_config.no_progress && output_format == output_formats::TEXT;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}
