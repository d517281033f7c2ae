use crate::config::Config;
use crate::core::types::CheckResult;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: timeout={}ms, concurrency={}, user_agent={}",
        config.timeout_duration().as_millis(),
        config.concurrency(),
        config.user_agent()
    );
}

/// Log corpus traversal information
pub fn log_corpus_info(root: &str, document_count: usize) {
    info!("Corpus root '{root}': {document_count} document(s)");
}

/// Log URL discovery information
pub fn log_url_discovery(unique_urls: usize) {
    info!("Found {unique_urls} unique URL(s)");
}

/// Log checking completion
pub fn log_check_complete(url_count: usize, failures: usize, duration_ms: u128) {
    if failures == 0 {
        info!("Checking complete: {url_count}/{url_count} URLs reachable ({duration_ms}ms)");
    } else {
        warn!(
            "Checking complete: {}/{} URLs reachable, {} failure(s) ({}ms)",
            url_count - failures,
            url_count,
            failures,
            duration_ms
        );
    }
}

/// Log individual URL check results for debugging
pub fn log_url_result(url: &str, result: &CheckResult) {
    if result.is_ok() {
        debug!("✓ {url} -> {}", result.status);
    } else {
        debug!("✗ {url} -> {result}");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
