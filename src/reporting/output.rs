use crate::core::constants::{http_status, output_formats};
use crate::core::types::{CheckResult, Report, UrlFailure};
use crate::discovery::OccurrenceIndex;

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

impl OutputSettings {
    pub fn is_text(&self) -> bool {
        self.output_format == output_formats::TEXT
    }

    pub fn should_show_url_lines(&self) -> bool {
        !self.quiet && self.is_text()
    }
}

/// Print the corpus-empty notice.
pub fn display_no_urls(settings: &OutputSettings) {
    if settings.is_text() {
        println!("No URLs found.");
    } else {
        display_report(&Report::build(&OccurrenceIndex::new(), &[]), settings);
    }
}

/// Print one line per checked URL, in occurrence-index order.
pub fn display_check_lines(
    index: &OccurrenceIndex,
    results: &[CheckResult],
    settings: &OutputSettings,
) {
    if !settings.should_show_url_lines() {
        return;
    }

    for (url, result) in index.urls().iter().zip(results) {
        if result.is_ok() {
            println!("OK  {}  {}", result.status, url);
        } else {
            let files = index.documents_for(url).join(", ");
            println!("FAIL  {result}  ({files})");
            println!("{url}");
        }
    }
}

/// Print the summary and, when failures exist, the itemized listing.
pub fn display_report(report: &Report, settings: &OutputSettings) {
    if !settings.is_text() {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: could not serialize report: {e}"),
        }
        return;
    }

    println!("\n---");
    println!("OK: {}, FAIL: {}", report.ok_count, report.fail_count);

    if report.fail_count > 0 {
        println!("\nFailed URLs:");
        for failure in &report.failures {
            println!("{}", failure.url);
            println!(
                "  status: {}, in: {}",
                status_or_error(failure),
                failure.documents.join(", ")
            );
        }
    }
}

fn status_or_error(failure: &UrlFailure) -> String {
    if failure.status != http_status::NO_RESPONSE {
        failure.status.to_string()
    } else {
        failure.error.clone().unwrap_or_else(|| "no response".to_string())
    }
}
