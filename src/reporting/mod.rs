//! Reporting and structured logging
//!
//! This module renders check results for the console and provides the
//! structured logging helpers used across the application.

pub mod logging;
pub mod output;

// Re-export commonly used items
pub use output::OutputSettings;
