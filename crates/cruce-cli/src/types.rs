//! Shared types for command results.

use std::path::PathBuf;

use cruce_model::ValidationReport;

/// Result of a validate command run.
#[derive(Debug)]
pub struct ValidateResult {
    /// The full validation report.
    pub report: ValidationReport,
    /// Path of the written report file, when an output directory was given.
    pub report_path: Option<PathBuf>,
}
