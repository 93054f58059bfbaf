//! Aggregate validation results: terse response and enriched report.

use serde::{Deserialize, Serialize};

use crate::extraction::DocumentExtraction;
use crate::finding::{Finding, Severity};
use crate::outcome::RuleOutcome;

/// Overall status across all five rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    /// Every rule passed.
    Success,
    /// No rule failed, but at least one carries warnings.
    Partial,
    /// At least one rule failed.
    Failed,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Success => "success",
            OverallStatus::Partial => "partial",
            OverallStatus::Failed => "failed",
        }
    }
}

/// Rule-count rollup for the enriched report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Always 5; carried explicitly for wire consumers.
    pub total_rules: usize,
    pub passed_rules: usize,
    pub failed_rules: usize,
    pub warning_rules: usize,
    pub overall_status: OverallStatus,
    /// Mean extraction confidence across the five documents, in `[0, 1]`.
    pub confidence_average: f64,
    /// Wall-clock evaluation time in seconds, two decimals.
    pub processing_time: f64,
}

/// Terse validation result for machine consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// True iff no rule produced any finding.
    pub success: bool,
    pub message: String,
    /// All findings across rules, in rule display order.
    pub errors: Vec<Finding>,
}

impl ValidationResponse {
    /// Number of error-severity findings.
    pub fn error_count(&self) -> usize {
        count_severity(&self.errors, Severity::Error)
    }

    /// Number of warning-severity findings.
    pub fn warning_count(&self) -> usize {
        count_severity(&self.errors, Severity::Warning)
    }

    /// True when at least one error-severity finding exists.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Full enriched report for UI consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub success: bool,
    pub message: String,
    /// Flat findings list, identical content to the terse response.
    pub errors: Vec<Finding>,
    pub summary: ValidationSummary,
    /// One outcome per rule, in display order R1..R5.
    pub rules: Vec<RuleOutcome>,
    /// One entry per document.
    pub extraction: Vec<DocumentExtraction>,
    /// RFC 3339 UTC timestamp of report assembly.
    pub timestamp: String,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        count_severity(&self.errors, Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        count_severity(&self.errors, Severity::Warning)
    }
}

fn count_severity(findings: &[Finding], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}
