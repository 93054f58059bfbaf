//! Enriched per-rule outcomes for UI-oriented reports.

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, RuleId};

/// Final status of one rule after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Passed,
    Failed,
    Warning,
}

impl RuleStatus {
    /// Returns the status icon shown by capture-UI clients.
    pub fn icon(&self) -> &'static str {
        match self {
            RuleStatus::Passed => "✅",
            RuleStatus::Warning => "⚠️",
            RuleStatus::Failed => "❌",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Passed => "passed",
            RuleStatus::Warning => "warning",
            RuleStatus::Failed => "failed",
        }
    }
}

/// One value pair a rule compared, with provenance labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// What was compared, e.g. "Tractor plate".
    pub label: String,
    pub left_value: String,
    pub right_value: String,
    /// Where the left value came from, e.g. "E-Manifest".
    pub left_source: String,
    pub right_source: String,
    pub matches: bool,
    /// Diagnostic similarity in `[0, 1]`; `None` when either side was
    /// missing and nothing was scored.
    pub similarity: Option<f64>,
}

/// Outcome of a single rule in the enriched report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_id: RuleId,
    pub rule_name: String,
    pub description: String,
    pub status: RuleStatus,
    /// Derived from `status`; carried explicitly for UI clients.
    pub icon: String,
    /// One-line result, e.g. "Plates match the manifest".
    pub summary: String,
    /// Ordered detail lines expanding on the summary.
    pub details: Vec<String>,
    pub comparisons: Vec<Comparison>,
    #[serde(rename = "errors")]
    pub findings: Vec<Finding>,
    /// Remediation hint; present when the rule did not pass.
    pub recommendation: Option<String>,
}
