//! Structured evaluation events.
//!
//! The engine reports per-rule results through an injected observer instead
//! of logging from inside rule code. Observers receive finished findings
//! only and can never influence evaluation.

use cruce_model::{Finding, RuleId, Severity};

/// Receiver for rule evaluation events.
pub trait ValidationObserver: Send + Sync {
    /// Called once per rule, in display order, with the findings it produced.
    fn rule_evaluated(&self, _rule: RuleId, _rule_name: &str, _findings: &[Finding]) {}

    /// Called once after the last rule with the total finding count.
    fn run_completed(&self, _total_findings: usize) {}
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl ValidationObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
///
/// Finding messages embed raw document values (plates, person names), so
/// messages are logged verbatim only when raw-value logging is switched on;
/// the default events carry rule ids, counts, and categories alone.
#[derive(Debug, Default)]
pub struct TracingObserver {
    log_raw_values: bool,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opt into logging finding messages verbatim.
    #[must_use]
    pub fn with_raw_values(mut self, log_raw_values: bool) -> Self {
        self.log_raw_values = log_raw_values;
        self
    }
}

impl ValidationObserver for TracingObserver {
    fn rule_evaluated(&self, rule: RuleId, rule_name: &str, findings: &[Finding]) {
        if findings.is_empty() {
            tracing::info!(rule = %rule, name = rule_name, "rule passed");
            return;
        }
        let errors = findings
            .iter()
            .filter(|finding| finding.severity == Severity::Error)
            .count();
        let warnings = findings.len() - errors;
        tracing::warn!(
            rule = %rule,
            name = rule_name,
            errors,
            warnings,
            "rule produced findings"
        );
        for finding in findings {
            if self.log_raw_values {
                tracing::debug!(
                    rule = %rule,
                    severity = ?finding.severity,
                    category = ?finding.category,
                    message = %finding.message,
                    "finding"
                );
            } else {
                tracing::debug!(
                    rule = %rule,
                    severity = ?finding.severity,
                    category = ?finding.category,
                    "finding (message redacted)"
                );
            }
        }
    }

    fn run_completed(&self, total_findings: usize) {
        tracing::info!(total_findings, "validation complete");
    }
}
