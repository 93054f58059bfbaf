//! Rule evaluation engine.
//!
//! Runs the rule catalog in display order, isolates per-rule faults, and
//! reports progress through an injected observer.

use std::panic::{self, AssertUnwindSafe};

use chrono::{NaiveDate, Utc};
use cruce_model::{
    DocumentSet, Finding, FindingCategory, RuleId, Severity, UserData, ValidationConfig,
};

use crate::observer::{NoopObserver, ValidationObserver};
use crate::rules::{self, CrossingRule, RuleContext};

/// One rule's findings together with its catalog metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleRun {
    pub rule_id: RuleId,
    pub rule_name: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub findings: Vec<Finding>,
}

/// Result of evaluating the full catalog against one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Date the validity window was measured against.
    pub as_of: NaiveDate,
    /// One entry per rule, in display order R1..R5.
    pub runs: Vec<RuleRun>,
}

impl Evaluation {
    /// All findings across rules, in display order.
    pub fn findings(&self) -> Vec<Finding> {
        self.runs
            .iter()
            .flat_map(|run| run.findings.clone())
            .collect()
    }

    pub fn total_findings(&self) -> usize {
        self.runs.iter().map(|run| run.findings.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    /// True when no rule produced any finding.
    pub fn is_clean(&self) -> bool {
        self.total_findings() == 0
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.runs
            .iter()
            .flat_map(|run| run.findings.iter())
            .filter(|finding| finding.severity == severity)
            .count()
    }
}

static NOOP: NoopObserver = NoopObserver;

/// Runs the rule catalog over one request.
///
/// The engine never fails: malformed field values degrade to findings
/// inside the rules, and a panicking rule is converted to an internal-fault
/// finding scoped to that rule.
pub struct RuleEngine<'a> {
    config: &'a ValidationConfig,
    observer: &'a dyn ValidationObserver,
}

impl<'a> RuleEngine<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self {
            config,
            observer: &NOOP,
        }
    }

    /// Replaces the default no-op observer.
    #[must_use]
    pub fn with_observer(mut self, observer: &'a dyn ValidationObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Evaluates all rules with today's UTC date as the reference.
    pub fn run(&self, documents: &DocumentSet, user: &UserData) -> Evaluation {
        self.run_at(documents, user, Utc::now().date_naive())
    }

    /// Evaluates all rules against a fixed reference date.
    pub fn run_at(
        &self,
        documents: &DocumentSet,
        user: &UserData,
        as_of: NaiveDate,
    ) -> Evaluation {
        let context = RuleContext {
            documents,
            user,
            config: self.config,
            as_of,
        };
        let mut runs = Vec::new();
        for rule in rules::catalog() {
            let findings = evaluate_isolated(rule.as_ref(), &context);
            self.observer.rule_evaluated(rule.id(), rule.name(), &findings);
            runs.push(RuleRun {
                rule_id: rule.id(),
                rule_name: rule.name(),
                description: rule.description(),
                recommendation: rule.recommendation(),
                findings,
            });
        }
        let evaluation = Evaluation { as_of, runs };
        self.observer.run_completed(evaluation.total_findings());
        evaluation
    }
}

/// Runs one rule, converting a panic into an internal-fault finding so the
/// remaining rules still execute.
fn evaluate_isolated(rule: &dyn CrossingRule, context: &RuleContext<'_>) -> Vec<Finding> {
    panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(context))).unwrap_or_else(|_| {
        vec![Finding::error(
            rule.id(),
            rule.name(),
            format!("{} could not be validated: internal fault", rule.name()),
            FindingCategory::Internal,
        )]
    })
}
