//! Consistency rules.
//!
//! Each rule is a pure evaluator over the extracted document set (plus the
//! capture-form data where noted). Rules never fail hard: bad or missing
//! input degrades to findings, and the engine isolates anything worse.

mod cross_check;
mod customs_office;
mod operator;
mod plates;
mod validity;

use chrono::NaiveDate;
use cruce_model::{DocumentSet, Finding, RuleId, UserData, ValidationConfig};

pub use cross_check::{ManifestPrefileCrossCheck, broker_code};
pub use customs_office::CustomsOfficeMatch;
pub use operator::OperatorIdentityMatch;
pub use plates::PlateCrossCheck;
pub use validity::{DocumentValidityWindow, document_age};

/// Everything a rule may read during one evaluation. Read-only.
pub struct RuleContext<'a> {
    pub documents: &'a DocumentSet,
    pub user: &'a UserData,
    pub config: &'a ValidationConfig,
    /// Reference date the validity window is measured against.
    pub as_of: NaiveDate,
}

/// A consistency rule over one crossing's documents.
///
/// Implementors are unit structs registered in [`catalog`]. `evaluate` must
/// be pure: same context, same findings, no I/O, no shared state. Bad or
/// missing input is reported through findings, never through panics or
/// errors.
pub trait CrossingRule: Send + Sync {
    /// Stable rule identifier carried by every finding.
    fn id(&self) -> RuleId;

    /// Human label used in findings and reports.
    fn name(&self) -> &'static str;

    /// One-line description of what the rule checks.
    fn description(&self) -> &'static str;

    /// Remediation hint shown when the rule does not pass.
    fn recommendation(&self) -> &'static str;

    /// Evaluates the rule, returning zero or more findings.
    fn evaluate(&self, context: &RuleContext<'_>) -> Vec<Finding>;
}

/// All rules in display order R1..R5.
pub fn catalog() -> Vec<Box<dyn CrossingRule>> {
    vec![
        Box::new(DocumentValidityWindow),
        Box::new(PlateCrossCheck),
        Box::new(ManifestPrefileCrossCheck),
        Box::new(CustomsOfficeMatch),
        Box::new(OperatorIdentityMatch),
    ]
}
