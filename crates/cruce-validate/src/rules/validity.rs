//! Document validity window (R1).
//!
//! A DODA older than the configured limit is presumed stale for a live
//! crossing; future emission dates are rejected outright.

use chrono::NaiveDate;
use cruce_model::{Finding, FindingCategory, RuleId, is_missing};

use super::{CrossingRule, RuleContext};

/// R1: the DODA emission date must fall inside the allowed age window.
pub struct DocumentValidityWindow;

impl CrossingRule for DocumentValidityWindow {
    fn id(&self) -> RuleId {
        RuleId::R1
    }

    fn name(&self) -> &'static str {
        "Document Validity"
    }

    fn description(&self) -> &'static str {
        "Checks that the DODA emission date falls within the allowed age window"
    }

    fn recommendation(&self) -> &'static str {
        "Request an up-to-date DODA before crossing."
    }

    fn evaluate(&self, context: &RuleContext<'_>) -> Vec<Finding> {
        let raw = &context.documents.declaration.emission_date;
        if is_missing(raw) {
            return vec![Finding::error(
                self.id(),
                self.name(),
                "DODA emission date not found",
                FindingCategory::MissingData,
            )];
        }
        let Some(age_days) = document_age(raw, context.as_of) else {
            return vec![Finding::error(
                self.id(),
                self.name(),
                format!("DODA emission date is not a valid date: '{raw}'"),
                FindingCategory::Format,
            )];
        };
        if age_days < 0 {
            return vec![Finding::error(
                self.id(),
                self.name(),
                format!("DODA emission date '{raw}' is in the future"),
                FindingCategory::Mismatch,
            )];
        }
        if age_days > context.config.max_age_days {
            return vec![Finding::error(
                self.id(),
                self.name(),
                format!(
                    "DODA is {age_days} day(s) old; the allowed maximum is {} day(s)",
                    context.config.max_age_days
                ),
                FindingCategory::Mismatch,
            )];
        }
        Vec::new()
    }
}

/// Parses a `YYYY-MM-DD` emission date and returns the document's age in
/// whole days on `as_of`. Negative for future dates, `None` when the string
/// does not parse.
pub fn document_age(raw: &str, as_of: NaiveDate) -> Option<i64> {
    let emitted = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
    Some((as_of - emitted).num_days())
}
