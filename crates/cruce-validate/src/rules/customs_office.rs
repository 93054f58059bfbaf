//! Customs office match (R4).

use cruce_model::{Finding, FindingCategory, RuleId, is_missing};

use super::{CrossingRule, RuleContext};
use crate::matcher;

/// R4: the DODA customs section must match the manifest arrival office.
pub struct CustomsOfficeMatch;

impl CrossingRule for CustomsOfficeMatch {
    fn id(&self) -> RuleId {
        RuleId::R4
    }

    fn name(&self) -> &'static str {
        "Customs Office Match"
    }

    fn description(&self) -> &'static str {
        "Compares the DODA customs section against the manifest arrival office"
    }

    fn recommendation(&self) -> &'static str {
        "Confirm the customs section on the DODA against the manifest."
    }

    fn evaluate(&self, context: &RuleContext<'_>) -> Vec<Finding> {
        let section = &context.documents.declaration.customs_section;
        let arrival = &context.documents.manifest.arrival_office;
        if is_missing(section) {
            return vec![Finding::error(
                self.id(),
                self.name(),
                "Customs section not found on the DODA",
                FindingCategory::MissingData,
            )];
        }
        if is_missing(arrival) {
            return vec![Finding::error(
                self.id(),
                self.name(),
                "Arrival customs office not found in the manifest",
                FindingCategory::MissingData,
            )];
        }
        if !matcher::matches(section, arrival, context.config.match_threshold) {
            return vec![Finding::error(
                self.id(),
                self.name(),
                format!("Customs offices do not match. DODA: '{section}', Manifest: '{arrival}'"),
                FindingCategory::Mismatch,
            )];
        }
        Vec::new()
    }
}
