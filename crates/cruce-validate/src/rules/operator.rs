//! Operator identity match (R5).

use cruce_model::{Finding, FindingCategory, RuleId, is_missing};

use super::{CrossingRule, RuleContext};
use crate::matcher;

/// R5: the manifest operator must match the name entered at capture.
pub struct OperatorIdentityMatch;

impl CrossingRule for OperatorIdentityMatch {
    fn id(&self) -> RuleId {
        RuleId::R5
    }

    fn name(&self) -> &'static str {
        "Operator Identity"
    }

    fn description(&self) -> &'static str {
        "Compares the manifest operator against the name entered at capture"
    }

    fn recommendation(&self) -> &'static str {
        "Verify the operator's identity document."
    }

    fn evaluate(&self, context: &RuleContext<'_>) -> Vec<Finding> {
        let manifest_name = &context.documents.manifest.operator_name;
        if is_missing(manifest_name) {
            return vec![Finding::error(
                self.id(),
                self.name(),
                "Operator name not found in the manifest",
                FindingCategory::MissingData,
            )];
        }
        let entered = context.user.operator_name.trim();
        if entered.is_empty() {
            return vec![Finding::error(
                self.id(),
                self.name(),
                "No operator name was entered at capture",
                FindingCategory::MissingData,
            )];
        }
        if !matcher::matches(manifest_name, entered, context.config.relaxed_threshold) {
            return vec![Finding::error(
                self.id(),
                self.name(),
                format!(
                    "Operator name does not match. Manifest: '{manifest_name}', \
                     Entered: '{entered}'"
                ),
                FindingCategory::Mismatch,
            )];
        }
        Vec::new()
    }
}
