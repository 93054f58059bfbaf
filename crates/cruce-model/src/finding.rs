//! Validation findings and their classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CruceError;

/// Identifier of a consistency rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RuleId {
    /// Document validity window.
    R1,
    /// Plate cross-check.
    R2,
    /// Manifest vs. prefile cross-check.
    R3,
    /// Customs office match.
    R4,
    /// Operator identity match.
    R5,
}

impl RuleId {
    /// All rules in display order.
    pub const ALL: [RuleId; 5] = [RuleId::R1, RuleId::R2, RuleId::R3, RuleId::R4, RuleId::R5];

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::R1 => "R1",
            RuleId::R2 => "R2",
            RuleId::R3 => "R3",
            RuleId::R4 => "R4",
            RuleId::R5 => "R5",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = CruceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R1" => Ok(RuleId::R1),
            "R2" => Ok(RuleId::R2),
            "R3" => Ok(RuleId::R3),
            "R4" => Ok(RuleId::R4),
            "R5" => Ok(RuleId::R5),
            other => Err(CruceError::Message(format!("unknown rule id: {other}"))),
        }
    }
}

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What kind of problem a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    /// A required field holds a sentinel or is blank.
    MissingData,
    /// A value is present but unparsable.
    Format,
    /// Two present values fail the fuzzy or tolerance test.
    Mismatch,
    /// An unexpected fault inside a rule, caught and scoped to it.
    Internal,
}

/// A single rule violation.
///
/// Messages carry the compared raw values so a finding is actionable
/// without re-running extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: RuleId,
    /// Human label; R3 sub-checks share the rule id and differ here.
    pub rule_name: String,
    pub message: String,
    pub severity: Severity,
    pub category: FindingCategory,
}

impl Finding {
    /// Builds an error-severity finding.
    pub fn error(
        rule_id: RuleId,
        rule_name: impl Into<String>,
        message: impl Into<String>,
        category: FindingCategory,
    ) -> Self {
        Self {
            rule_id,
            rule_name: rule_name.into(),
            message: message.into(),
            severity: Severity::Error,
            category,
        }
    }

    /// Builds a warning-severity finding.
    pub fn warning(
        rule_id: RuleId,
        rule_name: impl Into<String>,
        message: impl Into<String>,
        category: FindingCategory,
    ) -> Self {
        Self {
            rule_id,
            rule_name: rule_name.into(),
            message: message.into(),
            severity: Severity::Warning,
            category,
        }
    }
}
