//! Manifest vs. prefile cross-check (R3).
//!
//! Five independent sub-checks: entry number, derived broker code,
//! merchandise description, quantity, weight/amount. All five always run;
//! findings accumulate and no sub-check suppresses another. Sub-checks share
//! the rule id and are told apart by the finding label.

use cruce_model::{Finding, FindingCategory, Manifest, Prefile, RuleId, Sentinel, is_missing};

use super::{CrossingRule, RuleContext};
use crate::matcher;

/// R3: the manifest and the prefile must describe the same filing.
pub struct ManifestPrefileCrossCheck;

const BASE_NAME: &str = "Manifest/Prefile Cross-Check";

impl CrossingRule for ManifestPrefileCrossCheck {
    fn id(&self) -> RuleId {
        RuleId::R3
    }

    fn name(&self) -> &'static str {
        BASE_NAME
    }

    fn description(&self) -> &'static str {
        "Cross-checks entry number, broker code, description, quantity and weight \
         between the manifest and the prefile"
    }

    fn recommendation(&self) -> &'static str {
        "Review the manifest and prefile fields flagged above."
    }

    fn evaluate(&self, context: &RuleContext<'_>) -> Vec<Finding> {
        let manifest = &context.documents.manifest;
        let prefile = &context.documents.prefile;
        let config = context.config;

        let mut findings = Vec::new();
        findings.extend(check_entry_number(manifest, prefile, config.match_threshold));
        findings.extend(check_broker_code(manifest, prefile));
        findings.extend(check_description(manifest, prefile, config.relaxed_threshold));
        findings.extend(check_amount(
            "Quantity",
            manifest.quantity,
            prefile.quantity,
            config.numeric_tolerance,
        ));
        findings.extend(check_amount(
            "Weight/Amount",
            manifest.weight_amount,
            prefile.weight_amount,
            config.numeric_tolerance,
        ));
        findings
    }
}

fn sub_name(field: &str) -> String {
    format!("{BASE_NAME} - {field}")
}

fn check_entry_number(manifest: &Manifest, prefile: &Prefile, threshold: f64) -> Option<Finding> {
    let left = &manifest.entry_number;
    let right = &prefile.entry_number;
    if is_missing(left) || is_missing(right) {
        return Some(Finding::error(
            RuleId::R3,
            sub_name("Entry Number"),
            "Entry number missing from manifest or prefile",
            FindingCategory::MissingData,
        ));
    }
    if !matcher::matches(left, right, threshold) {
        return Some(Finding::error(
            RuleId::R3,
            sub_name("Entry Number"),
            format!("Entry number does not match. Manifest: '{left}', Prefile: '{right}'"),
            FindingCategory::Mismatch,
        ));
    }
    None
}

/// Derives the broker code embedded in an entry number: the first three
/// digits after all non-digit characters are stripped. `None` when fewer
/// than three digits remain.
pub fn broker_code(entry_number: &str) -> Option<String> {
    let digits: String = entry_number.chars().filter(char::is_ascii_digit).collect();
    (digits.len() >= 3).then(|| digits[..3].to_string())
}

fn check_broker_code(manifest: &Manifest, prefile: &Prefile) -> Option<Finding> {
    let left = broker_code(&manifest.entry_number);
    let right = broker_code(&prefile.entry_number);
    match (left, right) {
        (Some(left), Some(right)) if left != right => Some(Finding::error(
            RuleId::R3,
            sub_name("Broker Code"),
            format!(
                "Broker code does not match. Manifest: '{left}' (entry: '{}'), \
                 Prefile: '{right}' (entry: '{}')",
                manifest.entry_number, prefile.entry_number
            ),
            FindingCategory::Mismatch,
        )),
        (Some(_), Some(_)) => None,
        _ => Some(Finding::error(
            RuleId::R3,
            sub_name("Broker Code"),
            "Broker code could not be derived from one or both entry numbers",
            FindingCategory::MissingData,
        )),
    }
}

fn check_description(manifest: &Manifest, prefile: &Prefile, threshold: f64) -> Option<Finding> {
    let left = &manifest.description;
    let right = &prefile.description;
    if Sentinel::of(left.trim()).is_some() || Sentinel::of(right.trim()).is_some() {
        return Some(Finding::error(
            RuleId::R3,
            sub_name("Merchandise Description"),
            "Merchandise description missing from manifest or prefile",
            FindingCategory::MissingData,
        ));
    }
    if !matcher::matches(left, right, threshold) {
        // Warning, not error: free-text descriptions legitimately vary.
        return Some(Finding::warning(
            RuleId::R3,
            sub_name("Merchandise Description"),
            format!("Merchandise description differs. Manifest: '{left}', Prefile: '{right}'"),
            FindingCategory::Mismatch,
        ));
    }
    None
}

fn check_amount(field: &str, left: f64, right: f64, tolerance: f64) -> Option<Finding> {
    if left == 0.0 || right == 0.0 {
        return Some(Finding::error(
            RuleId::R3,
            sub_name(field),
            format!("{field} missing from manifest or prefile (zero value)"),
            FindingCategory::MissingData,
        ));
    }
    if (left - right).abs() > tolerance {
        return Some(Finding::error(
            RuleId::R3,
            sub_name(field),
            format!("{field} does not match. Manifest: {left}, Prefile: {right}"),
            FindingCategory::Mismatch,
        ));
    }
    None
}
