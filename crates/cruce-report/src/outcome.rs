//! Per-rule outcome assembly.
//!
//! Takes the raw findings from an engine run and rebuilds the UI-facing
//! view: status, one-line summary, detail lines, and the compared value
//! pairs with their source labels.

use chrono::NaiveDate;

use cruce_model::{
    Comparison, DocumentSet, Finding, RuleId, RuleOutcome, RuleStatus, Severity, UserData,
    ValidationConfig, is_missing,
};
use cruce_validate::{Evaluation, RuleRun, broker_code, document_age, matcher};

/// Derives the display status of one rule run.
///
/// Zero findings is a pass. The manifest/prefile cross-check is softened:
/// with fewer findings than `partial_failure_cutoff` it reports a warning
/// rather than a failure, since a couple of diverging fields usually means
/// a re-keyed prefile, not a different shipment. Other rules warn only when
/// every finding is warning severity.
pub fn derive_status(run: &RuleRun, config: &ValidationConfig) -> RuleStatus {
    if run.findings.is_empty() {
        return RuleStatus::Passed;
    }
    let all_warnings = run
        .findings
        .iter()
        .all(|finding| finding.severity == Severity::Warning);
    if all_warnings {
        return RuleStatus::Warning;
    }
    if run.rule_id == RuleId::R3 && run.findings.len() < config.partial_failure_cutoff {
        return RuleStatus::Warning;
    }
    RuleStatus::Failed
}

/// Builds one `RuleOutcome` per run, in the evaluation's display order.
pub fn rule_outcomes(
    evaluation: &Evaluation,
    documents: &DocumentSet,
    user: &UserData,
    config: &ValidationConfig,
) -> Vec<RuleOutcome> {
    evaluation
        .runs
        .iter()
        .map(|run| outcome_for(run, evaluation.as_of, documents, user, config))
        .collect()
}

struct RuleContent {
    summary: String,
    details: Vec<String>,
    comparisons: Vec<Comparison>,
}

fn outcome_for(
    run: &RuleRun,
    as_of: NaiveDate,
    documents: &DocumentSet,
    user: &UserData,
    config: &ValidationConfig,
) -> RuleOutcome {
    let status = derive_status(run, config);
    let content = match run.rule_id {
        RuleId::R1 => validity_content(documents, as_of, config),
        RuleId::R2 => plates_content(documents, config, &run.findings),
        RuleId::R3 => cross_check_content(documents, config, &run.findings),
        RuleId::R4 => office_content(documents, config, &run.findings),
        RuleId::R5 => operator_content(documents, user, config, &run.findings),
    };
    RuleOutcome {
        rule_id: run.rule_id,
        rule_name: run.rule_name.to_string(),
        description: run.description.to_string(),
        status,
        icon: status.icon().to_string(),
        summary: content.summary,
        details: content.details,
        comparisons: content.comparisons,
        findings: run.findings.clone(),
        recommendation: (status != RuleStatus::Passed).then(|| run.recommendation.to_string()),
    }
}

fn validity_content(
    documents: &DocumentSet,
    as_of: NaiveDate,
    config: &ValidationConfig,
) -> RuleContent {
    let raw = documents.declaration.emission_date.trim();
    let age = document_age(raw, as_of);
    let summary = if is_missing(raw) {
        "DODA emission date not found".to_string()
    } else {
        match age {
            None => format!("DODA emission date is not a valid date: '{raw}'"),
            Some(age) if age < 0 => format!("DODA emission date '{raw}' is in the future"),
            Some(age) => format!("Document is {age} day(s) old (limit {})", config.max_age_days),
        }
    };
    let mut details = vec![
        format!("Emission date: '{raw}'"),
        format!("Evaluated on: {as_of}"),
    ];
    if let Some(age) = age {
        details.push(format!("Age: {age} day(s)"));
    }
    details.push(format!("Allowed maximum: {} day(s)", config.max_age_days));
    RuleContent {
        summary,
        details,
        comparisons: Vec::new(),
    }
}

fn plates_content(
    documents: &DocumentSet,
    config: &ValidationConfig,
    findings: &[Finding],
) -> RuleContent {
    let manifest = &documents.manifest;
    let pairs = [
        ("Tractor plate", manifest.tractor_plate.as_str(), &documents.tractor_plate),
        ("Trailer plate", manifest.trailer_plate.as_str(), &documents.trailer_plate),
    ];
    let mut details = Vec::new();
    let mut comparisons = Vec::new();
    for (label, manifest_plate, reading) in pairs {
        let confidence_note = match reading.confidence {
            Some(value) => format!("confidence: {:.0}%", value * 100.0),
            None => "confidence not reported".to_string(),
        };
        details.push(format!(
            "{label}: manifest '{manifest_plate}', photo '{}' ({confidence_note})",
            reading.plate_number
        ));
        comparisons.push(compare(
            label,
            manifest_plate,
            &reading.plate_number,
            "E-Manifest",
            "Photo",
            config.match_threshold,
        ));
    }
    let summary = if findings.is_empty() {
        "Plates match the manifest".to_string()
    } else {
        format!("{} plate issue(s)", findings.len())
    };
    RuleContent {
        summary,
        details,
        comparisons,
    }
}

fn cross_check_content(
    documents: &DocumentSet,
    config: &ValidationConfig,
    findings: &[Finding],
) -> RuleContent {
    let manifest = &documents.manifest;
    let prefile = &documents.prefile;
    let manifest_code = broker_code(&manifest.entry_number);
    let prefile_code = broker_code(&prefile.entry_number);
    let details = vec![
        format!(
            "Entry number: manifest '{}', prefile '{}'",
            manifest.entry_number, prefile.entry_number
        ),
        format!(
            "Broker code: manifest '{}', prefile '{}'",
            manifest_code.as_deref().unwrap_or("not derivable"),
            prefile_code.as_deref().unwrap_or("not derivable")
        ),
        format!(
            "Description: manifest '{}', prefile '{}'",
            manifest.description, prefile.description
        ),
        format!(
            "Quantity: manifest {}, prefile {}",
            manifest.quantity, prefile.quantity
        ),
        format!(
            "Weight/amount: manifest {}, prefile {}",
            manifest.weight_amount, prefile.weight_amount
        ),
    ];
    let broker_matches = match (&manifest_code, &prefile_code) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    };
    let broker_similarity = match (&manifest_code, &prefile_code) {
        (Some(left), Some(right)) => Some(matcher::similarity(left, right)),
        _ => None,
    };
    let comparisons = vec![
        compare(
            "Entry number",
            &manifest.entry_number,
            &prefile.entry_number,
            "E-Manifest",
            "Prefile",
            config.match_threshold,
        ),
        Comparison {
            label: "Broker code".to_string(),
            left_value: manifest_code.unwrap_or_default(),
            right_value: prefile_code.unwrap_or_default(),
            left_source: "E-Manifest".to_string(),
            right_source: "Prefile".to_string(),
            matches: broker_matches,
            similarity: broker_similarity,
        },
    ];
    let summary = if findings.is_empty() {
        "All fields match between manifest and prefile".to_string()
    } else {
        format!("{} field(s) with issues", findings.len())
    };
    RuleContent {
        summary,
        details,
        comparisons,
    }
}

fn office_content(
    documents: &DocumentSet,
    config: &ValidationConfig,
    findings: &[Finding],
) -> RuleContent {
    let section = &documents.declaration.customs_section;
    let arrival = &documents.manifest.arrival_office;
    let summary = match findings.first() {
        None => "Customs offices match".to_string(),
        Some(finding) => finding.message.clone(),
    };
    RuleContent {
        summary,
        details: vec![
            format!("DODA customs section: '{section}'"),
            format!("Manifest arrival office: '{arrival}'"),
        ],
        comparisons: vec![compare(
            "Customs office",
            section,
            arrival,
            "DODA",
            "E-Manifest",
            config.match_threshold,
        )],
    }
}

fn operator_content(
    documents: &DocumentSet,
    user: &UserData,
    config: &ValidationConfig,
    findings: &[Finding],
) -> RuleContent {
    let manifest_name = &documents.manifest.operator_name;
    let entered = &user.operator_name;
    let summary = match findings.first() {
        None => "Operator matches the manifest".to_string(),
        Some(finding) => finding.message.clone(),
    };
    RuleContent {
        summary,
        details: vec![
            format!("Manifest operator: '{manifest_name}'"),
            format!("Captured operator: '{entered}'"),
        ],
        comparisons: vec![compare(
            "Operator name",
            manifest_name,
            entered,
            "E-Manifest",
            "Capture form",
            config.relaxed_threshold,
        )],
    }
}

/// Builds a comparison entry for two raw field values. The similarity score
/// is omitted when either side is missing, since there is nothing to score.
fn compare(
    label: &str,
    left: &str,
    right: &str,
    left_source: &str,
    right_source: &str,
    threshold: f64,
) -> Comparison {
    let scored = !is_missing(left) && !is_missing(right);
    Comparison {
        label: label.to_string(),
        left_value: left.to_string(),
        right_value: right.to_string(),
        left_source: left_source.to_string(),
        right_source: right_source.to_string(),
        matches: matcher::matches(left, right, threshold),
        similarity: scored.then(|| matcher::similarity(left, right)),
    }
}

#[cfg(test)]
mod tests {
    use cruce_model::FindingCategory;
    use cruce_validate::RuleEngine;

    use super::*;
    use crate::test_support::{as_of, operator, valid_documents};

    fn run_with(rule_id: RuleId, findings: Vec<Finding>) -> RuleRun {
        RuleRun {
            rule_id,
            rule_name: "Test Rule",
            description: "",
            recommendation: "Do the thing.",
            findings,
        }
    }

    fn error_finding(rule_id: RuleId) -> Finding {
        Finding::error(rule_id, "Test Rule", "boom", FindingCategory::Mismatch)
    }

    fn warning_finding(rule_id: RuleId) -> Finding {
        Finding::warning(rule_id, "Test Rule", "hmm", FindingCategory::Mismatch)
    }

    #[test]
    fn no_findings_is_passed() {
        let config = ValidationConfig::default();
        let run = run_with(RuleId::R2, Vec::new());
        assert_eq!(derive_status(&run, &config), RuleStatus::Passed);
    }

    #[test]
    fn error_findings_fail_ordinary_rules() {
        let config = ValidationConfig::default();
        let run = run_with(RuleId::R2, vec![error_finding(RuleId::R2)]);
        assert_eq!(derive_status(&run, &config), RuleStatus::Failed);
    }

    #[test]
    fn all_warning_findings_warn() {
        let config = ValidationConfig::default();
        let run = run_with(RuleId::R3, vec![warning_finding(RuleId::R3)]);
        assert_eq!(derive_status(&run, &config), RuleStatus::Warning);
    }

    #[test]
    fn cross_check_under_cutoff_warns_despite_errors() {
        let config = ValidationConfig::default();
        let run = run_with(
            RuleId::R3,
            vec![error_finding(RuleId::R3), error_finding(RuleId::R3)],
        );
        assert_eq!(derive_status(&run, &config), RuleStatus::Warning);
    }

    #[test]
    fn cross_check_at_cutoff_fails() {
        let config = ValidationConfig::default();
        let run = run_with(
            RuleId::R3,
            vec![
                error_finding(RuleId::R3),
                error_finding(RuleId::R3),
                error_finding(RuleId::R3),
            ],
        );
        assert_eq!(derive_status(&run, &config), RuleStatus::Failed);
    }

    #[test]
    fn error_count_outside_cross_check_is_not_softened() {
        let config = ValidationConfig::default();
        let run = run_with(RuleId::R2, vec![error_finding(RuleId::R2)]);
        assert_eq!(derive_status(&run, &config), RuleStatus::Failed);
    }

    fn outcomes_for_valid_request() -> Vec<RuleOutcome> {
        let documents = valid_documents();
        let user = operator();
        let config = ValidationConfig::default();
        let evaluation = RuleEngine::new(&config).run_at(&documents, &user, as_of());
        rule_outcomes(&evaluation, &documents, &user, &config)
    }

    #[test]
    fn outcomes_cover_all_rules_in_order() {
        let outcomes = outcomes_for_valid_request();
        let ids: Vec<RuleId> = outcomes.iter().map(|outcome| outcome.rule_id).collect();
        assert_eq!(ids, vec![RuleId::R1, RuleId::R2, RuleId::R3, RuleId::R4, RuleId::R5]);
        assert!(outcomes.iter().all(|o| o.status == RuleStatus::Passed));
        assert!(outcomes.iter().all(|o| o.icon == "✅"));
        assert!(outcomes.iter().all(|o| o.recommendation.is_none()));
    }

    #[test]
    fn passing_validity_summary_reports_age_and_limit() {
        let outcomes = outcomes_for_valid_request();
        assert_eq!(outcomes[0].summary, "Document is 1 day(s) old (limit 3)");
        assert!(outcomes[0].details.iter().any(|d| d.contains("2025-10-21")));
        assert!(outcomes[0].comparisons.is_empty());
    }

    #[test]
    fn plate_comparisons_carry_sources_and_confidence() {
        let outcomes = outcomes_for_valid_request();
        let plates = &outcomes[1];
        assert_eq!(plates.summary, "Plates match the manifest");
        assert_eq!(plates.comparisons.len(), 2);
        assert_eq!(plates.comparisons[0].label, "Tractor plate");
        assert_eq!(plates.comparisons[0].left_source, "E-Manifest");
        assert_eq!(plates.comparisons[0].right_source, "Photo");
        assert!(plates.comparisons[0].matches);
        assert_eq!(plates.comparisons[0].similarity, Some(1.0));
        assert!(plates.details[0].contains("confidence: 95%"));
    }

    #[test]
    fn cross_check_comparisons_include_derived_broker_codes() {
        let outcomes = outcomes_for_valid_request();
        let cross = &outcomes[2];
        assert_eq!(cross.summary, "All fields match between manifest and prefile");
        assert_eq!(cross.comparisons[1].label, "Broker code");
        assert_eq!(cross.comparisons[1].left_value, "202");
        assert_eq!(cross.comparisons[1].right_value, "202");
        assert!(cross.comparisons[1].matches);
        assert_eq!(cross.details.len(), 5);
    }

    #[test]
    fn failed_rule_carries_recommendation_and_cross_icon() {
        let mut documents = valid_documents();
        documents.tractor_plate.plate_number = "WRONG-123".into();
        let user = operator();
        let config = ValidationConfig::default();
        let evaluation = RuleEngine::new(&config).run_at(&documents, &user, as_of());
        let outcomes = rule_outcomes(&evaluation, &documents, &user, &config);

        let plates = &outcomes[1];
        assert_eq!(plates.status, RuleStatus::Failed);
        assert_eq!(plates.icon, "❌");
        assert_eq!(plates.summary, "1 plate issue(s)");
        assert_eq!(
            plates.recommendation.as_deref(),
            Some("Physically verify the unit's plates against the manifest.")
        );
        assert!(!plates.comparisons[0].matches);
        assert!(plates.comparisons[1].matches);
    }

    #[test]
    fn missing_office_summary_names_the_side() {
        let mut documents = valid_documents();
        documents.declaration.customs_section = "NO_ENCONTRADO".into();
        let user = operator();
        let config = ValidationConfig::default();
        let evaluation = RuleEngine::new(&config).run_at(&documents, &user, as_of());
        let outcomes = rule_outcomes(&evaluation, &documents, &user, &config);

        let office = &outcomes[3];
        assert_eq!(office.status, RuleStatus::Failed);
        assert_eq!(office.summary, "Customs section not found on the DODA");
        assert_eq!(office.comparisons[0].similarity, None);
        assert!(!office.comparisons[0].matches);
    }

    #[test]
    fn diverging_prefile_entry_softens_to_warning() {
        let mut documents = valid_documents();
        documents.prefile.entry_number = "DIFFERENT-ENTRY".into();
        let user = operator();
        let config = ValidationConfig::default();
        let evaluation = RuleEngine::new(&config).run_at(&documents, &user, as_of());
        let outcomes = rule_outcomes(&evaluation, &documents, &user, &config);

        let cross = &outcomes[2];
        assert_eq!(cross.status, RuleStatus::Warning);
        assert_eq!(cross.icon, "⚠️");
        assert_eq!(cross.summary, "2 field(s) with issues");
        // "DIFFERENT-ENTRY" has no digits, so no broker code derives from it.
        assert_eq!(cross.comparisons[1].right_value, "");
        assert_eq!(cross.comparisons[1].similarity, None);
    }
}
