//! Report assembly for crossing validations.
//!
//! Turns an engine evaluation into the two wire shapes:
//!
//! - **Terse**: success flag, one-line message, flat findings list
//! - **Enriched**: the terse content plus per-rule outcomes, extraction
//!   quality summaries, and a rollup of rule counts
//!
//! plus a versioned JSON payload writer for audit trails.

mod extraction;
mod outcome;

// Re-export public types and functions
pub use extraction::{LOW_CONFIDENCE_CUTOFF, confidence_average, extraction_summary};
pub use outcome::{derive_status, rule_outcomes};

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use cruce_model::{
    DocumentSet, OverallStatus, Result, RuleOutcome, RuleStatus, UserData, ValidationConfig,
    ValidationReport, ValidationResponse, ValidationSummary,
};
use cruce_validate::Evaluation;

const REPORT_SCHEMA: &str = "cruce.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Builds the terse response. The message counts findings.
pub fn build_response(evaluation: &Evaluation, user: &UserData) -> ValidationResponse {
    let errors = evaluation.findings();
    let success = errors.is_empty();
    let message = if success {
        clean_message(user)
    } else {
        finding_count_message(evaluation.error_count(), evaluation.warning_count())
    };
    ValidationResponse {
        success,
        message,
        errors,
    }
}

/// Builds the enriched report. Unlike the terse response, the message here
/// counts rules, matching what the per-rule outcome list shows.
pub fn build_report(
    evaluation: &Evaluation,
    documents: &DocumentSet,
    user: &UserData,
    config: &ValidationConfig,
    processing_time: f64,
) -> ValidationReport {
    let rules = outcome::rule_outcomes(evaluation, documents, user, config);
    let extraction = extraction::extraction_summary(documents);

    let passed_rules = count_status(&rules, RuleStatus::Passed);
    let failed_rules = count_status(&rules, RuleStatus::Failed);
    let warning_rules = count_status(&rules, RuleStatus::Warning);
    let overall_status = if failed_rules > 0 {
        OverallStatus::Failed
    } else if warning_rules > 0 {
        OverallStatus::Partial
    } else {
        OverallStatus::Success
    };
    let message = match overall_status {
        OverallStatus::Success => clean_message(user),
        OverallStatus::Failed => format!("Found {failed_rules} validation error(s)"),
        OverallStatus::Partial => format!("Found {warning_rules} warning(s)"),
    };

    ValidationReport {
        success: evaluation.is_clean(),
        message,
        errors: evaluation.findings(),
        summary: ValidationSummary {
            total_rules: rules.len(),
            passed_rules,
            failed_rules,
            warning_rules,
            overall_status,
            confidence_average: extraction::confidence_average(&extraction),
            processing_time: round2(processing_time),
        },
        rules,
        extraction,
        timestamp: Utc::now().to_rfc3339(),
    }
}

#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub report: &'a ValidationReport,
}

/// Writes the enriched report as `validation_report.json` under
/// `output_dir`, wrapped in a versioned payload envelope.
pub fn write_report_json(output_dir: &Path, report: &ValidationReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        report,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}

fn clean_message(user: &UserData) -> String {
    format!(
        "All documents are valid and consistent. Operator: {}",
        user.operator_name
    )
}

fn finding_count_message(errors: usize, warnings: usize) -> String {
    match (errors, warnings) {
        (0, warnings) => format!("Found {warnings} warning(s)"),
        (errors, 0) => format!("Found {errors} validation error(s)"),
        (errors, warnings) => {
            format!("Found {errors} validation error(s) and {warnings} warning(s)")
        }
    }
}

fn count_status(rules: &[RuleOutcome], status: RuleStatus) -> usize {
    rules.iter().filter(|rule| rule.status == status).count()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use cruce_model::{
        CustomsDeclaration, DocumentSet, Manifest, PlateReading, Prefile, UserData,
    };

    /// Evaluation date the report tests pin to.
    pub(crate) fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 22).unwrap()
    }

    /// A document set that passes every rule when evaluated at [`as_of`].
    pub(crate) fn valid_documents() -> DocumentSet {
        DocumentSet {
            declaration: CustomsDeclaration {
                emission_date: "2025-10-21".into(),
                customs_section: "Tijuana".into(),
            },
            manifest: Manifest {
                tractor_plate: "ABC-123".into(),
                trailer_plate: "XYZ-789".into(),
                operator_name: "Juan Pérez García".into(),
                arrival_office: "Tijuana".into(),
                entry_number: "ENT-2025-001234".into(),
                broker: "Logistica MX".into(),
                description: "Cajas de fruta fresca".into(),
                quantity: 100.0,
                weight_amount: 5000.50,
            },
            prefile: Prefile {
                entry_number: "ENT-2025-001234".into(),
                broker: "Logistica MX".into(),
                description: "Cajas de fruta fresca".into(),
                quantity: 100.0,
                weight_amount: 5000.50,
            },
            tractor_plate: PlateReading {
                plate_number: "ABC-123".into(),
                confidence: Some(0.95),
            },
            trailer_plate: PlateReading {
                plate_number: "XYZ-789".into(),
                confidence: Some(0.93),
            },
        }
    }

    /// Capture-form data matching [`valid_documents`].
    pub(crate) fn operator() -> UserData {
        UserData {
            operator_name: "Juan Pérez García".into(),
        }
    }
}
