use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::Table;
use tracing::{debug, info, info_span};

use cruce_cli::logging::{log_data_enabled, redact_value};
use cruce_model::{ValidationConfig, ValidationRequest};
use cruce_report::{build_report, write_report_json};
use cruce_validate::{RuleEngine, TracingObserver, catalog};

use crate::cli::ValidateArgs;
use crate::summary::apply_table_style;
use crate::types::ValidateResult;

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let span = info_span!("validate", request_file = %args.request_file.display());
    let _guard = span.enter();

    let request = load_request(&args.request_file)?;
    debug!(
        operator = redact_value(&request.user.operator_name),
        "request loaded"
    );
    let config = validation_config(args);
    let as_of = parse_as_of(args.as_of.as_deref())?;

    let observer = TracingObserver::new().with_raw_values(log_data_enabled());
    let engine = RuleEngine::new(&config).with_observer(&observer);
    let started = Instant::now();
    let evaluation = match as_of {
        Some(date) => engine.run_at(&request.extracted, &request.user, date),
        None => engine.run(&request.extracted, &request.user),
    };
    let processing_time = started.elapsed().as_secs_f64();
    let report = build_report(
        &evaluation,
        &request.extracted,
        &request.user,
        &config,
        processing_time,
    );
    info!(
        overall_status = report.summary.overall_status.as_str(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        duration_ms = started.elapsed().as_millis(),
        "report assembled"
    );

    let report_path = match &args.output_dir {
        Some(dir) => Some(write_report_json(dir, &report).context("write validation report")?),
        None => None,
    };
    Ok(ValidateResult {
        report,
        report_path,
    })
}

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Name", "Description"]);
    apply_table_style(&mut table);
    for rule in catalog() {
        table.add_row(vec![
            rule.id().as_str().to_string(),
            rule.name().to_string(),
            rule.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_request(path: &Path) -> Result<ValidationRequest> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}

fn validation_config(args: &ValidateArgs) -> ValidationConfig {
    let mut config = ValidationConfig::default();
    if let Some(days) = args.max_age_days {
        config = config.with_max_age_days(days);
    }
    if let Some(threshold) = args.match_threshold {
        config = config.with_match_threshold(threshold);
    }
    if let Some(threshold) = args.relaxed_threshold {
        config = config.with_relaxed_threshold(threshold);
    }
    config
}

fn parse_as_of(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid --as-of date '{raw}', expected YYYY-MM-DD"))?;
    Ok(Some(date))
}
