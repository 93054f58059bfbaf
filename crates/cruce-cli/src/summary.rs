use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use cruce_model::{
    Finding, FindingCategory, OverallStatus, RuleStatus, Severity, ValidationReport,
};
use cruce_report::LOW_CONFIDENCE_CUTOFF;

use crate::types::ValidateResult;

pub fn print_summary(result: &ValidateResult) {
    let report = &result.report;
    println!("{}", report.message);
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    print_overview(report);
    print_rule_table(report);
    print_finding_table(report);
    print_extraction_table(report);
}

fn print_overview(report: &ValidationReport) {
    let summary = &report.summary;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        header_cell("Overall status"),
        overall_cell(summary.overall_status),
    ]);
    table.add_row(vec![
        header_cell("Rules passed"),
        Cell::new(format!("{}/{}", summary.passed_rules, summary.total_rules)),
    ]);
    table.add_row(vec![
        header_cell("Errors"),
        count_cell(report.error_count(), Color::Red),
    ]);
    table.add_row(vec![
        header_cell("Warnings"),
        count_cell(report.warning_count(), Color::Yellow),
    ]);
    table.add_row(vec![
        header_cell("Extraction confidence"),
        confidence_cell(summary.confidence_average),
    ]);
    table.add_row(vec![
        header_cell("Processing time"),
        Cell::new(format!("{:.2}s", summary.processing_time)),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    println!();
    println!("{table}");
}

fn print_rule_table(report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Name"),
        header_cell("Status"),
        header_cell("Summary"),
        header_cell("Recommendation"),
    ]);
    apply_rule_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for rule in &report.rules {
        table.add_row(vec![
            rule_cell(rule.rule_id.as_str()),
            Cell::new(rule.rule_name.clone()),
            status_cell(rule.status),
            Cell::new(rule.summary.clone()),
            recommendation_cell(rule.recommendation.as_deref()),
        ]);
    }
    println!();
    println!("Rules:");
    println!("{table}");
}

fn print_finding_table(report: &ValidationReport) {
    if report.errors.is_empty() {
        return;
    }
    let mut findings: Vec<&Finding> = report.errors.iter().collect();
    findings.sort_by(|a, b| {
        severity_rank(b.severity)
            .cmp(&severity_rank(a.severity))
            .then_with(|| a.rule_id.cmp(&b.rule_id))
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_finding_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Center);
    for finding in findings {
        table.add_row(vec![
            rule_cell(finding.rule_id.as_str()),
            severity_cell(finding.severity),
            Cell::new(category_label(finding.category)),
            Cell::new(finding.message.clone()),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn print_extraction_table(report: &ValidationReport) {
    if report.extraction.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Fields"),
        header_cell("Extracted"),
        header_cell("Missing"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for document in &report.extraction {
        table.add_row(vec![
            Cell::new(document.document_name.clone()),
            Cell::new(document.total_fields),
            Cell::new(document.extracted_fields),
            count_cell(document.not_found_fields, Color::Red),
            confidence_cell(document.confidence_score),
        ]);
    }
    println!();
    println!("Extraction:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_rule_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ]);
    }
}

fn apply_finding_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn overall_cell(status: OverallStatus) -> Cell {
    match status {
        OverallStatus::Success => Cell::new("SUCCESS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        OverallStatus::Partial => Cell::new("PARTIAL")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        OverallStatus::Failed => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn status_cell(status: RuleStatus) -> Cell {
    match status {
        RuleStatus::Passed => Cell::new("PASSED").fg(Color::Green),
        RuleStatus::Warning => Cell::new("WARNING").fg(Color::Yellow),
        RuleStatus::Failed => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 2,
        Severity::Warning => 1,
    }
}

fn category_label(category: FindingCategory) -> &'static str {
    match category {
        FindingCategory::MissingData => "missing data",
        FindingCategory::Format => "format",
        FindingCategory::Mismatch => "mismatch",
        FindingCategory::Internal => "internal",
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn confidence_cell(score: f64) -> Cell {
    let cell = Cell::new(format!("{:.0}%", score * 100.0));
    if score >= LOW_CONFIDENCE_CUTOFF {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}

fn rule_cell(id: &str) -> Cell {
    Cell::new(id).fg(Color::Blue).add_attribute(Attribute::Bold)
}

fn recommendation_cell(recommendation: Option<&str>) -> Cell {
    match recommendation {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
