use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pirep_model::FindingKind;

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    println!("Batch: {}", result.batch);
    println!("Records: {}", result.outcome.pireps.len());
    if let Some(path) = &result.report_json {
        println!("Report: {}", path.display());
    }
    if let Some(path) = &result.pirep_lines {
        println!("PIREP lines: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Values"),
        header_cell("Skipped"),
        header_cell("Mean"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    apply_stats_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (field, stats) in &result.outcome.summary.fields {
        table.add_row(vec![
            Cell::new(field).fg(Color::Blue),
            Cell::new(stats.count),
            skipped_cell(stats.skipped),
            number_cell(stats.mean),
            number_cell(stats.min),
            number_cell(stats.max),
        ]);
    }
    println!("{table}");

    print_findings_table(result);
    let alerts = &result.outcome.summary.alerts;
    println!(
        "Alerts: {} (missing {}, out-of-range {}, malformed {})",
        alerts.total(),
        alerts.missing_value,
        alerts.out_of_range,
        alerts.malformed_type
    );
}

fn print_findings_table(result: &ProcessResult) {
    if !result.outcome.has_findings() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Detail"),
    ]);
    apply_findings_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (index, findings) in &result.outcome.findings {
        for finding in findings {
            table.add_row(vec![
                Cell::new(index),
                Cell::new(&finding.field),
                kind_cell(finding.kind),
                Cell::new(&finding.detail),
            ]);
        }
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_stats_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_findings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(kind: FindingKind) -> Cell {
    match kind {
        FindingKind::MissingValue => Cell::new("MISSING").fg(Color::Yellow),
        FindingKind::OutOfRange => Cell::new("RANGE")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        FindingKind::MalformedType => Cell::new("MALFORMED").fg(Color::Red),
    }
}

fn skipped_cell(skipped: u64) -> Cell {
    if skipped > 0 {
        Cell::new(skipped).fg(Color::Yellow)
    } else {
        dim_cell(skipped)
    }
}

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(display_number(value)),
        None => dim_cell("-"),
    }
}

/// "no data" renders as a dash; numbers drop a trailing `.0`.
fn display_number(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
