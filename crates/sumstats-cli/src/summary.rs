use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sumstats_cli::types::{CheckResult, FileSummary};

use crate::cli::SummaryFormatArg;

pub fn print_summary(result: &CheckResult, format: SummaryFormatArg) -> Result<()> {
    match format {
        SummaryFormatArg::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize summary")?;
            println!("{json}");
        }
        SummaryFormatArg::Text => print_table(result),
    }
    Ok(())
}

fn print_table(result: &CheckResult) {
    if result.dry_run {
        println!("Dry run: no files written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Palindromic"),
        header_cell("Non-numeric"),
        header_cell("Bad chrom"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_in = 0usize;
    let mut total_out = 0usize;
    for file in &result.files {
        let name = file
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.input.display().to_string());
        let Some(report) = &file.report else {
            table.add_row(vec![
                Cell::new(name).fg(Color::Red).add_attribute(Attribute::Bold),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new("FAILED").fg(Color::Red),
            ]);
            continue;
        };
        total_in += report.rows_in;
        total_out += report.rows_out;
        let removed = report.palindrome.as_ref().map(|p| p.removed());
        let non_numeric: usize = report
            .coercions
            .iter()
            .filter(|c| !c.already_numeric)
            .map(|c| c.missing)
            .sum();
        let unrecognized = report.chromosome.as_ref().map(|c| c.unrecognized);
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(report.rows_in),
            Cell::new(report.rows_out),
            count_cell(removed, Color::Yellow),
            count_cell(Some(non_numeric), Color::Yellow),
            count_cell(unrecognized, Color::Yellow),
            output_cell(file),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_in).add_attribute(Attribute::Bold),
        Cell::new(total_out).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let failed: Vec<&FileSummary> = result.files.iter().filter(|f| f.failed()).collect();
    if !failed.is_empty() {
        eprintln!("Errors:");
        for file in failed {
            if let Some(error) = &file.error {
                eprintln!("- {}: {error}", file.input.display());
            }
        }
    }
}

fn output_cell(file: &FileSummary) -> Cell {
    match &file.output {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
