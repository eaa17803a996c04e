//! Human-readable reports for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use osmrel_cli::audit::{AuditOptions, AuditReport};
use osmrel_model::{PipelineOptions, PipelineSummary};

pub fn print_summary(options: &PipelineOptions, summary: &PipelineSummary) {
    println!("Input: {}", options.input.display());
    println!("Output: {}", options.output_dir.display());
    println!(
        "Validation: {}",
        if options.validate { "on" } else { "off" }
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("File"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for output in osmrel_model::Table::ALL {
        table.add_row(vec![
            Cell::new(output.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(output.file_name()),
            Cell::new(summary.rows(output)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} elements", summary.elements)),
        Cell::new(summary.total_rows()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_audit(options: &AuditOptions, report: &AuditReport) {
    println!("Input: {}", options.input.display());
    println!("Elements inspected: {}", report.elements);

    if report.street_types.is_empty() {
        println!("No unexpected street types found.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Street type"),
            header_cell("Names"),
            header_cell("Examples"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for (street_type, names) in &report.street_types {
            let examples: Vec<&str> = names
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            table.add_row(vec![
                Cell::new(street_type)
                    .fg(Color::Yellow)
                    .add_attribute(Attribute::Bold),
                Cell::new(names.len()),
                Cell::new(examples.join("; ")),
            ]);
        }
        println!("{table}");
    }

    if report.unexpected_states.is_empty() {
        println!(
            "All addr:state values match {:?}.",
            options.expected_state
        );
    } else {
        println!(
            "addr:state values other than {:?}:",
            options.expected_state
        );
        for state in &report.unexpected_states {
            println!("- {state}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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
