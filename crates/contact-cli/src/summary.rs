use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use contact_cli::pipeline::CleanResult;
use contact_model::RejectionReason;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    let checks = result.selection.keys();
    if checks.is_empty() {
        println!("Checks: none (every row kept)");
    } else {
        println!("Checks: {}", checks.join(", "));
    }
    match &result.outputs {
        Some(paths) => {
            println!("Cleaned table: {}", paths.cleaned.display());
            println!("Removal report: {}", paths.report.display());
        }
        None => println!("Dry run: no tables written"),
    }
    if let Some(path) = &result.summary_json {
        println!("Summary JSON: {}", path.display());
    }

    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input"), Cell::new(summary.total)]);
    table.add_row(vec![
        Cell::new("Kept"),
        count_cell(summary.kept, Color::Green),
    ]);
    for reason in [RejectionReason::InvalidName, RejectionReason::InvalidEmail] {
        table.add_row(vec![
            dim_cell(format!("  {}", reason.phrase())),
            count_cell(summary.reason_count(reason), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Removed")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(summary.removed, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
