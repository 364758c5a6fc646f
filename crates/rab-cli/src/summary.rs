//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::commands::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Output: {}", result.output.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![Cell::new("Raw rows"), Cell::new(result.raw_rows)]);
    table.add_row(vec![Cell::new("Cleaned rows"), Cell::new(result.rows)]);
    table.add_row(vec![
        Cell::new("Duplicate tail numbers dropped"),
        Cell::new(result.raw_rows.saturating_sub(result.rows)),
    ]);
    table.add_row(vec![
        Cell::new("Agricultural aircraft"),
        Cell::new(result.agaircraft),
    ]);
    table.add_row(vec![
        Cell::new("Owner-operated"),
        Cell::new(result.owned_operated),
    ]);
    for (kind, count) in &result.owner_kinds {
        table.add_row(vec![Cell::new(format!("Owner ids: {kind}")), Cell::new(count)]);
    }
    for (kind, count) in &result.operator_kinds {
        table.add_row(vec![
            Cell::new(format!("Operator ids: {kind}")),
            Cell::new(count),
        ]);
    }

    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
