//! Console summary tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use cmatch_model::{ALL_FIELDS, SynonymTable};

use crate::types::RunSummary;

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

/// Print the post-run summary.
pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Source Column")]);
    apply_table_style(&mut table);
    for binding in &summary.field_map.bindings {
        table.add_row(vec![binding.field.name(), binding.source.as_str()]);
    }
    if let Some(zip) = &summary.zip_inference {
        table.add_row(vec![
            "Zip".to_string(),
            format!(
                "(inferred from city/state: {} resolved, {} empty)",
                zip.resolved, zip.missed
            ),
        ]);
    }
    println!("{table}");

    println!("Records written: {}", summary.records);
    if summary.duplicate_headers > 0 {
        println!("Duplicate headers dropped: {}", summary.duplicate_headers);
    }
    if !summary.dropped_columns.is_empty() {
        println!("Columns dropped: {}", summary.dropped_columns.join(", "));
    }
    println!(
        "Cell hashing: {}",
        if summary.hashed { "SHA-256" } else { "off" }
    );
}

/// Print the canonical schema with known synonym spellings.
pub fn print_fields(synonyms: &SynonymTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Required"),
        header_cell("Known Spellings"),
    ]);
    apply_table_style(&mut table);
    for field in ALL_FIELDS {
        table.add_row(vec![
            field.name().to_string(),
            (if field.is_required() { "yes" } else { "no" }).to_string(),
            synonyms.spellings_for(*field).join(", "),
        ]);
    }
    println!("{table}");
}
