//! Table projection and renaming.

use cmatch_model::{FieldMap, RecordTable};

/// Project a table onto the mapped columns and rename them canonically.
///
/// Columns with no binding are dropped, including unrecognized source
/// columns; this is the deliberate data-loss point of the conversion.
/// Output column order follows the field map (source order).
#[must_use]
pub fn project(table: &RecordTable, field_map: &FieldMap) -> RecordTable {
    let mut projected = RecordTable::new(
        field_map
            .bindings
            .iter()
            .map(|binding| binding.field.name().to_string())
            .collect(),
    );
    for row in &table.rows {
        projected.push_row(
            field_map
                .bindings
                .iter()
                .map(|binding| row.get(binding.column).cloned().unwrap_or_default())
                .collect(),
        );
    }
    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmatch_model::CanonicalField;

    #[test]
    fn projection_drops_unmapped_columns() {
        let mut table = RecordTable::new(vec![
            "email".into(),
            "favorite_color".into(),
            "zip".into(),
        ]);
        table.push_row(vec!["ada@example.com".into(), "teal".into(), "98101".into()]);

        let mut field_map = FieldMap::default();
        field_map.bind(0, "email", CanonicalField::Email).unwrap();
        field_map.bind(2, "zip", CanonicalField::Zip).unwrap();

        let projected = project(&table, &field_map);
        assert_eq!(projected.headers, vec!["Email", "Zip"]);
        assert_eq!(projected.rows, vec![vec!["ada@example.com", "98101"]]);
    }
}
