//! Per-file field map: which source column carries which canonical field.

use serde::Serialize;

use crate::field::{CanonicalField, REQUIRED_FIELDS};

/// One resolved source column.
#[derive(Debug, Clone, Serialize)]
pub struct FieldBinding {
    /// Column index in the source table.
    pub column: usize,
    /// Raw header as it appeared in the source file.
    pub source: String,
    /// Canonical field the column carries.
    pub field: CanonicalField,
}

/// Ordered association between source columns and canonical fields.
///
/// Built once per input file, in encountered header order. No two bindings
/// share a canonical field; the translator keeps the first match and drops
/// later duplicates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldMap {
    pub bindings: Vec<FieldBinding>,
}

impl FieldMap {
    #[must_use]
    pub fn contains(&self, field: CanonicalField) -> bool {
        self.bindings.iter().any(|binding| binding.field == field)
    }

    #[must_use]
    pub fn get(&self, field: CanonicalField) -> Option<&FieldBinding> {
        self.bindings.iter().find(|binding| binding.field == field)
    }

    /// Appends a binding unless the canonical field is already assigned.
    ///
    /// Returns the existing binding's raw header when the field was taken.
    pub fn bind(
        &mut self,
        column: usize,
        source: &str,
        field: CanonicalField,
    ) -> Result<(), String> {
        if let Some(existing) = self.get(field) {
            return Err(existing.source.clone());
        }
        self.bindings.push(FieldBinding {
            column,
            source: source.to_string(),
            field,
        });
        Ok(())
    }

    /// Required fields with no binding, in schema order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<CanonicalField> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.contains(*field))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_rejects_duplicate_fields() {
        let mut map = FieldMap::default();
        map.bind(0, "email", CanonicalField::Email).unwrap();
        let taken = map.bind(3, "work_email", CanonicalField::Email);
        assert_eq!(taken, Err("email".to_string()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn missing_required_preserves_schema_order() {
        let mut map = FieldMap::default();
        map.bind(0, "zip", CanonicalField::Zip).unwrap();
        map.bind(1, "surname", CanonicalField::LastName).unwrap();
        assert_eq!(
            map.missing_required(),
            vec![
                CanonicalField::FirstName,
                CanonicalField::Phone,
                CanonicalField::Email
            ]
        );
    }
}
