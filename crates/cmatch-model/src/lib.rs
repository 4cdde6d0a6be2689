pub mod error;
pub mod field;
pub mod mapping;
pub mod synonym;
pub mod table;

pub use error::{MatchError, Result};
pub use field::{ALL_FIELDS, CanonicalField, REQUIRED_FIELDS};
pub use mapping::{FieldBinding, FieldMap};
pub use synonym::{SYNONYMS, SynonymTable};
pub use table::RecordTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_map_serializes_with_canonical_names() {
        let mut map = FieldMap::default();
        map.bind(2, "Email Address", CanonicalField::Email).unwrap();
        let json = serde_json::to_string(&map).expect("serialize field map");
        assert!(json.contains("\"Email Address\""));
        assert!(json.contains("\"Email\""));
    }

    #[test]
    fn format_error_lists_missing_fields() {
        let error = MatchError::Format {
            missing: vec!["Email".to_string(), "Phone".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "not all required headers found, missing: Email, Phone"
        );
    }
}
