//! Required-field validation.

use cmatch_model::{CanonicalField, FieldMap, MatchError};

/// Outcome of checking a field map against the required set.
///
/// The zip-only gap is a distinct variant rather than an error: the caller
/// decides whether to attempt city/state zip inference or abort.
#[derive(Debug)]
pub enum SchemaCheck {
    /// Every required field is bound.
    Complete(FieldMap),
    /// Exactly Zip is missing, the single recoverable gap.
    MissingZip(FieldMap),
    /// Any other gap, always fatal.
    Invalid(Vec<CanonicalField>),
}

/// Check a field map for required-field completeness.
///
/// With `zip_required` false (the recovery path, where zips arrive from a
/// separate lookup) a zip-only gap counts as complete.
#[must_use]
pub fn check_schema(field_map: FieldMap, zip_required: bool) -> SchemaCheck {
    let missing = field_map.missing_required();
    if missing.is_empty() {
        return SchemaCheck::Complete(field_map);
    }
    if missing == [CanonicalField::Zip] {
        if zip_required {
            return SchemaCheck::MissingZip(field_map);
        }
        return SchemaCheck::Complete(field_map);
    }
    SchemaCheck::Invalid(missing)
}

/// The fatal error for an invalid gap, naming all missing fields.
#[must_use]
pub fn format_error(missing: &[CanonicalField]) -> MatchError {
    MatchError::Format {
        missing: missing.iter().map(|field| field.name().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmatch_model::SynonymTable;

    use crate::translate::translate_headers;

    fn field_map(headers: &[&str]) -> FieldMap {
        let headers: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
        translate_headers(&headers, &SynonymTable::builtin()).field_map
    }

    #[test]
    fn complete_when_required_fields_present() {
        let map = field_map(&["first_name", "last_name", "phone", "email", "zip"]);
        assert!(matches!(check_schema(map, true), SchemaCheck::Complete(_)));
    }

    #[test]
    fn zip_only_gap_is_recoverable() {
        let map = field_map(&["first_name", "last_name", "phone", "email", "city"]);
        assert!(matches!(check_schema(map, true), SchemaCheck::MissingZip(_)));
    }

    #[test]
    fn zip_gap_waived_on_the_recovery_path() {
        let map = field_map(&["first_name", "last_name", "phone", "email"]);
        assert!(matches!(check_schema(map, false), SchemaCheck::Complete(_)));
    }

    #[test]
    fn wider_gaps_are_fatal_even_with_zip_missing() {
        let map = field_map(&["first_name", "last_name"]);
        let SchemaCheck::Invalid(missing) = check_schema(map, true) else {
            panic!("expected invalid");
        };
        assert_eq!(
            missing,
            vec![
                CanonicalField::Phone,
                CanonicalField::Email,
                CanonicalField::Zip
            ]
        );
    }

    #[test]
    fn invalid_gap_names_exactly_the_missing_fields() {
        let map = field_map(&["first_name", "last_name", "zip"]);
        let SchemaCheck::Invalid(missing) = check_schema(map, true) else {
            panic!("expected invalid");
        };
        let error = format_error(&missing);
        assert_eq!(
            error.to_string(),
            "not all required headers found, missing: Phone, Email"
        );
    }
}
