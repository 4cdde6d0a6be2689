//! Header translation.
//!
//! Raw source headers resolve to canonical fields in two steps: a verbatim
//! synonym-table lookup, then an underscore-to-space title-case
//! normalization checked against the canonical set. Headers that resolve to
//! an already-assigned field are dropped, first match wins.

use tracing::{info, warn};

use cmatch_model::{CanonicalField, FieldMap, SynonymTable};

/// A later header whose canonical field was already taken.
#[derive(Debug, Clone)]
pub struct DuplicateHeader {
    pub field: CanonicalField,
    /// Raw header that was discarded.
    pub dropped: String,
    /// Raw header that keeps the field.
    pub kept: String,
}

/// Outcome of translating one file's header row.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    pub field_map: FieldMap,
    pub duplicates: Vec<DuplicateHeader>,
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Underscores become spaces, every word is title-cased.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve one raw header to a canonical field, if it has one.
#[must_use]
pub fn resolve_header(synonyms: &SynonymTable, raw: &str) -> Option<CanonicalField> {
    if let Some(field) = synonyms.get(raw) {
        return Some(field);
    }
    CanonicalField::from_name(&normalize_header(raw))
}

/// Translate a header row into a field map, in encountered order.
///
/// Deterministic for a fixed header order. Emits one note per successful
/// translation and one warning per discarded duplicate.
pub fn translate_headers(headers: &[String], synonyms: &SynonymTable) -> Translation {
    let mut translation = Translation::default();
    for (column, raw) in headers.iter().enumerate() {
        let Some(field) = resolve_header(synonyms, raw) else {
            continue;
        };
        match translation.field_map.bind(column, raw, field) {
            Ok(()) => {
                info!(field = %field, source = %raw, "detected header in CSV file");
            }
            Err(kept) => {
                warn!(
                    field = %field,
                    dropped = %raw,
                    kept = %kept,
                    "duplicate header, keeping the first column"
                );
                translation.duplicates.push(DuplicateHeader {
                    field,
                    dropped: raw.clone(),
                    kept,
                });
            }
        }
    }
    translation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_matches_python_title_casing() {
        assert_eq!(normalize_header("first_name"), "First Name");
        assert_eq!(normalize_header("LAST_NAME"), "Last Name");
        assert_eq!(normalize_header("zip"), "Zip");
        assert_eq!(normalize_header("  phone  "), "Phone");
    }

    #[test]
    fn synonym_lookup_takes_precedence() {
        let synonyms = SynonymTable::builtin();
        assert_eq!(
            resolve_header(&synonyms, "Email Address"),
            Some(CanonicalField::Email)
        );
        // Normalization alone would not produce a canonical name here.
        assert_eq!(
            resolve_header(&synonyms, "surname"),
            Some(CanonicalField::LastName)
        );
        assert_eq!(resolve_header(&synonyms, "favorite_color"), None);
    }
}
