//! Static header synonym table.
//!
//! Maps raw header spellings seen in upstream CRM and enrichment exports to
//! canonical fields. Lookups are verbatim and case-sensitive; spellings that
//! only differ by underscores and casing are handled by the translator's
//! normalization step instead of being enumerated here.

use std::collections::HashMap;

use crate::field::CanonicalField;

/// Known raw header spellings and the canonical field each one carries.
pub const SYNONYMS: &[(&str, CanonicalField)] = &[
    ("fname", CanonicalField::FirstName),
    ("first", CanonicalField::FirstName),
    ("forename", CanonicalField::FirstName),
    ("given name", CanonicalField::FirstName),
    ("given_name", CanonicalField::FirstName),
    ("FirstName", CanonicalField::FirstName),
    ("lname", CanonicalField::LastName),
    ("last", CanonicalField::LastName),
    ("surname", CanonicalField::LastName),
    ("family name", CanonicalField::LastName),
    ("family_name", CanonicalField::LastName),
    ("LastName", CanonicalField::LastName),
    ("tel", CanonicalField::Phone),
    ("telephone", CanonicalField::Phone),
    ("mobile", CanonicalField::Phone),
    ("mobile_number", CanonicalField::Phone),
    ("cell", CanonicalField::Phone),
    ("cell_phone", CanonicalField::Phone),
    ("phone number", CanonicalField::Phone),
    ("phone_number", CanonicalField::Phone),
    ("Phone Number", CanonicalField::Phone),
    ("person_phone", CanonicalField::Phone),
    ("mail", CanonicalField::Email),
    ("e-mail", CanonicalField::Email),
    ("e_mail", CanonicalField::Email),
    ("email address", CanonicalField::Email),
    ("email_address", CanonicalField::Email),
    ("Email Address", CanonicalField::Email),
    ("work_email", CanonicalField::Email),
    ("person_email", CanonicalField::Email),
    ("nation", CanonicalField::Country),
    ("country code", CanonicalField::Country),
    ("country_code", CanonicalField::Country),
    ("Country Code", CanonicalField::Country),
    ("country_name", CanonicalField::Country),
    ("person_country", CanonicalField::Country),
    ("zipcode", CanonicalField::Zip),
    ("ZipCode", CanonicalField::Zip),
    ("zip code", CanonicalField::Zip),
    ("zip_code", CanonicalField::Zip),
    ("postcode", CanonicalField::Zip),
    ("postal code", CanonicalField::Zip),
    ("postal_code", CanonicalField::Zip),
    ("Postal Code", CanonicalField::Zip),
    ("person_zip", CanonicalField::Zip),
];

/// Immutable raw-header lookup, built once at startup.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: HashMap<&'static str, CanonicalField>,
}

impl SynonymTable {
    /// The compiled-in synonym table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: SYNONYMS.iter().copied().collect(),
        }
    }

    /// Verbatim, case-sensitive lookup of a raw header.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<CanonicalField> {
        self.entries.get(raw).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known spellings for one canonical field, sorted for display.
    #[must_use]
    pub fn spellings_for(&self, field: CanonicalField) -> Vec<&'static str> {
        let mut spellings: Vec<&'static str> = SYNONYMS
            .iter()
            .filter(|(_, target)| *target == field)
            .map(|(raw, _)| *raw)
            .collect();
        spellings.sort_unstable();
        spellings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        let table = SynonymTable::builtin();
        assert_eq!(table.get("Email Address"), Some(CanonicalField::Email));
        assert_eq!(table.get("EMAIL ADDRESS"), None);
    }

    #[test]
    fn no_spelling_maps_to_two_fields() {
        let table = SynonymTable::builtin();
        assert_eq!(table.len(), SYNONYMS.len());
    }
}
