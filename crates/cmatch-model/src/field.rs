//! The canonical Customer Match schema.
//!
//! The target schema is closed and known at build time: every output column
//! carries one of these field names, and the required subset decides whether
//! an input file can be converted at all.

use serde::{Serialize, Serializer};

/// A recognized column of the Customer Match upload schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalField {
    FirstName,
    LastName,
    Phone,
    Email,
    Country,
    Zip,
}

/// All canonical fields, in output order.
pub const ALL_FIELDS: &[CanonicalField] = &[
    CanonicalField::FirstName,
    CanonicalField::LastName,
    CanonicalField::Phone,
    CanonicalField::Email,
    CanonicalField::Country,
    CanonicalField::Zip,
];

/// Fields that must be present for an upload file to be valid.
///
/// Country is recognized but optional; Zip has a single recovery path via
/// city/state lookup.
pub const REQUIRED_FIELDS: &[CanonicalField] = &[
    CanonicalField::FirstName,
    CanonicalField::LastName,
    CanonicalField::Phone,
    CanonicalField::Email,
    CanonicalField::Zip,
];

impl CanonicalField {
    /// The exact header name written to the output file.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Country => "Country",
            Self::Zip => "Zip",
        }
    }

    /// Exact match against a canonical header name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_FIELDS.iter().copied().find(|field| field.name() == name)
    }

    /// True if the field belongs to the required set.
    #[must_use]
    pub fn is_required(self) -> bool {
        REQUIRED_FIELDS.contains(&self)
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for CanonicalField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
