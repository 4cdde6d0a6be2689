//! Gazetteer-backed zip lookup.

use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;

use cmatch_model::{MatchError, Result};

use crate::embedded::US_CITY_STATE_ZIP;
use crate::states::state_code;

/// Best-effort city/state to zip resolution.
///
/// Implementations never fail: an unknown pair is a `None`, not an error.
pub trait ZipLookup {
    /// First zip code associated with the (city, state) pair, if any.
    fn zip_for(&self, city: &str, state: &str) -> Option<String>;
}

/// In-memory city/state/zip table.
///
/// Cities match case-insensitively; states match by USPS code or full name.
/// When a pair appears more than once, the first zip wins.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: HashMap<(String, String), String>,
}

impl Gazetteer {
    /// The compiled-in US gazetteer.
    #[must_use]
    pub fn builtin() -> Self {
        // The embedded table is well-formed by construction.
        Self::parse(US_CITY_STATE_ZIP, "embedded gazetteer")
            .unwrap_or(Self {
                entries: HashMap::new(),
            })
    }

    /// Load a gazetteer from an external CSV with city,state,zip columns.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or lacks the expected columns.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents, &path.display().to_string())
    }

    fn parse(contents: &str, name: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new().from_reader(contents.as_bytes());
        let headers = reader
            .headers()
            .map_err(|error| csv_error(name, &error))?
            .clone();
        let column = |wanted: &str| -> Result<usize> {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(wanted))
                .ok_or_else(|| MatchError::Csv {
                    name: name.to_string(),
                    message: format!("missing {wanted} column"),
                })
        };
        let city_col = column("city")?;
        let state_col = column("state")?;
        let zip_col = column("zip")?;

        let mut entries = HashMap::new();
        for record in reader.records() {
            let record = record.map_err(|error| csv_error(name, &error))?;
            let city = record.get(city_col).unwrap_or("").trim();
            let state = record.get(state_col).unwrap_or("").trim();
            let zip = record.get(zip_col).unwrap_or("").trim();
            if city.is_empty() || state.is_empty() || zip.is_empty() {
                continue;
            }
            entries
                .entry((city.to_ascii_lowercase(), state_code(state)))
                .or_insert_with(|| zip.to_string());
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ZipLookup for Gazetteer {
    fn zip_for(&self, city: &str, state: &str) -> Option<String> {
        let key = (
            city.trim().to_ascii_lowercase(),
            state_code(state),
        );
        self.entries.get(&key).cloned()
    }
}

fn csv_error(name: &str, error: &csv::Error) -> MatchError {
    MatchError::Csv {
        name: name.to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_major_cities() {
        let gazetteer = Gazetteer::builtin();
        assert!(!gazetteer.is_empty());
        assert_eq!(gazetteer.zip_for("Seattle", "WA").as_deref(), Some("98101"));
        assert_eq!(
            gazetteer.zip_for("new york", "New York").as_deref(),
            Some("10001")
        );
    }

    #[test]
    fn states_disambiguate_shared_city_names() {
        let gazetteer = Gazetteer::builtin();
        assert_eq!(
            gazetteer.zip_for("Portland", "OR").as_deref(),
            Some("97201")
        );
        assert_eq!(
            gazetteer.zip_for("Portland", "Maine").as_deref(),
            Some("04101")
        );
    }

    #[test]
    fn external_tables_load_and_first_zip_wins() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("zips.csv");
        std::fs::write(&path, "Zip,City,State\n11111,Springfield,XX\n22222,Springfield,XX\n")
            .expect("write gazetteer");
        let gazetteer = Gazetteer::from_path(&path).expect("load gazetteer");
        assert_eq!(gazetteer.len(), 1);
        assert_eq!(
            gazetteer.zip_for("springfield", "xx").as_deref(),
            Some("11111")
        );
    }

    #[test]
    fn unknown_pairs_miss() {
        let gazetteer = Gazetteer::builtin();
        assert_eq!(gazetteer.zip_for("Atlantis", "FL"), None);
        assert_eq!(gazetteer.zip_for("Seattle", "TX"), None);
    }
}
