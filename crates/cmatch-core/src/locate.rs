//! City/state column detection and per-row zip resolution.

use tracing::{info, warn};

use cmatch_geo::ZipLookup;
use cmatch_model::{MatchError, RecordTable, Result};

/// Source columns carrying city and state values.
#[derive(Debug, Clone)]
pub struct LocationColumns {
    pub city: usize,
    pub state: usize,
    pub city_source: String,
    pub state_source: String,
}

fn matches_location(raw: &str, wanted: &str) -> bool {
    // SalesQL exports prefix person_ onto city and state.
    let bare = raw.strip_prefix("person_").unwrap_or(raw);
    raw.eq_ignore_ascii_case(wanted) || bare.eq_ignore_ascii_case(wanted)
}

/// Find the city and state columns in a header row.
///
/// # Errors
///
/// `LocationColumns` naming whichever of the two is absent.
pub fn find_location_columns(headers: &[String]) -> Result<LocationColumns> {
    let mut city: Option<(usize, &String)> = None;
    let mut state: Option<(usize, &String)> = None;
    for (index, raw) in headers.iter().enumerate() {
        if city.is_none() && matches_location(raw, "city") {
            info!(source = %raw, "detected city column in CSV file");
            city = Some((index, raw));
        } else if state.is_none() && matches_location(raw, "state") {
            info!(source = %raw, "detected state column in CSV file");
            state = Some((index, raw));
        }
    }
    match (city, state) {
        (Some(city), Some(state)) => Ok(LocationColumns {
            city: city.0,
            state: state.0,
            city_source: city.1.clone(),
            state_source: state.1.clone(),
        }),
        (city, state) => {
            let mut missing = Vec::new();
            if city.is_none() {
                missing.push("city".to_string());
            }
            if state.is_none() {
                missing.push("state".to_string());
            }
            Err(MatchError::LocationColumns { missing })
        }
    }
}

/// Resolve one row's zip from its city and state cells.
///
/// Pure and best-effort: empty cells or a lookup miss yield `None`, never
/// an error.
#[must_use]
pub fn resolve_zip(lookup: &dyn ZipLookup, city: &str, state: &str) -> Option<String> {
    if city.trim().is_empty() || state.trim().is_empty() {
        return None;
    }
    lookup.zip_for(city, state)
}

/// Result of a full zip scan over a table.
#[derive(Debug, Clone, Default)]
pub struct ZipScan {
    /// One zip per input row, empty string on a miss, same row order.
    pub zips: Vec<String>,
    pub resolved: usize,
    pub missed: usize,
}

/// Resolve a zip for every row, degrading misses to empty strings.
///
/// `progress` is called once per scanned row so the caller can surface the
/// dominant cost of large inputs.
pub fn resolve_zips<F>(
    table: &RecordTable,
    columns: &LocationColumns,
    lookup: &dyn ZipLookup,
    mut progress: F,
) -> ZipScan
where
    F: FnMut(usize),
{
    let mut scan = ZipScan::default();
    for (index, _) in table.rows.iter().enumerate() {
        let city = table.cell(index, columns.city);
        let state = table.cell(index, columns.state);
        match resolve_zip(lookup, city, state) {
            Some(zip) => {
                scan.resolved += 1;
                scan.zips.push(zip);
            }
            None => {
                warn!(city = %city, state = %state, "zip lookup failed");
                scan.missed += 1;
                scan.zips.push(String::new());
            }
        }
        progress(index + 1);
    }
    scan
}
