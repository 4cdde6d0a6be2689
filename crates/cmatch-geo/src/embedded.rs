//! Embedded gazetteer data.
//!
//! The default city/state/zip table is embedded at compile time using
//! `include_str!()`, so zip inference works with no runtime data files.
//! An external table can still be supplied per run.

/// US city/state/zip gazetteer, one primary zip per city.
pub const US_CITY_STATE_ZIP: &str = include_str!("../data/us_city_state_zip.csv");
