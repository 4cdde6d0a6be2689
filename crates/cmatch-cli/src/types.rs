use std::path::PathBuf;

use serde::Serialize;

use cmatch_model::FieldMap;

/// Zip-inference counts when the recovery path ran.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZipSummary {
    pub resolved: usize,
    pub missed: usize,
}

/// Everything a completed run produced, for the console summary and the
/// optional JSON report.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Records written to the output file.
    pub records: usize,
    /// Source-to-canonical column bindings used for projection.
    pub field_map: FieldMap,
    /// Source columns dropped from the output.
    pub dropped_columns: Vec<String>,
    /// Duplicate headers discarded during translation.
    pub duplicate_headers: usize,
    /// Present when zip codes were inferred from city/state.
    pub zip_inference: Option<ZipSummary>,
    pub hashed: bool,
}
