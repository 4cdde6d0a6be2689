//! JSON run report.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::types::RunSummary;

/// Write the run summary as pretty-printed JSON.
pub fn write_report(summary: &RunSummary, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create report file {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary).context("serialize run report")?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}
