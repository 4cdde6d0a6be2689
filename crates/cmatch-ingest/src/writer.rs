//! Output checks and table writing.

use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use cmatch_model::{MatchError, RecordTable, Result};

/// Verify the directory portion of the output path exists.
///
/// A bare file name writes to the working directory and always passes.
///
/// # Errors
///
/// `OutputDir` when the named directory is missing.
pub fn check_output(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(MatchError::OutputDir {
                path: parent.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Serialize a table as UTF-8 CSV with a header row and no index column.
///
/// Short rows are padded with empty cells so every record matches the
/// header width.
pub fn write_table(table: &RecordTable, path: &Path) -> Result<()> {
    check_output(path)?;
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| MatchError::Csv {
            name: path.display().to_string(),
            message: error.to_string(),
        })?;
    let width = table.headers.len();
    writer
        .write_record(&table.headers)
        .map_err(|error| csv_error(path, &error))?;
    for row in &table.rows {
        let mut record = csv::StringRecord::new();
        for index in 0..width {
            record.push_field(row.get(index).map_or("", String::as_str));
        }
        writer
            .write_record(&record)
            .map_err(|error| csv_error(path, &error))?;
    }
    writer.flush()?;
    let resolved = path
        .canonicalize()
        .unwrap_or_else(|_| path.to_path_buf());
    info!(path = %resolved.display(), rows = table.row_count(), "saved customer match file");
    Ok(())
}

fn csv_error(path: &Path, error: &csv::Error) -> MatchError {
    MatchError::Csv {
        name: path.display().to_string(),
        message: error.to_string(),
    }
}
