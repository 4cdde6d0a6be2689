//! Input checks and table loading.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use cmatch_model::{MatchError, RecordTable, Result};

use crate::sniff::{Dialect, SAMPLE_BYTES, sniff_dialect};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| {
            name.to_string_lossy().into_owned()
        })
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Verify the input path exists and is a regular file.
///
/// # Errors
///
/// `InputMissing` when the path does not exist, `NotAFile` when it names a
/// directory or other non-file.
pub fn check_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(MatchError::InputMissing {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(MatchError::NotAFile {
            name: file_name(path),
        });
    }
    Ok(())
}

/// Sniff the dialect of a CSV file from its first [`SAMPLE_BYTES`] bytes.
///
/// # Errors
///
/// `Dialect` when no consistent delimiter can be inferred, plus the usual
/// input-path errors.
pub fn sniff_file(path: &Path) -> Result<Dialect> {
    check_input(path)?;
    let mut sample = vec![0u8; SAMPLE_BYTES];
    let mut file = fs::File::open(path)?;
    let mut filled = 0usize;
    loop {
        let read = file.read(&mut sample[filled..])?;
        if read == 0 {
            break;
        }
        filled += read;
        if filled == sample.len() {
            break;
        }
    }
    sample.truncate(filled);
    let truncated = filled == SAMPLE_BYTES;
    sniff_dialect(&sample, truncated).map_err(|reason| MatchError::Dialect {
        name: file_name(path),
        reason,
    })
}

/// Load a CSV file into a [`RecordTable`] using its sniffed dialect.
///
/// The first row becomes the header. Rows whose field count differs from
/// the header are skipped, not fatal; fully empty rows are dropped.
pub fn read_table(path: &Path) -> Result<RecordTable> {
    let dialect = sniff_file(path)?;
    debug!(
        delimiter = %char::from(dialect.delimiter),
        file = %file_name(path),
        "sniffed csv dialect"
    );
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .from_path(path)
        .map_err(|error| MatchError::Csv {
            name: file_name(path),
            message: error.to_string(),
        })?;

    let mut table = RecordTable::default();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|error| MatchError::Csv {
            name: file_name(path),
            message: error.to_string(),
        })?;
        if table.headers.is_empty() {
            table.headers = record.iter().map(normalize_header).collect();
            continue;
        }
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if record.len() != table.headers.len() {
            skipped += 1;
            continue;
        }
        table.push_row(record.iter().map(normalize_cell).collect());
    }
    if skipped > 0 {
        warn!(
            rows = skipped,
            file = %file_name(path),
            "skipped rows with a field count different from the header"
        );
    }
    Ok(table)
}
