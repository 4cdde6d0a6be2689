use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("the path {} does not exist", path.display())]
    OutputDir { path: PathBuf },
    #[error("the path {} does not exist", path.display())]
    InputMissing { path: PathBuf },
    #[error("{name} is not a file")]
    NotAFile { name: String },
    #[error("could not determine a CSV dialect for {name}: {reason}")]
    Dialect { name: String, reason: String },
    #[error("not all required headers found, missing: {}", missing.join(", "))]
    Format { missing: Vec<String> },
    #[error("could not find state and city columns, missing: {}", missing.join(", "))]
    LocationColumns { missing: Vec<String> },
    #[error("could not read {name} as CSV: {message}")]
    Csv { name: String, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
