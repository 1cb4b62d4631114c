use std::path::PathBuf;
use thiserror::Error;

/// Schema and parse failures for uploaded tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required header is absent. Header names must match exactly.
    #[error("required column '{column}' is missing")]
    MissingColumn { column: &'static str },

    /// A cell could not be parsed into the column's type.
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
