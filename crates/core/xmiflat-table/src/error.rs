//! Error types for table output.

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = std::result::Result<T, TableError>;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid delimiter {0:?}: must be a single ASCII character other than '\"'")]
    InvalidDelimiter(String),
}

impl<W> From<csv::IntoInnerError<W>> for TableError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        TableError::Io(err.into_error())
    }
}
