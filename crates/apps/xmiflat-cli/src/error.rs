//! CLI error types.

use thiserror::Error;
use xmiflat_table::TableError;
use xmiflat_types::ExtractError;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document-level extraction failure.
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// Table output failure.
    #[error("{0}")]
    Table(#[from] TableError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Batch input directory missing or not a directory.
    #[error("Input directory not found: {0}")]
    InputDirNotFound(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) => 1,
            // Not found: 2
            Self::FileNotFound(_) | Self::InputDirNotFound(_) => 2,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) => 3,
            // Extraction errors: 4
            Self::Extract(_) => 4,
            // Output errors: 5
            Self::Table(_) => 5,
            // IO errors: 9
            Self::Io(_) => 9,
            // JSON/format errors: 10
            Self::Json(_) => 10,
        }
    }

    /// Recovery hint shown under the error line, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Extract(e) => e.suggestion(),
            Self::InputDirNotFound(_) => Some("Check the path; the batch input must be a directory"),
            Self::Config(_) | Self::Toml(_) => {
                Some("Fix the configuration file or pass another one with --config")
            }
            Self::Table(TableError::InvalidDelimiter(_)) => {
                Some("Use a single ASCII character such as ',' or '\\t'")
            }
            _ => None,
        }
    }
}
