//! Output formatting options.

use serde::{Deserialize, Serialize};
use xmiflat_types::DEFAULT_NULL_TOKEN;

use crate::error::{TableError, TableResult};

/// How rows are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Field delimiter; a single ASCII character.
    pub delimiter: String,
    /// Written in place of absent values.
    pub null_token: String,
    /// Emit the column header row first.
    pub header: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            null_token: DEFAULT_NULL_TOKEN.to_string(),
            header: true,
        }
    }
}

impl TableOptions {
    /// The delimiter as a byte, or an error if it is not usable.
    pub fn delimiter_byte(&self) -> TableResult<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
            _ => Err(TableError::InvalidDelimiter(self.delimiter.clone())),
        }
    }

    pub fn validate(&self) -> TableResult<()> {
        self.delimiter_byte().map(|_| ())
    }
}
