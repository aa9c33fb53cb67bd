//! Delimited-table output for flattened concept records.
//!
//! One row per [`ConceptRecord`](xmiflat_types::ConceptRecord), columns in
//! the fixed order given by [`COLUMNS`](xmiflat_types::COLUMNS), absent
//! values written as a configurable null token.

pub mod error;
pub mod options;
pub mod row;
pub mod writer;

pub use error::{TableError, TableResult};
pub use options::TableOptions;
pub use row::{format_bool, format_float, render_row};
pub use writer::{to_string, write_table_file, TableWriter};
