//! Columns command.

use xmiflat_types::{COLUMNS, VERSION};

use crate::error::CliResult;
use crate::output::{ColumnsOutput, OutputFormat, Render};

/// Print the output column contract.
pub fn columns(format: OutputFormat) -> CliResult<String> {
    let output = ColumnsOutput {
        version: VERSION,
        columns: COLUMNS.to_vec(),
    };
    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_json() {
        let out = columns(OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["columns"].as_array().unwrap().len(), 18);
        assert_eq!(json["columns"][17], "true_text");
        assert_eq!(json["version"], VERSION);
    }
}
