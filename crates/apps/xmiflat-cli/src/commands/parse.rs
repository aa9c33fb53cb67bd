//! Parse command: extract a single document.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::{debug, warn};
use xmiflat_extract::Extractor;
use xmiflat_table::{to_string, write_table_file};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, ParseOutput, RecordsOutput, Render};

/// Extract `file` and write its table to `output` or return it.
///
/// Without `output`, human format returns the table itself and JSON
/// format returns the records with stats and diagnostics.
pub fn parse(
    config: CliConfig,
    format: OutputFormat,
    file: &Path,
    output: Option<PathBuf>,
) -> CliResult<String> {
    if !file.is_file() {
        return Err(CliError::FileNotFound(file.display().to_string()));
    }

    let bytes = std::fs::read(file)?;
    let extractor = Extractor::new(config.type_system);
    let extraction = extractor.extract_bytes(&bytes)?;
    debug!(
        file = %file.display(),
        records = extraction.records.len(),
        dropped = extraction.diagnostics.len(),
        "Extracted document"
    );

    for diagnostic in &extraction.diagnostics {
        warn!(file = %file.display(), %diagnostic, "Dropped element");
    }

    match (output, format) {
        (Some(output), _) => {
            let records = write_table_file(&output, &extraction.records, &config.table)?;
            let out = ParseOutput {
                file: file.display().to_string(),
                output: output.display().to_string(),
                records,
                stats: extraction.stats,
                diagnostics: extraction.diagnostics,
            };
            Ok(out.render(format))
        }
        (None, OutputFormat::Human) => {
            for diagnostic in &extraction.diagnostics {
                eprintln!("{} dropped {}", "Warning:".yellow().bold(), diagnostic);
            }
            let table = to_string(&extraction.records, &config.table)?;
            Ok(table.trim_end_matches('\n').to_string())
        }
        (None, OutputFormat::Json) => {
            let out = RecordsOutput {
                file: file.display().to_string(),
                records: extraction.records,
                stats: extraction.stats,
                diagnostics: extraction.diagnostics,
            };
            Ok(out.render_json())
        }
    }
}
