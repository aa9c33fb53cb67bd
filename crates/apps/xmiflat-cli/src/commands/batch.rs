//! Batch command: convert a directory of documents.

use std::path::{Path, PathBuf};

use crate::batch::{run_batch, BatchOptions};
use crate::config::{resolve_workers, CliConfig};
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};
use crate::progress;

/// Convert every document in `input_dir` into a table under `output_dir`.
///
/// Command-line values override the `[batch]` configuration section.
pub async fn batch(
    config: CliConfig,
    format: OutputFormat,
    input_dir: &Path,
    output_dir: &Path,
    workers: Option<usize>,
    log_dir: Option<PathBuf>,
) -> CliResult<String> {
    let options = BatchOptions {
        input_dir: input_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        workers: resolve_workers(workers.unwrap_or(config.batch.workers)),
        log_dir: log_dir.or(config.batch.log_dir),
        skip_hidden: config.batch.skip_hidden,
        table: config.table,
        type_system: config.type_system,
    };

    let pb = progress::for_format(format, 0, "Extracting");
    let result = run_batch(options, &pb).await;
    pb.finish_and_clear();

    Ok(result?.render(format))
}
