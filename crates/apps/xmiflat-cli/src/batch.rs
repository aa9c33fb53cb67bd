//! Directory batch runner.
//!
//! Every regular file directly inside the input directory is extracted on
//! the blocking pool, at most `workers` at a time. A failing document is
//! logged and skipped; only a missing input directory or an unwritable
//! output or log location stops the batch.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use xmiflat_extract::Extractor;
use xmiflat_table::{write_table_file, TableOptions};
use xmiflat_types::{Diagnostic, TypeSystem, TABLE_EXTENSION};

use crate::error::{CliError, CliResult};
use crate::runlog::RunLog;

/// Everything a batch run needs.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Already resolved; at least 1.
    pub workers: usize,
    /// Where the run log goes; `None` means the output directory.
    pub log_dir: Option<PathBuf>,
    pub skip_hidden: bool,
    pub table: TableOptions,
    pub type_system: TypeSystem,
}

/// Input files to process, and entries passed over.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Outcome of one document.
#[derive(Debug)]
pub enum FileOutcome {
    Processed {
        file: PathBuf,
        output: PathBuf,
        records: usize,
        diagnostics: Vec<Diagnostic>,
    },
    Failed {
        file: PathBuf,
        error: String,
    },
}

/// A document that produced no table.
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub file: String,
    pub error: String,
}

/// Totals of a finished batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub records: usize,
    pub diagnostics: usize,
    pub output_dir: String,
    pub log_path: String,
    pub failures: Vec<FailedFile>,
}

/// Output path for `file`: same base name, table extension.
pub fn output_path(output_dir: &Path, file: &Path) -> PathBuf {
    let name = file.file_name().map(PathBuf::from).unwrap_or_default();
    output_dir.join(name).with_extension(TABLE_EXTENSION)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// List the direct entries of `input_dir`, sorted by name.
///
/// Symbolic links are followed. Two inputs that would write the same output
/// file keep the first in name order; the later one is skipped.
pub fn discover(input_dir: &Path, skip_hidden: bool) -> CliResult<Discovery> {
    if !input_dir.is_dir() {
        return Err(CliError::InputDirNotFound(input_dir.display().to_string()));
    }

    let mut discovery = Discovery::default();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    let walker = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| input_dir.to_path_buf());
                discovery.skipped.push((path, e.to_string()));
                continue;
            }
        };
        let path = entry.path().to_path_buf();

        if skip_hidden && is_hidden(&path) {
            discovery.skipped.push((path, "hidden file".to_string()));
            continue;
        }
        if !entry.file_type().is_file() {
            discovery
                .skipped
                .push((path, "not a regular file".to_string()));
            continue;
        }

        let target = output_path(Path::new(""), &path);
        if let Some(first) = claimed.get(&target) {
            let reason = format!("output name collides with {}", first.display());
            discovery.skipped.push((path, reason));
            continue;
        }
        claimed.insert(target, path.clone());
        discovery.files.push(path);
    }

    Ok(discovery)
}

/// Extract one document and write its table. Never panics on bad input.
pub fn process_file(
    file: &Path,
    output_dir: &Path,
    extractor: &Extractor,
    table: &TableOptions,
) -> FileOutcome {
    let failed = |error: String| FileOutcome::Failed {
        file: file.to_path_buf(),
        error,
    };

    let bytes = match std::fs::read(file) {
        Ok(bytes) => bytes,
        Err(e) => return failed(e.to_string()),
    };
    let extraction = match extractor.extract_bytes(&bytes) {
        Ok(extraction) => extraction,
        Err(e) => return failed(e.to_string()),
    };

    let output = output_path(output_dir, file);
    match write_table_file(&output, &extraction.records, table) {
        Ok(records) => FileOutcome::Processed {
            file: file.to_path_buf(),
            output,
            records,
            diagnostics: extraction.diagnostics,
        },
        Err(e) => failed(e.to_string()),
    }
}

/// Run a whole batch, advancing `progress` once per document.
pub async fn run_batch(options: BatchOptions, progress: &ProgressBar) -> CliResult<BatchSummary> {
    let discovery = discover(&options.input_dir, options.skip_hidden)?;
    std::fs::create_dir_all(&options.output_dir)?;

    let log_dir = options
        .log_dir
        .clone()
        .unwrap_or_else(|| options.output_dir.clone());
    let mut log = RunLog::open(&log_dir)?;
    let workers = options.workers.max(1);
    log.started(&options.input_dir, &options.output_dir, workers)?;

    info!(
        input = %options.input_dir.display(),
        output = %options.output_dir.display(),
        files = discovery.files.len(),
        workers,
        "Starting batch"
    );

    let mut summary = BatchSummary {
        output_dir: options.output_dir.display().to_string(),
        ..BatchSummary::default()
    };

    for (path, reason) in &discovery.skipped {
        warn!(file = %path.display(), %reason, "Skipping entry");
        log.skipped(path, reason)?;
        summary.skipped += 1;
    }

    progress.set_length(discovery.files.len() as u64);

    let extractor = Arc::new(Extractor::new(options.type_system.clone()));
    let table = Arc::new(options.table.clone());
    let output_dir = Arc::new(options.output_dir.clone());

    let mut outcomes = stream::iter(discovery.files)
        .map(|file| {
            let extractor = Arc::clone(&extractor);
            let table = Arc::clone(&table);
            let output_dir = Arc::clone(&output_dir);
            async move {
                let worker_file = file.clone();
                let joined = tokio::task::spawn_blocking(move || {
                    process_file(&worker_file, &output_dir, &extractor, &table)
                })
                .await;
                joined.unwrap_or_else(|e| FileOutcome::Failed {
                    file,
                    error: format!("worker failed: {}", e),
                })
            }
        })
        .buffer_unordered(workers);

    while let Some(outcome) = outcomes.next().await {
        match outcome {
            FileOutcome::Processed {
                file,
                output,
                records,
                diagnostics,
            } => {
                debug!(
                    file = %file.display(),
                    output = %output.display(),
                    records,
                    dropped = diagnostics.len(),
                    "Processed document"
                );
                log.processed(&file, records, diagnostics.len())?;
                for diagnostic in &diagnostics {
                    log.diagnostic(&file, diagnostic)?;
                }
                summary.processed += 1;
                summary.records += records;
                summary.diagnostics += diagnostics.len();
            }
            FileOutcome::Failed { file, error } => {
                warn!(file = %file.display(), %error, "Failed to process document");
                log.failed(&file, &error)?;
                summary.failed += 1;
                summary.failures.push(FailedFile {
                    file: file.display().to_string(),
                    error,
                });
            }
        }
        progress.inc(1);
    }

    summary.failures.sort_by(|a, b| a.file.cmp(&b.file));
    log.finished(
        summary.processed,
        summary.skipped,
        summary.failed,
        summary.records,
    )?;
    summary.log_path = log.close()?.display().to_string();

    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        records = summary.records,
        "Batch finished"
    );

    Ok(summary)
}
