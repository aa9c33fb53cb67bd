//! Per-batch run log.
//!
//! One plain-text file per batch run, one timestamped line per event. The
//! log is opened before the batch starts and closed when it finishes; only
//! the batch runner writes to it.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use xmiflat_types::Diagnostic;

/// File name prefix of run logs.
pub const RUN_LOG_PREFIX: &str = "xmiflat";

/// An open run log.
pub struct RunLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl RunLog {
    /// Create `<dir>/xmiflat-<YYYYmmdd-HHMMSS>.log`, creating `dir` if needed.
    pub fn open(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("{}-{}.log", RUN_LOG_PREFIX, stamp));
        let writer = BufWriter::new(File::create(&path)?);
        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn line(&mut self, level: &str, message: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "{} {:<5} {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level,
            message
        )
    }

    pub fn started(&mut self, input: &Path, output: &Path, workers: usize) -> io::Result<()> {
        self.line(
            "INFO",
            &format!(
                "batch started: input={} output={} workers={}",
                input.display(),
                output.display(),
                workers
            ),
        )
    }

    pub fn processed(&mut self, file: &Path, records: usize, diagnostics: usize) -> io::Result<()> {
        self.line(
            "INFO",
            &format!(
                "processed {}: {} record(s), {} dropped element(s)",
                file.display(),
                records,
                diagnostics
            ),
        )
    }

    pub fn diagnostic(&mut self, file: &Path, diagnostic: &Diagnostic) -> io::Result<()> {
        self.line(
            "WARN",
            &format!("{}: dropped {}", file.display(), diagnostic),
        )
    }

    pub fn skipped(&mut self, path: &Path, reason: &str) -> io::Result<()> {
        self.line("WARN", &format!("skipped {}: {}", path.display(), reason))
    }

    pub fn failed(&mut self, file: &Path, error: &str) -> io::Result<()> {
        self.line("ERROR", &format!("failed {}: {}", file.display(), error))
    }

    pub fn finished(
        &mut self,
        processed: usize,
        skipped: usize,
        failed: usize,
        records: usize,
    ) -> io::Result<()> {
        self.line(
            "INFO",
            &format!(
                "batch finished: {} processed, {} skipped, {} failed, {} record(s)",
                processed, skipped, failed, records
            ),
        )
    }

    /// Flush and close the log, returning its path.
    pub fn close(mut self) -> io::Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}
