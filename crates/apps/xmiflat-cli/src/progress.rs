//! Progress bar utilities for CLI commands.

use indicatif::{ProgressBar, ProgressStyle};

use crate::output::OutputFormat;

/// Create a hidden progress bar (no-op).
///
/// Use this when running in non-interactive mode or JSON output.
pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}

/// Create a progress bar for known-length operations.
///
/// The length may be set later with `set_length`.
pub fn progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Progress bar appropriate for `format`.
pub fn for_format(format: OutputFormat, total: u64, msg: &str) -> ProgressBar {
    match format {
        OutputFormat::Human => progress_bar(total, msg),
        OutputFormat::Json => hidden(),
    }
}
