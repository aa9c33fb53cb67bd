//! Command-line interface for xmiflat.
//!
//! This crate provides the `xmiflat` binary, which turns cTAKES XMI
//! documents into delimited tables:
//!
//! - **parse**: Extract one document to stdout or a file
//! - **batch**: Convert a directory of documents in parallel, with a run log
//! - **columns**: Print the output column order
//! - **completions**: Generate shell completions
//!
//! # Quick Start
//!
//! ```bash
//! # Convert a directory of notes
//! xmiflat batch notes/ tables/
//!
//! # Inspect one document as JSON
//! xmiflat --format json parse notes/note_001.xmi
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from `<config dir>/xmiflat/config.toml`.
//! Override with `--config` or `XMIFLAT_CONFIG`.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod runlog;

// Re-export main types
pub use batch::{run_batch, BatchOptions, BatchSummary};
pub use cli::{Cli, Commands, CompletionShell, OutputFormatArg};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
pub use runlog::RunLog;
