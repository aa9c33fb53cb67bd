//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// xmiflat CLI.
#[derive(Parser, Debug)]
#[command(name = "xmiflat")]
#[command(author = "xmiflat contributors")]
#[command(version)]
#[command(about = "Flatten clinical XMI annotations into tables")]
#[command(
    long_about = "xmiflat extracts concept mentions, their ontology concepts and token text from cTAKES XMI documents and writes one table row per mention and concept.\n\nRun 'xmiflat batch <INPUT_DIR> <OUTPUT_DIR>' to convert a directory of notes."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "XMIFLAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Shells supported by the completions command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract one XMI document.
    ///
    /// Writes the table to --output, or prints it to stdout.
    Parse {
        /// Path to the XMI document.
        file: PathBuf,

        /// Write the table to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert every document in a directory.
    ///
    /// Each regular file in INPUT_DIR becomes OUTPUT_DIR/<name>.csv.
    /// Documents that fail are logged and skipped.
    Batch {
        /// Directory of XMI documents (not searched recursively).
        input_dir: PathBuf,

        /// Directory for the tables; created if absent.
        output_dir: PathBuf,

        /// Documents processed at once (0 = number of CPUs).
        #[arg(short, long)]
        workers: Option<usize>,

        /// Directory for the run log (default: OUTPUT_DIR).
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },

    /// Print the output table columns in order.
    Columns,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_batch_args() {
        let cli = Cli::try_parse_from([
            "xmiflat", "--format", "json", "batch", "in", "out", "--workers", "4",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormatArg::Json));
        match cli.command {
            Commands::Batch {
                input_dir,
                output_dir,
                workers,
                log_dir,
            } => {
                assert_eq!(input_dir, PathBuf::from("in"));
                assert_eq!(output_dir, PathBuf::from("out"));
                assert_eq!(workers, Some(4));
                assert!(log_dir.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["xmiflat", "parse", "note.xmi", "-v", "-o", "t.csv"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Parse { output: Some(_), .. }
        ));
    }
}
