//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;
use xmiflat_extract::ExtractStats;
use xmiflat_types::{ConceptRecord, Diagnostic};

use crate::batch::BatchSummary;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Output for the parse command when the table went to a file.
#[derive(Debug, Serialize)]
pub struct ParseOutput {
    pub file: String,
    pub output: String,
    pub records: usize,
    pub stats: ExtractStats,
    pub diagnostics: Vec<Diagnostic>,
}

impl Render for ParseOutput {
    fn render_human(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Parsed:".green().bold(), self.file),
            format!("{} {}", "Table:".bold(), self.output),
            format!("{} {}", "Records:".bold(), self.records),
        ];
        if !self.diagnostics.is_empty() {
            lines.push(format!(
                "{} {}",
                "Dropped elements:".yellow().bold(),
                self.diagnostics.len()
            ));
            for diagnostic in &self.diagnostics {
                lines.push(format!("  {}", diagnostic));
            }
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the parse command when records go to stdout as JSON.
#[derive(Debug, Serialize)]
pub struct RecordsOutput {
    pub file: String,
    pub records: Vec<ConceptRecord>,
    pub stats: ExtractStats,
    pub diagnostics: Vec<Diagnostic>,
}

impl Render for RecordsOutput {
    fn render_human(&self) -> String {
        self.records
            .iter()
            .map(|r| {
                format!(
                    "{} [{}, {}) {} {}",
                    r.mention_kind,
                    r.span.start,
                    r.span.end,
                    r.cui.as_deref().unwrap_or("-"),
                    r.reconstructed_text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Render for BatchSummary {
    fn render_human(&self) -> String {
        let headline = if self.failed == 0 {
            "Batch complete:".green().bold()
        } else {
            "Batch complete with failures:".yellow().bold()
        };
        let mut lines = vec![
            format!("{} {}", headline, self.output_dir),
            format!("{} {}", "Processed:".bold(), self.processed),
            format!("{} {}", "Skipped:".bold(), self.skipped),
            format!("{} {}", "Failed:".bold(), self.failed),
            format!("{} {}", "Records:".bold(), self.records),
            format!("{} {}", "Dropped elements:".bold(), self.diagnostics),
            format!("{} {}", "Run log:".bold(), self.log_path),
        ];
        for failure in &self.failures {
            lines.push(format!("  {} {}: {}", "x".red(), failure.file, failure.error));
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the columns command.
#[derive(Debug, Serialize)]
pub struct ColumnsOutput {
    pub version: &'static str,
    pub columns: Vec<&'static str>,
}

impl Render for ColumnsOutput {
    fn render_human(&self) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{:>2}  {}", i + 1, name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
