//! CLI configuration.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use xmiflat_table::TableOptions;
use xmiflat_types::TypeSystem;

use crate::error::{CliError, CliResult};

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax; unknown variables are left as written.
fn expand_env_vars(input: &str) -> String {
    let Ok(re) = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}") else {
        return input.to_string();
    };
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .to_string()
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_vars(&path.to_string_lossy()))
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Batch configuration.
    pub batch: BatchConfig,
    /// Table output configuration.
    pub table: TableOptions,
    /// Annotation family names.
    pub type_system: TypeSystem,
}

impl CliConfig {
    /// Load configuration from a file.
    ///
    /// A missing file yields the defaults. Environment variables in
    /// `${VAR}` format are expanded in path values.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        if let Some(log_dir) = config.batch.log_dir.as_mut() {
            *log_dir = expand_path(log_dir);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> CliResult<()> {
        self.table
            .validate()
            .map_err(|e| CliError::config(e.to_string()))?;

        let empty = self.type_system.empty_fields();
        if !empty.is_empty() {
            return Err(CliError::config(format!(
                "type_system fields must not be empty: {}",
                empty.join(", ")
            )));
        }
        Ok(())
    }
}

/// `[batch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Concurrent documents; 0 means available parallelism.
    pub workers: usize,
    /// Directory for run logs; defaults to the output directory.
    pub log_dir: Option<PathBuf>,
    /// Skip files whose name starts with a dot. Skips are still logged.
    pub skip_hidden: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            log_dir: None,
            skip_hidden: false,
        }
    }
}

impl BatchConfig {
    /// Worker count with 0 resolved to the machine's parallelism.
    pub fn effective_workers(&self) -> usize {
        resolve_workers(self.workers)
    }
}

/// Resolve a requested worker count; 0 means available parallelism.
pub fn resolve_workers(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Get the default base directory for xmiflat configuration.
pub fn default_base_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("XMIFLAT_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("", "", "xmiflat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".xmiflat")
        })
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    default_base_dir().join("config.toml")
}
