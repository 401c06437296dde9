//! Configuration file support

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Scan configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scan-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Matches collected before a part file is written
    pub max_lines_per_part: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_lines_per_part: linesift_core::config::defaults::MAX_LINES_PER_PART,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory part files are written into
    pub directory: String,

    /// strftime pattern for the filename timestamp
    pub timestamp_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            timestamp_format: "%Y%m%d_%H%M%S".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;

        Ok(config)
    }
}
