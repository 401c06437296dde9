//! Configuration for chunked scans

use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Default number of matches collected before a part is flushed
    pub const MAX_LINES_PER_PART: usize = 20_000;
}

/// Scan configuration
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub(crate) max_lines_per_part: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_lines_per_part: defaults::MAX_LINES_PER_PART,
        }
    }
}

impl FilterConfig {
    /// Create a configuration builder
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Number of matches collected before a part is flushed
    pub fn max_lines_per_part(&self) -> usize {
        self.max_lines_per_part
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_lines_per_part == 0 {
            return Err(Error::Configuration(
                "max_lines_per_part must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for scan configuration
#[derive(Debug, Default)]
pub struct FilterConfigBuilder {
    max_lines_per_part: Option<usize>,
}

impl FilterConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of matches per part
    pub fn max_lines_per_part(mut self, count: usize) -> Self {
        self.max_lines_per_part = Some(count);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FilterConfig> {
        let mut config = FilterConfig::default();

        if let Some(count) = self.max_lines_per_part {
            config.max_lines_per_part = count;
        }

        config.validate()?;
        Ok(config)
    }
}
