//! Optional TOML configuration
//!
//! ```toml
//! [extract]
//! scan_last_row = false
//! legacy_geometry = false
//!
//! [output]
//! format = "legacy"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use std::fs;

use log::info;
use serde::Deserialize;

use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::ExtractOptions;
use crate::output::OutputFormat;

/// Settings read from a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub extract: ExtractOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Read and parse a configuration file
    pub fn load(path: &str) -> ExtractResult<Self> {
        info!("Loading configuration from {}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| ExtractError::ConfigError(format!("{}: {}", path, e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> ExtractResult<Self> {
        Ok(toml::from_str(content)?)
    }
}
