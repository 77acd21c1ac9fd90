//! Run configuration.
//!
//! An optional `config.yml` next to the catalog tweaks a run without changing
//! the command line:
//!
//! ```yaml
//! # All options are optional - defaults shown below
//! output: ""                   # Destination path; overrides --out when non-empty
//! review_links_enabled: false  # Render "*[review](url)*" after item links
//! ```
//!
//! ## Best-Effort Loading
//!
//! The file is an overlay, not a requirement. A missing, unreadable, or
//! malformed file is treated exactly like no file at all: [`load_run_config`]
//! returns `None` and the run proceeds on defaults. Use
//! [`try_load_run_config`] when the failure itself matters (e.g. in tests).
//!
//! Unknown keys are ignored.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the sidecar file, relative to the working directory.
pub const CONFIG_FILE: &str = "config.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings read from `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Destination path for the generated document. Blank means "use --out".
    pub output: String,
    /// Render per-item review links.
    pub review_links_enabled: bool,
}

impl RunConfig {
    /// The configured destination, if it is set to something non-blank.
    pub fn output_override(&self) -> Option<&str> {
        Some(self.output.trim()).filter(|s| !s.is_empty())
    }
}

/// Read and parse a config file. Missing file → `Ok(None)`.
pub fn try_load_run_config(path: &Path) -> Result<Option<RunConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Some(RunConfig::default()));
    }
    let config: RunConfig = serde_yaml::from_str(&content)?;
    Ok(Some(config))
}

/// Load a config file, treating every failure as "not present".
pub fn load_run_config(path: &Path) -> Option<RunConfig> {
    try_load_run_config(path).ok().flatten()
}

/// Effective output path: the config's `output` wins over the flag value.
pub fn resolve_output_path(flag_out: &Path, config: Option<&RunConfig>) -> PathBuf {
    config
        .and_then(RunConfig::output_override)
        .map(PathBuf::from)
        .unwrap_or_else(|| flag_out.to_path_buf())
}

/// Returns a fully-commented stock `config.yml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_yaml() -> &'static str {
    r##"# awesome-compile run configuration
# =================================
# Place this file in the directory you run awesome-compile from.
# All settings are optional. Values shown below are the defaults.
# If this file is missing or cannot be parsed it is silently ignored.

# Destination path for the generated document.
# When non-empty this overrides the --out flag.
output: ""

# Render a "*[review](url)*" link after each item that has a `review` URL.
review_links_enabled: false
"##
}
