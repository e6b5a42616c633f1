//! CLI configuration file handling.
//!
//! An optional `chromarisk.toml` supplies presentation defaults; a
//! missing file is not an error and falls back to the built-ins. The
//! dataset itself is fixed and seed-locked, so there is nothing
//! data-related to configure.
//!
//! ```toml
//! [output]
//! format = "table"
//!
//! [list]
//! page_size = 10
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{CliError, Result};

/// Default page size for company listings.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Top-level CLI configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output defaults.
    pub output: OutputSection,
    /// Listing defaults.
    pub list: ListSection,
}

/// `[output]` section.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Default output format when no `--format` flag is given.
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
        }
    }
}

/// `[list]` section.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ListSection {
    /// Companies per page when no `--page-size` flag is given.
    pub page_size: usize,
}

impl Default for ListSection {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(CliConfig::default());
        }
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CliError::Config(format!("{}: {}", path, e)))
    }
}
