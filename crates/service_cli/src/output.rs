//! Output format selection shared by all commands.

use crate::{CliError, Result};

/// Supported output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON matching the dashboard wire shapes.
    Json,
}

impl OutputFormat {
    /// Parses a format name from a flag or config value.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }

    /// Resolves the effective format: an explicit flag wins over the
    /// configured default.
    pub fn resolve(flag: Option<&str>, config_default: &str) -> Result<Self> {
        OutputFormat::parse(flag.unwrap_or(config_default))
    }
}
