//! CLI error types.

use chroma_risk::SimulationError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag or argument value was not usable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested company id does not exist in the portfolio.
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    /// The configuration file existed but could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A simulation failed; see [`SimulationError`].
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
