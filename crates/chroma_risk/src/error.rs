//! Simulation error types.
//!
//! The engine has exactly one hard failure mode: asking a simulation for
//! a colour outside the fixed palette. Empty-input cases degrade to
//! zeroed results locally and never surface here.

use thiserror::Error;

/// Errors raised by what-if simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Candidate colour is not in the palette summary mapping.
    ///
    /// This propagates to the caller; the simulator never falls back to
    /// a default colour.
    #[error("Color {0} not found")]
    UnknownColor(String),
}
