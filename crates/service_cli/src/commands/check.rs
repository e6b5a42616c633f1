//! Check command implementation
//!
//! Verifies the invariants the rest of the CLI relies on: palette
//! integrity, generation determinism, and summary consistency.

use tracing::info;

use chroma_core::palette;
use chroma_risk::RiskEngine;

use crate::{CliError, Result};

/// Run the check command
pub fn run(engine: &RiskEngine) -> Result<()> {
    info!("Running system checks...");

    // Palette: ten uniquely named colours.
    let mut names: Vec<&str> = palette::PALETTE.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names.dedup();
    if names.len() != palette::PALETTE.len() {
        return Err(CliError::InvalidArgument(
            "palette contains duplicate colour names".to_string(),
        ));
    }
    println!("✓ palette: {} colours, names unique", palette::PALETTE.len());

    // Generator: repeated runs must be identical.
    if chroma_data::generate() != chroma_data::generate() {
        return Err(CliError::InvalidArgument(
            "generation is not deterministic".to_string(),
        ));
    }
    println!("✓ generator: repeated runs identical");

    // Summaries: every breakdown sums to its colour's company count.
    for summary in engine.color_summaries() {
        if summary.tier_breakdown.total() != summary.company_count {
            return Err(CliError::InvalidArgument(format!(
                "tier breakdown mismatch for colour {}",
                summary.color_name
            )));
        }
    }
    println!(
        "✓ summaries: tier breakdowns consistent across {} colours",
        engine.color_summaries().len()
    );

    println!("All checks passed");
    Ok(())
}
