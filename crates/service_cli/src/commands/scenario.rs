//! Scenario command implementation
//!
//! Bulk recolor scenario: recolours an entire filtered subset to one
//! candidate colour and shows the real statistics next to the simulated
//! ones.

use tracing::info;

use chroma_risk::{portfolio_stats, RiskEngine};

use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::Result;

/// Run the scenario command
pub fn run(
    engine: &RiskEngine,
    config: &CliConfig,
    color: &str,
    filter_colors: &[String],
    search: &str,
    format: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::resolve(format, &config.output.format)?;

    let subset = engine.filter(filter_colors, search);
    let current = portfolio_stats(&subset);
    let simulated = engine.scenario(&current, color)?;

    info!(
        "scenario: recolouring {} companies to {}",
        current.total_companies, color
    );

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "current": current,
                "simulated": simulated,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Table => {
            println!("Current portfolio");
            println!("-----------------");
            super::stats::print_stats(&current);
            println!();
            println!("All companies recoloured to {}", color);
            println!("-----------------");
            super::stats::print_stats(&simulated);
        }
    }

    Ok(())
}
