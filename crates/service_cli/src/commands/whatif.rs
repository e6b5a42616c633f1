//! What-if command implementation
//!
//! Simulates recolouring a single company and reports the before/after
//! comparison.

use tracing::info;

use chroma_risk::RiskEngine;

use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::{CliError, Result};

/// Run the what-if command
pub fn run(
    engine: &RiskEngine,
    config: &CliConfig,
    company_id: &str,
    color: &str,
    format: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::resolve(format, &config.output.format)?;

    let company = engine
        .company(company_id)
        .ok_or_else(|| CliError::CompanyNotFound(company_id.to_string()))?;

    info!("simulating {} -> {}", company_id, color);

    let result = engine.what_if(company, color)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            println!("Company         : {} ({})", company.name, company.id);
            println!("Current colour  : {}", result.current_color);
            println!("Proposed colour : {}", result.proposed_color);
            println!("Current risk    : {}", result.current_risk);
            println!("Proposed risk   : {}", result.proposed_risk);
            println!("Delta           : {:+}", result.delta);
            println!("Confidence      : {}", result.confidence);
            println!();
            println!("{}", result.description);
        }
    }

    Ok(())
}
