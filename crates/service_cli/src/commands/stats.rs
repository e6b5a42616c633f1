//! Stats command implementation
//!
//! Portfolio statistics over the filtered portfolio, with the same
//! headline figures the dashboard shows.

use tracing::info;

use chroma_core::types::RiskTier;
use chroma_risk::{portfolio_stats, PortfolioStats, RiskEngine};

use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::Result;

/// Run the stats command
pub fn run(
    engine: &RiskEngine,
    config: &CliConfig,
    colors: &[String],
    search: &str,
    format: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::resolve(format, &config.output.format)?;

    let subset = engine.filter(colors, search);
    let stats = portfolio_stats(&subset);

    info!(
        "computed stats over {} of {} companies",
        stats.total_companies,
        engine.companies().len()
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Table => print_stats(&stats),
    }

    Ok(())
}

pub(crate) fn print_stats(stats: &PortfolioStats) {
    // The dashboard guards the High/Severe share against an empty
    // subset by dividing by at least one.
    let high_severe_pct = (f64::from(stats.high_severe_count())
        / stats.total_companies.max(1) as f64
        * 100.0)
        .round();

    println!("Total companies : {}", stats.total_companies);
    println!("Average risk    : {} out of 100", stats.avg_risk_score);
    println!(
        "High/Severe     : {} ({}% of portfolio)",
        stats.high_severe_count(),
        high_severe_pct
    );
    for tier in RiskTier::ALL {
        println!(
            "  {:<8}: {} ({})",
            tier.name(),
            stats.tier_breakdown.count(tier),
            stats.percentage_by_tier.get(tier)
        );
    }
    println!(
        "Total exposure  : £{:.1}M",
        stats.total_exposure as f64 / 1_000_000.0
    );
}
