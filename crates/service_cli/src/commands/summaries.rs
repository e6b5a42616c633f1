//! Summaries command implementation
//!
//! Prints the per-colour risk summaries in palette order.

use tracing::info;

use chroma_risk::RiskEngine;

use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::Result;

const WIDTHS: [usize; 7] = [13, 8, 5, 7, 10, 9, 23];

/// Run the summaries command
pub fn run(engine: &RiskEngine, config: &CliConfig, format: Option<&str>) -> Result<()> {
    let format = OutputFormat::resolve(format, &config.output.format)?;
    let summaries = engine.color_summaries();

    info!("summarising {} palette colours", summaries.len());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summaries)?);
        }
        OutputFormat::Table => {
            println!("{}", border('┌', '┬', '┐'));
            println!(
                "{}",
                row([
                    "Colour",
                    "Hex",
                    "Avg",
                    "Tier",
                    "Confidence",
                    "Companies",
                    "Low/Medium/High/Severe",
                ])
            );
            println!("{}", border('├', '┼', '┤'));
            for summary in summaries {
                let avg = summary.avg_risk_score.to_string();
                let count = summary.company_count.to_string();
                let breakdown = format!(
                    "{}/{}/{}/{}",
                    summary.tier_breakdown.low,
                    summary.tier_breakdown.medium,
                    summary.tier_breakdown.high,
                    summary.tier_breakdown.severe
                );
                println!(
                    "{}",
                    row([
                        &summary.color_name,
                        &summary.hex,
                        &avg,
                        summary.tier.name(),
                        summary.confidence.name(),
                        &count,
                        &breakdown,
                    ])
                );
            }
            println!("{}", border('└', '┴', '┘'));
        }
    }

    Ok(())
}

fn border(left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = WIDTHS.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn row(cells: [&str; 7]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(WIDTHS)
        .map(|(cell, width)| format!(" {:<width$} ", cell))
        .collect();
    format!("│{}│", padded.join("│"))
}
