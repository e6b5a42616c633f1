//! Compare command implementation
//!
//! Side-by-side comparison of selected companies, optionally with a
//! what-if colour per company. Rows with a selection show the simulated
//! score and tier.

use std::collections::HashMap;

use tracing::info;

use chroma_core::types::{Company, CompanyId};
use chroma_risk::{ComparisonRow, RiskEngine};

use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::{CliError, Result};

const WIDTHS: [usize; 7] = [12, 26, 13, 5, 7, 10, 9];

/// Run the compare command
pub fn run(
    engine: &RiskEngine,
    config: &CliConfig,
    ids: &[String],
    simulations: &[String],
    format: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::resolve(format, &config.output.format)?;

    let mut selections = HashMap::new();
    for selection in simulations {
        let (id, color) = selection.split_once('=').ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "Simulation must look like company-id=Colour, got {}",
                selection
            ))
        })?;
        selections.insert(CompanyId::new(id), color.to_string());
    }

    let companies: Vec<Company> = ids
        .iter()
        .map(|id| {
            engine
                .company(id)
                .cloned()
                .ok_or_else(|| CliError::CompanyNotFound(id.clone()))
        })
        .collect::<Result<_>>()?;

    info!(
        "comparing {} companies ({} simulated)",
        companies.len(),
        selections.len()
    );

    let rows = engine.compare(&companies, &selections)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            print_table(&rows);
            println!(
                "Portfolio average risk: {}",
                engine.stats().avg_risk_score
            );
        }
    }

    Ok(())
}

fn print_table(rows: &[ComparisonRow]) {
    println!("{}", border('┌', '┬', '┐'));
    println!(
        "{}",
        row([
            "ID",
            "Name",
            "Colour",
            "Score",
            "Tier",
            "Confidence",
            "Simulated",
        ])
    );
    println!("{}", border('├', '┼', '┤'));
    if rows.is_empty() {
        println!("{}", row(["(no data)", "", "", "", "", "", ""]));
    }
    for entry in rows {
        let score = entry.risk_score.to_string();
        println!(
            "{}",
            row([
                entry.id.as_str(),
                &entry.name,
                &entry.logo.name,
                &score,
                entry.tier.name(),
                entry.confidence.name(),
                if entry.simulated { "yes" } else { "no" },
            ])
        );
    }
    println!("{}", border('└', '┴', '┘'));
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
