//! Companies command implementation
//!
//! Lists the portfolio with colour/search filtering, sorting, and
//! pagination. Filtering and sorting come from the engine; pagination
//! is a presentation concern handled here.

use tracing::info;

use chroma_core::types::Company;
use chroma_risk::{sort_companies, RiskEngine, SortKey};

use crate::config::CliConfig;
use crate::output::OutputFormat;
use crate::{CliError, Result};

const WIDTHS: [usize; 7] = [12, 26, 13, 5, 7, 10, 10];

/// Run the companies command
#[allow(clippy::too_many_arguments)]
pub fn run(
    engine: &RiskEngine,
    config: &CliConfig,
    colors: &[String],
    search: &str,
    sort: &str,
    page: usize,
    page_size: Option<usize>,
    format: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::resolve(format, &config.output.format)?;
    let sort_key = parse_sort_key(sort)?;
    let page_size = page_size.unwrap_or(config.list.page_size);

    if page == 0 {
        return Err(CliError::InvalidArgument(
            "page numbers start at 1".to_string(),
        ));
    }
    if page_size == 0 {
        return Err(CliError::InvalidArgument(
            "page size must be at least 1".to_string(),
        ));
    }

    let mut companies = engine.filter(colors, search);
    sort_companies(&mut companies, sort_key);

    let total = companies.len();
    let total_pages = total.div_ceil(page_size);
    let start = (page - 1) * page_size;
    let page_items: &[Company] = if start < total {
        &companies[start..(start + page_size).min(total)]
    } else {
        &[]
    };

    info!(
        "listing {} of {} companies (page {} of {})",
        page_items.len(),
        total,
        page,
        total_pages.max(1)
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(page_items)?);
        }
        OutputFormat::Table => {
            print_table(page_items);
            if total == 0 {
                println!("No companies match the current filters");
            } else if page_items.is_empty() {
                println!("Page {} is out of range ({} pages available)", page, total_pages);
            } else {
                println!(
                    "Showing {}-{} of {} (page {} of {})",
                    start + 1,
                    start + page_items.len(),
                    total,
                    page,
                    total_pages
                );
            }
        }
    }

    Ok(())
}

fn parse_sort_key(name: &str) -> Result<SortKey> {
    match name {
        "name" => Ok(SortKey::Name),
        "risk" => Ok(SortKey::Risk),
        "color" => Ok(SortKey::Color),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown sort key: {}. Supported: name, risk, color",
            other
        ))),
    }
}

fn print_table(companies: &[Company]) {
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
            "Exposure",
        ])
    );
    println!("{}", border('├', '┼', '┤'));

    if companies.is_empty() {
        println!("{}", row(["(no data)", "", "", "", "", "", ""]));
    }
    for company in companies {
        let score = company.risk.score.to_string();
        let exposure = company
            .exposure
            .map(|e| e.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}",
            row([
                company.id.as_str(),
                &company.name,
                &company.logo_color.name,
                &score,
                company.risk.tier.name(),
                company.risk.confidence.name(),
                &exposure,
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
