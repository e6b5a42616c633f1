//! The fixed synthetic portfolio.
//!
//! `generate()` builds the same 120 companies on every call: identity,
//! industry, and region cycle through fixed lists; the risk score and
//! exposure come from the seeded sequence in [`crate::rng`]. Nothing
//! here consults the environment, so the output is reproducible by
//! construction.

use chroma_core::palette;
use chroma_core::types::{Company, RiskAssessment};
use tracing::debug;

use crate::rng::SeededRandom;

/// Number of companies in the generated portfolio.
pub const COMPANY_COUNT: usize = 120;

/// Fixed seed for the pseudo-random sequence.
const SEED: u64 = 12345;

const INDUSTRIES: [&str; 10] = [
    "Financial Services",
    "Technology",
    "Healthcare",
    "Energy",
    "Manufacturing",
    "Retail",
    "Real Estate",
    "Telecommunications",
    "Utilities",
    "Consumer Goods",
];

const REGIONS: [&str; 5] = [
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East & Africa",
];

const NAME_PREFIXES: [&str; 20] = [
    "Apex Capital",
    "Meridian Corp",
    "Zenith Industries",
    "Pinnacle Financial",
    "Nexus Solutions",
    "Prism Ventures",
    "Ascent Group",
    "Horizon Trading",
    "Vertex Analytics",
    "Compass Digital",
    "Summit Energy",
    "Beacon Technologies",
    "Catalyst Systems",
    "Dynasty Holdings",
    "Eclipse Partners",
    "Frontier Capital",
    "Galaxy Finance",
    "Haven Insurance",
    "Infinity Networks",
    "Juncture Advisors",
];

/// Generates the fixed portfolio in stable (generation) order.
///
/// Each company draws twice from the shared sequence, risk jitter first
/// and exposure second; the draw order is part of the reproducibility
/// contract. The raw score is clamped to `[0, 100]` and rounded once,
/// and the stored integer is the single source for the derived tier and
/// confidence labels.
pub fn generate() -> Vec<Company> {
    let mut rng = SeededRandom::new(SEED);
    let mut companies = Vec::with_capacity(COMPANY_COUNT);

    for i in 0..COMPANY_COUNT {
        let color = &palette::PALETTE[i % palette::PALETTE.len()];
        let prefix = NAME_PREFIXES[(i / 12) % NAME_PREFIXES.len()];

        let raw_score = color.base_score + (rng.next() - 0.5) * color.variance * 2.0;
        let score = raw_score.clamp(0.0, 100.0).round() as u8;
        let exposure = (rng.next() * 1_000_000.0).round() as u64 + 100_000;

        companies.push(
            Company::new(
                format!("company-{}", i + 1),
                format!("{} {:03}", prefix, i + 1),
                color.logo_color(),
                RiskAssessment::from_score(score),
            )
            .with_industry(INDUSTRIES[i % INDUSTRIES.len()])
            .with_region(REGIONS[i % REGIONS.len()])
            .with_exposure(exposure),
        );
    }

    debug!("generated {} companies from seed {}", companies.len(), SEED);
    companies
}
