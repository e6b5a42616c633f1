//! Side-by-side comparison rows.
//!
//! The compare view shows a handful of companies next to each other,
//! optionally with a what-if colour selected per company. A row for a
//! company with a selection carries the simulated score and the
//! candidate colour's aggregate tier in place of the stored values.

use std::collections::HashMap;

use chroma_core::types::{Company, CompanyId, Confidence, LogoColor, RiskTier};

use crate::error::SimulationError;
use crate::summary::ColorSummaries;
use crate::whatif::what_if;

/// One company's entry in a side-by-side comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ComparisonRow {
    /// Company identifier.
    pub id: CompanyId,
    /// Company display name.
    pub name: String,
    /// The company's current logo colour.
    pub logo: LogoColor,
    /// Displayed score: stored, or simulated when a selection applies.
    pub risk_score: u8,
    /// Displayed tier: stored, or the candidate's aggregate tier.
    pub tier: RiskTier,
    /// Displayed confidence: stored, or the what-if confidence.
    pub confidence: Confidence,
    /// True when this row reflects a what-if selection.
    pub simulated: bool,
}

/// Builds comparison rows for `companies`, honouring per-company what-if
/// colour selections.
///
/// Companies without a selection show their stored assessment. A
/// selected colour routes through [`what_if`], so the row shows the
/// candidate colour's aggregate average score and tier with
/// `simulated = true`.
///
/// # Errors
///
/// [`SimulationError::UnknownColor`] when any selection names a colour
/// outside the palette.
pub fn comparison_rows(
    companies: &[Company],
    summaries: &ColorSummaries,
    selections: &HashMap<CompanyId, String>,
) -> Result<Vec<ComparisonRow>, SimulationError> {
    companies
        .iter()
        .map(|company| match selections.get(&company.id) {
            Some(color_name) => {
                let result = what_if(company, summaries, color_name)?;
                let summary = summaries
                    .get(color_name)
                    .ok_or_else(|| SimulationError::UnknownColor(color_name.clone()))?;
                Ok(ComparisonRow {
                    id: company.id.clone(),
                    name: company.name.clone(),
                    logo: company.logo_color.clone(),
                    risk_score: result.proposed_risk,
                    tier: summary.tier,
                    confidence: result.confidence,
                    simulated: true,
                })
            }
            None => Ok(ComparisonRow {
                id: company.id.clone(),
                name: company.name.clone(),
                logo: company.logo_color.clone(),
                risk_score: company.risk.score,
                tier: company.risk.tier,
                confidence: company.risk.confidence,
                simulated: false,
            }),
        })
        .collect()
}
