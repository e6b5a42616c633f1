//! What-if recolor simulation.
//!
//! Two variants share the same premise, that a recoloured company takes
//! on the candidate colour's aggregate average score:
//!
//! - [`what_if`] compares one company before and after a hypothetical
//!   recolor.
//! - [`scenario_stats`] recolours an entire filtered subset at once,
//!   producing a synthetic [`PortfolioStats`] under the coarse
//!   assumption that every company lands in the candidate colour's
//!   aggregate tier.
//!
//! Neither variant mutates anything; stored data is untouched.

use chroma_core::types::{Company, Confidence, LogoColor, TierBreakdown, TierPercentages};

use crate::error::SimulationError;
use crate::stats::PortfolioStats;
use crate::summary::ColorSummaries;

/// Before/after comparison for one hypothetical recolor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WhatIfResult {
    /// The company's current colour.
    pub current_color: LogoColor,
    /// The candidate colour.
    pub proposed_color: LogoColor,
    /// The company's current score.
    pub current_risk: u8,
    /// The candidate colour's aggregate average score.
    pub proposed_risk: u8,
    /// `proposed_risk - current_risk`, signed.
    pub delta: i16,
    /// The candidate colour's aggregate confidence.
    pub confidence: Confidence,
    /// Human-readable direction and magnitude.
    pub description: String,
}

/// Simulates recolouring one company.
///
/// The proposed score is the candidate colour's aggregate average from
/// `summaries`, not a fresh per-company draw, so simulating the same
/// colour twice gives the same answer regardless of which company asks.
/// The description uses the `increase` wording only for a strictly
/// positive delta; a delta of zero reads as a decrease of 0 points.
///
/// # Errors
///
/// [`SimulationError::UnknownColor`] when `color_name` is not a palette
/// colour.
///
/// # Examples
///
/// ```
/// use chroma_core::types::{Company, LogoColor, RiskAssessment};
/// use chroma_risk::{summarize, what_if};
///
/// let companies = vec![Company::new(
///     "company-1",
///     "Apex Capital 001",
///     LogoColor::new("Crimson", "#DC143C"),
///     RiskAssessment::from_score(65),
/// )];
/// let summaries = summarize(&companies);
///
/// let result = what_if(&companies[0], &summaries, "Crimson").unwrap();
/// assert_eq!(result.proposed_risk, 65);
/// assert_eq!(result.delta, 0);
/// assert!(result.description.contains("decrease"));
///
/// assert!(what_if(&companies[0], &summaries, "NotAColour").is_err());
/// ```
pub fn what_if(
    company: &Company,
    summaries: &ColorSummaries,
    color_name: &str,
) -> Result<WhatIfResult, SimulationError> {
    let summary = summaries
        .get(color_name)
        .ok_or_else(|| SimulationError::UnknownColor(color_name.to_string()))?;

    let current_risk = company.risk.score;
    let proposed_risk = summary.avg_risk_score;
    let delta = i16::from(proposed_risk) - i16::from(current_risk);

    let description = if delta > 0 {
        format!(
            "Changing to {} would increase risk by {} points",
            color_name,
            delta.abs()
        )
    } else {
        format!(
            "Changing to {} would decrease risk by {} points",
            color_name,
            delta.abs()
        )
    };

    Ok(WhatIfResult {
        current_color: company.logo_color.clone(),
        proposed_color: LogoColor::new(summary.color_name.clone(), summary.hex.clone()),
        current_risk,
        proposed_risk,
        delta,
        confidence: summary.confidence,
        description,
    })
}

/// Recolours a whole filtered subset at once.
///
/// The approximation is deliberately all-or-nothing: the subset's entire
/// count moves into the candidate colour's aggregate tier bucket, every
/// other bucket is zeroed, and the average becomes the candidate's
/// aggregate average. Exposure carries over unchanged from the real
/// (non-simulated) subset stats. An empty subset degrades to all-zero
/// stats, as in [`crate::portfolio_stats`].
///
/// # Errors
///
/// [`SimulationError::UnknownColor`] when `color_name` is not a palette
/// colour.
pub fn scenario_stats(
    subset_stats: &PortfolioStats,
    summaries: &ColorSummaries,
    color_name: &str,
) -> Result<PortfolioStats, SimulationError> {
    let summary = summaries
        .get(color_name)
        .ok_or_else(|| SimulationError::UnknownColor(color_name.to_string()))?;

    let total_companies = subset_stats.total_companies;
    if total_companies == 0 {
        return Ok(PortfolioStats::default());
    }

    let tier_breakdown = TierBreakdown::all_in(summary.tier, total_companies as u32);

    Ok(PortfolioStats {
        total_companies,
        avg_risk_score: summary.avg_risk_score,
        percentage_by_tier: TierPercentages::from_breakdown(
            &tier_breakdown,
            total_companies as u32,
        ),
        tier_breakdown,
        total_exposure: subset_stats.total_exposure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::portfolio_stats;
    use crate::summary::summarize;
    use chroma_core::types::{RiskAssessment, RiskTier};

    fn company(id: &str, color: (&str, &str), score: u8) -> Company {
        Company::new(
            id,
            format!("Test {}", id),
            LogoColor::new(color.0, color.1),
            RiskAssessment::from_score(score),
        )
        .with_exposure(250_000)
    }

    // Crimson averages 65, Navy averages 30.
    fn fixture() -> Vec<Company> {
        vec![
            company("company-1", ("Navy", "#0B1F3B"), 20),
            company("company-2", ("Navy", "#0B1F3B"), 40),
            company("company-3", ("Crimson", "#DC143C"), 60),
            company("company-4", ("Crimson", "#DC143C"), 70),
        ]
    }

    #[test]
    fn test_proposed_risk_is_aggregate_average() {
        let companies = fixture();
        let summaries = summarize(&companies);
        let result = what_if(&companies[0], &summaries, "Crimson").unwrap();

        assert_eq!(result.current_risk, 20);
        assert_eq!(result.proposed_risk, 65);
        assert_eq!(result.delta, 45);
        assert_eq!(result.current_color.name, "Navy");
        assert_eq!(result.proposed_color.name, "Crimson");
        assert_eq!(result.proposed_color.hex, "#DC143C");
        assert_eq!(
            result.description,
            "Changing to Crimson would increase risk by 45 points"
        );
    }

    #[test]
    fn test_negative_delta_reads_as_decrease() {
        let companies = fixture();
        let summaries = summarize(&companies);
        let result = what_if(&companies[3], &summaries, "Navy").unwrap();

        assert_eq!(result.delta, -40);
        assert_eq!(
            result.description,
            "Changing to Navy would decrease risk by 40 points"
        );
    }

    #[test]
    fn test_zero_delta_takes_decrease_branch() {
        let companies = vec![company("company-1", ("Navy", "#0B1F3B"), 30)];
        let summaries = summarize(&companies);
        let result = what_if(&companies[0], &summaries, "Navy").unwrap();

        assert_eq!(result.delta, 0);
        assert_eq!(
            result.description,
            "Changing to Navy would decrease risk by 0 points"
        );
    }

    #[test]
    fn test_confidence_comes_from_candidate_aggregate() {
        let companies = fixture();
        let summaries = summarize(&companies);
        let result = what_if(&companies[0], &summaries, "Crimson").unwrap();
        assert_eq!(
            result.confidence,
            summaries.get("Crimson").unwrap().confidence
        );
    }

    #[test]
    fn test_unknown_color_is_a_hard_error() {
        let companies = fixture();
        let summaries = summarize(&companies);
        let err = what_if(&companies[0], &summaries, "Vermilion").unwrap_err();
        assert_eq!(err, SimulationError::UnknownColor("Vermilion".to_string()));
    }

    #[test]
    fn test_same_candidate_same_answer_for_any_company() {
        let companies = fixture();
        let summaries = summarize(&companies);
        let a = what_if(&companies[0], &summaries, "Crimson").unwrap();
        let b = what_if(&companies[1], &summaries, "Crimson").unwrap();
        assert_eq!(a.proposed_risk, b.proposed_risk);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_scenario_moves_everything_into_candidate_tier() {
        let companies = fixture();
        let summaries = summarize(&companies);
        let real = portfolio_stats(&companies);
        let simulated = scenario_stats(&real, &summaries, "Crimson").unwrap();

        // Crimson's aggregate average of 65 sits in the High tier.
        assert_eq!(simulated.total_companies, 4);
        assert_eq!(simulated.avg_risk_score, 65);
        assert_eq!(simulated.tier_breakdown, TierBreakdown::all_in(RiskTier::High, 4));
        assert_eq!(simulated.percentage_by_tier.high.value(), 100);
        assert_eq!(simulated.percentage_by_tier.low.value(), 0);
        // Exposure is carried over from the real stats, not re-derived.
        assert_eq!(simulated.total_exposure, real.total_exposure);
    }

    #[test]
    fn test_scenario_empty_subset_degrades_to_zero() {
        let summaries = summarize(&fixture());
        let empty = portfolio_stats(&[]);
        let simulated = scenario_stats(&empty, &summaries, "Navy").unwrap();
        assert_eq!(simulated, PortfolioStats::default());
    }

    #[test]
    fn test_scenario_unknown_color_is_a_hard_error() {
        let summaries = summarize(&fixture());
        let stats = portfolio_stats(&fixture());
        assert!(scenario_stats(&stats, &summaries, "Vermilion").is_err());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_what_if_wire_shape() {
            let companies = fixture();
            let summaries = summarize(&companies);
            let result = what_if(&companies[0], &summaries, "Crimson").unwrap();
            let json = serde_json::to_value(&result).unwrap();

            assert_eq!(json["currentColor"]["name"], "Navy");
            assert_eq!(json["proposedColor"]["hex"], "#DC143C");
            assert_eq!(json["currentRisk"], 20);
            assert_eq!(json["proposedRisk"], 65);
            assert_eq!(json["delta"], 45);
        }
    }
}
