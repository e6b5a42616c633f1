//! Portfolio-level statistics over an arbitrary company subset.
//!
//! A single O(n) pass with no ordering requirement. The empty subset is
//! not an error: it degrades to all-zero statistics with `0%` labels.

use chroma_core::types::{Company, TierBreakdown, TierPercentages};

/// Aggregate statistics for a company subset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PortfolioStats {
    /// Number of companies in the subset.
    pub total_companies: usize,
    /// Average score, rounded to nearest; 0 for an empty subset.
    pub avg_risk_score: u8,
    /// Per-tier counts; always sums to `total_companies`.
    pub tier_breakdown: TierBreakdown,
    /// Per-tier percentages, rounded independently (may not sum to 100).
    pub percentage_by_tier: TierPercentages,
    /// Sum of known exposures; missing exposure counts as zero.
    pub total_exposure: u64,
}

impl PortfolioStats {
    /// Combined `High` and `Severe` count, the dashboard headline stat.
    pub fn high_severe_count(&self) -> u32 {
        self.tier_breakdown.high_severe()
    }
}

/// Computes subset statistics in one pass.
///
/// Averages and percentages round to the nearest integer (`f64::round`;
/// all reachable values are non-negative, so this coincides with
/// half-up rounding). Percentages are rounded per tier and never
/// renormalised.
///
/// # Examples
///
/// ```
/// use chroma_risk::portfolio_stats;
///
/// let empty = portfolio_stats(&[]);
/// assert_eq!(empty.total_companies, 0);
/// assert_eq!(empty.avg_risk_score, 0);
/// assert_eq!(empty.percentage_by_tier.low.to_string(), "0%");
/// assert_eq!(empty.total_exposure, 0);
/// ```
pub fn portfolio_stats(companies: &[Company]) -> PortfolioStats {
    if companies.is_empty() {
        return PortfolioStats::default();
    }

    let mut tier_breakdown = TierBreakdown::default();
    let mut score_sum: u32 = 0;
    let mut total_exposure: u64 = 0;

    for company in companies {
        tier_breakdown.increment(company.risk.tier);
        score_sum += u32::from(company.risk.score);
        total_exposure += company.exposure.unwrap_or(0);
    }

    let total_companies = companies.len();
    let avg_risk_score = (f64::from(score_sum) / total_companies as f64).round() as u8;

    PortfolioStats {
        total_companies,
        avg_risk_score,
        tier_breakdown,
        percentage_by_tier: TierPercentages::from_breakdown(&tier_breakdown, total_companies as u32),
        total_exposure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::types::{LogoColor, RiskAssessment, RiskTier};

    fn company(id: &str, score: u8, exposure: Option<u64>) -> Company {
        let base = Company::new(
            id,
            format!("Test {}", id),
            LogoColor::new("Navy", "#0B1F3B"),
            RiskAssessment::from_score(score),
        );
        match exposure {
            Some(amount) => base.with_exposure(amount),
            None => base,
        }
    }

    #[test]
    fn test_empty_subset_is_all_zero() {
        let stats = portfolio_stats(&[]);
        assert_eq!(stats, PortfolioStats::default());
        for tier in RiskTier::ALL {
            assert_eq!(stats.percentage_by_tier.get(tier).to_string(), "0%");
        }
    }

    #[test]
    fn test_one_company_per_tier() {
        let companies = vec![
            company("company-1", 20, Some(100)),
            company("company-2", 40, Some(200)),
            company("company-3", 60, None),
            company("company-4", 80, Some(300)),
        ];
        let stats = portfolio_stats(&companies);

        assert_eq!(stats.total_companies, 4);
        assert_eq!(stats.avg_risk_score, 50); // (20 + 40 + 60 + 80) / 4
        assert_eq!(stats.tier_breakdown.total(), 4);
        assert_eq!(stats.tier_breakdown.severe, 1);
        assert_eq!(stats.percentage_by_tier.low.value(), 25);
        assert_eq!(stats.total_exposure, 600);
        assert_eq!(stats.high_severe_count(), 2);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        let companies = vec![
            company("company-1", 33, None),
            company("company-2", 34, None),
        ]; // 67 / 2 = 33.5 rounds up
        assert_eq!(portfolio_stats(&companies).avg_risk_score, 34);
    }

    #[test]
    fn test_missing_exposure_counts_as_zero() {
        let companies = vec![
            company("company-1", 50, None),
            company("company-2", 50, Some(1_000)),
        ];
        assert_eq!(portfolio_stats(&companies).total_exposure, 1_000);
    }

    #[test]
    fn test_order_independence() {
        let mut companies = vec![
            company("company-1", 10, Some(5)),
            company("company-2", 55, Some(7)),
            company("company-3", 90, Some(11)),
        ];
        let forward = portfolio_stats(&companies);
        companies.reverse();
        assert_eq!(portfolio_stats(&companies), forward);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_stats_wire_shape() {
            let stats = portfolio_stats(&[company("company-1", 20, Some(100))]);
            let json = serde_json::to_value(&stats).unwrap();
            assert_eq!(json["totalCompanies"], 1);
            assert_eq!(json["avgRiskScore"], 20);
            assert_eq!(json["tierBreakdown"]["Low"], 1);
            assert_eq!(json["percentageByTier"]["Low"], "100%");
            assert_eq!(json["totalExposure"], 100);
        }
    }
}
