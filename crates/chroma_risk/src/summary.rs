//! Per-colour risk aggregation.
//!
//! Partitions a company list by logo-colour name and derives one
//! [`ColorRiskSummary`] per palette colour: rounded average score, the
//! tier and confidence of that average, the company count, and a
//! per-tier count breakdown. Summaries are recomputed from scratch on
//! every call; they are a pure function of the input list.

use chroma_core::palette;
use chroma_core::types::{Company, Confidence, RiskTier, TierBreakdown};

/// Aggregated risk view of one palette colour.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColorRiskSummary {
    /// Colour name (the grouping key).
    pub color_name: String,
    /// Colour hex value.
    pub hex: String,
    /// Average score over the colour's companies, rounded to nearest.
    /// Zero when the colour has no companies.
    pub avg_risk_score: u8,
    /// Tier of the average score.
    pub tier: RiskTier,
    /// Confidence of the average score.
    pub confidence: Confidence,
    /// Number of companies wearing this colour.
    pub company_count: u32,
    /// Per-tier counts; always sums to `company_count`.
    pub tier_breakdown: TierBreakdown,
}

/// Palette-ordered collection of colour summaries with name lookup.
///
/// One entry per palette colour, in palette (display) order, whether or
/// not any company wears the colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSummaries {
    entries: Vec<ColorRiskSummary>,
}

impl ColorSummaries {
    /// Looks up a summary by exact colour name.
    pub fn get(&self, color_name: &str) -> Option<&ColorRiskSummary> {
        self.entries.iter().find(|s| s.color_name == color_name)
    }

    /// Iterates summaries in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorRiskSummary> {
        self.entries.iter()
    }

    /// Number of summaries (always the palette size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no summaries. Never the case for values built
    /// by [`summarize`], which always emits the full palette.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColorSummaries {
    type Item = &'a ColorRiskSummary;
    type IntoIter = std::slice::Iter<'a, ColorRiskSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColorSummaries {
    /// Serialises as a colour-name-keyed map, the dashboard wire shape.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|s| (s.color_name.as_str(), s)))
    }
}

/// Summarises a company list into one entry per palette colour.
///
/// Grouping matches on the exact colour name. Averages round to the
/// nearest integer (`f64::round`, half away from zero; every reachable
/// value is non-negative so this matches conventional half-up rounding).
/// A colour with no companies averages to 0 rather than dividing by
/// zero, which derives tier `Low` and confidence `High` for that entry.
///
/// # Examples
///
/// ```
/// use chroma_core::types::{Company, LogoColor, RiskAssessment};
/// use chroma_risk::summarize;
///
/// let companies = vec![Company::new(
///     "company-1",
///     "Apex Capital 001",
///     LogoColor::new("Navy", "#0B1F3B"),
///     RiskAssessment::from_score(40),
/// )];
///
/// let summaries = summarize(&companies);
/// assert_eq!(summaries.len(), 10);
/// assert_eq!(summaries.get("Navy").unwrap().avg_risk_score, 40);
/// assert_eq!(summaries.get("Teal").unwrap().company_count, 0);
/// ```
pub fn summarize(companies: &[Company]) -> ColorSummaries {
    let entries = palette::PALETTE
        .iter()
        .map(|color| {
            let mut score_sum: u32 = 0;
            let mut count: u32 = 0;
            let mut tier_breakdown = TierBreakdown::default();

            for company in companies {
                if company.logo_color.name != color.name {
                    continue;
                }
                score_sum += u32::from(company.risk.score);
                count += 1;
                tier_breakdown.increment(company.risk.tier);
            }

            let avg_risk_score = if count == 0 {
                0
            } else {
                (f64::from(score_sum) / f64::from(count)).round() as u8
            };

            ColorRiskSummary {
                color_name: color.name.to_string(),
                hex: color.hex.to_string(),
                avg_risk_score,
                tier: RiskTier::from_score(avg_risk_score),
                confidence: Confidence::from_score(avg_risk_score),
                company_count: count,
                tier_breakdown,
            }
        })
        .collect();

    ColorSummaries { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::types::{LogoColor, RiskAssessment};

    fn company(id: &str, color: (&str, &str), score: u8) -> Company {
        Company::new(
            id,
            format!("Test {}", id),
            LogoColor::new(color.0, color.1),
            RiskAssessment::from_score(score),
        )
    }

    fn fixture() -> Vec<Company> {
        vec![
            company("company-1", ("Navy", "#0B1F3B"), 20),
            company("company-2", ("Navy", "#0B1F3B"), 30),
            company("company-3", ("Navy", "#0B1F3B"), 40),
            company("company-4", ("Crimson", "#DC143C"), 65),
            company("company-5", ("Crimson", "#DC143C"), 72),
        ]
    }

    #[test]
    fn test_one_entry_per_palette_color() {
        let summaries = summarize(&fixture());
        assert_eq!(summaries.len(), 10);
        let names: Vec<&str> = summaries.iter().map(|s| s.color_name.as_str()).collect();
        assert_eq!(names[0], "Navy");
        assert_eq!(names[9], "Sage");
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        let summaries = summarize(&fixture());
        let navy = summaries.get("Navy").unwrap();
        assert_eq!(navy.avg_risk_score, 30); // (20 + 30 + 40) / 3
        let crimson = summaries.get("Crimson").unwrap();
        assert_eq!(crimson.avg_risk_score, 69); // 137 / 2 = 68.5 rounds up
    }

    #[test]
    fn test_labels_derive_from_average() {
        let summaries = summarize(&fixture());
        let navy = summaries.get("Navy").unwrap();
        assert_eq!(navy.tier, RiskTier::Medium);
        assert_eq!(navy.confidence, Confidence::Medium);
    }

    #[test]
    fn test_breakdown_sums_to_count() {
        let summaries = summarize(&fixture());
        for summary in &summaries {
            assert_eq!(summary.tier_breakdown.total(), summary.company_count);
        }
        let navy = summaries.get("Navy").unwrap();
        assert_eq!(navy.tier_breakdown.low, 1);
        assert_eq!(navy.tier_breakdown.medium, 2);
    }

    #[test]
    fn test_empty_color_group_degrades_to_zero() {
        let summaries = summarize(&fixture());
        let teal = summaries.get("Teal").unwrap();
        assert_eq!(teal.company_count, 0);
        assert_eq!(teal.avg_risk_score, 0);
        assert_eq!(teal.tier, RiskTier::Low);
        assert_eq!(teal.confidence, Confidence::High);
        assert_eq!(teal.tier_breakdown.total(), 0);
    }

    #[test]
    fn test_empty_input_still_emits_full_palette() {
        let summaries = summarize(&[]);
        assert_eq!(summaries.len(), 10);
        for summary in &summaries {
            assert_eq!(summary.company_count, 0);
            assert_eq!(summary.avg_risk_score, 0);
        }
    }

    #[test]
    fn test_unknown_color_lookup_is_none() {
        let summaries = summarize(&fixture());
        assert!(summaries.get("NotAColour").is_none());
        assert!(summaries.get("navy").is_none());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serialises_as_name_keyed_map() {
            let summaries = summarize(&fixture());
            let json = serde_json::to_value(&summaries).unwrap();
            assert_eq!(json["Navy"]["avgRiskScore"], 30);
            assert_eq!(json["Navy"]["tierBreakdown"]["Medium"], 2);
            assert_eq!(json["Crimson"]["companyCount"], 2);
        }
    }
}
