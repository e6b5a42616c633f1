//! Per-tier count and percentage records.
//!
//! Every aggregate in the engine reports how a company subset splits
//! across the four risk tiers, twice over: once as raw counts
//! ([`TierBreakdown`]) and once as independently rounded percentages
//! ([`TierPercentages`]). The counts always sum to the subset size.
//! The percentages are rounded per tier and are not renormalised, so
//! they need not sum to exactly 100.

use std::fmt;

use super::tier::RiskTier;

/// Company counts per risk tier.
///
/// # Examples
///
/// ```
/// use chroma_core::types::{RiskTier, TierBreakdown};
///
/// let mut breakdown = TierBreakdown::default();
/// breakdown.increment(RiskTier::Low);
/// breakdown.increment(RiskTier::Severe);
/// breakdown.increment(RiskTier::Severe);
///
/// assert_eq!(breakdown.count(RiskTier::Severe), 2);
/// assert_eq!(breakdown.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct TierBreakdown {
    /// Companies in the `Low` tier.
    pub low: u32,
    /// Companies in the `Medium` tier.
    pub medium: u32,
    /// Companies in the `High` tier.
    pub high: u32,
    /// Companies in the `Severe` tier.
    pub severe: u32,
}

impl TierBreakdown {
    /// Adds one company to the given tier's bucket.
    pub fn increment(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::Low => self.low += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::High => self.high += 1,
            RiskTier::Severe => self.severe += 1,
        }
    }

    /// Returns the count for one tier.
    pub fn count(&self, tier: RiskTier) -> u32 {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
            RiskTier::Severe => self.severe,
        }
    }

    /// Returns the sum over all tiers.
    pub fn total(&self) -> u32 {
        self.low + self.medium + self.high + self.severe
    }

    /// Returns the combined `High` and `Severe` count, the dashboard's
    /// headline "companies needing attention" figure.
    pub fn high_severe(&self) -> u32 {
        self.high + self.severe
    }

    /// Builds a breakdown with the entire count in a single tier's bucket.
    pub fn all_in(tier: RiskTier, count: u32) -> Self {
        let mut breakdown = TierBreakdown::default();
        match tier {
            RiskTier::Low => breakdown.low = count,
            RiskTier::Medium => breakdown.medium = count,
            RiskTier::High => breakdown.high = count,
            RiskTier::Severe => breakdown.severe = count,
        }
        breakdown
    }
}

/// A rounded integer percentage rendered with a `%` suffix.
///
/// Kept numeric in memory; the `%` suffix appears in `Display` output and
/// in serialised form, matching the dashboard wire format.
///
/// # Examples
///
/// ```
/// use chroma_core::types::Percentage;
///
/// assert_eq!(Percentage::new(0).to_string(), "0%");
/// assert_eq!(Percentage::new(42).to_string(), "42%");
/// assert_eq!(Percentage::new(42).value(), 42);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Percentage(u8);

impl Percentage {
    /// Creates a percentage from an already-rounded integer value.
    #[inline]
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the numeric value without the suffix.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Percentage of the subset falling in each risk tier.
///
/// Each entry is rounded independently, so the four values need not sum
/// to exactly 100. An empty subset reports `0%` across all tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct TierPercentages {
    /// Share of companies in the `Low` tier.
    pub low: Percentage,
    /// Share of companies in the `Medium` tier.
    pub medium: Percentage,
    /// Share of companies in the `High` tier.
    pub high: Percentage,
    /// Share of companies in the `Severe` tier.
    pub severe: Percentage,
}

impl TierPercentages {
    /// Derives the percentage record from a breakdown and its subset size.
    ///
    /// `total` of zero yields `0%` across all tiers rather than dividing
    /// by zero.
    pub fn from_breakdown(breakdown: &TierBreakdown, total: u32) -> Self {
        if total == 0 {
            return TierPercentages::default();
        }
        let pct = |count: u32| {
            Percentage::new((f64::from(count) / f64::from(total) * 100.0).round() as u8)
        };
        Self {
            low: pct(breakdown.low),
            medium: pct(breakdown.medium),
            high: pct(breakdown.high),
            severe: pct(breakdown.severe),
        }
    }

    /// Returns the percentage for one tier.
    pub fn get(&self, tier: RiskTier) -> Percentage {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
            RiskTier::Severe => self.severe,
        }
    }
}
