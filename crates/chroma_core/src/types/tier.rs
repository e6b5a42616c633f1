//! Qualitative risk scales.
//!
//! This module provides the two labels attached to every risk score:
//! - `RiskTier`: coarse risk bucket derived from the score interval
//! - `Confidence`: reliability label derived from the score's distance
//!   from the scale midpoint
//!
//! Both are total, pure functions of an integer score in `[0, 100]`.

use std::fmt;

/// Coarse risk bucket derived from a numeric score.
///
/// The partition is fixed: `[0, 30)` is `Low`, `[30, 50)` is `Medium`,
/// `[50, 70)` is `High`, and `[70, 100]` is `Severe`.
///
/// # Examples
///
/// ```
/// use chroma_core::types::RiskTier;
///
/// assert_eq!(RiskTier::from_score(0), RiskTier::Low);
/// assert_eq!(RiskTier::from_score(29), RiskTier::Low);
/// assert_eq!(RiskTier::from_score(30), RiskTier::Medium);
/// assert_eq!(RiskTier::from_score(50), RiskTier::High);
/// assert_eq!(RiskTier::from_score(70), RiskTier::Severe);
/// assert_eq!(RiskTier::from_score(100), RiskTier::Severe);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskTier {
    /// Score in `[0, 30)`.
    Low,

    /// Score in `[30, 50)`.
    Medium,

    /// Score in `[50, 70)`.
    High,

    /// Score in `[70, 100]`.
    Severe,
}

impl RiskTier {
    /// All tiers in ascending severity order.
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Low,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::Severe,
    ];

    /// Derives the tier for an integer score.
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            RiskTier::Low
        } else if score < 50 {
            RiskTier::Medium
        } else if score < 70 {
            RiskTier::High
        } else {
            RiskTier::Severe
        }
    }

    /// Returns the tier label.
    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
            RiskTier::Severe => "Severe",
        }
    }

    /// Returns the hex colour the dashboard renders this tier with.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_core::types::RiskTier;
    ///
    /// assert_eq!(RiskTier::Low.display_color(), "#10B981");
    /// assert_eq!(RiskTier::Severe.display_color(), "#7C2D12");
    /// ```
    pub fn display_color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#10B981",
            RiskTier::Medium => "#F59E0B",
            RiskTier::High => "#EF4444",
            RiskTier::Severe => "#7C2D12",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Qualitative reliability label attached to a score.
///
/// Derived from the score's distance from the scale midpoint of 50:
/// a distance above 30 is `High`, above 15 is `Medium`, anything closer
/// is `Low`. Scores far from the midpoint therefore report *higher*
/// confidence. That reads inverted relative to the usual statistical
/// intuition, but it is the product-defined behaviour and callers depend
/// on it, so it must not be "corrected" here.
///
/// # Examples
///
/// ```
/// use chroma_core::types::Confidence;
///
/// assert_eq!(Confidence::from_score(50), Confidence::Low);
/// assert_eq!(Confidence::from_score(34), Confidence::Medium);
/// assert_eq!(Confidence::from_score(81), Confidence::High);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Confidence {
    /// Distance from the midpoint is 15 or less.
    Low,

    /// Distance from the midpoint is in `(15, 30]`.
    Medium,

    /// Distance from the midpoint is above 30.
    High,
}

impl Confidence {
    /// Derives the confidence label for an integer score.
    pub fn from_score(score: u8) -> Self {
        let distance = (i16::from(score) - 50).abs();
        if distance > 30 {
            Confidence::High
        } else if distance > 15 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Returns the confidence label.
    pub fn name(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
