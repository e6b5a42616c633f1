//! Company records and identifiers.
//!
//! A [`Company`] is created once by the data generator and is immutable
//! afterwards. The company list is shared read-only state for every
//! downstream consumer, so nothing here exposes mutation beyond initial
//! construction.

use std::fmt;

use super::tier::{Confidence, RiskTier};

/// Unique identifier for a company.
///
/// Using a newtype keeps company ids from being confused with other
/// strings such as colour names.
///
/// # Examples
///
/// ```
/// use chroma_core::types::CompanyId;
///
/// let id = CompanyId::new("company-1");
/// assert_eq!(id.as_str(), "company-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompanyId(String);

impl CompanyId {
    /// Creates a new company ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CompanyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CompanyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A logo colour as rendered by the dashboard: display name plus hex value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogoColor {
    /// Display name, e.g. `"Navy"`. Grouping matches on this exact string.
    pub name: String,
    /// Hex value, e.g. `"#0B1F3B"`.
    pub hex: String,
}

impl LogoColor {
    /// Creates a new logo colour.
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

impl fmt::Display for LogoColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.hex)
    }
}

/// A company's risk assessment: integer score plus the two derived labels.
///
/// The tier and confidence are always derived from the exact stored score,
/// so the three fields can never disagree when built through
/// [`RiskAssessment::from_score`].
///
/// # Examples
///
/// ```
/// use chroma_core::types::{Confidence, RiskAssessment, RiskTier};
///
/// let risk = RiskAssessment::from_score(32);
/// assert_eq!(risk.score, 32);
/// assert_eq!(risk.tier, RiskTier::Medium);
/// assert_eq!(risk.confidence, Confidence::Medium);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskAssessment {
    /// Integer score in `[0, 100]`.
    pub score: u8,
    /// Tier derived from the score.
    pub tier: RiskTier,
    /// Confidence derived from the score.
    pub confidence: Confidence,
}

impl RiskAssessment {
    /// Builds an assessment with tier and confidence derived from `score`.
    pub fn from_score(score: u8) -> Self {
        Self {
            score,
            tier: RiskTier::from_score(score),
            confidence: Confidence::from_score(score),
        }
    }
}

/// A company in the mock portfolio.
///
/// Produced by the data generator at process start; treated as read-only
/// for the rest of the process lifetime.
///
/// # Examples
///
/// ```
/// use chroma_core::types::{Company, LogoColor, RiskAssessment};
///
/// let company = Company::new(
///     "company-1",
///     "Apex Capital 001",
///     LogoColor::new("Navy", "#0B1F3B"),
///     RiskAssessment::from_score(32),
/// )
/// .with_industry("Financial Services")
/// .with_region("North America")
/// .with_exposure(113_885);
///
/// assert_eq!(company.id.as_str(), "company-1");
/// assert_eq!(company.exposure, Some(113_885));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Company {
    /// Unique identifier (stable across runs).
    pub id: CompanyId,
    /// Display name.
    pub name: String,
    /// Industry label, when known.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub industry: Option<String>,
    /// Region label, when known.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub region: Option<String>,
    /// Current logo colour.
    pub logo_color: LogoColor,
    /// Risk assessment.
    pub risk: RiskAssessment,
    /// Monetary exposure, when known. Missing exposure aggregates as zero.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub exposure: Option<u64>,
}

impl Company {
    /// Creates a company with the required fields; optional fields start
    /// empty and are set with the `with_*` builders.
    pub fn new(
        id: impl Into<CompanyId>,
        name: impl Into<String>,
        logo_color: LogoColor,
        risk: RiskAssessment,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            industry: None,
            region: None,
            logo_color,
            risk,
            exposure: None,
        }
    }

    /// Sets the industry label.
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Sets the region label.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the monetary exposure.
    pub fn with_exposure(mut self, exposure: u64) -> Self {
        self.exposure = Some(exposure);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Company {
        Company::new(
            "company-7",
            "Ascent Group 007",
            LogoColor::new("Crimson", "#DC143C"),
            RiskAssessment::from_score(65),
        )
        .with_industry("Real Estate")
        .with_region("Asia Pacific")
        .with_exposure(512_000)
    }

    #[test]
    fn test_company_id_creation() {
        let id = CompanyId::new("company-1");
        assert_eq!(id.as_str(), "company-1");
        assert_eq!(format!("{}", id), "company-1");
    }

    #[test]
    fn test_company_id_from_conversions() {
        let a: CompanyId = "company-2".into();
        let b: CompanyId = String::from("company-2").into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_company_id_hash() {
        let mut set = HashSet::new();
        set.insert(CompanyId::new("company-1"));
        set.insert(CompanyId::new("company-2"));
        set.insert(CompanyId::new("company-1")); // Duplicate
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_logo_color_display() {
        let color = LogoColor::new("Navy", "#0B1F3B");
        assert_eq!(format!("{}", color), "Navy (#0B1F3B)");
    }

    #[test]
    fn test_risk_assessment_labels_match_score() {
        let risk = RiskAssessment::from_score(65);
        assert_eq!(risk.tier, RiskTier::High);
        assert_eq!(risk.confidence, Confidence::Low);
    }

    #[test]
    fn test_company_builder() {
        let company = sample();
        assert_eq!(company.industry.as_deref(), Some("Real Estate"));
        assert_eq!(company.region.as_deref(), Some("Asia Pacific"));
        assert_eq!(company.exposure, Some(512_000));
    }

    #[test]
    fn test_company_optional_fields_default_empty() {
        let company = Company::new(
            "company-9",
            "Vertex Analytics 009",
            LogoColor::new("Indigo", "#4B0082"),
            RiskAssessment::from_score(41),
        );
        assert!(company.industry.is_none());
        assert!(company.region.is_none());
        assert!(company.exposure.is_none());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_company_serialises_with_dashboard_field_names() {
            let json = serde_json::to_value(sample()).unwrap();
            assert_eq!(json["id"], "company-7");
            assert_eq!(json["logoColor"]["name"], "Crimson");
            assert_eq!(json["risk"]["score"], 65);
            assert_eq!(json["risk"]["tier"], "High");
        }

        #[test]
        fn test_company_roundtrip() {
            let company = sample();
            let json = serde_json::to_string(&company).unwrap();
            let back: Company = serde_json::from_str(&json).unwrap();
            assert_eq!(company, back);
        }
    }
}
