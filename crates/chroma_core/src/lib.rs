//! # chroma_core: Domain Foundation for the Chromarisk Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! chroma_core is the bottom layer of the 4-layer architecture, providing:
//! - Company records and identifiers (`types::company`)
//! - Risk tier and confidence scales (`types::tier`)
//! - Tier count and percentage breakdowns (`types::breakdown`)
//! - The fixed 10-colour palette with its risk mapping (`palette`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other chroma_* crates, with a single
//! optional external dependency:
//! - serde: Serialisation support (optional, `serde` feature)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chroma_core::palette;
//! use chroma_core::types::{Confidence, RiskTier};
//!
//! // Tier and confidence are pure functions of an integer score
//! assert_eq!(RiskTier::from_score(32), RiskTier::Medium);
//! assert_eq!(Confidence::from_score(32), Confidence::Medium);
//!
//! // The palette is fixed and ordered
//! assert_eq!(palette::PALETTE.len(), 10);
//! assert_eq!(palette::find("Navy").unwrap().hex, "#0B1F3B");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod palette;
pub mod types;

pub use types::{
    Company, CompanyId, Confidence, LogoColor, Percentage, RiskAssessment, RiskTier,
    TierBreakdown, TierPercentages,
};
