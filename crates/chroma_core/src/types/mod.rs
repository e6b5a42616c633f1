//! Core domain types.
//!
//! This module provides:
//! - `tier`: The qualitative risk scales (`RiskTier`, `Confidence`)
//! - `company`: Company records and identifiers
//! - `breakdown`: Per-tier count and percentage records
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`RiskTier`], [`Confidence`] from `tier`
//! - [`Company`], [`CompanyId`], [`LogoColor`], [`RiskAssessment`] from `company`
//! - [`TierBreakdown`], [`TierPercentages`], [`Percentage`] from `breakdown`

pub mod breakdown;
pub mod company;
pub mod tier;

pub use breakdown::{Percentage, TierBreakdown, TierPercentages};
pub use company::{Company, CompanyId, LogoColor, RiskAssessment};
pub use tier::{Confidence, RiskTier};
