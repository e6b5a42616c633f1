//! # chroma_risk: Colour Risk Engine
//!
//! Aggregation, statistics, and what-if simulation over the immutable
//! company list.
//!
//! This crate provides:
//! - Per-colour risk summaries with tier breakdowns
//! - Portfolio statistics over arbitrary company subsets
//! - Per-company what-if recolor simulation and the bulk scenario variant
//! - Colour/search filtering and sort utilities
//! - Side-by-side comparison rows
//! - The [`RiskEngine`] facade tying the pieces together
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              chroma_risk (L3)               │
//! ├─────────────────────────────────────────────┤
//! │  summary/  - ColorRiskSummary aggregation   │
//! │  stats/    - PortfolioStats over subsets    │
//! │  whatif/   - recolor simulation, scenarios  │
//! │  filter/   - colour/search filter + sort    │
//! │  compare/  - side-by-side comparison rows   │
//! │  engine/   - RiskEngine facade              │
//! └─────────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────────┐
//! │             chroma_core (L1)                │
//! │  Company, RiskTier, Confidence, palette     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure over its inputs. The only shared value is
//! the generated company list, injected at construction and never
//! mutated, so computations are independent and re-entrant.
//!
//! ## Example
//!
//! ```
//! use chroma_core::types::{Company, LogoColor, RiskAssessment};
//! use chroma_risk::RiskEngine;
//!
//! let companies = vec![
//!     Company::new(
//!         "company-1",
//!         "Apex Capital 001",
//!         LogoColor::new("Navy", "#0B1F3B"),
//!         RiskAssessment::from_score(20),
//!     ),
//!     Company::new(
//!         "company-2",
//!         "Meridian Corp 002",
//!         LogoColor::new("Crimson", "#DC143C"),
//!         RiskAssessment::from_score(70),
//!     ),
//! ];
//!
//! let engine = RiskEngine::from_companies(companies);
//! let company = engine.company("company-1").unwrap();
//! let result = engine.what_if(company, "Crimson").unwrap();
//!
//! assert_eq!(result.proposed_risk, 70);
//! assert_eq!(result.delta, 50);
//! assert!(result.description.contains("increase"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod compare;
pub mod engine;
pub mod error;
pub mod filter;
pub mod stats;
pub mod summary;
pub mod whatif;

// Re-export commonly used items
pub use compare::{comparison_rows, ComparisonRow};
pub use engine::RiskEngine;
pub use error::SimulationError;
pub use filter::{filter_by_color_and_search, sort_companies, SortKey};
pub use stats::{portfolio_stats, PortfolioStats};
pub use summary::{summarize, ColorRiskSummary, ColorSummaries};
pub use whatif::{scenario_stats, what_if, WhatIfResult};
