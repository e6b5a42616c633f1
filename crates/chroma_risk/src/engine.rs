//! Engine facade over an injected immutable company list.
//!
//! [`RiskEngine`] owns the company list produced once at startup plus
//! the colour summaries derived from it, and exposes the engine's call
//! contracts as methods. There is no module-level singleton: callers
//! construct the engine explicitly and pass it where it is needed. The
//! companies never change after construction, so the precomputed
//! summaries stay valid for the engine's lifetime.

use std::collections::HashMap;

use chroma_core::types::{Company, CompanyId};

use crate::compare::{comparison_rows, ComparisonRow};
use crate::error::SimulationError;
use crate::filter::filter_by_color_and_search;
use crate::stats::{portfolio_stats, PortfolioStats};
use crate::summary::{summarize, ColorSummaries};
use crate::whatif::{scenario_stats, what_if, WhatIfResult};

/// The risk engine: immutable companies plus derived colour summaries.
///
/// # Examples
///
/// ```
/// use chroma_core::types::{Company, LogoColor, RiskAssessment};
/// use chroma_risk::RiskEngine;
///
/// let companies = vec![Company::new(
///     "company-1",
///     "Apex Capital 001",
///     LogoColor::new("Navy", "#0B1F3B"),
///     RiskAssessment::from_score(32),
/// )];
/// let engine = RiskEngine::from_companies(companies);
///
/// assert_eq!(engine.companies().len(), 1);
/// assert_eq!(engine.color_summaries().len(), 10);
/// assert!(engine.company("company-1").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct RiskEngine {
    companies: Vec<Company>,
    summaries: ColorSummaries,
}

impl RiskEngine {
    /// Builds an engine over an already-generated company list.
    ///
    /// Colour summaries are computed once here; the list is immutable
    /// for the engine's lifetime, so they never go stale.
    pub fn from_companies(companies: Vec<Company>) -> Self {
        let summaries = summarize(&companies);
        Self {
            companies,
            summaries,
        }
    }

    /// All companies in stable (generation) order.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// The per-colour risk summaries.
    pub fn color_summaries(&self) -> &ColorSummaries {
        &self.summaries
    }

    /// Looks up one company by id.
    pub fn company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id.as_str() == id)
    }

    /// Portfolio statistics over the whole company list.
    pub fn stats(&self) -> PortfolioStats {
        portfolio_stats(&self.companies)
    }

    /// Filters the company list; see
    /// [`filter_by_color_and_search`].
    pub fn filter(&self, selected_colors: &[String], search: &str) -> Vec<Company> {
        filter_by_color_and_search(&self.companies, selected_colors, search)
    }

    /// Simulates recolouring one company; see [`what_if`].
    pub fn what_if(
        &self,
        company: &Company,
        color_name: &str,
    ) -> Result<WhatIfResult, SimulationError> {
        what_if(company, &self.summaries, color_name)
    }

    /// Bulk recolor scenario over a subset's stats; see
    /// [`scenario_stats`].
    pub fn scenario(
        &self,
        subset_stats: &PortfolioStats,
        color_name: &str,
    ) -> Result<PortfolioStats, SimulationError> {
        scenario_stats(subset_stats, &self.summaries, color_name)
    }

    /// Comparison rows with optional per-company what-if selections; see
    /// [`comparison_rows`].
    pub fn compare(
        &self,
        companies: &[Company],
        selections: &HashMap<CompanyId, String>,
    ) -> Result<Vec<ComparisonRow>, SimulationError> {
        comparison_rows(companies, &self.summaries, selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::types::{LogoColor, RiskAssessment};

    fn engine() -> RiskEngine {
        RiskEngine::from_companies(vec![
            Company::new(
                "company-1",
                "Apex Capital 001",
                LogoColor::new("Navy", "#0B1F3B"),
                RiskAssessment::from_score(20),
            )
            .with_exposure(100_000),
            Company::new(
                "company-2",
                "Meridian Corp 002",
                LogoColor::new("Crimson", "#DC143C"),
                RiskAssessment::from_score(70),
            )
            .with_exposure(200_000),
        ])
    }

    #[test]
    fn test_company_lookup() {
        let engine = engine();
        assert_eq!(engine.company("company-2").unwrap().risk.score, 70);
        assert!(engine.company("company-99").is_none());
    }

    #[test]
    fn test_stats_cover_whole_list() {
        let stats = engine().stats();
        assert_eq!(stats.total_companies, 2);
        assert_eq!(stats.avg_risk_score, 45);
        assert_eq!(stats.total_exposure, 300_000);
    }

    #[test]
    fn test_what_if_uses_precomputed_summaries() {
        let engine = engine();
        let company = engine.company("company-1").unwrap();
        let result = engine.what_if(company, "Crimson").unwrap();
        assert_eq!(result.proposed_risk, 70);
        assert_eq!(result.delta, 50);
    }

    #[test]
    fn test_scenario_roundtrip() {
        let engine = engine();
        let real = engine.stats();
        let simulated = engine.scenario(&real, "Navy").unwrap();
        assert_eq!(simulated.total_companies, 2);
        assert_eq!(simulated.avg_risk_score, 20);
        assert_eq!(simulated.total_exposure, real.total_exposure);
    }

    #[test]
    fn test_filter_delegates() {
        let engine = engine();
        let filtered = engine.filter(&["Navy".to_string()], "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "company-1");
    }
}
