//! Filtering and ordering of company lists.
//!
//! The filter composes two optional predicates with AND semantics and
//! preserves input order. Sorting is a separate, explicit step layered
//! on the filter output.

use chroma_core::types::Company;

/// Filters by colour-set membership and name substring.
///
/// An empty `selected_colors` slice applies no colour filtering; a blank
/// (after trim) `search` applies no text filtering. The text match is a
/// case-insensitive substring match on the company name. Input order is
/// preserved.
///
/// # Examples
///
/// ```
/// use chroma_core::types::{Company, LogoColor, RiskAssessment};
/// use chroma_risk::filter_by_color_and_search;
///
/// let companies = vec![Company::new(
///     "company-1",
///     "Apex Capital 001",
///     LogoColor::new("Navy", "#0B1F3B"),
///     RiskAssessment::from_score(32),
/// )];
///
/// // No filters: the input comes back unchanged.
/// assert_eq!(
///     filter_by_color_and_search(&companies, &[], "").len(),
///     companies.len()
/// );
///
/// // Both filters must pass.
/// let hits = filter_by_color_and_search(&companies, &["Navy".to_string()], "APEX");
/// assert_eq!(hits.len(), 1);
/// let misses = filter_by_color_and_search(&companies, &["Teal".to_string()], "APEX");
/// assert!(misses.is_empty());
/// ```
pub fn filter_by_color_and_search(
    companies: &[Company],
    selected_colors: &[String],
    search: &str,
) -> Vec<Company> {
    let query = search.trim().to_lowercase();

    companies
        .iter()
        .filter(|company| {
            selected_colors.is_empty()
                || selected_colors
                    .iter()
                    .any(|color| *color == company.logo_color.name)
        })
        .filter(|company| query.is_empty() || company.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Ordering applied to a filtered company list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Company name, ascending.
    #[default]
    Name,
    /// Risk score, descending.
    Risk,
    /// Logo colour name, ascending.
    Color,
}

impl SortKey {
    /// Returns the key's name as used by the CLI and config.
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Risk => "risk",
            SortKey::Color => "color",
        }
    }
}

/// Sorts companies in place by the given key.
///
/// The sort is stable, so equal elements keep their filtered order.
pub fn sort_companies(companies: &mut [Company], key: SortKey) {
    match key {
        SortKey::Name => companies.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Risk => companies.sort_by(|a, b| b.risk.score.cmp(&a.risk.score)),
        SortKey::Color => companies.sort_by(|a, b| a.logo_color.name.cmp(&b.logo_color.name)),
    }
}
