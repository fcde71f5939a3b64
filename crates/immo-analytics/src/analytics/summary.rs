//! Complete dashboard snapshot.
//!
//! Provides all dashboard aggregates in a single call.

use immo_core::Dataset;
use serde::{Deserialize, Serialize};

use super::cards::{compute_property_cards, PropertyCard};
use super::kpis::{compute_kpis, PortfolioKpis};
use super::performance::{compute_performance_ranking, PerformanceEntry};
use super::series::{compute_monthly_series, MonthlySeries};
use crate::bucketing::{compute_geo_breakdown, compute_type_breakdown, GeoBreakdown, TypeBreakdown};
use crate::config::AnalyticsConfig;
use crate::filter::filter_properties;

/// Everything the dashboard renders for one dataset revision and query.
///
/// KPIs and the revenue series describe the whole portfolio. Breakdowns,
/// performance and cards follow the search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Dataset revision the snapshot was computed from.
    pub revision: u64,

    /// Search query applied to the per-property panels.
    pub query: String,

    /// Portfolio KPIs over all properties.
    pub kpis: PortfolioKpis,

    /// Revenue series over all properties.
    pub monthly_series: MonthlySeries,

    /// Value by type over the filtered properties.
    pub type_breakdown: TypeBreakdown,

    /// Count by city over the filtered properties.
    pub geo_breakdown: GeoBreakdown,

    /// Net yield per filtered property.
    pub performance: Vec<PerformanceEntry>,

    /// Cards of the filtered properties.
    pub cards: Vec<PropertyCard>,

    /// Number of properties matching the query.
    pub filtered_count: usize,
}

impl DashboardSnapshot {
    /// Calculates the snapshot for a dataset and search query.
    ///
    /// # Example
    ///
    /// ```
    /// use immo_analytics::{AnalyticsConfig, DashboardSnapshot};
    /// use immo_core::demo_dataset;
    ///
    /// let config = AnalyticsConfig::default();
    /// let snapshot = DashboardSnapshot::calculate(&demo_dataset(), "lyon", &config);
    /// assert_eq!(snapshot.kpis.total_properties, 4);
    /// assert_eq!(snapshot.filtered_count, 1);
    /// ```
    #[must_use]
    pub fn calculate(dataset: &Dataset, query: &str, config: &AnalyticsConfig) -> Self {
        let all = dataset.properties();
        let filtered = filter_properties(all, query);

        Self {
            revision: dataset.revision(),
            query: query.to_string(),
            kpis: compute_kpis(all, config),
            monthly_series: compute_monthly_series(all),
            type_breakdown: compute_type_breakdown(&filtered, config),
            geo_breakdown: compute_geo_breakdown(&filtered, config.geo_top_n),
            performance: compute_performance_ranking(&filtered, config),
            cards: compute_property_cards(&filtered, config),
            filtered_count: filtered.len(),
        }
    }
}

/// Convenience function to calculate a dashboard snapshot.
#[must_use]
pub fn calculate_dashboard(
    dataset: &Dataset,
    query: &str,
    config: &AnalyticsConfig,
) -> DashboardSnapshot {
    DashboardSnapshot::calculate(dataset, query, config)
}
