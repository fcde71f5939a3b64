//! Portfolio-level KPIs.

use immo_core::PropertyRecord;
use serde::{Deserialize, Serialize};

use super::income::net_annual_yield_pct;
use super::parallel::{maybe_parallel_map, sum_by};
use crate::config::AnalyticsConfig;

/// The four KPI cards of the dashboard plus the projected annual income banner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioKpis {
    /// Number of properties.
    pub total_properties: usize,

    /// Sum of current values.
    pub total_value: f64,

    /// Sum of monthly rents.
    pub monthly_income: f64,

    /// Arithmetic mean of per-property net yields (percent), 0 when empty.
    pub average_net_yield: f64,

    /// `monthly_income * 12`.
    pub projected_annual_income: f64,
}

impl PortfolioKpis {
    /// Calculates the KPIs for a list of properties.
    ///
    /// Never fails: absent amounts read as zero, zero purchase prices yield
    /// zero, and an empty list produces all-zero KPIs.
    #[must_use]
    pub fn calculate(properties: &[PropertyRecord], config: &AnalyticsConfig) -> Self {
        let total_properties = properties.len();
        let total_value = sum_by(properties, PropertyRecord::current_value);
        let monthly_income = sum_by(properties, PropertyRecord::rent);

        let net_yields = maybe_parallel_map(properties, config, net_annual_yield_pct);
        let average_net_yield = if net_yields.is_empty() {
            0.0
        } else {
            sum_by(&net_yields, |y| *y) / net_yields.len() as f64
        };

        Self {
            total_properties,
            total_value,
            monthly_income,
            average_net_yield,
            projected_annual_income: monthly_income * 12.0,
        }
    }
}

/// Convenience function to calculate portfolio KPIs.
///
/// # Example
///
/// ```
/// use immo_analytics::{compute_kpis, AnalyticsConfig};
///
/// let kpis = compute_kpis(&[], &AnalyticsConfig::default());
/// assert_eq!(kpis.total_properties, 0);
/// assert_eq!(kpis.average_net_yield, 0.0);
/// ```
#[must_use]
pub fn compute_kpis(properties: &[PropertyRecord], config: &AnalyticsConfig) -> PortfolioKpis {
    PortfolioKpis::calculate(properties, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p1() -> PropertyRecord {
        PropertyRecord::builder("P1")
            .rent(2600.0)
            .charges(220.0)
            .management_fee(0.06)
            .purchase_price(720_000.0)
            .current_value(820_000.0)
            .build()
    }

    fn p2() -> PropertyRecord {
        PropertyRecord::builder("P2")
            .rent(650.0)
            .charges(90.0)
            .management_fee(0.07)
            .purchase_price(145_000.0)
            .current_value(160_000.0)
            .build()
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let kpis = compute_kpis(&[], &AnalyticsConfig::default());
        assert_eq!(kpis, PortfolioKpis::default());
        assert!(kpis.total_value.is_sign_positive());
    }

    #[test]
    fn test_two_property_example() {
        let kpis = compute_kpis(&[p1(), p2()], &AnalyticsConfig::default());
        assert_eq!(kpis.total_properties, 2);
        assert_relative_eq!(kpis.total_value, 980_000.0);
        assert_relative_eq!(kpis.monthly_income, 3250.0);
        assert_relative_eq!(kpis.projected_annual_income, 39_000.0);
        // (3.70667 + 4.25793) / 2
        assert_relative_eq!(kpis.average_net_yield, 3.982_298_85, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_price_counts_as_zero_yield() {
        let free = PropertyRecord::builder("Free").rent(1000.0).build();
        let kpis = compute_kpis(&[p1(), free], &AnalyticsConfig::default());
        assert_relative_eq!(kpis.average_net_yield, 3.706_666_67 / 2.0, epsilon = 1e-6);
        assert!(kpis.average_net_yield.is_finite());
    }

    #[test]
    fn test_missing_amounts_read_as_zero() {
        let bare = PropertyRecord::default();
        let kpis = compute_kpis(&[bare], &AnalyticsConfig::default());
        assert_eq!(kpis.total_properties, 1);
        assert_eq!(kpis.total_value, 0.0);
        assert_eq!(kpis.monthly_income, 0.0);
        assert_eq!(kpis.average_net_yield, 0.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let kpis = compute_kpis(&[p1()], &AnalyticsConfig::default());
        let value = serde_json::to_value(kpis).unwrap();
        assert_eq!(value["totalProperties"], 1);
        assert_eq!(value["projectedAnnualIncome"], 31_200.0);
    }
}
