//! Per-property net yield ranking.

use immo_core::PropertyRecord;
use serde::{Deserialize, Serialize};

use super::income::{net_annual_yield_pct, round_to_tenth};
use super::parallel::maybe_parallel_map;
use crate::config::AnalyticsConfig;

/// Net yield of one property, rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    /// Property id.
    pub id: String,

    /// Property name, `""` when absent.
    pub name: String,

    /// Net annual yield in percent, one decimal.
    pub net_yield_percent: f64,
}

impl PerformanceEntry {
    /// Width of the yield bar, the yield clamped to `[0, 100]`.
    #[must_use]
    pub fn bar_width_pct(&self) -> f64 {
        self.net_yield_percent.clamp(0.0, 100.0)
    }
}

/// Computes the net yield of every property, in input order.
///
/// The yield is the same figure that feeds the KPI average, rounded to one
/// decimal. No sorting is applied.
#[must_use]
pub fn compute_performance_ranking(
    properties: &[PropertyRecord],
    config: &AnalyticsConfig,
) -> Vec<PerformanceEntry> {
    maybe_parallel_map(properties, config, |p| PerformanceEntry {
        id: p.id.clone(),
        name: p.name().to_string(),
        net_yield_percent: round_to_tenth(net_annual_yield_pct(p)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_order_and_rounding() {
        let props = vec![
            PropertyRecord::builder("Studio")
                .rent(650.0)
                .charges(90.0)
                .management_fee(0.07)
                .purchase_price(145_000.0)
                .build(),
            PropertyRecord::builder("Appartement")
                .rent(2600.0)
                .charges(220.0)
                .management_fee(0.06)
                .purchase_price(720_000.0)
                .build(),
        ];
        let ranking = compute_performance_ranking(&props, &AnalyticsConfig::default());
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].name, "Studio");
        assert_eq!(ranking[0].net_yield_percent, 4.3);
        assert_eq!(ranking[1].net_yield_percent, 3.7);
    }

    #[test]
    fn test_yield_just_below_a_tie_rounds_down() {
        let props = vec![PropertyRecord::builder("Parking")
            .rent(120.0)
            .charges(90.0)
            .purchase_price(240_000.0)
            .build()];
        let ranking = compute_performance_ranking(&props, &AnalyticsConfig::sequential());
        assert_eq!(ranking[0].net_yield_percent, 0.1);
    }

    #[test]
    fn test_zero_price_and_missing_name() {
        let ranking = compute_performance_ranking(
            &[PropertyRecord::default()],
            &AnalyticsConfig::sequential(),
        );
        assert_eq!(ranking[0].name, "");
        assert_eq!(ranking[0].net_yield_percent, 0.0);
    }

    #[test]
    fn test_bar_width_clamps() {
        let entry = |y| PerformanceEntry {
            id: "x".into(),
            name: "x".into(),
            net_yield_percent: y,
        };
        assert_eq!(entry(-4.2).bar_width_pct(), 0.0);
        assert_eq!(entry(6.6).bar_width_pct(), 6.6);
        assert_eq!(entry(250.0).bar_width_pct(), 100.0);
    }
}
