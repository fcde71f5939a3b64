//! Synthetic 12-month revenue series.
//!
//! The series is a seasonality model over the current monthly rent, not
//! historical data. Transactions do not feed it.

use std::f64::consts::PI;

use immo_core::PropertyRecord;
use serde::{Deserialize, Serialize};

use super::income::round_half_up;
use super::parallel::sum_by;

/// Number of points in the revenue series.
pub const MONTHS: usize = 12;

/// One month of the revenue chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    /// Rounded revenue for the month.
    pub value: f64,

    /// Bar height relative to the largest month, in `[0, 100]`.
    pub scaled_percent: f64,
}

/// Twelve monthly points, month 0 first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySeries(Vec<MonthlyPoint>);

impl MonthlySeries {
    /// The points in month order.
    #[must_use]
    pub fn points(&self) -> &[MonthlyPoint] {
        &self.0
    }

    /// Always [`MONTHS`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a computed series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest monthly value, 0 for an all-zero series.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.0.iter().fold(0.0, |acc, p| acc.max(p.value))
    }

    /// Sum of the twelve values.
    #[must_use]
    pub fn total(&self) -> f64 {
        sum_by(&self.0, |p| p.value)
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyPoint> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a MonthlySeries {
    type Item = &'a MonthlyPoint;
    type IntoIter = std::slice::Iter<'a, MonthlyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Seasonality multiplier for month `index`, within `[0.9, 1.1]`.
#[must_use]
pub fn seasonality_factor(index: usize) -> f64 {
    0.9 + ((index as f64 / MONTHS as f64 * PI * 2.0).sin() + 1.0) * 0.05
}

/// Computes the revenue series from the summed monthly rent.
///
/// Always returns exactly twelve points. An empty or rent-less portfolio
/// produces twelve zero values with a zero bar height.
#[must_use]
pub fn compute_monthly_series(properties: &[PropertyRecord]) -> MonthlySeries {
    let base = sum_by(properties, PropertyRecord::rent);

    let values: Vec<f64> = (0..MONTHS)
        .map(|i| round_half_up(base * seasonality_factor(i)))
        .collect();

    let denominator = values.iter().fold(1.0_f64, |acc, v| acc.max(*v));

    MonthlySeries(
        values
            .into_iter()
            .map(|value| MonthlyPoint {
                value,
                scaled_percent: value / denominator * 100.0,
            })
            .collect(),
    )
}
