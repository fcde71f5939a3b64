//! Property count by city, top-N.

use immo_core::PropertyRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of properties in one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBucket {
    /// City, `""` when absent.
    pub label: String,

    /// Property count.
    pub value: usize,
}

/// Cities sorted by descending count, ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoBreakdown {
    buckets: Vec<GeoBucket>,
}

impl GeoBreakdown {
    /// Buckets, largest first.
    #[must_use]
    pub fn buckets(&self) -> &[GeoBucket] {
        &self.buckets
    }

    /// Number of cities kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when no city was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bar width of a bucket relative to the first one, capped at 100.
    #[must_use]
    pub fn bar_width_pct(&self, bucket: &GeoBucket) -> f64 {
        let reference = match self.buckets.first() {
            Some(first) if first.value > 0 => first.value as f64,
            _ => 1.0,
        };
        (bucket.value as f64 / reference * 100.0).min(100.0)
    }
}

impl<'a> IntoIterator for &'a GeoBreakdown {
    type Item = &'a GeoBucket;
    type IntoIter = std::slice::Iter<'a, GeoBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Counts properties per city and keeps the `top_n` largest.
///
/// The sort is stable, so cities with equal counts stay in the order they
/// first appear in `properties`.
#[must_use]
pub fn compute_geo_breakdown(properties: &[PropertyRecord], top_n: usize) -> GeoBreakdown {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<GeoBucket> = Vec::new();

    for property in properties {
        let city = property.city();
        if let Some(&i) = index.get(city) {
            buckets[i].value += 1;
        } else {
            index.insert(city, buckets.len());
            buckets.push(GeoBucket {
                label: city.to_string(),
                value: 1,
            });
        }
    }

    buckets.sort_by(|a, b| b.value.cmp(&a.value));
    buckets.truncate(top_n);

    GeoBreakdown { buckets }
}
