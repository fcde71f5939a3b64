//! Value breakdown by property type.
//!
//! Groups keep the order in which each type first appears, so colour
//! assignment is stable across renders of the same list.

use immo_core::PropertyRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::AnalyticsConfig;

/// Total current value of one property type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSlice {
    /// Property type, `""` for untyped properties.
    pub label: String,

    /// Sum of current values within the type.
    pub value: f64,

    /// Group ordinal modulo the palette size.
    pub color_index: usize,
}

/// One arc of the donut chart, as cumulative percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutSegment {
    /// Palette index of the slice.
    pub color_index: usize,
    /// Start of the arc, percent.
    pub start_pct: f64,
    /// End of the arc, percent.
    pub end_pct: f64,
}

/// Type slices in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeBreakdown {
    slices: Vec<TypeSlice>,
}

impl TypeBreakdown {
    /// Slices in first-seen order.
    #[must_use]
    pub fn slices(&self) -> &[TypeSlice] {
        &self.slices
    }

    /// Number of distinct types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// True when there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Returns the slice for a type label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&TypeSlice> {
        self.slices.iter().find(|s| s.label == label)
    }

    /// Sum of all slice values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.slices.iter().fold(0.0, |acc, s| acc + s.value)
    }

    /// Donut arcs. The denominator is floored at 1 when the total is zero.
    #[must_use]
    pub fn segments(&self) -> Vec<DonutSegment> {
        let total = match self.total() {
            t if t == 0.0 => 1.0,
            t => t,
        };

        let mut current = 0.0;
        self.slices
            .iter()
            .map(|slice| {
                let start_pct = current / total * 100.0;
                current += slice.value;
                DonutSegment {
                    color_index: slice.color_index,
                    start_pct,
                    end_pct: current / total * 100.0,
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a TypeBreakdown {
    type Item = &'a TypeSlice;
    type IntoIter = std::slice::Iter<'a, TypeSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

/// Groups properties by type and sums their current value.
///
/// # Example
///
/// ```
/// use immo_analytics::{compute_type_breakdown, AnalyticsConfig};
/// use immo_core::PropertyRecord;
///
/// let props = vec![
///     PropertyRecord::builder("a").kind("Maison").current_value(100.0).build(),
///     PropertyRecord::builder("b").kind("Studio").current_value(50.0).build(),
///     PropertyRecord::builder("c").kind("Maison").current_value(25.0).build(),
/// ];
/// let breakdown = compute_type_breakdown(&props, &AnalyticsConfig::default());
/// assert_eq!(breakdown.slices()[0].label, "Maison");
/// assert_eq!(breakdown.slices()[0].value, 125.0);
/// assert_eq!(breakdown.slices()[1].color_index, 1);
/// ```
#[must_use]
pub fn compute_type_breakdown(
    properties: &[PropertyRecord],
    config: &AnalyticsConfig,
) -> TypeBreakdown {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut slices: Vec<TypeSlice> = Vec::new();
    let palette_size = config.palette_size();

    for property in properties {
        let label = property.kind();
        match index.get(label) {
            Some(&i) => slices[i].value += property.current_value(),
            None => {
                let ordinal = slices.len();
                index.insert(label, ordinal);
                slices.push(TypeSlice {
                    label: label.to_string(),
                    value: property.current_value(),
                    color_index: ordinal % palette_size,
                });
            }
        }
    }

    TypeBreakdown { slices }
}
