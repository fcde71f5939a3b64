//! Property card grid.

use immo_core::{PropertyRecord, PropertyStatus};
use serde::{Deserialize, Serialize};

use super::income::{net_annual_yield_pct, net_monthly_income, round_to_tenth};
use super::parallel::maybe_parallel_map;
use crate::config::AnalyticsConfig;

/// Badge colour family of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    /// Let.
    Occupied,
    /// Empty.
    Vacant,
    /// Any other status.
    Other,
}

impl From<&PropertyStatus> for StatusTone {
    fn from(status: &PropertyStatus) -> Self {
        match status {
            PropertyStatus::Occupied => Self::Occupied,
            PropertyStatus::Vacant => Self::Vacant,
            PropertyStatus::Other(_) => Self::Other,
        }
    }
}

/// Display-ready summary of one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCard {
    /// Property id.
    pub id: String,
    /// Property name.
    pub name: String,
    /// Property category.
    #[serde(rename = "type")]
    pub kind: String,
    /// City.
    pub city: String,
    /// Status label as stored.
    pub status: String,
    /// Badge tone derived from the status.
    pub tone: StatusTone,
    /// Monthly rent.
    pub rent: f64,
    /// Current market value.
    pub current_value: f64,
    /// Rent net of charges and management fee.
    pub net_monthly: f64,
    /// Net annual yield in percent, one decimal.
    pub net_yield_percent: f64,
}

impl PropertyCard {
    /// Builds the card for one property.
    #[must_use]
    pub fn from_record(property: &PropertyRecord) -> Self {
        Self {
            id: property.id.clone(),
            name: property.name().to_string(),
            kind: property.kind().to_string(),
            city: property.city().to_string(),
            status: property.status.label().to_string(),
            tone: StatusTone::from(&property.status),
            rent: property.rent(),
            current_value: property.current_value(),
            net_monthly: net_monthly_income(property),
            net_yield_percent: round_to_tenth(net_annual_yield_pct(property)),
        }
    }
}

/// Builds one card per property, in input order.
#[must_use]
pub fn compute_property_cards(
    properties: &[PropertyRecord],
    config: &AnalyticsConfig,
) -> Vec<PropertyCard> {
    maybe_parallel_map(properties, config, PropertyCard::from_record)
}
