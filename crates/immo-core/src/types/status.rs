//! Occupancy status of a property.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy status of a property.
///
/// The persisted blob uses the French label `"Loué"` for occupied properties.
/// `"Occupied"`, `"Rented"` and `"Loue"` are accepted on input; any other label
/// is kept verbatim as [`PropertyStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyStatus {
    /// Let to a tenant.
    Occupied,
    /// No tenant; rent is expected to be zero.
    Vacant,
    /// Any other label (works, for sale, ...).
    Other(String),
}

impl PropertyStatus {
    /// Wire label for occupied properties.
    pub const OCCUPIED_LABEL: &'static str = "Loué";

    /// Wire label for vacant properties.
    pub const VACANT_LABEL: &'static str = "Vacant";

    /// Parses a status label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Loué" | "Loue" | "Occupied" | "Rented" => Self::Occupied,
            "Vacant" => Self::Vacant,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Occupied => Self::OCCUPIED_LABEL,
            Self::Vacant => Self::VACANT_LABEL,
            Self::Other(label) => label,
        }
    }

    /// Returns true if the property is let.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied)
    }
}

impl Default for PropertyStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for PropertyStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<&str> for PropertyStatus {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<PropertyStatus> for String {
    fn from(status: PropertyStatus) -> Self {
        match status {
            PropertyStatus::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
