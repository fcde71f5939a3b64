//! Configuration for portfolio analytics computation.

use immo_core::{Validate, ValidationIssue};
use serde::{Deserialize, Serialize};

/// Chart palette of the dashboard, indexed by type-breakdown ordinal.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#2563eb", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#0ea5e9",
];

/// Number of cities shown in the geography breakdown.
pub const DEFAULT_GEO_TOP_N: usize = 5;

/// Configuration for portfolio analytics computation.
///
/// Controls parallelism, the geography cut-off and the chart palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum property count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Number of cities kept by the geography breakdown.
    pub geo_top_n: usize,

    /// Colours assigned to type-breakdown slices, cycled by ordinal.
    pub palette: Vec<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100,
            geo_top_n: DEFAULT_GEO_TOP_N,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the number of cities kept by the geography breakdown.
    #[must_use]
    pub fn with_geo_top_n(mut self, top_n: usize) -> Self {
        self.geo_top_n = top_n;
        self
    }

    /// Sets the chart palette.
    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Number of palette entries used for colour-index wrapping, at least 1.
    #[must_use]
    pub fn palette_size(&self) -> usize {
        self.palette.len().max(1)
    }

    /// Colour for a colour index, `None` if the palette is empty.
    #[must_use]
    pub fn color_for(&self, color_index: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        self.palette
            .get(color_index % self.palette.len())
            .map(String::as_str)
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

impl Validate for AnalyticsConfig {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.palette.is_empty() {
            issues.push(ValidationIssue::error("palette", "must contain at least one colour"));
        }
        if self.parallel_threshold == 0 {
            issues.push(ValidationIssue::warning(
                "parallel_threshold",
                "0 parallelizes even empty inputs",
            ));
        }
        if self.geo_top_n == 0 {
            issues.push(ValidationIssue::warning("geo_top_n", "geography breakdown will be empty"));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = AnalyticsConfig::default();
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 100);
        assert_eq!(config.geo_top_n, 5);
        assert_eq!(config.palette.len(), 6);
        assert!(config.is_valid());
    }

    #[test]
    fn test_sequential() {
        let config = AnalyticsConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(1_000_000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = AnalyticsConfig::new()
            .with_parallel(true)
            .with_threshold(50)
            .with_geo_top_n(3)
            .with_palette(["#000000", "#ffffff"]);

        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 50);
        assert_eq!(config.geo_top_n, 3);
        assert_eq!(config.color_for(3), Some("#ffffff"));
    }

    #[test]
    fn test_empty_palette() {
        let config = AnalyticsConfig::new().with_palette(Vec::<String>::new());
        assert_eq!(config.palette_size(), 1);
        assert_eq!(config.color_for(0), None);
        assert!(!config.is_valid());
    }

    #[test]
    fn test_should_parallelize() {
        let config = AnalyticsConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
        }
    }

    #[test]
    fn test_serde_partial() {
        let parsed: AnalyticsConfig = serde_json::from_str(r#"{"geo_top_n": 2}"#).unwrap();
        assert_eq!(parsed.geo_top_n, 2);
        assert_eq!(parsed.palette.len(), 6);
        assert!(parsed.parallel);
    }
}
