//! # Immo Analytics
//!
//! Aggregation layer that turns a list of property records into the figures a
//! real-estate portfolio dashboard displays.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every aggregate is computed from explicit inputs and
//!   never mutates them
//! - **Never fails**: absent amounts read as zero and every denominator is
//!   guarded, so no function returns `Result` and no output is NaN
//! - **Config-driven parallelism**: optional rayon support with threshold-based
//!   switching for per-property maps
//!
//! ## Quick Start
//!
//! ```rust
//! use immo_analytics::prelude::*;
//! use immo_core::demo_dataset;
//!
//! let dataset = demo_dataset();
//! let config = AnalyticsConfig::default();
//!
//! let kpis = compute_kpis(dataset.properties(), &config);
//! assert_eq!(kpis.total_properties, 4);
//! assert_eq!(kpis.projected_annual_income, 97_800.0);
//!
//! let series = compute_monthly_series(dataset.properties());
//! assert_eq!(series.len(), 12);
//!
//! let lyon = filter_properties(dataset.properties(), "lyon");
//! let geo = compute_geo_breakdown(&lyon, config.geo_top_n);
//! assert_eq!(geo.buckets()[0].label, "Lyon");
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - KPIs, revenue series, performance, cards, snapshot
//! - [`bucketing`] - Breakdown by type and by city
//! - [`filter`] - Free-text search
//! - [`cache`] - Snapshot memoisation by dataset revision
//! - [`config`] - [`AnalyticsConfig`]
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod cache;
pub mod config;
pub mod filter;

pub use config::{AnalyticsConfig, DEFAULT_GEO_TOP_N, DEFAULT_PALETTE};

pub use analytics::{
    // Snapshot
    calculate_dashboard,
    // Cards
    compute_property_cards,
    // KPIs
    compute_kpis,
    // Series
    compute_monthly_series,
    // Performance
    compute_performance_ranking,
    // Parallel utilities
    maybe_parallel_map,
    // Income
    net_annual_yield_pct,
    net_monthly_income,
    round_half_up,
    round_to_tenth,
    seasonality_factor,
    DashboardSnapshot,
    MonthlyPoint,
    MonthlySeries,
    PerformanceEntry,
    PortfolioKpis,
    PropertyCard,
    StatusTone,
    MONTHS,
};

pub use bucketing::{
    compute_geo_breakdown, compute_type_breakdown, DonutSegment, GeoBreakdown, GeoBucket,
    TypeBreakdown, TypeSlice,
};

pub use cache::DashboardCache;
pub use filter::filter_properties;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{
        calculate_dashboard, compute_kpis, compute_monthly_series, compute_performance_ranking,
        compute_property_cards, DashboardSnapshot, MonthlySeries, PerformanceEntry,
        PortfolioKpis, PropertyCard, StatusTone,
    };
    pub use crate::bucketing::{
        compute_geo_breakdown, compute_type_breakdown, GeoBreakdown, TypeBreakdown,
    };
    pub use crate::cache::DashboardCache;
    pub use crate::config::AnalyticsConfig;
    pub use crate::filter::filter_properties;
}
