//! Portfolio-level analytics.
//!
//! This module provides the dashboard aggregates:
//! - Portfolio KPIs (count, value, income, average net yield)
//! - The synthetic 12-month revenue series
//! - Per-property net yield ranking and property cards
//! - The combined [`DashboardSnapshot`]
//!
//! All functions are pure - they take records and configuration as input
//! and return computed results. No I/O, no side effects.

mod cards;
mod income;
mod kpis;
mod parallel;
mod performance;
mod series;
mod summary;

pub use cards::*;
pub use income::*;
pub use kpis::*;
pub use parallel::*;
pub use performance::*;
pub use series::*;
pub use summary::*;
