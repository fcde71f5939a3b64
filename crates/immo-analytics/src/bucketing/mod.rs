//! Chart breakdowns.
//!
//! - **By type**: total current value per property type, for the donut chart
//! - **By geography**: property count per city, top-N, for the bar list
//!
//! All functions are pure: they read a slice of records and return a new
//! breakdown.

mod by_type;
mod geography;

pub use by_type::*;
pub use geography::*;
