//! Conditional parallel iteration for per-property computations.
//!
//! Uses rayon when the `parallel` feature is enabled and the input is large
//! enough. Only order-preserving maps live here; sums stay sequential so the
//! floating-point result does not depend on the thread split.

use crate::config::AnalyticsConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
///
/// Output order always matches input order.
///
/// # Example
///
/// ```ignore
/// let yields = maybe_parallel_map(&properties, &config, net_annual_yield_pct);
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &AnalyticsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

/// Sums `f` over items left to right, starting from `+0.0`.
pub(crate) fn sum_by<T, F>(items: &[T], f: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().fold(0.0, |acc, item| acc + f(item))
}
