//! # textstat-compare
//!
//! **Tier 2 (Comparison)**
//!
//! Compares two [`MetricsEngine`]s on one [`Metric`] and states which side is
//! larger and by how much.
//!
//! The sign policy is fixed: a negative difference means the second sample
//! exceeds the first; anything else, an exact tie included, is reported as
//! the first exceeding the second. A tie therefore reads
//! "first exceeds second by 0.00" whichever order the arguments come in.

use textstat_math::{AVERAGE_DECIMALS, round_f64};
use textstat_metrics::{MetricsEngine, MetricsError};
use textstat_types::{ComparisonResult, Direction, Metric};

/// Compare `first` against `second` on `metric`.
///
/// Fails only for [`Metric::Average`] when either side has no tokens.
pub fn compare(
    first: &MetricsEngine,
    second: &MetricsEngine,
    metric: Metric,
) -> Result<ComparisonResult, MetricsError> {
    let difference = first.metric(metric)? - second.metric(metric)?;
    Ok(from_difference(metric, difference))
}

pub fn compare_counts(first: &MetricsEngine, second: &MetricsEngine) -> ComparisonResult {
    let difference = first.count() as f64 - second.count() as f64;
    from_difference(Metric::Count, difference)
}

pub fn compare_lengths(first: &MetricsEngine, second: &MetricsEngine) -> ComparisonResult {
    let difference = first.total_length() as f64 - second.total_length() as f64;
    from_difference(Metric::Length, difference)
}

pub fn compare_averages(
    first: &MetricsEngine,
    second: &MetricsEngine,
) -> Result<ComparisonResult, MetricsError> {
    compare(first, second, Metric::Average)
}

fn from_difference(metric: Metric, difference: f64) -> ComparisonResult {
    let (direction, magnitude) = if difference < 0.0 {
        (Direction::SecondExceeds, difference.abs())
    } else {
        (Direction::FirstExceeds, difference)
    };
    ComparisonResult {
        metric,
        direction,
        magnitude: round_f64(magnitude, AVERAGE_DECIMALS),
    }
}
