//! Deterministic numeric helpers.
//!
//! Averages and ratios here never invent a value for a zero denominator:
//! they return `None` and leave the error policy to the caller.

#![forbid(unsafe_code)]

/// Decimal places used for every rounded average in textstat.
pub const AVERAGE_DECIMALS: u32 = 2;

/// Round a floating point value to `decimals` decimal places.
///
/// Exact halves go to the even neighbour, so `1.625` becomes `1.62` and
/// `0.125` becomes `0.12`.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Return `total / count` rounded to [`AVERAGE_DECIMALS`], or `None` when
/// `count` is zero.
#[must_use]
pub fn checked_average(total: usize, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(round_f64(total as f64 / count as f64, AVERAGE_DECIMALS))
}

/// Return the unrounded ratio `numer / denom`, or `None` when `denom` is zero.
#[must_use]
pub fn checked_ratio(numer: f64, denom: f64) -> Option<f64> {
    if denom == 0.0 {
        None
    } else {
        Some(numer / denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_f64_rounds_expected_precision() {
        let value = 12.34567;
        assert_eq!(round_f64(value, 2), 12.35);
        assert_eq!(round_f64(value, 4), 12.3457);
    }

    #[test]
    fn checked_average_guards_zero_count() {
        assert_eq!(checked_average(5, 0), None);
        assert_eq!(checked_average(5, 2), Some(2.5));
    }

    #[test]
    fn checked_average_rounds_to_two_places() {
        assert_eq!(checked_average(10, 3), Some(3.33));
        assert_eq!(checked_average(20, 3), Some(6.67));
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round_f64(1.625, 2), 1.62);
        assert_eq!(round_f64(0.125, 2), 0.12);
        assert_eq!(round_f64(0.375, 2), 0.38);
        assert_eq!(round_f64(2.5, 0), 2.0);
    }

    #[test]
    fn checked_ratio_guards_zero_denominator() {
        assert_eq!(checked_ratio(1.0, 0.0), None);
        assert_eq!(checked_ratio(5.0, 2.0), Some(2.5));
    }
}
