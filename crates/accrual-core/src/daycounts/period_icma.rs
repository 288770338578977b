//! Actual/Actual ICMA day count over an explicit period schedule.
//!
//! The ICMA (formerly ISMA) Actual/Actual convention weights actual elapsed
//! days by the actual length of the enclosing coupon period and a nominal
//! year fraction per period (e.g., 0.25 for a quarterly schedule). Unlike the
//! schedule-free conventions, it cannot be evaluated from two dates alone;
//! callers supply the ordered period boundary dates.
//!
//! The functions here are the convention-specific core behind
//! [`period`](super::period) dispatch. They are the hot path: preconditions
//! are `debug_assert!`ed, not validated. Use the `try_` wrappers in
//! [`period`](super::period) when inputs are untrusted.

use crate::types::Date;

/// Returns the signed number of days between `begin` and `end`.
///
/// ICMA Actual/Actual counts actual calendar days; no schedule is needed for
/// the day count, only for the year fraction. Reversing the arguments negates
/// the result.
#[must_use]
pub fn days_diff(begin: Date, end: Date) -> i64 {
    end - begin
}

/// Returns the signed fractional number of years between `begin` and `end`.
///
/// `period` holds consecutive period boundary dates: `period[i]` starts
/// period `i` and `period[i + 1]` ends it, so the last entry terminates the
/// final period rather than starting a new one. Each period has a nominal
/// duration of `period_year_diff` years.
///
/// A date equal to an interior boundary belongs to the period that boundary
/// starts; a date equal to the final boundary belongs to the last period.
///
/// Reversing `begin` and `end` negates the result:
/// `|years_diff(b, e, pd, pyd) + years_diff(e, b, pd, pyd)| <= 1.0e-15` for
/// all valid inputs.
///
/// # Preconditions
///
/// The behavior is unspecified (checked only by `debug_assert!`) unless
/// `period.len() >= 2`, the boundary dates are unique and sorted from minimum
/// to maximum, `min(begin, end) >= period[0]`, and
/// `max(begin, end) <= *period.last()`.
#[must_use]
pub fn years_diff(begin: Date, end: Date, period: &[Date], period_year_diff: f64) -> f64 {
    debug_assert!(period.len() >= 2);
    debug_assert!(period.windows(2).all(|w| w[0] < w[1]));
    debug_assert!(begin.min(end) >= period[0]);
    debug_assert!(begin.max(end) <= period[period.len() - 1]);

    if begin == end {
        return 0.0;
    }
    if begin > end {
        return -years_diff(end, begin, period, period_year_diff);
    }

    let begin_index = period_index(period, begin);
    let end_index = period_index(period, end);

    if begin_index == end_index {
        let days_in_period = (period[begin_index + 1] - period[begin_index]) as f64;
        return (end - begin) as f64 / days_in_period * period_year_diff;
    }

    // Accumulate oldest-first: leading stub, whole interior periods,
    // trailing stub.
    let mut years = (period[begin_index + 1] - begin) as f64
        / (period[begin_index + 1] - period[begin_index]) as f64
        * period_year_diff;

    years += (end_index - begin_index - 1) as f64 * period_year_diff;

    years += (end - period[end_index]) as f64
        / (period[end_index + 1] - period[end_index]) as f64
        * period_year_diff;

    years
}

/// Index of the period containing `date`.
///
/// A boundary date resolves to the period it starts, except the final
/// boundary, which resolves to the last period (there is no period for it
/// to start).
fn period_index(period: &[Date], date: Date) -> usize {
    let bound = period.partition_point(|p| *p <= date);
    debug_assert!(bound > 0, "date precedes the schedule");
    (bound - 1).min(period.len() - 2)
}
