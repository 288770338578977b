//! Day-count calculations dispatched over period-based conventions.
//!
//! This module is the enum-dispatch entry point for conventions that measure
//! year fractions against an explicit schedule of period boundary dates. It
//! provides:
//!
//! - [`is_supported`]: membership test for the closed set of conventions the
//!   engine can evaluate
//! - [`days_diff`] / [`years_diff`]: the trusted hot path, whose
//!   preconditions are `debug_assert!`ed and never validated in release
//! - [`try_days_diff`] / [`try_years_diff`]: checked wrappers that validate
//!   every input once and return typed errors, for use outside hot loops
//!
//! # Usage
//!
//! ```rust
//! use accrual_core::daycounts::{period, DayCountConvention};
//! use accrual_core::types::Date;
//!
//! let begin = Date::from_ymd(2003, 10, 19).unwrap();
//! let end = Date::from_ymd(2003, 12, 31).unwrap();
//! let schedule = vec![
//!     Date::from_ymd(2003, 10, 1).unwrap(),
//!     Date::from_ymd(2004, 1, 1).unwrap(),
//! ];
//!
//! let convention = DayCountConvention::IcmaActualActual;
//! assert_eq!(period::days_diff(begin, end, convention), 73);
//!
//! let years = period::years_diff(begin, end, &schedule, 0.25, convention);
//! assert!(years > 0.1983 && years < 0.1985);
//! ```

use log::debug;

use super::{period_icma, DayCountConvention};
use crate::error::{AccrualError, AccrualResult};
use crate::types::Date;

/// Returns true if `convention` is valid for use in [`days_diff`] and
/// [`years_diff`], and false otherwise.
///
/// Callers of the unchecked functions must consult this first; the checked
/// `try_` wrappers consult it on the caller's behalf.
#[must_use]
pub fn is_supported(convention: DayCountConvention) -> bool {
    matches!(convention, DayCountConvention::IcmaActualActual)
}

/// Returns the signed number of days between `begin` and `end` according to
/// `convention`.
///
/// The result is non-negative when `begin <= end`, and reversing the
/// arguments negates it. Raw day counting is schedule-independent, so no
/// period context is needed even for schedule-aware conventions.
///
/// # Preconditions
///
/// `is_supported(convention)`; checked only by `debug_assert!`. Unsupported
/// conventions yield 0 in release builds.
#[must_use]
pub fn days_diff(begin: Date, end: Date, convention: DayCountConvention) -> i64 {
    debug_assert!(is_supported(convention), "unsupported convention");

    match convention {
        DayCountConvention::IcmaActualActual => period_icma::days_diff(begin, end),
        _ => 0,
    }
}

/// Returns the signed fractional number of years between `begin` and `end`
/// according to `convention`, with periods starting on the `period` boundary
/// dates and each period having a nominal duration of `period_year_diff`
/// years (e.g., 0.25 for quarterly periods).
///
/// The result is non-negative when `begin <= end`, and reversing the
/// arguments negates it to within `1.0e-15` absolute.
///
/// # Preconditions
///
/// `is_supported(convention)`; `period.len() >= 2` with unique, ascending
/// entries; `min(begin, end) >= period[0]`;
/// `max(begin, end) <= *period.last()`. All checked only by `debug_assert!`;
/// unsupported conventions yield 0.0 in release builds. `period_year_diff`
/// is used as given.
#[must_use]
pub fn years_diff(
    begin: Date,
    end: Date,
    period: &[Date],
    period_year_diff: f64,
    convention: DayCountConvention,
) -> f64 {
    debug_assert!(is_supported(convention), "unsupported convention");

    match convention {
        DayCountConvention::IcmaActualActual => {
            period_icma::years_diff(begin, end, period, period_year_diff)
        }
        _ => 0.0,
    }
}

/// Checked variant of [`days_diff`].
///
/// # Errors
///
/// Returns `AccrualError::UnsupportedConvention` if the period engine cannot
/// evaluate `convention`.
pub fn try_days_diff(
    begin: Date,
    end: Date,
    convention: DayCountConvention,
) -> AccrualResult<i64> {
    if !is_supported(convention) {
        debug!("rejecting days_diff: unsupported convention {convention}");
        return Err(AccrualError::unsupported_convention(convention));
    }

    Ok(days_diff(begin, end, convention))
}

/// Checked variant of [`years_diff`].
///
/// Validates the convention, the schedule, and the date range once, then
/// delegates to the unchecked engine. Never clamps or repairs inputs.
///
/// # Errors
///
/// - `AccrualError::UnsupportedConvention` if the period engine cannot
///   evaluate `convention`
/// - `AccrualError::InvalidSchedule` if `period` has fewer than 2 entries or
///   is not strictly increasing
/// - `AccrualError::DateOutOfRange` if `begin` or `end` falls outside
///   `[period[0], *period.last()]`
pub fn try_years_diff(
    begin: Date,
    end: Date,
    period: &[Date],
    period_year_diff: f64,
    convention: DayCountConvention,
) -> AccrualResult<f64> {
    if !is_supported(convention) {
        debug!("rejecting years_diff: unsupported convention {convention}");
        return Err(AccrualError::unsupported_convention(convention));
    }

    validate_schedule(period)?;

    let first = period[0];
    let last = period[period.len() - 1];
    for date in [begin, end] {
        if date < first || date > last {
            debug!("rejecting years_diff: {date} outside [{first}, {last}]");
            return Err(AccrualError::DateOutOfRange {
                date: date.to_string(),
                first: first.to_string(),
                last: last.to_string(),
            });
        }
    }

    Ok(years_diff(begin, end, period, period_year_diff, convention))
}

/// Validates a period schedule: at least two entries, strictly increasing.
fn validate_schedule(period: &[Date]) -> AccrualResult<()> {
    if period.len() < 2 {
        debug!("rejecting schedule: {} entries", period.len());
        return Err(AccrualError::invalid_schedule(format!(
            "fewer than 2 entries ({})",
            period.len()
        )));
    }

    if let Some(w) = period.windows(2).find(|w| w[0] >= w[1]) {
        debug!("rejecting schedule: {} does not precede {}", w[0], w[1]);
        return Err(AccrualError::invalid_schedule(format!(
            "entries not strictly increasing: {} >= {}",
            w[0], w[1]
        )));
    }

    Ok(())
}
