//! Actual/360 day count convention.
//!
//! Used primarily for money market instruments.

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 360 days.
///
/// # Usage
///
/// - Money market instruments (T-Bills, Commercial Paper)
/// - LIBOR/SOFR-based floating rate instruments
/// - EUR interest rate swaps (floating leg)
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = start.days_between(&end);
        days as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act360_basic() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 4, 1).unwrap();

        // Jan has 31, Feb has 28, Mar has 31 = 90 days
        assert_eq!(dc.day_count(start, end), 90);
        assert_relative_eq!(dc.year_fraction(start, end), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_act360_full_year() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        // Non-leap year: 365 days / 360 > 1
        assert_eq!(dc.day_count(start, end), 365);
        assert_relative_eq!(dc.year_fraction(start, end), 365.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn test_act360_leap_year() {
        let dc = Act360;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 366);
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn test_act360_same_day() {
        let dc = Act360;
        let date = Date::from_ymd(2025, 6, 15).unwrap();

        assert_eq!(dc.day_count(date, date), 0);
        assert_eq!(dc.year_fraction(date, date), 0.0);
    }

    #[test]
    fn test_act360_negative() {
        let dc = Act360;
        let start = Date::from_ymd(2025, 6, 15).unwrap();
        let end = Date::from_ymd(2025, 6, 1).unwrap();

        // Negative days when end < start
        assert_eq!(dc.day_count(start, end), -14);
        assert_relative_eq!(dc.year_fraction(start, end), -14.0 / 360.0, epsilon = 1e-15);
    }
}
