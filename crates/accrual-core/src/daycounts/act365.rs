//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days, even in leap years.
///
/// # Usage
///
/// - UK Gilts
/// - AUD and NZD markets
/// - Many derivatives markets
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = start.days_between(&end);
        days as f64 / 365.0
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
    fn test_act365_full_year() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 365);
        assert_relative_eq!(dc.year_fraction(start, end), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_act365_leap_year_basis_unchanged() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        // Leap year still divides by 365
        assert_eq!(dc.day_count(start, end), 366);
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_act365_same_day() {
        let dc = Act365Fixed;
        let date = Date::from_ymd(2025, 6, 15).unwrap();

        assert_eq!(dc.day_count(date, date), 0);
        assert_eq!(dc.year_fraction(date, date), 0.0);
    }

    #[test]
    fn test_act365_negative() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 7, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), -181);
        assert_relative_eq!(dc.year_fraction(start, end), -181.0 / 365.0, epsilon = 1e-15);
    }
}
