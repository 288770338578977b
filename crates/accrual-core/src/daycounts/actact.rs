//! Actual/Actual ISDA day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The year fraction is calculated by splitting the interval into the
/// portions that fall in leap years vs non-leap years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start == end {
            return 0.0;
        }
        if start > end {
            return -self.year_fraction(end, start);
        }

        let mut total = 0.0;
        let mut current = start;

        // Process whole calendar years, each against its own basis
        while current.year() < end.year() {
            let next_jan1 = Date::from_ymd(current.year() + 1, 1, 1)
                .expect("January 1 is always valid");
            let days = current.days_between(&next_jan1);
            total += days as f64 / current.days_in_year() as f64;
            current = next_jan1;
        }

        // Remaining portion in the final year
        total += current.days_between(&end) as f64 / current.days_in_year() as f64;

        total
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
