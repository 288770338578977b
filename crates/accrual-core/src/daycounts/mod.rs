//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how accrued interest is calculated by
//! specifying how to count days between two dates and the year basis.
//!
//! # Supported Conventions
//!
//! ## ACT Family (Actual numerator)
//!
//! - [`Act360`]: Actual/360 - Money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed - UK Gilts, AUD/NZD
//! - [`ActActIsda`]: Actual/Actual ISDA - Year-based split
//!
//! ## 30/360 Family (Assumes 30-day months, 360-day years)
//!
//! - [`Thirty360US`]: 30/360 US - US corporate bonds (with Feb EOM rules)
//! - [`Thirty360E`]: 30E/360 - Eurobond convention
//!
//! ## Period-Based
//!
//! - `IcmaActualActual`: Actual/Actual ICMA over an explicit schedule of
//!   period boundary dates, evaluated by the [`period`] module. Period-based
//!   conventions have no schedule-free [`DayCount`] implementation.
//!
//! # Usage
//!
//! ```rust
//! use accrual_core::daycounts::{Act360, DayCount};
//! use accrual_core::types::Date;
//!
//! let dc = Act360;
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! let days = dc.day_count(start, end);
//! let year_fraction = dc.year_fraction(start, end);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub mod period;
pub mod period_icma;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActIsda;
pub use thirty360::{Thirty360, Thirty360E, Thirty360US};

use crate::types::Date;

/// Trait for day count conventions that need no period context.
///
/// Implementations provide the day count and year fraction between two dates
/// according to specific market conventions.
///
/// # Implementation Notes
///
/// - `year_fraction` is signed: negative when `end < start`
/// - `day_count` returns the number of days according to the convention
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    ///
    /// This matches market convention naming (e.g., "ACT/360", "30/360 US").
    fn name(&self) -> &'static str;

    /// Calculates the signed year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the signed day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; for 30/360
    /// conventions it uses the 30-day month assumption.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of all supported day count conventions.
///
/// This is the closed, versioned tag set over which the engines dispatch.
/// Schedule-free conventions convert to trait objects via
/// [`DayCountConvention::to_day_count`]; the period-based tag is evaluated by
/// the [`period`] module, which requires a schedule of boundary dates.
///
/// # Example
///
/// ```rust
/// use accrual_core::daycounts::{DayCount, DayCountConvention};
/// use accrual_core::types::Date;
///
/// let convention = DayCountConvention::Thirty360US;
/// let dc = convention.to_day_count().unwrap();
///
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 7, 1).unwrap();
/// let yf = dc.year_fraction(start, end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/360 - Money market instruments, FRNs
    Act360,

    /// Actual/365 Fixed - UK Gilts, AUD/NZD markets
    Act365Fixed,

    /// Actual/Actual ISDA - Year-based calculation for swaps
    ActActIsda,

    /// 30/360 US (Bond Basis) - US corporate, agency, municipal bonds
    Thirty360US,

    /// 30E/360 (Eurobond Basis) - Eurobonds, European corporates
    Thirty360E,

    /// Actual/Actual ICMA - Period-based calculation for bonds.
    ///
    /// Requires a schedule of period boundary dates and a nominal year
    /// fraction per period; see the [`period`] module.
    IcmaActualActual,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    ///
    /// Returns `None` for period-based conventions, which cannot compute a
    /// year fraction without a schedule.
    #[must_use]
    pub fn to_day_count(&self) -> Option<Box<dyn DayCount>> {
        match self {
            DayCountConvention::Act360 => Some(Box::new(Act360)),
            DayCountConvention::Act365Fixed => Some(Box::new(Act365Fixed)),
            DayCountConvention::ActActIsda => Some(Box::new(ActActIsda)),
            DayCountConvention::Thirty360US => Some(Box::new(Thirty360US)),
            DayCountConvention::Thirty360E => Some(Box::new(Thirty360E)),
            DayCountConvention::IcmaActualActual => None,
        }
    }

    /// Returns true if the convention needs a period schedule to evaluate.
    #[must_use]
    pub const fn is_period_based(&self) -> bool {
        matches!(self, DayCountConvention::IcmaActualActual)
    }

    /// Returns the market-convention name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365F",
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
            DayCountConvention::Thirty360US => "30/360 US",
            DayCountConvention::Thirty360E => "30E/360",
            DayCountConvention::IcmaActualActual => "ACT/ACT ICMA",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::ActActIsda,
            DayCountConvention::Thirty360US,
            DayCountConvention::Thirty360E,
            DayCountConvention::IcmaActualActual,
        ]
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = DayCountParseError;

    /// Parses a day count convention from a string.
    ///
    /// Supports multiple formats:
    /// - Market-style: "ACT/360", "30/360 US", "ACT/ACT ICMA"
    /// - Rust enum-style: "Act360", "Thirty360US", "IcmaActualActual"
    /// - Common aliases: "BOND", "ACTUAL/360", "EUROBOND", "ISMA"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            // ACT/360
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            // ACT/365 Fixed
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACTUAL/365 FIXED"
            | "ACT365FIXED" | "ACT365" => Ok(DayCountConvention::Act365Fixed),

            // ACT/ACT ISDA
            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA" | "ACTACTISDA"
            | "ACTACT" => Ok(DayCountConvention::ActActIsda),

            // 30/360 US
            "30/360" | "30/360 US" | "30U/360" | "BOND" | "THIRTY360US" | "30/360US" => {
                Ok(DayCountConvention::Thirty360US)
            }

            // 30E/360
            "30E/360" | "30/360 ICMA" | "EUROBOND" | "THIRTY360E" | "30E360" => {
                Ok(DayCountConvention::Thirty360E)
            }

            // ACT/ACT ICMA (period-based)
            "ACT/ACT ICMA" | "ACTUAL/ACTUAL ICMA" | "ACTACTICMA" | "ICMAACTUALACTUAL"
            | "ISMA" => Ok(DayCountConvention::IcmaActualActual),

            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl std::fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}

mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}
