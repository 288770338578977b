//! # Accrual Core
//!
//! Day-count conventions and period-based year fraction calculations for
//! fixed income instruments.
//!
//! This crate provides the date arithmetic that underlies interest accrual:
//!
//! - **Types**: a [`Date`] newtype with financial-specific operations
//! - **Day Count Conventions**: ACT/360, ACT/365F, ACT/ACT ISDA, 30/360
//!   variants, each behind the [`daycounts::DayCount`] trait
//! - **Period Engine**: schedule-aware ICMA Actual/Actual day and year
//!   fractions, dispatched over the closed [`DayCountConvention`] set
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: a dedicated `Date` newtype instead of raw chrono values
//! - **Trusted Hot Path**: the period engine offers unchecked functions whose
//!   preconditions are `debug_assert!`ed, plus checked `try_` wrappers that
//!   return typed errors for use outside pricing loops
//! - **Explicit Over Implicit**: conventions are a closed enum; membership in
//!   the period engine is queried, never guessed
//!
//! ## Example
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
//! assert!(period::is_supported(convention));
//!
//! let days = period::days_diff(begin, end, convention);
//! assert_eq!(days, 73);
//!
//! let years = period::years_diff(begin, end, &schedule, 0.25, convention);
//! assert!(years > 0.1983 && years < 0.1985);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{period, DayCount, DayCountConvention};
    pub use crate::error::{AccrualError, AccrualResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use daycounts::DayCountConvention;
pub use error::{AccrualError, AccrualResult};
pub use types::Date;
