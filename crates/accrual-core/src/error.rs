//! Error types for the Accrual library.
//!
//! The unchecked period-engine functions never construct these; only the
//! constructors, parsers, and checked `try_` entry points report errors.

use thiserror::Error;

use crate::daycounts::DayCountConvention;

/// A specialized Result type for Accrual operations.
pub type AccrualResult<T> = Result<T, AccrualError>;

/// The main error type for Accrual operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccrualError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Convention is outside the set the invoked engine can evaluate.
    #[error("Unsupported day-count convention: {convention}")]
    UnsupportedConvention {
        /// The rejected convention tag.
        convention: DayCountConvention,
    },

    /// Period schedule failed validation.
    #[error("Invalid period schedule: {reason}")]
    InvalidSchedule {
        /// Description of what is malformed.
        reason: String,
    },

    /// A query date falls outside the schedule's coverage.
    #[error("Date {date} outside period schedule [{first}, {last}]")]
    DateOutOfRange {
        /// The offending date, ISO 8601.
        date: String,
        /// First schedule boundary, ISO 8601.
        first: String,
        /// Last schedule boundary, ISO 8601.
        last: String,
    },
}

impl AccrualError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported_convention(convention: DayCountConvention) -> Self {
        Self::UnsupportedConvention { convention }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }
}
