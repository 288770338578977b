//! Core types for day-count calculations.

mod date;

pub use date::Date;
