//! Integration tests for the period-based ICMA Actual/Actual engine, driven
//! by pre-computed reference values.
//!
//! The fixture holds hand-computed day counts and year fractions for a set
//! of schedules and date pairs, including the stub, boundary, and reversed
//! cases that are easiest to get wrong.

use accrual_core::daycounts::{period, DayCountConvention};
use accrual_core::types::Date;
use serde::Deserialize;
use std::fs;

/// Path to the reference test data, relative to the crate root.
const REFERENCE_FILE: &str = "tests/fixtures/icma_reference.json";

// ============================================================================
// JSON Structures for Test Data
// ============================================================================

#[derive(Debug, Deserialize)]
struct TestSuite {
    metadata: Metadata,
    cases: Vec<ReferenceCase>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // description documents the fixture, not used in assertions
struct Metadata {
    description: String,
    generated_date: String,
}

#[derive(Debug, Deserialize)]
struct ReferenceCase {
    name: String,
    convention: DayCountConvention,
    begin: String,
    end: String,
    schedule: Vec<String>,
    period_year_diff: f64,
    expected_days: i64,
    expected_years: f64,
    tolerance: f64,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_date(s: &str) -> Date {
    Date::parse(s).unwrap_or_else(|_| panic!("Failed to parse date: {}", s))
}

fn load_suite() -> TestSuite {
    let content = fs::read_to_string(REFERENCE_FILE)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", REFERENCE_FILE, e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", REFERENCE_FILE, e))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_fixture_is_well_formed() {
    let suite = load_suite();
    assert!(!suite.metadata.generated_date.is_empty());
    assert!(!suite.cases.is_empty());

    for case in &suite.cases {
        assert!(
            period::is_supported(case.convention),
            "{}: fixture uses a convention the engine does not support",
            case.name
        );
        assert!(case.schedule.len() >= 2, "{}: schedule too short", case.name);
    }
}

#[test]
fn test_reference_day_counts() {
    let suite = load_suite();

    for case in &suite.cases {
        let begin = parse_date(&case.begin);
        let end = parse_date(&case.end);

        let days = period::days_diff(begin, end, case.convention);
        assert_eq!(
            days, case.expected_days,
            "{}: days_diff({}, {})",
            case.name, case.begin, case.end
        );
    }
}

#[test]
fn test_reference_year_fractions() {
    let suite = load_suite();

    for case in &suite.cases {
        let begin = parse_date(&case.begin);
        let end = parse_date(&case.end);
        let schedule: Vec<Date> = case.schedule.iter().map(|s| parse_date(s)).collect();

        let years = period::years_diff(
            begin,
            end,
            &schedule,
            case.period_year_diff,
            case.convention,
        );
        assert!(
            (years - case.expected_years).abs() <= case.tolerance,
            "{}: years_diff({}, {}) = {}, expected {} +/- {}",
            case.name,
            case.begin,
            case.end,
            years,
            case.expected_years,
            case.tolerance
        );
    }
}

#[test]
fn test_reference_cases_through_checked_path() {
    let suite = load_suite();

    for case in &suite.cases {
        let begin = parse_date(&case.begin);
        let end = parse_date(&case.end);
        let schedule: Vec<Date> = case.schedule.iter().map(|s| parse_date(s)).collect();

        let days = period::try_days_diff(begin, end, case.convention)
            .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
        assert_eq!(days, case.expected_days, "{}", case.name);

        let years = period::try_years_diff(
            begin,
            end,
            &schedule,
            case.period_year_diff,
            case.convention,
        )
        .unwrap_or_else(|e| panic!("{}: {}", case.name, e));
        assert!(
            (years - case.expected_years).abs() <= case.tolerance,
            "{}: checked path disagrees with reference",
            case.name
        );
    }
}

#[test]
fn test_reference_antisymmetry() {
    let suite = load_suite();

    for case in &suite.cases {
        let begin = parse_date(&case.begin);
        let end = parse_date(&case.end);
        let schedule: Vec<Date> = case.schedule.iter().map(|s| parse_date(s)).collect();

        assert_eq!(
            period::days_diff(begin, end, case.convention),
            -period::days_diff(end, begin, case.convention),
            "{}",
            case.name
        );

        let forward = period::years_diff(
            begin,
            end,
            &schedule,
            case.period_year_diff,
            case.convention,
        );
        let backward = period::years_diff(
            end,
            begin,
            &schedule,
            case.period_year_diff,
            case.convention,
        );
        assert!(
            (forward + backward).abs() <= 1.0e-15,
            "{}: |{} + {}| > 1e-15",
            case.name,
            forward,
            backward
        );
    }
}
