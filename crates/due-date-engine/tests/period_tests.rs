//! Tests for rolling period arithmetic.

use chrono::{TimeZone, Utc};
use due_date_engine::{DueDateError, Interval, Period};

#[test]
fn minutes_are_exact_elapsed_time() {
    let start = Utc.with_ymd_and_hms(2026, 3, 4, 10, 15, 0).unwrap();
    let due = Period::new(30, Interval::Minutes).add_to(start).unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2026, 3, 4, 10, 45, 0).unwrap());
}

#[test]
fn hours_are_exact_elapsed_time() {
    let start = Utc.with_ymd_and_hms(2026, 3, 4, 22, 0, 0).unwrap();
    let due = Period::new(5, Interval::Hours).add_to(start).unwrap();
    // Crosses midnight into the next day.
    assert_eq!(due, Utc.with_ymd_and_hms(2026, 3, 5, 3, 0, 0).unwrap());
}

#[test]
fn weeks_step_whole_days() {
    let start = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
    let due = Period::new(2, Interval::Weeks).add_to(start).unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2026, 3, 18, 9, 0, 0).unwrap());
}

#[test]
fn months_respect_variable_month_lengths() {
    let start = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    let due = Period::new(3, Interval::Months).add_to(start).unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2026, 4, 15, 12, 0, 0).unwrap());
}

#[test]
fn month_end_clamps_to_shorter_month() {
    // Jan 31 + 1 month lands on Feb 28 in a non-leap year.
    let start = Utc.with_ymd_and_hms(2026, 1, 31, 12, 0, 0).unwrap();
    let due = Period::new(1, Interval::Months).add_to(start).unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2026, 2, 28, 12, 0, 0).unwrap());
}

#[test]
fn month_end_clamps_to_leap_day() {
    let start = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
    let due = Period::new(1, Interval::Months).add_to(start).unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap());
}

#[test]
fn day_addition_is_stable_across_dst_transitions() {
    // US spring-forward happens 2026-03-08 in local time; UTC arithmetic
    // must not care.
    let start = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
    let due = Period::new(1, Interval::Days).add_to(start).unwrap();
    assert_eq!(due, Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap());
}

#[test]
fn zero_duration_is_invalid() {
    let start = Utc.with_ymd_and_hms(2026, 3, 4, 10, 0, 0).unwrap();
    let err = Period::new(0, Interval::Days).add_to(start).unwrap_err();
    assert!(matches!(err, DueDateError::InvalidPeriod { duration: 0, .. }));
}

#[test]
fn negative_duration_is_invalid() {
    let start = Utc.with_ymd_and_hms(2026, 3, 4, 10, 0, 0).unwrap();
    let err = Period::new(-3, Interval::Hours).add_to(start).unwrap_err();
    assert!(matches!(
        err,
        DueDateError::InvalidPeriod {
            duration: -3,
            interval: Interval::Hours
        }
    ));
}

#[test]
fn short_term_means_hours_or_minutes() {
    assert!(Period::new(1, Interval::Minutes).is_short_term());
    assert!(Period::new(1, Interval::Hours).is_short_term());
    assert!(!Period::new(1, Interval::Days).is_short_term());
    assert!(!Period::new(1, Interval::Weeks).is_short_term());
    assert!(!Period::new(1, Interval::Months).is_short_term());
}
