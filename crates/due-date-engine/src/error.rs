//! Error types for due date computation.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::period::Interval;

#[derive(Error, Debug)]
pub enum DueDateError {
    /// Loan policy carries a non-positive or overflowing rolling period.
    #[error("invalid loan period: {duration} {interval:?} (duration must be a positive integer)")]
    InvalidPeriod { duration: i64, interval: Interval },

    /// No fixed due date schedule range contains the loan start instant.
    #[error("no range of fixed due date schedule \"{schedule}\" contains {start}")]
    NoMatchingScheduleRange {
        schedule: String,
        start: DateTime<Utc>,
    },

    /// Fixed due date schedule rejected at construction time.
    #[error("invalid fixed due date schedule \"{schedule}\": {reason}")]
    InvalidSchedule { schedule: String, reason: String },

    /// Opening calendar rejected at construction time.
    #[error("invalid opening calendar: {0}")]
    InvalidCalendar(String),
}

pub type Result<T> = std::result::Result<T, DueDateError>;
