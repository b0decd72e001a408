//! Rolling loan periods -- a duration plus a unit, added to a loan start instant.
//!
//! Month addition is calendar-based (variable month lengths, end-of-month
//! clamping). Every other unit is exact elapsed-time addition. All arithmetic
//! happens on `DateTime<Utc>`, so results are deterministic across DST
//! transitions; callers re-express the result in local time only for calendar
//! comparisons.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DueDateError, Result};

/// Unit of a rolling loan period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Interval {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

impl Interval {
    /// Hour/minute granularity selects the short-term strategy subset.
    pub fn is_short_term(self) -> bool {
        matches!(self, Interval::Minutes | Interval::Hours)
    }
}

/// A rolling loan period, e.g. "3 Months" or "30 Minutes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub duration: i64,
    #[serde(rename = "intervalId")]
    pub interval: Interval,
}

impl Period {
    pub fn new(duration: i64, interval: Interval) -> Self {
        Period { duration, interval }
    }

    pub fn is_short_term(&self) -> bool {
        self.interval.is_short_term()
    }

    /// Add this period to `start`.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError::InvalidPeriod`] when the duration is not a
    /// positive integer, or when the addition overflows the representable
    /// datetime range.
    pub fn add_to(&self, start: DateTime<Utc>) -> Result<DateTime<Utc>> {
        if self.duration <= 0 {
            return Err(self.invalid());
        }

        let result = match self.interval {
            Interval::Minutes => start.checked_add_signed(Duration::minutes(self.duration)),
            Interval::Hours => start.checked_add_signed(Duration::hours(self.duration)),
            Interval::Days => start.checked_add_signed(Duration::days(self.duration)),
            Interval::Weeks => start.checked_add_signed(Duration::weeks(self.duration)),
            Interval::Months => u32::try_from(self.duration)
                .ok()
                .and_then(|months| start.checked_add_months(Months::new(months))),
        };

        result.ok_or_else(|| self.invalid())
    }

    fn invalid(&self) -> DueDateError {
        DueDateError::InvalidPeriod {
            duration: self.duration,
            interval: self.interval,
        }
    }
}
