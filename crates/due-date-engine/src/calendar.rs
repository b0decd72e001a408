//! Opening-hours calendar for a single service point.
//!
//! A calendar is an ordered, date-indexed window of [`OpeningDay`]s supplied
//! by an external scheduling service. Each day is either open all day, open
//! for discrete hour intervals, or closed. The engine only reads calendars;
//! malformed input is rejected at construction time rather than repaired.
//!
//! Traversal queries come in two flavors: nearest prior/following *open* day
//! (used by the closed-library day walks) and prior/following day regardless
//! of openness (the raw window neighbors).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{DueDateError, Result};
use crate::localtime::end_of_day;

/// One contiguous open interval within a day, local wall-clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHour {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl OpeningHour {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        OpeningHour {
            start_time,
            end_time,
        }
    }
}

/// One calendar date's operating-hours description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningDay {
    pub date: NaiveDate,
    pub open: bool,
    pub all_day: bool,
    pub hours: Vec<OpeningHour>,
}

impl OpeningDay {
    /// Open from local midnight to local midnight.
    pub fn all_day(date: NaiveDate) -> Self {
        OpeningDay {
            date,
            open: true,
            all_day: true,
            hours: Vec::new(),
        }
    }

    /// Open for the given hour intervals.
    pub fn with_hours(date: NaiveDate, hours: Vec<OpeningHour>) -> Self {
        OpeningDay {
            date,
            open: true,
            all_day: false,
            hours,
        }
    }

    pub fn closed(date: NaiveDate) -> Self {
        OpeningDay {
            date,
            open: false,
            all_day: false,
            hours: Vec::new(),
        }
    }

    /// Local closing time: the end of the last hour interval, or end of day
    /// (23:59:59.999) for a day without intervals.
    pub fn close_time(&self) -> NaiveTime {
        self.hours
            .last()
            .map(|h| h.end_time)
            .unwrap_or_else(end_of_day)
    }

    /// Local opening time: the start of the first hour interval, or local
    /// midnight for a day without intervals.
    pub fn open_time(&self) -> NaiveTime {
        self.hours
            .first()
            .map(|h| h.start_time)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Check the structural invariants of one day.
    ///
    /// An all-day or closed day carries no intervals; an open partial-hours
    /// day carries at least one, each with `start < end`, strictly
    /// increasing and non-overlapping.
    pub fn validate(&self) -> Result<()> {
        if self.all_day && !self.hours.is_empty() {
            return Err(self.malformed("all-day open day must not list hour intervals"));
        }
        if !self.open && (self.all_day || !self.hours.is_empty()) {
            return Err(self.malformed("closed day must not be all-day or list hour intervals"));
        }
        if self.open && !self.all_day && self.hours.is_empty() {
            return Err(self.malformed("open day must be all-day or list hour intervals"));
        }
        for pair in self.hours.windows(2) {
            if pair[0].end_time > pair[1].start_time {
                return Err(self.malformed("hour intervals must be ordered and non-overlapping"));
            }
        }
        if self.hours.iter().any(|h| h.start_time >= h.end_time) {
            return Err(self.malformed("hour interval must start before it ends"));
        }
        Ok(())
    }

    fn malformed(&self, reason: &str) -> DueDateError {
        DueDateError::InvalidCalendar(format!("{}: {}", self.date, reason))
    }
}

/// Date-sorted window of opening days for one service point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningCalendar {
    days: Vec<OpeningDay>,
}

impl OpeningCalendar {
    /// Build a calendar from a window of days.
    ///
    /// Days are sorted by date. Each day's structural invariants are checked
    /// and duplicate dates are rejected.
    pub fn new(mut days: Vec<OpeningDay>) -> Result<Self> {
        for day in &days {
            day.validate()?;
        }
        days.sort_by_key(|d| d.date);
        for pair in days.windows(2) {
            if pair[0].date == pair[1].date {
                return Err(DueDateError::InvalidCalendar(format!(
                    "duplicate opening day for {}",
                    pair[0].date
                )));
            }
        }
        Ok(OpeningCalendar { days })
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[OpeningDay] {
        &self.days
    }

    /// The opening day covering `date`, if inside the window.
    pub fn day(&self, date: NaiveDate) -> Option<&OpeningDay> {
        self.days
            .binary_search_by_key(&date, |d| d.date)
            .ok()
            .map(|idx| &self.days[idx])
    }

    /// Nearest open day strictly before `date`.
    pub fn previous_open_day(&self, date: NaiveDate) -> Option<&OpeningDay> {
        self.days
            .iter()
            .rev()
            .find(|d| d.date < date && d.open)
    }

    /// Nearest open day strictly after `date`.
    pub fn next_open_day(&self, date: NaiveDate) -> Option<&OpeningDay> {
        self.days.iter().find(|d| d.date > date && d.open)
    }

    /// Nearest day strictly before `date`, open or not.
    pub fn previous_day(&self, date: NaiveDate) -> Option<&OpeningDay> {
        self.days.iter().rev().find(|d| d.date < date)
    }

    /// Nearest day strictly after `date`, open or not.
    pub fn next_day(&self, date: NaiveDate) -> Option<&OpeningDay> {
        self.days.iter().find(|d| d.date > date)
    }
}
