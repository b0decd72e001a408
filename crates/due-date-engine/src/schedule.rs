//! Fixed due date schedules -- date ranges each mapped to a fixed due date.
//!
//! A FIXED-profile loan policy resolves its due date by finding the schedule
//! range containing the loan start instant instead of adding a period.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DueDateError, Result};

/// One `[from, to] -> due_date` range of a fixed schedule, UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

/// An ordered set of non-overlapping date ranges, each with a fixed due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedDueDateSchedule {
    pub id: String,
    pub name: String,
    entries: Vec<ScheduleEntry>,
}

impl FixedDueDateSchedule {
    /// Build a schedule, rejecting inverted or overlapping ranges.
    ///
    /// Entries are sorted by range start. Overlap detection compares each
    /// entry's `to` against the next entry's `from`; ranges are inclusive at
    /// both ends, so sharing a boundary instant counts as an overlap.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mut entries: Vec<ScheduleEntry>,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        for entry in &entries {
            if entry.from > entry.to {
                return Err(DueDateError::InvalidSchedule {
                    schedule: name,
                    reason: format!("range starting {} ends before it begins", entry.from),
                });
            }
        }
        entries.sort_by_key(|e| e.from);
        for pair in entries.windows(2) {
            if pair[0].to >= pair[1].from {
                return Err(DueDateError::InvalidSchedule {
                    schedule: name,
                    reason: format!(
                        "ranges starting {} and {} overlap",
                        pair[0].from, pair[1].from
                    ),
                });
            }
        }

        Ok(FixedDueDateSchedule { id, name, entries })
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Due date of the range containing `start`, inclusive at both ends.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError::NoMatchingScheduleRange`] when no range
    /// contains the start instant -- a policy configuration failure.
    pub fn resolve(&self, start: DateTime<Utc>) -> Result<DateTime<Utc>> {
        self.entries
            .iter()
            .find(|e| e.from <= start && start <= e.to)
            .map(|e| e.due_date)
            .ok_or_else(|| DueDateError::NoMatchingScheduleRange {
                schedule: self.name.clone(),
                start,
            })
    }
}
