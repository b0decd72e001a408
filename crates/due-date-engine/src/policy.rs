//! Loan policy model: profile, closed-library strategy, renewal anchor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::period::Period;
use crate::schedule::FixedDueDateSchedule;

/// How a nominal due date falling outside operating hours is adjusted.
///
/// The first two variants are no-ops surfaced separately by long-term and
/// short-term policies; the engine treats them identically. The remaining
/// variants split into long-term (day granularity) and short-term (service
/// point hours granularity) adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClosedLibraryStrategy {
    KeepTheCurrentDueDate,
    KeepTheCurrentDueDateTime,
    MoveToTheEndOfThePreviousOpenDay,
    MoveToTheEndOfTheNextOpenDay,
    MoveToTheEndOfTheCurrentDay,
    MoveToEndOfCurrentServicePointHours,
    MoveToBeginningOfNextOpenServicePointHours,
}

/// Anchor for a renewal's due date computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenewFrom {
    #[default]
    CurrentDueDate,
    SystemDate,
}

/// Rolling (period arithmetic) vs. fixed (schedule lookup) due dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "profileId", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanProfile {
    Rolling { period: Period },
    Fixed { schedule: FixedDueDateSchedule },
}

/// A loan policy value snapshot, as selected by circulation rules upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPolicy {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub profile: LoanProfile,
    pub closed_library_strategy: ClosedLibraryStrategy,
    #[serde(default)]
    pub renew_from: RenewFrom,
}

impl LoanPolicy {
    /// True for rolling policies with hour/minute granularity. Fixed
    /// schedules always behave as long-term.
    pub fn is_short_term(&self) -> bool {
        match &self.profile {
            LoanProfile::Rolling { period } => period.is_short_term(),
            LoanProfile::Fixed { .. } => false,
        }
    }

    /// The candidate due date before any calendar adjustment: period
    /// arithmetic for rolling policies, schedule resolution for fixed ones.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::DueDateError::InvalidPeriod`] and
    /// [`crate::DueDateError::NoMatchingScheduleRange`]; both are policy
    /// configuration failures, fatal to the computation.
    pub fn nominal_due_date(&self, loan_start: DateTime<Utc>) -> Result<DateTime<Utc>> {
        match &self.profile {
            LoanProfile::Rolling { period } => period.add_to(loan_start),
            LoanProfile::Fixed { schedule } => schedule.resolve(loan_start),
        }
    }
}
