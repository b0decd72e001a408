//! Due date determination -- the orchestrator composing period arithmetic,
//! fixed-schedule resolution and closed-library adjustment.
//!
//! Stateless and synchronous: the only external dependency is the opening
//! calendar lookup, consumed through [`CalendarProvider`]. Lookup failure and
//! empty data degrade identically (unchanged candidate, warn-level log); the
//! engine never retries -- retry/backoff belongs to the provider.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::adjust::adjust_due_date;
use crate::calendar::OpeningCalendar;
use crate::error::Result;
use crate::policy::{LoanPolicy, RenewFrom};

/// Source of opening calendars for service points.
///
/// Implementations fetch from an external scheduling service. The requested
/// `[from, to]` date window covers the loan start and candidate due dates;
/// providers should pad it with their own search horizon (several weeks) so
/// the backward/forward day walks can terminate on an open day. Return
/// `None` on lookup failure or when no calendar exists -- both degrade to the
/// unadjusted due date.
pub trait CalendarProvider {
    fn opening_calendar(
        &self,
        service_point_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Option<OpeningCalendar>;
}

/// The finalized due date plus the policy that produced it, for callers
/// persisting "last policy used".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeterminedDueDate {
    pub due_date: DateTime<Utc>,
    pub loan_policy_id: String,
}

/// Compute the due date of a loan made at `loan_start`.
///
/// Rolling policies add their period to the start; fixed policies resolve
/// their schedule. The nominal result is then adjusted against the service
/// point's opening calendar per the policy's closed-library strategy, and
/// returned as a UTC instant.
///
/// # Errors
///
/// [`crate::DueDateError::InvalidPeriod`] and
/// [`crate::DueDateError::NoMatchingScheduleRange`] propagate as policy
/// configuration failures. Calendar lookup problems never fail the
/// computation.
pub fn determine_due_date<C: CalendarProvider>(
    loan_start: DateTime<Utc>,
    policy: &LoanPolicy,
    service_point_id: &str,
    calendars: &C,
    tz: Tz,
) -> Result<DeterminedDueDate> {
    let candidate = policy.nominal_due_date(loan_start)?;

    let start_date = loan_start.with_timezone(&tz).date_naive();
    let candidate_date = candidate.with_timezone(&tz).date_naive();
    let calendar = calendars.opening_calendar(
        service_point_id,
        start_date.min(candidate_date),
        start_date.max(candidate_date),
    );
    if calendar.as_ref().is_none_or(|c| c.is_empty()) {
        warn!("opening calendar unavailable for service point {service_point_id}; due date kept as calculated");
    }

    let due_date = adjust_due_date(
        candidate,
        loan_start,
        calendar.as_ref(),
        policy.closed_library_strategy,
        policy.is_short_term(),
        tz,
    );

    Ok(DeterminedDueDate {
        due_date,
        loan_policy_id: policy.id.clone(),
    })
}

/// Compute the due date of a renewal, anchored per the policy's renew-from
/// setting: the loan's current due date or the system date.
pub fn determine_renewal_due_date<C: CalendarProvider>(
    system_date: DateTime<Utc>,
    current_due_date: DateTime<Utc>,
    policy: &LoanPolicy,
    service_point_id: &str,
    calendars: &C,
    tz: Tz,
) -> Result<DeterminedDueDate> {
    let start = match policy.renew_from {
        RenewFrom::CurrentDueDate => current_due_date,
        RenewFrom::SystemDate => system_date,
    };
    determine_due_date(start, policy, service_point_id, calendars, tz)
}
