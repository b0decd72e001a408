//! Closed-library due date adjustment -- the decision procedure reconciling a
//! nominal due date against the service point's opening calendar.
//!
//! All strategy dispatch lives in one `match` so every temporal edge case is
//! auditable in one place. The function is total: every degrade path (missing
//! calendar, a walk exhausting the supplied window, a strategy paired with
//! the wrong loan granularity) yields the unchanged candidate rather than an
//! error.
//!
//! Date comparisons happen in the service point's local timezone; the result
//! is always a UTC instant.
//!
//! Interval-edge rule (held invariant, pinned by boundary tests): for the
//! next-open-hours rollover, the due time is the earliest interval start
//! greater than or equal to the offset time on the current day. An offset
//! exactly on an interval start stays there; strictly inside an interval or
//! in a gap it rounds up to the next start; past the last start it rolls
//! over to the next open day.

use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use log::debug;

use crate::calendar::{OpeningCalendar, OpeningDay};
use crate::localtime::to_utc;
use crate::policy::ClosedLibraryStrategy;

/// Adjust `candidate` per the policy's closed-library strategy.
///
/// `loan_start` anchors the short-term strategies (their "current day" is the
/// day of computation, never the candidate's day). `short_term` is true when
/// the originating period has hour/minute granularity. A `None` or empty
/// `calendar` keeps the candidate unchanged.
pub fn adjust_due_date(
    candidate: DateTime<Utc>,
    loan_start: DateTime<Utc>,
    calendar: Option<&OpeningCalendar>,
    strategy: ClosedLibraryStrategy,
    short_term: bool,
    tz: Tz,
) -> DateTime<Utc> {
    let calendar = match calendar.filter(|c| !c.is_empty()) {
        Some(calendar) => calendar,
        None => return candidate,
    };

    use ClosedLibraryStrategy::*;
    match strategy {
        KeepTheCurrentDueDate | KeepTheCurrentDueDateTime => candidate,
        MoveToTheEndOfThePreviousOpenDay => end_of_previous_open_day(candidate, calendar, tz),
        MoveToTheEndOfTheNextOpenDay => end_of_next_open_day(candidate, calendar, tz),
        MoveToTheEndOfTheCurrentDay => end_of_current_day(candidate, calendar, tz),
        MoveToEndOfCurrentServicePointHours | MoveToBeginningOfNextOpenServicePointHours
            if !short_term =>
        {
            debug!("short-term strategy {strategy:?} paired with a long-term period; keeping candidate");
            candidate
        }
        MoveToEndOfCurrentServicePointHours => {
            end_of_current_service_point_hours(candidate, loan_start, calendar, tz)
        }
        MoveToBeginningOfNextOpenServicePointHours => {
            beginning_of_next_open_hours(candidate, loan_start, calendar, tz)
        }
    }
}

/// Open candidate day: unchanged. Closed: close time of the nearest open day
/// strictly before it.
fn end_of_previous_open_day(
    candidate: DateTime<Utc>,
    calendar: &OpeningCalendar,
    tz: Tz,
) -> DateTime<Utc> {
    let date = candidate.with_timezone(&tz).date_naive();
    match calendar.day(date) {
        Some(day) if day.open => candidate,
        Some(_) => calendar
            .previous_open_day(date)
            .map(|day| close_instant(day, tz))
            .unwrap_or_else(|| exhausted(candidate, date)),
        None => exhausted(candidate, date),
    }
}

/// Open candidate day: unchanged. Closed: close time of the nearest open day
/// strictly after it.
fn end_of_next_open_day(
    candidate: DateTime<Utc>,
    calendar: &OpeningCalendar,
    tz: Tz,
) -> DateTime<Utc> {
    let date = candidate.with_timezone(&tz).date_naive();
    match calendar.day(date) {
        Some(day) if day.open => candidate,
        Some(_) => calendar
            .next_open_day(date)
            .map(|day| close_instant(day, tz))
            .unwrap_or_else(|| exhausted(candidate, date)),
        None => exhausted(candidate, date),
    }
}

/// Truncate to the candidate day's close time, even when the candidate's
/// time-of-day lies inside open hours (the strategy shortens the loan rather
/// than push it to another day). A closed candidate day falls back to the
/// backward walk with the candidate's day as origin.
fn end_of_current_day(
    candidate: DateTime<Utc>,
    calendar: &OpeningCalendar,
    tz: Tz,
) -> DateTime<Utc> {
    let date = candidate.with_timezone(&tz).date_naive();
    match calendar.day(date) {
        Some(day) if day.open => close_instant(day, tz),
        Some(_) => calendar
            .previous_open_day(date)
            .map(|day| close_instant(day, tz))
            .unwrap_or_else(|| exhausted(candidate, date)),
        None => exhausted(candidate, date),
    }
}

/// Truncate to the close time of the day the loan is made on. For a day with
/// hour intervals that is the last interval's end; all-day and closed days
/// both end at local 23:59:59.999.
fn end_of_current_service_point_hours(
    candidate: DateTime<Utc>,
    loan_start: DateTime<Utc>,
    calendar: &OpeningCalendar,
    tz: Tz,
) -> DateTime<Utc> {
    let date = loan_start.with_timezone(&tz).date_naive();
    match calendar.day(date) {
        Some(day) => to_utc(tz, date, day.close_time()),
        None => exhausted(candidate, date),
    }
}

/// Move to the start of the next open service point hours, rolling over past
/// midnight when the offset leaves the current day.
///
/// The offset instant is the candidate itself: rolling short-term candidates
/// are the loan start plus an exact elapsed-time period, so the candidate's
/// local time-of-day is the "current time plus period" the strategy reasons
/// about.
fn beginning_of_next_open_hours(
    candidate: DateTime<Utc>,
    loan_start: DateTime<Utc>,
    calendar: &OpeningCalendar,
    tz: Tz,
) -> DateTime<Utc> {
    let current_date = loan_start.with_timezone(&tz).date_naive();
    let offset = candidate.with_timezone(&tz).naive_local();

    let current = match calendar.day(current_date) {
        Some(day) => day,
        None => return exhausted(candidate, current_date),
    };

    if current.open && current.all_day {
        // Open from midnight to midnight: plain elapsed-time addition, even
        // when the offset crosses into the next day.
        return candidate;
    }

    if current.open && offset.date() == current_date {
        let time = offset.time();
        if let Some(hour) = current.hours.iter().find(|h| h.start_time >= time) {
            return to_utc(tz, current_date, hour.start_time);
        }
        // Past the last interval's start: the next open hours are on a
        // later day.
    }

    match calendar.next_open_day(current_date) {
        Some(next) => {
            let time = if next.all_day {
                NaiveTime::MIN
            } else {
                next.open_time()
            };
            to_utc(tz, next.date, time)
        }
        None => exhausted(candidate, current_date),
    }
}

fn close_instant(day: &OpeningDay, tz: Tz) -> DateTime<Utc> {
    to_utc(tz, day.date, day.close_time())
}

fn exhausted(candidate: DateTime<Utc>, around: chrono::NaiveDate) -> DateTime<Utc> {
    debug!("opening calendar window exhausted around {around}; keeping candidate");
    candidate
}
