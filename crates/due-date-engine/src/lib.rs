//! # due-date-engine
//!
//! Loan due date determination for library circulation: reconcile a loan
//! policy's nominal loan period against the checkout service point's real
//! operating calendar.
//!
//! The engine is pure and stateless -- every computation takes value
//! snapshots of the policy and calendar and returns a UTC instant. Rolling
//! policies add a period (minutes through months) to the loan start; fixed
//! policies resolve a date-range schedule. The nominal result is then
//! adjusted by the policy's closed-library strategy against the opening
//! hours of the service point, handling all-day vs. partial-hours days,
//! backward/forward day walks and midnight rollover.
//!
//! ## Modules
//!
//! - [`period`] — rolling period arithmetic (minutes/hours/days/weeks/months)
//! - [`schedule`] — fixed due date schedule resolution
//! - [`calendar`] — opening-hours calendar model and traversal
//! - [`adjust`] — closed-library due date adjustment (the strategy machine)
//! - [`determine`] — orchestration and the calendar provider seam
//! - [`policy`] — loan policy model
//! - [`request_rules`] — static request-type / item-status whitelist
//! - [`error`] — error types

pub mod adjust;
pub mod calendar;
pub mod determine;
pub mod error;
mod localtime;
pub mod period;
pub mod policy;
pub mod request_rules;
pub mod schedule;

pub use adjust::adjust_due_date;
pub use calendar::{OpeningCalendar, OpeningDay, OpeningHour};
pub use determine::{
    determine_due_date, determine_renewal_due_date, CalendarProvider, DeterminedDueDate,
};
pub use error::DueDateError;
pub use period::{Interval, Period};
pub use policy::{ClosedLibraryStrategy, LoanPolicy, LoanProfile, RenewFrom};
pub use schedule::{FixedDueDateSchedule, ScheduleEntry};
