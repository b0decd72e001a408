//! Local wall-clock to UTC resolution around DST transitions.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Latest wall-clock instant of a day, 23:59:59.999.
pub(crate) fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 is a valid wall-clock time")
}

/// Resolve a local wall-clock datetime in `tz` to a UTC instant.
///
/// On an autumn fold the earliest of the two candidate instants wins. A
/// wall-clock time inside a spring-forward gap resolves to the first valid
/// instant after the gap (probed in 30-minute steps, which covers every
/// real-world transition size).
pub(crate) fn to_utc(tz: Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    resolve_local(tz, date.and_time(time))
}

fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let mut probe = local;
            for _ in 0..6 {
                probe += Duration::minutes(30);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                        return dt.with_timezone(&Utc);
                    }
                    LocalResult::None => continue,
                }
            }
            // Unreachable for real timezone data; interpret the wall clock
            // as UTC rather than panic.
            Utc.from_utc_datetime(&local)
        }
    }
}
