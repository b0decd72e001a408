//! Benchmark for end-to-end due date determination over a month-long
//! calendar window.

use std::hint::black_box;

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use due_date_engine::{
    determine_due_date, CalendarProvider, ClosedLibraryStrategy, Interval, LoanPolicy,
    LoanProfile, OpeningCalendar, OpeningDay, OpeningHour, Period, RenewFrom,
};

struct StaticCalendar(OpeningCalendar);

impl CalendarProvider for StaticCalendar {
    fn opening_calendar(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Option<OpeningCalendar> {
        Some(self.0.clone())
    }
}

/// 30 days, weekends closed, weekdays split hours.
fn month_calendar() -> OpeningCalendar {
    let base = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let morning = OpeningHour::new(
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
    );
    let afternoon = OpeningHour::new(
        NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
    );
    let days = (0..30)
        .map(|offset| {
            let date = base + Duration::days(offset);
            match offset % 7 {
                6 | 0 => OpeningDay::closed(date),
                _ => OpeningDay::with_hours(date, vec![morning, afternoon]),
            }
        })
        .collect();
    OpeningCalendar::new(days).unwrap()
}

fn bench_determine(c: &mut Criterion) {
    let provider = StaticCalendar(month_calendar());
    let loan_start = Utc.with_ymd_and_hms(2026, 3, 6, 16, 0, 0).unwrap();

    let long_term = LoanPolicy {
        id: "bench-long".to_string(),
        name: "two week rolling".to_string(),
        profile: LoanProfile::Rolling {
            period: Period::new(2, Interval::Weeks),
        },
        closed_library_strategy: ClosedLibraryStrategy::MoveToTheEndOfThePreviousOpenDay,
        renew_from: RenewFrom::default(),
    };
    c.bench_function("determine_long_term", |b| {
        b.iter(|| {
            determine_due_date(
                black_box(loan_start),
                &long_term,
                "sp-1",
                &provider,
                chrono_tz::UTC,
            )
        })
    });

    let short_term = LoanPolicy {
        id: "bench-short".to_string(),
        name: "five hour rolling".to_string(),
        profile: LoanProfile::Rolling {
            period: Period::new(5, Interval::Hours),
        },
        closed_library_strategy: ClosedLibraryStrategy::MoveToBeginningOfNextOpenServicePointHours,
        renew_from: RenewFrom::default(),
    };
    c.bench_function("determine_short_term_rollover", |b| {
        b.iter(|| {
            determine_due_date(
                black_box(loan_start),
                &short_term,
                "sp-1",
                &provider,
                chrono_tz::UTC,
            )
        })
    });
}

criterion_group!(benches, bench_determine);
criterion_main!(benches);
