//! Budget period calculation anchored to a configurable day of month.
//!
//! A budgeting "month" runs from the anchor day at 00:00:00.000 to the day
//! before the next anchor day at 23:59:59.999, so it rarely coincides with
//! the calendar month. Everything here is a pure function of its inputs;
//! the reference instant is always passed in explicitly so computations are
//! deterministic and testable without mocking a clock.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::instrument;

/// One budgeting period. Inclusive on both ends: `start` is the anchor day at
/// midnight, `end` is the last millisecond of the day before the next anchor
/// day. Derived on every request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    /// Whether the instant falls inside this period, inclusive on both ends.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Returns the number of days in the given month using chrono.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // First day of the next month, then one day back
    let (next_year, next_month) = shift_month(year, month, 1);
    let first_day_next_month = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();

    first_day_next_month.pred_opt().unwrap().day()
}

/// Shifts a (year, month) pair by the given number of months, rolling the
/// year in either direction.
fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let months = year * 12 + (month as i32 - 1) + offset;
    (months.div_euclid(12), months.rem_euclid(12) as u32 + 1)
}

/// Resolves "day `day` of the given month" under native rollover semantics:
/// day n is the first of the month plus n-1 days. Day 31 of a 30-day month
/// therefore lands on the 1st of the following month, and day 0 is the last
/// day of the preceding month.
///
/// The spill into the next month for anchor days that exceed the month's
/// length reproduces the established behavior for short months; it is a
/// documented open question, not something to normalize to "last day of the
/// month" here.
fn rollover_date(year: i32, month: u32, day: i64) -> NaiveDate {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    first_of_month + Duration::days(day - 1)
}

/// Builds the period that starts on `anchor_day` of the given month and ends
/// the day before `anchor_day` of the following month.
fn period_starting_in(year: i32, month: u32, anchor_day: u32) -> Period {
    let start_date = rollover_date(year, month, anchor_day as i64);
    let (end_year, end_month) = shift_month(year, month, 1);
    let end_date = rollover_date(end_year, end_month, anchor_day as i64 - 1);

    Period {
        start: start_date.and_time(NaiveTime::MIN),
        end: end_date.and_hms_milli_opt(23, 59, 59, 999).unwrap(),
    }
}

/// Computes the period containing `reference`, shifted `months_back` months
/// into the past (0 = the current period).
fn period_at(anchor_day: u32, reference: NaiveDateTime, months_back: i32) -> Period {
    // If the reference day has not reached the anchor yet, the containing
    // period started in the previous month.
    let rule_offset = if reference.day() >= anchor_day { 0 } else { -1 };
    let (year, month) = shift_month(
        reference.year(),
        reference.month(),
        rule_offset - months_back,
    );

    period_starting_in(year, month, anchor_day)
}

/// Computes the budgeting period containing `reference` for the given anchor
/// day (1-31). The caller is responsible for validating `anchor_day`; the
/// service entry points in this crate do so before calling in.
#[instrument]
pub fn current_period(anchor_day: u32, reference: NaiveDateTime) -> Period {
    period_at(anchor_day, reference, 0)
}

/// Enumerates `count` periods walking backward month by month from the one
/// containing `reference`. Index 0 is the current period; the result is
/// ordered most-recent first. Pure function of its inputs.
#[instrument]
pub fn periods_before(anchor_day: u32, reference: NaiveDateTime, count: usize) -> Vec<Period> {
    (0..count)
        .map(|i| period_at(anchor_day, reference, i as i32))
        .collect()
}
