//! Dates and times inside caller-supplied bounds.
//!
//! Bounds are strings in [`DATE_FORMAT`] and [`TIME_FORMAT`] and are checked
//! before anything is drawn. Dates can be restricted to a set of weekdays.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Timelike};

use crate::choice::DaysOfWeek;
use crate::error::FakerError;
use crate::random::uniform_in_range;
use crate::select::pick_one;
use crate::validation::{
    DATE_FORMAT, TIME_FORMAT, check_not_empty, check_range, parse_date, parse_time,
};

/// Earliest date drawn by default.
pub const DEFAULT_START_DATE: &str = "1970-01-01";

/// Latest date drawn by default.
pub const DEFAULT_END_DATE: &str = "2050-12-31";

/// Earliest time drawn by default.
pub const DEFAULT_START_TIME: &str = "00:00:00";

/// Latest time drawn by default.
pub const DEFAULT_END_TIME: &str = "23:59:59";

/// Spans shorter than this many days are enumerated instead of searched.
const ENUMERATION_SPAN: i64 = 7;

/// Draws a date between `start` and `end`, inclusive, that falls on one of
/// `days`.
///
/// # Errors
///
/// Returns [`FakerError`] when a bound is empty, malformed, or outside the
/// calendar, when `start` is after `end`, or when no allowed weekday occurs
/// in the range.
///
/// # Example
///
/// ```
/// use locale_faker::{DaysOfWeek, date};
///
/// // 2024-06-01 is a Saturday.
/// let day = date("2024-06-01", "2024-06-03", DaysOfWeek::WEEKDAYS).expect("valid range");
/// assert_eq!(day, "2024-06-03");
///
/// let err = date("2024-02-30", "2024-03-01", DaysOfWeek::all()).expect_err("no such day");
/// assert!(err.to_string().starts_with("date: Invalid date"));
/// ```
pub fn date(start: &str, end: &str, days: DaysOfWeek) -> Result<String, FakerError> {
    let drawn = draw_date("date", start, end, days)?;
    Ok(drawn.format(DATE_FORMAT).to_string())
}

/// Draws a time of day between `start` and `end`, inclusive, to the second.
///
/// # Errors
///
/// Returns [`FakerError`] when a bound is empty, malformed, or outside the
/// clock, or when `start` is after `end`.
pub fn time(start: &str, end: &str) -> Result<String, FakerError> {
    let drawn = draw_time("time", start, end)?;
    Ok(drawn.format(TIME_FORMAT).to_string())
}

/// Draws a date and a time independently and joins them with a space.
///
/// # Errors
///
/// Returns [`FakerError`] under the conditions of [`date`] and [`time`].
///
/// # Example
///
/// ```
/// use locale_faker::{
///     DEFAULT_END_DATE, DEFAULT_END_TIME, DEFAULT_START_DATE, DEFAULT_START_TIME, DaysOfWeek,
///     datetime,
/// };
///
/// let stamp = datetime(
///     DEFAULT_START_DATE,
///     DEFAULT_END_DATE,
///     DEFAULT_START_TIME,
///     DEFAULT_END_TIME,
///     DaysOfWeek::all(),
/// )
/// .expect("default bounds");
/// assert_eq!(stamp.len(), "1970-01-01 00:00:00".len());
/// ```
pub fn datetime(
    start_date: &str,
    end_date: &str,
    start_time: &str,
    end_time: &str,
    days: DaysOfWeek,
) -> Result<String, FakerError> {
    let drawn_time = draw_time("datetime", start_time, end_time)?;
    let drawn_date = draw_date("datetime", start_date, end_date, days)?;
    Ok(format!(
        "{} {}",
        drawn_date.format(DATE_FORMAT),
        drawn_time.format(TIME_FORMAT)
    ))
}

fn draw_date(
    function: &'static str,
    start: &str,
    end: &str,
    days: DaysOfWeek,
) -> Result<NaiveDate, FakerError> {
    check_not_empty(function, "start", start)?;
    check_not_empty(function, "end", end)?;
    let first = parse_date(function, start)?;
    let last = parse_date(function, end)?;
    check_range(function, ("start", &first), ("end", &last))?;

    let span = last.signed_duration_since(first).num_days();
    if span < ENUMERATION_SPAN {
        let candidates: Vec<NaiveDate> = first
            .iter_days()
            .take_while(|day| *day <= last)
            .filter(|day| days.allows(day.weekday()))
            .collect();
        if candidates.is_empty() {
            return Err(FakerError::NoMatchingWeekday {
                function,
                start: start.to_owned(),
                end: end.to_owned(),
            });
        }
        return Ok(*pick_one(&candidates));
    }

    let anchor = offset_from(first, uniform_in_range(0, span));
    search_outwards(anchor, first, last, span, days)
        .ok_or(FakerError::WeekdaySearchExhausted { function })
}

/// Looks for an allowed weekday at `anchor`, then alternately one step later
/// and one step earlier, staying inside `[first, last]`.
fn search_outwards(
    anchor: Option<NaiveDate>,
    first: NaiveDate,
    last: NaiveDate,
    span: i64,
    days: DaysOfWeek,
) -> Option<NaiveDate> {
    let start = anchor?;
    let allowed = |day: &NaiveDate| (first..=last).contains(day) && days.allows(day.weekday());
    if allowed(&start) {
        return Some(start);
    }
    (1..=span).find_map(|step| {
        let forward = offset_from(start, step).filter(allowed);
        forward.or_else(|| offset_from(start, -step).filter(allowed))
    })
}

fn offset_from(day: NaiveDate, offset: i64) -> Option<NaiveDate> {
    day.checked_add_signed(TimeDelta::try_days(offset)?)
}

fn draw_time(function: &'static str, start: &str, end: &str) -> Result<NaiveTime, FakerError> {
    check_not_empty(function, "start", start)?;
    check_not_empty(function, "end", end)?;
    let first = parse_time(function, start)?;
    let last = parse_time(function, end)?;
    check_range(function, ("start", &first), ("end", &last))?;

    let seconds = uniform_in_range(
        first.num_seconds_from_midnight(),
        last.num_seconds_from_midnight(),
    );
    Ok(NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(first))
}
