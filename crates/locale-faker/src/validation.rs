//! Eager argument checks shared by the generators.
//!
//! Every check takes the name of the public function it runs on behalf of so
//! the resulting [`FakerError`] can be attributed. Date and time strings are
//! parsed field by field: layout problems, leftover input, and out-of-range
//! calendar fields are reported as distinct errors.

use std::fmt::Display;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CalendarViolation, FakerError};

/// Layout accepted for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layout accepted for times of day.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Layout accepted for card expiry dates.
pub const CARD_DATE_FORMAT: &str = "%m/%y";

/// Rejects an empty string argument.
pub(crate) fn check_not_empty(
    function: &'static str,
    name: &'static str,
    value: &str,
) -> Result<(), FakerError> {
    if value.is_empty() {
        return Err(FakerError::EmptyString { function, name });
    }
    Ok(())
}

/// Rejects a range whose start exceeds its end. Equal bounds are accepted.
pub(crate) fn check_range<T>(
    function: &'static str,
    (start_name, start): (&'static str, &T),
    (end_name, end): (&'static str, &T),
) -> Result<(), FakerError>
where
    T: PartialOrd + Display + ?Sized,
{
    if start > end {
        return Err(FakerError::InvalidRange {
            function,
            start_name,
            end_name,
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

/// Cursor over a fixed-layout numeric string such as `2024-02-29`.
struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    const fn new(value: &'a str) -> Self {
        Self { rest: value }
    }

    /// Consumes between one and `max_digits` ASCII digits.
    fn number(&mut self, max_digits: usize) -> Option<u32> {
        let width = self
            .rest
            .bytes()
            .take(max_digits)
            .take_while(u8::is_ascii_digit)
            .count();
        if width == 0 {
            return None;
        }
        let (digits, rest) = self.rest.split_at_checked(width)?;
        self.rest = rest;
        digits.parse().ok()
    }

    /// Consumes exactly `count` ASCII digits.
    fn fixed(&mut self, count: usize) -> Option<u32> {
        let before = self.rest.len();
        let value = self.number(count)?;
        (before - self.rest.len() == count).then_some(value)
    }

    fn literal(&mut self, expected: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    /// Reads `N` numbers of at most `width` digits joined by `separator`.
    fn separated<const N: usize>(&mut self, separator: char, widths: [usize; N]) -> Option<[u32; N]> {
        let mut values = [0; N];
        for (position, (slot, width)) in values.iter_mut().zip(widths).enumerate() {
            if position > 0 {
                self.literal(separator)?;
            }
            *slot = self.number(width)?;
        }
        Some(values)
    }

    fn finish(self, function: &'static str, value: &str) -> Result<(), FakerError> {
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(FakerError::TrailingCharacters {
                function,
                value: value.to_owned(),
            })
        }
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Returns the number of days in `month` of `year`.
pub(crate) const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn check_calendar_date(
    function: &'static str,
    year: i32,
    month: u32,
    day: u32,
) -> Result<(), FakerError> {
    if !(1..=12).contains(&month) {
        return Err(FakerError::InvalidCalendar {
            function,
            violation: CalendarViolation::Month { month },
        });
    }
    let max_day = days_in_month(year, month);
    if !(1..=max_day).contains(&day) {
        return Err(FakerError::InvalidCalendar {
            function,
            violation: CalendarViolation::Day {
                month,
                max_day,
                day,
            },
        });
    }
    Ok(())
}

fn invalid_format(function: &'static str, value: &str, expected: &'static str) -> FakerError {
    FakerError::InvalidFormat {
        function,
        value: value.to_owned(),
        expected,
    }
}

/// Parses a `%Y-%m-%d` date.
///
/// Years take up to four digits, months and days up to two.
pub(crate) fn parse_date(function: &'static str, value: &str) -> Result<NaiveDate, FakerError> {
    let mut fields = Fields::new(value);
    let [raw_year, month, day] = fields
        .separated('-', [4, 2, 2])
        .ok_or_else(|| invalid_format(function, value, DATE_FORMAT))?;
    fields.finish(function, value)?;

    let year =
        i32::try_from(raw_year).map_err(|_| invalid_format(function, value, DATE_FORMAT))?;
    check_calendar_date(function, year, month, day)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid_format(function, value, DATE_FORMAT))
}

/// Parses a `%H:%M:%S` time of day.
pub(crate) fn parse_time(function: &'static str, value: &str) -> Result<NaiveTime, FakerError> {
    let mut fields = Fields::new(value);
    let [hour, minute, second] = fields
        .separated(':', [2, 2, 2])
        .ok_or_else(|| invalid_format(function, value, TIME_FORMAT))?;
    fields.finish(function, value)?;

    let out_of_bounds = if hour > 23 {
        Some(CalendarViolation::Hour { hour })
    } else if minute > 59 {
        Some(CalendarViolation::Minute { minute })
    } else if second > 59 {
        Some(CalendarViolation::Second { second })
    } else {
        None
    };
    if let Some(violation) = out_of_bounds {
        return Err(FakerError::InvalidCalendar {
            function,
            violation,
        });
    }
    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| invalid_format(function, value, TIME_FORMAT))
}

/// Month of a card expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct CardMonth {
    year: i32,
    month: u32,
}

impl CardMonth {
    /// Number of months since January of year zero.
    pub(crate) fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Inverse of [`CardMonth::index`].
    pub(crate) fn from_index(index: i64) -> Self {
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) + 1;
        Self {
            year: i32::try_from(year).unwrap_or(i32::MAX),
            month: u32::try_from(month).unwrap_or(1),
        }
    }

    /// Formats the month as `MM/YY`.
    pub(crate) fn format(self) -> String {
        format!("{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

fn card_fields(fields: &mut Fields<'_>) -> Option<(u32, u32)> {
    let month = fields.number(2)?;
    fields.literal('/')?;
    let year = fields.fixed(2)?;
    Some((month, year))
}

/// Parses a `%m/%y` card expiry date.
///
/// Two-digit years `00..=68` belong to the 2000s and `69..=99` to the 1900s.
pub(crate) fn parse_card_month(
    function: &'static str,
    value: &str,
) -> Result<CardMonth, FakerError> {
    let mut fields = Fields::new(value);
    let (month, short_year) = card_fields(&mut fields)
        .ok_or_else(|| invalid_format(function, value, CARD_DATE_FORMAT))?;
    fields.finish(function, value)?;

    if !(1..=12).contains(&month) {
        return Err(FakerError::InvalidCalendar {
            function,
            violation: CalendarViolation::Month { month },
        });
    }
    let century = if short_year <= 68 { 2000 } else { 1900 };
    let year = i32::try_from(century + short_year)
        .map_err(|_| invalid_format(function, value, CARD_DATE_FORMAT))?;
    Ok(CardMonth { year, month })
}
