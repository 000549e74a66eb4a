//! Error types for the locale-faker crate.
//!
//! Generator failures are reported through [`FakerError`]. Every variant
//! carries the name of the function that rejected its input, and the rendered
//! message starts with that name so a failure can be traced without a stack
//! trace. Sample configuration failures use [`ConfigError`].

use camino::Utf8PathBuf;
use thiserror::Error;

/// Broad classification of a [`FakerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied an argument that can never produce a value.
    InvalidArgument,
    /// The arguments were well formed but no valid value exists.
    Logic,
}

/// Calendar field that failed bounds validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalendarViolation {
    /// Month outside `1..=12`.
    #[error("Invalid date: Month must be between 1 and 12. (Current: {month})")]
    Month {
        /// Month as parsed.
        month: u32,
    },
    /// Day outside the length of its month.
    #[error("Invalid date: Day in month({month}) must be between 1 and {max_day}. (Current: {day})")]
    Day {
        /// Month the day belongs to.
        month: u32,
        /// Last valid day of that month, leap years included.
        max_day: u32,
        /// Day as parsed.
        day: u32,
    },
    /// Hour outside `0..=23`.
    #[error("Invalid time: Hour must be between 0 and 23. (Current: {hour})")]
    Hour {
        /// Hour as parsed.
        hour: u32,
    },
    /// Minute outside `0..=59`.
    #[error("Invalid time: Minute must be between 0 and 59. (Current: {minute})")]
    Minute {
        /// Minute as parsed.
        minute: u32,
    },
    /// Second outside `0..=59`.
    #[error("Invalid time: Second must be between 0 and 59. (Current: {second})")]
    Second {
        /// Second as parsed.
        second: u32,
    },
}

/// Errors raised by generator functions and entity constructors.
///
/// All checks run before any random draw, so a returned error means no
/// random state was consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FakerError {
    /// A required string argument was empty.
    #[error("{function}: Invalid string: '{name}' must not be empty.")]
    EmptyString {
        /// Function that rejected the argument.
        function: &'static str,
        /// Name of the empty argument.
        name: &'static str,
    },

    /// The start of a range exceeded its end.
    #[error("{function}: Invalid range: '{end_name}' must be greater than '{start_name}'. (Current: {start}, {end})")]
    InvalidRange {
        /// Function that rejected the range.
        function: &'static str,
        /// Name of the range start argument.
        start_name: &'static str,
        /// Name of the range end argument.
        end_name: &'static str,
        /// Rendered start value.
        start: String,
        /// Rendered end value.
        end: String,
    },

    /// A date or time string did not match its expected layout.
    #[error("{function}: Invalid format: '{value}' (expected {expected}).")]
    InvalidFormat {
        /// Function that parsed the value.
        function: &'static str,
        /// The rejected input.
        value: String,
        /// Expected layout, in `strftime` notation.
        expected: &'static str,
    },

    /// A date or time string had input left over after parsing.
    #[error("{function}: Trailing characters in `{value}`.")]
    TrailingCharacters {
        /// Function that parsed the value.
        function: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A parsed date or time was outside calendar bounds.
    #[error("{function}: {violation}")]
    InvalidCalendar {
        /// Function that parsed the value.
        function: &'static str,
        /// Which field was out of bounds.
        violation: CalendarViolation,
    },

    /// More fractional digits were requested than can be represented.
    #[error("{function}: Invalid range: 'decimal_places' must be at most {max}. (Current: {decimal_places})")]
    DecimalPlacesOutOfRange {
        /// Function that rejected the argument.
        function: &'static str,
        /// Requested number of fractional digits.
        decimal_places: u32,
        /// Largest supported number of fractional digits.
        max: u32,
    },

    /// No value with the requested precision lies inside the range.
    #[error("{function}: No possible value in range with the specified decimal_places.")]
    NoDecimalInRange {
        /// Function that rejected the range.
        function: &'static str,
    },

    /// A short date span contains none of the allowed weekdays.
    #[error("{function}: No matching weekday in range '{start}' to '{end}'.")]
    NoMatchingWeekday {
        /// Function that searched the span.
        function: &'static str,
        /// Start of the span as supplied.
        start: String,
        /// End of the span as supplied.
        end: String,
    },

    /// A long date span was searched end to end without a weekday match.
    #[error("{function}: Unable to find a valid weekday in the expanded search.")]
    WeekdaySearchExhausted {
        /// Function that searched the span.
        function: &'static str,
    },
}

impl FakerError {
    /// Classifies the error as a caller mistake or a logic failure.
    ///
    /// # Example
    ///
    /// ```
    /// use locale_faker::{ErrorKind, FakerError};
    ///
    /// let err = FakerError::WeekdaySearchExhausted { function: "date" };
    /// assert_eq!(err.kind(), ErrorKind::Logic);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::WeekdaySearchExhausted { .. } => ErrorKind::Logic,
            Self::EmptyString { .. }
            | Self::InvalidRange { .. }
            | Self::InvalidFormat { .. }
            | Self::TrailingCharacters { .. }
            | Self::InvalidCalendar { .. }
            | Self::DecimalPlacesOutOfRange { .. }
            | Self::NoDecimalInRange { .. }
            | Self::NoMatchingWeekday { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Returns the name of the function that raised the error.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        match self {
            Self::EmptyString { function, .. }
            | Self::InvalidRange { function, .. }
            | Self::InvalidFormat { function, .. }
            | Self::TrailingCharacters { function, .. }
            | Self::InvalidCalendar { function, .. }
            | Self::DecimalPlacesOutOfRange { function, .. }
            | Self::NoDecimalInRange { function }
            | Self::NoMatchingWeekday { function, .. }
            | Self::WeekdaySearchExhausted { function } => function,
        }
    }
}

/// Errors that can occur when loading a sample configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file at '{path}': {message}")]
    IoError {
        /// Path to the configuration file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The configuration JSON is malformed or missing required fields.
    #[error("invalid config JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The configuration version is not supported.
    #[error("unsupported config version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the configuration.
        actual: u32,
    },

    /// The record count is outside the supported bounds.
    #[error("record count must be between {min} and {max}, found {actual}")]
    CountOutOfRange {
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
        /// Count found in the configuration.
        actual: usize,
    },

    /// A vocabulary list that must be non-empty was empty.
    #[error("config field '{field}' must list at least one entry")]
    EmptyList {
        /// Name of the JSON field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_formats_with_function_prefix() {
        let err = FakerError::EmptyString {
            function: "email",
            name: "domains",
        };
        assert_eq!(
            err.to_string(),
            "email: Invalid string: 'domains' must not be empty."
        );
    }

    #[test]
    fn invalid_range_formats_both_bounds() {
        let err = FakerError::InvalidRange {
            function: "integer",
            start_name: "start",
            end_name: "end",
            start: "9".to_owned(),
            end: "1".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "integer: Invalid range: 'end' must be greater than 'start'. (Current: 9, 1)"
        );
    }

    #[test]
    fn invalid_format_names_expected_layout() {
        let err = FakerError::InvalidFormat {
            function: "date",
            value: "2024/01/01".to_owned(),
            expected: "%Y-%m-%d",
        };
        assert_eq!(
            err.to_string(),
            "date: Invalid format: '2024/01/01' (expected %Y-%m-%d)."
        );
    }

    #[test]
    fn trailing_characters_formats_correctly() {
        let err = FakerError::TrailingCharacters {
            function: "time",
            value: "12:00:00pm".to_owned(),
        };
        assert_eq!(err.to_string(), "time: Trailing characters in `12:00:00pm`.");
    }

    #[test]
    fn calendar_day_violation_formats_correctly() {
        let err = FakerError::InvalidCalendar {
            function: "date",
            violation: CalendarViolation::Day {
                month: 2,
                max_day: 28,
                day: 29,
            },
        };
        assert_eq!(
            err.to_string(),
            "date: Invalid date: Day in month(2) must be between 1 and 28. (Current: 29)"
        );
    }

    #[test]
    fn weekday_exhaustion_is_a_logic_error() {
        let err = FakerError::WeekdaySearchExhausted { function: "date" };
        assert_eq!(err.kind(), ErrorKind::Logic);
        assert_eq!(
            err.to_string(),
            "date: Unable to find a valid weekday in the expanded search."
        );
    }

    #[test]
    fn short_span_without_weekday_is_invalid_argument() {
        let err = FakerError::NoMatchingWeekday {
            function: "date",
            start: "2024-01-01".to_owned(),
            end: "2024-01-02".to_owned(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.function(), "date");
    }

    #[test]
    fn config_error_version_formats_correctly() {
        let err = ConfigError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported config version: expected 1, found 3"
        );
    }

    #[test]
    fn config_error_io_formats_correctly() {
        let err = ConfigError::IoError {
            path: Utf8PathBuf::from("/tmp/sample.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file at '/tmp/sample.json': file not found"
        );
    }
}
