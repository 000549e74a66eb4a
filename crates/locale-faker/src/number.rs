//! Integers and fixed-precision decimals inside caller-supplied bounds.

use std::fmt::Display;

use rand::distr::uniform::SampleUniform;

use crate::error::FakerError;
use crate::random::uniform_in_range;
use crate::validation::check_range;

/// Largest number of fractional digits [`decimal`] and [`decimal_string`]
/// accept.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// `2^63`, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Largest float that still fits in an `i64`.
const I64_MAX_AS_F64: f64 = 9_223_372_036_854_774_784.0;

mod sealed {
    pub trait Sealed {}
}

/// Integer types [`integer`] can draw.
///
/// Implemented for every signed and unsigned integer from 8 to 64 bits.
pub trait Integer: sealed::Sealed + SampleUniform + PartialOrd + Display + Copy {}

macro_rules! integer_types {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Integer for $ty {}
        )+
    };
}

integer_types!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Floating-point types [`decimal`] and [`decimal_string`] accept.
pub trait Float: sealed::Sealed + PartialOrd + Display + Copy {
    /// Widens the value to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` to this type.
    fn from_f64(value: f64) -> Self;
}

impl sealed::Sealed for f64 {}

impl Float for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl sealed::Sealed for f32 {}

impl Float for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing to f32 is the purpose of this conversion"
    )]
    fn from_f64(value: f64) -> Self {
        value as Self
    }
}

/// Draws an integer in `[start, end]`.
///
/// # Errors
///
/// Returns [`FakerError::InvalidRange`] when `start > end`.
///
/// # Example
///
/// ```
/// use locale_faker::integer;
///
/// let roll: u8 = integer(1, 6).expect("valid range");
/// assert!((1..=6).contains(&roll));
///
/// let err = integer(9_i64, 1).expect_err("reversed");
/// assert_eq!(
///     err.to_string(),
///     "integer: Invalid range: 'end' must be greater than 'start'. (Current: 9, 1)"
/// );
/// ```
pub fn integer<T: Integer>(start: T, end: T) -> Result<T, FakerError> {
    check_range("integer", ("start", &start), ("end", &end))?;
    Ok(uniform_in_range(start, end))
}

/// Draws a decimal in `[start, end]` rounded to `decimal_places` digits.
///
/// The result is a float, so its printed form may not show exactly
/// `decimal_places` digits. Use [`decimal_string`] for exact formatting.
///
/// # Errors
///
/// Returns [`FakerError`] when the range is reversed or not finite, when
/// `decimal_places` exceeds [`MAX_DECIMAL_PLACES`], or when no value with
/// that precision lies in the range.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "scaling a drawn integer back into the float range"
)]
pub fn decimal<F: Float>(start: F, end: F, decimal_places: u32) -> Result<F, FakerError> {
    let (low, high) = scaled_bounds("decimal", start, end, decimal_places)?;
    let raw = uniform_in_range(low, high);
    Ok(F::from_f64(raw as f64 / scale(decimal_places)))
}

/// Draws a decimal in `[start, end]` formatted with exactly
/// `decimal_places` fractional digits.
///
/// # Errors
///
/// Returns [`FakerError`] when the range is reversed or not finite, when
/// `decimal_places` exceeds [`MAX_DECIMAL_PLACES`], or when no value with
/// that precision lies in the range.
///
/// # Example
///
/// ```
/// use locale_faker::decimal_string;
///
/// let price = decimal_string(0.5_f64, 0.5, 2).expect("valid range");
/// assert_eq!(price, "0.50");
///
/// assert!(decimal_string(0.01_f64, 0.09, 1).is_err());
/// ```
pub fn decimal_string<F: Float>(
    start: F,
    end: F,
    decimal_places: u32,
) -> Result<String, FakerError> {
    let (low, high) = scaled_bounds("decimal_string", start, end, decimal_places)?;
    Ok(format_scaled(uniform_in_range(low, high), decimal_places))
}

fn scale(decimal_places: u32) -> f64 {
    10_f64.powi(i32::try_from(decimal_places).unwrap_or(0))
}

/// Converts `[start, end]` into the integer range `[ceil(start * 10^p),
/// floor(end * 10^p)]`, clipped to what an `i64` holds.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "bounds are finite, rounded and inside the i64 range before the cast"
)]
fn scaled_bounds<F: Float>(
    function: &'static str,
    start: F,
    end: F,
    decimal_places: u32,
) -> Result<(i64, i64), FakerError> {
    if decimal_places > MAX_DECIMAL_PLACES {
        return Err(FakerError::DecimalPlacesOutOfRange {
            function,
            decimal_places,
            max: MAX_DECIMAL_PLACES,
        });
    }
    let (low, high) = (start.to_f64(), end.to_f64());
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(FakerError::InvalidRange {
            function,
            start_name: "start",
            end_name: "end",
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    let factor = scale(decimal_places);
    let scaled_low = (low * factor).ceil();
    let scaled_high = (high * factor).floor();
    // A range wholly beyond the i64 range has no value the draw can return
    if scaled_low > scaled_high || scaled_low >= I64_BOUND || scaled_high < -I64_BOUND {
        return Err(FakerError::NoDecimalInRange { function });
    }
    Ok((
        scaled_low.max(-I64_BOUND) as i64,
        scaled_high.min(I64_MAX_AS_F64) as i64,
    ))
}

/// Renders `raw / 10^decimal_places` without going through a float.
fn format_scaled(raw: i64, decimal_places: u32) -> String {
    if decimal_places == 0 {
        return raw.to_string();
    }
    let factor = 10_u64.pow(decimal_places);
    let magnitude = raw.unsigned_abs();
    let sign = if raw < 0 { "-" } else { "" };
    let width = usize::try_from(decimal_places).unwrap_or_default();
    format!(
        "{sign}{}.{:0width$}",
        magnitude.div_euclid(factor),
        magnitude.rem_euclid(factor)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-5_i64, 5_i64)]
    #[case(i64::MIN, i64::MAX)]
    #[case(7, 7)]
    fn integers_stay_in_range(#[case] start: i64, #[case] end: i64) {
        for _ in 0..100 {
            let value = integer(start, end).expect("valid range");
            assert!((start..=end).contains(&value));
        }
    }

    #[test]
    fn every_width_is_supported() {
        assert!(integer(0_u8, u8::MAX).is_ok());
        assert!(integer(i16::MIN, 0).is_ok());
        assert!(integer(0_u32, 10).is_ok());
        assert!(integer(0_u64, u64::MAX).is_ok());
        assert!(integer(-1_i8, 1).is_ok());
    }

    #[rstest]
    #[case(12_345, 2, "123.45")]
    #[case(-5, 3, "-0.005")]
    #[case(7, 0, "7")]
    #[case(100, 2, "1.00")]
    fn scaled_values_format_exactly(
        #[case] raw: i64,
        #[case] places: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(format_scaled(raw, places), expected);
    }

    #[test]
    fn decimal_strings_keep_every_digit() {
        for _ in 0..100 {
            let value = decimal_string(1.0_f64, 2.0, 3).expect("valid range");
            let (whole, fraction) = value.split_once('.').expect("has a point");
            assert_eq!(fraction.len(), 3);
            assert!(whole == "1" || value == "2.000", "{value}");
        }
    }

    #[test]
    fn decimals_lie_in_range() {
        for _ in 0..100 {
            let value = decimal(-1.5_f32, 1.5, 1).expect("valid range");
            assert!((-1.5..=1.5).contains(&value));
        }
    }

    #[test]
    fn precision_and_empty_ranges_are_rejected() {
        let err = decimal_string(0.0_f64, 1.0, 16).expect_err("too precise");
        assert_eq!(
            err.to_string(),
            "decimal_string: Invalid range: 'decimal_places' must be at most 15. (Current: 16)"
        );
        let none = decimal(0.11_f64, 0.19, 1).expect_err("no tenth in range");
        assert_eq!(none, FakerError::NoDecimalInRange { function: "decimal" });
    }

    #[rstest]
    #[case(1e20, 2e20)]
    #[case(-2e20, -1e20)]
    fn ranges_beyond_i64_are_rejected(#[case] start: f64, #[case] end: f64) {
        assert_eq!(
            decimal_string(start, end, 0).expect_err("beyond i64"),
            FakerError::NoDecimalInRange {
                function: "decimal_string"
            }
        );
        assert_eq!(
            decimal(start, end, 0).expect_err("beyond i64"),
            FakerError::NoDecimalInRange { function: "decimal" }
        );
    }

    #[test]
    fn wide_ranges_are_clipped_inside_their_bounds() {
        for _ in 0..100 {
            let value = decimal(-1e20_f64, 1e20, 2).expect("valid range");
            assert!((-1e20..=1e20).contains(&value), "{value}");
            let text = decimal_string(-1e20_f64, 1e20, 0).expect("valid range");
            let parsed: f64 = text.parse().expect("decimal text");
            assert!((-1e20..=1e20).contains(&parsed), "{text}");
        }
    }
}
