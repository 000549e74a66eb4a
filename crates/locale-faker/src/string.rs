//! Free-form strings: list items, filler text, and UUIDs.

use fake::Fake;
use fake::faker::lorem::en::Paragraph;
use uuid::Builder;

use crate::error::FakerError;
use crate::random::{fill_bytes, uniform_in_range, with_engine};
use crate::select::pick_one;
use crate::template::split_and_trim;
use crate::validation::check_range;

/// Sentences per lorem paragraph used as filler source.
const PARAGRAPH_SENTENCES: std::ops::Range<usize> = 3..6;

/// Picks one of the `delimiter`-separated entries of `list`. A list with no
/// entries gives an empty string.
///
/// # Example
///
/// ```
/// use locale_faker::enum_item;
///
/// assert!(["red", "green"].contains(&enum_item("red, green", ',').as_str()));
/// assert_eq!(enum_item("", ','), "");
/// ```
#[must_use]
pub fn enum_item(list: &str, delimiter: char) -> String {
    let entries = split_and_trim(list, delimiter);
    if entries.is_empty() {
        return String::new();
    }
    pick_one(&entries).clone()
}

/// Draws lorem ipsum text between `min_chars` and `max_chars` characters
/// long, inclusive.
///
/// # Errors
///
/// Returns [`FakerError::InvalidRange`] when `min_chars > max_chars`.
///
/// # Example
///
/// ```
/// use locale_faker::text;
///
/// let filler = text(20, 40).expect("valid range");
/// assert!((20..=40).contains(&filler.chars().count()));
/// ```
pub fn text(min_chars: usize, max_chars: usize) -> Result<String, FakerError> {
    check_range("text", ("min_chars", &min_chars), ("max_chars", &max_chars))?;

    let source: String =
        with_engine(|engine| Paragraph(PARAGRAPH_SENTENCES).fake_with_rng(engine));
    let mut filler = source.clone();
    while filler.chars().count() < min_chars {
        filler.push(' ');
        filler.push_str(&source);
    }

    let available = filler.chars().count();
    let length = uniform_in_range(min_chars, max_chars.min(available));
    Ok(filler.chars().take(length).collect())
}

/// Draws a version 4 UUID, hyphenated or as 32 bare hex digits.
///
/// # Example
///
/// ```
/// use locale_faker::uuid;
///
/// let id = uuid(true);
/// assert_eq!(id.len(), 36);
/// assert_eq!(id.chars().nth(14), Some('4'));
/// assert_eq!(uuid(false).len(), 32);
/// ```
#[must_use]
pub fn uuid(with_hyphens: bool) -> String {
    let mut bytes = [0_u8; 16];
    fill_bytes(&mut bytes);
    let id = Builder::from_random_bytes(bytes).into_uuid();
    if with_hyphens {
        id.hyphenated().to_string()
    } else {
        id.simple().to_string()
    }
}
