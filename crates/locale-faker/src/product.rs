//! Product names, categories, colors, sizes, and barcodes.

use crate::choice::{BarcodeTypes, Languages};
use crate::data::product::{SIZES, barcode_patterns, categories, colors, name_affixes};
use crate::error::FakerError;
use crate::select::{pick_from_mask, pick_listed, pick_one};
use crate::template::{replace_digits, replace_placeholder};

/// Wraps one of the `delimiter`-separated `keywords` in an edition affix of
/// one of `languages`, such as `Aurora Pro Max`.
///
/// # Errors
///
/// Returns [`FakerError::EmptyString`] when `keywords` names no keyword.
///
/// # Example
///
/// ```
/// use locale_faker::{Languages, product_name};
///
/// let name = product_name(Languages::ENGLISH, "Aurora", ',').expect("keyword given");
/// assert!(name.contains("Aurora"));
/// ```
pub fn product_name(
    languages: Languages,
    keywords: &str,
    delimiter: char,
) -> Result<String, FakerError> {
    let keyword = pick_listed(keywords, delimiter, "product_name", "keywords")?;
    let language = pick_from_mask(languages);
    Ok(replace_placeholder(*pick_one(name_affixes(language)), &keyword))
}

/// Draws a shop category.
#[must_use]
pub fn product_category(languages: Languages) -> String {
    let language = pick_from_mask(languages);
    (*pick_one(categories(language))).to_owned()
}

/// Draws a color name.
#[must_use]
pub fn color(languages: Languages) -> String {
    let language = pick_from_mask(languages);
    (*pick_one(colors(language))).to_owned()
}

/// Draws a clothing size from `XS` to `XXL`.
#[must_use]
pub fn size() -> String {
    (*pick_one(SIZES)).to_owned()
}

/// Draws a barcode of one of `barcode_types`.
///
/// The leading digits are a plausible prefix for the symbology. The check
/// digit is not computed.
///
/// # Example
///
/// ```
/// use locale_faker::{BarcodeTypes, barcode};
///
/// let isbn = barcode(BarcodeTypes::ISBN);
/// assert_eq!(isbn.len(), 13);
/// assert!(isbn.starts_with("978") || isbn.starts_with("979"));
/// ```
#[must_use]
pub fn barcode(barcode_types: BarcodeTypes) -> String {
    replace_digits(*pick_one(barcode_patterns(pick_from_mask(barcode_types))))
}
