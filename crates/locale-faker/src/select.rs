//! Selection primitives shared by every generator.

use bitflags::Flags;

use crate::choice::MaskedChoice;
use crate::error::FakerError;
use crate::random::index_below;
use crate::template::split_and_trim;

/// Picks one element of `items` uniformly.
///
/// # Panics
///
/// Panics if `items` is empty. The built-in tables are never empty; caller
/// supplied vocabularies go through [`pick_listed`] instead.
///
/// # Example
///
/// ```
/// use locale_faker::pick_one;
///
/// let sizes = ["S", "M", "L"];
/// assert!(sizes.contains(pick_one(&sizes)));
/// ```
#[expect(
    clippy::indexing_slicing,
    reason = "index_below returns an index strictly below the slice length"
)]
pub fn pick_one<T>(items: &[T]) -> &T {
    let index = index_below(items.len());
    &items[index]
}

/// Resolves a flag set to one concrete choice.
///
/// Members of `C::ALL` contained in `mask` are candidates. A single candidate
/// is returned as is, several are picked from uniformly, and an empty
/// candidate list yields `C::DEFAULT`.
///
/// # Example
///
/// ```
/// use locale_faker::{Language, Languages, pick_from_mask};
///
/// let choice: Language = pick_from_mask(Languages::JAPANESE);
/// assert_eq!(choice, Language::Japanese);
///
/// let fallback: Language = pick_from_mask(Languages::empty());
/// assert_eq!(fallback, Language::English);
/// ```
#[must_use]
pub fn pick_from_mask<C: MaskedChoice>(mask: C::Set) -> C {
    let candidates: Vec<C> = C::ALL
        .iter()
        .copied()
        .filter(|choice| mask.contains(choice.flag()))
        .collect();
    match candidates.as_slice() {
        [] => C::DEFAULT,
        [only] => *only,
        many => *pick_one(many),
    }
}

/// Picks one entry of a caller-supplied delimited list.
///
/// Entries are trimmed and blank entries are ignored.
///
/// # Errors
///
/// Returns [`FakerError::EmptyString`] attributed to `function` and `name`
/// when the list has no usable entry.
pub(crate) fn pick_listed(
    list: &str,
    delimiter: char,
    function: &'static str,
    name: &'static str,
) -> Result<String, FakerError> {
    let entries = split_and_trim(list, delimiter);
    if entries.is_empty() {
        return Err(FakerError::EmptyString { function, name });
    }
    Ok(pick_one(&entries).clone())
}
