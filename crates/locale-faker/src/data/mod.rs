//! Static vocabulary tables.
//!
//! Tables are plain `const` slices grouped by category. Lookup functions map
//! a language (and, where relevant, a gender, region, or industry) to the
//! slice to draw from. Every slice they return is non-empty. Templates use
//! `{}` for placeholders, `#` for digits and `@` for uppercase letters.

pub(crate) mod business;
pub(crate) mod computer;
pub(crate) mod location;
pub(crate) mod payment;
pub(crate) mod person;
pub(crate) mod product;

use crate::bilingual::BilingualRef;

/// Shorthand for a table entry with distinct renderings.
const fn bi(original: &'static str, translation: &'static str) -> BilingualRef {
    BilingualRef::new(original, translation)
}

/// Shorthand for a table entry rendered identically on both sides.
const fn en(text: &'static str) -> BilingualRef {
    BilingualRef::same(text)
}

#[cfg(test)]
pub(crate) fn wildcard_count(template: &str, wildcard: char) -> usize {
    template.chars().filter(|c| *c == wildcard).count()
}
