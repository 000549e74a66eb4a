//! Paired native and English renderings of one generated value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A generated value in its original language together with its English
/// translation.
///
/// For English values both sides are normally identical. Emptiness is judged
/// on the original side only.
///
/// # Example
///
/// ```
/// use locale_faker::Bilingual;
///
/// let mut name = Bilingual::new("王伟", "Wang Wei");
/// assert_eq!(name.original(), "王伟");
/// name.swap();
/// assert_eq!(name.original(), "Wang Wei");
/// assert_eq!(String::from(name), "Wang Wei");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bilingual {
    original: String,
    translation: String,
}

impl Bilingual {
    /// Creates a value from its two renderings.
    #[must_use]
    pub fn new(original: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translation: translation.into(),
        }
    }

    /// Returns the rendering in the value's own language.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the English rendering.
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Replaces the original rendering.
    pub fn set_original(&mut self, original: impl Into<String>) {
        self.original = original.into();
    }

    /// Replaces the English rendering.
    pub fn set_translation(&mut self, translation: impl Into<String>) {
        self.translation = translation.into();
    }

    /// Exchanges the two renderings.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.original, &mut self.translation);
    }

    /// Returns `true` when the original rendering is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}

impl fmt::Display for Bilingual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl From<Bilingual> for String {
    fn from(value: Bilingual) -> Self {
        value.original
    }
}

impl From<BilingualRef> for Bilingual {
    fn from(value: BilingualRef) -> Self {
        Self::new(value.original, value.translation)
    }
}

/// Borrowed bilingual entry of a static data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BilingualRef {
    /// Rendering in the table's language.
    pub original: &'static str,
    /// English rendering.
    pub translation: &'static str,
}

impl BilingualRef {
    /// Creates a table entry.
    #[must_use]
    pub const fn new(original: &'static str, translation: &'static str) -> Self {
        Self {
            original,
            translation,
        }
    }

    /// Creates an entry whose two renderings are identical.
    #[must_use]
    pub const fn same(text: &'static str) -> Self {
        Self::new(text, text)
    }

    /// Returns `true` when the original rendering is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.original.is_empty()
    }
}
