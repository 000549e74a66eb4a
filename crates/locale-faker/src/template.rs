//! Placeholder and wildcard expansion.
//!
//! Templates are plain strings. `{}` marks where a value is inserted, `#`
//! marks a random digit and `@` marks a random letter. Two templates that
//! describe the same thing in different languages are expanded with
//! [`replace_wildcards_correlated`] so both sides show the same characters.

use tracing::warn;

use crate::random::index_below;

/// Placeholder token replaced by [`replace_placeholder`].
pub const PLACEHOLDER: &str = "{}";

/// Wildcard marker for a random digit.
pub const DIGIT_WILDCARD: char = '#';

/// Wildcard marker for a random letter.
pub const LETTER_WILDCARD: char = '@';

/// Default alphabet for [`DIGIT_WILDCARD`].
pub const DIGITS: &str = "0123456789";

/// Digits without zero, for house numbers that must not start with `0`.
pub const NONZERO_DIGITS: &str = "123456789";

/// Default alphabet for [`LETTER_WILDCARD`].
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uppercase letters, used for postcodes and unit letters.
pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Replaces the first `{}` in `template` with `value`.
///
/// A template without a placeholder is returned unchanged.
///
/// # Example
///
/// ```
/// use locale_faker::replace_placeholder;
///
/// assert_eq!(replace_placeholder("{} Pro", "Mango"), "Mango Pro");
/// assert_eq!(replace_placeholder("{}-{}", "a"), "a-{}");
/// assert_eq!(replace_placeholder("Omni", "Mango"), "Omni");
/// ```
#[must_use]
pub fn replace_placeholder(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}

/// Replaces every `wildcard` in `template` with an independent draw from
/// `alphabet`.
///
/// An empty alphabet leaves the template unchanged.
///
/// # Example
///
/// ```
/// use locale_faker::replace_wildcard;
///
/// let code = replace_wildcard("AB-###", "0123456789", '#');
/// assert!(code.starts_with("AB-"));
/// assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
/// ```
#[must_use]
pub fn replace_wildcard(template: &str, alphabet: &str, wildcard: char) -> String {
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.is_empty() {
        return template.to_owned();
    }
    template
        .chars()
        .map(|c| {
            if c == wildcard {
                draw(&symbols)
            } else {
                c
            }
        })
        .collect()
}

/// Expands `#` with decimal digits.
#[must_use]
pub fn replace_digits(template: &str) -> String {
    replace_wildcard(template, DIGITS, DIGIT_WILDCARD)
}

/// Expands `@` with ASCII letters of either case.
#[must_use]
pub fn replace_letters(template: &str) -> String {
    replace_wildcard(template, LETTERS, LETTER_WILDCARD)
}

/// Expands `wildcard` in two templates with one shared sequence of draws.
///
/// The i-th wildcard of both outputs is the same character. When the two
/// templates hold a different number of wildcards, or the alphabet is empty,
/// both are returned unchanged.
///
/// # Example
///
/// ```
/// use locale_faker::replace_wildcards_correlated;
///
/// let (original, translation) =
///     replace_wildcards_correlated("东安门大街##号", "No. ## Dong'anmen Street", "123456789", '#');
/// let digits: String = original.chars().filter(char::is_ascii_digit).collect();
/// assert_eq!(translation, format!("No. {digits} Dong'anmen Street"));
/// ```
#[must_use]
pub fn replace_wildcards_correlated(
    template_a: &str,
    template_b: &str,
    alphabet: &str,
    wildcard: char,
) -> (String, String) {
    let count_a = template_a.chars().filter(|c| *c == wildcard).count();
    let count_b = template_b.chars().filter(|c| *c == wildcard).count();
    let symbols: Vec<char> = alphabet.chars().collect();
    if count_a != count_b {
        warn!(
            template_a,
            template_b,
            count_a,
            count_b,
            "correlated templates disagree on wildcard count; leaving both unexpanded"
        );
        return (template_a.to_owned(), template_b.to_owned());
    }
    if symbols.is_empty() {
        return (template_a.to_owned(), template_b.to_owned());
    }
    let draws: Vec<char> = (0..count_a).map(|_| draw(&symbols)).collect();
    (
        substitute(template_a, wildcard, &draws),
        substitute(template_b, wildcard, &draws),
    )
}

/// Correlated expansion of `#` with `alphabet`.
#[must_use]
pub fn replace_digits_correlated(a: &str, b: &str, alphabet: &str) -> (String, String) {
    replace_wildcards_correlated(a, b, alphabet, DIGIT_WILDCARD)
}

/// Correlated expansion of `@` with `alphabet`.
#[must_use]
pub fn replace_letters_correlated(a: &str, b: &str, alphabet: &str) -> (String, String) {
    replace_wildcards_correlated(a, b, alphabet, LETTER_WILDCARD)
}

fn substitute(template: &str, wildcard: char, draws: &[char]) -> String {
    let mut pending = draws.iter();
    template
        .chars()
        .map(|c| {
            if c == wildcard {
                pending.next().copied().unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

fn draw(symbols: &[char]) -> char {
    symbols
        .get(index_below(symbols.len()))
        .copied()
        .unwrap_or_default()
}

/// Splits `list` on `delimiter`, trims each entry, and drops blank entries.
///
/// # Example
///
/// ```
/// use locale_faker::split_and_trim;
///
/// assert_eq!(split_and_trim(" jpg, png ,,txt ", ','), ["jpg", "png", "txt"]);
/// ```
#[must_use]
pub fn split_and_trim(list: &str, delimiter: char) -> Vec<String> {
    list.split(delimiter)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Removes every character of `characters` from `value`.
#[must_use]
pub fn remove_characters(value: &str, characters: &str) -> String {
    value.chars().filter(|c| !characters.contains(*c)).collect()
}

/// Title-cases each word of an all-uppercase value.
///
/// Values that already contain lowercase letters, or no letters at all, are
/// returned unchanged so names like "McAllen" survive.
#[must_use]
pub fn capitalize_words(value: &str) -> String {
    let has_lowercase = value.chars().any(char::is_lowercase);
    let has_uppercase = value.chars().any(char::is_uppercase);
    if has_lowercase || !has_uppercase {
        return value.to_owned();
    }
    value
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
