//! Payment cards and the [`Card`] entity.

use tracing::debug;

use crate::choice::{CardType, CardTypes, Language, Languages};
use crate::data::payment::{card_label, card_number_patterns};
use crate::error::FakerError;
use crate::random::uniform_in_range;
use crate::select::{pick_from_mask, pick_listed, pick_one};
use crate::template::replace_digits;
use crate::validation::{CardMonth, check_not_empty, parse_card_month};

/// Names a card network from `card_types` in one of `languages`.
#[must_use]
pub fn card_type(languages: Languages, card_types: CardTypes) -> String {
    let language = pick_from_mask(languages);
    card_label(language, pick_from_mask(card_types)).to_owned()
}

/// Draws a card number for one of `card_types`.
///
/// Numbers follow the network's prefix and length. The check digit is not
/// computed.
///
/// # Example
///
/// ```
/// use locale_faker::{CardTypes, card_number};
///
/// let number = card_number(CardTypes::AMERICAN_EXPRESS);
/// assert_eq!(number.len(), 15);
/// assert!(number.starts_with("34") || number.starts_with("37"));
/// ```
#[must_use]
pub fn card_number(card_types: CardTypes) -> String {
    number_for(pick_from_mask(card_types))
}

/// Picks one of the `delimiter`-separated payment `methods`.
///
/// # Errors
///
/// Returns [`FakerError::EmptyString`] when `methods` names no method.
pub fn payment_method(methods: &str, delimiter: char) -> Result<String, FakerError> {
    pick_listed(methods, delimiter, "payment_method", "methods")
}

/// Draws a card expiry date between `start` and `end`, inclusive.
///
/// Both bounds and the result use the `MM/YY` layout. Every month in the
/// range is equally likely.
///
/// # Errors
///
/// Returns [`FakerError`] when a bound is empty, malformed, names a month
/// outside `1..=12`, or when `start` is after `end`.
///
/// # Example
///
/// ```
/// use locale_faker::card_date;
///
/// assert_eq!(card_date("03/27", "03/27").expect("valid range"), "03/27");
/// assert!(card_date("12/30", "01/25").is_err());
/// ```
pub fn card_date(start: &str, end: &str) -> Result<String, FakerError> {
    let (first, last) = parse_card_range("card_date", start, end)?;
    Ok(month_between(first, last))
}

fn parse_card_range(
    function: &'static str,
    start: &str,
    end: &str,
) -> Result<(CardMonth, CardMonth), FakerError> {
    check_not_empty(function, "start", start)?;
    check_not_empty(function, "end", end)?;
    let first = parse_card_month(function, start)?;
    let last = parse_card_month(function, end)?;
    // Compared by month; the `MM/YY` text does not sort chronologically
    if first > last {
        return Err(FakerError::InvalidRange {
            function,
            start_name: "start",
            end_name: "end",
            start: start.to_owned(),
            end: end.to_owned(),
        });
    }
    Ok((first, last))
}

fn month_between(first: CardMonth, last: CardMonth) -> String {
    CardMonth::from_index(uniform_in_range(first.index(), last.index())).format()
}

fn number_for(card_type: CardType) -> String {
    replace_digits(*pick_one(card_number_patterns(card_type)))
}

/// A generated card whose number matches its network.
///
/// # Example
///
/// ```
/// use locale_faker::{Card, CardTypes, Languages};
///
/// let card = Card::new(Languages::JAPANESE, CardTypes::VISA, "01/25", "12/29")
///     .expect("valid dates");
/// assert_eq!(card.card_type(), "Visa");
/// assert!(card.number().starts_with('4'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    languages: Languages,
    card_types: CardTypes,
    first_month: CardMonth,
    last_month: CardMonth,
    record: CardRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CardRecord {
    language: Language,
    network: CardType,
    label: String,
    number: String,
    date: String,
}

impl Card {
    /// Validates the expiry range and rolls the first card.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError`] under the same conditions as [`card_date`].
    pub fn new(
        languages: Languages,
        card_types: CardTypes,
        start: &str,
        end: &str,
    ) -> Result<Self, FakerError> {
        let (first_month, last_month) = parse_card_range("Card", start, end)?;
        Ok(Self {
            languages,
            card_types,
            first_month,
            last_month,
            record: roll(languages, card_types, first_month, last_month),
        })
    }

    /// Replaces every field with a fresh roll.
    pub fn reroll(&mut self) {
        self.record = roll(
            self.languages,
            self.card_types,
            self.first_month,
            self.last_month,
        );
    }

    /// Selected language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.record.language
    }

    /// Selected network.
    #[must_use]
    pub const fn network(&self) -> CardType {
        self.record.network
    }

    /// Localized network name.
    #[must_use]
    pub fn card_type(&self) -> &str {
        &self.record.label
    }

    /// Card number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.record.number
    }

    /// Expiry date as `MM/YY`.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.record.date
    }
}

fn roll(
    languages: Languages,
    card_types: CardTypes,
    first_month: CardMonth,
    last_month: CardMonth,
) -> CardRecord {
    let language = pick_from_mask(languages);
    let network = pick_from_mask(card_types);
    debug!(?language, ?network, "rolling card");
    CardRecord {
        language,
        network,
        label: card_label(language, network).to_owned(),
        number: number_for(network),
        date: month_between(first_month, last_month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("01/25", "12/25")]
    #[case("11/98", "02/00")]
    #[case("11/67", "02/68")]
    #[case("12/99", "01/00")]
    fn card_dates_stay_in_range(#[case] start: &str, #[case] end: &str) {
        let first = parse_card_month("card_date", start).expect("start");
        let last = parse_card_month("card_date", end).expect("end");
        for _ in 0..50 {
            let drawn = card_date(start, end).expect("valid range");
            let month = parse_card_month("card_date", &drawn).expect("drawn date");
            assert!(first <= month && month <= last, "{drawn}");
        }
    }

    #[test]
    fn years_past_the_pivot_fall_in_the_previous_century() {
        let err = card_date("11/68", "02/69").expect_err("2068 comes after 1969");
        assert_eq!(err.function(), "card_date");
        assert!(matches!(err, FakerError::InvalidRange { .. }), "{err}");
    }

    #[test]
    fn reversed_card_dates_are_rejected() {
        let err = card_date("06/30", "05/30").expect_err("reversed");
        assert_eq!(
            err.to_string(),
            "card_date: Invalid range: 'end' must be greater than 'start'. (Current: 06/30, 05/30)"
        );
    }

    #[test]
    fn empty_card_dates_are_rejected_first() {
        let err = card_date("", "13/99").expect_err("empty start");
        assert_eq!(
            err,
            FakerError::EmptyString {
                function: "card_date",
                name: "start"
            }
        );
    }

    #[test]
    fn card_numbers_follow_the_selected_network() {
        let mut card = Card::new(Languages::all(), CardTypes::all(), "01/24", "12/28")
            .expect("valid dates");
        for _ in 0..100 {
            card.reroll();
            assert!(
                card_number_patterns(card.network())
                    .iter()
                    .any(|pattern| pattern.len() == card.number().len()
                        && pattern
                            .chars()
                            .zip(card.number().chars())
                            .all(|(p, d)| p == '#' || p == d))
            );
            assert_eq!(card.card_type(), card_label(card.language(), card.network()));
        }
    }

    #[test]
    fn payment_methods_come_from_the_list() {
        for _ in 0..10 {
            let method = payment_method("Cash; Card ;Bank transfer", ';').expect("listed");
            assert!(["Cash", "Card", "Bank transfer"].contains(&method.as_str()));
        }
    }
}
