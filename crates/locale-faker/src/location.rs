//! Postal addresses and the [`Location`] entity.
//!
//! Every address is expanded from one template record so the
//! street, building, postcode, city, and full address of a location describe
//! the same place. Street and building numbers are drawn once and shared by
//! the native and English renderings.

use tracing::debug;

use crate::bilingual::{Bilingual, BilingualRef};
use crate::choice::{CountryCodesStandard, Language, Languages, Region, Regions};
use crate::data::location::{
    AddressComponents, address_components, alpha2, alpha3, city_level, region_name,
};
use crate::select::{pick_from_mask, pick_one};
use crate::template::{
    LETTER_WILDCARD, NONZERO_DIGITS, UPPERCASE_LETTERS, capitalize_words, replace_digits,
    replace_digits_correlated, replace_letters_correlated, replace_wildcard,
};

/// Draws the street part of an address.
#[must_use]
pub fn address_line1(regions: Regions) -> Bilingual {
    Address::draw(pick_from_mask(regions)).street
}

/// Draws the building part of an address. Many records have none, so the
/// result may be empty.
#[must_use]
pub fn address_line2(regions: Regions) -> Bilingual {
    Address::draw(pick_from_mask(regions)).building
}

/// Draws a postcode.
///
/// # Example
///
/// ```
/// use locale_faker::{Regions, postcode};
///
/// let code = postcode(Regions::CHINA);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_digit()));
/// ```
#[must_use]
pub fn postcode(regions: Regions) -> String {
    Address::draw(pick_from_mask(regions)).postcode
}

/// Draws a complete address laid out the way the region writes it.
///
/// # Example
///
/// ```
/// use locale_faker::{Regions, full_address};
///
/// let address = full_address(Regions::JAPAN);
/// assert!(address.translation().ends_with(", Japan"));
/// assert!(!address.original().contains(", "));
/// ```
#[must_use]
pub fn full_address(regions: Regions) -> Bilingual {
    Address::draw(pick_from_mask(regions)).full_address()
}

/// Draws a city name.
#[must_use]
pub fn city(regions: Regions) -> Bilingual {
    Address::draw(pick_from_mask(regions)).city()
}

/// Names a random region in one of `languages`, or gives its ISO code.
///
/// # Example
///
/// ```
/// use locale_faker::{CountryCodesStandard, Languages, region};
///
/// let code = region(CountryCodesStandard::Iso3166Alpha3, Languages::ENGLISH);
/// assert!(["USA", "GBR", "CHN", "JPN"].contains(&code.as_str()));
/// ```
#[must_use]
pub fn region(standard: CountryCodesStandard, languages: Languages) -> String {
    let chosen = pick_from_mask(Regions::all());
    region_label(chosen, standard, pick_from_mask(languages))
}

fn region_label(region: Region, standard: CountryCodesStandard, language: Language) -> String {
    let label = match standard {
        CountryCodesStandard::None => region_name(language, region),
        CountryCodesStandard::Iso3166Alpha2 => alpha2(region),
        CountryCodesStandard::Iso3166Alpha3 => alpha3(region),
    };
    label.to_owned()
}

/// Joins the non-empty `parts` with `separator`.
fn join_present<'a>(parts: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Expands street and building numbers with one set of draws for both sides.
fn expand_correlated(template: BilingualRef) -> Bilingual {
    let (original_digits, translation_digits) =
        replace_digits_correlated(template.original, template.translation, NONZERO_DIGITS);
    let (original, translation) =
        replace_letters_correlated(&original_digits, &translation_digits, UPPERCASE_LETTERS);
    Bilingual::new(original, translation)
}

/// One expanded address record.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Address {
    region: Region,
    record: AddressComponents,
    street: Bilingual,
    building: Bilingual,
    postcode: String,
}

impl Address {
    fn draw(region: Region) -> Self {
        let record = *pick_one(address_components(region));
        let postcode = replace_wildcard(
            &replace_digits(record.postcode),
            UPPERCASE_LETTERS,
            LETTER_WILDCARD,
        );
        Self {
            region,
            street: expand_correlated(record.street),
            building: expand_correlated(record.building),
            postcode,
            record,
        }
    }

    fn full_address(&self) -> Bilingual {
        let levels = &self.record.admin_levels;
        // Levels are kept or skipped on their original so both sides list the same ones
        let present: Vec<&BilingualRef> = levels
            .iter()
            .rev()
            .filter(|level| !level.original.is_empty())
            .collect();
        let admins_original = present
            .iter()
            .map(|level| level.original)
            .collect::<Vec<_>>()
            .join(", ");
        let admins_translation = present
            .iter()
            .map(|level| level.translation)
            .collect::<Vec<_>>()
            .join(", ");
        let country = region_name(Language::English, self.region);

        match self.region {
            Region::UnitedStates | Region::UnitedKingdom => {
                let (line_original, line_translation) = if self.region == Region::UnitedStates {
                    (
                        join_present([self.street.original(), self.building.original()], " "),
                        join_present([self.street.translation(), self.building.translation()], " "),
                    )
                } else {
                    (
                        join_present([self.building.original(), self.street.original()], ", "),
                        join_present(
                            [self.building.translation(), self.street.translation()],
                            ", ",
                        ),
                    )
                };
                Bilingual::new(
                    format!("{line_original}, {admins_original} {}", self.postcode),
                    format!(
                        "{line_translation}, {admins_translation}, {}, {country}",
                        self.postcode
                    ),
                )
            }
            Region::China | Region::Japan => {
                let original = join_present(
                    levels
                        .iter()
                        .map(|level| level.original)
                        .chain([self.street.original(), self.building.original()]),
                    "",
                );
                let line = join_present(
                    [self.building.translation(), self.street.translation()],
                    ", ",
                );
                Bilingual::new(
                    original,
                    format!("{line}, {admins_translation}, {country}"),
                )
            }
        }
    }

    fn city(&self) -> Bilingual {
        let levels = &self.record.admin_levels;
        levels
            .get(city_level(self.region))
            .filter(|level| !level.is_empty())
            .or_else(|| levels.first())
            .map_or_else(Bilingual::default, |level| {
                Bilingual::new(
                    capitalize_words(level.original),
                    capitalize_words(level.translation),
                )
            })
    }
}

/// Fields derived from one roll.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LocationRecord {
    region: Region,
    address_line1: Bilingual,
    address_line2: Bilingual,
    postcode: String,
    full_address: Bilingual,
    city: Bilingual,
}

/// A generated address whose parts describe one place.
///
/// # Example
///
/// ```
/// use locale_faker::{CountryCodesStandard, Languages, Location, Regions};
///
/// let location = Location::new(Regions::UNITED_KINGDOM);
/// assert!(location.full_address().original().contains(location.postcode()));
/// assert_eq!(
///     location.region_name(CountryCodesStandard::Iso3166Alpha2, Languages::ENGLISH),
///     "GB"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    regions: Regions,
    record: LocationRecord,
}

impl Location {
    /// Rolls a location in one of `regions`.
    #[must_use]
    pub fn new(regions: Regions) -> Self {
        Self {
            regions,
            record: roll(regions),
        }
    }

    /// Replaces every field with a fresh roll.
    pub fn reroll(&mut self) {
        self.record = roll(self.regions);
    }

    /// Selected region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.record.region
    }

    /// Names the selected region in one of `languages`, or gives its ISO
    /// code.
    #[must_use]
    pub fn region_name(&self, standard: CountryCodesStandard, languages: Languages) -> String {
        region_label(self.record.region, standard, pick_from_mask(languages))
    }

    /// Street.
    #[must_use]
    pub const fn address_line1(&self) -> &Bilingual {
        &self.record.address_line1
    }

    /// Building, flat, or suite. May be empty.
    #[must_use]
    pub const fn address_line2(&self) -> &Bilingual {
        &self.record.address_line2
    }

    /// Postcode.
    #[must_use]
    pub fn postcode(&self) -> &str {
        &self.record.postcode
    }

    /// Complete address.
    #[must_use]
    pub const fn full_address(&self) -> &Bilingual {
        &self.record.full_address
    }

    /// City.
    #[must_use]
    pub const fn city(&self) -> &Bilingual {
        &self.record.city
    }
}

fn roll(regions: Regions) -> LocationRecord {
    let region = pick_from_mask(regions);
    debug!(?region, "rolling location");
    let address = Address::draw(region);
    LocationRecord {
        region,
        full_address: address.full_address(),
        city: address.city(),
        address_line1: address.street,
        address_line2: address.building,
        postcode: address.postcode,
    }
}
