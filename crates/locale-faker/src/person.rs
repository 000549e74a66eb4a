//! Personal names, contact details, and the [`Person`] entity.
//!
//! Free functions draw one value each and make their own selections. The
//! [`Person`] entity selects one gender, language, and region per roll and
//! derives every field from that selection, so the name, title, phone number,
//! and email of one person agree with each other.

use tracing::debug;

use crate::bilingual::Bilingual;
use crate::choice::{Gender, Genders, Language, Languages, MaritalStatus, Region, Regions};
use crate::data::person::{
    EMAIL_AFFIXES, SOCIAL_NETWORK_ID_NUMBER_SUFFIXES, calling_code, female_titles, first_names,
    gender_label, job_titles, last_names, marital_status_label, phone_formats,
    social_network_id_affixes, social_network_ids, titles, uses_trunk_prefix,
};
use crate::error::FakerError;
use crate::select::{pick_from_mask, pick_listed, pick_one};
use crate::template::{remove_characters, replace_digits, replace_placeholder, split_and_trim};

/// Characters dropped from phone numbers rendered without delimiters.
const PHONE_DELIMITERS: &str = " -()";

/// Characters dropped from email usernames.
const EMAIL_USERNAME_DELIMITERS: &str = " -";

/// How a phone number is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumberStyle {
    /// Prefix the number with `+` and the region's calling code instead of
    /// the national trunk prefix.
    pub international: bool,
    /// Keep spaces, hyphens, and parentheses.
    pub include_delimiters: bool,
}

impl PhoneNumberStyle {
    /// National format with delimiters, such as `020 7946 0958`.
    pub const NATIONAL: Self = Self {
        international: false,
        include_delimiters: true,
    };

    /// International format with delimiters, such as `+44 20 7946 0958`.
    pub const INTERNATIONAL: Self = Self {
        international: true,
        include_delimiters: true,
    };

    /// Returns the same style with delimiters stripped.
    #[must_use]
    pub const fn without_delimiters(self) -> Self {
        Self {
            international: self.international,
            include_delimiters: false,
        }
    }
}

impl Default for PhoneNumberStyle {
    fn default() -> Self {
        Self::NATIONAL
    }
}

/// Draws a first name of one of `genders` in one of `languages`.
#[must_use]
pub fn first_name(languages: Languages, genders: Genders) -> Bilingual {
    let language = pick_from_mask(languages);
    let gender = pick_from_mask(genders);
    first_name_in(language, gender)
}

/// Draws a family name in one of `languages`.
#[must_use]
pub fn last_name(languages: Languages) -> Bilingual {
    last_name_in(pick_from_mask(languages))
}

/// Draws a full name.
///
/// English names read `first last` on both sides. Chinese and Japanese names
/// are written family name first without a space, and romanized as
/// `Last First`.
///
/// # Example
///
/// ```
/// use locale_faker::{Genders, Languages, full_name};
///
/// let name = full_name(Languages::JAPANESE, Genders::FEMALE);
/// assert!(!name.original().contains(' '));
/// assert_eq!(name.translation().split(' ').count(), 2);
/// ```
#[must_use]
pub fn full_name(languages: Languages, genders: Genders) -> Bilingual {
    let language = pick_from_mask(languages);
    let gender = pick_from_mask(genders);
    compose_full_name(
        language,
        &first_name_in(language, gender),
        &last_name_in(language),
    )
}

/// Returns the localized label of a random gender, such as `Female` or `男`.
#[must_use]
pub fn gender(languages: Languages) -> String {
    let language = pick_from_mask(languages);
    let chosen: Gender = pick_from_mask(Genders::all());
    gender_label(language, chosen).to_owned()
}

/// Draws a form of address for one of `genders`.
#[must_use]
pub fn title(languages: Languages, genders: Genders) -> String {
    let language = pick_from_mask(languages);
    let gender = pick_from_mask(genders);
    (*pick_one(titles(language, gender))).to_owned()
}

/// Returns the localized label of a random marital status.
#[must_use]
pub fn marital_status(languages: Languages) -> String {
    let language = pick_from_mask(languages);
    marital_status_label(language, *pick_one(&MaritalStatus::ALL)).to_owned()
}

/// Draws a phone number for one of `regions`.
///
/// National numbers in the United Kingdom and Japan carry a trunk `0`.
/// International numbers start with `+` and the calling code.
///
/// # Example
///
/// ```
/// use locale_faker::{PhoneNumberStyle, Regions, phone_number};
///
/// let number = phone_number(Regions::JAPAN, PhoneNumberStyle::INTERNATIONAL);
/// assert!(number.starts_with("+81 "));
///
/// let bare = phone_number(Regions::JAPAN, PhoneNumberStyle::NATIONAL.without_delimiters());
/// assert!(bare.starts_with('0'));
/// assert!(bare.chars().all(|c| c.is_ascii_digit()));
/// ```
#[must_use]
pub fn phone_number(regions: Regions, style: PhoneNumberStyle) -> String {
    let region = pick_from_mask(regions);
    format_phone_number(region, &subscriber_number(region), style)
}

/// Draws an email address at one of the `delimiter`-separated `domains`.
///
/// The username is the romanized full name of a random person wrapped in a
/// short template, with spaces and hyphens removed.
///
/// # Errors
///
/// Returns [`FakerError::EmptyString`] when `domains` names no domain.
///
/// # Example
///
/// ```
/// use locale_faker::{Languages, email};
///
/// let address = email(Languages::all(), "example.com, example.org", ',').expect("domains");
/// assert!(address.ends_with("@example.com") || address.ends_with("@example.org"));
///
/// assert!(email(Languages::ENGLISH, " , ", ',').is_err());
/// ```
pub fn email(languages: Languages, domains: &str, delimiter: char) -> Result<String, FakerError> {
    let domain = pick_listed(domains, delimiter, "email", "domains")?;
    let name = full_name(languages, Genders::all());
    Ok(email_address(name.translation(), &domain))
}

/// Draws a job title.
#[must_use]
pub fn job_title(languages: Languages) -> String {
    let language = pick_from_mask(languages);
    (*pick_one(job_titles(language))).to_owned()
}

/// Draws a social network handle.
///
/// A handle word is wrapped in a language-specific affix and followed by an
/// optional numeric tail. The tail digits are the same on both sides.
#[must_use]
pub fn social_network_id(languages: Languages) -> Bilingual {
    social_network_id_in(pick_from_mask(languages))
}

fn first_name_in(language: Language, gender: Gender) -> Bilingual {
    Bilingual::from(*pick_one(first_names(language, gender)))
}

fn last_name_in(language: Language) -> Bilingual {
    Bilingual::from(*pick_one(last_names(language)))
}

fn compose_full_name(language: Language, first: &Bilingual, last: &Bilingual) -> Bilingual {
    let translation = if language.is_cjk() {
        format!("{} {}", last.translation(), first.translation())
    } else {
        format!("{} {}", first.translation(), last.translation())
    };
    let original = if language.is_cjk() {
        format!("{}{}", last.original(), first.original())
    } else {
        format!("{} {}", first.original(), last.original())
    };
    Bilingual::new(original, translation)
}

pub(crate) fn social_network_id_in(language: Language) -> Bilingual {
    let word = pick_one(social_network_ids(language));
    let affix = pick_one(social_network_id_affixes(language));
    let tail = replace_digits(*pick_one(SOCIAL_NETWORK_ID_NUMBER_SUFFIXES));
    Bilingual::new(
        replace_placeholder(&tail, &replace_placeholder(affix.original, word.original)),
        replace_placeholder(&tail, &replace_placeholder(affix.translation, word.translation)),
    )
}

/// National subscriber number without any trunk or country prefix.
fn subscriber_number(region: Region) -> String {
    replace_digits(*pick_one(phone_formats(region)))
}

fn format_phone_number(region: Region, subscriber: &str, style: PhoneNumberStyle) -> String {
    let number = if style.international {
        format!("+{} {subscriber}", calling_code(region))
    } else if uses_trunk_prefix(region) {
        format!("0{subscriber}")
    } else {
        subscriber.to_owned()
    };
    if style.include_delimiters {
        number
    } else {
        remove_characters(&number, PHONE_DELIMITERS)
    }
}

fn email_address(name: &str, domain: &str) -> String {
    let username = replace_digits(&replace_placeholder(*pick_one(EMAIL_AFFIXES), name));
    format!(
        "{}@{domain}",
        remove_characters(&username, EMAIL_USERNAME_DELIMITERS)
    )
}

/// Construction parameters for [`Person`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonOptions {
    /// Genders a person may be rolled with.
    pub genders: Genders,
    /// Languages a person may be rolled in.
    pub languages: Languages,
    /// Regions whose phone conventions a person may follow.
    pub regions: Regions,
    /// `delimiter`-separated email domains.
    pub email_domains: String,
    /// Separator of `email_domains`.
    pub delimiter: char,
}

impl Default for PersonOptions {
    fn default() -> Self {
        Self {
            genders: Genders::all(),
            languages: Languages::ENGLISH,
            regions: Regions::UNITED_STATES,
            email_domains: "example.com".to_owned(),
            delimiter: ',',
        }
    }
}

/// Fields derived from one roll.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PersonRecord {
    gender: Gender,
    language: Language,
    region: Region,
    first_name: Bilingual,
    last_name: Bilingual,
    full_name: Bilingual,
    gender_label: String,
    marital_status: MaritalStatus,
    marital_status_label: String,
    title: String,
    subscriber_number: String,
    email: String,
    job_title: String,
    social_network_id: Bilingual,
}

/// A generated person whose fields are mutually consistent.
///
/// # Example
///
/// ```
/// use locale_faker::{Languages, Person, PersonOptions, Regions};
///
/// let mut person = Person::new(PersonOptions {
///     languages: Languages::SIMPLIFIED_CHINESE,
///     regions: Regions::CHINA,
///     ..PersonOptions::default()
/// })
/// .expect("valid options");
///
/// assert!(person.email().ends_with("@example.com"));
/// person.reroll();
/// assert!(!person.full_name().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    options: PersonOptions,
    domains: Vec<String>,
    record: PersonRecord,
}

impl Person {
    /// Validates `options` and rolls the first person.
    ///
    /// # Errors
    ///
    /// Returns [`FakerError::EmptyString`] when `options.email_domains` names
    /// no domain.
    pub fn new(options: PersonOptions) -> Result<Self, FakerError> {
        let domains = split_and_trim(&options.email_domains, options.delimiter);
        if domains.is_empty() {
            return Err(FakerError::EmptyString {
                function: "Person",
                name: "email_domains",
            });
        }
        let record = roll(&options, &domains);
        Ok(Self {
            options,
            domains,
            record,
        })
    }

    /// Replaces every field with a fresh roll.
    pub fn reroll(&mut self) {
        self.record = roll(&self.options, &self.domains);
    }

    /// Options the person was built with.
    #[must_use]
    pub const fn options(&self) -> &PersonOptions {
        &self.options
    }

    /// Selected gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.record.gender
    }

    /// Selected language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.record.language
    }

    /// Selected region.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.record.region
    }

    /// First name.
    #[must_use]
    pub const fn first_name(&self) -> &Bilingual {
        &self.record.first_name
    }

    /// Family name.
    #[must_use]
    pub const fn last_name(&self) -> &Bilingual {
        &self.record.last_name
    }

    /// Full name, ordered for the selected language.
    #[must_use]
    pub const fn full_name(&self) -> &Bilingual {
        &self.record.full_name
    }

    /// Localized gender label.
    #[must_use]
    pub fn gender_label(&self) -> &str {
        &self.record.gender_label
    }

    /// Selected marital status.
    #[must_use]
    pub const fn marital_status(&self) -> MaritalStatus {
        self.record.marital_status
    }

    /// Localized marital status label.
    #[must_use]
    pub fn marital_status_label(&self) -> &str {
        &self.record.marital_status_label
    }

    /// Form of address, consistent with gender and marital status.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.record.title
    }

    /// Renders the cached phone number in `style`.
    #[must_use]
    pub fn phone_number(&self, style: PhoneNumberStyle) -> String {
        format_phone_number(self.record.region, &self.record.subscriber_number, style)
    }

    /// Email address derived from the romanized full name.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.record.email
    }

    /// Job title.
    #[must_use]
    pub fn job_title(&self) -> &str {
        &self.record.job_title
    }

    /// Social network handle.
    #[must_use]
    pub const fn social_network_id(&self) -> &Bilingual {
        &self.record.social_network_id
    }
}

fn roll(options: &PersonOptions, domains: &[String]) -> PersonRecord {
    let gender = pick_from_mask(options.genders);
    let language = pick_from_mask(options.languages);
    let region = pick_from_mask(options.regions);
    debug!(?gender, ?language, ?region, "rolling person");

    let first_name = first_name_in(language, gender);
    let last_name = last_name_in(language);
    let full_name = compose_full_name(language, &first_name, &last_name);
    let marital_status = *pick_one(&MaritalStatus::ALL);

    // Female titles follow marital status where the language marks it
    let title_table = match gender {
        Gender::Female => {
            female_titles(language, marital_status).unwrap_or_else(|| titles(language, gender))
        }
        Gender::Male => titles(language, gender),
    };

    let email = email_address(full_name.translation(), pick_one(domains).as_str());

    PersonRecord {
        gender,
        language,
        region,
        gender_label: gender_label(language, gender).to_owned(),
        marital_status_label: marital_status_label(language, marital_status).to_owned(),
        marital_status,
        title: (*pick_one(title_table)).to_owned(),
        subscriber_number: subscriber_number(region),
        email,
        job_title: (*pick_one(job_titles(language))).to_owned(),
        social_network_id: social_network_id_in(language),
        first_name,
        last_name,
        full_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::MaskedChoice;
    use crate::random::seed_thread;
    use rstest::rstest;

    fn allowed_titles(person: &Person) -> &'static [&'static str] {
        let generic = titles(person.language(), person.gender());
        match person.gender() {
            Gender::Female => {
                female_titles(person.language(), person.marital_status()).unwrap_or(generic)
            }
            Gender::Male => generic,
        }
    }

    #[rstest]
    #[case(Language::English, "Emily", "Smith", "Emily Smith", "Emily Smith")]
    #[case(Language::SimplifiedChinese, "伟", "王", "王伟", "Wang Wei")]
    #[case(Language::Japanese, "花子", "山田", "山田花子", "Yamada Hanako")]
    fn full_names_follow_language_order(
        #[case] language: Language,
        #[case] first: &str,
        #[case] last: &str,
        #[case] original: &str,
        #[case] translation: &str,
    ) {
        let first_romanized = match language {
            Language::SimplifiedChinese => "Wei",
            Language::Japanese => "Hanako",
            Language::English | Language::TraditionalChinese => first,
        };
        let last_romanized = match language {
            Language::SimplifiedChinese => "Wang",
            Language::Japanese => "Yamada",
            Language::English | Language::TraditionalChinese => last,
        };
        let name = compose_full_name(
            language,
            &Bilingual::new(first, first_romanized),
            &Bilingual::new(last, last_romanized),
        );
        assert_eq!(name, Bilingual::new(original, translation));
    }

    #[rstest]
    #[case(Region::UnitedKingdom, PhoneNumberStyle::NATIONAL, "020 7946 0958")]
    #[case(Region::UnitedKingdom, PhoneNumberStyle::INTERNATIONAL, "+44 20 7946 0958")]
    #[case(
        Region::UnitedKingdom,
        PhoneNumberStyle::INTERNATIONAL.without_delimiters(),
        "+442079460958"
    )]
    #[case(Region::UnitedStates, PhoneNumberStyle::NATIONAL, "(312) 555-0142")]
    #[case(
        Region::UnitedStates,
        PhoneNumberStyle::NATIONAL.without_delimiters(),
        "3125550142"
    )]
    fn phone_numbers_render_in_each_style(
        #[case] region: Region,
        #[case] style: PhoneNumberStyle,
        #[case] expected: &str,
    ) {
        let subscriber = match region {
            Region::UnitedKingdom => "20 7946 0958",
            _ => "(312) 555-0142",
        };
        assert_eq!(format_phone_number(region, subscriber, style), expected);
    }

    #[test]
    fn email_usernames_drop_spaces_and_hyphens() {
        for _ in 0..50 {
            let address = email_address("Chan Ka-ho", "example.com");
            let (username, domain) = address.split_once('@').expect("has @");
            assert_eq!(domain, "example.com");
            assert!(username.contains("ChanKaho"), "{username}");
            assert!(!username.contains([' ', '-', '#']));
        }
    }

    #[test]
    fn email_rejects_blank_domain_lists() {
        let err = email(Languages::ENGLISH, " ; ", ';').expect_err("no domains");
        assert_eq!(
            err.to_string(),
            "email: Invalid string: 'domains' must not be empty."
        );
    }

    #[test]
    fn person_rejects_missing_domains() {
        let err = Person::new(PersonOptions {
            email_domains: String::new(),
            ..PersonOptions::default()
        })
        .expect_err("no domains");
        assert_eq!(err.function(), "Person");
    }

    #[test]
    fn rerolled_people_keep_title_and_gender_consistent() {
        seed_thread(11);
        let mut person = Person::new(PersonOptions {
            languages: Languages::all(),
            regions: Regions::all(),
            ..PersonOptions::default()
        })
        .expect("valid options");
        for _ in 0..200 {
            person.reroll();
            assert_eq!(
                person.gender_label(),
                gender_label(person.language(), person.gender())
            );
            assert!(allowed_titles(&person).contains(&person.title()));
            assert_eq!(
                person.marital_status_label(),
                marital_status_label(person.language(), person.marital_status())
            );
        }
    }

    #[rstest]
    #[case(Language::SimplifiedChinese)]
    #[case(Language::TraditionalChinese)]
    fn chinese_female_titles_follow_marital_status(#[case] language: Language) {
        let mut person = Person::new(PersonOptions {
            languages: language.into(),
            genders: Genders::FEMALE,
            ..PersonOptions::default()
        })
        .expect("valid options");
        for _ in 0..100 {
            person.reroll();
            let expected: &[&str] = if person.marital_status() == MaritalStatus::Single {
                &["小姐"]
            } else {
                &["女士", "太太"]
            };
            assert!(expected.contains(&person.title()), "{}", person.title());
        }
    }

    #[test]
    fn person_fields_follow_the_selected_language() {
        for language in Language::ALL {
            let person = Person::new(PersonOptions {
                languages: language.flag(),
                ..PersonOptions::default()
            })
            .expect("valid options");
            assert_eq!(person.language(), *language);
            assert!(last_names(*language)
                .iter()
                .any(|name| name.original == person.last_name().original()));
            assert!(job_titles(*language).contains(&person.job_title()));
        }
    }

    #[test]
    fn cached_phone_number_is_stable_across_styles() {
        let person = Person::new(PersonOptions {
            regions: Regions::UNITED_KINGDOM,
            ..PersonOptions::default()
        })
        .expect("valid options");
        let national = person.phone_number(PhoneNumberStyle::NATIONAL.without_delimiters());
        let international =
            person.phone_number(PhoneNumberStyle::INTERNATIONAL.without_delimiters());
        assert_eq!(national.strip_prefix('0'), international.strip_prefix("+44"));
        assert_eq!(
            person.phone_number(PhoneNumberStyle::NATIONAL),
            person.phone_number(PhoneNumberStyle::NATIONAL)
        );
    }

    #[test]
    fn social_network_ids_share_their_digits() {
        for language in Language::ALL {
            for _ in 0..20 {
                let id = social_network_id_in(*language);
                let digits = |value: &str| -> String {
                    value.chars().filter(char::is_ascii_digit).collect()
                };
                assert_eq!(digits(id.original()), digits(id.translation()));
                assert!(!id.translation().contains("{}"));
            }
        }
    }
}
