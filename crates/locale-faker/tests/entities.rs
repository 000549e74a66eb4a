//! Consistency checks for the rolled entities.
//!
//! Entities draw every field from one roll, so their fields must agree with
//! each other after construction and after every reroll.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use locale_faker::{
    Card, CardType, CardTypes, Company, CountryCodesStandard, File, Gender, Genders, Language,
    Languages, Location, MaritalStatus, OperatingSystem, OperatingSystems, Person, PersonOptions,
    PhoneNumberStyle, Region, Regions,
};
use rstest::{fixture, rstest};

const REROLLS: usize = 100;

#[fixture]
fn english_person() -> Person {
    Person::new(PersonOptions {
        languages: Languages::ENGLISH,
        regions: Regions::all(),
        email_domains: "example.com; example.org".to_owned(),
        delimiter: ';',
        ..PersonOptions::default()
    })
    .expect("valid options")
}

#[rstest]
fn english_titles_agree_with_gender(mut english_person: Person) {
    for _ in 0..REROLLS {
        english_person.reroll();
        let title = english_person.title();
        match english_person.gender() {
            Gender::Male => {
                assert_eq!(english_person.gender_label(), "Male");
                assert!(["Mr.", "Dr.", "Prof."].contains(&title), "{title}");
            }
            Gender::Female => {
                assert_eq!(english_person.gender_label(), "Female");
                let allowed: &[&str] = if english_person.marital_status() == MaritalStatus::Single
                {
                    &["Miss", "Ms."]
                } else {
                    &["Mrs.", "Ms."]
                };
                assert!(allowed.contains(&title), "{title}");
            }
        }
    }
}

#[rstest]
fn english_names_and_emails_agree(mut english_person: Person) {
    for _ in 0..REROLLS {
        english_person.reroll();
        let full = english_person.full_name().original().to_owned();
        assert_eq!(
            full,
            format!(
                "{} {}",
                english_person.first_name().original(),
                english_person.last_name().original()
            )
        );
        let email = english_person.email();
        assert!(
            email.ends_with("@example.com") || email.ends_with("@example.org"),
            "{email}"
        );
        assert!(!email.contains(' '), "{email}");
    }
}

#[rstest]
fn phone_numbers_follow_the_rolled_region(mut english_person: Person) {
    for _ in 0..REROLLS {
        english_person.reroll();
        let international = english_person.phone_number(PhoneNumberStyle::INTERNATIONAL);
        let prefix = match english_person.region() {
            Region::UnitedStates => "+1 ",
            Region::UnitedKingdom => "+44 ",
            Region::China => "+86 ",
            Region::Japan => "+81 ",
        };
        assert!(international.starts_with(prefix), "{international}");

        let bare = english_person.phone_number(PhoneNumberStyle::NATIONAL.without_delimiters());
        assert!(bare.chars().all(|c| c.is_ascii_digit()), "{bare}");
    }
}

#[test]
fn empty_email_domains_are_rejected() {
    let err = Person::new(PersonOptions {
        email_domains: " , ".to_owned(),
        ..PersonOptions::default()
    })
    .expect_err("no domains");

    assert_eq!(err.function(), "Person");
}

#[test]
fn chinese_people_keep_both_renderings() {
    let mut person = Person::new(PersonOptions {
        languages: Languages::SIMPLIFIED_CHINESE,
        genders: Genders::FEMALE,
        ..PersonOptions::default()
    })
    .expect("valid options");

    for _ in 0..REROLLS {
        person.reroll();
        assert_eq!(person.language(), Language::SimplifiedChinese);
        assert_eq!(person.gender_label(), "女");
        assert!(!person.full_name().original().contains(' '));
        assert!(person.full_name().translation().contains(' '));
    }
}

#[rstest]
#[case(Regions::UNITED_STATES, "US", "USA")]
#[case(Regions::UNITED_KINGDOM, "GB", "GBR")]
#[case(Regions::CHINA, "CN", "CHN")]
#[case(Regions::JAPAN, "JP", "JPN")]
fn locations_name_their_region(
    #[case] regions: Regions,
    #[case] alpha2: &str,
    #[case] alpha3: &str,
) {
    let mut location = Location::new(regions);
    for _ in 0..20 {
        location.reroll();
        assert_eq!(
            location.region_name(CountryCodesStandard::Iso3166Alpha2, Languages::ENGLISH),
            alpha2
        );
        assert_eq!(
            location.region_name(CountryCodesStandard::Iso3166Alpha3, Languages::ENGLISH),
            alpha3
        );
        assert!(!location.city().is_empty());
        assert!(!location.full_address().translation().is_empty());
    }
}

#[rstest]
#[case(Regions::UNITED_STATES)]
#[case(Regions::UNITED_KINGDOM)]
fn western_addresses_contain_their_postcode(#[case] regions: Regions) {
    let mut location = Location::new(regions);
    for _ in 0..20 {
        location.reroll();
        let address = location.full_address();
        assert!(address.original().contains(location.postcode()));
        assert!(address.translation().contains(location.postcode()));
    }
}

#[test]
fn companies_keep_their_language() {
    let mut company = Company::new(Languages::JAPANESE);
    for _ in 0..REROLLS {
        company.reroll();
        assert_eq!(company.language(), Language::Japanese);
        assert!(!company.name().original().contains(' '));
        assert!(!company.industry_label().is_empty());
    }
}

#[rstest]
#[case(OperatingSystems::WINDOWS, OperatingSystem::Windows, '\\')]
#[case(OperatingSystems::LINUX, OperatingSystem::Linux, '/')]
#[case(OperatingSystems::MAC_OS, OperatingSystem::MacOs, '/')]
fn file_parts_agree(
    #[case] operating_systems: OperatingSystems,
    #[case] expected: OperatingSystem,
    #[case] separator: char,
) {
    let mut file = File::new(operating_systems, "pdf, png", ',');
    for _ in 0..20 {
        file.reroll();
        assert_eq!(file.operating_system(), expected);
        assert!(file.path().starts_with(file.directory()), "{}", file.path());
        assert!(file.path().ends_with(file.name()), "{}", file.path());
        assert!(file.name().ends_with(&format!(".{}", file.extension())));
        assert!(file.path().contains(separator));
    }
}

#[test]
fn card_numbers_follow_the_rolled_network() {
    let mut card =
        Card::new(Languages::all(), CardTypes::all(), "01/26", "12/30").expect("valid dates");
    for _ in 0..REROLLS {
        card.reroll();
        let number = card.number();
        match card.network() {
            CardType::Visa => assert!(number.starts_with('4') && number.len() == 16),
            CardType::AmericanExpress => {
                assert!((number.starts_with("34") || number.starts_with("37")) && number.len() == 15);
            }
            CardType::MasterCard => assert!(number.starts_with('5') && number.len() == 16),
            CardType::Jcb => assert!(number.starts_with("35") && number.len() == 16),
            CardType::UnionPay => assert!(number.starts_with("62")),
        }
    }
}

#[test]
fn reversed_card_dates_are_rejected() {
    let err = Card::new(Languages::ENGLISH, CardTypes::VISA, "12/30", "01/26")
        .expect_err("reversed range");

    assert_eq!(err.function(), "Card");
}
