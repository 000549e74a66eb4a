//! Localized fake data generation with bilingual values.
//!
//! This crate generates believable personal, location, business, computing,
//! payment, and product data for English, Simplified Chinese, Traditional
//! Chinese, and Japanese, following United States, United Kingdom, Chinese,
//! and Japanese conventions. Textual values that have a native rendering
//! come back as a [`Bilingual`] pair of the native text and its English
//! translation.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Free generator functions that draw one value per call
//! - Entities ([`Person`], [`Company`], [`Location`], [`File`], [`Card`])
//!   whose fields are drawn together and stay mutually consistent across
//!   [`Person::reroll`] and friends
//! - Choice sets such as [`Languages`] that narrow what a generator draws
//! - A per-thread random source that tests can pin with [`seed_thread`]
//! - A JSON [`SampleConfig`] and the [`sample_cli`] behind the sample binary
//!
//! # Example
//!
//! ```
//! use locale_faker::{Genders, Languages, Person, PersonOptions, Regions, full_name, seed_thread};
//!
//! seed_thread(2026);
//! let name = full_name(Languages::JAPANESE, Genders::FEMALE);
//! assert!(!name.original().contains(' '));
//! assert!(name.translation().contains(' '));
//!
//! let person = Person::new(PersonOptions {
//!     languages: Languages::SIMPLIFIED_CHINESE,
//!     regions: Regions::CHINA,
//!     email_domains: "example.cn".to_owned(),
//!     ..PersonOptions::default()
//! })
//! .expect("valid options");
//! assert!(person.email().ends_with("@example.cn"));
//! ```

mod bilingual;
mod business;
mod choice;
mod computer;
mod config;
mod data;
mod datetime;
mod error;
mod location;
mod number;
mod payment;
mod person;
mod product;
mod random;
pub mod sample_cli;
mod select;
mod string;
mod template;
mod validation;

pub use bilingual::{Bilingual, BilingualRef};
pub use business::{Company, company_name, department, industry};
pub use choice::{
    BarcodeType, BarcodeTypes, CardType, CardTypes, CountryCodesStandard, DaysOfWeek, FileType,
    Gender, Genders, Industry, IpAddressType, Language, Languages, MaritalStatus, MaskedChoice,
    OperatingSystem, OperatingSystems, Region, Regions,
};
pub use computer::{
    File, file_directory, file_extension, file_name, file_path, hostname, ip_address,
    mac_address, url,
};
pub use config::{MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT, SampleConfig};
pub use datetime::{
    DEFAULT_END_DATE, DEFAULT_END_TIME, DEFAULT_START_DATE, DEFAULT_START_TIME, date, datetime,
    time,
};
pub use error::{CalendarViolation, ConfigError, ErrorKind, FakerError};
pub use location::{
    Location, address_line1, address_line2, city, full_address, postcode, region,
};
pub use number::{Float, Integer, MAX_DECIMAL_PLACES, decimal, decimal_string, integer};
pub use payment::{Card, card_date, card_number, card_type, payment_method};
pub use person::{
    Person, PersonOptions, PhoneNumberStyle, email, first_name, full_name, gender, job_title,
    last_name, marital_status, phone_number, social_network_id, title,
};
pub use product::{barcode, color, product_category, product_name, size};
pub use random::{reseed_from_entropy, seed_thread, uniform_in_range};
pub use select::{pick_from_mask, pick_one};
pub use string::{enum_item, text, uuid};
pub use template::{
    DIGIT_WILDCARD, DIGITS, LETTER_WILDCARD, LETTERS, NONZERO_DIGITS, PLACEHOLDER,
    UPPERCASE_LETTERS, capitalize_words, remove_characters, replace_digits, replace_letters,
    replace_placeholder, replace_wildcard, replace_wildcards_correlated,
    replace_digits_correlated, replace_letters_correlated, split_and_trim,
};
pub use validation::{CARD_DATE_FORMAT, DATE_FORMAT, TIME_FORMAT};
