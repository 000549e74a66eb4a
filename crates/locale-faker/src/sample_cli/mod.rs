//! CLI support for printing sample records.
//!
//! This module provides argument parsing and record generation for the
//! sample binary. The binary delegates to these functions so they can be
//! exercised in tests without spawning a subprocess.

mod error;

use std::fmt;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use serde_json::{Value, json};
use tracing::info;

use crate::business::Company;
use crate::computer::File;
use crate::config::{MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT, SampleConfig};
use crate::error::ConfigError;
use crate::location::Location;
use crate::payment::Card;
use crate::person::{Person, PersonOptions, PhoneNumberStyle};
use crate::random::seed_thread;

pub use error::CliError;

const LIST_DELIMITER: char = ',';
const CARD_START: &str = "01/26";
const CARD_END: &str = "12/35";

/// Kind of record the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKind {
    /// A [`Person`].
    #[default]
    Person,
    /// A [`Company`].
    Company,
    /// A [`Location`].
    Location,
    /// A [`File`].
    File,
    /// A [`Card`].
    Card,
}

impl FromStr for RecordKind {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "person" => Ok(Self::Person),
            "company" => Ok(Self::Company),
            "location" => Ok(Self::Location),
            "file" => Ok(Self::File),
            "card" => Ok(Self::Card),
            _ => Err(CliError::UnknownKind {
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Person => "person",
            Self::Company => "company",
            Self::Location => "location",
            Self::File => "file",
            Self::Card => "card",
        };
        f.write_str(name)
    }
}

/// Parsed options for the sample CLI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    config_path: Option<Utf8PathBuf>,
    kind: RecordKind,
    count: Option<usize>,
    seed: Option<u64>,
}

impl Options {
    /// Returns the configuration path, if one was supplied.
    #[must_use]
    pub fn config_path(&self) -> Option<&Utf8Path> {
        self.config_path.as_deref()
    }

    /// Returns the kind of record to print.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Returns the record count override.
    #[must_use]
    pub const fn count(&self) -> Option<usize> {
        self.count
    }

    /// Returns the seed the run is pinned to.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments into sample options.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, lacks its value, or carries
/// a value that cannot be parsed.
///
/// # Example
///
/// ```
/// use locale_faker::sample_cli::{ParseOutcome, RecordKind, parse_args};
///
/// let args = vec!["--kind".to_owned(), "card".to_owned(), "--seed".to_owned(), "7".to_owned()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.kind(), RecordKind::Card);
/// assert_eq!(options.seed(), Some(7));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--config" => {
                let value = next_value(&mut args, "--config")?;
                options.config_path = Some(Utf8PathBuf::from(value));
            }
            "--kind" => {
                let value = next_value(&mut args, "--kind")?;
                options.kind = value.parse()?;
            }
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                options.count = Some(parse_number(&value, "--count")?);
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                options.seed = Some(parse_number(&value, "--seed")?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(options))
}

/// Generates the requested records, one JSON document per entry.
///
/// The configuration file is read when one was supplied; otherwise
/// [`SampleConfig::default`] applies. `--count` overrides the configured
/// count and `--seed` pins the calling thread's random source first.
///
/// # Errors
///
/// Returns [`CliError`] when the configuration cannot be loaded, the count is
/// out of bounds, or a generator rejects the configured choices.
///
/// # Example
///
/// ```
/// use locale_faker::sample_cli::{ParseOutcome, parse_args, run_sample};
///
/// let args = vec!["--kind".to_owned(), "company".to_owned(), "--count".to_owned(), "2".to_owned()];
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let lines = run_sample(&options).expect("generate");
/// assert_eq!(lines.len(), 2);
/// assert!(lines.iter().all(|line| line.contains("\"kind\":\"company\"")));
/// ```
pub fn run_sample(options: &Options) -> Result<Vec<String>, CliError> {
    let config = match options.config_path() {
        Some(path) => load_config(path)?,
        None => SampleConfig::default(),
    };
    let count = resolve_count(options.count, &config)?;

    if let Some(seed) = options.seed {
        seed_thread(seed);
    }
    info!(kind = %options.kind, count, seed = ?options.seed, "generating sample records");

    let records = generate_records(options.kind, &config, count)?;
    records
        .iter()
        .map(|record| {
            serde_json::to_string(record).map_err(|err| CliError::Serialize {
                message: err.to_string(),
            })
        })
        .collect()
}

fn load_config(path: &Utf8Path) -> Result<SampleConfig, CliError> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        ConfigError::IoError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;
    let file_name = path.file_name().map_or(path, Utf8Path::new);
    Ok(SampleConfig::from_file(&dir, file_name)?)
}

fn resolve_count(requested: Option<usize>, config: &SampleConfig) -> Result<usize, CliError> {
    let count = requested.unwrap_or_else(|| config.count());
    if (MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(ConfigError::CountOutOfRange {
            min: MIN_SAMPLE_COUNT,
            max: MAX_SAMPLE_COUNT,
            actual: count,
        }
        .into())
    }
}

fn generate_records(
    kind: RecordKind,
    config: &SampleConfig,
    count: usize,
) -> Result<Vec<Value>, CliError> {
    let records = match kind {
        RecordKind::Person => {
            let mut person = Person::new(PersonOptions {
                genders: config.genders(),
                languages: config.languages(),
                regions: config.regions(),
                email_domains: config.email_domains().join(","),
                delimiter: LIST_DELIMITER,
            })?;
            collect_rolls(&mut person, count, person_record, Person::reroll)
        }
        RecordKind::Company => {
            let mut company = Company::new(config.languages());
            collect_rolls(&mut company, count, company_record, Company::reroll)
        }
        RecordKind::Location => {
            let mut location = Location::new(config.regions());
            collect_rolls(&mut location, count, location_record, Location::reroll)
        }
        RecordKind::File => {
            let extensions = config.extensions().join(",");
            let mut file = File::new(config.operating_systems(), &extensions, LIST_DELIMITER);
            collect_rolls(&mut file, count, file_record, File::reroll)
        }
        RecordKind::Card => {
            let mut card = Card::new(config.languages(), config.card_types(), CARD_START, CARD_END)?;
            collect_rolls(&mut card, count, card_record, Card::reroll)
        }
    };
    Ok(records)
}

/// Renders the current roll, then rerolls before each further record.
fn collect_rolls<E>(
    entity: &mut E,
    count: usize,
    render: fn(&E) -> Value,
    reroll: fn(&mut E),
) -> Vec<Value> {
    let mut records = Vec::with_capacity(count);
    for index in 0..count {
        if index > 0 {
            reroll(entity);
        }
        records.push(render(entity));
    }
    records
}

fn person_record(person: &Person) -> Value {
    json!({
        "kind": "person",
        "language": person.language(),
        "region": person.region(),
        "gender": person.gender_label(),
        "title": person.title(),
        "fullName": person.full_name(),
        "maritalStatus": person.marital_status_label(),
        "phoneNumber": person.phone_number(PhoneNumberStyle::INTERNATIONAL),
        "email": person.email(),
        "jobTitle": person.job_title(),
        "socialNetworkId": person.social_network_id(),
    })
}

fn company_record(company: &Company) -> Value {
    json!({
        "kind": "company",
        "language": company.language(),
        "name": company.name(),
        "industry": company.industry_label(),
    })
}

fn location_record(location: &Location) -> Value {
    json!({
        "kind": "location",
        "region": location.region(),
        "postcode": location.postcode(),
        "city": location.city(),
        "fullAddress": location.full_address(),
    })
}

fn file_record(file: &File) -> Value {
    json!({
        "kind": "file",
        "operatingSystem": file.operating_system(),
        "path": file.path(),
        "name": file.name(),
        "extension": file.extension(),
    })
}

fn card_record(card: &Card) -> Value {
    json!({
        "kind": "card",
        "language": card.language(),
        "network": card.network(),
        "cardType": card.card_type(),
        "number": card.number(),
        "date": card.date(),
    })
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
