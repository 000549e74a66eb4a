//! Sample configuration loading.
//!
//! A sample configuration is a JSON document that fixes the choice sets the
//! sample CLI draws records from. Lists of enum names are folded into the
//! matching flag sets; omitted lists fall back to the generator defaults.

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use crate::choice::{
    CardType, CardTypes, Gender, Genders, Language, Languages, OperatingSystem,
    OperatingSystems, Region, Regions,
};
use crate::error::ConfigError;

/// Configuration version understood by [`SampleConfig::from_raw`].
const SUPPORTED_VERSION: u32 = 1;

/// Smallest accepted record count.
pub const MIN_SAMPLE_COUNT: usize = 1;

/// Largest accepted record count.
pub const MAX_SAMPLE_COUNT: usize = 1_000;

/// Validated choice sets for a sample run.
///
/// # Example
///
/// ```
/// use locale_faker::{Languages, SampleConfig};
///
/// let json = r#"{
///     "version": 1,
///     "languages": ["english", "japanese"],
///     "emailDomains": ["example.jp"],
///     "count": 3
/// }"#;
///
/// let config = SampleConfig::from_json(json).expect("valid config");
/// assert_eq!(config.languages(), Languages::ENGLISH | Languages::JAPANESE);
/// assert_eq!(config.count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    languages: Languages,
    regions: Regions,
    genders: Genders,
    card_types: CardTypes,
    operating_systems: OperatingSystems,
    email_domains: Vec<String>,
    extensions: Vec<String>,
    count: usize,
}

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSampleConfig {
    version: u32,
    #[serde(default)]
    languages: Option<Vec<Language>>,
    #[serde(default)]
    regions: Option<Vec<Region>>,
    #[serde(default)]
    genders: Option<Vec<Gender>>,
    #[serde(default)]
    card_types: Option<Vec<CardType>>,
    #[serde(default)]
    operating_systems: Option<Vec<OperatingSystem>>,
    email_domains: Vec<String>,
    #[serde(default)]
    extensions: Vec<String>,
    count: usize,
}

impl SampleConfig {
    /// Parses a sample configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed JSON or unknown enum
    /// names, and the validation errors of [`SampleConfig::from_raw`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSampleConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    /// Reads and parses a sample configuration relative to `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if the file cannot be read, or any
    /// error from [`SampleConfig::from_json`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use camino::Utf8Path;
    /// use cap_std::{ambient_authority, fs::Dir};
    /// use locale_faker::SampleConfig;
    ///
    /// let dir = Dir::open_ambient_dir(".", ambient_authority()).expect("open dir");
    /// let config = SampleConfig::from_file(&dir, Utf8Path::new("sample.json"))
    ///     .expect("load config");
    /// assert!(config.count() >= 1);
    /// ```
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| ConfigError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSampleConfig) -> Result<Self, ConfigError> {
        // Validate version
        if raw.version != SUPPORTED_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if !(MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT).contains(&raw.count) {
            return Err(ConfigError::CountOutOfRange {
                min: MIN_SAMPLE_COUNT,
                max: MAX_SAMPLE_COUNT,
                actual: raw.count,
            });
        }

        let email_domains = non_blank(raw.email_domains);
        if email_domains.is_empty() {
            return Err(ConfigError::EmptyList {
                field: "emailDomains",
            });
        }

        Ok(Self {
            languages: fold_or(raw.languages, Languages::ENGLISH),
            regions: fold_or(raw.regions, Regions::UNITED_STATES),
            genders: fold_or(raw.genders, Genders::all()),
            card_types: fold_or(raw.card_types, CardTypes::all()),
            operating_systems: fold_or(raw.operating_systems, OperatingSystems::all()),
            email_domains,
            extensions: non_blank(raw.extensions),
            count: raw.count,
        })
    }

    /// Languages records are drawn in.
    #[must_use]
    pub const fn languages(&self) -> Languages {
        self.languages
    }

    /// Regions whose conventions records follow.
    #[must_use]
    pub const fn regions(&self) -> Regions {
        self.regions
    }

    /// Genders persons are drawn from.
    #[must_use]
    pub const fn genders(&self) -> Genders {
        self.genders
    }

    /// Card networks cards are drawn from.
    #[must_use]
    pub const fn card_types(&self) -> CardTypes {
        self.card_types
    }

    /// Operating systems file paths follow.
    #[must_use]
    pub const fn operating_systems(&self) -> OperatingSystems {
        self.operating_systems
    }

    /// Email domains persons use. Never empty.
    #[must_use]
    pub fn email_domains(&self) -> &[String] {
        &self.email_domains
    }

    /// File extensions, without leading dots. May be empty.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Number of records to generate.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            languages: Languages::ENGLISH,
            regions: Regions::UNITED_STATES,
            genders: Genders::all(),
            card_types: CardTypes::all(),
            operating_systems: OperatingSystems::all(),
            email_domains: vec!["example.com".to_owned()],
            extensions: Vec::new(),
            count: MIN_SAMPLE_COUNT,
        }
    }
}

fn fold_or<C, S>(choices: Option<Vec<C>>, fallback: S) -> S
where
    S: FromIterator<C>,
{
    choices.map_or(fallback, |list| list.into_iter().collect())
}

fn non_blank(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_owned())
        .filter(|entry| !entry.is_empty())
        .collect()
}
