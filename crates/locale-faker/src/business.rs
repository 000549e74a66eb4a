//! Company names, industries, departments, and the [`Company`] entity.

use tracing::debug;

use crate::bilingual::Bilingual;
use crate::choice::{Industry, Language, Languages};
use crate::data::business::{
    business_words, company_suffixes, departments, industry_label, last_name_suffixes,
};
use crate::data::person::last_names;
use crate::select::{pick_from_mask, pick_one};

/// Draws a company name.
///
/// Names are built from a founder's surname, an optional family suffix, a
/// word for the line of business, and a legal suffix. Chinese and Japanese
/// names join the parts without spaces. The translation always uses the
/// English layout.
///
/// # Example
///
/// ```
/// use locale_faker::{Languages, company_name};
///
/// let name = company_name(Languages::TRADITIONAL_CHINESE);
/// assert!(!name.original().contains(' '));
/// assert!(name.translation().contains(' '));
/// ```
#[must_use]
pub fn company_name(languages: Languages) -> Bilingual {
    let language = pick_from_mask(languages);
    compose_company_name(language, *pick_one(&Industry::ALL))
}

/// Returns the localized label of a random industry.
#[must_use]
pub fn industry(languages: Languages) -> String {
    let language = pick_from_mask(languages);
    industry_label(language, *pick_one(&Industry::ALL)).to_owned()
}

/// Draws a department name.
#[must_use]
pub fn department(languages: Languages) -> String {
    let language = pick_from_mask(languages);
    (*pick_one(departments(language))).to_owned()
}

fn compose_company_name(language: Language, industry: Industry) -> Bilingual {
    let words = match business_words(language, industry) {
        [] => business_words(language, Industry::Trading),
        listed => listed,
    };
    let last = pick_one(last_names(language));
    let family = pick_one(last_name_suffixes(language));
    let word = pick_one(words);
    let legal = pick_one(company_suffixes(language));

    let translation = format!(
        "{}{} {} {}",
        last.translation, family.translation, word.translation, legal.translation
    );
    let original = if language.is_cjk() {
        format!(
            "{}{}{}{}",
            last.original, family.original, word.original, legal.original
        )
    } else {
        format!(
            "{}{} {} {}",
            last.original, family.original, word.original, legal.original
        )
    };
    Bilingual::new(original, translation)
}

/// A generated company whose name matches its industry.
///
/// # Example
///
/// ```
/// use locale_faker::{Company, Languages};
///
/// let company = Company::new(Languages::ENGLISH);
/// assert!(company.industry_label().ends_with("industry"));
/// assert_eq!(company.name().original(), company.name().translation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    languages: Languages,
    language: Language,
    industry: Industry,
    name: Bilingual,
    industry_label: String,
}

impl Company {
    /// Rolls a company in one of `languages`.
    #[must_use]
    pub fn new(languages: Languages) -> Self {
        roll(languages)
    }

    /// Replaces every field with a fresh roll.
    pub fn reroll(&mut self) {
        *self = roll(self.languages);
    }

    /// Selected language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Selected industry.
    #[must_use]
    pub const fn industry(&self) -> Industry {
        self.industry
    }

    /// Company name.
    #[must_use]
    pub const fn name(&self) -> &Bilingual {
        &self.name
    }

    /// Localized industry label.
    #[must_use]
    pub fn industry_label(&self) -> &str {
        &self.industry_label
    }
}

fn roll(languages: Languages) -> Company {
    let language = pick_from_mask(languages);
    let industry = *pick_one(&Industry::ALL);
    debug!(?language, ?industry, "rolling company");
    Company {
        languages,
        language,
        industry,
        name: compose_company_name(language, industry),
        industry_label: industry_label(language, industry).to_owned(),
    }
}
