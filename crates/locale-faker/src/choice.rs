//! Choice dimensions: concrete enums and the flag sets callers combine them in.
//!
//! Every maskable dimension comes as a pair. The enum names one concrete
//! choice (`Language::Japanese`). The [`bitflags`] set names any combination
//! of choices (`Languages::ENGLISH.union(Languages::JAPANESE)`). Generators
//! take a set and resolve it to one concrete choice with
//! [`pick_from_mask`](crate::pick_from_mask).

use bitflags::bitflags;
use bitflags::Flags;
use serde::{Deserialize, Serialize};

/// A concrete choice that can be drawn out of a flag set.
pub trait MaskedChoice: Copy + Eq + 'static {
    /// Flag set this choice belongs to.
    type Set: Flags + Copy;

    /// Every choice of the dimension, in declaration order.
    const ALL: &'static [Self];

    /// Choice returned when a mask names no recognized member.
    const DEFAULT: Self;

    /// Returns the single-flag set for this choice.
    fn flag(self) -> Self::Set;
}

macro_rules! masked_choice {
    (
        $choice:ident => $set:ident, default $default:ident,
        [$($variant:ident => $flag:ident),+ $(,)?]
    ) => {
        impl MaskedChoice for $choice {
            type Set = $set;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const DEFAULT: Self = Self::$default;

            fn flag(self) -> $set {
                match self {
                    $(Self::$variant => $set::$flag),+
                }
            }
        }

        impl From<$choice> for $set {
            fn from(choice: $choice) -> Self {
                choice.flag()
            }
        }

        impl FromIterator<$choice> for $set {
            fn from_iter<I: IntoIterator<Item = $choice>>(iter: I) -> Self {
                iter.into_iter()
                    .fold(Self::empty(), |set, choice| set.union(choice.flag()))
            }
        }
    };
}

/// Language a generated value is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Language {
    /// English.
    English,
    /// Simplified Chinese.
    SimplifiedChinese,
    /// Traditional Chinese.
    TraditionalChinese,
    /// Japanese.
    Japanese,
}

impl Language {
    /// Returns `true` for languages that write personal and company names
    /// surname first without separating spaces.
    #[must_use]
    pub const fn is_cjk(self) -> bool {
        matches!(
            self,
            Self::SimplifiedChinese | Self::TraditionalChinese | Self::Japanese
        )
    }
}

bitflags! {
    /// Set of [`Language`] choices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Languages: u8 {
        /// English.
        const ENGLISH = 1 << 0;
        /// Simplified Chinese.
        const SIMPLIFIED_CHINESE = 1 << 1;
        /// Traditional Chinese.
        const TRADITIONAL_CHINESE = 1 << 2;
        /// Japanese.
        const JAPANESE = 1 << 3;
    }
}

masked_choice!(Language => Languages, default English, [
    English => ENGLISH,
    SimplifiedChinese => SIMPLIFIED_CHINESE,
    TraditionalChinese => TRADITIONAL_CHINESE,
    Japanese => JAPANESE,
]);

/// Country or region whose conventions a value follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    /// United States.
    UnitedStates,
    /// United Kingdom.
    UnitedKingdom,
    /// China.
    China,
    /// Japan.
    Japan,
}

bitflags! {
    /// Set of [`Region`] choices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Regions: u8 {
        /// United States.
        const UNITED_STATES = 1 << 0;
        /// United Kingdom.
        const UNITED_KINGDOM = 1 << 1;
        /// China.
        const CHINA = 1 << 2;
        /// Japan.
        const JAPAN = 1 << 3;
    }
}

masked_choice!(Region => Regions, default UnitedStates, [
    UnitedStates => UNITED_STATES,
    UnitedKingdom => UNITED_KINGDOM,
    China => CHINA,
    Japan => JAPAN,
]);

/// Grammatical gender of a generated person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

bitflags! {
    /// Set of [`Gender`] choices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Genders: u8 {
        /// Male.
        const MALE = 1 << 0;
        /// Female.
        const FEMALE = 1 << 1;
    }
}

masked_choice!(Gender => Genders, default Male, [
    Male => MALE,
    Female => FEMALE,
]);

/// Payment card network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    /// American Express.
    AmericanExpress,
    /// JCB.
    Jcb,
    /// MasterCard.
    MasterCard,
    /// UnionPay.
    UnionPay,
    /// Visa.
    Visa,
}

bitflags! {
    /// Set of [`CardType`] choices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CardTypes: u8 {
        /// American Express.
        const AMERICAN_EXPRESS = 1 << 0;
        /// JCB.
        const JCB = 1 << 1;
        /// MasterCard.
        const MASTER_CARD = 1 << 2;
        /// UnionPay.
        const UNION_PAY = 1 << 3;
        /// Visa.
        const VISA = 1 << 4;
    }
}

masked_choice!(CardType => CardTypes, default Visa, [
    AmericanExpress => AMERICAN_EXPRESS,
    Jcb => JCB,
    MasterCard => MASTER_CARD,
    UnionPay => UNION_PAY,
    Visa => VISA,
]);

/// Product barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BarcodeType {
    /// EAN-13.
    Ean13,
    /// EAN-8.
    Ean8,
    /// UPC-A.
    UpcA,
    /// UPC-E.
    UpcE,
    /// ISBN (EAN-13 with a Bookland prefix).
    Isbn,
}

bitflags! {
    /// Set of [`BarcodeType`] choices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BarcodeTypes: u8 {
        /// EAN-8.
        const EAN8 = 1 << 0;
        /// EAN-13.
        const EAN13 = 1 << 1;
        /// UPC-A.
        const UPC_A = 1 << 2;
        /// UPC-E.
        const UPC_E = 1 << 3;
        /// ISBN.
        const ISBN = 1 << 4;
    }
}

masked_choice!(BarcodeType => BarcodeTypes, default Ean13, [
    Ean13 => EAN13,
    Ean8 => EAN8,
    UpcA => UPC_A,
    UpcE => UPC_E,
    Isbn => ISBN,
]);

/// Operating system whose filesystem conventions a path follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatingSystem {
    /// Windows.
    Windows,
    /// macOS.
    MacOs,
    /// Linux.
    Linux,
}

impl OperatingSystem {
    /// Path separator used by this operating system.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::MacOs | Self::Linux => '/',
        }
    }
}

bitflags! {
    /// Set of [`OperatingSystem`] choices.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct OperatingSystems: u8 {
        /// Windows.
        const WINDOWS = 1 << 0;
        /// macOS.
        const MAC_OS = 1 << 1;
        /// Linux.
        const LINUX = 1 << 2;
    }
}

masked_choice!(OperatingSystem => OperatingSystems, default Windows, [
    Windows => WINDOWS,
    MacOs => MAC_OS,
    Linux => LINUX,
]);

bitflags! {
    /// Weekdays a generated date may fall on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DaysOfWeek: u8 {
        /// Sunday.
        const SUNDAY = 1 << 0;
        /// Monday.
        const MONDAY = 1 << 1;
        /// Tuesday.
        const TUESDAY = 1 << 2;
        /// Wednesday.
        const WEDNESDAY = 1 << 3;
        /// Thursday.
        const THURSDAY = 1 << 4;
        /// Friday.
        const FRIDAY = 1 << 5;
        /// Saturday.
        const SATURDAY = 1 << 6;
    }
}

impl DaysOfWeek {
    /// Monday through Friday.
    pub const WEEKDAYS: Self = Self::MONDAY
        .union(Self::TUESDAY)
        .union(Self::WEDNESDAY)
        .union(Self::THURSDAY)
        .union(Self::FRIDAY);

    /// Saturday and Sunday.
    pub const WEEKEND: Self = Self::SATURDAY.union(Self::SUNDAY);

    /// Returns the flag for a calendar weekday.
    #[must_use]
    pub const fn from_weekday(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::SUNDAY,
            chrono::Weekday::Mon => Self::MONDAY,
            chrono::Weekday::Tue => Self::TUESDAY,
            chrono::Weekday::Wed => Self::WEDNESDAY,
            chrono::Weekday::Thu => Self::THURSDAY,
            chrono::Weekday::Fri => Self::FRIDAY,
            chrono::Weekday::Sat => Self::SATURDAY,
        }
    }

    /// Returns `true` if `weekday` is allowed by this set.
    #[must_use]
    pub const fn allows(self, weekday: chrono::Weekday) -> bool {
        self.intersects(Self::from_weekday(weekday))
    }
}

/// How a region is named in generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountryCodesStandard {
    /// Localized region name, such as "United Kingdom" or "英国".
    #[default]
    None,
    /// ISO 3166-1 alpha-2 code, such as "GB".
    Iso3166Alpha2,
    /// ISO 3166-1 alpha-3 code, such as "GBR".
    Iso3166Alpha3,
}

/// Internet protocol version of a generated address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IpAddressType {
    /// Dotted-quad IPv4.
    #[default]
    V4,
    /// Eight-group IPv6.
    V6,
}

/// Line of business a generated company works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Industry {
    /// Catering.
    Catering,
    /// Consulting.
    Consulting,
    /// Electronics.
    Electronics,
    /// Engineering.
    Engineering,
    /// Financial services.
    FinancialServices,
    /// Industrial.
    Industrial,
    /// Information technology.
    InformationTechnology,
    /// Landed property.
    LandedProperty,
    /// Logistics.
    Logistic,
    /// Manufacturing.
    Manufacturing,
    /// Pharmaceuticals.
    Pharmaceutical,
    /// Telecommunications.
    Telecommunication,
    /// Trading.
    Trading,
}

impl Industry {
    /// Every industry, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Catering,
        Self::Consulting,
        Self::Electronics,
        Self::Engineering,
        Self::FinancialServices,
        Self::Industrial,
        Self::InformationTechnology,
        Self::LandedProperty,
        Self::Logistic,
        Self::Manufacturing,
        Self::Pharmaceutical,
        Self::Telecommunication,
        Self::Trading,
    ];
}

/// Broad category of a generated file, deciding the folder it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileType {
    /// Applications and shortcuts.
    Application,
    /// Compressed archives and disk images.
    Archive,
    /// Audio.
    Audio,
    /// Configuration.
    Configuration,
    /// Source code and markup.
    Development,
    /// Office documents and plain text.
    Document,
    /// Fonts.
    Font,
    /// Images.
    Image,
    /// Installers and packages.
    Installer,
    /// Shared and static libraries.
    Library,
    /// Logs.
    Log,
    /// Temporary and runtime files.
    Temporary,
    /// Video.
    Video,
    /// An extension with no known category.
    Other,
}

impl FileType {
    /// Every categorized file type. [`FileType::Other`] is excluded.
    pub const KNOWN: [Self; 13] = [
        Self::Application,
        Self::Archive,
        Self::Audio,
        Self::Configuration,
        Self::Development,
        Self::Document,
        Self::Font,
        Self::Image,
        Self::Installer,
        Self::Library,
        Self::Log,
        Self::Temporary,
        Self::Video,
    ];

    /// Folder that files of this type are stored in. Empty for
    /// [`FileType::Other`].
    #[must_use]
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Application => "apps",
            Self::Archive => "archives",
            Self::Audio => "audio",
            Self::Configuration => "conf",
            Self::Development => "src",
            Self::Document => "docs",
            Self::Font => "fonts",
            Self::Image => "images",
            Self::Installer => "install",
            Self::Library => "lib",
            Self::Log => "logs",
            Self::Temporary => "tmp",
            Self::Video => "video",
            Self::Other => "",
        }
    }
}

/// Marital status of a generated person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaritalStatus {
    /// Never married.
    Single,
    /// Married.
    Married,
    /// Divorced.
    Divorced,
    /// Widowed.
    Widowed,
}

impl MaritalStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 4] = [Self::Single, Self::Married, Self::Divorced, Self::Widowed];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn flags_are_distinct_per_dimension() {
        let union = Language::ALL
            .iter()
            .fold(Languages::empty(), |set, language| set.union(language.flag()));
        assert_eq!(union, Languages::all());
        assert_eq!(Language::ALL.len(), 4);
    }

    #[test]
    fn sets_collect_from_choices() {
        let set: Regions = [Region::China, Region::Japan].into_iter().collect();
        assert!(set.contains(Regions::CHINA));
        assert!(set.contains(Regions::JAPAN));
        assert!(!set.contains(Regions::UNITED_STATES));
    }

    #[rstest]
    #[case(chrono::Weekday::Mon, true)]
    #[case(chrono::Weekday::Fri, true)]
    #[case(chrono::Weekday::Sat, false)]
    #[case(chrono::Weekday::Sun, false)]
    fn weekdays_constant_allows_only_working_days(
        #[case] weekday: chrono::Weekday,
        #[case] expected: bool,
    ) {
        assert_eq!(DaysOfWeek::WEEKDAYS.allows(weekday), expected);
    }

    #[test]
    fn weekend_and_weekdays_partition_the_week() {
        assert_eq!(
            DaysOfWeek::WEEKDAYS.union(DaysOfWeek::WEEKEND),
            DaysOfWeek::all()
        );
        assert!(
            DaysOfWeek::WEEKDAYS
                .intersection(DaysOfWeek::WEEKEND)
                .is_empty()
        );
    }

    #[test]
    fn every_known_file_type_has_a_folder() {
        assert!(FileType::KNOWN.iter().all(|kind| !kind.folder().is_empty()));
        assert_eq!(FileType::Other.folder(), "");
    }

    #[test]
    fn language_serializes_in_camel_case() {
        let json = serde_json::to_string(&Language::SimplifiedChinese).expect("serialize");
        assert_eq!(json, "\"simplifiedChinese\"");
    }
}
