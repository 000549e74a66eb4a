//! Card networks.

use crate::choice::{CardType, Language};

pub(crate) const fn card_label(language: Language, card_type: CardType) -> &'static str {
    match (language, card_type) {
        (_, CardType::Jcb) => "JCB",
        (_, CardType::Visa) => "Visa",
        (Language::English, CardType::AmericanExpress) => "American Express",
        (Language::English, CardType::MasterCard) => "MasterCard",
        (Language::English, CardType::UnionPay) => "UnionPay",
        (Language::SimplifiedChinese, CardType::AmericanExpress) => "美国运通",
        (Language::SimplifiedChinese, CardType::MasterCard) => "万事达卡",
        (Language::SimplifiedChinese, CardType::UnionPay) => "银联",
        (Language::TraditionalChinese, CardType::AmericanExpress) => "美國運通",
        (Language::TraditionalChinese, CardType::MasterCard) => "萬事達卡",
        (Language::TraditionalChinese | Language::Japanese, CardType::UnionPay) => "銀聯",
        (Language::Japanese, CardType::AmericanExpress) => "AMEXカード",
        (Language::Japanese, CardType::MasterCard) => "マスターカード",
    }
}

/// Number layouts by network. Each `#` is one digit.
pub(crate) const fn card_number_patterns(card_type: CardType) -> &'static [&'static str] {
    match card_type {
        CardType::AmericanExpress => &["34#############", "37#############"],
        CardType::Jcb => &[
            "3528############",
            "3529############",
            "353#############",
            "354#############",
            "355#############",
            "356#############",
            "357#############",
            "358#############",
        ],
        CardType::MasterCard => &[
            "51##############",
            "52##############",
            "53##############",
            "54##############",
            "55##############",
        ],
        CardType::UnionPay => &["622202#############", "621483##########"],
        CardType::Visa => &["4###############"],
    }
}
