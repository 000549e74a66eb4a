//! Company naming parts, industries, and departments.

use super::{bi, en};
use crate::bilingual::BilingualRef;
use crate::choice::{Industry, Language};

pub(crate) const fn company_suffixes(language: Language) -> &'static [BilingualRef] {
    match language {
        Language::English => const { &[
            en("Company Limited"),
            en("Limited"),
            en("Corporation"),
            en("Inc."),
            en("LLC"),
        ] },
        Language::SimplifiedChinese => const { &[
            bi("有限公司", "Company Limited"),
            bi("股份有限公司", "Corporation"),
            bi("有限责任公司", "LLC"),
        ] },
        Language::TraditionalChinese => const { &[
            bi("有限公司", "Company Limited"),
            bi("股份有限公司", "Corporation"),
            bi("有限責任公司", "LLC"),
        ] },
        Language::Japanese => const { &[bi("株式会社", "Corporation")] },
    }
}

/// Text attached to the founder's surname. English entries carry their own
/// leading space.
pub(crate) const fn last_name_suffixes(language: Language) -> &'static [BilingualRef] {
    match language {
        Language::English => const { &[en(""), en(" Brothers")] },
        Language::SimplifiedChinese => const { &[en(""), bi("氏", " Shi"), bi("氏兄弟", " Brothers")] },
        Language::TraditionalChinese => const { &[en(""), bi("記", " Kee"), bi("氏兄弟", " Brothers")] },
        Language::Japanese => const { &[en(""), bi("商会", " Shokai"), bi("商店", " Shoten")] },
    }
}

pub(crate) const fn industry_label(language: Language, industry: Industry) -> &'static str {
    match language {
        Language::English => match industry {
            Industry::Catering => "Catering industry",
            Industry::Consulting => "Consulting industry",
            Industry::Electronics => "Electronics industry",
            Industry::Engineering => "Engineering industry",
            Industry::FinancialServices => "Financial services industry",
            Industry::Industrial => "Industrial industry",
            Industry::InformationTechnology => "Information technology industry",
            Industry::LandedProperty => "Landed property industry",
            Industry::Logistic => "Logistic industry",
            Industry::Manufacturing => "Manufacturing industry",
            Industry::Pharmaceutical => "Pharmaceutical industry",
            Industry::Telecommunication => "Telecommunication industry",
            Industry::Trading => "Trading industry",
        },
        Language::SimplifiedChinese => match industry {
            Industry::Catering => "餐饮业",
            Industry::Consulting => "咨询业",
            Industry::Electronics => "电子行业",
            Industry::Engineering => "工程业",
            Industry::FinancialServices => "金融服务业",
            Industry::Industrial => "工业",
            Industry::InformationTechnology => "信息技术业",
            Industry::LandedProperty => "房地产业",
            Industry::Logistic => "物流业",
            Industry::Manufacturing => "制造业",
            Industry::Pharmaceutical => "制药业",
            Industry::Telecommunication => "电信业",
            Industry::Trading => "贸易行业",
        },
        Language::TraditionalChinese => match industry {
            Industry::Catering => "餐飲業",
            Industry::Consulting => "諮詢業",
            Industry::Electronics => "電子業",
            Industry::Engineering => "工程業",
            Industry::FinancialServices => "金融服務業",
            Industry::Industrial => "工業",
            Industry::InformationTechnology => "信息技術業",
            Industry::LandedProperty => "房地產業",
            Industry::Logistic => "物流業",
            Industry::Manufacturing => "製造業",
            Industry::Pharmaceutical => "製藥業",
            Industry::Telecommunication => "電訊業",
            Industry::Trading => "貿易行業",
        },
        Language::Japanese => match industry {
            Industry::Catering => "ケータリング業界",
            Industry::Consulting => "コンサルティング業界",
            Industry::Electronics => "エレクトロニクス産業",
            Industry::Engineering => "エンジニアリング業界",
            Industry::FinancialServices => "金融サービス業界",
            Industry::Industrial => "産業",
            Industry::InformationTechnology => "情報技術産業",
            Industry::LandedProperty => "不動産業界",
            Industry::Logistic => "物流業界",
            Industry::Manufacturing => "製造業界",
            Industry::Pharmaceutical => "製薬業界",
            Industry::Telecommunication => "電気通信産業",
            Industry::Trading => "貿易業界",
        },
    }
}

const fn english_business_words(industry: Industry) -> &'static [BilingualRef] {
    match industry {
        Industry::Catering => const { &[en("Catering"), en("Food Service")] },
        Industry::Consulting => const { &[en("Consulting"), en("Advisory")] },
        Industry::Electronics => const { &[en("Electronics"), en("Semiconductor"), en("Appliance")] },
        Industry::Engineering => const { &[en("Engineering"), en("Construction")] },
        Industry::FinancialServices => const { &[
            en("Financial Services"),
            en("Financial"),
            en("Investment"),
            en("Insurance"),
        ] },
        Industry::Industrial => const { &[
            en("Industrial"),
            en("Machinery"),
            en("Equipment"),
            en("Heavy Industry"),
        ] },
        Industry::InformationTechnology => const { &[
            en("Information Technology"),
            en("Software"),
            en("Internet"),
            en("Computer System"),
        ] },
        Industry::LandedProperty => const { &[en("Property"), en("Real Estate")] },
        Industry::Logistic => const { &[en("Logistic"), en("Transportation"), en("Warehousing")] },
        Industry::Manufacturing => const { &[en("Manufacturing"), en("Production")] },
        Industry::Pharmaceutical => const { &[
            en("Pharma"),
            en("Pharmaceutical"),
            en("Drug"),
            en("Biotechnology"),
        ] },
        Industry::Telecommunication => const { &[
            en("Telecommunication"),
            en("Communication"),
            en("Network"),
            en("Wireless"),
        ] },
        Industry::Trading => const { &[en("Trading"), en("Foreign Trading"), en("Commerce")] },
    }
}

const fn simplified_chinese_business_words(industry: Industry) -> &'static [BilingualRef] {
    match industry {
        Industry::Catering => const { &[bi("餐饮", "Catering"), bi("食品服务", "Food Service")] },
        Industry::Consulting => const { &[bi("咨询", "Consulting"), bi("顾问", "Advisory")] },
        Industry::Electronics => const { &[
            bi("电子", "Electronics"),
            bi("半导体", "Semiconductor"),
            bi("家电", "Appliance"),
        ] },
        Industry::Engineering => const { &[bi("工程", "Engineering"), bi("建设", "Construction")] },
        Industry::FinancialServices => const { &[
            bi("金融服务", "Financial Services"),
            bi("金融", "Financial"),
            bi("投资", "Investment"),
            bi("保险", "Insurance"),
        ] },
        Industry::Industrial => const { &[
            bi("实业", "Industrial"),
            bi("机械", "Machinery"),
            bi("设备", "Equipment"),
            bi("重工", "Heavy Industry"),
        ] },
        Industry::InformationTechnology => const { &[
            bi("信息技术", "Information Technology"),
            bi("软件", "Software"),
            bi("网络科技", "Internet"),
            bi("计算机系统", "Computer System"),
        ] },
        Industry::LandedProperty => const { &[bi("置业", "Property"), bi("房地产", "Real Estate")] },
        Industry::Logistic => const { &[
            bi("物流", "Logistic"),
            bi("运输", "Transportation"),
            bi("仓储", "Warehousing"),
        ] },
        Industry::Manufacturing => const { &[bi("制造", "Manufacturing"), bi("生产", "Production")] },
        Industry::Pharmaceutical => const { &[
            bi("药业", "Pharma"),
            bi("制药", "Pharmaceutical"),
            bi("医药", "Drug"),
            bi("生物科技", "Biotechnology"),
        ] },
        Industry::Telecommunication => const { &[
            bi("电信", "Telecommunication"),
            bi("通信", "Communication"),
            bi("网络", "Network"),
            bi("无线", "Wireless"),
        ] },
        Industry::Trading => const { &[
            bi("贸易", "Trading"),
            bi("外贸", "Foreign Trading"),
            bi("商贸", "Commerce"),
        ] },
    }
}

const fn traditional_chinese_business_words(industry: Industry) -> &'static [BilingualRef] {
    match industry {
        Industry::Catering => const { &[bi("餐飲", "Catering"), bi("食品服務", "Food Service")] },
        Industry::Consulting => const { &[bi("諮詢", "Consulting"), bi("顧問", "Advisory")] },
        Industry::Electronics => const { &[
            bi("電子", "Electronics"),
            bi("半導體", "Semiconductor"),
            bi("家電", "Appliance"),
        ] },
        Industry::Engineering => const { &[bi("工程", "Engineering"), bi("建設", "Construction")] },
        Industry::FinancialServices => const { &[
            bi("金融服務", "Financial Services"),
            bi("金融", "Financial"),
            bi("投資", "Investment"),
            bi("保險", "Insurance"),
        ] },
        Industry::Industrial => const { &[
            bi("實業", "Industrial"),
            bi("機械", "Machinery"),
            bi("設備", "Equipment"),
            bi("重工", "Heavy Industry"),
        ] },
        Industry::InformationTechnology => const { &[
            bi("資訊科技", "Information Technology"),
            bi("軟件", "Software"),
            bi("網絡", "Internet"),
            bi("電腦系統", "Computer System"),
        ] },
        Industry::LandedProperty => const { &[bi("置業", "Property"), bi("地產", "Real Estate")] },
        Industry::Logistic => const { &[
            bi("物流", "Logistic"),
            bi("運輸", "Transportation"),
            bi("倉儲", "Warehousing"),
        ] },
        Industry::Manufacturing => const { &[bi("製造", "Manufacturing"), bi("生產", "Production")] },
        Industry::Pharmaceutical => const { &[
            bi("藥業", "Pharma"),
            bi("製藥", "Pharmaceutical"),
            bi("醫藥", "Drug"),
            bi("生物科技", "Biotechnology"),
        ] },
        Industry::Telecommunication => const { &[
            bi("電訊", "Telecommunication"),
            bi("通訊", "Communication"),
            bi("網絡", "Network"),
            bi("無線", "Wireless"),
        ] },
        Industry::Trading => const { &[
            bi("貿易", "Trading"),
            bi("外貿", "Foreign Trading"),
            bi("商貿", "Commerce"),
        ] },
    }
}

const fn japanese_business_words(industry: Industry) -> &'static [BilingualRef] {
    match industry {
        Industry::Catering => const { &[bi("ケータリング", "Catering"), bi("フードサービス", "Food Service")] },
        Industry::Consulting => const { &[bi("コンサルティング", "Consulting"), bi("アドバイザリー", "Advisory")] },
        Industry::Electronics => const { &[
            bi("電子", "Electronics"),
            bi("半導体", "Semiconductor"),
            bi("家電", "Appliance"),
        ] },
        Industry::Engineering => const { &[bi("エンジニアリング", "Engineering"), bi("建設", "Construction")] },
        Industry::FinancialServices => const { &[
            bi("金融サービス", "Financial Services"),
            bi("ファイナンス", "Financial"),
            bi("投資", "Investment"),
            bi("保険", "Insurance"),
        ] },
        Industry::Industrial => const { &[
            bi("工業", "Industrial"),
            bi("機械", "Machinery"),
            bi("設備", "Equipment"),
            bi("重工業", "Heavy Industry"),
        ] },
        Industry::InformationTechnology => const { &[
            bi("情報技術", "Information Technology"),
            bi("ソフトウェア", "Software"),
            bi("インターネット", "Internet"),
            bi("コンピュータシステム", "Computer System"),
        ] },
        Industry::LandedProperty => const { &[bi("地所", "Property"), bi("不動産", "Real Estate")] },
        Industry::Logistic => const { &[
            bi("物流", "Logistic"),
            bi("運輸", "Transportation"),
            bi("倉庫", "Warehousing"),
        ] },
        Industry::Manufacturing => const { &[bi("製作所", "Manufacturing"), bi("生産", "Production")] },
        Industry::Pharmaceutical => const { &[
            bi("ファーマ", "Pharma"),
            bi("製薬", "Pharmaceutical"),
            bi("薬品", "Drug"),
            bi("バイオテクノロジー", "Biotechnology"),
        ] },
        Industry::Telecommunication => const { &[
            bi("電気通信", "Telecommunication"),
            bi("通信", "Communication"),
            bi("ネットワーク", "Network"),
            bi("ワイヤレス", "Wireless"),
        ] },
        Industry::Trading => const { &[
            bi("貿易", "Trading"),
            bi("商事", "Foreign Trading"),
            bi("物産", "Commerce"),
        ] },
    }
}

/// Words naming a company's line of business.
pub(crate) const fn business_words(language: Language, industry: Industry) -> &'static [BilingualRef] {
    match language {
        Language::English => english_business_words(industry),
        Language::SimplifiedChinese => simplified_chinese_business_words(industry),
        Language::TraditionalChinese => traditional_chinese_business_words(industry),
        Language::Japanese => japanese_business_words(industry),
    }
}

pub(crate) const fn departments(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "Accounting & Finance",
            "Administration",
            "Business Development",
            "Customer Service",
            "Engineering",
            "Human Resources",
            "Information Technology",
            "Legal",
            "Logistics",
            "Marketing",
            "Operations",
            "Procurement",
            "Public Relations",
            "Quality Assurance",
            "Research & Development",
            "Sales",
        ],
        Language::SimplifiedChinese => &[
            "会计及金融部",
            "行政部",
            "业务拓展部",
            "客户服务部",
            "工程部",
            "人力资源部",
            "信息技术部",
            "法务部",
            "物流部",
            "市场部",
            "运营部",
            "采购部",
            "公共关系部",
            "质量保证部",
            "研发部",
            "销售部",
        ],
        Language::TraditionalChinese => &[
            "會計及金融部",
            "行政部",
            "業務拓展部",
            "客戶服務部",
            "工程部",
            "人力資源部",
            "資訊科技部",
            "法務部",
            "物流部",
            "市場部",
            "營運部",
            "採購部",
            "公共關係部",
            "品質保證部",
            "研發部",
            "銷售部",
        ],
        Language::Japanese => &[
            "会計財務部",
            "総務部",
            "事業開発部",
            "カスタマーサービス部",
            "技術部",
            "人事部",
            "情報システム部",
            "法務部",
            "物流部",
            "マーケティング部",
            "業務部",
            "購買部",
            "広報部",
            "品質保証部",
            "研究開発部",
            "営業部",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::MaskedChoice;

    #[test]
    fn every_language_and_industry_has_words() {
        for language in Language::ALL {
            assert!(!company_suffixes(*language).is_empty());
            assert!(!last_name_suffixes(*language).is_empty());
            assert_eq!(departments(*language).len(), 16);
            for industry in Industry::ALL {
                assert!(!business_words(*language, industry).is_empty());
                assert!(!industry_label(*language, industry).is_empty());
            }
        }
    }

    #[test]
    fn translations_line_up_with_english_vocabulary() {
        for language in Language::ALL {
            for industry in Industry::ALL {
                let english: Vec<_> = business_words(Language::English, industry)
                    .iter()
                    .map(|word| word.translation)
                    .collect();
                for word in business_words(*language, industry) {
                    assert!(english.contains(&word.translation), "{word:?}");
                }
            }
        }
    }
}
