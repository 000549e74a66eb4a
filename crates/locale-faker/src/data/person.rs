//! Names, titles, and contact formats.

use super::{bi, en};
use crate::bilingual::BilingualRef;
use crate::choice::{Gender, Language, MaritalStatus, Region};

const ENGLISH_MALE_FIRST_NAMES: &[BilingualRef] = &[
    en("James"),
    en("John"),
    en("Robert"),
    en("Michael"),
    en("William"),
    en("David"),
    en("Richard"),
    en("Joseph"),
    en("Thomas"),
    en("Charles"),
    en("Daniel"),
    en("Matthew"),
    en("Oliver"),
    en("George"),
    en("Harry"),
];

const ENGLISH_FEMALE_FIRST_NAMES: &[BilingualRef] = &[
    en("Mary"),
    en("Patricia"),
    en("Jennifer"),
    en("Linda"),
    en("Elizabeth"),
    en("Barbara"),
    en("Susan"),
    en("Jessica"),
    en("Sarah"),
    en("Karen"),
    en("Emily"),
    en("Olivia"),
    en("Amelia"),
    en("Isla"),
    en("Charlotte"),
];

const ENGLISH_LAST_NAMES: &[BilingualRef] = &[
    en("Smith"),
    en("Johnson"),
    en("Williams"),
    en("Brown"),
    en("Jones"),
    en("Garcia"),
    en("Miller"),
    en("Davis"),
    en("Wilson"),
    en("Taylor"),
    en("Anderson"),
    en("Thomas"),
    en("Moore"),
    en("Evans"),
    en("Walker"),
];

const SIMPLIFIED_CHINESE_MALE_FIRST_NAMES: &[BilingualRef] = &[
    bi("伟", "Wei"),
    bi("强", "Qiang"),
    bi("磊", "Lei"),
    bi("军", "Jun"),
    bi("洋", "Yang"),
    bi("勇", "Yong"),
    bi("杰", "Jie"),
    bi("涛", "Tao"),
    bi("明", "Ming"),
    bi("超", "Chao"),
    bi("浩然", "Haoran"),
    bi("子轩", "Zixuan"),
];

const SIMPLIFIED_CHINESE_FEMALE_FIRST_NAMES: &[BilingualRef] = &[
    bi("芳", "Fang"),
    bi("娜", "Na"),
    bi("敏", "Min"),
    bi("静", "Jing"),
    bi("丽", "Li"),
    bi("艳", "Yan"),
    bi("娟", "Juan"),
    bi("霞", "Xia"),
    bi("婷", "Ting"),
    bi("秀英", "Xiuying"),
    bi("欣怡", "Xinyi"),
    bi("梓涵", "Zihan"),
];

const SIMPLIFIED_CHINESE_LAST_NAMES: &[BilingualRef] = &[
    bi("王", "Wang"),
    bi("李", "Li"),
    bi("张", "Zhang"),
    bi("刘", "Liu"),
    bi("陈", "Chen"),
    bi("杨", "Yang"),
    bi("黄", "Huang"),
    bi("赵", "Zhao"),
    bi("吴", "Wu"),
    bi("周", "Zhou"),
    bi("徐", "Xu"),
    bi("孙", "Sun"),
    bi("欧阳", "Ouyang"),
];

const TRADITIONAL_CHINESE_MALE_FIRST_NAMES: &[BilingualRef] = &[
    bi("家豪", "Ka-ho"),
    bi("志強", "Chi-keung"),
    bi("俊傑", "Chun-kit"),
    bi("建國", "Kin-kwok"),
    bi("偉", "Wai"),
    bi("文傑", "Man-kit"),
    bi("國華", "Kwok-wah"),
    bi("子軒", "Tsz-hin"),
    bi("冠宇", "Kuan-yu"),
    bi("承恩", "Cheng-en"),
];

const TRADITIONAL_CHINESE_FEMALE_FIRST_NAMES: &[BilingualRef] = &[
    bi("美玲", "Mei-ling"),
    bi("淑芬", "Shu-fen"),
    bi("雅婷", "Ya-ting"),
    bi("嘉欣", "Ka-yan"),
    bi("詠詩", "Wing-sze"),
    bi("慧敏", "Wai-man"),
    bi("怡君", "Yi-chun"),
    bi("佩珊", "Pui-shan"),
    bi("曉彤", "Hiu-tung"),
    bi("家怡", "Ka-yee"),
];

const TRADITIONAL_CHINESE_LAST_NAMES: &[BilingualRef] = &[
    bi("陳", "Chan"),
    bi("黃", "Wong"),
    bi("李", "Lee"),
    bi("張", "Cheung"),
    bi("林", "Lam"),
    bi("劉", "Lau"),
    bi("吳", "Ng"),
    bi("何", "Ho"),
    bi("梁", "Leung"),
    bi("鄭", "Cheng"),
    bi("王", "Wang"),
    bi("謝", "Tse"),
];

const JAPANESE_MALE_FIRST_NAMES: &[BilingualRef] = &[
    bi("翔太", "Shota"),
    bi("大輔", "Daisuke"),
    bi("健太", "Kenta"),
    bi("拓也", "Takuya"),
    bi("蓮", "Ren"),
    bi("悠真", "Yuma"),
    bi("陽翔", "Haruto"),
    bi("大和", "Yamato"),
    bi("隆", "Takashi"),
    bi("浩", "Hiroshi"),
    bi("誠", "Makoto"),
];

const JAPANESE_FEMALE_FIRST_NAMES: &[BilingualRef] = &[
    bi("陽菜", "Hina"),
    bi("結衣", "Yui"),
    bi("さくら", "Sakura"),
    bi("美咲", "Misaki"),
    bi("葵", "Aoi"),
    bi("愛", "Ai"),
    bi("優花", "Yuka"),
    bi("彩", "Aya"),
    bi("恵子", "Keiko"),
    bi("由美", "Yumi"),
    bi("花子", "Hanako"),
];

const JAPANESE_LAST_NAMES: &[BilingualRef] = &[
    bi("佐藤", "Sato"),
    bi("鈴木", "Suzuki"),
    bi("高橋", "Takahashi"),
    bi("田中", "Tanaka"),
    bi("伊藤", "Ito"),
    bi("渡辺", "Watanabe"),
    bi("山本", "Yamamoto"),
    bi("中村", "Nakamura"),
    bi("小林", "Kobayashi"),
    bi("加藤", "Kato"),
    bi("吉田", "Yoshida"),
    bi("山田", "Yamada"),
];

pub(crate) const fn first_names(language: Language, gender: Gender) -> &'static [BilingualRef] {
    match (language, gender) {
        (Language::English, Gender::Male) => ENGLISH_MALE_FIRST_NAMES,
        (Language::English, Gender::Female) => ENGLISH_FEMALE_FIRST_NAMES,
        (Language::SimplifiedChinese, Gender::Male) => SIMPLIFIED_CHINESE_MALE_FIRST_NAMES,
        (Language::SimplifiedChinese, Gender::Female) => SIMPLIFIED_CHINESE_FEMALE_FIRST_NAMES,
        (Language::TraditionalChinese, Gender::Male) => TRADITIONAL_CHINESE_MALE_FIRST_NAMES,
        (Language::TraditionalChinese, Gender::Female) => TRADITIONAL_CHINESE_FEMALE_FIRST_NAMES,
        (Language::Japanese, Gender::Male) => JAPANESE_MALE_FIRST_NAMES,
        (Language::Japanese, Gender::Female) => JAPANESE_FEMALE_FIRST_NAMES,
    }
}

pub(crate) const fn last_names(language: Language) -> &'static [BilingualRef] {
    match language {
        Language::English => ENGLISH_LAST_NAMES,
        Language::SimplifiedChinese => SIMPLIFIED_CHINESE_LAST_NAMES,
        Language::TraditionalChinese => TRADITIONAL_CHINESE_LAST_NAMES,
        Language::Japanese => JAPANESE_LAST_NAMES,
    }
}

pub(crate) const fn gender_label(language: Language, gender: Gender) -> &'static str {
    match (language, gender) {
        (Language::English, Gender::Male) => "Male",
        (Language::English, Gender::Female) => "Female",
        (Language::SimplifiedChinese | Language::TraditionalChinese, Gender::Male) => "男",
        (Language::SimplifiedChinese | Language::TraditionalChinese, Gender::Female) => "女",
        (Language::Japanese, Gender::Male) => "男性",
        (Language::Japanese, Gender::Female) => "女性",
    }
}

pub(crate) const fn titles(language: Language, gender: Gender) -> &'static [&'static str] {
    match (language, gender) {
        (Language::English, Gender::Male) => &["Mr.", "Dr.", "Prof."],
        (Language::English, Gender::Female) => &["Ms.", "Dr.", "Prof."],
        (Language::SimplifiedChinese | Language::TraditionalChinese, Gender::Male) => {
            &["先生", "博士", "教授"]
        }
        (Language::SimplifiedChinese | Language::TraditionalChinese, Gender::Female) => {
            &["女士", "博士", "教授"]
        }
        (Language::Japanese, Gender::Male) => &["さん", "様", "氏", "先生"],
        (Language::Japanese, Gender::Female) => &["さん", "様", "先生"],
    }
}

/// Titles that depend on marital status. Japanese titles do not, so there is
/// no table for them.
pub(crate) const fn female_titles(
    language: Language,
    status: MaritalStatus,
) -> Option<&'static [&'static str]> {
    match (language, status) {
        (Language::English, MaritalStatus::Single) => Some(&["Miss", "Ms."]),
        (Language::English, _) => Some(&["Mrs.", "Ms."]),
        (Language::SimplifiedChinese | Language::TraditionalChinese, MaritalStatus::Single) => {
            Some(&["小姐"])
        }
        (Language::SimplifiedChinese | Language::TraditionalChinese, _) => Some(&["女士", "太太"]),
        (Language::Japanese, _) => None,
    }
}

pub(crate) const fn marital_status_label(language: Language, status: MaritalStatus) -> &'static str {
    match (language, status) {
        (Language::English, MaritalStatus::Single) => "single",
        (Language::English, MaritalStatus::Married) => "married",
        (Language::English, MaritalStatus::Divorced) => "divorced",
        (Language::English, MaritalStatus::Widowed) => "widowed",
        (Language::SimplifiedChinese, MaritalStatus::Single) => "单身",
        (Language::SimplifiedChinese, MaritalStatus::Married) => "已婚",
        (Language::SimplifiedChinese, MaritalStatus::Divorced) => "离异",
        (Language::SimplifiedChinese, MaritalStatus::Widowed) => "丧偶",
        (Language::TraditionalChinese, MaritalStatus::Single) => "單身",
        (Language::TraditionalChinese, MaritalStatus::Married) => "已婚",
        (Language::TraditionalChinese, MaritalStatus::Divorced) => "離異",
        (Language::TraditionalChinese, MaritalStatus::Widowed) => "喪偶",
        (Language::Japanese, MaritalStatus::Single) => "独身",
        (Language::Japanese, MaritalStatus::Married) => "既婚",
        (Language::Japanese, MaritalStatus::Divorced) => "離婚",
        (Language::Japanese, MaritalStatus::Widowed) => "死別",
    }
}

pub(crate) const fn job_titles(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "Software Engineer",
            "Accountant",
            "Project Manager",
            "Sales Representative",
            "Marketing Specialist",
            "Teacher",
            "Nurse",
            "Graphic Designer",
            "Data Analyst",
            "Customer Service Representative",
            "Operations Manager",
            "Financial Advisor",
        ],
        Language::SimplifiedChinese => &[
            "软件工程师",
            "会计",
            "项目经理",
            "销售代表",
            "市场专员",
            "教师",
            "护士",
            "平面设计师",
            "数据分析师",
            "客服代表",
            "运营经理",
            "理财顾问",
        ],
        Language::TraditionalChinese => &[
            "軟件工程師",
            "會計",
            "項目經理",
            "銷售代表",
            "市場專員",
            "教師",
            "護士",
            "平面設計師",
            "數據分析師",
            "客戶服務代表",
            "營運經理",
            "理財顧問",
        ],
        Language::Japanese => &[
            "ソフトウェアエンジニア",
            "会計士",
            "プロジェクトマネージャー",
            "営業担当",
            "マーケティング担当",
            "教師",
            "看護師",
            "グラフィックデザイナー",
            "データアナリスト",
            "カスタマーサポート",
            "運営マネージャー",
            "ファイナンシャルアドバイザー",
        ],
    }
}

const ENGLISH_SOCIAL_NETWORK_IDS: &[BilingualRef] = &[
    en("sunnyday"),
    en("nightowl"),
    en("bluesky"),
    en("coffeelover"),
    en("pixelpusher"),
    en("wanderer"),
    en("starlight"),
    en("codecat"),
    en("moonwalker"),
    en("bookworm"),
];

const SIMPLIFIED_CHINESE_SOCIAL_NETWORK_IDS: &[BilingualRef] = &[
    bi("小鱼", "xiaoyu"),
    bi("阳光", "yangguang"),
    bi("星星", "xingxing"),
    bi("大白", "dabai"),
    bi("飞鸟", "feiniao"),
    bi("橘子", "juzi"),
    bi("白云", "baiyun"),
    bi("熊猫", "xiongmao"),
];

const TRADITIONAL_CHINESE_SOCIAL_NETWORK_IDS: &[BilingualRef] = &[
    bi("小魚", "siuyu"),
    bi("陽光", "yeungkwong"),
    bi("星星", "singsing"),
    bi("飛鳥", "feiniu"),
    bi("橘子", "gwatzi"),
    bi("白雲", "baakwan"),
    bi("熊貓", "hungmaau"),
];

const JAPANESE_SOCIAL_NETWORK_IDS: &[BilingualRef] = &[
    bi("さくら", "sakura"),
    bi("ねこ", "neko"),
    bi("ひかり", "hikari"),
    bi("そら", "sora"),
    bi("ゆき", "yuki"),
    bi("はな", "hana"),
    bi("ほし", "hoshi"),
    bi("つき", "tsuki"),
];

pub(crate) const fn social_network_ids(language: Language) -> &'static [BilingualRef] {
    match language {
        Language::English => ENGLISH_SOCIAL_NETWORK_IDS,
        Language::SimplifiedChinese => SIMPLIFIED_CHINESE_SOCIAL_NETWORK_IDS,
        Language::TraditionalChinese => TRADITIONAL_CHINESE_SOCIAL_NETWORK_IDS,
        Language::Japanese => JAPANESE_SOCIAL_NETWORK_IDS,
    }
}

pub(crate) const fn social_network_id_affixes(language: Language) -> &'static [BilingualRef] {
    match language {
        Language::English => const { &[
            en("{}"),
            en("the_{}"),
            en("real{}"),
            en("{}_official"),
            en("its{}"),
        ] },
        Language::SimplifiedChinese => const { &[
            en("{}"),
            bi("阿{}", "a{}"),
            bi("{}酱", "{}jiang"),
            bi("{}君", "{}jun"),
        ] },
        Language::TraditionalChinese => const { &[
            en("{}"),
            bi("阿{}", "a{}"),
            bi("{}仔", "{}jai"),
            bi("小{}", "siu{}"),
        ] },
        Language::Japanese => const { &[
            en("{}"),
            bi("{}ちゃん", "{}chan"),
            bi("{}さん", "{}san"),
            bi("{}くん", "{}kun"),
        ] },
    }
}

/// Numeric tails appended to a social network id.
pub(crate) const SOCIAL_NETWORK_ID_NUMBER_SUFFIXES: &[&str] = &["{}", "{}#", "{}##", "{}###", "{}_##"];

/// Username templates for email addresses.
pub(crate) const EMAIL_AFFIXES: &[&str] = &[
    "{}", "{}#", "{}##", "{}###", "{}_##", "{}_live", "{}_work", "real{}",
];

/// Subscriber number layouts, without any trunk prefix.
pub(crate) const fn phone_formats(region: Region) -> &'static [&'static str] {
    match region {
        Region::UnitedStates => &[
            "2##-###-####",
            "(3##) ###-####",
            "4##-###-####",
            "(5##) ###-####",
            "6##-###-####",
            "7##-###-####",
            "(8##) ###-####",
            "9##-###-####",
        ],
        Region::UnitedKingdom => &["20 #### ####", "161 ### ####", "121 ### ####", "7### ######"],
        Region::China => &["13# #### ####", "15# #### ####", "18# #### ####", "19# #### ####"],
        Region::Japan => &["90-####-####", "80-####-####", "3-####-####", "6-####-####"],
    }
}

/// International calling code, without the leading `+`.
pub(crate) const fn calling_code(region: Region) -> &'static str {
    match region {
        Region::UnitedStates => "1",
        Region::UnitedKingdom => "44",
        Region::China => "86",
        Region::Japan => "81",
    }
}

/// Returns `true` where national numbers are dialled with a leading `0`.
pub(crate) const fn uses_trunk_prefix(region: Region) -> bool {
    matches!(region, Region::UnitedKingdom | Region::Japan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::MaskedChoice;
    use crate::data::wildcard_count;

    #[test]
    fn every_name_table_is_populated() {
        for language in Language::ALL {
            assert!(!last_names(*language).is_empty());
            assert!(!job_titles(*language).is_empty());
            assert!(!social_network_ids(*language).is_empty());
            assert!(!social_network_id_affixes(*language).is_empty());
            for gender in Gender::ALL {
                assert!(!first_names(*language, *gender).is_empty());
                assert!(!titles(*language, *gender).is_empty());
            }
        }
    }

    #[test]
    fn romanized_names_contain_no_spaces() {
        for language in Language::ALL {
            for gender in Gender::ALL {
                for name in first_names(*language, *gender) {
                    assert!(!name.translation.contains(' '), "{name:?}");
                }
            }
            for name in last_names(*language) {
                assert!(!name.translation.contains(' '), "{name:?}");
            }
        }
    }

    #[test]
    fn social_network_affixes_keep_their_placeholder() {
        for language in Language::ALL {
            for affix in social_network_id_affixes(*language) {
                assert!(affix.original.contains("{}"));
                assert!(affix.translation.contains("{}"));
            }
        }
    }

    #[test]
    fn female_titles_exist_except_for_japanese() {
        for status in MaritalStatus::ALL {
            assert!(female_titles(Language::Japanese, status).is_none());
            for language in [
                Language::English,
                Language::SimplifiedChinese,
                Language::TraditionalChinese,
            ] {
                let table = female_titles(language, status).expect("table exists");
                assert!(!table.is_empty());
            }
        }
    }

    #[test]
    fn trunk_prefixed_regions_do_not_start_with_zero() {
        for region in Region::ALL {
            assert!(!phone_formats(*region).is_empty());
            for layout in phone_formats(*region) {
                let first_digit = layout
                    .chars()
                    .find(|c| c.is_ascii_digit())
                    .expect("layout has a fixed leading digit");
                assert_ne!(first_digit, '0', "{layout}");
                assert!(wildcard_count(layout, '#') > 0);
            }
        }
    }
}
