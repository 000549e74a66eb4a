//! Address records and region names.

use super::{bi, en};
use crate::bilingual::BilingualRef;
use crate::choice::{Language, Region};

/// One address template.
///
/// `#` in the postcode, street and building is a digit and `@` an uppercase
/// letter. Street and building wildcards are expanded with the same draws on
/// both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AddressComponents {
    pub(crate) postcode: &'static str,
    /// Administrative divisions, largest first. Unused levels are empty.
    ///
    /// US: state, city. UK: post town, locality. China: province,
    /// prefecture city, district, subdistrict. Japan: prefecture,
    /// municipality.
    pub(crate) admin_levels: [BilingualRef; 4],
    pub(crate) street: BilingualRef,
    pub(crate) building: BilingualRef,
}

const NONE: BilingualRef = en("");

/// Record for an English-speaking region, where both sides are identical.
const fn western(
    postcode: &'static str,
    upper: &'static str,
    lower: &'static str,
    street: &'static str,
    building: &'static str,
) -> AddressComponents {
    AddressComponents {
        postcode,
        admin_levels: [en(upper), en(lower), NONE, NONE],
        street: en(street),
        building: en(building),
    }
}

const fn eastern(
    postcode: &'static str,
    admin_levels: [BilingualRef; 4],
    street: BilingualRef,
    building: BilingualRef,
) -> AddressComponents {
    AddressComponents {
        postcode,
        admin_levels,
        street,
        building,
    }
}

const UNITED_STATES: &[AddressComponents] = &[
    western("90210-####", "CA", "Beverly Hills", "#### Santa Monica Blvd", ""),
    western("90012-####", "CA", "Los Angeles", "### N Spring St", "Apt ###"),
    western("94103-####", "CA", "San Francisco", "### Howard St", "Ste ###"),
    western("92101-####", "CA", "San Diego", "#### Broadway", "Unit @##"),
    western("10001-####", "NY", "New York", "### W 33rd St", "Apt ##@"),
    western("11211-####", "NY", "Brooklyn", "#### Bedford Ave", "Apt ##"),
    western("14202-####", "NY", "Buffalo", "### Main St", ""),
    western("77006-####", "TX", "Houston", "#### Westheimer Rd", "Apt ####"),
    western("78704-####", "TX", "Austin", "#### S Lamar Blvd", "Unit @"),
    western("75201-####", "TX", "Dallas", "#### Elm St", ""),
    western("33131-####", "FL", "Miami", "### Brickell Ave", "Unit ####"),
    western("32801-####", "FL", "Orlando", "### S Orange Ave", "Suite ###"),
    western("60606-####", "IL", "Chicago", "### W Wacker Dr", "Suite ####"),
    western("19106-####", "PA", "Philadelphia", "### Chestnut St", "Floor #"),
    western("98101-####", "WA", "Seattle", "#### Pike St", "Apt ###"),
    western("02138-####", "MA", "Cambridge", "### Massachusetts Ave", ""),
    western("80302-####", "CO", "Boulder", "#### Pearl St", "Unit ###"),
];

const UNITED_KINGDOM: &[AddressComponents] = &[
    western("SW1A #@@", "LONDON", "", "## Parliament Street", ""),
    western("W1U #@@", "LONDON", "", "### Baker Street", "Flat @"),
    western("SE1 #@@", "LONDON", "South Bank", "## Belvedere Road", "Apartment ###"),
    western("N1 #@@", "LONDON", "Islington", "### Upper Street", ""),
    western("SW3 #@@", "LONDON", "Chelsea", "### King's Road", "Maisonette #"),
    western("M2 #@@", "MANCHESTER", "", "### Deansgate", ""),
    western("M4 #@@", "MANCHESTER", "Ancoats", "### Blossom Street", "Apt ###"),
    western("M50 #@@", "SALFORD", "Salford Quays", "### The Quays", "The Lowry"),
    western("L1 #@@", "LIVERPOOL", "", "### Bold Street", "Flat #@"),
    western("L8 #@@", "LIVERPOOL", "Toxteth", "### Princes Avenue", "Flat #"),
    western("B3 #@@", "BIRMINGHAM", "", "### Colmore Row", "Office ###"),
    western("BS8 #@@", "BRISTOL", "Clifton", "### Whiteladies Road", ""),
    western("LS2 #@@", "LEEDS", "", "### Briggate", "Suite #"),
    western("EH1 #@@", "EDINBURGH", "", "### Royal Mile", "Flat #"),
    western("CF10 #@@", "CARDIFF", "", "### Queen Street", ""),
    western("BT1 #@@", "BELFAST", "", "### Donegall Place", "Unit ##"),
];

const BEIJING: BilingualRef = bi("北京市", "Beijing");
const SHANGHAI: BilingualRef = bi("上海市", "Shanghai");
const GUANGDONG: BilingualRef = bi("广东省", "Guangdong Province");

const CHINA: &[AddressComponents] = &[
    eastern(
        "100006",
        [NONE, BEIJING, bi("东城区", "Dongcheng District"), bi("东华门街道", "Donghuamen Subdistrict")],
        bi("东安门大街##号", "No. ## Dong'anmen Street"),
        bi("#号院#楼###室", "Courtyard #, Bldg #, Rm ###"),
    ),
    eastern(
        "100032",
        [NONE, BEIJING, bi("西城区", "Xicheng District"), bi("金融街街道", "Jinrongjie Subdistrict")],
        bi("金融大街##号", "No. ## Jinrong Avenue"),
        bi("##层", "Fl ##"),
    ),
    eastern(
        "100102",
        [NONE, BEIJING, bi("朝阳区", "Chaoyang District"), bi("望京街道", "Wangjing Subdistrict")],
        bi("望京西路##号", "No. ## West Wangjing Road"),
        bi("#栋###室", "Bldg #, Rm ###"),
    ),
    eastern(
        "100080",
        [NONE, BEIJING, bi("海淀区", "Haidian District"), bi("中关村街道", "Zhongguancun Subdistrict")],
        bi("中关村大街##号", "No. ## Zhongguancun Street"),
        bi("#号楼", "Bldg #"),
    ),
    eastern(
        "200002",
        [NONE, SHANGHAI, bi("黄浦区", "Huangpu District"), bi("外滩街道", "The Bund Subdistrict")],
        bi("中山东一路##号", "No. ## Zhongshan Dongyi Road"),
        NONE,
    ),
    eastern(
        "200040",
        [NONE, SHANGHAI, bi("静安区", "Jing'an District"), bi("静安寺街道", "Jing'an Temple Subdistrict")],
        bi("南京西路##号", "No. ## Nanjing West Road"),
        bi("##座##室", "Tower ##, Rm ##"),
    ),
    eastern(
        "200120",
        [NONE, SHANGHAI, bi("浦东新区", "Pudong New Area"), bi("陆家嘴街道", "Lujiazui Subdistrict")],
        bi("世纪大道##号", "No. ## Century Avenue"),
        bi("##层", "Fl ##"),
    ),
    eastern(
        "201210",
        [NONE, SHANGHAI, bi("浦东新区", "Pudong New Area"), bi("张江镇", "Zhangjiang Town")],
        bi("祖冲之路##号", "No. ## Zuchongzhi Road"),
        bi("#号楼#层", "Bldg #, Fl #"),
    ),
    eastern(
        "510620",
        [GUANGDONG, bi("广州市", "Guangzhou City"), bi("天河区", "Tianhe District"), bi("天河南街道", "Tianhenan Subdistrict")],
        bi("体育西路##号", "No. ## Tiyu West Road"),
        bi("#座##层", "Tower #, Fl ##"),
    ),
    eastern(
        "510130",
        [GUANGDONG, bi("广州市", "Guangzhou City"), bi("荔湾区", "Liwan District"), bi("沙面街道", "Shamian Subdistrict")],
        bi("沙面北街##号", "No. ## Shamian North Street"),
        NONE,
    ),
    eastern(
        "518033",
        [GUANGDONG, bi("深圳市", "Shenzhen City"), bi("福田区", "Futian District"), bi("福田街道", "Futian Subdistrict")],
        bi("深南大道##号", "No. ## Shennan Boulevard"),
        bi("#座##室", "Block #, Rm ##"),
    ),
    eastern(
        "518057",
        [GUANGDONG, bi("深圳市", "Shenzhen City"), bi("南山区", "Nanshan District"), bi("粤海街道", "Yuehai Subdistrict")],
        bi("科技南路##号", "No. ## Keji South Road"),
        bi("#栋#楼", "Bldg #, Fl #"),
    ),
    eastern(
        "310006",
        [bi("浙江省", "Zhejiang Province"), bi("杭州市", "Hangzhou City"), bi("上城区", "Shangcheng District"), bi("湖滨街道", "Hubin Subdistrict")],
        bi("延安路##号", "No. ## Yan'an Road"),
        NONE,
    ),
    eastern(
        "610041",
        [bi("四川省", "Sichuan Province"), bi("成都市", "Chengdu City"), bi("武侯区", "Wuhou District"), bi("芳草街街道", "Fangcaojie Subdistrict")],
        bi("人民南路##号", "No. ## Renmin South Road"),
        bi("#单元##号", "Unit #, No. ##"),
    ),
];

const TOKYO: BilingualRef = bi("東京都", "Tōkyō-to");

const JAPAN: &[AddressComponents] = &[
    eastern(
        "100-0005",
        [TOKYO, bi("千代田区", "Chiyoda-ku"), NONE, NONE],
        bi("丸の内#-##-##", "#-##-##, Marunouchi"),
        bi("丸の内ビルディング##階", "Marunouchi Building, Fl. ##"),
    ),
    eastern(
        "102-0083",
        [TOKYO, bi("千代田区", "Chiyoda-ku"), NONE, NONE],
        bi("麹町#-##-##", "#-##-##, Kōjimachi"),
        NONE,
    ),
    eastern(
        "104-0061",
        [TOKYO, bi("中央区", "Chūō-ku"), NONE, NONE],
        bi("銀座#-##-##", "#-##-##, Ginza"),
        bi("銀座##ビル", "Ginza ## Bldg."),
    ),
    eastern(
        "106-0032",
        [TOKYO, bi("港区", "Minato-ku"), NONE, NONE],
        bi("六本木#-##-##", "#-##-##, Roppongi"),
        bi("六本木ヒルズ森タワー##階", "Roppongi Hills Mori Tower, Fl. ##"),
    ),
    eastern(
        "160-0023",
        [TOKYO, bi("新宿区", "Shinjuku-ku"), NONE, NONE],
        bi("西新宿#-##-##", "#-##-##, Nishi-Shinjuku"),
        NONE,
    ),
    eastern(
        "150-0002",
        [TOKYO, bi("渋谷区", "Shibuya-ku"), NONE, NONE],
        bi("渋谷#-##-##", "#-##-##, Shibuya"),
        bi("渋谷ヒカリエ##階", "Shibuya Hikarie, Fl. ##"),
    ),
    eastern(
        "530-0001",
        [bi("大阪府", "Ōsaka-fu"), bi("大阪市北区", "Ōsaka-shi, Kita-ku"), NONE, NONE],
        bi("梅田#-#-##", "#-#-##, Umeda"),
        NONE,
    ),
    eastern(
        "604-8005",
        [bi("京都府", "Kyōto-fu"), bi("京都市中京区", "Kyōto-shi, Nakagyō-ku"), NONE, NONE],
        bi("恵比須町###", "###, Ebisuchō"),
        NONE,
    ),
    eastern(
        "630-8216",
        [bi("奈良県", "Nara-ken"), bi("奈良市", "Nara-shi"), NONE, NONE],
        bi("東向中町##", "##, Higashimuki Nakamachi"),
        NONE,
    ),
    eastern(
        "760-0028",
        [bi("香川県", "Kagawa-ken"), bi("高松市", "Takamatsu-shi"), NONE, NONE],
        bi("鍛冶屋町#-##", "#-##, Kajiyamachi"),
        NONE,
    ),
    eastern(
        "860-0807",
        [bi("熊本県", "Kumamoto-ken"), bi("熊本市中央区", "Kumamoto-shi, Chūō-ku"), NONE, NONE],
        bi("下通#-##-##", "#-##-##, Shimotōri"),
        NONE,
    ),
    eastern(
        "850-0841",
        [bi("長崎県", "Nagasaki-ken"), bi("長崎市", "Nagasaki-shi"), NONE, NONE],
        bi("銅座町##-##", "##-##, Dōzamachi"),
        NONE,
    ),
];

pub(crate) const fn address_components(region: Region) -> &'static [AddressComponents] {
    match region {
        Region::UnitedStates => UNITED_STATES,
        Region::UnitedKingdom => UNITED_KINGDOM,
        Region::China => CHINA,
        Region::Japan => JAPAN,
    }
}

/// Index into [`AddressComponents::admin_levels`] that names the city.
pub(crate) const fn city_level(region: Region) -> usize {
    match region {
        Region::UnitedStates | Region::China => 1,
        Region::UnitedKingdom | Region::Japan => 0,
    }
}

pub(crate) const fn region_name(language: Language, region: Region) -> &'static str {
    match (language, region) {
        (Language::English, Region::UnitedStates) => "United States",
        (Language::English, Region::UnitedKingdom) => "United Kingdom",
        (Language::English, Region::China) => "China",
        (Language::English, Region::Japan) => "Japan",
        (Language::SimplifiedChinese, Region::UnitedStates) => "美国",
        (Language::TraditionalChinese, Region::UnitedStates) => "美國",
        (Language::Japanese, Region::UnitedStates) => "米国",
        (Language::SimplifiedChinese | Language::Japanese, Region::UnitedKingdom) => "英国",
        (Language::TraditionalChinese, Region::UnitedKingdom) => "英國",
        (Language::SimplifiedChinese | Language::Japanese, Region::China) => "中国",
        (Language::TraditionalChinese, Region::China) => "中國",
        (_, Region::Japan) => "日本",
    }
}

/// ISO 3166-1 alpha-2 code.
pub(crate) const fn alpha2(region: Region) -> &'static str {
    match region {
        Region::UnitedStates => "US",
        Region::UnitedKingdom => "GB",
        Region::China => "CN",
        Region::Japan => "JP",
    }
}

/// ISO 3166-1 alpha-3 code.
pub(crate) const fn alpha3(region: Region) -> &'static str {
    match region {
        Region::UnitedStates => "USA",
        Region::UnitedKingdom => "GBR",
        Region::China => "CHN",
        Region::Japan => "JPN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::MaskedChoice;
    use crate::data::wildcard_count;

    fn all_records() -> impl Iterator<Item = (Region, &'static AddressComponents)> {
        Region::ALL
            .iter()
            .flat_map(|region| address_components(*region).iter().map(|record| (*region, record)))
    }

    #[test]
    fn every_region_has_records() {
        for region in Region::ALL {
            assert!(!address_components(*region).is_empty());
        }
    }

    #[test]
    fn correlated_fields_agree_on_wildcard_counts() {
        for (_, record) in all_records() {
            for field in [record.street, record.building] {
                for wildcard in ['#', '@'] {
                    assert_eq!(
                        wildcard_count(field.original, wildcard),
                        wildcard_count(field.translation, wildcard),
                        "{field:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn city_level_is_populated() {
        for (region, record) in all_records() {
            let city = record
                .admin_levels
                .get(city_level(region))
                .expect("city level in bounds");
            assert!(!city.is_empty(), "{record:?}");
            assert!(!record.street.is_empty());
        }
    }

    #[test]
    fn region_names_and_codes_are_populated() {
        for region in Region::ALL {
            assert_eq!(alpha2(*region).len(), 2);
            assert_eq!(alpha3(*region).len(), 3);
            for language in Language::ALL {
                assert!(!region_name(*language, *region).is_empty());
            }
        }
    }
}
