//! Product naming, categories, colors, sizes, and barcode layouts.

use crate::choice::{BarcodeType, Language};

/// Edition affixes wrapped around a caller-supplied keyword.
pub(crate) const fn name_affixes(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "{}",
            "{} Pro",
            "{} Plus",
            "{} Premium",
            "{} Enterprise",
            "{} Ultra",
            "{} Pro Max",
            "{} Max",
            "{} Air",
            "{} Mini",
            "{} Lite",
            "{} SE",
            "{} FE",
            "{} Core",
            "{} Limited Edition",
            "{} PI",
            "Omni {}",
            "Ambi {}",
        ],
        Language::SimplifiedChinese => &["{}", "{} 青春版", "{} 尊享版", "{} 典藏版", "{} 旗舰版"],
        Language::TraditionalChinese => &["{}", "{} 青春版", "{} 尊享版", "{} 限定版", "{} 旗艦版"],
        Language::Japanese => &["{}", "{} コレクション", "{} 限定"],
    }
}

pub(crate) const fn categories(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "Appliances",
            "Automotive",
            "Baby",
            "Beauty",
            "Books",
            "Camera",
            "Clothing",
            "Computers",
            "Electronics",
            "Furniture",
            "Garden",
            "Groceries",
            "Health",
            "Home",
            "Jewelry",
            "Kitchen",
            "Music",
            "Office",
            "Outdoors",
            "Pet Supplies",
            "Shoes",
            "Sports",
            "Tools",
            "Toys",
            "Video Games",
        ],
        Language::SimplifiedChinese => &[
            "家用电器", "汽车用品", "母婴", "美妆", "图书", "相机", "服装", "电脑", "电子产品",
            "家具", "园艺", "食品杂货", "健康", "家居", "珠宝", "厨具", "音乐", "办公用品",
            "户外", "宠物用品", "鞋靴", "运动", "工具", "玩具", "电子游戏",
        ],
        Language::TraditionalChinese => &[
            "家用電器", "汽車用品", "嬰兒用品", "美容", "書籍", "相機", "服裝", "電腦", "電子產品",
            "傢俬", "園藝", "食品雜貨", "健康", "家居", "珠寶", "廚具", "音樂", "辦公用品",
            "戶外", "寵物用品", "鞋履", "運動", "工具", "玩具", "電子遊戲",
        ],
        Language::Japanese => &[
            "家電", "カー用品", "ベビー用品", "ビューティー", "本", "カメラ", "ファッション",
            "パソコン", "エレクトロニクス", "家具", "ガーデン", "食品", "ヘルスケア", "ホーム",
            "ジュエリー", "キッチン用品", "ミュージック", "文房具・オフィス用品", "アウトドア",
            "ペット用品", "シューズ", "スポーツ", "工具", "おもちゃ", "ゲーム",
        ],
    }
}

pub(crate) const fn colors(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "Black", "White", "Gray", "Silver", "Gold", "Red", "Crimson", "Orange", "Amber",
            "Yellow", "Olive", "Lime", "Green", "Teal", "Cyan", "Sky Blue", "Blue", "Navy",
            "Indigo", "Purple", "Violet", "Pink", "Rose", "Brown", "Beige", "Ivory",
        ],
        Language::SimplifiedChinese => &[
            "黑色", "白色", "灰色", "银色", "金色", "红色", "深红色", "橙色", "琥珀色", "黄色",
            "橄榄色", "青柠色", "绿色", "蓝绿色", "青色", "天蓝色", "蓝色", "海军蓝", "靛蓝色",
            "紫色", "紫罗兰色", "粉红色", "玫瑰色", "棕色", "米色", "象牙色",
        ],
        Language::TraditionalChinese => &[
            "黑色", "白色", "灰色", "銀色", "金色", "紅色", "深紅色", "橙色", "琥珀色", "黃色",
            "橄欖色", "青檸色", "綠色", "藍綠色", "青色", "天藍色", "藍色", "海軍藍", "靛藍色",
            "紫色", "紫羅蘭色", "粉紅色", "玫瑰色", "棕色", "米色", "象牙色",
        ],
        Language::Japanese => &[
            "ブラック", "ホワイト", "グレー", "シルバー", "ゴールド", "レッド", "クリムゾン",
            "オレンジ", "アンバー", "イエロー", "オリーブ", "ライム", "グリーン", "ティール",
            "シアン", "スカイブルー", "ブルー", "ネイビー", "インディゴ", "パープル",
            "バイオレット", "ピンク", "ローズ", "ブラウン", "ベージュ", "アイボリー",
        ],
    }
}

pub(crate) const SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

/// Barcode layouts. Leading digits are a number-system or country prefix and
/// each `#` is one digit.
pub(crate) const fn barcode_patterns(barcode_type: BarcodeType) -> &'static [&'static str] {
    match barcode_type {
        BarcodeType::Ean13 => &[
            "00###########",
            "01###########",
            "03###########",
            "06###########",
            "07###########",
            "08###########",
            "09###########",
            "10###########",
            "11###########",
            "12###########",
            "13###########",
            "45###########",
            "49###########",
            "50###########",
            "690##########",
            "691##########",
            "692##########",
            "693##########",
            "694##########",
            "695##########",
        ],
        BarcodeType::Ean8 => &[
            "00######", "01######", "03######", "06######", "07######", "08######", "09######",
            "10######", "11######", "12######", "13######", "45######", "49######", "50######",
            "690#####", "691#####", "692#####", "693#####", "694#####", "695#####",
        ],
        BarcodeType::UpcA => &[
            "0###########",
            "1###########",
            "3###########",
            "5###########",
            "6###########",
            "7###########",
        ],
        BarcodeType::UpcE => &["0#####", "1#####", "3#####", "5#####", "6#####", "7#####"],
        BarcodeType::Isbn => &["978##########", "979##########"],
    }
}
