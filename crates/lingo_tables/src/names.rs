//! Language metadata table: language key -> display names and direction.

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::descriptor::LanguageName;

static LANGUAGE_NAMES: OnceLock<IndexMap<&'static str, LanguageName>> = OnceLock::new();

/// All known languages, keyed by language key, in declaration order.
pub fn language_names() -> &'static IndexMap<&'static str, LanguageName> {
    LANGUAGE_NAMES.get_or_init(|| LANGUAGES.iter().map(|name| (name.key, *name)).collect())
}

/// Metadata for a single language key.
pub fn lookup_language(key: &str) -> Option<&'static LanguageName> {
    language_names().get(key)
}

const LANGUAGES: &[LanguageName] = &[
    LanguageName {
        key: "albanian",
        english: "Albanian",
        origin: "Shqip",
        chinese: "阿尔巴尼亚语",
        rtl: false,
    },
    LanguageName {
        key: "arabic",
        english: "Arabic",
        origin: "عربي",
        chinese: "阿拉伯语",
        rtl: true,
    },
    LanguageName {
        key: "bangla",
        english: "Bangla",
        origin: "বাংলা",
        chinese: "孟加拉语",
        rtl: false,
    },
    LanguageName {
        key: "belarusian",
        english: "Belarusian",
        origin: "беларускі",
        chinese: "白俄罗斯语",
        rtl: false,
    },
    LanguageName {
        key: "bengali",
        english: "Bengali",
        origin: "বাংলা",
        chinese: "孟加拉语",
        rtl: false,
    },
    LanguageName {
        key: "bulgarian",
        english: "Bulgarian",
        origin: "български",
        chinese: "保加利亚语",
        rtl: false,
    },
    LanguageName {
        key: "cambodia",
        english: "Khmer",
        origin: "ខ្មែរ",
        chinese: "高棉语",
        rtl: false,
    },
    LanguageName {
        key: "cantonese",
        english: "Chinese (Traditional)",
        origin: "中文(繁體)",
        chinese: "中文(繁体)",
        rtl: false,
    },
    LanguageName {
        key: "chinese",
        english: "Chinese Simplified",
        origin: "简体中文",
        chinese: "简体中文",
        rtl: false,
    },
    LanguageName {
        key: "croatian",
        english: "Croatian",
        origin: "Hrvatski",
        chinese: "克罗地亚语",
        rtl: false,
    },
    LanguageName {
        key: "czech",
        english: "Czech",
        origin: "čeština",
        chinese: "捷克语",
        rtl: false,
    },
    LanguageName {
        key: "danish",
        english: "Danish",
        origin: "dansk",
        chinese: "丹麦语",
        rtl: false,
    },
    LanguageName {
        key: "dutch",
        english: "Dutch",
        origin: "Nederlands",
        chinese: "荷兰语",
        rtl: false,
    },
    LanguageName {
        key: "english",
        english: "English",
        origin: "English",
        chinese: "英语",
        rtl: false,
    },
    LanguageName {
        key: "esperanto",
        english: "Esperanto",
        origin: "Esperanto",
        chinese: "世界语",
        rtl: false,
    },
    LanguageName {
        key: "filipino",
        english: "Filipino",
        origin: "Filipino",
        chinese: "菲律宾语",
        rtl: false,
    },
    LanguageName {
        key: "finnish",
        english: "Finnish",
        origin: "suomi",
        chinese: "芬兰语",
        rtl: false,
    },
    LanguageName {
        key: "french",
        english: "French",
        origin: "Français",
        chinese: "法语",
        rtl: false,
    },
    LanguageName {
        key: "german",
        english: "German",
        origin: "Deutsch",
        chinese: "德语",
        rtl: false,
    },
    LanguageName {
        key: "greek",
        english: "Greek",
        origin: "Ελληνικά",
        chinese: "希腊语",
        rtl: false,
    },
    LanguageName {
        key: "hausa",
        english: "Hausa",
        origin: "Hausa",
        chinese: "豪萨语",
        rtl: false,
    },
    LanguageName {
        key: "hebrew",
        english: "Hebrew",
        origin: "עִברִית",
        chinese: "希伯来语",
        rtl: true,
    },
    LanguageName {
        key: "hindi",
        english: "Hindi",
        origin: "हिंदी",
        chinese: "印地语",
        rtl: false,
    },
    LanguageName {
        key: "hungarian",
        english: "Hungarian",
        origin: "magyar",
        chinese: "匈牙利语",
        rtl: false,
    },
    LanguageName {
        key: "indonesian",
        english: "Indonesian",
        origin: "bahasa Indonesia",
        chinese: "印尼语",
        rtl: false,
    },
    LanguageName {
        key: "italian",
        english: "Italian",
        origin: "italiano",
        chinese: "意大利语",
        rtl: false,
    },
    LanguageName {
        key: "japanese",
        english: "Japanese",
        origin: "日本語",
        chinese: "日语",
        rtl: false,
    },
    LanguageName {
        key: "korean",
        english: "Korean",
        origin: "한국어",
        chinese: "韩语",
        rtl: false,
    },
    LanguageName {
        key: "laos",
        english: "Lao",
        origin: "ພາສາລາວ",
        chinese: "老挝语",
        rtl: false,
    },
    LanguageName {
        key: "malay",
        english: "Malay",
        origin: "Melayu",
        chinese: "马来语",
        rtl: false,
    },
    LanguageName {
        key: "mongolian",
        english: "Mongolian",
        origin: "Монгол",
        chinese: "蒙古语",
        rtl: false,
    },
    LanguageName {
        key: "myanmar",
        english: "Myanmar",
        origin: "မြန်မာ",
        chinese: "缅甸语",
        rtl: false,
    },
    LanguageName {
        key: "norwegian",
        english: "Norwegian",
        origin: "norsk",
        chinese: "挪威语",
        rtl: false,
    },
    LanguageName {
        key: "nepali",
        english: "Nepali",
        origin: "नेपाली",
        chinese: "尼泊尔语",
        rtl: false,
    },
    LanguageName {
        key: "pashto",
        english: "Pashto",
        origin: "پښتو",
        chinese: "普什图语",
        rtl: true,
    },
    LanguageName {
        key: "persian",
        english: "Persian",
        origin: "فارسی",
        chinese: "波斯语",
        rtl: true,
    },
    LanguageName {
        key: "poland",
        english: "Polish",
        origin: "Polski",
        chinese: "波兰语",
        rtl: false,
    },
    LanguageName {
        key: "portuguese",
        english: "Portuguese",
        origin: "Português",
        chinese: "葡萄牙语",
        rtl: false,
    },
    LanguageName {
        key: "romanian",
        english: "Romanian",
        origin: "Română",
        chinese: "罗马尼亚语",
        rtl: false,
    },
    LanguageName {
        key: "russian",
        english: "Russian",
        origin: "Русский",
        chinese: "俄语",
        rtl: false,
    },
    LanguageName {
        key: "serbian",
        english: "Serbian",
        origin: "Српски",
        chinese: "塞尔维亚语",
        rtl: false,
    },
    LanguageName {
        key: "sinhalese",
        english: "Sinhalese",
        origin: "සිංහල",
        chinese: "僧伽罗语",
        rtl: false,
    },
    LanguageName {
        key: "slovak",
        english: "Slovak",
        origin: "slovenský",
        chinese: "斯洛伐克语",
        rtl: false,
    },
    LanguageName {
        key: "spanish",
        english: "Spanish",
        origin: "español",
        chinese: "西班牙语",
        rtl: false,
    },
    LanguageName {
        key: "swahili",
        english: "Swahili",
        origin: "kiswahili",
        chinese: "斯瓦希里语",
        rtl: false,
    },
    LanguageName {
        key: "swedish",
        english: "Swedish",
        origin: "svenska",
        chinese: "瑞典语",
        rtl: false,
    },
    LanguageName {
        key: "tamil",
        english: "Tamil",
        origin: "தமிழ்",
        chinese: "泰米尔语",
        rtl: false,
    },
    LanguageName {
        key: "thai",
        english: "Thai",
        origin: "ไทย",
        chinese: "泰语",
        rtl: false,
    },
    LanguageName {
        key: "turkish",
        english: "Turkish",
        origin: "Türkçe",
        chinese: "土耳其语",
        rtl: false,
    },
    LanguageName {
        key: "ukrainian",
        english: "Ukrainian",
        origin: "українська",
        chinese: "乌克兰语",
        rtl: false,
    },
    LanguageName {
        key: "urdu",
        english: "Urdu",
        origin: "اردو",
        chinese: "乌尔都语",
        rtl: true,
    },
    LanguageName {
        key: "vietnamese",
        english: "Vietnamese",
        origin: "Tiếng Việt",
        chinese: "越南语",
        rtl: false,
    },
    LanguageName {
        key: "afrikaans",
        english: "Afrikaans",
        origin: "Afrikaans",
        chinese: "南非荷兰语",
        rtl: false,
    },
    LanguageName {
        key: "amharic",
        english: "Amharic",
        origin: "አማርኛ",
        chinese: "阿姆哈拉语",
        rtl: false,
    },
    LanguageName {
        key: "azeri",
        english: "Azeri",
        origin: "Azərbaycan",
        chinese: "阿塞拜疆语",
        rtl: false,
    },
    LanguageName {
        key: "bosnian",
        english: "Bosnian",
        origin: "bosanski",
        chinese: "波斯尼亚语",
        rtl: false,
    },
    LanguageName {
        key: "catalan",
        english: "Catalan",
        origin: "Catalana",
        chinese: "加泰罗尼亚语",
        rtl: false,
    },
    LanguageName {
        key: "welsh",
        english: "Welsh",
        origin: "Cymraeg",
        chinese: "威尔士语",
        rtl: false,
    },
    LanguageName {
        key: "estonian",
        english: "Estonian",
        origin: "eestlane",
        chinese: "爱沙尼亚语",
        rtl: false,
    },
    LanguageName {
        key: "basque",
        english: "Basque",
        origin: "euskeraz",
        chinese: "巴斯克语",
        rtl: false,
    },
    LanguageName {
        key: "irish",
        english: "Irish",
        origin: "Gaeilge",
        chinese: "爱尔兰语",
        rtl: false,
    },
    LanguageName {
        key: "galician",
        english: "Galician",
        origin: "Galega",
        chinese: "加利西亚语",
        rtl: false,
    },
    LanguageName {
        key: "gujarati",
        english: "Gujarati",
        origin: "ગુજરાતી",
        chinese: "古吉拉特语",
        rtl: false,
    },
    LanguageName {
        key: "armenian",
        english: "Armenian",
        origin: "հայերեն",
        chinese: "亚美尼亚语",
        rtl: false,
    },
    LanguageName {
        key: "icelandic",
        english: "Icelandic",
        origin: "íslenskur",
        chinese: "冰岛语",
        rtl: false,
    },
    LanguageName {
        key: "javanese",
        english: "Javanese",
        origin: "basa jawa",
        chinese: "爪哇语",
        rtl: false,
    },
    LanguageName {
        key: "georgian",
        english: "Georgian",
        origin: "ქართული",
        chinese: "格鲁吉亚语",
        rtl: false,
    },
    LanguageName {
        key: "kazakh",
        english: "Kazakh",
        origin: "қазақ",
        chinese: "哈萨克语",
        rtl: false,
    },
    LanguageName {
        key: "kannada",
        english: "Kannada",
        origin: "ಕನ್ನಡ",
        chinese: "卡纳达语",
        rtl: false,
    },
    LanguageName {
        key: "lithuanian",
        english: "Lithuanian",
        origin: "lietuvių",
        chinese: "立陶宛语",
        rtl: false,
    },
    LanguageName {
        key: "latvian",
        english: "Latvian",
        origin: "latviešu",
        chinese: "拉脱维亚语",
        rtl: false,
    },
    LanguageName {
        key: "macedonian",
        english: "Macedonian",
        origin: "македонски",
        chinese: "马其顿语",
        rtl: false,
    },
    LanguageName {
        key: "marathi",
        english: "Marathi",
        origin: "मराठी",
        chinese: "马拉地语",
        rtl: false,
    },
    LanguageName {
        key: "maltese",
        english: "Maltese",
        origin: "Malti",
        chinese: "马耳他语",
        rtl: false,
    },
    LanguageName {
        key: "punjabi",
        english: "Punjabi",
        origin: "ਪੰਜਾਬੀ",
        chinese: "旁遮普语",
        rtl: false,
    },
    LanguageName {
        key: "slovenian",
        english: "Slovenian",
        origin: "Slovenščina",
        chinese: "斯洛文尼亚语",
        rtl: false,
    },
    LanguageName {
        key: "somali",
        english: "Somali",
        origin: "Soomaali",
        chinese: "索马里语",
        rtl: false,
    },
    LanguageName {
        key: "telugu",
        english: "Telugu",
        origin: "తెలుగు",
        chinese: "泰卢固语",
        rtl: false,
    },
    LanguageName {
        key: "uzbek",
        english: "Uzbek",
        origin: "o'zbek",
        chinese: "乌兹别克语",
        rtl: false,
    },
    LanguageName {
        key: "zulu",
        english: "Zulu",
        origin: "Zulu",
        chinese: "祖鲁语",
        rtl: false,
    },
    LanguageName {
        key: "sundanese",
        english: "Sundanese",
        origin: "Basa Sunda",
        chinese: "巽他语",
        rtl: false,
    },
    LanguageName {
        key: "assamese",
        english: "Assamese",
        origin: "অসমীয়া",
        chinese: "阿萨姆语",
        rtl: false,
    },
    LanguageName {
        key: "fijian",
        english: "Fijian",
        origin: "Fijian",
        chinese: "斐济语",
        rtl: false,
    },
    LanguageName {
        key: "haitian",
        english: "Haitian",
        origin: "Kreyòl Ayisyen",
        chinese: "海地克里奥尔语",
        rtl: false,
    },
    LanguageName {
        key: "hmong",
        english: "Hmong",
        origin: "Hmoob",
        chinese: "苗语",
        rtl: false,
    },
    LanguageName {
        key: "inuktitut",
        english: "Inuktitut",
        origin: "ᐃᓄᒃᑎᑐᑦ",
        chinese: "因纽特语",
        rtl: false,
    },
    LanguageName {
        key: "klingon",
        english: "Klingon",
        origin: "tlhIngan",
        chinese: "克林贡语",
        rtl: false,
    },
    LanguageName {
        key: "kurdish",
        english: "Kurdish",
        origin: "Kurdî",
        chinese: "库尔德语",
        rtl: true,
    },
    LanguageName {
        key: "malagasy",
        english: "Malagasy",
        origin: "Malagasy",
        chinese: "马尔加什语",
        rtl: false,
    },
    LanguageName {
        key: "maori",
        english: "Maori",
        origin: "Māori",
        chinese: "毛利语",
        rtl: false,
    },
    LanguageName {
        key: "oriya",
        english: "Oriya",
        origin: "ଓଡ଼ିଆ",
        chinese: "奥里亚语",
        rtl: false,
    },
    LanguageName {
        key: "queretaro",
        english: "Queretaro",
        origin: "Queretaro",
        chinese: "克雷塔罗瓦克语",
        rtl: false,
    },
    LanguageName {
        key: "samoan",
        english: "Samoan",
        origin: "Samoan",
        chinese: "萨摩亚语",
        rtl: false,
    },
    LanguageName {
        key: "tahitian",
        english: "Tahitian",
        origin: "Tahitian",
        chinese: "大溪地语",
        rtl: false,
    },
    LanguageName {
        key: "tigrinya",
        english: "Tigrinya",
        origin: "ትግርኛ",
        chinese: "提格利尼亚语",
        rtl: false,
    },
    LanguageName {
        key: "tongan",
        english: "Tongan",
        origin: "Tongan",
        chinese: "汤加语",
        rtl: false,
    },
    LanguageName {
        key: "yucatec",
        english: "Yucatec",
        origin: "Yucatec",
        chinese: "尤卡坦玛雅语",
        rtl: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keys_are_unique() {
        assert_eq!(language_names().len(), LANGUAGES.len());
    }

    #[test]
    fn declaration_order_is_kept() {
        let first: Vec<&str> = language_names().keys().take(3).copied().collect();
        assert_eq!(first, vec!["albanian", "arabic", "bangla"]);
    }

    #[test]
    fn english_entry() {
        let en = lookup_language("english").unwrap();
        assert_eq!(en.english, "English");
        assert_eq!(en.origin, "English");
        assert_eq!(en.chinese, "英语");
        assert!(!en.rtl);
    }

    #[test]
    fn rtl_languages() {
        let mut rtl: Vec<&str> = language_names()
            .values()
            .filter(|n| n.rtl)
            .map(|n| n.key)
            .collect();
        rtl.sort_unstable();
        assert_eq!(
            rtl,
            vec!["arabic", "hebrew", "kurdish", "pashto", "persian", "urdu"]
        );
    }

    #[test]
    fn unknown_key() {
        assert!(lookup_language("klingon-ish").is_none());
    }
}
