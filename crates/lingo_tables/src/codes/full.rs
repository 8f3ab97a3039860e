//! Full tag table.
//!
//! Covers primary language subtags plus the region and script variants that
//! browsers commonly report. Every tag is stored pre-normalized (lowercase).

pub const FULL_CODES: &[(&str, &str)] = &[
    // Albanian
    ("sq", "albanian"), ("sq-al", "albanian"), ("sq-xk", "albanian"), ("sq-mk", "albanian"),
    // Arabic
    ("ar", "arabic"), ("ar-ae", "arabic"), ("ar-bh", "arabic"), ("ar-dz", "arabic"),
    ("ar-eg", "arabic"), ("ar-iq", "arabic"), ("ar-jo", "arabic"), ("ar-kw", "arabic"),
    ("ar-lb", "arabic"), ("ar-ly", "arabic"), ("ar-ma", "arabic"), ("ar-om", "arabic"),
    ("ar-qa", "arabic"), ("ar-sa", "arabic"), ("ar-sd", "arabic"), ("ar-sy", "arabic"),
    ("ar-tn", "arabic"), ("ar-ye", "arabic"),
    // Bangla
    ("bn-bd", "bangla"),
    // Belarusian
    ("be", "belarusian"), ("be-by", "belarusian"),
    // Bengali
    ("bn", "bengali"), ("bn-in", "bengali"),
    // Bulgarian
    ("bg", "bulgarian"), ("bg-bg", "bulgarian"),
    // Khmer
    ("km", "cambodia"), ("km-kh", "cambodia"),
    // Chinese (Traditional)
    ("zh-tw", "cantonese"), ("zh-hk", "cantonese"), ("zh-mo", "cantonese"),
    ("zh-hant", "cantonese"), ("zh-hant-tw", "cantonese"), ("zh-hant-hk", "cantonese"),
    ("zh-hant-mo", "cantonese"), ("yue", "cantonese"), ("yue-hk", "cantonese"),
    ("yue-hant", "cantonese"), ("yue-hant-hk", "cantonese"),
    // Chinese Simplified
    ("zh", "chinese"), ("zh-cn", "chinese"), ("zh-sg", "chinese"), ("zh-my", "chinese"),
    ("zh-hans", "chinese"), ("zh-hans-cn", "chinese"), ("zh-hans-sg", "chinese"),
    ("zh-hans-my", "chinese"), ("zh-hans-hk", "chinese"), ("zh-hans-mo", "chinese"),
    // Croatian
    ("hr", "croatian"), ("hr-hr", "croatian"), ("hr-ba", "croatian"),
    // Czech
    ("cs", "czech"), ("cs-cz", "czech"),
    // Danish
    ("da", "danish"), ("da-dk", "danish"), ("da-gl", "danish"),
    // Dutch
    ("nl", "dutch"), ("nl-nl", "dutch"), ("nl-be", "dutch"), ("nl-sr", "dutch"),
    ("nl-aw", "dutch"), ("nl-cw", "dutch"),
    // English
    ("en", "english"), ("en-us", "english"), ("en-gb", "english"), ("en-au", "english"),
    ("en-ca", "english"), ("en-nz", "english"), ("en-ie", "english"), ("en-za", "english"),
    ("en-in", "english"), ("en-sg", "english"), ("en-ph", "english"), ("en-jm", "english"),
    ("en-bz", "english"), ("en-tt", "english"), ("en-zw", "english"), ("en-hk", "english"),
    ("en-my", "english"), ("en-ng", "english"), ("en-ke", "english"), ("en-pk", "english"),
    ("en-gh", "english"), ("en-mt", "english"), ("en-001", "english"), ("en-150", "english"),
    // Esperanto
    ("eo", "esperanto"), ("eo-001", "esperanto"),
    // Filipino
    ("fil", "filipino"), ("fil-ph", "filipino"), ("tl", "filipino"), ("tl-ph", "filipino"),
    // Finnish
    ("fi", "finnish"), ("fi-fi", "finnish"),
    // French
    ("fr", "french"), ("fr-fr", "french"), ("fr-be", "french"), ("fr-ca", "french"),
    ("fr-ch", "french"), ("fr-lu", "french"), ("fr-mc", "french"), ("fr-sn", "french"),
    ("fr-ci", "french"), ("fr-cm", "french"), ("fr-cd", "french"), ("fr-ht", "french"),
    ("fr-ma", "french"), ("fr-dz", "french"), ("fr-tn", "french"), ("fr-re", "french"),
    // German
    ("de", "german"), ("de-de", "german"), ("de-at", "german"), ("de-ch", "german"),
    ("de-li", "german"), ("de-lu", "german"), ("de-be", "german"),
    // Greek
    ("el", "greek"), ("el-gr", "greek"), ("el-cy", "greek"),
    // Hausa
    ("ha", "hausa"), ("ha-ng", "hausa"), ("ha-gh", "hausa"), ("ha-ne", "hausa"),
    ("ha-latn", "hausa"), ("ha-latn-ng", "hausa"),
    // Hebrew
    ("he", "hebrew"), ("he-il", "hebrew"), ("iw", "hebrew"), ("iw-il", "hebrew"),
    // Hindi
    ("hi", "hindi"), ("hi-in", "hindi"),
    // Hungarian
    ("hu", "hungarian"), ("hu-hu", "hungarian"),
    // Indonesian
    ("id", "indonesian"), ("id-id", "indonesian"), ("in", "indonesian"),
    // Italian
    ("it", "italian"), ("it-it", "italian"), ("it-ch", "italian"), ("it-sm", "italian"),
    ("it-va", "italian"),
    // Japanese
    ("ja", "japanese"), ("ja-jp", "japanese"),
    // Korean
    ("ko", "korean"), ("ko-kr", "korean"), ("ko-kp", "korean"),
    // Lao
    ("lo", "laos"), ("lo-la", "laos"),
    // Malay
    ("ms", "malay"), ("ms-my", "malay"), ("ms-bn", "malay"), ("ms-sg", "malay"),
    // Mongolian
    ("mn", "mongolian"), ("mn-mn", "mongolian"), ("mn-cyrl", "mongolian"),
    ("mn-cyrl-mn", "mongolian"), ("mn-mong", "mongolian"), ("mn-mong-cn", "mongolian"),
    // Myanmar
    ("my", "myanmar"), ("my-mm", "myanmar"),
    // Norwegian
    ("no", "norwegian"), ("no-no", "norwegian"), ("nb", "norwegian"), ("nb-no", "norwegian"),
    ("nb-sj", "norwegian"), ("nn", "norwegian"), ("nn-no", "norwegian"),
    // Nepali
    ("ne", "nepali"), ("ne-np", "nepali"), ("ne-in", "nepali"),
    // Pashto
    ("ps", "pashto"), ("ps-af", "pashto"), ("ps-pk", "pashto"),
    // Persian
    ("fa", "persian"), ("fa-ir", "persian"), ("fa-af", "persian"),
    // Polish
    ("pl", "poland"), ("pl-pl", "poland"),
    // Portuguese
    ("pt", "portuguese"), ("pt-pt", "portuguese"), ("pt-br", "portuguese"),
    ("pt-ao", "portuguese"), ("pt-mz", "portuguese"), ("pt-cv", "portuguese"),
    ("pt-gw", "portuguese"), ("pt-tl", "portuguese"), ("pt-ch", "portuguese"),
    ("pt-lu", "portuguese"),
    // Romanian
    ("ro", "romanian"), ("ro-ro", "romanian"), ("ro-md", "romanian"),
    // Russian
    ("ru", "russian"), ("ru-ru", "russian"), ("ru-by", "russian"), ("ru-kz", "russian"),
    ("ru-kg", "russian"), ("ru-md", "russian"), ("ru-ua", "russian"),
    // Serbian
    ("sr", "serbian"), ("sr-rs", "serbian"), ("sr-me", "serbian"), ("sr-ba", "serbian"),
    ("sr-xk", "serbian"), ("sr-cyrl", "serbian"), ("sr-cyrl-rs", "serbian"),
    ("sr-cyrl-me", "serbian"), ("sr-cyrl-ba", "serbian"), ("sr-latn", "serbian"),
    ("sr-latn-rs", "serbian"), ("sr-latn-me", "serbian"), ("sr-latn-ba", "serbian"),
    // Sinhalese
    ("si", "sinhalese"), ("si-lk", "sinhalese"),
    // Slovak
    ("sk", "slovak"), ("sk-sk", "slovak"),
    // Spanish
    ("es", "spanish"), ("es-es", "spanish"), ("es-mx", "spanish"), ("es-ar", "spanish"),
    ("es-bo", "spanish"), ("es-cl", "spanish"), ("es-co", "spanish"), ("es-cr", "spanish"),
    ("es-cu", "spanish"), ("es-do", "spanish"), ("es-ec", "spanish"), ("es-sv", "spanish"),
    ("es-gt", "spanish"), ("es-hn", "spanish"), ("es-ni", "spanish"), ("es-pa", "spanish"),
    ("es-py", "spanish"), ("es-pe", "spanish"), ("es-pr", "spanish"), ("es-uy", "spanish"),
    ("es-ve", "spanish"), ("es-us", "spanish"), ("es-419", "spanish"), ("es-gq", "spanish"),
    ("es-ph", "spanish"),
    // Swahili
    ("sw", "swahili"), ("sw-ke", "swahili"), ("sw-tz", "swahili"), ("sw-ug", "swahili"),
    ("sw-cd", "swahili"),
    // Swedish
    ("sv", "swedish"), ("sv-se", "swedish"), ("sv-fi", "swedish"), ("sv-ax", "swedish"),
    // Tamil
    ("ta", "tamil"), ("ta-in", "tamil"), ("ta-lk", "tamil"), ("ta-sg", "tamil"),
    ("ta-my", "tamil"),
    // Thai
    ("th", "thai"), ("th-th", "thai"),
    // Turkish
    ("tr", "turkish"), ("tr-tr", "turkish"), ("tr-cy", "turkish"),
    // Ukrainian
    ("uk", "ukrainian"), ("uk-ua", "ukrainian"),
    // Urdu
    ("ur", "urdu"), ("ur-pk", "urdu"), ("ur-in", "urdu"),
    // Vietnamese
    ("vi", "vietnamese"), ("vi-vn", "vietnamese"),
    // Afrikaans
    ("af", "afrikaans"), ("af-za", "afrikaans"), ("af-na", "afrikaans"),
    // Amharic
    ("am", "amharic"), ("am-et", "amharic"),
    // Azeri
    ("az", "azeri"), ("az-az", "azeri"), ("az-latn", "azeri"), ("az-latn-az", "azeri"),
    ("az-cyrl", "azeri"), ("az-cyrl-az", "azeri"),
    // Bosnian
    ("bs", "bosnian"), ("bs-ba", "bosnian"), ("bs-latn", "bosnian"), ("bs-latn-ba", "bosnian"),
    ("bs-cyrl", "bosnian"), ("bs-cyrl-ba", "bosnian"),
    // Catalan
    ("ca", "catalan"), ("ca-es", "catalan"), ("ca-ad", "catalan"), ("ca-fr", "catalan"),
    ("ca-it", "catalan"), ("ca-es-valencia", "catalan"),
    // Welsh
    ("cy", "welsh"), ("cy-gb", "welsh"),
    // Estonian
    ("et", "estonian"), ("et-ee", "estonian"),
    // Basque
    ("eu", "basque"), ("eu-es", "basque"), ("eu-fr", "basque"),
    // Irish
    ("ga", "irish"), ("ga-ie", "irish"), ("ga-gb", "irish"),
    // Galician
    ("gl", "galician"), ("gl-es", "galician"),
    // Gujarati
    ("gu", "gujarati"), ("gu-in", "gujarati"),
    // Armenian
    ("hy", "armenian"), ("hy-am", "armenian"),
    // Icelandic
    ("is", "icelandic"), ("is-is", "icelandic"),
    // Javanese
    ("jv", "javanese"), ("jv-id", "javanese"), ("jv-latn", "javanese"), ("jv-latn-id", "javanese"),
    // Georgian
    ("ka", "georgian"), ("ka-ge", "georgian"),
    // Kazakh
    ("kk", "kazakh"), ("kk-kz", "kazakh"), ("kk-cyrl", "kazakh"), ("kk-cyrl-kz", "kazakh"),
    // Kannada
    ("kn", "kannada"), ("kn-in", "kannada"),
    // Lithuanian
    ("lt", "lithuanian"), ("lt-lt", "lithuanian"),
    // Latvian
    ("lv", "latvian"), ("lv-lv", "latvian"),
    // Macedonian
    ("mk", "macedonian"), ("mk-mk", "macedonian"),
    // Marathi
    ("mr", "marathi"), ("mr-in", "marathi"),
    // Maltese
    ("mt", "maltese"), ("mt-mt", "maltese"),
    // Punjabi
    ("pa", "punjabi"), ("pa-in", "punjabi"), ("pa-pk", "punjabi"), ("pa-guru", "punjabi"),
    ("pa-guru-in", "punjabi"), ("pa-arab", "punjabi"), ("pa-arab-pk", "punjabi"),
    // Slovenian
    ("sl", "slovenian"), ("sl-si", "slovenian"),
    // Somali
    ("so", "somali"), ("so-so", "somali"), ("so-dj", "somali"), ("so-et", "somali"),
    ("so-ke", "somali"),
    // Telugu
    ("te", "telugu"), ("te-in", "telugu"),
    // Uzbek
    ("uz", "uzbek"), ("uz-uz", "uzbek"), ("uz-latn", "uzbek"), ("uz-latn-uz", "uzbek"),
    ("uz-cyrl", "uzbek"), ("uz-cyrl-uz", "uzbek"), ("uz-arab", "uzbek"), ("uz-arab-af", "uzbek"),
    // Zulu
    ("zu", "zulu"), ("zu-za", "zulu"),
    // Sundanese
    ("su", "sundanese"), ("su-id", "sundanese"), ("su-latn", "sundanese"),
    ("su-latn-id", "sundanese"),
    // Assamese
    ("as", "assamese"), ("as-in", "assamese"),
    // Fijian
    ("fj", "fijian"), ("fj-fj", "fijian"),
    // Haitian
    ("ht", "haitian"), ("ht-ht", "haitian"),
    // Hmong
    ("hmn", "hmong"), ("hmn-cn", "hmong"), ("hmn-la", "hmong"), ("hmn-vn", "hmong"),
    ("mww", "hmong"), ("mww-latn", "hmong"),
    // Inuktitut
    ("iu", "inuktitut"), ("iu-ca", "inuktitut"), ("iu-cans", "inuktitut"),
    ("iu-cans-ca", "inuktitut"), ("iu-latn", "inuktitut"), ("iu-latn-ca", "inuktitut"),
    // Klingon
    ("tlh", "klingon"), ("tlh-latn", "klingon"), ("tlh-piqd", "klingon"),
    // Kurdish
    ("ku", "kurdish"), ("ku-iq", "kurdish"), ("ku-tr", "kurdish"), ("ku-arab", "kurdish"),
    ("ku-arab-iq", "kurdish"), ("ku-latn", "kurdish"), ("ku-latn-tr", "kurdish"),
    ("ckb", "kurdish"), ("ckb-iq", "kurdish"), ("ckb-ir", "kurdish"), ("kmr", "kurdish"),
    ("kmr-tr", "kurdish"), ("kmr-latn", "kurdish"),
    // Malagasy
    ("mg", "malagasy"), ("mg-mg", "malagasy"),
    // Maori
    ("mi", "maori"), ("mi-nz", "maori"),
    // Oriya
    ("or", "oriya"), ("or-in", "oriya"),
    // Queretaro
    ("otq", "queretaro"), ("otq-mx", "queretaro"),
    // Samoan
    ("sm", "samoan"), ("sm-ws", "samoan"), ("sm-as", "samoan"),
    // Tahitian
    ("ty", "tahitian"), ("ty-pf", "tahitian"),
    // Tigrinya
    ("ti", "tigrinya"), ("ti-er", "tigrinya"), ("ti-et", "tigrinya"),
    // Tongan
    ("to", "tongan"), ("to-to", "tongan"),
    // Yucatec
    ("yua", "yucatec"), ("yua-mx", "yucatec"),
];
