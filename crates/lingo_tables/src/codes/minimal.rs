//! Minimal tag table.
//!
//! The handful of tags that account for most real traffic. Kept separate so it
//! can be shipped on its own; the full table must agree with every entry here.

pub const MINIMAL_CODES: &[(&str, &str)] = &[
    ("en", "english"),
    ("en-us", "english"),
    ("en-gb", "english"),
    ("zh", "chinese"),
    ("zh-cn", "chinese"),
    ("zh-tw", "cantonese"),
    ("zh-hk", "cantonese"),
    ("ja", "japanese"),
    ("ko", "korean"),
    ("fr", "french"),
    ("de", "german"),
    ("es", "spanish"),
    ("pt", "portuguese"),
    ("pt-br", "portuguese"),
    ("ru", "russian"),
    ("it", "italian"),
    ("ar", "arabic"),
];
