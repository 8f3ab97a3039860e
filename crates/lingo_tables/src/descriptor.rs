use serde::Serialize;

/// Writing direction of a language's script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Display metadata for one language key.
///
/// Serializes to `{ "key", "english", "origin", "chinese", "rtl" }`. That
/// shape is public and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageName {
    /// Canonical language key, e.g. `"chinese"`.
    pub key: &'static str,
    /// Name in English.
    pub english: &'static str,
    /// Endonym: the name in the language's own script.
    pub origin: &'static str,
    /// Name in Simplified Chinese.
    pub chinese: &'static str,
    /// Whether the language is written right-to-left.
    pub rtl: bool,
}

impl LanguageName {
    pub fn direction(&self) -> TextDirection {
        if self.rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEBREW: LanguageName = LanguageName {
        key: "hebrew",
        english: "Hebrew",
        origin: "עִברִית",
        chinese: "希伯来语",
        rtl: true,
    };

    #[test]
    fn serialized_shape_is_stable() {
        let value = serde_json::to_value(HEBREW).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "key": "hebrew",
                "english": "Hebrew",
                "origin": "עִברִית",
                "chinese": "希伯来语",
                "rtl": true,
            })
        );
    }

    #[test]
    fn direction_follows_rtl_flag() {
        assert_eq!(HEBREW.direction(), TextDirection::Rtl);
        let ltr = LanguageName { rtl: false, ..HEBREW };
        assert_eq!(ltr.direction(), TextDirection::Ltr);
    }
}
