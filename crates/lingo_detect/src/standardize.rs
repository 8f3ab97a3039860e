//! Reduce a raw tag to its primary language subtag.

/// Standardize a language tag to its primary language subtag.
///
/// With the `langid` feature the tag is parsed as a BCP-47 language
/// identifier, so `zh_Hans_CN` and `ZH-hans-cn` both yield `zh`. Tags the
/// parser rejects (and every tag when the feature is off) fall back to the
/// lowercased text before the first `-`. This never fails.
pub fn standardize_language_code(tag: &str) -> String {
    if let Some(language) = parse_language(tag) {
        return language;
    }
    naive_language(tag)
}

#[cfg(feature = "langid")]
fn parse_language(tag: &str) -> Option<String> {
    use unic_langid::LanguageIdentifier;

    match tag.parse::<LanguageIdentifier>() {
        Ok(langid) => Some(langid.language.as_str().to_string()),
        Err(e) => {
            tracing::trace!(tag = %tag, error = %e, "langid rejected tag, using prefix");
            None
        }
    }
}

#[cfg(not(feature = "langid"))]
fn parse_language(_tag: &str) -> Option<String> {
    None
}

fn naive_language(tag: &str) -> String {
    let tag = tag.trim();
    let prefix = tag.split_once('-').map_or(tag, |(lang, _)| lang);
    prefix.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primary_subtag() {
        assert_eq!(standardize_language_code("zh-Hans-CN"), "zh");
        assert_eq!(standardize_language_code("en-US"), "en");
        assert_eq!(standardize_language_code("fr"), "fr");
    }

    #[test]
    fn uppercase_language_is_lowered() {
        assert_eq!(standardize_language_code("EN-gb"), "en");
    }

    #[test]
    fn unparseable_tag_uses_prefix() {
        // Private-use and malformed tags still yield their first segment.
        assert_eq!(standardize_language_code("fr-CA-x-ca"), "fr");
        assert_eq!(standardize_language_code("x"), "x");
        assert_eq!(naive_language("Unknown-XX"), "unknown");
    }

    #[test]
    fn naive_handles_whitespace() {
        assert_eq!(naive_language("  De-AT "), "de");
        assert_eq!(naive_language(""), "");
    }

    #[cfg(feature = "langid")]
    #[test]
    fn underscore_separator_is_understood() {
        assert_eq!(standardize_language_code("pt_BR"), "pt");
    }
}
