use lingo_tables::{lookup_language, LanguageName};
use tracing::warn;

use crate::options::DetectOptions;
use crate::resolver::{resolve_uncached, Resolver};
use crate::source::{origin_tags, LocaleSource};

/// Language detection facade: source -> resolver -> metadata.
pub struct Detector<'r, S> {
    source: S,
    options: DetectOptions,
    resolver: &'r Resolver,
}

impl<S: LocaleSource> Detector<'static, S> {
    /// Detector over `source` with default options and the global resolver.
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: DetectOptions::default(),
            resolver: Resolver::global(),
        }
    }
}

impl<'r, S: LocaleSource> Detector<'r, S> {
    /// Use a caller-owned resolver instead of the global one.
    pub fn with_resolver<'a>(self, resolver: &'a Resolver) -> Detector<'a, S> {
        Detector {
            source: self.source,
            options: self.options,
            resolver,
        }
    }

    pub fn with_options(mut self, options: DetectOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Host tags as they will be handed to the resolver (standardized and
    /// truncated per the options).
    pub fn origin_tags(&self) -> Vec<String> {
        let mut tags = origin_tags(&self.source, self.options.standardize);
        tags.truncate(self.options.max_fallbacks);
        tags
    }

    /// Resolve the host's preferences to a language key.
    pub fn detect_key(&self) -> Option<&'static str> {
        let tags = self.origin_tags();
        if self.options.use_cache {
            self.resolver.resolve(&tags)
        } else {
            resolve_uncached(&tags)
        }
    }

    /// Resolve the host's preferences to a language descriptor.
    pub fn detect(&self) -> Option<&'static LanguageName> {
        let key = self.detect_key()?;
        let name = lookup_language(key);
        if name.is_none() {
            warn!(key = %key, "resolved language key has no metadata entry");
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn french_has_priority() {
        let resolver = Resolver::new();
        let source = StaticSource::new().with_languages(["fr-CA", "en-US"]);

        for options in [
            DetectOptions::default(),
            DetectOptions::default().use_cache(false),
            DetectOptions::compat(),
        ] {
            let detector = Detector::new(&source)
                .with_resolver(&resolver)
                .with_options(options);
            assert_eq!(detector.detect().map(|n| n.key), Some("french"), "{options:?}");
        }
    }

    #[test]
    fn nothing_reported() {
        let resolver = Resolver::new();
        let detector = Detector::new(StaticSource::new()).with_resolver(&resolver);
        assert_eq!(detector.source(), &StaticSource::new());
        assert_eq!(detector.detect(), None);
        assert_eq!(resolver.cache_len(), 0);
    }

    #[test]
    fn unmatched_tags() {
        let resolver = Resolver::new();
        let detector =
            Detector::new(StaticSource::new().with_language("x")).with_resolver(&resolver);
        assert_eq!(detector.detect(), None);
    }

    #[test]
    fn uncached_path_leaves_cache_alone() {
        let resolver = Resolver::new();
        let detector = Detector::new(StaticSource::new().with_language("de-AT"))
            .with_resolver(&resolver)
            .with_options(DetectOptions::default().use_cache(false));
        assert_eq!(detector.detect_key(), Some("german"));
        assert_eq!(resolver.cache_len(), 0);
    }

    #[test]
    fn truncation_happens_before_resolution() {
        let resolver = Resolver::new();
        let source = StaticSource::new().with_languages(["xx", "yy", "ja"]);
        let detector = Detector::new(source)
            .with_resolver(&resolver)
            .with_options(DetectOptions::compat().max_fallbacks(2));
        assert_eq!(detector.origin_tags(), vec!["xx", "yy"]);
        assert_eq!(detector.detect(), None);

        let detector = detector.with_options(DetectOptions::compat().max_fallbacks(3));
        assert_eq!(detector.detect().map(|n| n.key), Some("japanese"));
    }

    #[test]
    fn standardization_drops_script_distinction() {
        let resolver = Resolver::new();
        let source = StaticSource::new().with_language("zh-Hant-TW");

        let exact = Detector::new(&source)
            .with_resolver(&resolver)
            .with_options(DetectOptions::compat());
        assert_eq!(exact.detect_key(), Some("cantonese"));

        let standardized = Detector::new(&source).with_resolver(&resolver);
        assert_eq!(standardized.origin_tags(), vec!["zh"]);
        assert_eq!(standardized.detect_key(), Some("chinese"));
    }

    #[test]
    fn english_descriptor() {
        let resolver = Resolver::new();
        let detector = Detector::new(StaticSource::new().with_language("en-US"))
            .with_resolver(&resolver)
            .with_options(DetectOptions::compat());
        let name = detector.detect().unwrap();
        assert_eq!(
            *name,
            LanguageName {
                key: "english",
                english: "English",
                origin: "English",
                chinese: "英语",
                rtl: false,
            }
        );
    }
}
