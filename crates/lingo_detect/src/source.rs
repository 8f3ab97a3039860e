//! Host locale sources and the origin-tag adapter.
//!
//! A [`LocaleSource`] is the explicit capability through which detection
//! reaches the host environment. It mirrors the three places a browser keeps
//! language preferences:
//! 1. an ordered multi-language list
//! 2. a single preferred language
//! 3. a legacy single-language field
//!
//! [`origin_tags`] queries them in that order and never fails: errors and
//! missing data degrade to an empty list.

use std::collections::HashSet;

use tracing::debug;

use crate::error::SourceError;
use crate::standardize::standardize_language_code;

/// Read-only access to a host's language preferences.
///
/// Every method defaults to "not available", so a source only implements the
/// channels it actually has.
pub trait LocaleSource {
    /// Ordered preference list, most preferred first.
    fn languages(&self) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }

    /// Single preferred language.
    fn language(&self) -> Result<Option<String>, SourceError> {
        Ok(None)
    }

    /// Legacy single-language field.
    fn user_language(&self) -> Result<Option<String>, SourceError> {
        Ok(None)
    }
}

impl<T: LocaleSource + ?Sized> LocaleSource for &T {
    fn languages(&self) -> Result<Vec<String>, SourceError> {
        (**self).languages()
    }

    fn language(&self) -> Result<Option<String>, SourceError> {
        (**self).language()
    }

    fn user_language(&self) -> Result<Option<String>, SourceError> {
        (**self).user_language()
    }
}

/// Retrieve the ordered raw tag list from `source`.
///
/// With `standardize`, each tag is reduced to its primary language subtag
/// and duplicates are dropped, keeping first-occurrence order.
pub fn origin_tags(source: &impl LocaleSource, standardize: bool) -> Vec<String> {
    let languages = match retrieve(source) {
        Ok(languages) => languages,
        Err(e) => {
            debug!(error = %e, "locale source failed; treating as empty");
            Vec::new()
        }
    };

    if !standardize {
        return languages;
    }

    let mut seen = HashSet::new();
    languages
        .iter()
        .map(|tag| standardize_language_code(tag))
        .filter(|code| seen.insert(code.clone()))
        .collect()
}

fn retrieve(source: &impl LocaleSource) -> Result<Vec<String>, SourceError> {
    let list = source.languages()?;
    if !list.is_empty() {
        return Ok(list);
    }
    if let Some(language) = source.language()?.filter(|l| !l.is_empty()) {
        return Ok(vec![language]);
    }
    Ok(source
        .user_language()?
        .filter(|l| !l.is_empty())
        .into_iter()
        .collect())
}

/// A source backed by plain data.
///
/// Useful for embedding (values handed over from a webview or a request) and
/// for tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticSource {
    languages: Vec<String>,
    language: Option<String>,
    user_language: Option<String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_user_language(mut self, language: impl Into<String>) -> Self {
        self.user_language = Some(language.into());
        self
    }
}

impl LocaleSource for StaticSource {
    fn languages(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.languages.clone())
    }

    fn language(&self) -> Result<Option<String>, SourceError> {
        Ok(self.language.clone())
    }

    fn user_language(&self) -> Result<Option<String>, SourceError> {
        Ok(self.user_language.clone())
    }
}

/// Language preferences taken from an HTTP `Accept-Language` header.
///
/// Entries are ordered by descending quality; equal qualities keep header
/// order. `*`, `q=0` and malformed weights (outside `0..=1`) are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptLanguage {
    tags: Vec<String>,
}

impl AcceptLanguage {
    pub fn parse(header: &str) -> Self {
        let mut weighted: Vec<(String, f32)> = Vec::new();
        for part in header.split(',') {
            let mut pieces = part.split(';');
            let tag = pieces.next().unwrap_or_default().trim();
            if tag.is_empty() || tag == "*" {
                continue;
            }

            let mut quality = 1.0f32;
            for param in pieces {
                if let Some(q) = param.trim().strip_prefix("q=") {
                    // Out-of-range or non-finite weights count as malformed.
                    quality = q
                        .trim()
                        .parse()
                        .ok()
                        .filter(|q: &f32| q.is_finite() && (0.0..=1.0).contains(q))
                        .unwrap_or(0.0);
                }
            }
            if quality <= 0.0 {
                continue;
            }
            weighted.push((tag.to_string(), quality));
        }

        // Stable sort keeps header order among equal weights.
        weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self {
            tags: weighted.into_iter().map(|(tag, _)| tag).collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl LocaleSource for AcceptLanguage {
    fn languages(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.tags.clone())
    }
}

/// The operating system's language preferences.
///
/// - list: `sys_locale::get_locales()`
/// - single: `sys_locale::get_locale()`
/// - legacy: POSIX `LC_ALL` / `LC_MESSAGES` / `LANG`
#[cfg(feature = "system")]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemSource;

#[cfg(feature = "system")]
impl LocaleSource for SystemSource {
    fn languages(&self) -> Result<Vec<String>, SourceError> {
        Ok(sys_locale::get_locales().collect())
    }

    fn language(&self) -> Result<Option<String>, SourceError> {
        Ok(sys_locale::get_locale())
    }

    fn user_language(&self) -> Result<Option<String>, SourceError> {
        Ok(["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|key| std::env::var(key).ok().and_then(|v| parse_env_locale(&v))))
    }
}

/// Turn a POSIX locale value into a tag.
///
/// Examples: `"en_US.UTF-8"` -> `en-US`, `"sr_RS@latin"` -> `sr-RS`;
/// `"C"`, `"POSIX"` and empty values yield `None`.
pub fn parse_env_locale(raw: &str) -> Option<String> {
    let s = raw.trim();
    let s = s.split_once('.').map_or(s, |(part, _)| part);
    let s = s.split_once('@').map_or(s, |(part, _)| part);
    let s = s.trim();
    if s.is_empty() || s == "C" || s == "POSIX" {
        return None;
    }
    Some(s.replace('_', "-"))
}
