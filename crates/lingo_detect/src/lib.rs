//! Lingo language detection
//!
//! Maps a host's ordered locale preferences (BCP-47-like tags such as
//! `zh-Hans-CN` or `en-US`) to a canonical language key and its display
//! metadata, without a full i18n framework.
//!
//! Pipeline:
//! - [`LocaleSource`]: where the raw tags come from (OS, HTTP header, plain data)
//! - [`expand_fallbacks`]: `zh-Hans-CN` -> `zh-hans-cn`, `zh-hans`, `zh`
//! - [`Resolver`]: first match of the expanded list in the code table, with an
//!   LRU cache keyed by the exact request
//! - [`Detector`]: source -> resolver -> [`LanguageName`]
//!
//! ```rust
//! use lingo_detect::{Detector, StaticSource};
//!
//! let detector = Detector::new(StaticSource::new().with_languages(["fr-CA", "en-US"]));
//! assert_eq!(detector.detect().map(|n| n.key), Some("french"));
//! ```

mod cache;
mod detector;
mod error;
mod fallback;
mod options;
mod resolver;
mod source;
mod standardize;

pub use cache::{Resolution, ResolutionCache, DEFAULT_CACHE_CAPACITY};
pub use detector::Detector;
pub use error::{DetectError, SourceError};
pub use fallback::{expand_all, expand_fallbacks, normalize_tag};
pub use options::DetectOptions;
pub use resolver::{resolve_uncached, Resolver};
pub use source::{origin_tags, parse_env_locale, AcceptLanguage, LocaleSource, StaticSource};
pub use standardize::standardize_language_code;

#[cfg(feature = "system")]
pub use source::SystemSource;

pub use lingo_tables::{language_names, lookup_language, LanguageName, TextDirection};

/// Resolve an ordered tag list with the process-wide cached resolver.
pub fn translate_origin_language<S: AsRef<str>>(tags: &[S]) -> Option<&'static str> {
    Resolver::global().resolve(tags)
}

/// The operating system's ordered language tags.
#[cfg(feature = "system")]
pub fn browser_origin(standardize: bool) -> Vec<String> {
    origin_tags(&SystemSource, standardize)
}

/// Detect the operating system's language, passing its tags through as-is.
#[cfg(feature = "system")]
pub fn detect() -> Option<&'static LanguageName> {
    detect_with(DetectOptions::compat())
}

/// Detect the operating system's language with explicit options.
#[cfg(feature = "system")]
pub fn detect_with(options: DetectOptions) -> Option<&'static LanguageName> {
    Detector::new(SystemSource).with_options(options).detect()
}
