//! Detection options (lingo.toml / embedded TOML)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DetectError;

/// How [`Detector`](crate::Detector) turns host tags into a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DetectOptions {
    /// Use the resolver's LRU cache. When off, every call expands and matches
    /// from scratch.
    #[serde(default = "default_true")]
    pub use_cache: bool,
    /// Reduce each host tag to its primary language subtag before resolving.
    #[serde(default = "default_true")]
    pub standardize: bool,
    /// Maximum number of host tags considered; the rest are ignored.
    #[serde(default = "default_max_fallbacks")]
    pub max_fallbacks: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_fallbacks() -> usize {
    10
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            use_cache: default_true(),
            standardize: default_true(),
            max_fallbacks: default_max_fallbacks(),
        }
    }
}

impl DetectOptions {
    /// Cached, unstandardized, untruncated: tags reach the resolver exactly as
    /// the host reported them.
    pub fn compat() -> Self {
        Self {
            use_cache: true,
            standardize: false,
            max_fallbacks: usize::MAX,
        }
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    pub fn standardize(mut self, standardize: bool) -> Self {
        self.standardize = standardize;
        self
    }

    pub fn max_fallbacks(mut self, max_fallbacks: usize) -> Self {
        self.max_fallbacks = max_fallbacks;
        self
    }

    /// Parse options from TOML. Missing keys take their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, DetectError> {
        Ok(toml::from_str(src)?)
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DetectError> {
        let content = fs::read_to_string(path).map_err(|source| DetectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let opts = DetectOptions::default();
        assert!(opts.use_cache);
        assert!(opts.standardize);
        assert_eq!(opts.max_fallbacks, 10);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            DetectOptions::from_toml_str("").unwrap(),
            DetectOptions::default()
        );
    }

    #[test]
    fn partial_toml() {
        let opts = DetectOptions::from_toml_str("standardize = false\nmax_fallbacks = 3\n").unwrap();
        assert_eq!(
            opts,
            DetectOptions::default().standardize(false).max_fallbacks(3)
        );
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = DetectOptions::from_toml_str("use_cache = \"yes\"").unwrap_err();
        assert!(matches!(err, DetectError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lingo.toml");
        fs::write(&path, "use_cache = false\n").unwrap();

        let opts = DetectOptions::load(&path).unwrap();
        assert!(!opts.use_cache);
        assert!(opts.standardize);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DetectOptions::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, DetectError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn round_trips_through_toml() {
        let opts = DetectOptions::compat().use_cache(false).max_fallbacks(4);
        let src = toml::to_string(&opts).unwrap();
        assert_eq!(DetectOptions::from_toml_str(&src).unwrap(), opts);
    }
}
