use std::path::PathBuf;

use thiserror::Error;

/// A host locale API could not be read.
///
/// Produced by [`LocaleSource`](crate::LocaleSource) implementations and
/// always recovered inside the adapter; callers of detection never see it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("locale api unavailable: {0}")]
    Unavailable(&'static str),

    #[error("malformed locale data: {0}")]
    Malformed(String),
}

/// Errors from loading detection options.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] toml::de::Error),
}
