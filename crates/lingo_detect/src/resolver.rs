use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use lingo_tables::lookup_code;
use tracing::trace;

use crate::cache::{Resolution, ResolutionCache, DEFAULT_CACHE_CAPACITY};
use crate::fallback::expand_all;

/// Global resolver singleton.
static RESOLVER: OnceLock<Resolver> = OnceLock::new();

/// Resolve an ordered tag list without any caching.
///
/// Every tag is expanded into its fallback chain, the chains are concatenated
/// in request order (first occurrence wins), and the first entry present in
/// the code table decides the result.
pub fn resolve_uncached<S: AsRef<str>>(tags: &[S]) -> Option<&'static str> {
    if tags.is_empty() {
        return None;
    }
    expand_all(tags).iter().find_map(|code| lookup_code(code))
}

/// Cached tag-list resolver.
///
/// The cache sits behind one mutex, held for the whole lookup-or-compute-
/// and-store sequence since an LRU hit mutates recency.
pub struct Resolver {
    cache: Mutex<ResolutionCache>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Mutex::new(ResolutionCache::new(capacity)),
        }
    }

    /// The process-wide resolver, created on first use with the default
    /// capacity.
    pub fn global() -> &'static Resolver {
        RESOLVER.get_or_init(Resolver::new)
    }

    /// Resolve an ordered tag list (most preferred first) to a language key.
    ///
    /// Results, including "no match", are cached per exact request order.
    pub fn resolve<S: AsRef<str>>(&self, tags: &[S]) -> Option<&'static str> {
        if tags.is_empty() {
            return None;
        }

        let key = cache_key(tags);
        let mut cache = self.lock();
        if let Some(hit) = cache.get(&key) {
            trace!(tags = ?key, result = ?hit, "resolution cache hit");
            return hit.key();
        }

        let resolved = resolve_uncached(tags);
        trace!(tags = ?key, result = ?resolved, "resolution cache miss");
        cache.put(key, Resolution::from(resolved));
        resolved
    }

    /// Inspect the cached resolution for a request without promoting it.
    ///
    /// `None` means not cached; `Some(Resolution::Unmatched)` is a cached miss.
    pub fn cached<S: AsRef<str>>(&self, tags: &[S]) -> Option<Resolution> {
        self.lock().peek(&cache_key(tags))
    }

    pub fn cache_len(&self) -> usize {
        self.lock().len()
    }

    pub fn cache_capacity(&self) -> NonZeroUsize {
        self.lock().capacity()
    }

    pub fn clear_cache(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, ResolutionCache> {
        // The cache holds plain values; a panic elsewhere cannot leave it torn.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

fn cache_key<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter().map(|t| t.as_ref().to_string()).collect()
}
