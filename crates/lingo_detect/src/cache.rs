use std::num::NonZeroUsize;

use lru::LruCache;

/// Default number of distinct tag lists remembered by a resolver.
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => unreachable!(),
};

/// Outcome of resolving one tag list.
///
/// `Unmatched` is a stored negative result, distinct from "not cached yet".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched(&'static str),
    Unmatched,
}

impl Resolution {
    pub fn key(self) -> Option<&'static str> {
        match self {
            Resolution::Matched(key) => Some(key),
            Resolution::Unmatched => None,
        }
    }
}

impl From<Option<&'static str>> for Resolution {
    fn from(key: Option<&'static str>) -> Self {
        key.map_or(Resolution::Unmatched, Resolution::Matched)
    }
}

/// Bounded LRU cache of resolutions, keyed by the raw request list.
///
/// The key keeps the caller's order: `["en", "zh"]` and `["zh", "en"]` are
/// separate entries.
pub struct ResolutionCache {
    entries: LruCache<Vec<String>, Resolution>,
}

impl ResolutionCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Look up a request, promoting it to most-recently-used on a hit.
    pub fn get(&mut self, key: &[String]) -> Option<Resolution> {
        self.entries.get(key).copied()
    }

    /// Look up a request without touching recency.
    pub fn peek(&self, key: &[String]) -> Option<Resolution> {
        self.entries.peek(key).copied()
    }

    /// Store a resolution; evicts the least-recently-used entry when full.
    pub fn put(&mut self, key: Vec<String>, resolution: Resolution) {
        self.entries.put(key, resolution);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.entries.cap()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn negative_result_is_distinct_from_absent() {
        let mut cache = ResolutionCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&key(&["xx"])), None);
        cache.put(key(&["xx"]), Resolution::Unmatched);
        assert!(!cache.is_empty());
        assert_eq!(cache.get(&key(&["xx"])), Some(Resolution::Unmatched));
    }

    #[test]
    fn order_is_part_of_the_key() {
        let mut cache = ResolutionCache::default();
        cache.put(key(&["en", "zh"]), Resolution::Matched("english"));
        assert_eq!(cache.get(&key(&["zh", "en"])), None);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ResolutionCache::new(NonZeroUsize::new(2).unwrap());
        cache.put(key(&["a"]), Resolution::Unmatched);
        cache.put(key(&["b"]), Resolution::Unmatched);

        // Touch `a` so `b` becomes the eviction candidate.
        assert!(cache.get(&key(&["a"])).is_some());
        cache.put(key(&["c"]), Resolution::Unmatched);

        assert_eq!(cache.len(), 2);
        assert!(cache.peek(&key(&["a"])).is_some());
        assert!(cache.peek(&key(&["b"])).is_none());
        assert!(cache.peek(&key(&["c"])).is_some());
    }

    #[test]
    fn peek_does_not_promote() {
        let mut cache = ResolutionCache::new(NonZeroUsize::new(2).unwrap());
        cache.put(key(&["a"]), Resolution::Unmatched);
        cache.put(key(&["b"]), Resolution::Unmatched);
        assert!(cache.peek(&key(&["a"])).is_some());
        cache.put(key(&["c"]), Resolution::Unmatched);
        assert!(cache.peek(&key(&["a"])).is_none());
    }

    #[test]
    fn resolution_round_trips_option() {
        assert_eq!(Resolution::from(Some("thai")).key(), Some("thai"));
        assert_eq!(Resolution::from(None).key(), None);
    }
}
