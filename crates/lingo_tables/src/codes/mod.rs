//! Canonical code table: normalized BCP-47 tag -> language key.
//!
//! Two source tables feed one lookup map:
//! - [`MINIMAL_CODES`]: the hottest tags, inserted first
//! - [`FULL_CODES`]: the complete surface, overlaid on top
//!
//! The overlay never changes a minimal entry as long as the two tables agree,
//! which [`divergent_codes`] checks. Lookups are exact string matches against
//! normalized tags; fallback is the resolver's job, not this table's.

mod full;
mod minimal;

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::names::language_names;

pub use full::FULL_CODES;
pub use minimal::MINIMAL_CODES;

static CODE_TABLE: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();

/// The combined lookup map, built once on first use.
pub fn code_table() -> &'static FxHashMap<&'static str, &'static str> {
    CODE_TABLE.get_or_init(|| {
        let mut map =
            FxHashMap::with_capacity_and_hasher(FULL_CODES.len(), Default::default());
        for &(tag, key) in MINIMAL_CODES.iter().chain(FULL_CODES) {
            map.insert(tag, key);
        }
        map
    })
}

/// Look up a normalized tag. No case folding or fallback is applied.
pub fn lookup_code(tag: &str) -> Option<&'static str> {
    code_table().get(tag).copied()
}

/// Language keys referenced by either code table that have no metadata entry.
///
/// An empty result means the two tables are in sync.
pub fn missing_metadata() -> Vec<&'static str> {
    let names = language_names();
    let mut missing = Vec::new();
    for &(_, key) in MINIMAL_CODES.iter().chain(FULL_CODES) {
        if !names.contains_key(key) && !missing.contains(&key) {
            missing.push(key);
        }
    }
    missing
}

/// Tags present in both tables with different keys, as `(tag, minimal, full)`.
pub fn divergent_codes() -> Vec<(&'static str, &'static str, &'static str)> {
    let full: FxHashMap<&str, &str> = FULL_CODES.iter().copied().collect();
    MINIMAL_CODES
        .iter()
        .filter_map(|&(tag, min_key)| match full.get(tag) {
            Some(&full_key) if full_key != min_key => Some((tag, min_key, full_key)),
            _ => None,
        })
        .collect()
}

/// Stored tags that a normalized (trimmed, lowercase) lookup can never hit.
pub fn unnormalized_codes() -> Vec<&'static str> {
    MINIMAL_CODES
        .iter()
        .chain(FULL_CODES)
        .map(|&(tag, _)| tag)
        .filter(|tag| tag.is_empty() || *tag != tag.trim() || tag.chars().any(char::is_uppercase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup_code("en-us"), Some("english"));
        assert_eq!(lookup_code("en-US"), None);
        assert_eq!(lookup_code(" en"), None);
        assert_eq!(lookup_code("xx"), None);
    }

    #[test]
    fn chinese_scripts_split_between_keys() {
        assert_eq!(lookup_code("zh"), Some("chinese"));
        assert_eq!(lookup_code("zh-hans-cn"), Some("chinese"));
        assert_eq!(lookup_code("zh-tw"), Some("cantonese"));
        assert_eq!(lookup_code("zh-hant"), Some("cantonese"));
    }

    #[test]
    fn minimal_entries_survive_overlay() {
        for &(tag, key) in MINIMAL_CODES {
            assert_eq!(lookup_code(tag), Some(key), "tag={tag}");
        }
    }

    #[test]
    fn full_table_has_no_duplicate_tags() {
        let unique: rustc_hash::FxHashSet<&str> = FULL_CODES.iter().map(|&(t, _)| t).collect();
        assert_eq!(unique.len(), FULL_CODES.len());
    }
}
