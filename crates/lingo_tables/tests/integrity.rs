//! Cross-checks between the code table and the metadata table.

use lingo_tables::codes::{
    divergent_codes, missing_metadata, unnormalized_codes, FULL_CODES, MINIMAL_CODES,
};
use lingo_tables::{language_names, lookup_code, lookup_language};
use pretty_assertions::assert_eq;

#[test]
fn every_code_has_metadata() {
    assert_eq!(missing_metadata(), Vec::<&str>::new());
}

#[test]
fn minimal_and_full_tables_agree() {
    assert_eq!(divergent_codes(), Vec::<(&str, &str, &str)>::new());
}

#[test]
fn stored_tags_are_normalized() {
    assert_eq!(unnormalized_codes(), Vec::<&str>::new());
}

#[test]
fn minimal_table_is_covered_by_full_table() {
    for &(tag, key) in MINIMAL_CODES {
        assert!(
            FULL_CODES.iter().any(|&(t, k)| t == tag && k == key),
            "minimal tag {tag} missing from full table"
        );
    }
}

#[test]
fn every_language_is_reachable() {
    for key in language_names().keys() {
        assert!(
            FULL_CODES.iter().any(|&(_, k)| k == *key),
            "language {key} has no tag"
        );
    }
}

#[test]
fn descriptor_keys_match_their_entries() {
    for (key, name) in language_names() {
        assert_eq!(*key, name.key);
        assert!(!name.english.is_empty(), "{key}: english");
        assert!(!name.origin.is_empty(), "{key}: origin");
        assert!(!name.chinese.is_empty(), "{key}: chinese");
    }
}

#[test]
fn chinese_descriptor() {
    let key = lookup_code("zh-cn").unwrap();
    let name = lookup_language(key).unwrap();
    assert_eq!(name.key, "chinese");
    assert_eq!(name.english, "Chinese Simplified");
    assert_eq!(name.origin, "简体中文");
    assert!(!name.rtl);
}
