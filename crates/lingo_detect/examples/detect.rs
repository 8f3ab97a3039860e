//! Print what lingo detects on this machine.
//!
//! Run with `RUST_LOG=lingo_detect=trace` to see resolver cache activity.

use lingo_detect::{
    browser_origin, detect, detect_with, translate_origin_language, DetectOptions,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("system tags:        {:?}", browser_origin(false));
    println!("standardized tags:  {:?}", browser_origin(true));

    match detect() {
        Some(name) => println!(
            "detected:           {} ({}, {}){}",
            name.english,
            name.origin,
            name.key,
            if name.rtl { " [rtl]" } else { "" }
        ),
        None => println!("detected:           nothing"),
    }
    println!(
        "detected (default): {:?}",
        detect_with(DetectOptions::default()).map(|n| n.key)
    );

    for tags in [
        &["zh-Hans-CN", "en-US"][..],
        &["en-US", "zh-Hans-CN"],
        &["unknown-XX", "pt-BR"],
        &["xx"],
    ] {
        println!("{tags:?} -> {:?}", translate_origin_language(tags));
    }
}
