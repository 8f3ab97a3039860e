use std::collections::HashSet;

/// Normalize a raw tag for table lookup: trim and lowercase.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Create the fallback sequence for one raw tag.
///
/// The normalized tag comes first, followed by each parent obtained by
/// dropping one trailing `-` segment at a time.
///
/// Example:
/// - `zh-Hans-CN` -> `["zh-hans-cn", "zh-hans", "zh"]`
/// - `en` -> `["en"]`
/// - `""` -> `[]`
pub fn expand_fallbacks(tag: &str) -> Vec<String> {
    let normalized = normalize_tag(tag);
    let mut chain = Vec::new();
    if normalized.is_empty() {
        return chain;
    }

    let parts: Vec<&str> = normalized.split('-').collect();
    chain.push(normalized.clone());

    for len in (1..parts.len()).rev() {
        let parent = parts[..len].join("-");
        // `a--b` style tags can yield an empty or repeated parent.
        if !parent.is_empty() && !chain.contains(&parent) {
            chain.push(parent);
        }
    }
    chain
}

/// Concatenate the fallback sequences of `tags` in order, keeping only the
/// first occurrence of each normalized tag.
pub fn expand_all<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for tag in tags {
        for code in expand_fallbacks(tag.as_ref()) {
            if seen.insert(code.clone()) {
                out.push(code);
            }
        }
    }
    out
}
