//! Topic tag derivation from conversation text.

use std::collections::BTreeSet;

/// Scan `text` for coarse topic keywords.
///
/// Tags: `python`, `javascript` (also matched by `js`), `react`, `api`,
/// `database` (also matched by `mongodb`). Matching is lowercase substring
/// containment; the result set is deduplicated by construction.
pub fn derive_topics(text: &str) -> BTreeSet<&'static str> {
    let lower = text.to_lowercase();
    let mut topics = BTreeSet::new();

    if lower.contains("python") {
        topics.insert("python");
    }
    if lower.contains("javascript") || lower.contains("js") {
        topics.insert("javascript");
    }
    if lower.contains("react") {
        topics.insert("react");
    }
    if lower.contains("api") {
        topics.insert("api");
    }
    if lower.contains("database") || lower.contains("mongodb") {
        topics.insert("database");
    }

    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_detected() {
        let topics = derive_topics("I build React apps with a MongoDB database");
        assert!(topics.contains("react"));
        assert!(topics.contains("database"));
        assert!(!topics.contains("python"));
    }

    #[test]
    fn js_abbreviation_counts_as_javascript() {
        assert!(derive_topics("some JS question").contains("javascript"));
    }

    #[test]
    fn empty_text_yields_no_topics() {
        assert!(derive_topics("").is_empty());
    }
}
