//! Three-way classification of a catalog directory entry.
//!
//! Rule order matters: the identifier pattern is checked before the asset
//! suffixes. With the default pattern the two are disjoint (identifiers have
//! no dots), but a user-supplied `--names` pattern may overlap.

use crate::domain::value_objects::{AssetKind, NamePattern};

/// Length of both `.imageset` and `.colorset`, leading dot included.
const SUFFIX_LEN: usize = 9;

/// Outcome of classifying one directory entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A namespace directory to descend into.
    Container,
    /// A leaf asset; carries the name with its set suffix removed.
    Content(String),
    /// Anything else (`Contents.json`, hidden files, other extensions).
    Ignored,
}

/// Classify `name` against the container pattern and the asset suffixes.
pub fn classify(name: &str, pattern: &NamePattern) -> Classification {
    if pattern.is_match(name) {
        return Classification::Container;
    }
    if AssetKind::ALL.iter().any(|k| name.contains(k.suffix())) {
        return Classification::Content(drop_last_chars(name, SUFFIX_LEN).to_string());
    }
    Classification::Ignored
}

fn drop_last_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(name: &str) -> Classification {
        classify(name, &NamePattern::default())
    }

    #[test]
    fn identifier_is_container() {
        assert_eq!(classify_default("Icons"), Classification::Container);
        assert_eq!(classify_default("tab_bar_2"), Classification::Container);
    }

    #[test]
    fn imageset_is_content_with_suffix_stripped() {
        assert_eq!(
            classify_default("home.imageset"),
            Classification::Content("home".into())
        );
    }

    #[test]
    fn colorset_is_content_with_suffix_stripped() {
        assert_eq!(
            classify_default("primary.colorset"),
            Classification::Content("primary".into())
        );
    }

    #[test]
    fn stripping_keeps_dashes_and_dots_in_the_stem() {
        assert_eq!(
            classify_default("arrow-left.imageset"),
            Classification::Content("arrow-left".into())
        );
        assert_eq!(
            classify_default("v1.2.colorset"),
            Classification::Content("v1.2".into())
        );
    }

    #[test]
    fn stripping_counts_characters_not_bytes() {
        assert_eq!(
            classify_default("café.imageset"),
            Classification::Content("café".into())
        );
    }

    #[test]
    fn unrelated_entries_are_ignored() {
        for name in [
            "Contents.json",
            ".DS_Store",
            "icon.png",
            "AppIcon.appiconset",
            "Symbols.symbolset",
            "arrow-left",
        ] {
            assert_eq!(classify_default(name), Classification::Ignored, "{name}");
        }
    }

    #[test]
    fn container_rule_wins_when_pattern_overlaps() {
        let permissive = NamePattern::new(".*").unwrap();
        assert_eq!(
            classify("home.imageset", &permissive),
            Classification::Container
        );
    }
}
