//! Domain value objects: AssetKind, NamePattern, Namespace, Carrier.
//!
//! These are pure value types with equality-by-value and no identity.
//! Every fallible constructor validates once, so the rest of the pipeline can
//! take them at face value.

use crate::domain::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Pattern a directory name must match to become a namespace container.
pub const DEFAULT_NAME_PATTERN: &str = "^[a-zA-Z0-9_]+$";

/// Namespace substituted for the tree root when none is configured.
pub const DEFAULT_NAMESPACE: &str = "app";

static SWIFT_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static regex is valid"));

static SWIFT_TYPE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("static regex is valid")
});

// ── AssetKind ────────────────────────────────────────────────────────────────

/// The two asset kinds a catalog is scanned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Images,
    Colors,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Images, AssetKind::Colors];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Colors => "colors",
        }
    }

    /// Directory-name suffix identifying one asset of this kind.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Images => ".imageset",
            Self::Colors => ".colorset",
        }
    }

    /// Name of the catalog subdirectory holding this kind by default.
    pub const fn default_root(&self) -> &'static str {
        match self {
            Self::Images => "Images",
            Self::Colors => "Colors",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NamePattern ──────────────────────────────────────────────────────────────

/// Compiled allow-pattern for container directory names.
#[derive(Debug, Clone)]
pub struct NamePattern(Regex);

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, DomainError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|e| DomainError::InvalidNamePattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.0.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for NamePattern {
    fn default() -> Self {
        Self(Regex::new(DEFAULT_NAME_PATTERN).expect("default pattern is valid"))
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for NamePattern {}

impl FromStr for NamePattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Namespace ────────────────────────────────────────────────────────────────

/// Name given to the root type of every generated block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidNamespace {
                name,
                reason: "namespace cannot be empty".into(),
            });
        }
        if !SWIFT_IDENTIFIER.is_match(&name) {
            return Err(DomainError::InvalidNamespace {
                name,
                reason: "must be a plain identifier".into(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_string())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Carrier ──────────────────────────────────────────────────────────────────

/// Swift type whose by-name initializer builds a color (`Color`, `UIColor`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Carrier(String);

impl Carrier {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if !SWIFT_TYPE_PATH.is_match(&name) {
            return Err(DomainError::InvalidCarrier {
                name,
                reason: "must be a Swift type name".into(),
            });
        }
        Ok(Self(name))
    }

    /// The carriers targeted when none are configured.
    pub fn defaults() -> Vec<Carrier> {
        vec![Self("Color".into()), Self("UIColor".into())]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_kind_suffixes_are_nine_chars() {
        for kind in AssetKind::ALL {
            assert_eq!(kind.suffix().chars().count(), 9, "{kind}");
        }
    }

    #[test]
    fn default_pattern_accepts_identifiers_only() {
        let pattern = NamePattern::default();
        assert!(pattern.is_match("Icons"));
        assert!(pattern.is_match("tab_bar2"));
        assert!(!pattern.is_match("home.imageset"));
        assert!(!pattern.is_match("Contents.json"));
        assert!(!pattern.is_match(".DS_Store"));
        assert!(!pattern.is_match("arrow-left"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = NamePattern::new("([a-z").unwrap_err();
        assert!(matches!(err, DomainError::InvalidNamePattern { .. }));
    }

    #[test]
    fn namespace_validation() {
        assert!(Namespace::new("app").is_ok());
        assert!(Namespace::new("_Assets").is_ok());
        assert!(Namespace::new("").is_err());
        assert!(Namespace::new("1app").is_err());
        assert!(Namespace::new("my app").is_err());
    }

    #[test]
    fn carrier_allows_qualified_names() {
        assert!(Carrier::new("Color").is_ok());
        assert!(Carrier::new("SwiftUI.Color").is_ok());
        assert!(Carrier::new("Color(").is_err());
        assert_eq!(Carrier::defaults()[1].as_str(), "UIColor");
    }
}
