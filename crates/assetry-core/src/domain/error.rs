// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `AssetryError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid name pattern '{pattern}': {reason}")]
    InvalidNamePattern { pattern: String, reason: String },

    #[error("invalid namespace '{name}': {reason}")]
    InvalidNamespace { name: String, reason: String },

    #[error("invalid carrier type '{name}': {reason}")]
    InvalidCarrier { name: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("no color carriers configured")]
    NoCarriers,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidNamePattern { pattern, .. } => vec![
                format!("'{}' is not a valid regular expression", pattern),
                "The default pattern is ^[a-zA-Z0-9_]+$".into(),
                "Example: assetry generate --dir . --names '^[A-Za-z0-9_]+$'".into(),
            ],
            Self::InvalidNamespace { name, .. } => vec![
                format!("'{}' cannot be used as a Swift type name", name),
                "Use letters, digits and underscores, not starting with a digit".into(),
                "Example: --namespace app".into(),
            ],
            Self::InvalidCarrier { name, .. } => vec![
                format!("'{}' is not a usable color type", name),
                "Typical carriers are Color and UIColor".into(),
            ],
            Self::NoCarriers => vec![
                "At least one color carrier is required".into(),
                "Example: color_carriers = [\"Color\", \"UIColor\"]".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    ///
    /// Every domain value comes from flags or config, so all of them are
    /// configuration errors.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidNamePattern { .. }
            | Self::InvalidNamespace { .. }
            | Self::InvalidCarrier { .. }
            | Self::NoCarriers => ErrorCategory::Configuration,
        }
    }
}
