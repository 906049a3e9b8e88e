//! Unified error handling for Assetry Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Assetry Core operations.
#[derive(Debug, Error, Clone)]
pub enum AssetryError {
    /// Errors from the domain layer (invalid values).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl AssetryError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// True when the run stopped because the catalog or one of its asset
    /// groups is absent or empty.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::AssetGroupMissing { .. } | ApplicationError::AssetGroupEmpty { .. }
            )
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type AssetryResult<T> = Result<T, AssetryError>;
