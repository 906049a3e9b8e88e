//! Application layer errors.
//!
//! These errors represent failures in orchestration: finding the catalog,
//! reading its root groups, and persisting the result. Rule violations on
//! values are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::AssetKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No directory to search was given.
    #[error("No search directory given")]
    MissingSearchRoot,

    /// The search directory does not exist or is not a directory.
    #[error("Search directory {path} does not exist")]
    SearchRootNotFound { path: PathBuf },

    /// The catalog directory was not found below the search root.
    #[error("Assets directory '{catalog}' not found under {search_root}")]
    AssetsNotFound {
        search_root: PathBuf,
        catalog: String,
    },

    /// Catalog lookup itself failed (shell could not run, walk failed).
    #[error("Catalog lookup failed: {reason}")]
    LocatorFailed { reason: String },

    /// The images or colors root directory does not exist.
    #[error("No {kind} group at {path}")]
    AssetGroupMissing { kind: AssetKind, path: PathBuf },

    /// The images or colors root holds nothing usable after pruning.
    #[error("No {kind} found in {path}")]
    AssetGroupEmpty { kind: AssetKind, path: PathBuf },

    /// A root directory exists but could not be listed.
    #[error("Failed to list {path}: {reason}")]
    ListingFailed { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state of an adapter became unusable (lock poisoned, etc.).
    #[error("Adapter state error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingSearchRoot => vec![
                "Pass the project directory with --dir".into(),
                "Or set generator.search_dir in the config file".into(),
            ],
            Self::SearchRootNotFound { path } => vec![
                format!("'{}' is not a directory", path.display()),
                "Check the path given to --dir or generator.search_dir".into(),
            ],
            Self::AssetsNotFound {
                search_root,
                catalog,
            } => vec![
                format!("No '{}' directory below {}", catalog, search_root.display()),
                "Check that --dir points at the project root".into(),
                "Use --catalog if the catalog has another name".into(),
            ],
            Self::LocatorFailed { .. } => vec![
                "Check the --shell path, or omit it to use the built-in search".into(),
            ],
            Self::AssetGroupMissing { kind, path } | Self::AssetGroupEmpty { kind, path } => vec![
                format!(
                    "Expected at least one {} set inside {}",
                    kind.suffix(),
                    path.display()
                ),
                "Group names must match the --names pattern".into(),
            ],
            Self::ListingFailed { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check file permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingSearchRoot | Self::SearchRootNotFound { .. } => {
                ErrorCategory::Configuration
            }
            Self::AssetsNotFound { .. } => ErrorCategory::NotFound,
            Self::AssetGroupMissing { .. } | Self::AssetGroupEmpty { .. } => {
                ErrorCategory::NotFound
            }
            Self::LocatorFailed { .. } => ErrorCategory::Internal,
            Self::ListingFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
