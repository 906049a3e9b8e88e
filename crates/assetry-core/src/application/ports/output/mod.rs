//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `assetry-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Carrier, Namespace, Node};
use crate::error::AssetryResult;

/// Port for reading a catalog's directory structure.
///
/// Implemented by:
/// - `assetry_adapters::filesystem::LocalFilesystem` (production)
/// - `assetry_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait AssetSource: Send + Sync {
    /// Names of the immediate entries of `path`, in the order the source
    /// reports them.
    fn list_dir(&self, path: &Path) -> AssetryResult<Vec<String>>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for finding the asset catalog below a search root.
///
/// Implemented by:
/// - `assetry_adapters::locator::WalkLocator` (directory walk)
/// - `assetry_adapters::locator::ShellLocator` (`find | grep` through a shell)
#[cfg_attr(test, mockall::automock)]
pub trait AssetLocator: Send + Sync {
    /// First directory named `catalog` below `search_root`, if any.
    fn locate(&self, search_root: &Path, catalog: &str) -> AssetryResult<Option<PathBuf>>;
}

/// Port for filesystem writes.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AssetryResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> AssetryResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for turning the two asset trees into one source file.
///
/// Implemented by:
/// - `assetry_adapters::renderer::SwiftUiComposer`
#[cfg_attr(test, mockall::automock)]
pub trait SourceComposer: Send + Sync {
    /// Compose the complete file text.
    ///
    /// # Arguments
    ///
    /// * `images` - Pruned images tree
    /// * `colors` - Pruned colors tree
    /// * `namespace` - Name substituted for both tree roots
    /// * `carriers` - Color types to extend, one colors block each
    fn compose(
        &self,
        images: &Node,
        colors: &Node,
        namespace: &Namespace,
        carriers: &[Carrier],
    ) -> AssetryResult<String>;
}
