//! Catalog lookup by walking the search root with `walkdir`.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use assetry_core::{
    application::{ApplicationError, ports::AssetLocator},
    error::AssetryResult,
};

/// Finds the catalog without leaving the process.
///
/// Entries are visited depth-first in file-name order, parents before
/// children, so repeated runs agree on which catalog is found.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkLocator;

impl WalkLocator {
    pub fn new() -> Self {
        Self
    }
}

impl AssetLocator for WalkLocator {
    #[instrument(skip_all, fields(root = %search_root.display(), catalog = %catalog))]
    fn locate(&self, search_root: &Path, catalog: &str) -> AssetryResult<Option<PathBuf>> {
        if !search_root.is_dir() {
            return Err(ApplicationError::SearchRootNotFound {
                path: search_root.to_path_buf(),
            }
            .into());
        }

        let found = WalkDir::new(search_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .find(|entry| entry.file_type().is_dir() && entry.file_name() == catalog)
            .map(|entry| entry.into_path());

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetry_core::error::AssetryError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_nested_catalog() {
        let temp = TempDir::new().unwrap();
        let catalog = temp.path().join("App").join("Resources").join("Assets.xcassets");
        fs::create_dir_all(&catalog).unwrap();

        let found = WalkLocator::new()
            .locate(temp.path(), "Assets.xcassets")
            .unwrap();
        assert_eq!(found, Some(catalog));
    }

    #[test]
    fn ignores_files_with_catalog_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Assets.xcassets"), "not a dir").unwrap();

        let found = WalkLocator::new()
            .locate(temp.path(), "Assets.xcassets")
            .unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn first_match_in_name_order_wins() {
        let temp = TempDir::new().unwrap();
        let b = temp.path().join("b").join("Assets.xcassets");
        let a = temp.path().join("a").join("Assets.xcassets");
        fs::create_dir_all(&b).unwrap();
        fs::create_dir_all(&a).unwrap();

        let found = WalkLocator::new()
            .locate(temp.path(), "Assets.xcassets")
            .unwrap();
        assert_eq!(found, Some(a));
    }

    #[test]
    fn missing_search_root_is_error() {
        let temp = TempDir::new().unwrap();
        let result = WalkLocator::new().locate(&temp.path().join("gone"), "Assets.xcassets");
        assert!(matches!(
            result,
            Err(AssetryError::Application(ApplicationError::SearchRootNotFound { .. }))
        ));
    }
}
