//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use assetry_core::{
    application::ports::{AssetSource, Filesystem},
    error::AssetryResult,
};

/// Production filesystem implementation using `std::fs`.
///
/// Directory listings are sorted by entry name so that the generated file
/// does not depend on the order the OS happens to return.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for LocalFilesystem {
    fn list_dir(&self, path: &Path) -> AssetryResult<Vec<String>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> AssetryResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> AssetryResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> assetry_core::error::AssetryError {
    use assetry_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_entries_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        for name in ["b.imageset", "Contents.json", "a.imageset"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let names = LocalFilesystem::new().list_dir(temp.path()).unwrap();
        assert_eq!(names, vec!["Contents.json", "a.imageset", "b.imageset"]);
    }

    #[test]
    fn listing_missing_directory_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(LocalFilesystem::new().list_dir(&missing).is_err());
        assert!(!LocalFilesystem::new().is_dir(&missing));
    }

    #[test]
    fn writes_file_contents() {
        let temp = TempDir::new().unwrap();
        let fs_adapter = LocalFilesystem::new();
        let out = temp.path().join("gen").join("Assets.swift");

        fs_adapter.create_dir_all(out.parent().unwrap()).unwrap();
        fs_adapter.write_file(&out, "import SwiftUI\n").unwrap();

        assert!(fs_adapter.exists(&out));
        assert_eq!(fs::read_to_string(out).unwrap(), "import SwiftUI\n");
    }
}
