//! In-memory filesystem adapter for testing.
//!
//! Unlike [`super::LocalFilesystem`], listings come back in insertion order,
//! which lets tests pin down exactly what order the generator sees.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use assetry_core::{
    application::{
        ApplicationError,
        ports::{AssetSource, Filesystem},
    },
    error::AssetryResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    /// Directory → child names, in insertion order.
    directories: HashMap<PathBuf, Vec<String>>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn insert_path(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            let name = component.as_os_str().to_string_lossy().into_owned();
            let siblings = self.directories.entry(current.clone()).or_default();
            if !siblings.contains(&name) {
                siblings.push(name);
            }
            current.push(component);
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Build a filesystem holding the given directory paths.
    pub fn with_dirs<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let fs = Self::new();
        for path in paths {
            fs.add_dir(path.as_ref());
        }
        fs
    }

    /// Add a directory and all of its parents.
    pub fn add_dir(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_path(path);
            inner.directories.entry(path.to_path_buf()).or_default();
        }
    }

    /// Add a file (and its parent directories).
    pub fn add_file(&self, path: &Path, content: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_path(path);
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
    }

    /// Make listings of `path` fail from now on.
    pub fn mark_unreadable(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            inner.unreadable.insert(path.to_path_buf());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for MemoryFilesystem {
    fn list_dir(&self, path: &Path) -> AssetryResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.unreadable.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        inner.directories.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into()
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains_key(path) && !inner.files.contains_key(path))
            .unwrap_or(false)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> AssetryResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert_path(path);
        inner.directories.entry(path.to_path_buf()).or_default();
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> AssetryResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains_key(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.insert_path(path);
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains_key(path))
            .unwrap_or(false)
    }
}
