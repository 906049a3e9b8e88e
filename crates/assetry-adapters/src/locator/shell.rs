//! Catalog lookup through an external shell: `find <dir> -type d | grep`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use assetry_core::{
    application::{ApplicationError, ports::AssetLocator},
    error::AssetryResult,
};

/// Runs `find` through the configured shell and takes the first line that
/// mentions the catalog name.
#[derive(Debug, Clone)]
pub struct ShellLocator {
    shell: PathBuf,
}

impl ShellLocator {
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn script(search_root: &Path, catalog: &str) -> String {
        format!(
            "find {} -type d | grep -F -m 1 {}",
            quote(&search_root.to_string_lossy()),
            quote(catalog)
        )
    }
}

impl AssetLocator for ShellLocator {
    #[instrument(skip_all, fields(shell = %self.shell.display(), catalog = %catalog))]
    fn locate(&self, search_root: &Path, catalog: &str) -> AssetryResult<Option<PathBuf>> {
        let script = Self::script(search_root, catalog);
        debug!(%script, "Running catalog lookup");

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&script)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::LocatorFailed {
                reason: format!("Failed to execute `{}`: {}", self.shell.display(), e),
            })?;

        // grep exits 1 on no match; an empty stdout is the only signal used.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let path = stdout.replace('\n', "");
        if path.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(path)))
        }
    }
}

/// Single-quote `s` for a POSIX shell.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
