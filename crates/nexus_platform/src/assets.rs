//! Asset store abstraction
//!
//! Bundled assets live in a read-only, hierarchical namespace addressed by
//! slash-separated relative paths. The namespace is an external collaborator
//! (the APK asset store on Android, a plain directory on desktop hosts), so
//! it is expressed as a trait with per-platform implementations.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{PlatformError, Result};

/// A read-only hierarchical byte-stream store bundled with the application.
///
/// Paths are slash-separated and relative to the namespace root; the empty
/// string addresses the root itself. Implementations only need two
/// operations: list the direct children of a path, and open a leaf for
/// reading.
pub trait AssetStore {
    /// List the names of the direct children of `path`.
    ///
    /// Names are bare entry names, not full paths.
    fn list(&self, path: &str) -> Result<Vec<String>>;

    /// Open the asset at `path` for reading.
    fn open(&self, path: &str) -> Result<Box<dyn Read>>;
}

/// Asset store backed by a plain filesystem directory.
///
/// Used on desktop hosts and in tests, where the bundled assets are just a
/// directory tree next to the binary. `list` sorts entry names so traversal
/// order is deterministic across filesystems.
///
/// Note that materialization classifies entries by name, not by type: a
/// directory with a `.` in its name will be treated as a file by the
/// traversal and fail to copy.
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }
}

impl AssetStore for DirAssetStore {
    fn list(&self, path: &str) -> Result<Vec<String>> {
        let dir = self.resolve(path);
        let entries = std::fs::read_dir(&dir).map_err(|e| {
            PlatformError::AssetAccess(format!("Failed to list '{}': {}", dir.display(), e))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                PlatformError::AssetAccess(format!("Failed to read entry in '{}': {}", dir.display(), e))
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn open(&self, path: &str) -> Result<Box<dyn Read>> {
        let file_path = self.resolve(path);
        let file = File::open(&file_path).map_err(|e| {
            PlatformError::AssetAccess(format!("Failed to open '{}': {}", file_path.display(), e))
        })?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dir_store_lists_sorted_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"b").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let store = DirAssetStore::new(dir.path());
        let names = store.list("").unwrap();
        assert_eq!(names, vec!["a.txt", "b.txt", "sub"]);
    }

    #[test]
    fn dir_store_opens_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let mut f = File::create(dir.path().join("data/level1.bin")).unwrap();
        f.write_all(b"payload").unwrap();

        let store = DirAssetStore::new(dir.path());
        let mut contents = Vec::new();
        store
            .open("data/level1.bin")
            .unwrap()
            .read_to_end(&mut contents)
            .unwrap();
        assert_eq!(contents, b"payload");
    }

    #[test]
    fn dir_store_list_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirAssetStore::new(dir.path());
        assert!(store.list("nope").is_err());
    }
}
