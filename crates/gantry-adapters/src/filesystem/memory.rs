//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use gantry_core::{
    application::{ApplicationError, ports::Filesystem},
    error::GantryResult,
};

/// In-memory filesystem. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    staging_counter: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.is_empty() && inner.directories.is_empty())
            .unwrap_or(true)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> GantryResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn create_staging_dir(&self, prefix: &str) -> GantryResult<PathBuf> {
        let root = {
            let mut inner = self
                .inner
                .write()
                .map_err(|_| ApplicationError::StoreLockError)?;
            inner.staging_counter += 1;
            PathBuf::from("/staging").join(format!("{prefix}{}", inner.staging_counter))
        };
        self.create_dir_all(&root)?;
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/pkg")).unwrap();
        fs.write_file(Path::new("/out/pkg/a.go"), b"package a").unwrap();

        assert_eq!(fs.read_file(Path::new("/out/pkg/a.go")).unwrap(), b"package a");
        assert!(fs.exists(Path::new("/out")));
    }

    #[test]
    fn write_without_parent_fails() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nope/a.go"), b"").is_err());
    }

    #[test]
    fn remove_dir_all_drops_the_subtree_only() {
        let fs = MemoryFilesystem::new();
        let a = fs.create_staging_dir("req-").unwrap();
        let b = fs.create_staging_dir("req-").unwrap();
        fs.write_file(&a.join("x"), b"1").unwrap();
        fs.write_file(&b.join("x"), b"2").unwrap();

        fs.remove_dir_all(&a).unwrap();

        assert!(!fs.exists(&a));
        assert_eq!(fs.list_files(), vec![b.join("x")]);
    }
}
