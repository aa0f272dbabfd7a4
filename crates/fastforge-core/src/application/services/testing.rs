//! Shared test doubles for service tests.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::ForgeResult,
};

/// Minimal in-memory filesystem with injectable write failures.
///
/// The adapters crate ships a full `MemoryFilesystem`; this double exists so
/// core tests stay dependency-free and can force I/O errors on exact paths.
#[derive(Default)]
pub(crate) struct FakeFilesystem {
    files: Mutex<std::collections::HashMap<PathBuf, String>>,
    dirs: Mutex<HashSet<PathBuf>>,
    failing: Mutex<HashSet<PathBuf>>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `path` fail.
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.failing.lock().unwrap().insert(path.into());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl Filesystem for FakeFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        self.content(path).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().contains(path)
    }
}
