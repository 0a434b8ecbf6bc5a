//! In-memory `ArtifactStore` for unit tests.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Keeps files and directories in memory.
///
/// Like the real filesystem, writing a file requires its parent directory to
/// exist first.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    pub files: Mutex<HashMap<String, String>>,
    pub dirs: Mutex<BTreeSet<String>>,
    /// Directory creation fails with `PermissionDenied` when set.
    pub deny_create_dir: bool,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn denying_create_dir() -> Self {
        Self { deny_create_dir: true, ..Self::default() }
    }

    /// Seed a file (and its parent directory).
    pub fn with_file(self, path: &str, content: &str) -> Self {
        if let Some((parent, _)) = path.rsplit_once('/') {
            self.dirs.lock().unwrap().insert(parent.to_string());
        }
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn dir_names(&self) -> BTreeSet<String> {
        self.dirs.lock().unwrap().clone()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.file(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if let Some((parent, _)) = path.rsplit_once('/') {
            if !self.dirs.lock().unwrap().contains(parent) {
                return Err(AppError::from(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Mock directory not found: {}", parent),
                )));
            }
        }
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        if self.deny_create_dir {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock permission denied",
            )));
        }
        self.dirs.lock().unwrap().insert(path.to_string());
        Ok(())
    }
}
