//! Filesystem access for generated artifacts.

use crate::domain::AppError;

/// Port for reading and writing files under the working directory.
///
/// All `path` arguments are relative to the store root.
/// Implementations must reject paths that escape the root boundary.
pub trait ArtifactStore {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Replace a file's content, creating it if missing.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Create a directory and any missing parents. Existing directories are left alone.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;
}
