//! Filesystem port for writing export files.

use std::path::Path;

/// Provides filesystem access for the export feature.
///
/// Abstracting the filesystem allows testing export behavior without
/// touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;
}
