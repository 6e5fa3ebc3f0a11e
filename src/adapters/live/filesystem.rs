//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reports_existence() {
        let dir = std::env::temp_dir().join("varimail_live_fs_test");
        let path = dir.join("out.txt");
        let fs = LiveFileSystem;

        fs.write(&path, "a@gmail.com\n").expect("write should succeed");
        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a@gmail.com\n");

        std::fs::remove_dir_all(&dir).ok();
    }
}
