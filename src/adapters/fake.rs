//! Fake adapters for deterministic tests.
//!
//! These stand in for the live adapters wherever a test needs to observe
//! port interactions or force failures without a clipboard or a disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::ports::{Clipboard, FileSystem, IdGenerator};

/// ID generator producing a predictable `id-1`, `id-2`, … sequence.
pub struct SeqIdGenerator {
    next: AtomicU64,
}

impl SeqIdGenerator {
    /// Creates a generator starting at `id-1`.
    #[must_use]
    pub fn new() -> Self {
        Self { next: AtomicU64::new(1) }
    }
}

impl Default for SeqIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SeqIdGenerator {
    fn generate_id(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Clipboard fake that records copied text and can be made to fail.
pub struct FakeClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeClipboard {
    /// Creates a clipboard fake that accepts every copy.
    #[must_use]
    pub fn new() -> Self {
        Self { copied: Mutex::new(Vec::new()), fail: false }
    }

    /// Creates a clipboard fake that rejects every copy.
    #[must_use]
    pub fn failing() -> Self {
        Self { copied: Mutex::new(Vec::new()), fail: true }
    }

    /// Returns every text copied so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the interior lock is poisoned.
    #[must_use]
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl Default for FakeClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for FakeClipboard {
    fn copy_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail {
            return Err("clipboard denied".into());
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// In-memory filesystem fake keyed by path.
pub struct MemFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self { files: Mutex::new(HashMap::new()) }
    }

    /// Returns the contents written to `path`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the interior lock is poisoned.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl Default for MemFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MemFileSystem {
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
