//! Service context bundling all port trait objects.

use crate::ports::{Clipboard, FileSystem, IdGenerator};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Commands receive a
/// context instead of constructing adapters themselves, so tests can swap
/// in the fakes from [`crate::adapters::fake`].
pub struct ServiceContext {
    /// Clipboard for the copy action.
    pub clipboard: Box<dyn Clipboard>,
    /// Filesystem for the export file.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for item identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for all ports.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clipboard::LiveClipboard;
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::id_gen::LiveIdGenerator;

        Self {
            clipboard: Box::new(LiveClipboard),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Creates a context with deterministic fakes for every port.
    #[must_use]
    pub fn fake() -> Self {
        use crate::adapters::fake::{FakeClipboard, MemFileSystem, SeqIdGenerator};

        Self {
            clipboard: Box::new(FakeClipboard::new()),
            fs: Box::new(MemFileSystem::new()),
            id_gen: Box::new(SeqIdGenerator::new()),
        }
    }
}
