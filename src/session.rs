//! In-memory session state: the current list and per-item copy usage.

use crate::ports::Clipboard;
use crate::variations::{COPY_LIMIT, GeneratedEmail};

/// Outcome of a copy attempt on a session item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The address reached the clipboard; the copy count was incremented.
    Copied {
        /// Copies still available for this item after the increment.
        remaining: u8,
    },
    /// The item has already used both copies; nothing changed.
    LimitReached,
    /// The clipboard rejected the text; the copy count is unchanged.
    ClipboardFailed(String),
}

/// Holds the current generation and enforces the per-item copy limit.
///
/// Each `replace` installs a fresh list and drops the old one wholesale;
/// copy counts never survive a regeneration and nothing is persisted.
#[derive(Default)]
pub struct Session {
    items: Vec<GeneratedEmail>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replaces the current list with a freshly generated one.
    pub fn replace(&mut self, items: Vec<GeneratedEmail>) {
        self.items = items;
    }

    /// The current items in display order.
    #[must_use]
    pub fn items(&self) -> &[GeneratedEmail] {
        &self.items
    }

    /// Returns `true` when no generation is loaded or the last one was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Attempts to copy the item at `index` (0-based) to the clipboard.
    ///
    /// The copy count is incremented only when the clipboard accepts the
    /// text, and never beyond [`COPY_LIMIT`]; an item at the limit is
    /// refused without touching the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error string when `index` is out of bounds.
    pub fn copy(&mut self, index: usize, clipboard: &dyn Clipboard) -> Result<CopyOutcome, String> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or_else(|| format!("No item #{} (have {len})", index + 1))?;

        if item.copy_count >= COPY_LIMIT {
            return Ok(CopyOutcome::LimitReached);
        }

        match clipboard.copy_text(&item.email) {
            Ok(()) => {
                item.copy_count += 1;
                Ok(CopyOutcome::Copied { remaining: COPY_LIMIT - item.copy_count })
            }
            Err(err) => Ok(CopyOutcome::ClipboardFailed(err.to_string())),
        }
    }

    /// Newline-joined emails in display order, or `None` when empty.
    #[must_use]
    pub fn export_text(&self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        Some(crate::export::join_emails(&self.items))
    }
}
