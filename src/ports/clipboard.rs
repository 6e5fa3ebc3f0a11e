//! Clipboard port for copying text to the system clipboard.

/// Writes text to the system clipboard.
///
/// Modeled as a single operation with a success/failure outcome: the live
/// adapter tries the primary platform mechanism and falls back to a
/// secondary one before reporting failure. Abstracting the clipboard keeps
/// copy-count logic testable without a display server.
pub trait Clipboard: Send + Sync {
    /// Places `text` on the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if both the primary clipboard mechanism and the
    /// fallback fail (e.g. no clipboard is available in this environment).
    fn copy_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
