//! Plain-text export of a generated list.

use std::path::Path;

use crate::context::ServiceContext;
use crate::variations::GeneratedEmail;

/// Default export filename.
pub const DEFAULT_EXPORT_FILE: &str = "gmail_variations.txt";

/// Joins the item emails with newlines, in display order, no trailing data.
#[must_use]
pub fn join_emails(items: &[GeneratedEmail]) -> String {
    items.iter().map(|g| g.email.as_str()).collect::<Vec<_>>().join("\n")
}

/// Writes the newline-joined emails to `path` via the filesystem port.
///
/// # Errors
///
/// Returns an error when `items` is empty (no file is produced) or when
/// the write fails.
pub fn export_to_file(
    ctx: &ServiceContext,
    items: &[GeneratedEmail],
    path: &Path,
) -> Result<(), String> {
    if items.is_empty() {
        return Err("No emails to export.".to_string());
    }
    let text = join_emails(items);
    ctx.fs.write(path, &text).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
