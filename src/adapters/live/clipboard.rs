//! Live clipboard adapter: `arboard` primary, platform utility fallback.

use std::io::Write as _;
use std::process::{Command, Stdio};

use crate::ports::Clipboard;

/// Command-line clipboard utilities tried in order when `arboard` fails.
const FALLBACK_UTILITIES: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Live clipboard adapter.
///
/// Tries the `arboard` platform clipboard first; when that fails (no
/// display server, denied access), pipes the text through the first
/// available command-line clipboard utility instead.
pub struct LiveClipboard;

impl Clipboard for LiveClipboard {
    fn copy_text(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let primary_err = match copy_via_arboard(text) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        copy_via_utility(text)
            .map_err(|fallback_err| format!("clipboard unavailable: {primary_err}; {fallback_err}"))?;
        Ok(())
    }
}

fn copy_via_arboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}

fn copy_via_utility(text: &str) -> Result<(), String> {
    for argv in FALLBACK_UTILITIES {
        let (program, args) = (argv[0], &argv[1..]);
        let Ok(mut child) = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            continue;
        };
        if let Some(stdin) = child.stdin.as_mut() {
            if stdin.write_all(text.as_bytes()).is_err() {
                child.wait().ok();
                continue;
            }
        }
        match child.wait() {
            Ok(status) if status.success() => return Ok(()),
            _ => continue,
        }
    }
    Err("no clipboard utility found (tried pbcopy, wl-copy, xclip, xsel)".to_string())
}
