//! Boundary validation for the base address and the requested count.
//!
//! Both checks run before the engine is invoked; the engine itself only
//! carries a defensive split of the address.

use lazy_static::lazy_static;
use regex::Regex;

/// Smallest accepted variation count; lesser or unparsable input clamps here.
pub const MIN_COUNT: i64 = 1;
/// Largest accepted variation count; greater input clamps here.
pub const MAX_COUNT: i64 = 100;

lazy_static! {
    /// Restricted local part, domain fixed to `gmail.com`.
    static ref GMAIL_ADDRESS: Regex =
        Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@gmail\.com$").expect("valid pattern");
}

/// Checks that `email` is a Gmail address with an allowed local part.
///
/// # Errors
///
/// Returns the user-facing validation message when the address does not
/// match the required pattern.
pub fn validate_address(email: &str) -> Result<(), String> {
    if GMAIL_ADDRESS.is_match(email) {
        Ok(())
    } else {
        Err(format!("Invalid Gmail address: {email} (expected e.g. user.name@gmail.com)"))
    }
}

/// Clamps a raw count into `[MIN_COUNT, MAX_COUNT]`.
#[must_use]
pub fn clamp_count(raw: i64) -> usize {
    usize::try_from(raw.clamp(MIN_COUNT, MAX_COUNT)).unwrap_or(1)
}
