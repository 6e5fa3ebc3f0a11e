//! Variation engine: deterministic Gmail address variations.
//!
//! Gmail ignores letter case (and dots) in the local part, so recasings and
//! numeric suffixes of one address all reach the same mailbox. The engine
//! maps `(base address, count)` to an ordered list of unique candidate
//! addresses; everything interactive (copy limits, export) lives elsewhere.

pub mod casing;
pub mod engine;

use serde::Serialize;

pub use engine::generate;

/// One generated address variation.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedEmail {
    /// Opaque identifier, fresh per item, used only for keying in listings.
    pub id: String,
    /// Full `local-part@domain` address, unique within one generation call.
    pub email: String,
    /// Successful clipboard copies so far; capped at [`COPY_LIMIT`].
    pub copy_count: u8,
}

/// Maximum number of times a single item may be copied.
pub const COPY_LIMIT: u8 = 2;
