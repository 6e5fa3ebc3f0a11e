//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (clipboard, filesystem, IDs). Implementations live in
//! `src/adapters/`.

pub mod clipboard;
pub mod filesystem;
pub mod id_gen;

pub use clipboard::Clipboard;
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
