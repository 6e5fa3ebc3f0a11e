//! ID generator port for producing unique identifiers.

/// Generates unique identifiers for generated items.
///
/// The identifier keys items in listings and carries no semantic meaning;
/// uniqueness of the generated addresses themselves never relies on it.
/// Abstracting ID generation allows deterministic sequences in tests.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
