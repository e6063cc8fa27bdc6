//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No storage-backend types in any signature
//! - Payloads cross the port as opaque bytes; serialization stays in core
//! - Traits are minimal and CRUD-focused

pub mod naming_registry;

use thiserror::Error;

pub use naming_registry::NamingRegistryPort;

/// Errors surfaced by naming operations and the de/serialization bound to
/// them.
///
/// Marshalling and unmarshalling failures are naming errors because the
/// only consumer of the serialized form is the naming directory; callers
/// see one error domain for the whole bind/lookup path.
#[derive(Debug, Error)]
pub enum NamingError {
    /// Encoding service reference metadata to bytes failed.
    #[error("Cannot marshall service ref metadata: {0}")]
    Marshalling(String),

    /// Decoding bytes back into service reference metadata failed
    /// (malformed or truncated input).
    #[error("Cannot unmarshall service ref metadata: {0}")]
    Unmarshalling(String),

    /// The encoded type tag could not be resolved by the current resolver
    /// scope or the default resolver.
    #[error("Cannot resolve metadata type: {0}")]
    UnresolvedType(String),

    /// A binding already exists under the requested name.
    #[error("Name already bound: {0}")]
    AlreadyBound(String),

    /// No binding exists under the requested name.
    #[error("Name not bound: {0}")]
    NotBound(String),

    /// Registry backend error.
    #[error("Registry error: {0}")]
    Registry(String),
}
