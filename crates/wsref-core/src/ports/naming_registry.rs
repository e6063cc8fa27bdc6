//! Naming registry trait definition.
//!
//! This port defines the interface for a naming directory that stores
//! opaque payloads under dotted or slash-separated names. Implementations
//! handle all storage details internally.

use async_trait::async_trait;

use super::NamingError;

/// Registry for binding opaque payloads under names.
///
/// The payload is whatever the serializer produced; the registry never
/// inspects it. At most one payload per name.
///
/// # Design Rules
///
/// - No storage-backend types in signatures
/// - `bind` refuses to overwrite; `rebind` is the explicit overwrite
/// - Lookup of an unbound name is an error, not an `Option` (callers
///   bind before they look up, so absence indicates a broken deployment)
#[async_trait]
pub trait NamingRegistryPort: Send + Sync {
    /// Bind a payload under `name`.
    ///
    /// Fails with [`NamingError::AlreadyBound`] if the name is taken.
    async fn bind(&self, name: &str, payload: Vec<u8>) -> Result<(), NamingError>;

    /// Bind a payload under `name`, replacing any existing binding.
    async fn rebind(&self, name: &str, payload: Vec<u8>) -> Result<(), NamingError>;

    /// Look up the payload bound under `name`.
    ///
    /// Fails with [`NamingError::NotBound`] if nothing is bound.
    async fn lookup(&self, name: &str) -> Result<Vec<u8>, NamingError>;

    /// Remove the binding under `name`.
    ///
    /// Fails with [`NamingError::NotBound`] if nothing is bound.
    async fn unbind(&self, name: &str) -> Result<(), NamingError>;

    /// List all bound names, sorted.
    async fn list(&self) -> Result<Vec<String>, NamingError>;
}
