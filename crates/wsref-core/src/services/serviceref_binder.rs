//! Service reference binder - thin orchestrator over the naming registry.
//!
//! The binder is the only place where the serializer and the registry port
//! meet: binding marshalls metadata and stores the bytes, lookup fetches
//! the bytes and unmarshalls them. Callers that need cross-module type
//! resolution enter a `ResolverScope` around their lookup calls; the
//! binder itself is scope-agnostic.

use std::sync::Arc;

use crate::domain::ServiceRefMetadata;
use crate::ports::{NamingError, NamingRegistryPort};
use crate::serializer;

/// Service for binding service references into a naming registry.
pub struct ServiceRefBinder {
    registry: Arc<dyn NamingRegistryPort>,
}

impl ServiceRefBinder {
    /// Create a new binder over the given registry.
    pub fn new(registry: Arc<dyn NamingRegistryPort>) -> Self {
        Self { registry }
    }

    /// Marshall `metadata` and bind it under `name`.
    ///
    /// Fails with [`NamingError::AlreadyBound`] if the name is taken.
    pub async fn bind(&self, name: &str, metadata: &ServiceRefMetadata) -> Result<(), NamingError> {
        let payload = serializer::marshall(metadata)?;
        tracing::debug!(
            name,
            service_ref = %metadata.service_ref_name,
            payload_len = payload.len(),
            "binding service ref"
        );
        self.registry.bind(name, payload).await
    }

    /// Marshall `metadata` and bind it under `name`, replacing any
    /// existing binding.
    pub async fn rebind(
        &self,
        name: &str,
        metadata: &ServiceRefMetadata,
    ) -> Result<(), NamingError> {
        let payload = serializer::marshall(metadata)?;
        tracing::debug!(
            name,
            service_ref = %metadata.service_ref_name,
            "rebinding service ref"
        );
        self.registry.rebind(name, payload).await
    }

    /// Look up and unmarshall the reference bound under `name`.
    pub async fn lookup(&self, name: &str) -> Result<ServiceRefMetadata, NamingError> {
        let payload = self.registry.lookup(name).await?;
        serializer::unmarshall(&payload).map_err(|e| {
            tracing::warn!(name, error = %e, "bound payload failed to unmarshall");
            e
        })
    }

    /// Remove the binding under `name`.
    pub async fn unbind(&self, name: &str) -> Result<(), NamingError> {
        tracing::debug!(name, "unbinding service ref");
        self.registry.unbind(name).await
    }

    /// List all bound names, sorted.
    pub async fn list_bindings(&self) -> Result<Vec<String>, NamingError> {
        self.registry.list().await
    }
}
