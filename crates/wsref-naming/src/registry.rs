//! In-memory implementation of the `NamingRegistryPort` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use wsref_core::{NamingError, NamingRegistryPort};

/// One binding in the registry.
///
/// The payload is kept base64-encoded; naming directories traffic in
/// string-addressed entries, and keeping the stored form textual makes
/// snapshots and logs safe to print.
#[derive(Debug, Clone)]
struct RegistryEntry {
    payload_b64: String,
    bound_at: DateTime<Utc>,
}

/// Diagnostic view of one binding, for logging and inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingInfo {
    /// Name the payload is bound under.
    pub name: String,
    /// Decoded payload size in bytes.
    pub payload_len: usize,
    /// UTC timestamp of when the binding was created or last replaced.
    pub bound_at: DateTime<Utc>,
}

/// In-memory implementation of the `NamingRegistryPort` trait.
///
/// Backed by an async `RwLock`; writers are serialized, lookups are
/// concurrent. State is process-local and lost on drop.
#[derive(Default)]
pub struct MemoryNamingRegistry {
    entries: RwLock<HashMap<String, RegistryEntry>>,
}

impl MemoryNamingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostic listing of all bindings, sorted by name.
    pub async fn snapshot(&self) -> Vec<BindingInfo> {
        let entries = self.entries.read().await;
        let mut infos: Vec<BindingInfo> = entries
            .iter()
            .map(|(name, entry)| BindingInfo {
                name: name.clone(),
                payload_len: BASE64.decode(&entry.payload_b64).map_or(0, |p| p.len()),
                bound_at: entry.bound_at,
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    fn entry_for(payload: &[u8]) -> RegistryEntry {
        RegistryEntry {
            payload_b64: BASE64.encode(payload),
            bound_at: Utc::now(),
        }
    }

    fn decode(name: &str, entry: &RegistryEntry) -> Result<Vec<u8>, NamingError> {
        BASE64
            .decode(&entry.payload_b64)
            .map_err(|e| NamingError::Registry(format!("corrupt entry for {name}: {e}")))
    }
}

#[async_trait]
impl NamingRegistryPort for MemoryNamingRegistry {
    async fn bind(&self, name: &str, payload: Vec<u8>) -> Result<(), NamingError> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(name) {
            return Err(NamingError::AlreadyBound(name.to_string()));
        }
        tracing::debug!(name, payload_len = payload.len(), "bind");
        entries.insert(name.to_string(), Self::entry_for(&payload));
        Ok(())
    }

    async fn rebind(&self, name: &str, payload: Vec<u8>) -> Result<(), NamingError> {
        let mut entries = self.entries.write().await;
        let replaced = entries
            .insert(name.to_string(), Self::entry_for(&payload))
            .is_some();
        tracing::debug!(name, replaced, "rebind");
        Ok(())
    }

    async fn lookup(&self, name: &str) -> Result<Vec<u8>, NamingError> {
        let entries = self.entries.read().await;
        let entry = entries
            .get(name)
            .ok_or_else(|| NamingError::NotBound(name.to_string()))?;
        Self::decode(name, entry)
    }

    async fn unbind(&self, name: &str) -> Result<(), NamingError> {
        let mut entries = self.entries.write().await;
        if entries.remove(name).is_none() {
            return Err(NamingError::NotBound(name.to_string()));
        }
        tracing::debug!(name, "unbind");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, NamingError> {
        let entries = self.entries.read().await;
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
