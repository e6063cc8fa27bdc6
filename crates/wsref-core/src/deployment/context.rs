//! Per-deployment-unit context.

use std::collections::HashMap;

use serde_json::Value;

use super::Attachments;

/// Container for transient data scoped to one deployment unit.
///
/// Two stores live here: typed attachments (arbitrary Rust values, keyed by
/// type) and string-keyed properties (`serde_json::Value`, so they stay
/// printable and serializable). Pure storage semantics; mutation touches
/// only the owning context's maps, and usage is single-writer (typically
/// the deploying thread).
///
/// The context is created when processing of a unit starts and [`clear`]ed
/// at teardown.
///
/// [`clear`]: DeploymentContext::clear
#[derive(Debug, Default)]
pub struct DeploymentContext {
    attachments: Attachments,
    properties: HashMap<String, Value>,
}

impl DeploymentContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Attachments ────────────────────────────────────────────────────

    /// Add an attachment, returning the previous value of that type.
    pub fn add_attachment<T: Send + Sync + 'static>(&mut self, value: T) -> Option<T> {
        self.attachments.insert(value)
    }

    /// Get the attachment of type `T`, if present.
    pub fn get_attachment<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.attachments.get()
    }

    /// Remove and return the attachment of type `T`, if present.
    pub fn remove_attachment<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.attachments.remove()
    }

    /// Direct access to the attachment store.
    pub fn attachments_mut(&mut self) -> &mut Attachments {
        &mut self.attachments
    }

    // ── Properties ─────────────────────────────────────────────────────

    /// Get a context property.
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Set a context property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Remove a context property, returning its value if it was set.
    pub fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.properties.remove(key)
    }

    /// Names of all currently-set properties, sorted.
    pub fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.properties.keys().cloned().collect();
        names.sort();
        names
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Drop both stores; called at deployment teardown.
    pub fn clear(&mut self) {
        self.attachments.clear();
        self.properties.clear();
    }
}
