//! Scoped type resolution for unmarshalling.
//!
//! Serialized envelopes carry a type tag. In a multi-application server the
//! module performing a lookup may use a different metadata revision than the
//! module that bound it, so decoding consults the *calling thread's* current
//! resolver first and only then the built-in default. A module enters a
//! [`ResolverScope`] around its lookup calls to make its own decoders
//! visible; when the scope is dropped the previous resolver (if any) is
//! restored.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use crate::domain::ServiceRefMetadata;
use crate::ports::NamingError;

/// Decoder for one type tag: turns the envelope payload into metadata.
pub type DecodeFn = Arc<dyn Fn(Value) -> Result<ServiceRefMetadata, NamingError> + Send + Sync>;

/// Resolves a serialized type tag to a decoder.
///
/// Returning `None` means "not mine"; the caller falls back to the next
/// resolver in line. Resolution failure is not an error here, matching the
/// lookup-side convention that a resolver which does not recognise a tag
/// simply stays silent.
pub trait TypeResolver: Send + Sync {
    /// Resolve a type tag to a decoder, or `None` if unknown.
    fn resolve(&self, type_tag: &str) -> Option<DecodeFn>;
}

/// Map-backed [`TypeResolver`] for modules that register their own
/// decoders (alternative metadata revisions, legacy tags).
#[derive(Default)]
pub struct RegistryTypeResolver {
    decoders: HashMap<String, DecodeFn>,
}

impl RegistryTypeResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder for a type tag, replacing any previous one.
    pub fn register<F>(&mut self, type_tag: impl Into<String>, decode: F)
    where
        F: Fn(Value) -> Result<ServiceRefMetadata, NamingError> + Send + Sync + 'static,
    {
        self.decoders.insert(type_tag.into(), Arc::new(decode));
    }

    /// Register a legacy tag that carries the standard payload encoding.
    pub fn register_alias(&mut self, type_tag: impl Into<String>) {
        self.register(type_tag, |payload| {
            serde_json::from_value(payload).map_err(|e| NamingError::Unmarshalling(e.to_string()))
        });
    }
}

impl TypeResolver for RegistryTypeResolver {
    fn resolve(&self, type_tag: &str) -> Option<DecodeFn> {
        self.decoders.get(type_tag).cloned()
    }
}

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static CURRENT_RESOLVER: RefCell<Vec<(u64, Arc<dyn TypeResolver>)>> =
        const { RefCell::new(Vec::new()) };
}

/// RAII guard that installs a resolver for the current thread.
///
/// Scopes nest; the most recently entered resolver wins until its guard
/// drops. Each guard removes its own stack entry, so guards dropped out
/// of declaration order cannot unhook a resolver belonging to a still-live
/// scope.
pub struct ResolverScope {
    id: u64,
}

impl ResolverScope {
    /// Make `resolver` the current thread's resolver until the returned
    /// guard is dropped.
    pub fn enter(resolver: Arc<dyn TypeResolver>) -> Self {
        let id = NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed);
        CURRENT_RESOLVER.with(|stack| stack.borrow_mut().push((id, resolver)));
        Self { id }
    }

    /// The calling thread's current resolver, if a scope is active.
    pub fn current() -> Option<Arc<dyn TypeResolver>> {
        CURRENT_RESOLVER.with(|stack| stack.borrow().last().map(|(_, r)| Arc::clone(r)))
    }
}

impl Drop for ResolverScope {
    fn drop(&mut self) {
        CURRENT_RESOLVER.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|(id, _)| *id == self.id) {
                stack.remove(pos);
            }
        });
    }
}
