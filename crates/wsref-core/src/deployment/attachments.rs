//! Type-keyed heterogeneous storage.
//!
//! Processing phases hand arbitrary typed data to later phases by storing
//! it under its own type. At most one value per type; inserting again
//! replaces (and returns) the previous value.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

/// Heterogeneous map keyed by value type.
///
/// Values must be `Send + Sync + 'static` so a context can move across
/// threads between phases; access within a phase is single-writer.
#[derive(Default)]
pub struct Attachments {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Attachments {
    /// Create an empty attachment store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under its type, returning the previously stored
    /// value of that type if there was one.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) -> Option<T> {
        self.entries
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|prev| prev.downcast().ok())
            .map(|boxed| *boxed)
    }

    /// Get the attachment of type `T`, if present.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    /// Get the attachment of type `T` mutably, if present.
    pub fn get_mut<T: Any + Send + Sync>(&mut self) -> Option<&mut T> {
        self.entries
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    /// Remove and return the attachment of type `T`, if present.
    pub fn remove<T: Any + Send + Sync>(&mut self) -> Option<T> {
        self.entries
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    /// Whether an attachment of type `T` is present.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of stored attachments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all attachments.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for Attachments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct WsdlLocation(String);

    #[derive(Debug, PartialEq)]
    struct EndpointCount(usize);

    #[test]
    fn test_insert_then_get_returns_value() {
        let mut attachments = Attachments::new();
        attachments.insert(WsdlLocation("META-INF/wsdl/order.wsdl".to_string()));

        assert_eq!(
            attachments.get::<WsdlLocation>(),
            Some(&WsdlLocation("META-INF/wsdl/order.wsdl".to_string()))
        );
    }

    #[test]
    fn test_at_most_one_value_per_type() {
        let mut attachments = Attachments::new();
        assert_eq!(attachments.insert(EndpointCount(1)), None);
        let previous = attachments.insert(EndpointCount(2));

        assert_eq!(previous, Some(EndpointCount(1)));
        assert_eq!(attachments.get::<EndpointCount>(), Some(&EndpointCount(2)));
        assert_eq!(attachments.len(), 1);
    }

    #[test]
    fn test_remove_makes_attachment_absent() {
        let mut attachments = Attachments::new();
        attachments.insert(EndpointCount(3));

        assert_eq!(attachments.remove::<EndpointCount>(), Some(EndpointCount(3)));
        assert!(attachments.get::<EndpointCount>().is_none());
        assert!(!attachments.contains::<EndpointCount>());
    }

    #[test]
    fn test_types_do_not_collide() {
        let mut attachments = Attachments::new();
        attachments.insert(WsdlLocation("a.wsdl".to_string()));
        attachments.insert(EndpointCount(7));

        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments.get::<EndpointCount>(), Some(&EndpointCount(7)));
    }

    #[test]
    fn test_get_mut_mutates_in_place() {
        let mut attachments = Attachments::new();
        attachments.insert(EndpointCount(1));
        attachments.get_mut::<EndpointCount>().unwrap().0 += 1;

        assert_eq!(attachments.get::<EndpointCount>(), Some(&EndpointCount(2)));
    }

    #[test]
    fn test_clear_empties_store() {
        let mut attachments = Attachments::new();
        attachments.insert(EndpointCount(1));
        attachments.clear();

        assert!(attachments.is_empty());
    }
}
