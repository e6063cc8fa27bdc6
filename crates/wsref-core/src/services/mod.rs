//! Service layer orchestrating ports and the serializer.
//!
//! Services are thin: they own no storage and delegate persistence to
//! port trait objects.

pub mod serviceref_binder;

pub use serviceref_binder::ServiceRefBinder;
