//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (naming directory, serialization format, etc.).
//!
//! # Structure
//!
//! - `serviceref` - Service reference metadata (`ServiceRefMetadata` and
//!   its nested records)

pub mod serviceref;

// Re-export service-ref types at the domain level for convenience
pub use serviceref::{
    HandlerMetadata, PortComponentRef, QName, ServiceRefMetadata, ServiceRefType,
};
