//! Deployment-unit storage.
//!
//! A deployment context carries transient data between processing phases of
//! one deployable unit: typed attachments keyed by their Rust type, and
//! string-keyed properties. Both stores are created at deployment start and
//! cleared at teardown.
//!
//! # Structure
//!
//! - `attachments` - type-keyed heterogeneous map with safe downcast
//! - `context` - `DeploymentContext` combining attachments and properties

pub mod attachments;
pub mod context;

pub use attachments::Attachments;
pub use context::DeploymentContext;
