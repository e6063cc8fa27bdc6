#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod deployment;
pub mod domain;
pub mod ports;
pub mod serializer;
pub mod services;

// Re-export commonly used types for convenience
pub use deployment::{Attachments, DeploymentContext};
pub use domain::{
    HandlerMetadata, PortComponentRef, QName, ServiceRefMetadata, ServiceRefType,
};
pub use ports::{NamingError, NamingRegistryPort};
pub use serializer::{
    RegistryTypeResolver, ResolverScope, SERVICE_REF_META_DATA, TypeResolver, marshall, unmarshall,
};
pub use services::ServiceRefBinder;
