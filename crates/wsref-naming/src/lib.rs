#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]

pub mod registry;

// Re-export the registry for convenient access
pub use registry::{BindingInfo, MemoryNamingRegistry};
