//! Service reference domain types.
//!
//! A service reference describes a client-side handle to a web service:
//! which interface the client programs against, where the WSDL lives, and
//! the per-port configuration that applies when the reference is resolved.
//!
//! The serializer treats these types as opaque blobs; nothing here performs
//! validation, and ownership stays with the caller for the whole lifecycle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Supporting Types
// ─────────────────────────────────────────────────────────────────────────────

/// A namespace-qualified name, as used for services and ports in WSDL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QName {
    /// Namespace URI (e.g., "`http://example.org/orders`").
    pub namespace_uri: String,
    /// Local part of the name (e.g., "`OrderService`").
    pub local_part: String,
}

impl QName {
    /// Create a qualified name from a namespace URI and local part.
    pub fn new(namespace_uri: impl Into<String>, local_part: impl Into<String>) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            local_part: local_part.into(),
        }
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}{}", self.namespace_uri, self.local_part)
    }
}

/// The programming model a service reference was declared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceRefType {
    /// JAX-WS style reference.
    JaxWs,
    /// Legacy JAX-RPC style reference.
    JaxRpc,
}

// ─────────────────────────────────────────────────────────────────────────────
// Service Reference Types
// ─────────────────────────────────────────────────────────────────────────────

/// Per-port configuration inside a service reference.
///
/// Each entry maps a service endpoint interface to the port that should be
/// used for it, along with stub-level properties applied when the port
/// proxy is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortComponentRef {
    /// Fully-qualified name of the service endpoint interface.
    pub endpoint_interface: String,
    /// Port to select for this interface, if pinned in the descriptor.
    pub port_qname: Option<QName>,
    /// Whether MTOM is enabled for this port.
    #[serde(default)]
    pub mtom_enabled: bool,
    /// Stub properties applied to the port proxy (endpoint address
    /// overrides, auth settings, etc.).
    #[serde(default)]
    pub stub_properties: HashMap<String, String>,
}

impl PortComponentRef {
    /// Create a port component ref for an endpoint interface with no
    /// pinned port and no stub properties.
    pub fn new(endpoint_interface: impl Into<String>) -> Self {
        Self {
            endpoint_interface: endpoint_interface.into(),
            port_qname: None,
            mtom_enabled: false,
            stub_properties: HashMap::new(),
        }
    }
}

/// A handler declared in the reference's handler chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerMetadata {
    /// Descriptor name of the handler.
    pub name: String,
    /// Fully-qualified name of the handler implementation.
    pub handler_class: String,
    /// Init parameters passed to the handler.
    #[serde(default)]
    pub init_params: HashMap<String, String>,
}

/// Descriptor for a client-side handle to a web service.
///
/// This is the record that gets marshalled and bound into a naming
/// directory so that a later lookup can reconstruct the reference in a
/// different module. All fields are plain data; the resolution machinery
/// that turns this into a live proxy is out of scope for this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRefMetadata {
    /// Name the reference is bound under (relative to the component's
    /// naming context).
    pub service_ref_name: String,
    /// Fully-qualified name of the service interface the client injects.
    pub service_interface: String,
    /// Programming model of the reference.
    pub ref_type: ServiceRefType,
    /// Location of the WSDL document, if declared.
    pub wsdl_file: Option<String>,
    /// Qualified name of the WSDL service element, if declared.
    pub service_qname: Option<QName>,
    /// Named client configuration to apply, if any.
    pub config_name: Option<String>,
    /// File the client configuration is read from, if any.
    pub config_file: Option<String>,
    /// WSDL address recorded at deployment time, overriding the one in
    /// the WSDL document.
    pub deployed_wsdl_address: Option<String>,
    /// Per-port configuration entries.
    #[serde(default)]
    pub port_component_refs: Vec<PortComponentRef>,
    /// Handler chain declared for the reference.
    #[serde(default)]
    pub handler_chain: Vec<HandlerMetadata>,
    /// Call properties applied to every invocation made through the
    /// reference.
    #[serde(default)]
    pub call_properties: HashMap<String, String>,
}

impl ServiceRefMetadata {
    /// Create a minimal reference for the given name and service
    /// interface, with everything else unset.
    pub fn new(
        service_ref_name: impl Into<String>,
        service_interface: impl Into<String>,
        ref_type: ServiceRefType,
    ) -> Self {
        Self {
            service_ref_name: service_ref_name.into(),
            service_interface: service_interface.into(),
            ref_type,
            wsdl_file: None,
            service_qname: None,
            config_name: None,
            config_file: None,
            deployed_wsdl_address: None,
            port_component_refs: Vec::new(),
            handler_chain: Vec::new(),
            call_properties: HashMap::new(),
        }
    }

    /// Find the port component ref declared for an endpoint interface.
    pub fn port_component_ref(&self, endpoint_interface: &str) -> Option<&PortComponentRef> {
        self.port_component_refs
            .iter()
            .find(|r| r.endpoint_interface == endpoint_interface)
    }
}
