//! Service reference de/serialization.
//!
//! Metadata is stored in the naming directory as an opaque byte payload.
//! The payload is a JSON envelope carrying a type tag and the encoded
//! value:
//!
//! ```json
//! { "type": "SERVICE_REF_META_DATA", "payload": { ... } }
//! ```
//!
//! The tag exists so that unmarshalling can dispatch through the calling
//! thread's [`ResolverScope`](resolver::ResolverScope) before falling back
//! to the built-in decoder; see the [`resolver`] module. No other
//! transformation, validation, or compression is performed.

pub mod resolver;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ServiceRefMetadata;
use crate::ports::NamingError;

pub use resolver::{DecodeFn, RegistryTypeResolver, ResolverScope, TypeResolver};

/// Type tag written by [`marshall`] and understood by the default decoder.
pub const SERVICE_REF_META_DATA: &str = "SERVICE_REF_META_DATA";

/// On-the-wire envelope around the encoded metadata.
#[derive(Serialize, Deserialize)]
struct Envelope {
    /// Type tag used for resolver dispatch on the decode side.
    #[serde(rename = "type")]
    type_tag: String,
    /// Encoded metadata value.
    payload: Value,
}

/// Encode service reference metadata to bytes.
pub fn marshall(metadata: &ServiceRefMetadata) -> Result<Vec<u8>, NamingError> {
    let envelope = Envelope {
        type_tag: SERVICE_REF_META_DATA.to_string(),
        payload: serde_json::to_value(metadata)
            .map_err(|e| NamingError::Marshalling(e.to_string()))?,
    };

    serde_json::to_vec(&envelope).map_err(|e| NamingError::Marshalling(e.to_string()))
}

/// Decode bytes back into service reference metadata.
///
/// The type tag is resolved against the calling thread's resolver scope
/// first; if no scope is active or the scoped resolver does not recognise
/// the tag, the built-in decoder is tried. An unrecognised tag fails with
/// [`NamingError::UnresolvedType`]; malformed or truncated input fails
/// with [`NamingError::Unmarshalling`]. A partial value is never returned.
pub fn unmarshall(data: &[u8]) -> Result<ServiceRefMetadata, NamingError> {
    let envelope: Envelope =
        serde_json::from_slice(data).map_err(|e| NamingError::Unmarshalling(e.to_string()))?;

    if let Some(scoped) = ResolverScope::current() {
        if let Some(decode) = scoped.resolve(&envelope.type_tag) {
            return decode(envelope.payload);
        }
    }

    if envelope.type_tag == SERVICE_REF_META_DATA {
        return serde_json::from_value(envelope.payload)
            .map_err(|e| NamingError::Unmarshalling(e.to_string()));
    }

    Err(NamingError::UnresolvedType(envelope.type_tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HandlerMetadata, PortComponentRef, QName, ServiceRefType};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn sample_metadata() -> ServiceRefMetadata {
        let mut sref = ServiceRefMetadata::new(
            "service/OrderService",
            "org.example.OrderService",
            ServiceRefType::JaxWs,
        );
        sref.wsdl_file = Some("META-INF/wsdl/order.wsdl".to_string());
        sref.service_qname = Some(QName::new("http://example.org/orders", "OrderService"));
        sref.deployed_wsdl_address = Some("http://localhost:8080/orders?wsdl".to_string());

        let mut port_ref = PortComponentRef::new("org.example.OrderPort");
        port_ref.port_qname = Some(QName::new("http://example.org/orders", "OrderPort"));
        port_ref.mtom_enabled = true;
        port_ref
            .stub_properties
            .insert("endpoint.address".to_string(), "http://localhost:8080/orders".to_string());
        sref.port_component_refs.push(port_ref);

        sref.handler_chain.push(HandlerMetadata {
            name: "LoggingHandler".to_string(),
            handler_class: "org.example.LoggingHandler".to_string(),
            init_params: HashMap::from([("level".to_string(), "debug".to_string())]),
        });
        sref.call_properties
            .insert("timeout".to_string(), "30000".to_string());
        sref
    }

    #[test]
    fn test_round_trip_reproduces_all_fields() {
        let metadata = sample_metadata();
        let bytes = marshall(&metadata).unwrap();
        let decoded = unmarshall(&bytes).unwrap();
        assert_eq!(decoded, metadata);
    }

    #[test]
    fn test_unmarshall_rejects_malformed_input() {
        let result = unmarshall(b"not json at all");
        assert!(matches!(result, Err(NamingError::Unmarshalling(_))));
    }

    #[test]
    fn test_unmarshall_rejects_truncated_input() {
        let metadata = sample_metadata();
        let bytes = marshall(&metadata).unwrap();

        let result = unmarshall(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(NamingError::Unmarshalling(_))));
    }

    #[test]
    fn test_unmarshall_rejects_wrong_payload_shape() {
        let bytes = br#"{"type":"SERVICE_REF_META_DATA","payload":{"bogus":true}}"#;
        assert!(matches!(
            unmarshall(bytes),
            Err(NamingError::Unmarshalling(_))
        ));
    }

    #[test]
    fn test_unknown_tag_without_scope_is_unresolved() {
        let bytes = br#"{"type":"LegacyRefV1","payload":{}}"#;
        match unmarshall(bytes) {
            Err(NamingError::UnresolvedType(tag)) => assert_eq!(tag, "LegacyRefV1"),
            other => panic!("expected UnresolvedType, got {other:?}"),
        }
    }

    #[test]
    fn test_scoped_resolver_is_consulted_first() {
        let bytes = br#"{"type":"LegacyRefV1","payload":{"name":"service/Legacy"}}"#;

        let mut registry = RegistryTypeResolver::new();
        registry.register("LegacyRefV1", |payload| {
            let name = payload
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| NamingError::Unmarshalling("missing name".to_string()))?;
            Ok(ServiceRefMetadata::new(
                name,
                "org.example.Legacy",
                ServiceRefType::JaxRpc,
            ))
        });

        let _scope = ResolverScope::enter(Arc::new(registry));
        let decoded = unmarshall(bytes).unwrap();
        assert_eq!(decoded.service_ref_name, "service/Legacy");
        assert_eq!(decoded.ref_type, ServiceRefType::JaxRpc);
    }

    #[test]
    fn test_default_decoder_applies_when_scope_misses() {
        // Scope is active but does not recognise the standard tag; the
        // built-in decoder must still handle it.
        let metadata = sample_metadata();
        let bytes = marshall(&metadata).unwrap();

        let _scope = ResolverScope::enter(Arc::new(RegistryTypeResolver::new()));
        let decoded = unmarshall(&bytes).unwrap();
        assert_eq!(decoded, metadata);
    }

    #[test]
    fn test_alias_tag_decodes_standard_payload() {
        let metadata = sample_metadata();
        let bytes = marshall(&metadata).unwrap();
        // Rewrite the tag to a legacy one.
        let mut envelope: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        envelope["type"] = Value::String("LegacyRefV2".to_string());
        let legacy_bytes = serde_json::to_vec(&envelope).unwrap();

        let mut registry = RegistryTypeResolver::new();
        registry.register_alias("LegacyRefV2");

        let _scope = ResolverScope::enter(Arc::new(registry));
        let decoded = unmarshall(&legacy_bytes).unwrap();
        assert_eq!(decoded, metadata);
    }
}
