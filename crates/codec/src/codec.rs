//! Whole-object query codec
//!
//! Walks a type's registered fields and runs each field's converter:
//!
//! ```text
//! instance ──to_mapping──▶ ExternalMapping ──to_query_string──▶ "a=1&b=t"
//! instance ◀─from_mapping── ExternalMapping ◀──parse_query──── "...?a=1&b=t"
//! ```
//!
//! Serialization skips read-only fields. Deserialization starts from
//! `T::default()` and only touches fields whose key is present. No codec
//! call fails: malformed values degrade per converter.

use std::any::type_name;
use tracing::debug;
use urlquery_core::{parse_query, ExternalMapping, UrlConverter};
use urlquery_registry::fields;

/// Serializer/deserializer for registered types
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryCodec;

impl QueryCodec {
    /// Serialize the writable registered fields of `instance`
    ///
    /// Fields with no value (and empty arrays) are left out. Unregistered
    /// types produce an empty mapping.
    pub fn to_mapping<T: 'static>(instance: &T) -> ExternalMapping {
        let fields = fields::<T>();
        let mut output = ExternalMapping::new();
        for meta in fields.iter().filter(|meta| meta.is_writable()) {
            meta.converter.to_external(instance, &mut output, meta);
        }
        debug!(
            target: "urlquery::codec",
            type_name = type_name::<T>(),
            fields = fields.len(),
            keys = output.len(),
            "Serialized instance"
        );
        output
    }

    /// Serialize `instance` to `key=value&...` (no leading `?`, no escaping)
    pub fn to_query_string<T: 'static>(instance: &T) -> String {
        Self::to_mapping(instance).to_query_string()
    }

    /// Build a fresh `T` from a mapping
    ///
    /// Read-only fields are honored. Keys that are absent leave the field at
    /// its default; keys with no registered field are ignored.
    pub fn from_mapping<T: Default + 'static>(mapping: &ExternalMapping) -> T {
        let mut instance = T::default();
        Self::apply_mapping(mapping, &mut instance);
        instance
    }

    /// Populate the registered fields of an existing instance
    ///
    /// Unregistered fields and fields with an absent key keep their values.
    pub fn apply_mapping<T: 'static>(mapping: &ExternalMapping, instance: &mut T) {
        let fields = fields::<T>();
        for meta in fields.iter() {
            meta.converter.from_external(mapping, instance, meta);
        }
        debug!(
            target: "urlquery::codec",
            type_name = type_name::<T>(),
            fields = fields.len(),
            keys = mapping.len(),
            "Deserialized mapping"
        );
    }

    /// Build a fresh `T` from a bare query string or a full URL
    ///
    /// Everything up to the first `?` is ignored.
    pub fn from_query_string<T: Default + 'static>(raw: &str) -> T {
        Self::from_mapping(&parse_query(raw))
    }

    /// Build a fresh `T` from a full URL
    pub fn from_url<T: Default + 'static>(url: &str) -> T {
        Self::from_query_string(url)
    }
}
