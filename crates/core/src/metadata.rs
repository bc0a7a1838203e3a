//! Field descriptors
//!
//! A [`FieldMetadata`] binds one struct field to its external key, read-only
//! flag, converter and accessor. The registry keeps an ordered list of them
//! per type; the codec walks that list for every call.

use crate::converter::Converter;
use crate::field::FieldAccessor;
use std::fmt;

/// Descriptor of one registered field of `T`
pub struct FieldMetadata<T> {
    /// Key used in the URL (non-empty, unique within the type)
    pub external_key: String,
    /// Excluded from serialization, still honored on deserialization
    pub read_only: bool,
    /// Struct field name (unique within the type)
    pub field_name: String,
    /// Converter chosen at registration
    pub converter: Converter,
    /// Typed access to the field on an instance
    pub accessor: FieldAccessor<T>,
}

impl<T> FieldMetadata<T> {
    /// Create a descriptor from already-resolved parts
    pub fn new(
        field_name: impl Into<String>,
        external_key: impl Into<String>,
        read_only: bool,
        converter: Converter,
        accessor: FieldAccessor<T>,
    ) -> Self {
        Self {
            external_key: external_key.into(),
            read_only,
            field_name: field_name.into(),
            converter,
            accessor,
        }
    }

    /// Check whether this field is written by serialization
    pub fn is_writable(&self) -> bool {
        !self.read_only
    }
}

impl<T> Clone for FieldMetadata<T> {
    fn clone(&self) -> Self {
        Self {
            external_key: self.external_key.clone(),
            read_only: self.read_only,
            field_name: self.field_name.clone(),
            converter: self.converter,
            accessor: self.accessor.clone(),
        }
    }
}

impl<T> fmt::Debug for FieldMetadata<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMetadata")
            .field("external_key", &self.external_key)
            .field("read_only", &self.read_only)
            .field("field_name", &self.field_name)
            .field("converter", &self.converter)
            .finish()
    }
}
