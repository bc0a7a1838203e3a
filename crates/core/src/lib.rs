//! Core types and traits for urlquery
//!
//! This crate defines the building blocks shared by the registry and codec:
//! - IntValue / FieldValue: object-side values, with a NaN sentinel for ints
//! - ExternalMapping / ExternalValue: the flat URL-side representation
//! - ParamConfiguration: per-field external key and read-only flag
//! - FieldType / FieldAccessor: typed access to a struct field
//! - Converter / UrlConverter: the closed set of value converters
//! - FieldMetadata: the per-field descriptor stored by the registry
//! - Error: registration-time error type

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod contract;
pub mod converter;
pub mod error;
pub mod field;
pub mod mapping;
pub mod metadata;
pub mod value;

// Re-export commonly used types and traits
pub use contract::ParamConfiguration;
pub use converter::{
    format_iso_date, parse_iso_date, BoolConverter, Converter, IntArrayConverter, IntConverter,
    IsoDateConverter, StringArrayConverter, StringConverter, UnknownConverter, UrlConverter,
};
pub use error::{Error, Result};
pub use field::{FieldAccessor, FieldType};
pub use mapping::{
    mapping_to_query_string, parse_query, ExternalMapping, ExternalValue, ARRAY_SEPARATOR,
    KEY_VALUE_SEPARATOR, PAIR_SEPARATOR, QUERY_SEPARATOR,
};
pub use metadata::FieldMetadata;
pub use value::{FieldValue, IntValue};
