//! urlquery - typed structs to URL query strings and back
//!
//! A type declares, per field, a converter (string, int, bool, ISO date,
//! int array, string array) and an optional external key. The codec then
//! serializes instances to a flat mapping / query string and parses query
//! strings or full URLs back into populated instances.
//!
//! # Quick Start
//!
//! ```
//! use urlquery::{field_accessor, register, Converter, IntValue, QueryCodec, QueryParams, TypeRegistration};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Search {
//!     title: Option<String>,
//!     page: IntValue,
//! }
//!
//! impl QueryParams for Search {
//!     fn describe(fields: &mut TypeRegistration<Self>) {
//!         fields.field("title", field_accessor!(Search, title)).converter(Converter::String).key("t");
//!         fields.field("page", field_accessor!(Search, page)).converter(Converter::Int);
//!     }
//! }
//!
//! register::<Search>().unwrap();
//!
//! let search = Search { title: Some("rust".into()), page: IntValue::Num(2) };
//! assert_eq!(QueryCodec::to_query_string(&search), "t=rust&page=2");
//!
//! let back: Search = QueryCodec::from_url("https://example.com/find?t=rust&page=2");
//! assert_eq!(back, search);
//! ```
//!
//! # Architecture
//!
//! - `urlquery-core`: values, mapping, converters, field descriptors, errors
//! - `urlquery-registry`: the process-wide type registry and registration
//! - `urlquery-codec`: whole-object serialize / deserialize
//!
//! Registration is the only fallible step. Decoding a malformed value never
//! fails a codec call: bad integers become [`IntValue::NaN`], unknown booleans
//! become `false`, and anything that cannot be stored leaves the field as is.

pub use urlquery_codec::QueryCodec;
pub use urlquery_core::*;
pub use urlquery_registry::{
    fields, is_registered, register, register_field, FieldBuilder, FieldList, QueryParams,
    TypeRegistration,
};
