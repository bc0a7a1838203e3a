//! Type registry for urlquery
//!
//! Holds the process-wide mapping from a Rust type to its ordered field
//! descriptors, and the registration entry points that populate it.
//!
//! Registration runs once per type during startup; every later codec call
//! only reads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registration;
pub mod registry;

pub use registration::{register, register_field, FieldBuilder, QueryParams, TypeRegistration};
pub use registry::{fields, is_registered, FieldList};
