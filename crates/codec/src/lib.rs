//! Query codec for urlquery
//!
//! Serializes registered types to URL query strings and back, using the
//! field descriptors held by `urlquery-registry`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;

pub use codec::QueryCodec;
