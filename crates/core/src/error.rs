//! Error types for urlquery
//!
//! Only registration can fail. Decoding a single malformed value degrades
//! locally (see `converter`) and never surfaces here.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for urlquery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Registration-time configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field was registered without a converter
    #[error("converter is undefined for urlKey '{key}'")]
    MissingConverter {
        /// External key of the offending field
        key: String,
    },

    /// The same field name was registered twice for one type
    #[error("field '{field}' is already registered for type {type_name}")]
    DuplicateField {
        /// Name of the registered type
        type_name: &'static str,
        /// Offending field name
        field: String,
    },

    /// Two fields of one type share an external key
    #[error("urlKey '{key}' is already used by another field of type {type_name}")]
    DuplicateExternalKey {
        /// Name of the registered type
        type_name: &'static str,
        /// Offending external key
        key: String,
    },

    /// An explicit external key was empty
    #[error("field '{field}' has an empty urlKey")]
    EmptyExternalKey {
        /// Offending field name
        field: String,
    },
}

impl Error {
    /// External key (or field name, when no key is known) this error is about
    pub fn subject(&self) -> &str {
        match self {
            Error::MissingConverter { key } | Error::DuplicateExternalKey { key, .. } => key,
            Error::DuplicateField { field, .. } | Error::EmptyExternalKey { field } => field,
        }
    }
}
