//! Contract types for registration
//!
//! Values a caller hands to the registry when declaring a field. They carry
//! no behavior of their own and are safe to load from configuration files.
//!
//! ## Module Structure
//!
//! - `param_configuration`: per-field external key and read-only flag
//!
//! ## Usage
//!
//! ```
//! use urlquery_core::contract::ParamConfiguration;
//!
//! let config = ParamConfiguration::new().key("stTm").read_only(true);
//! assert_eq!(config.external_key.as_deref(), Some("stTm"));
//! ```

pub mod param_configuration;

// Re-exports
pub use param_configuration::ParamConfiguration;
