//! Per-field registration options
//!
//! Both options are optional. Registration resolves them:
//! - `external_key` defaults to the field name
//! - `read_only` defaults to `false`
//!
//! Serde names are `urlKey` and `readOnly`, so a JSON object like
//! `{"urlKey": "ro", "readOnly": true}` deserializes directly.

use serde::{Deserialize, Serialize};

/// External key and read-only flag for one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamConfiguration {
    /// Key used in the URL (defaults to the field name)
    #[serde(rename = "urlKey", skip_serializing_if = "Option::is_none")]
    pub external_key: Option<String>,

    /// Read from the URL but never written back (defaults to `false`)
    #[serde(rename = "readOnly", skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl ParamConfiguration {
    /// Create a configuration with every option unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the external key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.external_key = Some(key.into());
        self
    }

    /// Set the read-only flag
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    /// External key after applying the field-name default
    pub fn resolved_key<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.external_key.as_deref().unwrap_or(field_name)
    }

    /// Read-only flag after applying the `false` default
    pub fn resolved_read_only(&self) -> bool {
        self.read_only.unwrap_or(false)
    }
}
