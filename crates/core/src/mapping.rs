//! External (URL-side) representation
//!
//! An [`ExternalMapping`] is the flat, string-typed form of a query string.
//! Keys keep insertion order so a serialized query lists fields in
//! registration order.
//!
//! ## Grammar
//!
//! ```text
//! [anything ?] key1=value1&key2=value2&flag
//! ```
//!
//! A piece without `=` parses as a [`ExternalValue::Flag`]. Nothing is
//! percent-decoded or escaped: values containing `&`, `=` or `;` do not
//! round-trip.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the location part of a URL and its query
pub const QUERY_SEPARATOR: char = '?';

/// Separator between `key=value` pairs
pub const PAIR_SEPARATOR: char = '&';

/// Separator between a key and its value
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Separator between array elements inside one value
pub const ARRAY_SEPARATOR: char = ';';

/// Text converters see in place of a valueless flag
pub const FLAG_TEXT: &str = "true";

/// One value in an [`ExternalMapping`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExternalValue {
    /// `key=value`
    Text(String),
    /// Bare `key` with no `=`
    Flag,
}

impl ExternalValue {
    /// Text a converter decodes from
    ///
    /// A flag reads as `"true"`.
    pub fn as_text(&self) -> &str {
        match self {
            ExternalValue::Text(s) => s,
            ExternalValue::Flag => FLAG_TEXT,
        }
    }
}

impl From<String> for ExternalValue {
    fn from(s: String) -> Self {
        ExternalValue::Text(s)
    }
}

impl From<&str> for ExternalValue {
    fn from(s: &str) -> Self {
        ExternalValue::Text(s.to_string())
    }
}

impl fmt::Display for ExternalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

impl Serialize for ExternalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExternalValue::Text(s) => serializer.serialize_str(s),
            ExternalValue::Flag => serializer.serialize_bool(true),
        }
    }
}

impl<'de> Deserialize<'de> for ExternalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExternalValueVisitor;

        impl<'de> Visitor<'de> for ExternalValueVisitor {
            type Value = ExternalValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or the boolean `true`")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ExternalValue, E> {
                if v {
                    Ok(ExternalValue::Flag)
                } else {
                    Err(E::invalid_value(de::Unexpected::Bool(v), &self))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ExternalValue, E> {
                Ok(ExternalValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ExternalValue, E> {
                Ok(ExternalValue::Text(v))
            }
        }

        deserializer.deserialize_any(ExternalValueVisitor)
    }
}

/// Flat key/value form of a query string
///
/// Equality ignores key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalMapping(IndexMap<String, ExternalValue>);

impl ExternalMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, keeping the key's original position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ExternalValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert a valueless flag
    pub fn insert_flag(&mut self, key: impl Into<String>) {
        self.0.insert(key.into(), ExternalValue::Flag);
    }

    /// Get the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&ExternalValue> {
        self.0.get(key)
    }

    /// Get the text stored under `key` (flags read as `"true"`)
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(ExternalValue::as_text)
    }

    /// Check whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExternalValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Join entries as `key=value` pairs separated by `&`
    ///
    /// No percent-encoding is applied. Flags are written as `key=true`.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push(PAIR_SEPARATOR);
            }
            out.push_str(key);
            out.push(KEY_VALUE_SEPARATOR);
            out.push_str(value.as_text());
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for ExternalMapping
where
    K: Into<String>,
    V: Into<ExternalValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = ExternalMapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

impl<'a> IntoIterator for &'a ExternalMapping {
    type Item = (&'a String, &'a ExternalValue);
    type IntoIter = indexmap::map::Iter<'a, String, ExternalValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Join a mapping into a query string (no leading `?`)
pub fn mapping_to_query_string(mapping: &ExternalMapping) -> String {
    mapping.to_query_string()
}

/// Split a URL or bare query string into an [`ExternalMapping`]
///
/// Everything up to and including the first `?` is dropped; without a `?` the
/// whole input is the query. Pieces are split on `&`; each piece is split on
/// `=` and the text between the first and second `=` is its value. A piece
/// with no `=` becomes a flag. Empty pieces are skipped and later duplicates
/// of a key win.
pub fn parse_query(raw: &str) -> ExternalMapping {
    let query = match raw.split_once(QUERY_SEPARATOR) {
        Some((_, rest)) => rest,
        None => raw,
    };

    let mut mapping = ExternalMapping::new();
    for piece in query.split(PAIR_SEPARATOR) {
        if piece.is_empty() {
            continue;
        }
        let mut parts = piece.split(KEY_VALUE_SEPARATOR);
        // split always yields at least one item
        let key = parts.next().unwrap_or_default();
        match parts.next() {
            Some(value) => mapping.insert(key, value),
            None => mapping.insert_flag(key),
        }
    }
    mapping
}
