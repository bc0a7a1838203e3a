//! Value types for urlquery
//!
//! This module defines:
//! - IntValue: integer with a not-a-number sentinel
//! - FieldValue: the object-side value a converter moves in or out of a field
//!
//! ## Lenient Integers
//!
//! Integer text is parsed "as far as possible": leading whitespace is skipped,
//! an optional sign is accepted, then the longest run of ASCII digits is read.
//! Anything that yields no digits becomes [`IntValue::NaN`] instead of an error.
//! Unlike IEEE floats, `NaN == NaN` holds for this sentinel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer field value with a not-a-number sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntValue {
    /// A parsed integer
    Num(i64),
    /// Text that did not start with a decimal integer
    NaN,
}

impl IntValue {
    /// Parse decimal text as far as possible
    ///
    /// `"42"` → `Num(42)`, `"12abc"` → `Num(12)`, `" -7"` → `Num(-7)`,
    /// `"abc"`, `""` and `"-"` → `NaN`. A digit run that overflows `i64`
    /// is also `NaN`.
    pub fn parse_lenient(text: &str) -> Self {
        let trimmed = text.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return IntValue::NaN;
        }

        let mut acc: i64 = 0;
        for b in digits[..end].bytes() {
            let digit = i64::from(b - b'0');
            let next = acc.checked_mul(10).and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            });
            match next {
                Some(v) => acc = v,
                None => return IntValue::NaN,
            }
        }
        IntValue::Num(acc)
    }

    /// Check if this is the not-a-number sentinel
    pub fn is_nan(&self) -> bool {
        matches!(self, IntValue::NaN)
    }

    /// Get the integer, if this is a number
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntValue::Num(n) => Some(*n),
            IntValue::NaN => None,
        }
    }
}

impl Default for IntValue {
    fn default() -> Self {
        IntValue::Num(0)
    }
}

impl From<i64> for IntValue {
    fn from(n: i64) -> Self {
        IntValue::Num(n)
    }
}

impl From<i32> for IntValue {
    fn from(n: i32) -> Self {
        IntValue::Num(i64::from(n))
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntValue::Num(n) => write!(f, "{n}"),
            IntValue::NaN => f.write_str("NaN"),
        }
    }
}

/// Object-side value of a single registered field
///
/// One variant per converter kind. Accessors translate between this and the
/// concrete Rust field type (see [`crate::field::FieldType`]).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 string
    String(String),
    /// Integer (possibly NaN)
    Int(IntValue),
    /// Boolean
    Bool(bool),
    /// UTC instant
    Date(DateTime<Utc>),
    /// Array of integers
    IntArray(Vec<IntValue>),
    /// Array of strings
    StringArray(Vec<String>),
}

impl FieldValue {
    /// Get the kind name as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "String",
            FieldValue::Int(_) => "Int",
            FieldValue::Bool(_) => "Bool",
            FieldValue::Date(_) => "Date",
            FieldValue::IntArray(_) => "IntArray",
            FieldValue::StringArray(_) => "StringArray",
        }
    }
}
