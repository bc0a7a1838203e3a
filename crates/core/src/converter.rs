//! Value converters
//!
//! A converter moves one field's value between the instance and its string
//! form in an [`ExternalMapping`]. The set is closed:
//!
//! | Converter | To URL | From URL |
//! |-----------|--------|----------|
//! | String | as-is | as-is |
//! | Int | decimal | lenient decimal, else `NaN` |
//! | Bool | `t` / `f` | `true` / `t` (any case), else `false` |
//! | IsoDate | `2016-01-01T00:00:00.000Z` | RFC 3339 / ISO-8601 |
//! | IntArray | `;`-joined, empty omitted | `;`-split, `""` is `[]` |
//! | StringArray | `;`-joined, empty omitted | `;`-split, `""` is `[]` |
//!
//! Both directions are total. A missing value is skipped, never defaulted,
//! and a bad value degrades (NaN, `false`, field left unchanged) instead of
//! failing the surrounding batch.

use crate::mapping::{ExternalMapping, ARRAY_SEPARATOR};
use crate::metadata::FieldMetadata;
use crate::value::{FieldValue, IntValue};
use chrono::format::{self as chrono_format, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// ISO-8601 layouts with an offset that RFC 3339 rejects
///
/// `%#z` takes `Z`, `+01`, `+0100` and `+01:00`.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Hour-only layout with an offset, minutes read as zero
const OFFSET_HOUR_FORMAT: &str = "%Y-%m-%dT%H%#z";

/// Naive date-time layouts accepted after RFC 3339, read as UTC
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Bidirectional encode/decode strategy for one kind of field
pub trait UrlConverter {
    /// Encode a field value, or `None` to leave the key out
    fn encode(&self, value: &FieldValue) -> Option<String>;

    /// Decode URL text, or `None` if the text is unusable
    fn decode(&self, text: &str) -> Option<FieldValue>;

    /// Write `instance`'s field into `output` under the external key
    ///
    /// Does nothing when the field holds no value or encodes to nothing.
    fn to_external<T>(&self, instance: &T, output: &mut ExternalMapping, meta: &FieldMetadata<T>) {
        let Some(value) = meta.accessor.read(instance) else {
            return;
        };
        if let Some(text) = self.encode(&value) {
            output.insert(meta.external_key.as_str(), text);
        }
    }

    /// Read the external key from `input` into `instance`'s field
    ///
    /// Does nothing when the key is absent.
    fn from_external<T>(&self, input: &ExternalMapping, instance: &mut T, meta: &FieldMetadata<T>) {
        let Some(text) = input.get_text(&meta.external_key) else {
            return;
        };

        let Some(value) = self.decode(text) else {
            warn!(
                target: "urlquery::converter",
                key = %meta.external_key,
                text,
                "Value could not be decoded, field left unchanged"
            );
            return;
        };

        if contains_nan(&value) {
            warn!(
                target: "urlquery::converter",
                key = %meta.external_key,
                text,
                "Integer text did not parse, storing NaN"
            );
        }

        let kind = value.kind_name();
        if !meta.accessor.write(instance, value) {
            warn!(
                target: "urlquery::converter",
                key = %meta.external_key,
                kind,
                field_type = meta.accessor.value_type(),
                "Decoded value does not fit field, field left unchanged"
            );
        }
    }
}

fn contains_nan(value: &FieldValue) -> bool {
    match value {
        FieldValue::Int(n) => n.is_nan(),
        FieldValue::IntArray(v) => v.iter().any(IntValue::is_nan),
        _ => false,
    }
}

fn join<I, D>(items: I) -> Option<String>
where
    I: IntoIterator<Item = D>,
    D: fmt::Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(ARRAY_SEPARATOR);
        }
        out.push_str(&item.to_string());
    }
    // empty arrays are omitted, never written as ""
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

fn split(text: &str) -> impl Iterator<Item = &str> {
    // "" yields no elements at all, not one empty element
    text.split(ARRAY_SEPARATOR).filter(move |_| !text.is_empty())
}

/// Format an instant the way URLs carry it (`2016-01-01T00:00:00.000Z`)
pub fn format_iso_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 instant
///
/// Accepts RFC 3339 with any offset, offsets without a colon or minutes,
/// reduced-precision times (`THH:MM`, `THH`) followed by an offset, a
/// date-time without offset (UTC), a bare `YYYY-MM-DD` (midnight UTC) and
/// `YYYY-MM` (first of the month).
pub fn parse_iso_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    let with_offset = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| parse_with_offset(text, format, false))
        .or_else(|| parse_with_offset(text, OFFSET_HOUR_FORMAT, true));
    if let Some(date) = with_offset {
        return Some(date.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d"))
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn parse_with_offset(text: &str, format: &str, hour_only: bool) -> Option<DateTime<FixedOffset>> {
    let mut parsed = Parsed::new();
    chrono_format::parse(&mut parsed, text, StrftimeItems::new(format)).ok()?;
    if hour_only {
        parsed.set_minute(0).ok()?;
    }
    parsed.to_datetime().ok()
}

/// Identity converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringConverter;

impl UrlConverter for StringConverter {
    fn encode(&self, value: &FieldValue) -> Option<String> {
        match value {
            FieldValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn decode(&self, text: &str) -> Option<FieldValue> {
        Some(FieldValue::String(text.to_string()))
    }
}

/// Decimal integer converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntConverter;

impl UrlConverter for IntConverter {
    fn encode(&self, value: &FieldValue) -> Option<String> {
        match value {
            FieldValue::Int(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn decode(&self, text: &str) -> Option<FieldValue> {
        Some(FieldValue::Int(IntValue::parse_lenient(text)))
    }
}

/// `t`/`f` boolean converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolConverter;

impl UrlConverter for BoolConverter {
    fn encode(&self, value: &FieldValue) -> Option<String> {
        match value {
            FieldValue::Bool(true) => Some("t".to_string()),
            FieldValue::Bool(false) => Some("f".to_string()),
            _ => None,
        }
    }

    fn decode(&self, text: &str) -> Option<FieldValue> {
        let truthy = text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("t");
        Some(FieldValue::Bool(truthy))
    }
}

/// ISO-8601 instant converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoDateConverter;

impl UrlConverter for IsoDateConverter {
    fn encode(&self, value: &FieldValue) -> Option<String> {
        match value {
            FieldValue::Date(d) => Some(format_iso_date(d)),
            _ => None,
        }
    }

    fn decode(&self, text: &str) -> Option<FieldValue> {
        parse_iso_date(text).map(FieldValue::Date)
    }
}

/// `;`-joined integer array converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntArrayConverter;

impl UrlConverter for IntArrayConverter {
    fn encode(&self, value: &FieldValue) -> Option<String> {
        match value {
            FieldValue::IntArray(v) => join(v),
            _ => None,
        }
    }

    fn decode(&self, text: &str) -> Option<FieldValue> {
        Some(FieldValue::IntArray(
            split(text).map(IntValue::parse_lenient).collect(),
        ))
    }
}

/// `;`-joined string array converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringArrayConverter;

impl UrlConverter for StringArrayConverter {
    fn encode(&self, value: &FieldValue) -> Option<String> {
        match value {
            FieldValue::StringArray(v) => join(v),
            _ => None,
        }
    }

    fn decode(&self, text: &str) -> Option<FieldValue> {
        Some(FieldValue::StringArray(
            split(text).map(str::to_string).collect(),
        ))
    }
}

/// Converter selected for a field at registration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Converter {
    /// See [`StringConverter`]
    String,
    /// See [`IntConverter`]
    Int,
    /// See [`BoolConverter`]
    Bool,
    /// See [`IsoDateConverter`]
    IsoDate,
    /// See [`IntArrayConverter`]
    IntArray,
    /// See [`StringArrayConverter`]
    StringArray,
}

impl Converter {
    /// All converters (for iteration)
    pub const ALL: [Converter; 6] = [
        Converter::String,
        Converter::Int,
        Converter::Bool,
        Converter::IsoDate,
        Converter::IntArray,
        Converter::StringArray,
    ];

    /// Stable name, as used in configuration
    pub const fn name(&self) -> &'static str {
        match self {
            Converter::String => "string",
            Converter::Int => "int",
            Converter::Bool => "bool",
            Converter::IsoDate => "isoDate",
            Converter::IntArray => "intArray",
            Converter::StringArray => "stringArray",
        }
    }
}

impl UrlConverter for Converter {
    fn encode(&self, value: &FieldValue) -> Option<String> {
        match self {
            Converter::String => StringConverter.encode(value),
            Converter::Int => IntConverter.encode(value),
            Converter::Bool => BoolConverter.encode(value),
            Converter::IsoDate => IsoDateConverter.encode(value),
            Converter::IntArray => IntArrayConverter.encode(value),
            Converter::StringArray => StringArrayConverter.encode(value),
        }
    }

    fn decode(&self, text: &str) -> Option<FieldValue> {
        match self {
            Converter::String => StringConverter.decode(text),
            Converter::Int => IntConverter.decode(text),
            Converter::Bool => BoolConverter.decode(text),
            Converter::IsoDate => IsoDateConverter.decode(text),
            Converter::IntArray => IntArrayConverter.decode(text),
            Converter::StringArray => StringArrayConverter.decode(text),
        }
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown converter name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown converter '{0}'")]
pub struct UnknownConverter(
    /// The name that matched no converter
    pub String,
);

impl FromStr for Converter {
    type Err = UnknownConverter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Converter::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownConverter(s.to_string()))
    }
}
