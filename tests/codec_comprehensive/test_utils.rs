//! Shared fixtures for the codec suite

#![allow(dead_code)]

pub use chrono::{DateTime, TimeZone, Utc};
pub use urlquery::{
    field_accessor, fields, register, Converter, ExternalMapping, ExternalValue, IntValue,
    QueryCodec, QueryParams, TypeRegistration,
};

/// Query type carrying one field per converter plus a read-only field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestQuery {
    pub string_member: Option<String>,
    pub int_member: Option<IntValue>,
    pub date_member: Option<DateTime<Utc>>,
    pub bool_member: Option<bool>,
    pub int_array_member: Vec<IntValue>,
    pub string_array_member: Vec<String>,
    pub read_only_member: Option<String>,
}

impl QueryParams for TestQuery {
    fn describe(fields: &mut TypeRegistration<Self>) {
        fields
            .field("stringMember", field_accessor!(TestQuery, string_member))
            .converter(Converter::String)
            .key("sm");
        fields
            .field("intMember", field_accessor!(TestQuery, int_member))
            .converter(Converter::Int)
            .key("im");
        fields
            .field("dateMember", field_accessor!(TestQuery, date_member))
            .converter(Converter::IsoDate);
        fields
            .field("boolMember", field_accessor!(TestQuery, bool_member))
            .converter(Converter::Bool);
        fields
            .field("intArrayMember", field_accessor!(TestQuery, int_array_member))
            .converter(Converter::IntArray);
        fields
            .field(
                "stringArrayMember",
                field_accessor!(TestQuery, string_array_member),
            )
            .converter(Converter::StringArray);
        fields
            .field("readOnlyMember", field_accessor!(TestQuery, read_only_member))
            .converter(Converter::String)
            .key("ro")
            .read_only();
    }
}

/// Route library logs to the test harness (`RUST_LOG=urlquery=debug`)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Register `TestQuery` (idempotent) and return a fresh instance
pub fn setup() -> TestQuery {
    init_tracing();
    register::<TestQuery>().unwrap();
    TestQuery::default()
}

/// 2016-01-01T00:00:00Z
pub fn new_year_2016() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()
}

pub fn ints(values: &[i64]) -> Vec<IntValue> {
    values.iter().copied().map(IntValue::Num).collect()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Fully populated query object
pub fn full_query() -> TestQuery {
    TestQuery {
        string_member: Some("Hey".to_string()),
        int_member: Some(IntValue::Num(47)),
        date_member: Some(new_year_2016()),
        bool_member: Some(true),
        int_array_member: ints(&[4, 2, 5, 1]),
        string_array_member: strings(&["string 1", "string awesome", "(another-string)"]),
        read_only_member: Some("Read Only".to_string()),
    }
}

/// Mapping `full_query()` serializes to (no read-only key)
pub fn full_to_url_mapping() -> ExternalMapping {
    [
        ("sm", "Hey"),
        ("im", "47"),
        ("dateMember", "2016-01-01T00:00:00.000Z"),
        ("boolMember", "t"),
        ("intArrayMember", "4;2;5;1"),
        (
            "stringArrayMember",
            "string 1;string awesome;(another-string)",
        ),
    ]
    .into_iter()
    .collect()
}

/// Mapping that deserializes to `full_query()` (read-only key included)
pub fn full_from_url_mapping() -> ExternalMapping {
    let mut mapping = full_to_url_mapping();
    mapping.insert("ro", "Read Only");
    mapping
}

/// Single-entry mapping
pub fn mapping(key: &str, value: &str) -> ExternalMapping {
    let mut mapping = ExternalMapping::new();
    mapping.insert(key, value);
    mapping
}
