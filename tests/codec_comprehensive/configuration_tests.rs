//! Configuration
//!
//! Field options, converters and whole mappings loaded from JSON.

use crate::test_utils::*;
use serde::Deserialize;
use urlquery::{register_field, FieldAccessor, ParamConfiguration};

#[derive(Debug, Deserialize)]
struct FieldSpec {
    field: String,
    converter: Option<Converter>,
    #[serde(flatten)]
    config: ParamConfiguration,
}

#[derive(Debug, Default, PartialEq)]
struct Configured {
    title: Option<String>,
    tags: Vec<String>,
}

fn accessor_for(field: &str) -> FieldAccessor<Configured> {
    match field {
        "title" => field_accessor!(Configured, title),
        _ => field_accessor!(Configured, tags),
    }
}

#[test]
fn test_register_from_json_specs() {
    let specs: Vec<FieldSpec> = serde_json::from_str(
        r#"[
            {"field": "title", "converter": "string", "urlKey": "t"},
            {"field": "tags", "converter": "stringArray", "readOnly": true}
        ]"#,
    )
    .unwrap();

    for spec in specs {
        register_field(
            &spec.field,
            spec.converter,
            Some(spec.config),
            accessor_for(&spec.field),
        )
        .unwrap();
    }

    let list = fields::<Configured>();
    assert_eq!(list[0].external_key, "t");
    assert_eq!(list[1].external_key, "tags");
    assert!(list[1].read_only);

    let decoded: Configured = QueryCodec::from_query_string("t=Hi&tags=a;b");
    assert_eq!(
        decoded,
        Configured {
            title: Some("Hi".into()),
            tags: strings(&["a", "b"]),
        }
    );
    assert_eq!(QueryCodec::to_query_string(&decoded), "t=Hi");
}

#[test]
fn test_json_spec_without_converter_fails() {
    #[derive(Default)]
    struct Unconfigured {
        title: String,
    }

    let spec: FieldSpec =
        serde_json::from_str(r#"{"field": "title", "urlKey": "ttl"}"#).unwrap();
    let err = register_field(
        &spec.field,
        spec.converter,
        Some(spec.config),
        field_accessor!(Unconfigured, title),
    )
    .unwrap_err();
    assert!(err.to_string().contains("'ttl'"));
}

#[test]
fn test_mapping_from_json() {
    setup();
    let mapping: ExternalMapping = serde_json::from_str(
        r#"{"sm": "Hey", "boolMember": true, "intArrayMember": "4;2"}"#,
    )
    .unwrap();
    assert_eq!(mapping.get("boolMember"), Some(&ExternalValue::Flag));

    let query: TestQuery = QueryCodec::from_mapping(&mapping);
    assert_eq!(query.string_member.as_deref(), Some("Hey"));
    assert_eq!(query.bool_member, Some(true));
    assert_eq!(query.int_array_member, ints(&[4, 2]));
}

#[test]
fn test_mapping_to_json_keeps_field_order() {
    setup();
    let json = serde_json::to_string(&QueryCodec::to_mapping(&full_query())).unwrap();
    let sm = json.find("\"sm\"").unwrap();
    let im = json.find("\"im\"").unwrap();
    let arr = json.find("\"stringArrayMember\"").unwrap();
    assert!(sm < im && im < arr);
}
