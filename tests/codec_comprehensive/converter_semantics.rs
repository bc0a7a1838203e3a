//! Converter Semantics
//!
//! Per-converter tables, exercised through the whole-object codec so the
//! external key and field wiring are covered too.

use crate::test_utils::*;

// =============================================================================
// String
// =============================================================================

#[test]
fn test_string_from_url() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("sm", "Hey"));
    assert_eq!(query.string_member.as_deref(), Some("Hey"));
}

#[test]
fn test_string_to_url() {
    let mut query = setup();
    query.string_member = Some("Hey".into());
    assert_eq!(QueryCodec::to_mapping(&query), mapping("sm", "Hey"));
}

// =============================================================================
// Int
// =============================================================================

#[test]
fn test_int_from_url() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("im", "47"));
    assert_eq!(query.int_member, Some(IntValue::Num(47)));
}

#[test]
fn test_int_to_url() {
    let mut query = setup();
    query.int_member = Some(IntValue::Num(47));
    assert_eq!(QueryCodec::to_mapping(&query), mapping("im", "47"));
}

#[test]
fn test_int_garbage_is_nan() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("im", "forty"));
    assert_eq!(query.int_member, Some(IntValue::NaN));
}

#[test]
fn test_int_parses_leading_digits() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("im", "12px"));
    assert_eq!(query.int_member, Some(IntValue::Num(12)));
}

// =============================================================================
// Bool
// =============================================================================

#[test]
fn test_bool_truthy_inputs() {
    setup();
    for text in ["t", "true", "True"] {
        let query: TestQuery = QueryCodec::from_mapping(&mapping("boolMember", text));
        assert_eq!(query.bool_member, Some(true), "input {text:?}");
    }
}

#[test]
fn test_bool_falsy_inputs() {
    setup();
    for text in ["f", "false", "False", "garbage"] {
        let query: TestQuery = QueryCodec::from_mapping(&mapping("boolMember", text));
        assert_eq!(query.bool_member, Some(false), "input {text:?}");
    }
}

#[test]
fn test_bool_to_url() {
    let mut query = setup();
    query.bool_member = Some(true);
    assert_eq!(QueryCodec::to_mapping(&query), mapping("boolMember", "t"));
    query.bool_member = Some(false);
    assert_eq!(QueryCodec::to_mapping(&query), mapping("boolMember", "f"));
}

// =============================================================================
// IsoDate
// =============================================================================

#[test]
fn test_iso_date_from_url() {
    setup();
    let query: TestQuery =
        QueryCodec::from_mapping(&mapping("dateMember", "2016-01-01T00:00:00.000Z"));
    assert_eq!(query.date_member, Some(new_year_2016()));
}

#[test]
fn test_iso_date_to_url() {
    let mut query = setup();
    query.date_member = Some(new_year_2016());
    assert_eq!(
        QueryCodec::to_mapping(&query),
        mapping("dateMember", "2016-01-01T00:00:00.000Z")
    );
}

#[test]
fn test_iso_date_with_offset() {
    setup();
    let query: TestQuery =
        QueryCodec::from_mapping(&mapping("dateMember", "2015-12-31T19:00:00-05:00"));
    assert_eq!(query.date_member, Some(new_year_2016()));
}

#[test]
fn test_iso_date_garbage_leaves_default() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("dateMember", "yesterday"));
    assert_eq!(query.date_member, None);
}

// =============================================================================
// IntArray
// =============================================================================

#[test]
fn test_empty_int_array_from_url() {
    setup();
    let mut query = full_query();
    query.int_array_member = ints(&[9]);
    QueryCodec::apply_mapping(&mapping("intArrayMember", ""), &mut query);
    assert!(query.int_array_member.is_empty());
}

#[test]
fn test_empty_int_array_to_url() {
    let query = setup();
    assert!(!QueryCodec::to_mapping(&query).contains_key("intArrayMember"));
}

#[test]
fn test_single_int_array_from_url() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("intArrayMember", "1"));
    assert_eq!(query.int_array_member, ints(&[1]));
}

#[test]
fn test_single_int_array_to_url() {
    let mut query = setup();
    query.int_array_member = ints(&[1]);
    assert_eq!(QueryCodec::to_mapping(&query), mapping("intArrayMember", "1"));
}

#[test]
fn test_int_array_from_url() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("intArrayMember", "1;5;10;-1"));
    assert_eq!(query.int_array_member, ints(&[1, 5, 10, -1]));
}

#[test]
fn test_int_array_to_url() {
    let mut query = setup();
    query.int_array_member = ints(&[1, 5, 10, -1]);
    assert_eq!(
        QueryCodec::to_mapping(&query),
        mapping("intArrayMember", "1;5;10;-1")
    );
}

#[test]
fn test_int_array_bad_element_is_nan() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("intArrayMember", "1;x;3"));
    assert_eq!(
        query.int_array_member,
        vec![IntValue::Num(1), IntValue::NaN, IntValue::Num(3)]
    );
}

// =============================================================================
// StringArray
// =============================================================================

#[test]
fn test_empty_string_array_from_url() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("stringArrayMember", ""));
    assert!(query.string_array_member.is_empty());
}

#[test]
fn test_empty_string_array_to_url() {
    let query = setup();
    assert!(!QueryCodec::to_mapping(&query).contains_key("stringArrayMember"));
}

#[test]
fn test_single_string_array_from_url() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping("stringArrayMember", "string"));
    assert_eq!(query.string_array_member, strings(&["string"]));
}

#[test]
fn test_single_string_array_to_url() {
    let mut query = setup();
    query.string_array_member = strings(&["string"]);
    assert_eq!(
        QueryCodec::to_mapping(&query),
        mapping("stringArrayMember", "string")
    );
}

#[test]
fn test_string_array_from_url() {
    setup();
    let query: TestQuery = QueryCodec::from_mapping(&mapping(
        "stringArrayMember",
        "string member;another;(string)",
    ));
    assert_eq!(
        query.string_array_member,
        strings(&["string member", "another", "(string)"])
    );
}

#[test]
fn test_string_array_to_url() {
    let mut query = setup();
    query.string_array_member = strings(&["string member", "another", "(string)"]);
    assert_eq!(
        QueryCodec::to_mapping(&query),
        mapping("stringArrayMember", "string member;another;(string)")
    );
}
