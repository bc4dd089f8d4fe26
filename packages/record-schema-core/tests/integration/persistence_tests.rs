//! JSON snapshot tests.

use ntest::timeout;
use record_schema_core::config::SchemaConfig;
use record_schema_core::{SchemaDescriptor, SchemaError, Type};

use super::helpers::{orders_schema, users_schema};

#[timeout(1000)]
#[test]
fn test_snapshot_restores_fields_in_order() {
    let orders = orders_schema();

    let json = orders.to_json().unwrap();
    let restored = SchemaDescriptor::<Type>::from_json(&json).unwrap();

    assert_eq!(restored, orders);
    assert_eq!(restored.fields(), orders.fields());
    assert_eq!(restored.field_name(1).unwrap(), None);
}

#[timeout(1000)]
#[test]
fn test_snapshot_keeps_empty_names() {
    let anonymous = SchemaDescriptor::anonymous(vec![Type::Int, Type::String]);

    let restored = SchemaDescriptor::<Type>::from_json(&anonymous.to_json().unwrap()).unwrap();

    assert_eq!(restored.field_name(0).unwrap(), Some(""));
    assert_eq!(restored.index_of("").unwrap(), 0);
}

#[timeout(1000)]
#[test]
fn test_snapshot_uses_catalog_names() {
    let json = users_schema().to_json().unwrap();

    assert!(json.contains("\"INT_TYPE\""));
    assert!(json.contains("\"STRING_TYPE\""));
    assert!(json.contains("\"name\": \"age\""));
}

#[timeout(1000)]
#[test]
fn test_snapshot_handwritten() {
    let json = r#"{ "fields": [ { "type": "int", "name": "id" }, { "type": "STRING_TYPE" } ] }"#;

    let restored = SchemaDescriptor::<Type>::from_json(json).unwrap();

    assert_eq!(restored.num_fields(), 2);
    assert_eq!(restored.field_type(0).unwrap(), &Type::Int);
    assert_eq!(restored.field_name(1).unwrap(), None);
    assert_eq!(restored.size().unwrap(), 136);
}

#[timeout(1000)]
#[test]
fn test_snapshot_type_names_match_parse() {
    let json = r#"{ "fields": [ { "type": "Int", "name": "a" }, { "type": "string_type", "name": "b" } ] }"#;

    let restored = SchemaDescriptor::<Type>::from_json(json).unwrap();

    assert_eq!(restored.field_type(0).unwrap(), &"Int".parse::<Type>().unwrap());
    assert_eq!(restored.field_type(1).unwrap(), &Type::String);
}

#[timeout(1000)]
#[test]
fn test_snapshot_rejects_bad_input() {
    let unknown_type = r#"{ "fields": [ { "type": "u64", "name": "id" } ] }"#;
    assert!(matches!(
        SchemaDescriptor::<Type>::from_json(unknown_type),
        Err(SchemaError::SerializationError(_))
    ));

    assert!(matches!(
        SchemaDescriptor::<Type>::from_json("not json"),
        Err(SchemaError::SerializationError(_))
    ));
}

#[timeout(1000)]
#[test]
fn test_snapshot_checked_against_config() {
    let empty = r#"{ "fields": [] }"#;

    assert!(SchemaDescriptor::<Type>::from_json(empty).unwrap().is_empty());
    assert!(matches!(
        SchemaDescriptor::<Type>::from_json_with(empty, &SchemaConfig::strict()),
        Err(SchemaError::InvalidSchema { .. })
    ));
}
