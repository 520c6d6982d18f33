//! Structural conversion between typed values and generic records.
//!
//! A `GenericRecord` is the `serde_json` object map both sides of a copy
//! are projected into. Any type with serde impls can be converted; field
//! names in the record are the *serialized* names, so `rename` and
//! `rename_all` attributes decide which dot-paths address which fields.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CopyError, CopyResult, Side};


/// Format-agnostic nested mapping used as the intermediate representation.
pub type GenericRecord = Map<String, Value>;


/// Project a typed value into a generic record.
///
/// Fails with `NilObject` if the value serializes to `null` and with
/// `NotARecord` if it serializes to a primitive or a sequence.
pub fn to_record<T: Serialize + ?Sized>(value: &T, side: Side) -> CopyResult<GenericRecord> {
    let value = serde_json::to_value(value).map_err(|source| CopyError::Conversion { side, source })?;
    match value {
        Value::Object(map) => {
            tracing::debug!(%side, keys = map.len(), "projected value into record");
            Ok(map)
        }
        Value::Null => Err(CopyError::NilObject { side }),
        other => Err(CopyError::NotARecord {
            side,
            found: value_type_name(&other),
        }),
    }
}


/// Rebuild a typed value from a generic record.
///
/// The target's own deserialization rules apply: missing required fields
/// or mismatched types fail with `Conversion`, and `#[serde(skip)]` fields
/// come back as their `Default`.
pub fn from_record<D: DeserializeOwned>(record: GenericRecord, side: Side) -> CopyResult<D> {
    serde_json::from_value(Value::Object(record)).map_err(|source| CopyError::Conversion { side, source })
}


/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Address {
        state: String,
        zip: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct User {
        connections: u32,
        location: Address,
        integration_key: Option<String>,
        #[serde(skip)]
        metadata: Vec<String>,
    }

    #[test]
    fn struct_projects_to_serialized_names() {
        let user = User {
            connections: 10,
            location: Address { state: "WV".into(), zip: "11111".into() },
            integration_key: None,
            metadata: vec!["hidden".into()],
        };
        let record = to_record(&user, Side::Source).unwrap();
        assert_eq!(record.get("connections"), Some(&json!(10)));
        assert_eq!(record.get("integrationKey"), Some(&Value::Null));
        assert_eq!(record.get("location"), Some(&json!({"state": "WV", "zip": "11111"})));
        assert!(!record.contains_key("metadata"));
        assert!(!record.contains_key("integration_key"));
    }

    #[test]
    fn round_trip_drops_skipped_fields() {
        let user = User {
            connections: 3,
            metadata: vec!["x".into()],
            ..User::default()
        };
        let record = to_record(&user, Side::Destination).unwrap();
        let back: User = from_record(record, Side::Destination).unwrap();
        assert_eq!(back.connections, 3);
        assert!(back.metadata.is_empty());
    }

    #[test]
    fn none_is_nil_object() {
        let err = to_record(&Option::<User>::None, Side::Source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NilObject);
    }

    #[test]
    fn primitives_and_sequences_are_not_records() {
        let err = to_record(&42, Side::Source).unwrap_err();
        assert!(matches!(err, CopyError::NotARecord { found: "number", .. }));

        let err = to_record(&vec![1, 2], Side::Destination).unwrap_err();
        assert!(matches!(
            err,
            CopyError::NotARecord { side: Side::Destination, found: "array" }
        ));
        assert_eq!(err.kind(), ErrorKind::Conversion);
    }

    #[test]
    fn map_values_project_directly() {
        let mut map = std::collections::BTreeMap::new();
        map.insert("a", 1);
        let record = to_record(&map, Side::Source).unwrap();
        assert_eq!(record.get("a"), Some(&json!(1)));
    }

    #[test]
    fn incompatible_shape_fails_reconstruction() {
        let record = json!({"connections": "many", "location": {"state": "NC", "zip": ""}})
            .as_object()
            .cloned()
            .unwrap();
        let err = from_record::<User>(record, Side::Destination).unwrap_err();
        assert!(matches!(err, CopyError::Conversion { side: Side::Destination, .. }));
    }

    #[test]
    fn integers_stay_integers() {
        let record = to_record(&json!({"n": 20}), Side::Source).unwrap();
        assert!(record["n"].is_u64());
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!(42)), "number");
        assert_eq!(value_type_name(&json!("hello")), "string");
        assert_eq!(value_type_name(&json!([1, 2, 3])), "array");
        assert_eq!(value_type_name(&json!({"a": 1})), "object");
    }
}
