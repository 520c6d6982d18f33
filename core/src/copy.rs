//! Copy orchestration. Both inputs are projected into generic records, each
//! requested leaf moves from source to destination, and the destination is
//! rebuilt.
//!
//! Paths are applied in the order given and the first failure aborts the
//! whole operation. A caller never observes a partially patched result.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CopyResult, Side};
use crate::path::DotPath;
use crate::record::{from_record, to_record, GenericRecord};

/// Copy the values at `paths` from `source` into a copy of `dest`.
///
/// Both values are converted to generic records, so `S` and `D` may be
/// unrelated types as long as every path exists in both. The returned
/// value is rebuilt from the patched record; `dest` itself is not touched.
pub fn copy_values_from_paths<S, D, P>(paths: &[P], source: &S, dest: &D) -> CopyResult<D>
where
    S: Serialize + ?Sized,
    D: Serialize + DeserializeOwned,
    P: AsRef<str>,
{
    let src = to_record(source, Side::Source)?;
    let dst = to_record(dest, Side::Destination)?;
    let patched = patch_record(paths, &src, dst)?;
    from_record(patched, Side::Destination)
}

/// Copy the values at `paths` from one generic record into another.
///
/// Takes `dest` by value and hands back the patched record, so on error the
/// partially patched map is dropped rather than returned. Keys in `dest`
/// that no path names are preserved as-is.
pub fn patch_record<P: AsRef<str>>(
    paths: &[P],
    source: &GenericRecord,
    mut dest: GenericRecord,
) -> CopyResult<GenericRecord> {
    let paths = parse_paths(paths)?;
    for path in &paths {
        copy_path(path, source, &mut dest)?;
    }
    Ok(dest)
}

/// Copy a single leaf from `source` into `dest`.
pub fn copy_path(path: &DotPath, source: &GenericRecord, dest: &mut GenericRecord) -> CopyResult<()> {
    let value = path.read(source)?;
    tracing::debug!(%path, "copying path");
    path.write(dest, value.clone())
}

/// Validate every path up front so an empty path fails before any copying.
fn parse_paths<P: AsRef<str>>(paths: &[P]) -> CopyResult<Vec<DotPath>> {
    paths.iter().map(|p| DotPath::parse(p.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CopyError, ErrorKind};
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Address {
        state: String,
        zip: String,
        unit: Option<String>,
        street: String,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct User {
        connections: i64,
        location: Address,
        name: String,
        integration_key: Option<String>,
    }

    #[derive(Debug, Clone, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct RequestUser {
        #[serde(skip)]
        metadata: Option<std::collections::HashMap<String, String>>,
        connections: i64,
        location: Address,
        name: String,
        integration_key: Option<String>,
        additional_info: String,
    }

    fn dest_user() -> User {
        User {
            connections: 10,
            location: Address {
                state: "WV".into(),
                zip: "11111".into(),
                unit: Some("Unit 202".into()),
                street: "2020 Vision Dr".into(),
            },
            name: "Test User".into(),
            integration_key: Some("C0UFJ-ASDFE".into()),
        }
    }

    #[test]
    fn single_path() {
        let source = RequestUser {
            connections: 20,
            location: Address { state: "NC".into(), ..Address::default() },
            ..RequestUser::default()
        };
        let got = copy_values_from_paths(&["location.state"], &source, &dest_user()).unwrap();

        let mut want = dest_user();
        want.location.state = "NC".into();
        assert_eq!(got, want);
    }

    #[test]
    fn every_possible_path() {
        let source = RequestUser {
            metadata: None,
            connections: 20,
            location: Address {
                state: "NC".into(),
                zip: "22222".into(),
                unit: Some("Unit 3000".into()),
                street: "202 Baker Street".into(),
            },
            name: "Test User 2".into(),
            integration_key: Some("C0UFJ-TEST".into()),
            additional_info: "This object can be copied over now".into(),
        };
        let paths = [
            "location.state",
            "location.zip",
            "location.unit",
            "location.street",
            "connections",
            "name",
            "integrationKey",
        ];
        let got = copy_values_from_paths(&paths, &source, &dest_user()).unwrap();
        assert_eq!(
            got,
            User {
                connections: 20,
                location: source.location.clone(),
                name: "Test User 2".into(),
                integration_key: Some("C0UFJ-TEST".into()),
            }
        );
    }

    #[test]
    fn copies_null_over_value() {
        let source = RequestUser::default();
        let got = copy_values_from_paths(&["integrationKey"], &source, &dest_user()).unwrap();
        assert_eq!(got.integration_key, None);
        assert_eq!(got.name, "Test User");
    }

    #[test]
    fn zero_paths_returns_equal_dest() {
        let got = copy_values_from_paths::<_, _, &str>(&[], &RequestUser::default(), &dest_user()).unwrap();
        assert_eq!(got, dest_user());
    }

    #[test]
    fn dest_argument_is_not_modified() {
        let dest = dest_user();
        let source = json!({"name": "Other"});
        let got = copy_values_from_paths(&["name"], &source, &dest).unwrap();
        assert_eq!(got.name, "Other");
        assert_eq!(dest, dest_user());
    }

    #[test]
    fn path_only_in_source_fails() {
        let source = RequestUser::default();
        let err = copy_values_from_paths(&["additionalInfo"], &source, &dest_user()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PathNotFound);
        assert_eq!(err.path(), Some("additionalInfo"));
    }

    #[test]
    fn empty_path_fails_before_copying() {
        let err = copy_values_from_paths(&["name", ""], &json!({"name": "a"}), &dest_user()).unwrap_err();
        assert!(matches!(err, CopyError::EmptyPath));
    }

    #[test]
    fn nil_source_and_dest_are_rejected() {
        let none: Option<User> = None;
        let err = copy_values_from_paths(&["name"], &none, &dest_user()).unwrap_err();
        assert!(matches!(err, CopyError::NilObject { side: Side::Source }));

        let err = copy_values_from_paths(&["name"], &dest_user(), &none).unwrap_err();
        assert!(matches!(err, CopyError::NilObject { side: Side::Destination }));
    }

    #[test]
    fn incompatible_leaf_type_fails_on_rebuild() {
        let source = json!({"connections": "lots"});
        let err = copy_values_from_paths(&["connections"], &source, &dest_user()).unwrap_err();
        assert!(matches!(err, CopyError::Conversion { side: Side::Destination, .. }));
    }

    #[test]
    fn patch_record_preserves_unknown_keys() {
        let source = json!({"a": {"b": 5}}).as_object().cloned().unwrap();
        let dest = json!({"a": {"b": 0, "extra": true}, "untyped": [1, 2]})
            .as_object()
            .cloned()
            .unwrap();
        let got = patch_record(&["a.b"], &source, dest).unwrap();
        assert_eq!(
            Value::Object(got),
            json!({"a": {"b": 5, "extra": true}, "untyped": [1, 2]})
        );
    }

    #[test]
    fn copy_path_writes_single_leaf() {
        let source = json!({"n": 1, "m": 2}).as_object().cloned().unwrap();
        let mut dest = json!({"n": 0, "m": 0}).as_object().cloned().unwrap();
        copy_path(&DotPath::parse("m").unwrap(), &source, &mut dest).unwrap();
        assert_eq!(Value::Object(dest), json!({"n": 0, "m": 2}));
    }
}
