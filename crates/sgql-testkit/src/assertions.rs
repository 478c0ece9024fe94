//! Assertion helpers for decode and encode testing.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sgql_core::{DecodeError, DecodeErrorKind, VariantSet};

// ─────────────────────────────────────────────────────────────────────────────
// Decode Assertions
// ─────────────────────────────────────────────────────────────────────────────

/// Assert that a decode succeeded and return the value.
///
/// # Panics
///
/// Panics if the result is an error.
pub fn assert_decoded<T: Debug>(result: Result<T, DecodeError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected successful decode but got: {err}"),
    }
}

/// Assert that a decode failed at `path` and return the error kind.
///
/// # Panics
///
/// Panics if the result is Ok or the error names a different path.
pub fn assert_decode_error<T: Debug>(result: Result<T, DecodeError>, path: &str) -> DecodeErrorKind {
    match result {
        Ok(value) => panic!("Expected decode error at '{path}' but got Ok({value:?})"),
        Err(err) => {
            assert_eq!(
                err.path.to_string(),
                path,
                "Expected decode error at '{path}' but got: {err}"
            );
            err.kind
        }
    }
}

/// Assert that a decode failed with `UnknownVariant` for `tag`.
///
/// # Panics
///
/// Panics if the result is Ok or a different error.
pub fn assert_unknown_variant<T: Debug>(result: Result<T, DecodeError>, tag: &str) {
    match result {
        Err(DecodeError {
            kind: DecodeErrorKind::UnknownVariant { tag: actual, .. },
            ..
        }) if actual == tag => {}
        other => panic!("Expected UnknownVariant '{tag}' but got: {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire Assertions
// ─────────────────────────────────────────────────────────────────────────────

/// Assert that no object member anywhere in `value` is `null`.
///
/// # Panics
///
/// Panics naming the first null member found.
pub fn assert_no_nulls(value: &Value) {
    fn walk(value: &Value, path: &str) {
        match value {
            Value::Object(fields) => {
                for (key, member) in fields {
                    let path = format!("{path}.{key}");
                    assert!(!member.is_null(), "Expected no null members but found {path}");
                    walk(member, &path);
                }
            }
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    walk(item, &format!("{path}[{index}]"));
                }
            }
            _ => {}
        }
    }

    walk(value, "<root>");
}

/// Assert `decode(encode(value)) == value` and return the encoded form.
///
/// Also asserts that the encoded form carries no null members.
///
/// # Panics
///
/// Panics if encoding fails, decoding fails, or the values differ.
pub fn assert_round_trip<T>(value: &T) -> Value
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let encoded = match sgql_core::encode(value) {
        Ok(encoded) => encoded,
        Err(err) => panic!("Expected {value:?} to encode but got: {err}"),
    };
    assert_no_nulls(&encoded);
    let decoded: T = match sgql_core::decode(encoded.clone()) {
        Ok(decoded) => decoded,
        Err(err) => panic!("Expected {encoded} to decode but got: {err}"),
    };
    assert_eq!(&decoded, value, "round trip changed the value; wire form: {encoded}");
    encoded
}

/// Assert that decoding `wire` and encoding it again reproduces `wire`.
///
/// Only holds for wire documents already in canonical form (native
/// numbers, no null members).
///
/// # Panics
///
/// Panics if decoding or encoding fails, or the documents differ.
pub fn assert_wire_stable<T>(wire: &Value) -> T
where
    T: Serialize + DeserializeOwned + Debug,
{
    let decoded: T = assert_decoded(sgql_core::decode(wire.clone()));
    match sgql_core::encode(&decoded) {
        Ok(encoded) => assert_eq!(&encoded, wire, "re-encoding changed the document"),
        Err(err) => panic!("Expected {decoded:?} to encode but got: {err}"),
    }
    decoded
}

// ─────────────────────────────────────────────────────────────────────────────
// Variant Assertions
// ─────────────────────────────────────────────────────────────────────────────

/// Assert that `value` holds exactly the variant tagged `tag`.
///
/// Checks the tag and that the tag is registered in the set's table.
///
/// # Panics
///
/// Panics on a different tag or an unregistered one.
pub fn assert_variant<S: VariantSet + Debug>(value: &S, tag: &str) {
    assert_eq!(value.tag(), tag, "Expected variant '{tag}' but got: {value:?}");
    assert!(
        S::table().get(tag).is_some(),
        "Variant '{tag}' is not registered in {}",
        S::SET_NAME
    );
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn no_nulls_accepts_clean_documents() {
        assert_no_nulls(&json!({"a": 1, "b": [{"c": "d"}], "e": [null]}));
    }

    #[test]
    #[should_panic(expected = "<root>.b[0].c")]
    fn no_nulls_names_the_member() {
        assert_no_nulls(&json!({"a": 1, "b": [{"c": null}]}));
    }

    #[test]
    fn decode_error_returns_kind() {
        let result: Result<u8, DecodeError> = Err(DecodeError::new(DecodeErrorKind::shape("a", "b")).in_field("x"));
        let kind = assert_decode_error(result, "x");
        assert!(matches!(kind, DecodeErrorKind::ShapeMismatch { .. }));
    }
}
