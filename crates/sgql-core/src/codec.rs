//! Wire codec: JSON values to typed schema values and back.

use std::cell::RefCell;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;
use tracing::debug;

use crate::error::{DecodeError, DecodeErrorKind, EncodeError, FieldPath, PathSegment};

thread_local! {
    // Structured failure raised inside a nested serde impl (variant sets,
    // connections). serde can only carry a message across its error type, so
    // the full error waits here, keyed by that message, until the enclosing
    // `decode` picks it up.
    static NESTED_FAILURE: RefCell<Option<(String, DecodeError)>> = const { RefCell::new(None) };
}

/// Park a structured error for the enclosing [`decode`] call and return the
/// message to hand to `serde::de::Error::custom`.
pub(crate) fn hand_off(err: DecodeError) -> String {
    let message = err.to_string();
    NESTED_FAILURE.with(|slot| *slot.borrow_mut() = Some((message.clone(), err)));
    message
}

/// Take the parked error if it is the one that produced `message`.
///
/// A parked error whose message differs was recovered from by an outer
/// impl (an untagged enum, a caller fallback) and is dropped.
fn take_handed_off(message: &str) -> Option<DecodeError> {
    NESTED_FAILURE
        .with(|slot| slot.borrow_mut().take())
        .and_then(|(parked, err)| (parked == message).then_some(err))
}

fn clear_handed_off() {
    NESTED_FAILURE.with(|slot| slot.borrow_mut().take());
}

/// Short name of a JSON value's shape, used in shape mismatch errors.
#[must_use]
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a JSON value into a statically known type.
///
/// Decoding is all-or-nothing: the first failing field aborts the whole value
/// and the error names that field's path.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    clear_handed_off();
    serde_path_to_error::deserialize(value).map_err(from_path_error)
}

/// Decode raw JSON text.
pub fn decode_str<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(text).map_err(|err| {
        DecodeError::new(DecodeErrorKind::shape("a JSON document", err.to_string()))
    })?;
    decode(value)
}

fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let path = field_path(err.path());
    let message = err.inner().to_string();
    if let Some(nested) = take_handed_off(&message) {
        return nested.within(&path);
    }
    DecodeError::at_path(path, DecodeErrorKind::from_serde_message(&message))
}

fn field_path(path: &serde_path_to_error::Path) -> FieldPath {
    FieldPath::from_segments(
        path.iter()
            .filter_map(|segment| match segment {
                Segment::Seq { index } => Some(PathSegment::Index(*index)),
                Segment::Map { key } => Some(PathSegment::Key(key.clone())),
                Segment::Enum { variant } => Some(PathSegment::Key(variant.clone())),
                Segment::Unknown => None,
            })
            .collect(),
    )
}

/// Encode a typed value to JSON.
///
/// Absent optionals never appear in the output: object members that encode to
/// `null` are dropped.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value, EncodeError> {
    let mut encoded = serde_json::to_value(value)?;
    prune_nulls(&mut encoded);
    Ok(encoded)
}

fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}

/// Result of decoding a list element by element.
#[derive(Debug, Clone, PartialEq)]
pub struct LenientList<T> {
    /// Successfully decoded elements, in input order.
    pub items: Vec<T>,
    /// One error per skipped element, path prefixed with its index.
    pub skipped: Vec<DecodeError>,
}

impl<T> LenientList<T> {
    /// Returns `true` if every element decoded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Decode a JSON array element by element, skipping elements that fail.
///
/// The array itself must be present and an array; element failures (for
/// example an unknown `__typename`) are collected instead of aborting.
pub fn decode_list_lenient<T, F>(value: Value, decoder: F) -> Result<LenientList<T>, DecodeError>
where
    F: Fn(Value) -> Result<T, DecodeError>,
{
    let Value::Array(elements) = value else {
        return Err(DecodeError::new(DecodeErrorKind::shape(
            "array",
            describe(&value),
        )));
    };

    let mut items = Vec::with_capacity(elements.len());
    let mut skipped = Vec::new();
    for (index, element) in elements.into_iter().enumerate() {
        match decoder(element) {
            Ok(item) => items.push(item),
            Err(err) => {
                let err = err.in_index(index);
                debug!(path = %err.path, error = %err.kind, "skipping undecodable list element");
                skipped.push(err);
            }
        }
    }

    Ok(LenientList { items, skipped })
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    enum Size {
        Small,
        ExtraLarge,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Cup {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Size>,
        #[serde(default, with = "crate::lenient", skip_serializing_if = "Option::is_none")]
        ounces: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        refills: Option<Vec<Cup>>,
    }

    #[test]
    fn decodes_enum_by_symbolic_name() {
        let cup: Cup = decode(json!({"size": "EXTRA_LARGE"})).unwrap();
        assert_eq!(cup.size, Some(Size::ExtraLarge));
    }

    #[test]
    fn unknown_enum_name_is_an_error_with_path() {
        let err = decode::<Cup>(json!({"refills": [{"size": "SMALL"}, {"size": "VENTI"}]}))
            .unwrap_err();
        assert_eq!(err.path.to_string(), "refills[1].size");
        assert!(matches!(
            err.kind,
            DecodeErrorKind::UnrecognizedEnumValue { ref value, .. } if value == "VENTI"
        ));
    }

    #[test]
    fn numeric_failure_names_the_field() {
        let err = decode::<Cup>(json!({"ounces": "twelve"})).unwrap_err();
        assert_eq!(err.path.to_string(), "ounces");
        assert_eq!(
            err.kind,
            DecodeErrorKind::NumericParseFailure {
                value: "twelve".into()
            }
        );
    }

    #[test]
    fn shape_mismatch_for_wrong_container() {
        let err = decode::<Cup>(json!({"refills": {"size": "SMALL"}})).unwrap_err();
        assert_eq!(err.path.to_string(), "refills");
        assert!(matches!(err.kind, DecodeErrorKind::ShapeMismatch { .. }));
    }

    #[test]
    fn encode_omits_absent_fields() {
        let cup = Cup {
            name: Some("Latte".into()),
            size: None,
            ounces: Some(12),
            refills: None,
        };
        assert_eq!(encode(&cup).unwrap(), json!({"name": "Latte", "ounces": 12}));
    }

    #[test]
    fn encode_drops_null_members_without_skip_attributes() {
        #[derive(Serialize)]
        struct Loose {
            a: Option<u8>,
            b: Vec<Option<u8>>,
        }
        let encoded = encode(&Loose {
            a: None,
            b: vec![None, Some(1)],
        })
        .unwrap();
        assert_eq!(encoded, json!({"b": [null, 1]}));
    }

    #[test]
    fn encode_rejects_non_finite_numbers_instead_of_dropping_them() {
        #[derive(Serialize)]
        struct Gauge {
            #[serde(with = "crate::lenient")]
            reading: Option<f64>,
        }

        let err = encode(&Gauge {
            reading: Some(f64::NAN),
        })
        .unwrap_err();
        assert_eq!(err, EncodeError::NonFiniteNumber { value: "NaN".into() });

        let err = encode(&Gauge {
            reading: Some(f64::NEG_INFINITY),
        })
        .unwrap_err();
        assert_eq!(err, EncodeError::NonFiniteNumber { value: "-inf".into() });

        assert_eq!(
            encode(&Gauge { reading: Some(0.5) }).unwrap(),
            json!({"reading": 0.5})
        );
    }

    #[test]
    fn decode_str_reports_syntax_errors_at_root() {
        let err = decode_str::<Cup>("{\"name\": ").unwrap_err();
        assert!(err.path.is_root());
        assert!(matches!(err.kind, DecodeErrorKind::ShapeMismatch { .. }));
    }

    #[test]
    fn lenient_list_keeps_order_and_collects_failures() {
        let list = decode_list_lenient(
            json!([{"name": "a"}, {"size": "HUGE"}, {"name": "c"}]),
            decode::<Cup>,
        )
        .unwrap();
        let names: Vec<_> = list.items.iter().filter_map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(list.skipped.len(), 1);
        assert_eq!(list.skipped[0].path.to_string(), "[1].size");
        assert!(!list.is_complete());
    }
}
