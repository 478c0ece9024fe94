//! GraphQL response envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::codec::{self, describe};
use crate::error::{DecodeError, DecodeErrorKind, PathSegment};

/// GraphQL error location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
    /// Line number in the query (1-based).
    pub line: u32,
    /// Column number in the query (1-based).
    pub column: u32,
}

/// GraphQL error as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    pub message: String,
    /// Location(s) within the query.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphqlErrorLocation>,
    /// Path within the response where the error occurred.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
    /// Extensions metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// GraphQL response container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphqlResponse<T> {
    /// Response data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// GraphQL errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
    /// Extensions payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Failure to extract `data` from a response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResponseError {
    /// The server reported errors.
    #[error("GraphQL errors: {}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),

    /// Neither data nor errors were returned.
    #[error("response carried no data")]
    MissingData,
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl<T> GraphqlResponse<T> {
    /// Returns `true` if no GraphQL errors were returned.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Take `data`, failing if the server reported any error.
    ///
    /// Partial data alongside errors is discarded; read `data` directly to
    /// keep it.
    pub fn into_data(self) -> Result<T, ResponseError> {
        if !self.errors.is_empty() {
            return Err(ResponseError::Graphql(self.errors));
        }
        self.data.ok_or(ResponseError::MissingData)
    }
}

/// Decode a response document, `data` through the wire codec.
///
/// Paths of data decode failures start at `data`.
pub fn decode_response<T: DeserializeOwned>(value: Value) -> Result<GraphqlResponse<T>, DecodeError> {
    let Value::Object(mut fields) = value else {
        return Err(DecodeError::new(DecodeErrorKind::shape(
            "response object",
            describe(&value),
        )));
    };

    let data = match fields.remove("data") {
        None | Some(Value::Null) => None,
        Some(data) => Some(codec::decode::<T>(data).map_err(|err| err.in_field("data"))?),
    };
    let errors = match fields.remove("errors") {
        None | Some(Value::Null) => Vec::new(),
        Some(errors) => {
            codec::decode::<Vec<GraphqlError>>(errors).map_err(|err| err.in_field("errors"))?
        }
    };
    let extensions = fields.remove("extensions").filter(|value| !value.is_null());

    Ok(GraphqlResponse {
        data,
        errors,
        extensions,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Viewer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, with = "crate::lenient", skip_serializing_if = "Option::is_none")]
        age: Option<u32>,
    }

    #[test]
    fn data_is_decoded_through_the_codec() {
        let response: GraphqlResponse<Viewer> =
            decode_response(json!({"data": {"name": "ada", "age": "36"}})).unwrap();
        assert!(response.is_ok());
        assert_eq!(
            response.into_data().unwrap(),
            Viewer {
                name: Some("ada".into()),
                age: Some(36)
            }
        );
    }

    #[test]
    fn data_errors_are_prefixed() {
        let err = decode_response::<Viewer>(json!({"data": {"age": "old"}})).unwrap_err();
        assert_eq!(err.path.to_string(), "data.age");
        assert_eq!(
            err.kind,
            DecodeErrorKind::NumericParseFailure { value: "old".into() }
        );
    }

    #[test]
    fn graphql_errors_win_over_partial_data() {
        let response: GraphqlResponse<Viewer> = decode_response(json!({
            "data": {"name": "ada"},
            "errors": [{
                "message": "age is restricted",
                "locations": [{"line": 1, "column": 9}],
                "path": ["viewer", "age"]
            }]
        }))
        .unwrap();
        assert!(!response.is_ok());
        assert_eq!(
            response.errors[0].path,
            vec![
                PathSegment::Key("viewer".into()),
                PathSegment::Key("age".into())
            ]
        );
        let err = response.into_data().unwrap_err();
        assert_eq!(err.to_string(), "GraphQL errors: age is restricted");
    }

    #[test]
    fn empty_envelope_has_no_data() {
        let response: GraphqlResponse<Viewer> = decode_response(json!({"data": null})).unwrap();
        assert_eq!(response.into_data(), Err(ResponseError::MissingData));
    }

    #[test]
    fn error_paths_accept_indices() {
        let error: GraphqlError =
            serde_json::from_value(json!({"message": "boom", "path": ["items", 2, "id"]})).unwrap();
        assert_eq!(error.path[1], PathSegment::Index(2));
    }
}
