//! Error types for decoding and encoding schema values.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Expectation string the lenient number visitor reports on failure.
pub(crate) const EXPECTING_NUMERIC: &str = "a number or numeric string";

/// Message prefix the lenient number serializer reports for NaN and infinities.
pub(crate) const NON_FINITE_NUMBER: &str = "non-finite number";

/// Field path segment.
///
/// Shared by decode errors and the `path` of GraphQL errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Field name.
    Key(String),
    /// List index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Location of a value inside a decoded document, outermost segment first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The document root.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from segments.
    #[must_use]
    pub const fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// Returns `true` for the document root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Prepend `outer` to this path.
    #[must_use]
    pub fn within(mut self, outer: &Self) -> Self {
        let mut segments = outer.0.clone();
        segments.append(&mut self.0);
        Self(segments)
    }

    fn prepend(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 && matches!(segment, PathSegment::Key(_)) {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// What went wrong while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// The JSON shape does not match the statically expected type.
    #[error("expected {expected}, found {actual}")]
    ShapeMismatch {
        /// Expected shape.
        expected: String,
        /// Shape found in the input.
        actual: String,
    },

    /// An enum field carried a name outside the enumeration.
    #[error("unrecognized enum value `{value}`, expected {expected}")]
    UnrecognizedEnumValue {
        /// Name found in the input.
        value: String,
        /// Accepted names.
        expected: String,
    },

    /// A polymorphic value carried no `__typename`.
    #[error("missing `__typename` discriminator for {set}")]
    MissingDiscriminator {
        /// Variant set being decoded.
        set: &'static str,
    },

    /// A polymorphic value carried a `__typename` outside its variant set.
    #[error("unknown variant `{tag}` for {set}")]
    UnknownVariant {
        /// Variant set being decoded.
        set: &'static str,
        /// Discriminator found in the input.
        tag: String,
    },

    /// A numeric field could not be parsed.
    #[error("cannot parse {value} as a number")]
    NumericParseFailure {
        /// Offending input.
        value: String,
    },

    /// `nodes` and `edges` of a connection disagree (strict policy only).
    #[error("connection nodes disagree with edges at index {index}")]
    ConnectionMismatch {
        /// First differing index.
        index: usize,
    },
}

impl DecodeErrorKind {
    /// Shape mismatch helper.
    pub fn shape(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Classify a serde data-error message.
    ///
    /// serde reports type, enum and value failures through fixed message
    /// formats; everything unrecognized is a shape mismatch.
    pub(crate) fn from_serde_message(message: &str) -> Self {
        if let Some(rest) = message.strip_prefix("unknown variant ") {
            let (value, expected) = rest.split_once(", expected ").map_or_else(
                || {
                    rest.split_once(", there are no variants")
                        .map_or((rest, "no variants"), |(value, _)| (value, "no variants"))
                },
                |(value, expected)| (value, expected),
            );
            return Self::UnrecognizedEnumValue {
                value: value.trim_matches('`').to_string(),
                expected: expected.to_string(),
            };
        }

        if let Some(rest) = message.strip_prefix("invalid value: ") {
            if let Some((unexpected, expected)) = rest.split_once(", expected ") {
                if expected == EXPECTING_NUMERIC {
                    return Self::NumericParseFailure {
                        value: unquote(unexpected),
                    };
                }
                return Self::shape(expected, unexpected);
            }
        }

        if let Some(rest) = message.strip_prefix("invalid type: ") {
            if let Some((unexpected, expected)) = rest.split_once(", expected ") {
                return Self::shape(expected, unexpected);
            }
        }

        if let Some(field) = message.strip_prefix("missing field ") {
            return Self::shape(format!("field {field}"), "absent");
        }

        if let Some(rest) = message.strip_prefix("invalid length ") {
            if let Some((actual, expected)) = rest.split_once(", expected ") {
                return Self::shape(expected, format!("length {actual}"));
            }
        }

        Self::shape("a decodable value", message)
    }
}

/// Strip serde's `string "..."` rendering down to the raw text.
fn unquote(unexpected: &str) -> String {
    unexpected
        .strip_prefix("string ")
        .map_or(unexpected, |quoted| quoted.trim_matches('"'))
        .to_string()
}

/// Decode failure with the path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("decode failed at {path}: {kind}")]
pub struct DecodeError {
    /// Location of the offending field.
    pub path: FieldPath,
    /// Failure classification.
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    /// Create an error at the document root.
    #[must_use]
    pub const fn new(kind: DecodeErrorKind) -> Self {
        Self {
            path: FieldPath::root(),
            kind,
        }
    }

    /// Create an error at a given path.
    #[must_use]
    pub const fn at_path(path: FieldPath, kind: DecodeErrorKind) -> Self {
        Self { path, kind }
    }

    /// Prefix the path with an object key.
    #[must_use]
    pub fn in_field(mut self, key: impl Into<String>) -> Self {
        self.path.prepend(PathSegment::Key(key.into()));
        self
    }

    /// Prefix the path with a list index.
    #[must_use]
    pub fn in_index(mut self, index: usize) -> Self {
        self.path.prepend(PathSegment::Index(index));
        self
    }

    /// Prefix the path with an outer path.
    #[must_use]
    pub fn within(mut self, outer: &FieldPath) -> Self {
        self.path = self.path.within(outer);
        self
    }

    /// Returns `true` for `UnknownVariant` and `MissingDiscriminator`.
    #[must_use]
    pub const fn is_variant_error(&self) -> bool {
        matches!(
            self.kind,
            DecodeErrorKind::UnknownVariant { .. } | DecodeErrorKind::MissingDiscriminator { .. }
        )
    }
}

/// Encode failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// serde_json rejected the value.
    #[error("JSON encoding failed: {0}")]
    Json(String),

    /// NaN or an infinity, which has no JSON representation.
    #[error("non-finite number {value}")]
    NonFiniteNumber {
        /// Rendering of the offending value.
        value: String,
    },

    /// A variant payload did not encode to a JSON object.
    #[error("variant `{tag}` of {set} did not encode to an object")]
    NonObjectVariant {
        /// Variant set.
        set: &'static str,
        /// Variant tag.
        tag: &'static str,
    },

    /// The registry entry for a tag did not match the payload it was given.
    #[error("{set} value does not hold a `{tag}` payload")]
    TagMismatch {
        /// Variant set.
        set: &'static str,
        /// Variant tag.
        tag: &'static str,
    },
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        match message.strip_prefix(NON_FINITE_NUMBER) {
            Some(value) => Self::NonFiniteNumber {
                value: value.trim().to_string(),
            },
            None => Self::Json(message),
        }
    }
}
