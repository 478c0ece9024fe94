//! SGQL Core - Typed mirror framework for a remote GraphQL schema.
//!
//! This crate provides:
//! - A wire codec between JSON values and typed records (lenient numbers,
//!   enums by name, absent optionals omitted).
//! - Closed variant sets dispatched on `__typename` through static tables.
//! - The cursor pagination contract (`PageInfo`, edges, connections).
//! - The GraphQL response envelope.
//!
//! Leaf record types live in downstream crates and plug into these
//! frameworks through serde derives, [`variant_set!`] and [`Connection`].

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

mod codec;
mod config;
mod error;
pub mod lenient;
mod pagination;
pub mod registry;
mod response;

pub use codec::{LenientList, decode, decode_list_lenient, decode_str, describe, encode};
pub use config::{DecodeConfig, MismatchPolicy};
pub use error::{DecodeError, DecodeErrorKind, EncodeError, FieldPath, PathSegment};
pub use lenient::LenientNumber;
pub use pagination::{
    Connection, Cursor, Edge, EdgesConnection, Node, NodeIter, NodesAndEdgesConnection,
    NodesConnection, PageInfo, PageRequest, decode_connection, decode_connection_with,
};
pub use registry::{
    TYPENAME_KEY, Variant, VariantEntry, VariantSet, VariantTable, decode_variant, encode_variant,
};
pub use response::{
    GraphqlError, GraphqlErrorLocation, GraphqlResponse, ResponseError, decode_response,
};
