//! SGQL Test Kit - Testing utilities for typed GraphQL schema mirrors
//!
//! This crate provides:
//!
//! - JSON fixtures for connections, variant payloads and response envelopes
//! - Assertion helpers for decode results and wire round trips
//! - Tracing configuration for test output and [`TracingCapture`] for
//!   asserting on logged events
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use sgql_testkit::{TracingCapture, fixtures};
//!
//! #[test]
//! fn stale_nodes_are_reported() {
//!     sgql_testkit::init_test_tracing();
//!
//!     let rows = vec![json!({"id": "a"}), json!({"id": "b"})];
//!     let capture = TracingCapture::new();
//!     let page = capture.run(|| {
//!         sgql_core::decode_connection(
//!             fixtures::mismatched_connection(rows, 1, json!({"id": "stale"})),
//!             sgql_core::decode::<Row>,
//!         )
//!     });
//!
//!     assert!(page.is_ok());
//!     assert!(capture.has_warnings());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

mod assertions;
pub mod fixtures;
mod tracing_config;

pub use assertions::*;
pub use tracing_config::*;
