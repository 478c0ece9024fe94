//! SGQL Schema - Representative leaf records for the sgql framework.
//!
//! Records are plain serde structs whose fields are all optional. Schema
//! unions and interfaces are declared with [`sgql_core::variant_set!`], list
//! results are [`sgql_core::Connection`]s.
//!
//! Closed sets:
//! - [`CatalogObject`]
//! - [`InventoryChange`]
//! - [`MeasurementUnit`]
//! - [`OrderTender`]
//! - [`CustomAttributeValue`]
//! - [`CustomAttributeDefinitionConfig`]

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod catalog;
pub mod common;
pub mod custom_attribute;
pub mod inventory;
pub mod measurement;
pub mod order;
mod query;

pub use catalog::{CatalogObject, CatalogObjectConnection, CatalogObjectFields};
pub use common::{Currency, Money};
pub use custom_attribute::{
    CustomAttribute, CustomAttributeDefinition, CustomAttributeDefinitionConfig,
    CustomAttributeValue,
};
pub use inventory::{InventoryChange, InventoryChangeFields};
pub use measurement::MeasurementUnit;
pub use order::{Order, OrderTender, TenderFields};
pub use query::Query;
