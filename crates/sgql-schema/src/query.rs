//! Root query record.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogObject, CatalogObjectConnection};
use crate::custom_attribute::{CustomAttributeConnection, CustomAttributeDefinitionConnection};
use crate::inventory::InventoryChangeConnection;
use crate::order::OrderConnection;

/// `data` of a query document.
///
/// Only the root fields a document selected are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Catalog objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogObjectConnection>,

    /// A single catalog object by ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object: Option<CatalogObject>,

    /// Orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<OrderConnection>,

    /// Inventory changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_changes: Option<InventoryChangeConnection>,

    /// Merchant custom attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_custom_attributes: Option<CustomAttributeConnection>,

    /// Merchant custom attribute definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_custom_attribute_definitions: Option<CustomAttributeDefinitionConnection>,
}
