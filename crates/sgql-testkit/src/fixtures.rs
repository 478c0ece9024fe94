//! Test fixtures for wire documents.
//!
//! Provides pre-built JSON values in the shapes the schema exchanges.

use serde_json::{Value, json};

// ─────────────────────────────────────────────────────────────────────────────
// Page Info Fixtures
// ─────────────────────────────────────────────────────────────────────────────

/// Page info of a page with more results after it.
#[must_use]
pub fn page_info_with_next(end_cursor: &str) -> Value {
    json!({
        "hasNextPage": true,
        "hasPreviousPage": false,
        "endCursor": end_cursor
    })
}

/// Page info of the terminal page.
#[must_use]
pub fn terminal_page_info() -> Value {
    json!({"hasNextPage": false, "hasPreviousPage": true})
}

// ─────────────────────────────────────────────────────────────────────────────
// Connection Fixtures
// ─────────────────────────────────────────────────────────────────────────────

/// Connection exposing `nodes` only.
#[must_use]
pub fn nodes_connection(nodes: Vec<Value>, page_info: Value) -> Value {
    json!({"pageInfo": page_info, "nodes": nodes})
}

/// Connection exposing `edges` only; cursors are `c1`, `c2`, ...
#[must_use]
pub fn edges_connection(nodes: Vec<Value>, page_info: Value) -> Value {
    json!({"pageInfo": page_info, "edges": edges(nodes)})
}

/// Connection exposing consistent `nodes` and `edges`.
#[must_use]
pub fn nodes_and_edges_connection(nodes: Vec<Value>, page_info: Value) -> Value {
    json!({"pageInfo": page_info, "nodes": nodes.clone(), "edges": edges(nodes)})
}

/// Connection whose `nodes` disagree with its `edges` at `index`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[must_use]
pub fn mismatched_connection(nodes: Vec<Value>, index: usize, stale: Value) -> Value {
    let mut stale_nodes = nodes.clone();
    stale_nodes[index] = stale;
    json!({"pageInfo": terminal_page_info(), "nodes": stale_nodes, "edges": edges(nodes)})
}

/// Empty terminal page.
#[must_use]
pub fn empty_connection() -> Value {
    json!({"pageInfo": {"hasNextPage": false, "hasPreviousPage": false}, "nodes": []})
}

fn edges(nodes: Vec<Value>) -> Vec<Value> {
    nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| json!({"cursor": format!("c{}", index + 1), "node": node}))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Variant Fixtures
// ─────────────────────────────────────────────────────────────────────────────

/// Common wire payloads.
pub mod json {
    use serde_json::{Value, json};

    /// Attach `__typename` to an object payload.
    ///
    /// # Panics
    ///
    /// Panics if `payload` is not an object.
    #[must_use]
    pub fn typed(tag: &str, payload: Value) -> Value {
        let Value::Object(mut fields) = payload else {
            panic!("typed payload must be an object, got {payload}");
        };
        fields.insert("__typename".to_string(), Value::String(tag.to_string()));
        Value::Object(fields)
    }

    /// Money with a numeric-string amount.
    #[must_use]
    pub fn money(amount: &str, currency: &str) -> Value {
        json!({"amount": amount, "currency": currency})
    }

    /// A catalog item with one variation.
    #[must_use]
    pub fn catalog_item(id: &str, name: &str) -> Value {
        json!({
            "__typename": "CatalogItem",
            "id": id,
            "version": "1717171717",
            "isDeleted": false,
            "presentAtAllLocations": true,
            "name": name,
            "productType": "FOOD",
            "variations": [{
                "id": format!("{id}-regular"),
                "itemId": id,
                "name": "Regular",
                "ordinal": 1,
                "pricingType": "FIXED_PRICING",
                "priceMoney": money("450", "USD")
            }]
        })
    }

    /// A catalog category.
    #[must_use]
    pub fn catalog_category(id: &str, name: &str) -> Value {
        json!({
            "__typename": "CatalogCategory",
            "id": id,
            "version": 3,
            "name": name,
            "categoryType": "REGULAR_CATEGORY"
        })
    }

    /// A catalog measurement unit holding a custom unit.
    #[must_use]
    pub fn catalog_measurement_unit(id: &str) -> Value {
        json!({
            "__typename": "CatalogMeasurementUnit",
            "id": id,
            "precision": "2",
            "measurementUnit": {
                "__typename": "MeasurementUnitCustom",
                "name": "bushel",
                "abbreviation": "bsh"
            }
        })
    }

    /// An order paid by card and cash.
    #[must_use]
    pub fn order_with_tenders(id: &str) -> Value {
        json!({
            "id": id,
            "state": "COMPLETED",
            "version": 4,
            "totalMoney": money("1000", "USD"),
            "lineItems": [{
                "uid": "line-1",
                "name": "Latte",
                "quantity": "2",
                "basePriceMoney": money("500", "USD")
            }],
            "tenders": [
                {
                    "__typename": "OrderTenderCard",
                    "id": "tender-card",
                    "amountMoney": money("600", "USD"),
                    "cardBrand": "VISA",
                    "last4": "1111",
                    "entryMethod": "CONTACTLESS"
                },
                {
                    "__typename": "OrderTenderCash",
                    "id": "tender-cash",
                    "amountMoney": {"amount": 400, "currency": "USD"},
                    "buyerTenderedMoney": money("500", "USD"),
                    "changeBackMoney": money("100", "USD")
                }
            ]
        })
    }

    /// An inventory adjustment from `IN_STOCK` to `SOLD`.
    #[must_use]
    pub fn inventory_adjustment(id: &str, catalog_object_id: &str) -> Value {
        json!({
            "__typename": "InventoryAdjustment",
            "id": id,
            "fromState": "IN_STOCK",
            "toState": "SOLD",
            "locationId": "main",
            "catalogObjectId": catalog_object_id,
            "quantity": "1",
            "occurredAt": "2024-05-01T12:00:00Z"
        })
    }

    /// A selection custom attribute with its definition.
    #[must_use]
    pub fn selection_custom_attribute(key: &str) -> Value {
        json!({
            "key": key,
            "version": "2",
            "visibility": "VISIBILITY_READ_WRITE_VALUES",
            "value": {
                "__typename": "CustomAttributeValueSelection",
                "selectedUids": ["opt-oat"]
            },
            "definition": {
                "key": key,
                "name": "Milk",
                "config": {
                    "__typename": "CustomAttributeDefinitionSelectionConfig",
                    "maxAllowedSelections": 1,
                    "allowedSelections": [
                        {"uid": "opt-oat", "name": "Oat"},
                        {"uid": "opt-whole", "name": "Whole"}
                    ]
                }
            }
        })
    }

    /// A response envelope carrying `data`.
    #[must_use]
    pub fn response(data: Value) -> Value {
        json!({"data": data})
    }

    /// A response envelope carrying one GraphQL error.
    #[must_use]
    pub fn error_response(message: &str, path: &[&str]) -> Value {
        json!({
            "data": null,
            "errors": [{"message": message, "path": path}]
        })
    }
}
