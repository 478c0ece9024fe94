//! Whole documents: response envelope -> root query -> connections -> variants.

use serde_json::json;
use sgql_core::{Connection, Node, ResponseError, VariantSet, decode_response};
use sgql_schema::{CatalogObjectFields, InventoryChangeFields, Query};
use sgql_testkit::{
    TracingCapture, assert_decode_error, assert_decoded, assert_wire_stable, fixtures,
    init_test_tracing,
};

#[test]
fn catalog_page_through_the_envelope() {
    init_test_tracing();

    let document = fixtures::json::response(json!({
        "catalog": fixtures::edges_connection(
            vec![
                fixtures::json::catalog_item("item-1", "Latte"),
                fixtures::json::catalog_category("cat-1", "Drinks"),
                fixtures::json::catalog_measurement_unit("unit-1"),
            ],
            fixtures::page_info_with_next("c3"),
        )
    }));

    let query: Query = assert_decoded(decode_response(document))
        .into_data()
        .expect("data");
    let catalog = query.catalog.expect("catalog");

    assert!(matches!(catalog, Connection::Edges(_)));
    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_terminal());
    assert_eq!(
        catalog.nodes().map(|object| object.tag()).collect::<Vec<_>>(),
        ["CatalogItem", "CatalogCategory", "CatalogMeasurementUnit"]
    );
    let category = catalog.find_node("cat-1").expect("category");
    assert_eq!(category.fields().version(), Some(3));
    assert!(query.orders.is_none());
}

#[test]
fn order_errors_carry_the_document_path() {
    let mut order = fixtures::json::order_with_tenders("o-1");
    order["tenders"][1]["amountMoney"]["amount"] = json!("lots");
    let document = fixtures::json::response(json!({
        "orders": fixtures::nodes_connection(vec![order], fixtures::terminal_page_info())
    }));

    let result = decode_response::<Query>(document);
    assert_decode_error(result, "data.orders.nodes[0].tenders[1].amountMoney.amount");
}

#[test]
fn inventory_changes_with_mismatched_nodes_are_flagged() {
    let nodes = vec![
        fixtures::json::inventory_adjustment("adj-1", "var-1"),
        fixtures::json::inventory_adjustment("adj-2", "var-2"),
    ];
    let stale = fixtures::json::inventory_adjustment("adj-0", "var-0");
    let document = fixtures::json::response(json!({
        "inventoryChanges": fixtures::mismatched_connection(nodes, 0, stale)
    }));

    let capture = TracingCapture::new();
    let response = capture.run(|| decode_response::<Query>(document));
    let changes = assert_decoded(response)
        .into_data()
        .expect("data")
        .inventory_changes
        .expect("inventory changes");

    let ids: Vec<_> = changes.nodes().filter_map(|change| change.fields().id()).collect();
    assert_eq!(ids, ["adj-1", "adj-2"]);
    assert!(capture.has_warnings());
}

#[test]
fn graphql_errors_are_surfaced() {
    let response = assert_decoded(decode_response::<Query>(fixtures::json::error_response(
        "not authorized",
        &["orders"],
    )));
    assert!(!response.is_ok());
    match response.into_data() {
        Err(ResponseError::Graphql(errors)) => {
            assert_eq!(errors[0].message, "not authorized");
        }
        other => panic!("expected GraphQL errors, got {other:?}"),
    }
}

#[test]
fn custom_attribute_definitions_page() {
    let document = fixtures::json::response(json!({
        "merchantCustomAttributeDefinitions": fixtures::nodes_connection(
            vec![
                fixtures::json::selection_custom_attribute("milk")["definition"].clone(),
                json!({
                    "key": "birthday",
                    "config": {"__typename": "CustomAttributeDefinitionDateConfig"}
                }),
            ],
            fixtures::terminal_page_info(),
        )
    }));

    let definitions = assert_decoded(decode_response::<Query>(document))
        .into_data()
        .expect("data")
        .merchant_custom_attribute_definitions
        .expect("definitions")
        .into_nodes();

    assert_eq!(definitions.len(), 2);
    assert!(definitions[0].config.as_ref().is_some_and(|c| c.as_selection().is_some()));
    assert!(definitions[1].config.as_ref().is_some_and(|c| c.as_date().is_some()));
}

#[test]
fn canonical_documents_are_stable() {
    let wire = json!({
        "catalogObject": {
            "__typename": "CatalogTax",
            "id": "tax-1",
            "version": 12,
            "name": "City tax",
            "percentage": "7.25",
            "calculationPhase": "TAX_SUBTOTAL_PHASE",
            "inclusionType": "ADDITIVE",
            "enabled": true
        },
        "orders": {
            "pageInfo": {"hasNextPage": false},
            "edges": [{
                "cursor": "o1",
                "node": {
                    "id": "o-1",
                    "state": "OPEN",
                    "totalMoney": {"amount": 250, "currency": "EUR"},
                    "tenders": [{
                        "__typename": "OrderTenderWallet",
                        "amountMoney": {"amount": 250, "currency": "EUR"},
                        "brand": "CASH_APP"
                    }]
                }
            }]
        }
    });

    let query: Query = assert_wire_stable(&wire);
    let orders = query.orders.expect("orders");
    let order = orders.find_node("o-1").expect("order");
    assert_eq!(order.id(), Some("o-1"));
    assert_eq!(order.tendered_amount(), Some(250));
}
