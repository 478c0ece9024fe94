//! Document Decode Fuzz Target
//!
//! Feeds arbitrary bytes through every decoder entry point.
//! Goal: Ensure no panics on arbitrary input; every failure is a `DecodeError`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use sgql_core::{decode, decode_connection, decode_response, decode_str, decode_variant, encode};
use sgql_schema::{
    CatalogObject, CustomAttribute, CustomAttributeDefinitionConfig, CustomAttributeValue,
    InventoryChange, MeasurementUnit, Order, OrderTender, Query,
};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Root documents
    let _ = decode_str::<Query>(text);
    let _ = decode_str::<Order>(text);
    let _ = decode_str::<CustomAttribute>(text);

    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return;
    };

    let _ = decode_response::<Query>(value.clone());

    // Every closed set
    let _ = decode_variant::<CatalogObject>(value.clone());
    let _ = decode_variant::<InventoryChange>(value.clone());
    let _ = decode_variant::<MeasurementUnit>(value.clone());
    let _ = decode_variant::<OrderTender>(value.clone());
    let _ = decode_variant::<CustomAttributeValue>(value.clone());
    let _ = decode_variant::<CustomAttributeDefinitionConfig>(value.clone());

    // Connections over concrete and polymorphic nodes
    let _ = decode_connection(value.clone(), decode::<Order>);
    if let Ok(page) = decode_connection(value, decode_variant::<CatalogObject>) {
        // Whatever decodes must encode again.
        assert!(encode(&page).is_ok());
    }
});
