//! Variant tables touched for the first time from many threads at once.
//!
//! Kept in its own test binary so no other test initializes a table first.

use std::sync::Barrier;
use std::thread;

use serde_json::{Value, json};
use sgql_core::{VariantSet, decode_variant, encode_variant};
use sgql_schema::{
    CatalogObject, CustomAttributeDefinitionConfig, CustomAttributeValue, InventoryChange,
    MeasurementUnit, OrderTender,
};

const SETS: usize = 6;
const THREADS: usize = 8;

type Snapshot = Vec<(String, Value)>;

/// Decode and re-encode every registered tag of `S`.
fn dispatch_every_tag<S: VariantSet + std::fmt::Debug>() -> Snapshot {
    S::table()
        .tags()
        .map(|tag| {
            let value: S = decode_variant(json!({ "__typename": tag })).expect("registered tag");
            assert_eq!(value.tag(), tag);
            let wire = encode_variant(&value).expect("encode");
            (value.tag().to_string(), wire)
        })
        .collect()
}

fn snapshot(set: usize) -> Snapshot {
    match set {
        0 => dispatch_every_tag::<CatalogObject>(),
        1 => dispatch_every_tag::<InventoryChange>(),
        2 => dispatch_every_tag::<MeasurementUnit>(),
        3 => dispatch_every_tag::<OrderTender>(),
        4 => dispatch_every_tag::<CustomAttributeValue>(),
        _ => dispatch_every_tag::<CustomAttributeDefinitionConfig>(),
    }
}

#[test]
fn tables_agree_across_threads_on_first_use() {
    let barrier = Barrier::new(THREADS);

    let results: Vec<Vec<Snapshot>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|worker| {
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    // Each worker starts on a different set so every table
                    // sees competing first touches.
                    let mut sets = vec![Snapshot::new(); SETS];
                    for offset in 0..SETS {
                        let set = (worker + offset) % SETS;
                        sets[set] = snapshot(set);
                    }
                    sets
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("decoder thread panicked"))
            .collect()
    });

    let expected = &results[0];
    let sizes: Vec<_> = expected.iter().map(Vec::len).collect();
    assert_eq!(sizes, [7, 3, 7, 5, 7, 5]);
    for (tag, wire) in expected.iter().flatten() {
        assert_eq!(wire, &json!({ "__typename": tag }));
    }
    for result in &results[1..] {
        assert_eq!(result, expected);
    }
}
