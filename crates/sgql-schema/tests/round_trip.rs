//! Property-based round-trip tests for every shipped record and variant set.

use proptest::prelude::*;
use proptest::sample::select;
use sgql_core::{Variant, VariantSet, decode_variant, encode_variant};
use sgql_schema::catalog::{
    CatalogCategory, CatalogCategoryType, CatalogDiscount, CatalogDiscountType, CatalogItem,
    CatalogItemProductType, CatalogItemVariation, CatalogMeasurementUnit, CatalogModifierList,
    CatalogPricingType, CatalogTax, ModifierSelectionType, TaxCalculationPhase, TaxInclusionType,
};
use sgql_schema::custom_attribute::{
    CustomAttributeDefinitionDateConfig, CustomAttributeDefinitionDateTimeConfig,
    CustomAttributeDefinitionNumberConfig, CustomAttributeDefinitionSelectionConfig,
    CustomAttributeDefinitionStringConfig, CustomAttributeSelectionOption,
    CustomAttributeValueBoolean, CustomAttributeValueDate, CustomAttributeValueEmail,
    CustomAttributeValueNumber, CustomAttributeValuePhoneNumber, CustomAttributeValueSelection,
    CustomAttributeValueString, CustomAttributeVisibility,
};
use sgql_schema::inventory::{
    InventoryAdjustment, InventoryPhysicalCount, InventoryState, InventoryTransfer,
};
use sgql_schema::measurement::{
    AreaUnit, GenericUnit, LengthUnit, MeasurementUnitArea, MeasurementUnitCustom,
    MeasurementUnitGeneric, MeasurementUnitLength, MeasurementUnitTime, MeasurementUnitVolume,
    MeasurementUnitWeight, TimeUnit, VolumeUnit, WeightUnit,
};
use sgql_schema::order::{CardBrand, OrderState, OrderTenderCard, OrderTenderCash, OrderTenderOther};
use sgql_schema::{
    CatalogObject, Currency, CustomAttribute, CustomAttributeDefinition,
    CustomAttributeDefinitionConfig, CustomAttributeValue, InventoryChange, MeasurementUnit, Money,
    Order, OrderTender,
};
use sgql_testkit::{assert_no_nulls, assert_round_trip};

// ─────────────────────────────────────────────────────────────────────────────
// Proptest Strategies
// ─────────────────────────────────────────────────────────────────────────────

fn text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 #-]{0,12}")
}

fn money() -> impl Strategy<Value = Money> {
    (
        proptest::option::of(any::<i64>()),
        proptest::option::of(prop_oneof![
            Just(Currency::Usd),
            Just(Currency::Eur),
            Just(Currency::Jpy)
        ]),
    )
        .prop_map(|(amount, currency)| Money { amount, currency })
}

fn variation() -> impl Strategy<Value = CatalogItemVariation> {
    (
        text(),
        proptest::option::of(any::<i64>()),
        text(),
        proptest::option::of(any::<i32>()),
        proptest::option::of(prop_oneof![
            Just(CatalogPricingType::FixedPricing),
            Just(CatalogPricingType::VariablePricing)
        ]),
        proptest::option::of(money()),
    )
        .prop_map(|(id, version, name, ordinal, pricing_type, price_money)| CatalogItemVariation {
            id,
            version,
            updated_at: None,
            is_deleted: None,
            present_at_all_locations: None,
            merchant_id: None,
            item_id: None,
            item: None,
            name,
            sku: None,
            ordinal,
            pricing_type,
            price_money,
            measurement_unit_id: None,
        })
}

fn item() -> impl Strategy<Value = CatalogItem> {
    (
        text(),
        proptest::option::of(any::<i64>()),
        proptest::option::of(any::<bool>()),
        text(),
        proptest::option::of(prop_oneof![
            Just(CatalogItemProductType::Regular),
            Just(CatalogItemProductType::Beverage)
        ]),
        proptest::option::of(proptest::collection::vec(variation(), 0..3)),
    )
        .prop_map(|(id, version, is_deleted, name, product_type, variations)| CatalogItem {
            id,
            version,
            updated_at: None,
            is_deleted,
            present_at_all_locations: None,
            merchant_id: None,
            name,
            description: None,
            abbreviation: None,
            category_id: None,
            product_type,
            tax_ids: None,
            variations,
        })
}

fn tender() -> impl Strategy<Value = OrderTender> {
    prop_oneof![
        (text(), proptest::option::of(money()), text()).prop_map(|(id, amount_money, last4)| {
            OrderTender::OrderTenderCard(OrderTenderCard {
                id,
                amount_money,
                tip_money: None,
                created_at: None,
                card_brand: Some(CardBrand::Visa),
                last4,
                entry_method: None,
            })
        }),
        (text(), proptest::option::of(money())).prop_map(|(id, amount_money)| {
            OrderTender::OrderTenderCash(OrderTenderCash {
                id,
                amount_money,
                tip_money: None,
                created_at: None,
                buyer_tendered_money: None,
                change_back_money: None,
            })
        }),
        text().prop_map(|note| {
            OrderTender::OrderTenderOther(OrderTenderOther {
                id: None,
                amount_money: None,
                tip_money: None,
                created_at: None,
                note,
            })
        }),
    ]
}

fn order() -> impl Strategy<Value = Order> {
    (
        text(),
        proptest::option::of(prop_oneof![Just(OrderState::Open), Just(OrderState::Completed)]),
        proptest::option::of(any::<i32>()),
        proptest::option::of(proptest::collection::vec(tender(), 0..4)),
        proptest::option::of(money()),
    )
        .prop_map(|(id, state, version, tenders, total_money)| Order {
            id,
            location_id: None,
            state,
            version,
            line_items: None,
            tenders,
            total_money,
            created_at: None,
        })
}

/// Bookkeeping fields every catalog object carries.
#[derive(Debug, Clone)]
struct Shared {
    id: Option<String>,
    version: Option<i64>,
    updated_at: Option<String>,
    is_deleted: Option<bool>,
    present_at_all_locations: Option<bool>,
    merchant_id: Option<String>,
}

fn shared() -> impl Strategy<Value = Shared> {
    (
        text(),
        proptest::option::of(any::<i64>()),
        proptest::option::of(Just("2026-01-31T09:30:00Z".to_string())),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        text(),
    )
        .prop_map(
            |(id, version, updated_at, is_deleted, present_at_all_locations, merchant_id)| Shared {
                id,
                version,
                updated_at,
                is_deleted,
                present_at_all_locations,
                merchant_id,
            },
        )
}

fn decimal() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[0-9]{1,3}\\.[0-9]{1,2}")
}

fn measurement_unit() -> impl Strategy<Value = MeasurementUnit> {
    prop_oneof![
        proptest::option::of(select(vec![AreaUnit::ImperialAcre, AreaUnit::MetricSquareMeter]))
            .prop_map(|area_unit| MeasurementUnit::MeasurementUnitArea(MeasurementUnitArea { area_unit })),
        proptest::option::of(select(vec![LengthUnit::ImperialFoot, LengthUnit::MetricKilometer]))
            .prop_map(|length_unit| {
                MeasurementUnit::MeasurementUnitLength(MeasurementUnitLength { length_unit })
            }),
        proptest::option::of(select(vec![VolumeUnit::GenericShot, VolumeUnit::MetricLiter]))
            .prop_map(|volume_unit| {
                MeasurementUnit::MeasurementUnitVolume(MeasurementUnitVolume { volume_unit })
            }),
        proptest::option::of(select(vec![WeightUnit::ImperialPound, WeightUnit::MetricGram]))
            .prop_map(|weight_unit| {
                MeasurementUnit::MeasurementUnitWeight(MeasurementUnitWeight { weight_unit })
            }),
        proptest::option::of(select(vec![TimeUnit::GenericSecond, TimeUnit::GenericDay]))
            .prop_map(|time_unit| MeasurementUnit::MeasurementUnitTime(MeasurementUnitTime { time_unit })),
        proptest::option::of(Just(GenericUnit::Unit)).prop_map(|generic_unit| {
            MeasurementUnit::MeasurementUnitGeneric(MeasurementUnitGeneric { generic_unit })
        }),
        (text(), text()).prop_map(|(name, abbreviation)| {
            MeasurementUnit::MeasurementUnitCustom(MeasurementUnitCustom { name, abbreviation })
        }),
    ]
}

fn inventory_state() -> impl Strategy<Value = Option<InventoryState>> {
    proptest::option::of(select(vec![
        InventoryState::InStock,
        InventoryState::Sold,
        InventoryState::Waste,
        InventoryState::InTransit,
        InventoryState::None,
    ]))
}

fn inventory_change() -> impl Strategy<Value = InventoryChange> {
    prop_oneof![
        (
            text(),
            inventory_state(),
            inventory_state(),
            decimal(),
            proptest::option::of(money()),
            text(),
        )
            .prop_map(|(id, from_state, to_state, quantity, total_price_money, location_id)| {
                InventoryChange::InventoryAdjustment(InventoryAdjustment {
                    id,
                    reference_id: None,
                    from_state,
                    to_state,
                    location_id,
                    catalog_object_id: None,
                    quantity,
                    total_price_money,
                    occurred_at: None,
                    created_at: None,
                })
            }),
        (text(), inventory_state(), decimal(), text()).prop_map(
            |(id, state, quantity, catalog_object_id)| {
                InventoryChange::InventoryPhysicalCount(InventoryPhysicalCount {
                    id,
                    reference_id: None,
                    catalog_object_id,
                    state,
                    location_id: None,
                    quantity,
                    occurred_at: None,
                    created_at: None,
                })
            }
        ),
        (text(), inventory_state(), text(), text(), decimal()).prop_map(
            |(id, state, from_location_id, to_location_id, quantity)| {
                InventoryChange::InventoryTransfer(InventoryTransfer {
                    id,
                    reference_id: None,
                    state,
                    from_location_id,
                    to_location_id,
                    catalog_object_id: None,
                    quantity,
                    occurred_at: None,
                })
            }
        ),
    ]
}

fn catalog_object() -> impl Strategy<Value = CatalogObject> {
    prop_oneof![
        item().prop_map(CatalogObject::CatalogItem),
        variation().prop_map(CatalogObject::CatalogItemVariation),
        (
            shared(),
            text(),
            proptest::option::of(select(vec![
                CatalogCategoryType::RegularCategory,
                CatalogCategoryType::MenuCategory,
            ])),
            text(),
        )
            .prop_map(|(shared, name, category_type, parent_category_id)| {
                CatalogObject::CatalogCategory(CatalogCategory {
                    id: shared.id,
                    version: shared.version,
                    updated_at: shared.updated_at,
                    is_deleted: shared.is_deleted,
                    present_at_all_locations: shared.present_at_all_locations,
                    merchant_id: shared.merchant_id,
                    name,
                    category_type,
                    parent_category_id,
                })
            }),
        (
            shared(),
            decimal(),
            proptest::option::of(select(vec![
                TaxCalculationPhase::TaxSubtotalPhase,
                TaxCalculationPhase::TaxTotalPhase,
            ])),
            proptest::option::of(select(vec![TaxInclusionType::Additive, TaxInclusionType::Inclusive])),
            proptest::option::of(any::<bool>()),
        )
            .prop_map(|(shared, percentage, calculation_phase, inclusion_type, enabled)| {
                CatalogObject::CatalogTax(CatalogTax {
                    id: shared.id,
                    version: shared.version,
                    updated_at: shared.updated_at,
                    is_deleted: shared.is_deleted,
                    present_at_all_locations: shared.present_at_all_locations,
                    merchant_id: shared.merchant_id,
                    name: None,
                    percentage,
                    calculation_phase,
                    inclusion_type,
                    enabled,
                })
            }),
        (
            shared(),
            proptest::option::of(select(vec![
                CatalogDiscountType::FixedPercentage,
                CatalogDiscountType::VariableAmount,
            ])),
            decimal(),
            proptest::option::of(money()),
        )
            .prop_map(|(shared, discount_type, percentage, amount_money)| {
                CatalogObject::CatalogDiscount(CatalogDiscount {
                    id: shared.id,
                    version: shared.version,
                    updated_at: shared.updated_at,
                    is_deleted: shared.is_deleted,
                    present_at_all_locations: shared.present_at_all_locations,
                    merchant_id: shared.merchant_id,
                    name: None,
                    discount_type,
                    percentage,
                    amount_money,
                })
            }),
        (
            shared(),
            proptest::option::of(measurement_unit()),
            proptest::option::of(0..6_i32),
        )
            .prop_map(|(shared, measurement_unit, precision)| {
                CatalogObject::CatalogMeasurementUnit(CatalogMeasurementUnit {
                    id: shared.id,
                    version: shared.version,
                    updated_at: shared.updated_at,
                    is_deleted: shared.is_deleted,
                    present_at_all_locations: shared.present_at_all_locations,
                    merchant_id: shared.merchant_id,
                    measurement_unit,
                    precision,
                })
            }),
        (
            shared(),
            text(),
            proptest::option::of(select(vec![
                ModifierSelectionType::Single,
                ModifierSelectionType::Multiple,
            ])),
            proptest::option::of(proptest::collection::vec(
                item().prop_map(CatalogObject::CatalogItem),
                0..3,
            )),
        )
            .prop_map(|(shared, name, selection_type, modifiers)| {
                CatalogObject::CatalogModifierList(CatalogModifierList {
                    id: shared.id,
                    version: shared.version,
                    updated_at: shared.updated_at,
                    is_deleted: shared.is_deleted,
                    present_at_all_locations: shared.present_at_all_locations,
                    merchant_id: shared.merchant_id,
                    name,
                    selection_type,
                    modifiers,
                })
            }),
    ]
}

fn custom_attribute_value() -> impl Strategy<Value = CustomAttributeValue> {
    prop_oneof![
        text().prop_map(|value| CustomAttributeValueString { value }.into_set()),
        proptest::option::of(-1.0e12..1.0e12_f64)
            .prop_map(|value| CustomAttributeValueNumber { value }.into_set()),
        proptest::option::of(any::<bool>())
            .prop_map(|value| CustomAttributeValueBoolean { value }.into_set()),
        proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com")
            .prop_map(|value| CustomAttributeValueEmail { value }.into_set()),
        proptest::option::of("\\+1[0-9]{10}")
            .prop_map(|value| CustomAttributeValuePhoneNumber { value }.into_set()),
        proptest::option::of("20[0-9]{2}-0[1-9]-1[0-9]")
            .prop_map(|value| CustomAttributeValueDate { value }.into_set()),
        proptest::option::of(proptest::collection::vec("opt-[a-z]{1,6}", 0..4))
            .prop_map(|selected_uids| CustomAttributeValueSelection { selected_uids }.into_set()),
    ]
}

fn definition_config() -> impl Strategy<Value = CustomAttributeDefinitionConfig> {
    let option = (text(), text()).prop_map(|(uid, name)| CustomAttributeSelectionOption { uid, name });
    prop_oneof![
        proptest::option::of(any::<u32>())
            .prop_map(|max_length| CustomAttributeDefinitionStringConfig { max_length }.into_set()),
        proptest::option::of(0..10_u32)
            .prop_map(|precision| CustomAttributeDefinitionNumberConfig { precision }.into_set()),
        (
            proptest::option::of(1..5_u32),
            proptest::option::of(proptest::collection::vec(option, 0..4)),
        )
            .prop_map(|(max_allowed_selections, allowed_selections)| {
                CustomAttributeDefinitionSelectionConfig {
                    max_allowed_selections,
                    allowed_selections,
                }
                .into_set()
            }),
        Just(CustomAttributeDefinitionDateConfig {}.into_set()),
        Just(CustomAttributeDefinitionDateTimeConfig {}.into_set()),
    ]
}

fn visibility() -> impl Strategy<Value = Option<CustomAttributeVisibility>> {
    proptest::option::of(select(vec![
        CustomAttributeVisibility::VisibilityHidden,
        CustomAttributeVisibility::VisibilityReadOnly,
        CustomAttributeVisibility::VisibilityReadWriteValues,
    ]))
}

fn definition() -> impl Strategy<Value = CustomAttributeDefinition> {
    (
        text(),
        text(),
        visibility(),
        proptest::option::of(any::<i32>()),
        proptest::option::of(definition_config()),
    )
        .prop_map(|(key, name, visibility, version, config)| CustomAttributeDefinition {
            key,
            name,
            description: None,
            visibility,
            version,
            config,
            updated_at: None,
        })
}

fn custom_attribute() -> impl Strategy<Value = CustomAttribute> {
    (
        text(),
        proptest::option::of(custom_attribute_value()),
        proptest::option::of(any::<i32>()),
        visibility(),
        proptest::option::of(definition()),
    )
        .prop_map(|(key, value, version, visibility, definition)| CustomAttribute {
            key,
            value,
            version,
            visibility,
            definition,
            updated_at: None,
        })
}

/// Round-trip one set value and check the discriminator on the wire.
fn assert_set_round_trip<S>(value: &S)
where
    S: VariantSet + serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let encoded = assert_round_trip(value);
    assert_eq!(encoded["__typename"].as_str(), Some(value.tag()));
}

proptest! {
    #[test]
    fn money_round_trips(money in money()) {
        assert_round_trip(&money);
    }

    #[test]
    fn orders_round_trip(order in order()) {
        assert_round_trip(&order);
    }

    #[test]
    fn catalog_objects_round_trip_through_the_registry(item in item()) {
        let object = CatalogObject::CatalogItem(item);
        let encoded = encode_variant(&object).unwrap();
        prop_assert_eq!(encoded["__typename"].as_str(), Some("CatalogItem"));
        assert_no_nulls(&encoded);
        let decoded: CatalogObject = decode_variant(encoded).unwrap();
        prop_assert_eq!(decoded, object);
    }

    #[test]
    fn every_catalog_object_round_trips(object in catalog_object()) {
        assert_set_round_trip(&object);
    }

    #[test]
    fn inventory_changes_round_trip(change in inventory_change()) {
        assert_set_round_trip(&change);
    }

    #[test]
    fn measurement_units_round_trip(unit in measurement_unit()) {
        assert_set_round_trip(&unit);
    }

    #[test]
    fn order_tenders_round_trip(tender in tender()) {
        assert_set_round_trip(&tender);
    }

    #[test]
    fn custom_attribute_values_round_trip(value in custom_attribute_value()) {
        assert_set_round_trip(&value);
    }

    #[test]
    fn definition_configs_round_trip(config in definition_config()) {
        assert_set_round_trip(&config);
    }

    #[test]
    fn custom_attributes_round_trip(attribute in custom_attribute()) {
        assert_round_trip(&attribute);
    }

    #[test]
    fn absent_money_fields_are_omitted(amount in proptest::option::of(any::<i64>())) {
        let encoded = sgql_core::encode(&Money { amount, currency: None }).unwrap();
        prop_assert!(encoded.get("currency").is_none());
        prop_assert_eq!(encoded.get("amount").is_some(), amount.is_some());
    }
}
