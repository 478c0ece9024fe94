//! Catalog objects.
//!
//! Every catalog record carries the same bookkeeping fields (`id`,
//! `version`, `updatedAt`, ...). They are exposed uniformly through
//! [`CatalogObjectFields`], implemented per record, and through
//! [`CatalogObject::fields`] on the polymorphic value.

use serde::{Deserialize, Serialize};
use sgql_core::{Connection, Node, variant_set};

use crate::common::Money;
use crate::measurement::MeasurementUnit;

/// Fields shared by every catalog object.
pub trait CatalogObjectFields {
    /// Catalog object ID.
    fn id(&self) -> Option<&str>;
    /// Version, incremented on every update.
    fn version(&self) -> Option<i64>;
    /// Last update timestamp (RFC 3339).
    fn updated_at(&self) -> Option<&str>;
    /// Whether the object has been deleted.
    fn is_deleted(&self) -> Option<bool>;
    /// Whether the object is present at every location.
    fn present_at_all_locations(&self) -> Option<bool>;
    /// Owning merchant.
    fn merchant_id(&self) -> Option<&str>;
}

macro_rules! catalog_object_fields {
    ($($record:ty),+ $(,)?) => {$(
        impl CatalogObjectFields for $record {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn version(&self) -> Option<i64> {
                self.version
            }

            fn updated_at(&self) -> Option<&str> {
                self.updated_at.as_deref()
            }

            fn is_deleted(&self) -> Option<bool> {
                self.is_deleted
            }

            fn present_at_all_locations(&self) -> Option<bool> {
                self.present_at_all_locations
            }

            fn merchant_id(&self) -> Option<&str> {
                self.merchant_id.as_deref()
            }
        }

        impl Node for $record {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }
    )+};
}

/// Kind of catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogItemProductType {
    Regular,
    GiftCard,
    AppointmentsService,
    Event,
    Food,
    Beverage,
    Digital,
    Donation,
}

/// How a variation is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogPricingType {
    FixedPricing,
    VariablePricing,
}

/// Category kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogCategoryType {
    RegularCategory,
    MenuCategory,
    KitchenCategory,
}

/// When a tax is applied relative to discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxCalculationPhase {
    TaxSubtotalPhase,
    TaxTotalPhase,
}

/// Whether a tax is added to or included in the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxInclusionType {
    Additive,
    Inclusive,
}

/// How a discount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogDiscountType {
    FixedPercentage,
    FixedAmount,
    VariablePercentage,
    VariableAmount,
}

/// How many modifiers of a list may be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModifierSelectionType {
    Single,
    Multiple,
}

/// Sellable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Object version
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Deleted flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    /// Present at all locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_at_all_locations: Option<bool>,

    /// Merchant ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Item name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Short label shown in point-of-sale grids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    /// Category ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Product type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<CatalogItemProductType>,

    /// Applicable tax IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_ids: Option<Vec<String>>,

    /// Variations of this item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<CatalogItemVariation>>,
}

/// One sellable variation of an item (size, color, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemVariation {
    /// Object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Object version
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Deleted flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    /// Present at all locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_at_all_locations: Option<bool>,

    /// Merchant ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Parent item ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    /// Parent item, when selected. An independent copy, not a shared reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<CatalogItem>>,

    /// Variation name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stock keeping unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Display order within the item
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<i32>,

    /// Pricing type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_type: Option<CatalogPricingType>,

    /// Fixed price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_money: Option<Money>,

    /// Measurement unit ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_unit_id: Option<String>,
}

/// Item category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCategory {
    /// Object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Object version
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Deleted flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    /// Present at all locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_at_all_locations: Option<bool>,

    /// Merchant ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Category type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type: Option<CatalogCategoryType>,

    /// Parent category ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category_id: Option<String>,
}

/// Tax rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTax {
    /// Object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Object version
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Deleted flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    /// Present at all locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_at_all_locations: Option<bool>,

    /// Merchant ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Tax name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Rate as a decimal string, e.g. "7.25"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,

    /// Calculation phase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation_phase: Option<TaxCalculationPhase>,

    /// Inclusion type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_type: Option<TaxInclusionType>,

    /// Whether the tax is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDiscount {
    /// Object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Object version
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Deleted flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    /// Present at all locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_at_all_locations: Option<bool>,

    /// Merchant ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Discount name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Discount type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<CatalogDiscountType>,

    /// Percentage as a decimal string, for percentage discounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,

    /// Amount, for fixed-amount discounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
}

/// Unit an item variation is measured in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeasurementUnit {
    /// Object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Object version
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Deleted flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    /// Present at all locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_at_all_locations: Option<bool>,

    /// Merchant ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// The unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<MeasurementUnit>,

    /// Decimal places allowed in quantities
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,
}

/// Named group of modifiers (e.g. "Milk options").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogModifierList {
    /// Object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Object version
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Deleted flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,

    /// Present at all locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_at_all_locations: Option<bool>,

    /// Merchant ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// List name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Selection type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<ModifierSelectionType>,

    /// Member objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<CatalogObject>>,
}

catalog_object_fields!(
    CatalogItem,
    CatalogItemVariation,
    CatalogCategory,
    CatalogTax,
    CatalogDiscount,
    CatalogMeasurementUnit,
    CatalogModifierList,
);

variant_set! {
    /// Anything stored in the catalog.
    pub enum CatalogObject {
        CatalogItem(CatalogItem) => as_item,
        CatalogItemVariation(CatalogItemVariation) => as_item_variation,
        CatalogCategory(CatalogCategory) => as_category,
        CatalogTax(CatalogTax) => as_tax,
        CatalogDiscount(CatalogDiscount) => as_discount,
        CatalogMeasurementUnit(CatalogMeasurementUnit) => as_measurement_unit,
        CatalogModifierList(CatalogModifierList) => as_modifier_list,
    }
}

impl CatalogObject {
    /// Shared catalog fields, whatever the concrete record.
    #[must_use]
    pub fn fields(&self) -> &dyn CatalogObjectFields {
        match self {
            Self::CatalogItem(item) => item,
            Self::CatalogItemVariation(variation) => variation,
            Self::CatalogCategory(category) => category,
            Self::CatalogTax(tax) => tax,
            Self::CatalogDiscount(discount) => discount,
            Self::CatalogMeasurementUnit(unit) => unit,
            Self::CatalogModifierList(list) => list,
        }
    }
}

impl Node for CatalogObject {
    fn id(&self) -> Option<&str> {
        self.fields().id()
    }
}

/// Page of catalog objects.
pub type CatalogObjectConnection = Connection<CatalogObject>;

/// Page of catalog items.
pub type CatalogItemConnection = Connection<CatalogItem>;
