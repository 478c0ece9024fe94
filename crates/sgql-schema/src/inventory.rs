//! Inventory changes.

use serde::{Deserialize, Serialize};
use sgql_core::{Connection, Node, variant_set};

use crate::common::Money;

/// State of a quantity of stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryState {
    Custom,
    InStock,
    Sold,
    ReturnedByCustomer,
    ReservedForSale,
    SoldOnline,
    OrderedFromVendor,
    ReceivedFromVendor,
    InTransitTo,
    None,
    Waste,
    UnlinkedReturn,
    Composed,
    Decomposed,
    SupportedByNewerVersion,
    InTransit,
}

/// Fields shared by every inventory change.
pub trait InventoryChangeFields {
    /// Change ID.
    fn id(&self) -> Option<&str>;
    /// Catalog object whose stock changed.
    fn catalog_object_id(&self) -> Option<&str>;
    /// Quantity as a decimal string.
    fn quantity(&self) -> Option<&str>;
    /// When the change happened (RFC 3339).
    fn occurred_at(&self) -> Option<&str>;
}

macro_rules! inventory_change_fields {
    ($($record:ty),+ $(,)?) => {$(
        impl InventoryChangeFields for $record {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn catalog_object_id(&self) -> Option<&str> {
                self.catalog_object_id.as_deref()
            }

            fn quantity(&self) -> Option<&str> {
                self.quantity.as_deref()
            }

            fn occurred_at(&self) -> Option<&str> {
                self.occurred_at.as_deref()
            }
        }
    )+};
}

/// Stock moved between two states at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAdjustment {
    /// Adjustment ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Client-supplied reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// State before
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_state: Option<InventoryState>,

    /// State after
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_state: Option<InventoryState>,

    /// Location ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Catalog object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,

    /// Quantity moved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// Total price of the moved stock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_money: Option<Money>,

    /// When the adjustment happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,

    /// When the adjustment was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Absolute stock count at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPhysicalCount {
    /// Count ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Client-supplied reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// Catalog object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,

    /// Counted state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<InventoryState>,

    /// Location ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Counted quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// When the count happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,

    /// When the count was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Stock moved between locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransfer {
    /// Transfer ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Client-supplied reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// State of the moved stock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<InventoryState>,

    /// Source location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_location_id: Option<String>,

    /// Destination location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_location_id: Option<String>,

    /// Catalog object ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,

    /// Quantity moved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// When the transfer happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,
}

inventory_change_fields!(InventoryAdjustment, InventoryPhysicalCount, InventoryTransfer);

variant_set! {
    /// One change to tracked stock.
    pub enum InventoryChange {
        InventoryAdjustment(InventoryAdjustment) => as_adjustment,
        InventoryPhysicalCount(InventoryPhysicalCount) => as_physical_count,
        InventoryTransfer(InventoryTransfer) => as_transfer,
    }
}

impl InventoryChange {
    /// Shared change fields.
    #[must_use]
    pub fn fields(&self) -> &dyn InventoryChangeFields {
        match self {
            Self::InventoryAdjustment(adjustment) => adjustment,
            Self::InventoryPhysicalCount(count) => count,
            Self::InventoryTransfer(transfer) => transfer,
        }
    }
}

impl Node for InventoryChange {
    fn id(&self) -> Option<&str> {
        self.fields().id()
    }
}

/// Page of inventory changes.
pub type InventoryChangeConnection = Connection<InventoryChange>;
