//! Orders and tenders.

use serde::{Deserialize, Serialize};
use sgql_core::{Connection, Node, variant_set};

use crate::common::Money;

/// Order lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Open,
    Completed,
    Canceled,
    Draft,
}

/// Card brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardBrand {
    OtherBrand,
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    DiscoverDiners,
    Jcb,
    ChinaUnionpay,
    SquareGiftCard,
    Interac,
    Eftpos,
}

/// How card details were captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardEntryMethod {
    Swiped,
    Keyed,
    Emv,
    OnFile,
    Contactless,
}

/// Fields shared by every tender.
pub trait TenderFields {
    /// Tender ID.
    fn id(&self) -> Option<&str>;
    /// Amount paid, excluding tip.
    fn amount_money(&self) -> Option<&Money>;
    /// Tip amount.
    fn tip_money(&self) -> Option<&Money>;
    /// When the tender was created (RFC 3339).
    fn created_at(&self) -> Option<&str>;
}

macro_rules! tender_fields {
    ($($record:ty),+ $(,)?) => {$(
        impl TenderFields for $record {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn amount_money(&self) -> Option<&Money> {
                self.amount_money.as_ref()
            }

            fn tip_money(&self) -> Option<&Money> {
                self.tip_money.as_ref()
            }

            fn created_at(&self) -> Option<&str> {
                self.created_at.as_deref()
            }
        }
    )+};
}

/// Card payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTenderCard {
    /// Tender ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,

    /// Tip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Card brand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<CardBrand>,

    /// Last four digits of the card number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,

    /// Entry method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_method: Option<CardEntryMethod>,
}

/// Cash payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTenderCash {
    /// Tender ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,

    /// Tip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Cash handed over by the buyer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tendered_money: Option<Money>,

    /// Change returned to the buyer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_back_money: Option<Money>,
}

/// Bank transfer payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTenderBankAccount {
    /// Tender ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,

    /// Tip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Bank name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    /// Last digits of the account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number_suffix: Option<String>,
}

/// Digital wallet payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTenderWallet {
    /// Tender ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,

    /// Tip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Wallet brand, e.g. "CASH_APP"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Payment recorded outside the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTenderOther {
    /// Tender ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Amount paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,

    /// Tip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

tender_fields!(
    OrderTenderCard,
    OrderTenderCash,
    OrderTenderBankAccount,
    OrderTenderWallet,
    OrderTenderOther,
);

variant_set! {
    /// How (part of) an order was paid.
    pub enum OrderTender {
        OrderTenderCard(OrderTenderCard) => as_card,
        OrderTenderCash(OrderTenderCash) => as_cash,
        OrderTenderBankAccount(OrderTenderBankAccount) => as_bank_account,
        OrderTenderWallet(OrderTenderWallet) => as_wallet,
        OrderTenderOther(OrderTenderOther) => as_other,
    }
}

impl OrderTender {
    /// Shared tender fields.
    #[must_use]
    pub fn fields(&self) -> &dyn TenderFields {
        match self {
            Self::OrderTenderCard(card) => card,
            Self::OrderTenderCash(cash) => cash,
            Self::OrderTenderBankAccount(bank) => bank,
            Self::OrderTenderWallet(wallet) => wallet,
            Self::OrderTenderOther(other) => other,
        }
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Line ID, unique within the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Quantity as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// Catalog variation sold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,

    /// Unit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price_money: Option<Money>,

    /// Line total
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
}

/// Order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Location ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// State
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,

    /// Version, incremented on every update
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    /// Lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<OrderLineItem>>,

    /// Payments applied to the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenders: Option<Vec<OrderTender>>,

    /// Order total
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Order {
    /// Sum of tendered amounts in `total_money`'s currency, when every
    /// tender is in that currency.
    #[must_use]
    pub fn tendered_amount(&self) -> Option<i64> {
        let currency = self.total_money.as_ref()?.currency?;
        self.tenders.iter().flatten().try_fold(0_i64, |sum, tender| {
            let money = tender.fields().amount_money()?;
            if money.currency != Some(currency) {
                return None;
            }
            sum.checked_add(money.amount?)
        })
    }
}

impl Node for Order {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Page of orders.
pub type OrderConnection = Connection<Order>;
