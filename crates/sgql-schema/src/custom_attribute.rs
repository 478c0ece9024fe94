//! Seller-defined custom attributes.
//!
//! A definition fixes the attribute's key and value kind through its
//! polymorphic `config`; each attribute instance carries a polymorphic
//! `value` of the matching kind.

use serde::{Deserialize, Serialize};
use sgql_core::{Connection, variant_set};

/// Who can see and edit an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomAttributeVisibility {
    VisibilityHidden,
    VisibilityReadOnly,
    VisibilityReadWriteValues,
}

/// Free text value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeValueString {
    /// Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeValueNumber {
    /// Value, sent upstream as a decimal string
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Boolean value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeValueBoolean {
    /// Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
}

/// Email address value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeValueEmail {
    /// Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Phone number value (E.164).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeValuePhoneNumber {
    /// Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Calendar date value (YYYY-MM-DD).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeValueDate {
    /// Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Selection value: UIDs of the chosen options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeValueSelection {
    /// Selected option UIDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_uids: Option<Vec<String>>,
}

variant_set! {
    /// Value held by a custom attribute.
    pub enum CustomAttributeValue {
        CustomAttributeValueString(CustomAttributeValueString) => as_string,
        CustomAttributeValueNumber(CustomAttributeValueNumber) => as_number,
        CustomAttributeValueBoolean(CustomAttributeValueBoolean) => as_boolean,
        CustomAttributeValueEmail(CustomAttributeValueEmail) => as_email,
        CustomAttributeValuePhoneNumber(CustomAttributeValuePhoneNumber) => as_phone_number,
        CustomAttributeValueDate(CustomAttributeValueDate) => as_date,
        CustomAttributeValueSelection(CustomAttributeValueSelection) => as_selection,
    }
}

/// Text attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeDefinitionStringConfig {
    /// Maximum length in characters
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

/// Numeric attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeDefinitionNumberConfig {
    /// Decimal places kept
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
}

/// One option of a selection attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeSelectionOption {
    /// Option UID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Selection attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeDefinitionSelectionConfig {
    /// Upper bound on selected options
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub max_allowed_selections: Option<u32>,

    /// Options to choose from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_selections: Option<Vec<CustomAttributeSelectionOption>>,
}

/// Date attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributeDefinitionDateConfig {}

/// Date-time attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributeDefinitionDateTimeConfig {}

variant_set! {
    /// Kind-specific settings of a custom attribute definition.
    pub enum CustomAttributeDefinitionConfig {
        CustomAttributeDefinitionStringConfig(CustomAttributeDefinitionStringConfig) => as_string,
        CustomAttributeDefinitionNumberConfig(CustomAttributeDefinitionNumberConfig) => as_number,
        CustomAttributeDefinitionSelectionConfig(CustomAttributeDefinitionSelectionConfig) => as_selection,
        CustomAttributeDefinitionDateConfig(CustomAttributeDefinitionDateConfig) => as_date,
        CustomAttributeDefinitionDateTimeConfig(CustomAttributeDefinitionDateTimeConfig) => as_date_time,
    }
}

impl CustomAttributeDefinitionConfig {
    /// Returns `true` when `value` is of the kind this config describes.
    ///
    /// Email and phone-number values are string-kind attributes.
    #[must_use]
    pub const fn accepts(&self, value: &CustomAttributeValue) -> bool {
        matches!(
            (self, value),
            (
                Self::CustomAttributeDefinitionStringConfig(_),
                CustomAttributeValue::CustomAttributeValueString(_)
                    | CustomAttributeValue::CustomAttributeValueEmail(_)
                    | CustomAttributeValue::CustomAttributeValuePhoneNumber(_)
            ) | (
                Self::CustomAttributeDefinitionNumberConfig(_),
                CustomAttributeValue::CustomAttributeValueNumber(_)
            ) | (
                Self::CustomAttributeDefinitionSelectionConfig(_),
                CustomAttributeValue::CustomAttributeValueSelection(_)
            ) | (
                Self::CustomAttributeDefinitionDateConfig(_)
                    | Self::CustomAttributeDefinitionDateTimeConfig(_),
                CustomAttributeValue::CustomAttributeValueDate(_)
            )
        )
    }
}

/// Definition of a custom attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttributeDefinition {
    /// Unique key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<CustomAttributeVisibility>,

    /// Version, incremented on every update
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    /// Kind-specific settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<CustomAttributeDefinitionConfig>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A custom attribute set on some object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttribute {
    /// Definition key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<CustomAttributeValue>,

    /// Version, incremented on every update
    #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    /// Visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<CustomAttributeVisibility>,

    /// Definition, when selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<CustomAttributeDefinition>,

    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Page of custom attributes.
pub type CustomAttributeConnection = Connection<CustomAttribute>;

/// Page of custom attribute definitions.
pub type CustomAttributeDefinitionConnection = Connection<CustomAttributeDefinition>;
