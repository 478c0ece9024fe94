//! Measurement units.

use serde::{Deserialize, Serialize};
use sgql_core::variant_set;

/// Unit of area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaUnit {
    ImperialAcre,
    ImperialSquareInch,
    ImperialSquareFoot,
    ImperialSquareYard,
    ImperialSquareMile,
    MetricSquareCentimeter,
    MetricSquareMeter,
    MetricSquareKilometer,
}

/// Unit of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthUnit {
    ImperialInch,
    ImperialFoot,
    ImperialYard,
    ImperialMile,
    MetricMillimeter,
    MetricCentimeter,
    MetricMeter,
    MetricKilometer,
}

/// Unit of volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeUnit {
    GenericFluidOunce,
    GenericShot,
    GenericCup,
    GenericPint,
    GenericQuart,
    GenericGallon,
    MetricMilliliter,
    MetricLiter,
}

/// Unit of weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    ImperialWeightOunce,
    ImperialPound,
    ImperialStone,
    MetricMilligram,
    MetricGram,
    MetricKilogram,
}

/// Unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    GenericMillisecond,
    GenericSecond,
    GenericMinute,
    GenericHour,
    GenericDay,
}

/// Unitless count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenericUnit {
    Unit,
}

/// Area measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementUnitArea {
    /// Unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_unit: Option<AreaUnit>,
}

/// Length measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementUnitLength {
    /// Unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_unit: Option<LengthUnit>,
}

/// Volume measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementUnitVolume {
    /// Unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_unit: Option<VolumeUnit>,
}

/// Weight measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementUnitWeight {
    /// Unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,
}

/// Time measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementUnitTime {
    /// Unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
}

/// Unitless measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementUnitGeneric {
    /// Unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_unit: Option<GenericUnit>,
}

/// Seller-defined unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementUnitCustom {
    /// Display name, e.g. "bushel"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Abbreviation, e.g. "bsh"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

variant_set! {
    /// A unit a catalog item can be sold in.
    pub enum MeasurementUnit {
        MeasurementUnitArea(MeasurementUnitArea) => as_area,
        MeasurementUnitLength(MeasurementUnitLength) => as_length,
        MeasurementUnitVolume(MeasurementUnitVolume) => as_volume,
        MeasurementUnitWeight(MeasurementUnitWeight) => as_weight,
        MeasurementUnitTime(MeasurementUnitTime) => as_time,
        MeasurementUnitGeneric(MeasurementUnitGeneric) => as_generic,
        MeasurementUnitCustom(MeasurementUnitCustom) => as_custom,
    }
}
