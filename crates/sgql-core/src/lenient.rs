//! Serde module for optional numeric fields that accept JSON numbers or
//! numeric strings.
//!
//! ```rust,ignore
//! #[serde(default, with = "sgql_core::lenient", skip_serializing_if = "Option::is_none")]
//! pub version: Option<i64>,
//! ```
//!
//! Encoding always emits a native JSON number.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Unexpected, Visitor};
use serde::ser;
use serde::{Deserializer, Serialize, Serializer};

use crate::error::{EXPECTING_NUMERIC, NON_FINITE_NUMBER};

/// Numeric types the lenient module can decode.
pub trait LenientNumber: Sized + Copy + Serialize + fmt::Display {
    /// Convert from a signed JSON integer.
    fn from_i64(value: i64) -> Option<Self>;
    /// Convert from an unsigned JSON integer.
    fn from_u64(value: u64) -> Option<Self>;
    /// Convert from a JSON float. Integer targets reject fractional values.
    fn from_f64(value: f64) -> Option<Self>;
    /// Parse a numeric string.
    fn parse(text: &str) -> Option<Self>;
    /// Whether the value has a JSON number representation.
    fn is_finite(self) -> bool;
}

macro_rules! lenient_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl LenientNumber for $ty {
            fn from_i64(value: i64) -> Option<Self> {
                Self::try_from(value).ok()
            }

            fn from_u64(value: u64) -> Option<Self> {
                Self::try_from(value).ok()
            }

            // `as i128` is exact for every whole f64 inside the target range
            // and saturates outside it, so `try_from` sees the true value.
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Option<Self> {
                if value.fract() != 0.0 {
                    return None;
                }
                Self::try_from(value as i128).ok()
            }

            fn parse(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }

            fn is_finite(self) -> bool {
                true
            }
        }
    )*};
}

lenient_integer!(i32, i64, u32, u64);

impl LenientNumber for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_i64(value: i64) -> Option<Self> {
        Some(value as Self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_u64(value: u64) -> Option<Self> {
        Some(value as Self)
    }

    fn from_f64(value: f64) -> Option<Self> {
        Some(value)
    }

    fn parse(text: &str) -> Option<Self> {
        text.trim()
            .parse::<Self>()
            .ok()
            .filter(|value| value.is_finite())
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

struct NumberVisitor<T>(PhantomData<T>);

impl<'de, T: LenientNumber> Visitor<'de> for NumberVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(EXPECTING_NUMERIC)
    }

    fn visit_i64<E>(self, v: i64) -> Result<T, E>
    where
        E: de::Error,
    {
        T::from_i64(v).ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<T, E>
    where
        E: de::Error,
    {
        T::from_u64(v).ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E>(self, v: f64) -> Result<T, E>
    where
        E: de::Error,
    {
        T::from_f64(v).ok_or_else(|| E::invalid_type(Unexpected::Float(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        T::parse(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}

struct OptionVisitor<T>(PhantomData<T>);

impl<'de, T: LenientNumber> Visitor<'de> for OptionVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(EXPECTING_NUMERIC)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(NumberVisitor(PhantomData))
            .map(Some)
    }
}

/// Serialize an optional number.
///
/// # Errors
/// Returns an error for NaN and infinities, which JSON cannot carry, and
/// any serializer error.
#[allow(clippy::ref_option)]
pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: LenientNumber,
{
    match value {
        Some(number) if !number.is_finite() => Err(<S::Error as ser::Error>::custom(format_args!(
            "{NON_FINITE_NUMBER} {number}"
        ))),
        _ => value.serialize(serializer),
    }
}

/// Deserialize an optional number from a JSON number or numeric string.
///
/// # Errors
/// Returns an error for non-numeric strings, out-of-range values and
/// non-number shapes.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: LenientNumber,
{
    deserializer.deserialize_option(OptionVisitor(PhantomData))
}
