//! Variant registry: closed-set polymorphic values keyed by `__typename`.
//!
//! Every schema union or interface is mirrored by an enum declared with
//! [`variant_set!`](crate::variant_set). The macro builds a process-wide,
//! read-only [`VariantTable`] that maps each discriminator to the decode and
//! encode functions of its concrete record.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::codec::{self, describe};
use crate::error::{DecodeError, DecodeErrorKind, EncodeError};

/// Reserved discriminator key.
pub const TYPENAME_KEY: &str = "__typename";

/// Decode function stored in a table entry.
pub type DecodeFn<S> = fn(Value) -> Result<S, DecodeError>;

/// Encode function stored in a table entry.
pub type EncodeFn<S> = fn(&S) -> Result<Value, EncodeError>;

/// A closed set of concrete record types (a schema union or interface).
pub trait VariantSet: Sized + 'static {
    /// Schema name of the set.
    const SET_NAME: &'static str;

    /// The set's dispatch table.
    fn table() -> &'static VariantTable<Self>;

    /// Discriminator of this value.
    fn tag(&self) -> &'static str;

    /// Narrow to a concrete variant; `None` when the tag differs.
    fn narrow<V: Variant<Self>>(&self) -> Option<&V> {
        V::narrow(self)
    }

    /// Returns `true` when this value holds variant `V`.
    fn is<V: Variant<Self>>(&self) -> bool {
        self.tag() == V::TAG
    }
}

/// A concrete record that is one member of the closed set `S`.
pub trait Variant<S: VariantSet>: Sized + Serialize + DeserializeOwned {
    /// Discriminator naming this record.
    const TAG: &'static str;

    /// Borrow the payload if `set` holds this variant.
    fn narrow(set: &S) -> Option<&Self>;

    /// Wrap the record into its set.
    fn into_set(self) -> S;
}

/// One registered discriminator.
pub struct VariantEntry<S> {
    tag: &'static str,
    decode: DecodeFn<S>,
    encode: EncodeFn<S>,
}

impl<S> VariantEntry<S> {
    /// Discriminator.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Decode the record fields (discriminator already removed).
    pub fn decode(&self, value: Value) -> Result<S, DecodeError> {
        (self.decode)(value)
    }

    /// Encode the payload without the discriminator.
    pub fn encode(&self, value: &S) -> Result<Value, EncodeError> {
        (self.encode)(value)
    }
}

impl<S> fmt::Debug for VariantEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantEntry").field("tag", &self.tag).finish()
    }
}

/// Immutable discriminator -> (decode, encode) mapping for one set.
pub struct VariantTable<S> {
    set: &'static str,
    order: Vec<&'static str>,
    entries: HashMap<&'static str, VariantEntry<S>>,
}

impl<S: VariantSet> VariantTable<S> {
    /// Start a table for `S`.
    #[must_use]
    pub fn builder() -> VariantTableBuilder<S> {
        VariantTableBuilder {
            table: Self {
                set: S::SET_NAME,
                order: Vec::new(),
                entries: HashMap::new(),
            },
        }
    }

    /// Schema name of the set.
    #[must_use]
    pub const fn set_name(&self) -> &'static str {
        self.set
    }

    /// Look up a discriminator.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&VariantEntry<S>> {
        self.entries.get(tag)
    }

    /// Registered discriminators in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Number of registered variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when no variant is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S> fmt::Debug for VariantTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantTable")
            .field("set", &self.set)
            .field("tags", &self.order)
            .finish()
    }
}

/// Builder used once per set when its table is first touched.
pub struct VariantTableBuilder<S> {
    table: VariantTable<S>,
}

impl<S: VariantSet> VariantTableBuilder<S> {
    /// Register variant `V` under its discriminator.
    ///
    /// # Panics
    ///
    /// Panics if the discriminator is already registered. Tables are built
    /// from static declarations, so a duplicate is a declaration bug.
    #[must_use]
    pub fn variant<V: Variant<S>>(mut self) -> Self {
        assert!(
            !self.table.entries.contains_key(V::TAG),
            "duplicate discriminator `{}` in {}",
            V::TAG,
            S::SET_NAME
        );
        self.table.order.push(V::TAG);
        self.table.entries.insert(
            V::TAG,
            VariantEntry {
                tag: V::TAG,
                decode: decode_entry::<S, V>,
                encode: encode_entry::<S, V>,
            },
        );
        self
    }

    /// Finish the table.
    #[must_use]
    pub fn build(self) -> VariantTable<S> {
        self.table
    }
}

fn decode_entry<S: VariantSet, V: Variant<S>>(value: Value) -> Result<S, DecodeError> {
    codec::decode::<V>(value).map(V::into_set)
}

fn encode_entry<S: VariantSet, V: Variant<S>>(value: &S) -> Result<Value, EncodeError> {
    let payload = V::narrow(value).ok_or(EncodeError::TagMismatch {
        set: S::SET_NAME,
        tag: V::TAG,
    })?;
    codec::encode(payload)
}

/// Decode a polymorphic value of set `S`.
///
/// Reads `__typename`, dispatches to the registered decoder and decodes the
/// remaining fields. Missing or unregistered discriminators are errors; there
/// is no fallback variant.
pub fn decode_variant<S: VariantSet>(value: Value) -> Result<S, DecodeError> {
    let Value::Object(mut fields) = value else {
        return Err(DecodeError::new(DecodeErrorKind::shape(
            format!("{} object", S::SET_NAME),
            describe(&value),
        )));
    };

    let tag = match fields.remove(TYPENAME_KEY) {
        None | Some(Value::Null) => {
            return Err(DecodeError::new(DecodeErrorKind::MissingDiscriminator {
                set: S::SET_NAME,
            }));
        }
        Some(Value::String(tag)) => tag,
        Some(other) => {
            return Err(DecodeError::new(DecodeErrorKind::UnknownVariant {
                set: S::SET_NAME,
                tag: other.to_string(),
            })
            .in_field(TYPENAME_KEY));
        }
    };

    let Some(entry) = S::table().get(&tag) else {
        debug!(set = S::SET_NAME, tag = %tag, "unregistered discriminator");
        return Err(DecodeError::new(DecodeErrorKind::UnknownVariant {
            set: S::SET_NAME,
            tag,
        }));
    };

    entry.decode(Value::Object(fields))
}

/// Encode a polymorphic value, re-adding `__typename` from its tag.
pub fn encode_variant<S: VariantSet>(value: &S) -> Result<Value, EncodeError> {
    let tag = value.tag();
    let entry = S::table().get(tag).ok_or(EncodeError::TagMismatch {
        set: S::SET_NAME,
        tag,
    })?;
    match entry.encode(value)? {
        Value::Object(mut fields) => {
            fields.insert(TYPENAME_KEY.to_string(), Value::String(tag.to_string()));
            Ok(Value::Object(fields))
        }
        _ => Err(EncodeError::NonObjectVariant {
            set: S::SET_NAME,
            tag,
        }),
    }
}

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;

    use serde::de::Error as _;

    use super::VariantSet;

    pub fn serialize<S, Ser>(value: &S, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        S: VariantSet,
        Ser: serde::Serializer,
    {
        use serde::Serialize as _;
        use serde::ser::Error as _;

        super::encode_variant(value)
            .map_err(Ser::Error::custom)?
            .serialize(serializer)
    }

    pub fn deserialize<'de, S, D>(deserializer: D) -> Result<S, D::Error>
    where
        S: VariantSet,
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize as _;

        let value = serde_json::Value::deserialize(deserializer)?;
        super::decode_variant::<S>(value).map_err(|err| D::Error::custom(crate::codec::hand_off(err)))
    }
}

/// Declare a closed variant set.
///
/// Generates the enum, its [`VariantSet`] impl backed by a lazily built
/// [`VariantTable`], one [`Variant`] impl plus a named narrowing accessor per
/// member, and serde impls that route through the registry so the set can be
/// used as a record field.
///
/// ```rust,ignore
/// variant_set! {
///     /// Anything stored in the catalog.
///     pub enum CatalogObject {
///         CatalogItem(CatalogItem) => as_item,
///         CatalogCategory(CatalogCategory) => as_category,
///     }
/// }
/// ```
#[macro_export]
macro_rules! variant_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $set:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty) => $accessor:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $set {
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )+
        }

        impl $crate::registry::VariantSet for $set {
            const SET_NAME: &'static str = stringify!($set);

            fn table() -> &'static $crate::registry::VariantTable<Self> {
                static TABLE: ::std::sync::LazyLock<$crate::registry::VariantTable<$set>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::registry::VariantTable::builder()
                            $(.variant::<$payload>())+
                            .build()
                    });
                &TABLE
            }

            fn tag(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                }
            }
        }

        $(
            impl $crate::registry::Variant<$set> for $payload {
                const TAG: &'static str = stringify!($variant);

                fn narrow(set: &$set) -> ::core::option::Option<&Self> {
                    #[allow(unreachable_patterns)]
                    match set {
                        $set::$variant(payload) => ::core::option::Option::Some(payload),
                        _ => ::core::option::Option::None,
                    }
                }

                fn into_set(self) -> $set {
                    $set::$variant(self)
                }
            }
        )+

        impl $set {
            $(
                #[doc = concat!("Narrow to `", stringify!($variant), "`.")]
                #[must_use]
                pub fn $accessor(&self) -> ::core::option::Option<&$payload> {
                    <$payload as $crate::registry::Variant<$set>>::narrow(self)
                }
            )+
        }

        impl $crate::registry::__private::serde::Serialize for $set {
            fn serialize<Ser>(&self, serializer: Ser) -> ::core::result::Result<Ser::Ok, Ser::Error>
            where
                Ser: $crate::registry::__private::serde::Serializer,
            {
                $crate::registry::__private::serialize(self, serializer)
            }
        }

        impl<'de> $crate::registry::__private::serde::Deserialize<'de> for $set {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::registry::__private::serde::Deserializer<'de>,
            {
                $crate::registry::__private::deserialize(deserializer)
            }
        }
    };
}
