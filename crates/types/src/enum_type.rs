//! Enumerated values
//!
//! An [`EnumType<E>`] holds one constant from the table declared by `E`.
//! Tables are ordered `(name, Constant)` slices fixed at compile time and
//! must contain a `__default` entry, which is the value of
//! `EnumType::<E>::default()`.
//!
//! Membership is checked one of two ways:
//! - strict: the input must be identical (same type, same value) to a constant
//! - lenient (the default): the first constant loosely equal to the input,
//!   in declaration order, is stored
//!
//! The stored value is always the canonical constant, never the raw input.
//!
//! # Declaring an enum
//!
//! ```
//! use typeval_types::{enum_constants, Constant, EnumType};
//!
//! enum_constants! {
//!     /// Card suit
//!     pub struct Suit as "Suit" {
//!         __default = Constant::str("hearts"),
//!         HEARTS = Constant::str("hearts"),
//!         SPADES = Constant::str("spades"),
//!     }
//! }
//!
//! let suit = EnumType::<Suit>::new("spades", true).unwrap();
//! assert_eq!(suit.constant_name(), "SPADES");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use typeval_core::convert::{constant_to_float, constant_to_int, constant_to_string, loose_eq};
use typeval_core::{
    Constant, Error, PersistedRecord, Result, Value, DEFAULT_FIELD, DEFAULT_PRECISION,
};

/// Constant table of an enum type
pub trait EnumConstants: 'static {
    /// Type tag used in error messages and persisted records
    const TYPE_NAME: &'static str;

    /// Ordered `(name, constant)` table
    fn constants() -> &'static [(&'static str, Constant)];

    /// Value of the `__default` entry
    ///
    /// Tables without one fall back to their first entry, then to null.
    fn default_constant() -> Constant {
        let table = Self::constants();
        table
            .iter()
            .find(|(name, _)| *name == DEFAULT_FIELD)
            .or_else(|| table.first())
            .map(|(_, constant)| constant.clone())
            .unwrap_or(Constant::Null)
    }
}

/// Declare a marker type implementing [`EnumConstants`]
///
/// Each entry is `NAME = <const expression of type Constant>`. The table
/// keeps declaration order, which is the order lenient matching walks.
#[macro_export]
macro_rules! enum_constants {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident as $type_name:literal {
            $($key:ident = $value:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::EnumConstants for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn constants() -> &'static [(&'static str, $crate::Constant)] {
                static CONSTANTS: &[(&str, $crate::Constant)] =
                    &[$((stringify!($key), $value)),*];
                CONSTANTS
            }
        }
    };
}

enum_constants! {
    /// Base enum: a single `__default` constant holding null
    pub struct BaseEnum as "EnumType" {
        __default = Constant::Null,
    }
}

/// Value constrained to the constant table of `E`
pub struct EnumType<E: EnumConstants = BaseEnum> {
    value: Constant,
    _marker: PhantomData<fn() -> E>,
}

impl<E: EnumConstants> EnumType<E> {
    /// Type tag used in error messages and persisted records
    pub const TYPE_NAME: &'static str = E::TYPE_NAME;

    /// Strictness used when none is given
    pub const DEFAULT_STRICT: bool = false;

    fn from_constant(value: Constant) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Declared constants, in declaration order
    pub fn constants() -> &'static [(&'static str, Constant)] {
        E::constants()
    }

    /// Construct from any input
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnEnumConstant`] when no constant matches.
    pub fn new<V: Into<Value>>(initial_value: V, strict: bool) -> Result<Self> {
        let initial_value = initial_value.into();
        let matched = E::constants().iter().find(|(_, constant)| {
            if strict {
                constant.is_identical(&initial_value)
            } else {
                loose_eq(&initial_value, constant)
            }
        });

        match matched {
            Some((_, constant)) => Ok(Self::from_constant(constant.clone())),
            None => {
                tracing::debug!(
                    target: "typeval::construct",
                    type_name = E::TYPE_NAME,
                    input = initial_value.type_name(),
                    strict,
                    "no enum constant matched"
                );
                Err(Error::not_an_enum_constant(E::TYPE_NAME))
            }
        }
    }

    /// Construct with the default strictness (lenient)
    pub fn with_initial_value<V: Into<Value>>(initial_value: V) -> Result<Self> {
        Self::new(initial_value, Self::DEFAULT_STRICT)
    }

    /// Stored constant
    pub fn value(&self) -> &Constant {
        &self.value
    }

    /// Name of the stored constant
    ///
    /// A named entry is preferred over `__default` when both hold the value.
    pub fn constant_name(&self) -> &'static str {
        let table = E::constants();
        table
            .iter()
            .find(|(name, constant)| *name != DEFAULT_FIELD && *constant == self.value)
            .or_else(|| table.iter().find(|(_, constant)| *constant == self.value))
            .map(|(name, _)| *name)
            .unwrap_or(DEFAULT_FIELD)
    }

    /// Integer projection (null is 0)
    pub fn to_int(&self) -> i64 {
        constant_to_int(&self.value)
    }

    /// Float projection (null is 0.0)
    pub fn to_float(&self) -> f64 {
        constant_to_float(&self.value)
    }

    /// Mapping projection: `{"__default": value}`
    pub fn to_mapping(&self) -> BTreeMap<String, Constant> {
        let mut map = BTreeMap::new();
        map.insert(DEFAULT_FIELD.to_string(), self.value.clone());
        map
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Record carrying the current value
    pub fn to_record(&self) -> PersistedRecord {
        PersistedRecord::with_default(E::TYPE_NAME, self.value.clone())
    }

    /// Restore from a record
    ///
    /// # Errors
    ///
    /// - [`Error::Serialization`] for a foreign or malformed record
    /// - [`Error::NotAnEnumConstant`] when the value is not in the table
    pub fn from_record(record: PersistedRecord) -> Result<Self> {
        record.expect_type(E::TYPE_NAME)?;
        let value = record.into_default_field()?;
        if !E::constants().iter().any(|(_, constant)| *constant == value) {
            return Err(Error::not_an_enum_constant(E::TYPE_NAME));
        }
        Ok(Self::from_constant(value))
    }

    /// Text encoding, e.g. `O:8:"EnumType":1:{s:9:"__default";N;}`
    pub fn persist(&self) -> String {
        self.to_record().to_text()
    }

    /// Restore from the text encoding
    pub fn restore(encoded: &str) -> Result<Self> {
        Self::from_record(PersistedRecord::parse_text(encoded)?)
    }

    /// Binary encoding (MessagePack)
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_record().to_bytes()
    }

    /// Restore from the binary encoding
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_record(PersistedRecord::from_bytes(data)?)
    }
}

impl<E: EnumConstants> Default for EnumType<E> {
    fn default() -> Self {
        Self::from_constant(E::default_constant())
    }
}

impl<E: EnumConstants> Clone for EnumType<E> {
    fn clone(&self) -> Self {
        Self::from_constant(self.value.clone())
    }
}

impl<E: EnumConstants> PartialEq for EnumType<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E: EnumConstants> fmt::Debug for EnumType<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(E::TYPE_NAME)
            .field("value", &self.value)
            .finish()
    }
}

impl<E: EnumConstants> fmt::Display for EnumType<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&constant_to_string(&self.value, DEFAULT_PRECISION))
    }
}

impl<E: EnumConstants> Serialize for EnumType<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de, E: EnumConstants> Deserialize<'de> for EnumType<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = PersistedRecord::deserialize(deserializer)?;
        Self::from_record(record).map_err(serde::de::Error::custom)
    }
}
