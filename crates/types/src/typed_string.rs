//! Typed string
//!
//! A [`TypedString`] always holds a valid string. Construction takes an
//! arbitrary [`Value`] and a strictness flag:
//!
//! | Input | strict | lenient |
//! |-------|--------|---------|
//! | string | kept | kept |
//! | null, bool, int, float | rejected | converted (`""`, `"1"`, decimal) |
//! | array | rejected | notice, then `"Array"` |
//! | object with string capability | rejected | capability result |
//! | object without capability, callable | rejected | notice, then error |
//! | resource | rejected | `"Resource id #N"` |
//!
//! Strict is the default. Rejections fail with
//! [`Error::InvalidInitialValue`].
//!
//! ## Persistence
//!
//! A typed string encodes its content, but restoring from any valid record
//! yields the default empty string. Content never survives a persist/restore
//! cycle.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;
use typeval_core::convert::{coerce_to_string, string_to_float, string_to_int};
use typeval_core::{
    Constant, ConversionContext, Error, PersistedRecord, Result, Value, DEFAULT_FIELD,
};

static CONSTANTS: &[(&str, Constant)] = &[(DEFAULT_FIELD, Constant::str(""))];

/// String wrapper with strict or lenient construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypedString {
    value: String,
}

impl TypedString {
    /// Type tag used in persisted records
    pub const TYPE_NAME: &'static str = "TypedString";

    /// Strictness used when none is given
    pub const DEFAULT_STRICT: bool = true;

    /// Declared constants: only `__default`, the empty string
    pub fn constants() -> &'static [(&'static str, Constant)] {
        CONSTANTS
    }

    /// Construct from any input
    ///
    /// Notices raised by lenient coercion go to `tracing` only; use
    /// [`TypedString::new_in`] to collect them.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInitialValue`] when `strict` and the input is not a string
    /// - [`Error::NotStringConvertible`] for objects without a string
    ///   capability and callables, in either mode
    #[track_caller]
    pub fn new<V: Into<Value>>(initial_value: V, strict: bool) -> Result<Self> {
        let mut ctx = ConversionContext::new();
        Self::construct(initial_value.into(), strict, &mut ctx, Location::caller())
    }

    /// Construct with the default strictness (strict)
    #[track_caller]
    pub fn with_initial_value<V: Into<Value>>(initial_value: V) -> Result<Self> {
        let mut ctx = ConversionContext::new();
        Self::construct(
            initial_value.into(),
            Self::DEFAULT_STRICT,
            &mut ctx,
            Location::caller(),
        )
    }

    /// Construct inside a caller-owned context
    ///
    /// The context supplies float precision and collects notices, each
    /// stamped with the caller's source location.
    #[track_caller]
    pub fn new_in<V: Into<Value>>(
        initial_value: V,
        strict: bool,
        ctx: &mut ConversionContext,
    ) -> Result<Self> {
        Self::construct(initial_value.into(), strict, ctx, Location::caller())
    }

    fn construct(
        initial_value: Value,
        strict: bool,
        ctx: &mut ConversionContext,
        location: &'static Location<'static>,
    ) -> Result<Self> {
        let value = match initial_value {
            Value::String(s) => s,
            other if strict => {
                tracing::debug!(
                    target: "typeval::construct",
                    type_name = Self::TYPE_NAME,
                    input = other.type_name(),
                    "strict construction rejected non-string input"
                );
                return Err(Error::InvalidInitialValue);
            }
            other => coerce_to_string(&other, ctx, location)?,
        };
        Ok(Self { value })
    }

    /// Stored string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume and return the stored string
    pub fn into_string(self) -> String {
        self.value
    }

    /// Integer projection (leading numeric prefix, otherwise 0)
    pub fn to_int(&self) -> i64 {
        string_to_int(&self.value)
    }

    /// Float projection (leading numeric prefix, otherwise 0.0)
    pub fn to_float(&self) -> f64 {
        string_to_float(&self.value)
    }

    /// Mapping projection: `{"__default": value}`
    pub fn to_mapping(&self) -> BTreeMap<String, Constant> {
        let mut map = BTreeMap::new();
        map.insert(
            DEFAULT_FIELD.to_string(),
            Constant::String(Cow::Owned(self.value.clone())),
        );
        map
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Record carrying the current content
    pub fn to_record(&self) -> PersistedRecord {
        PersistedRecord::with_default(
            Self::TYPE_NAME,
            Constant::String(Cow::Owned(self.value.clone())),
        )
    }

    /// Restore from a record
    ///
    /// The record must be a well-formed typed-string record; its content is
    /// discarded and the default value is returned.
    pub fn from_record(record: PersistedRecord) -> Result<Self> {
        record.expect_type(Self::TYPE_NAME)?;
        match record.into_default_field()? {
            Constant::String(discarded) => {
                tracing::debug!(
                    target: "typeval::persist",
                    discarded_len = discarded.len(),
                    "typed string restored to default"
                );
                Ok(Self::default())
            }
            other => Err(Error::Serialization(format!(
                "{} field of {} must be a string, found {:?}",
                DEFAULT_FIELD,
                Self::TYPE_NAME,
                other
            ))),
        }
    }

    /// Text encoding, e.g. `O:11:"TypedString":1:{s:9:"__default";s:3:"foo";}`
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

impl fmt::Display for TypedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for TypedString {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<TypedString> for String {
    fn from(s: TypedString) -> Self {
        s.value
    }
}

impl PartialEq<str> for TypedString {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for TypedString {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl Serialize for TypedString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TypedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = PersistedRecord::deserialize(deserializer)?;
        Self::from_record(record).map_err(serde::de::Error::custom)
    }
}
