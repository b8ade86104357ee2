//! Typed scalar values for typeval
//!
//! This crate provides the two value types built on `typeval-core`:
//! - TypedString: a string with strict or lenient construction
//! - EnumType: a value constrained to a declared constant table
//!
//! Core types are re-exported so most callers need only this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod enum_type;
pub mod typed_string;

pub use enum_type::{BaseEnum, EnumConstants, EnumType};
pub use typed_string::TypedString;

pub use typeval_core::{
    Callable, CoercionConfig, Constant, ConversionContext, Diagnostics, Error, ForeignObject,
    Notice, PersistedRecord, PlainObject, Resource, Result, Severity, Stringable, Value,
    DEFAULT_FIELD,
};
