//! Core types for typeval
//!
//! This crate defines the foundation shared by every typed value:
//! - Value: the input model (scalars, arrays, objects, callables, resources)
//! - ForeignObject: host objects with an optional string-conversion capability
//! - Constant: scalar payload of enum constant tables
//! - convert: float rendering, numeric strings, truthiness, loose equality
//! - Diagnostics: notices emitted by lenient coercion, with caller location
//! - CoercionConfig: `typeval.toml` configuration
//! - PersistedRecord: text and MessagePack encodings of persisted values
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod constant;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod object;
pub mod record;
pub mod value;

// Re-export commonly used types
pub use config::{CoercionConfig, CONFIG_FILE_NAME, DEFAULT_PRECISION, MAX_PRECISION};
pub use constant::Constant;
pub use convert::{coerce_to_string, format_float, loose_eq, Number};
pub use diagnostics::{ConversionContext, Diagnostics, Notice, Severity};
pub use error::{Error, Result};
pub use object::{Callable, ForeignObject, PlainObject, Resource, Stringable};
pub use record::{PersistedRecord, DEFAULT_FIELD};
pub use value::Value;
