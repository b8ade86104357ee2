//! typeval - strict and lenient typed scalar values
//!
//! Two value types guarantee what they hold:
//! - [`TypedString`] always contains a valid string
//! - [`EnumType`] always contains one constant of its declared table
//!
//! Each accepts an arbitrary [`Value`] at construction, either strictly
//! (exact type or identity only) or leniently (best-effort conversion).
//!
//! # Quick Start
//!
//! ```
//! use typeval::{ConversionContext, EnumType, TypedString, Value};
//!
//! let s = TypedString::new(0.1, false)?;
//! assert_eq!(s.as_str(), "0.1");
//!
//! assert!(TypedString::with_initial_value(42i64).is_err());
//!
//! let mut ctx = ConversionContext::new();
//! let s = TypedString::new_in(vec![Value::from("a")], false, &mut ctx)?;
//! assert_eq!(s.as_str(), "Array");
//! assert_eq!(
//!     ctx.diagnostics().last().map(|n| n.message()),
//!     Some("Array to string conversion")
//! );
//!
//! let e: EnumType = EnumType::new(0i64, false)?;
//! assert!(e.value().is_null());
//! # Ok::<(), typeval::Error>(())
//! ```
//!
//! # Architecture
//!
//! `typeval-core` holds the input model, conversion rules, diagnostics,
//! configuration and persisted records. `typeval-types` builds the two value
//! types on top. This crate re-exports both.

pub use typeval_core::{config, convert, diagnostics, object, record};
pub use typeval_core::{
    coerce_to_string, format_float, loose_eq, CONFIG_FILE_NAME, DEFAULT_PRECISION, MAX_PRECISION,
};
pub use typeval_types::*;
