//! Enum constant values
//!
//! A [`Constant`] is the scalar payload of one entry in an enum's constant
//! table. Tables are declared `static`, so strings are `Cow<'static, str>`
//! and every variant is const-constructible.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Scalar value stored by an enum type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Constant {
    /// Null constant
    Null,
    /// Boolean constant
    Bool(bool),
    /// Integer constant
    Int(i64),
    /// Float constant
    Float(f64),
    /// String constant
    String(Cow<'static, str>),
}

// Identity semantics, matching Value
impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Constant::Null, Constant::Null) => true,
            (Constant::Bool(a), Constant::Bool(b)) => a == b,
            (Constant::Int(a), Constant::Int(b)) => a == b,
            (Constant::Float(a), Constant::Float(b)) => a == b,
            (Constant::String(a), Constant::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Constant {
    /// String constant from a static literal
    pub const fn str(s: &'static str) -> Self {
        Constant::String(Cow::Borrowed(s))
    }

    /// Check if this is the null constant
    pub fn is_null(&self) -> bool {
        matches!(self, Constant::Null)
    }

    /// True when `value` has the same type and value as this constant
    pub fn is_identical(&self, value: &Value) -> bool {
        match (self, value) {
            (Constant::Null, Value::Null) => true,
            (Constant::Bool(a), Value::Bool(b)) => a == b,
            (Constant::Int(a), Value::Int(b)) => a == b,
            (Constant::Float(a), Value::Float(b)) => a == b,
            (Constant::String(a), Value::String(b)) => a.as_ref() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::convert::constant_to_string(
            self,
            crate::config::DEFAULT_PRECISION,
        ))
    }
}
