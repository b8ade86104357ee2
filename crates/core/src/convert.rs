//! Scalar conversion rules
//!
//! Shared helpers used by every typed value:
//! - float and integer rendering (`format_float`)
//! - numeric-string recognition (`parse_numeric`, `numeric_prefix`)
//! - truthiness and loose (`==`-style) comparison (`is_truthy`, `loose_eq`)
//! - projections of stored constants to string, int and float
//! - lenient string coercion of arbitrary inputs (`coerce_to_string`)

use crate::config::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::constant::Constant;
use crate::diagnostics::{ConversionContext, Severity};
use crate::error::{Error, Result};
use crate::value::Value;
use std::panic::Location;

/// Token produced when an array is forced into a string
pub const ARRAY_TOKEN: &str = "Array";

/// A number recognized inside a string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integral literal that fits in i64
    Int(i64),
    /// Anything with a fraction, an exponent, or out of i64 range
    Float(f64),
}

impl Number {
    /// Widen to f64
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Truncate to i64
    pub fn as_i64(self) -> i64 {
        match self {
            Number::Int(i) => i,
            Number::Float(f) => float_to_int(f),
        }
    }

    fn loosely_equals(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }

    /// String form compared against non-numeric strings
    ///
    /// Always 14 digits. A finite rendering is itself a numeric string, so
    /// only `INF`, `-INF` and `NAN` can ever match, and those do not depend
    /// on precision.
    fn render(self) -> String {
        match self {
            Number::Int(i) => i.to_string(),
            Number::Float(f) => format_float(f, DEFAULT_PRECISION),
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a float with `precision` significant digits
///
/// Shortest fixed notation is used while the decimal exponent stays within
/// `-4 ..= precision`; otherwise scientific notation with an upper-case `E`
/// and an explicit exponent sign (`1.0E+25`, `1.0E-5`). Trailing zeros are
/// dropped, so a float that rounds to an integer renders without a
/// fractional part.
pub fn format_float(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }

    let precision = precision.clamp(1, MAX_PRECISION);
    let sci = format!("{:.*e}", precision - 1, value.abs());
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    // position of the decimal point relative to the first digit
    let decpt = exponent + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if value.is_sign_negative() {
        out.push('-');
    }

    let scientific = if decpt < 0 {
        decpt < -3
    } else {
        decpt > precision as i32
    };

    if scientific {
        let exp = decpt - 1;
        out.push_str(&digits[..1]);
        out.push('.');
        if digits.len() == 1 {
            out.push('0');
        } else {
            out.push_str(&digits[1..]);
        }
        out.push('E');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&exp.abs().to_string());
    } else if decpt < 0 {
        out.push_str("0.");
        for _ in 0..(-decpt) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let point = decpt as usize;
        if digits.len() <= point {
            out.push_str(&digits);
            for _ in digits.len()..point {
                out.push('0');
            }
        } else {
            if point == 0 {
                out.push('0');
            } else {
                out.push_str(&digits[..point]);
            }
            out.push('.');
            out.push_str(&digits[point..]);
        }
    }
    out
}

/// Truncate a float toward zero; non-finite values become 0
pub fn float_to_int(f: f64) -> i64 {
    if f.is_finite() {
        // `as` saturates at the i64 bounds
        f.trunc() as i64
    } else {
        0
    }
}

// ============================================================================
// Numeric strings
// ============================================================================

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Scan a leading number; returns it and the byte offset just past it
fn scan_number(s: &str) -> Option<(Number, usize)> {
    let b = s.as_bytes();
    let len = b.len();
    let mut i = 0;
    while i < len && is_space(b[i]) {
        i += 1;
    }
    let start = i;
    if i < len && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut is_float = false;
    let mut frac_digits = 0;
    if i < len && b[i] == b'.' {
        let mut k = i + 1;
        while k < len && b[k].is_ascii_digit() {
            k += 1;
        }
        frac_digits = k - (i + 1);
        if int_digits > 0 || frac_digits > 0 {
            is_float = true;
            i = k;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if i < len && (b[i] == b'e' || b[i] == b'E') {
        let mut k = i + 1;
        if k < len && (b[k] == b'+' || b[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < len && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            is_float = true;
            i = k;
        }
    }

    let text = &s[start..i];
    let number = if is_float {
        Number::Float(text.parse().ok()?)
    } else {
        match text.parse::<i64>() {
            Ok(n) => Number::Int(n),
            Err(_) => Number::Float(text.parse().ok()?),
        }
    };
    Some((number, i))
}

/// Parse a fully numeric string (surrounding whitespace allowed)
pub fn parse_numeric(s: &str) -> Option<Number> {
    let (number, end) = scan_number(s)?;
    if s.as_bytes()[end..].iter().all(|b| is_space(*b)) {
        Some(number)
    } else {
        None
    }
}

/// Leading numeric prefix of a string, `Int(0)` when there is none
pub fn numeric_prefix(s: &str) -> Number {
    scan_number(s).map(|(n, _)| n).unwrap_or(Number::Int(0))
}

/// Integer projection of a string
pub fn string_to_int(s: &str) -> i64 {
    numeric_prefix(s).as_i64()
}

/// Float projection of a string
pub fn string_to_float(s: &str) -> f64 {
    numeric_prefix(s).as_f64()
}

// ============================================================================
// Truthiness and loose comparison
// ============================================================================

/// Boolean projection of an input
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) | Value::Callable(_) | Value::Resource(_) => true,
    }
}

/// Boolean projection of a constant
pub fn constant_truthy(constant: &Constant) -> bool {
    match constant {
        Constant::Null => false,
        Constant::Bool(b) => *b,
        Constant::Int(i) => *i != 0,
        Constant::Float(f) => *f != 0.0,
        Constant::String(s) => !(s.is_empty() || s == "0"),
    }
}

fn constant_number(constant: &Constant) -> Option<Number> {
    match constant {
        Constant::Int(i) => Some(Number::Int(*i)),
        Constant::Float(f) => Some(Number::Float(*f)),
        _ => None,
    }
}

/// Number against string: numerically when the string is numeric,
/// otherwise by string form
fn number_eq_string(number: Number, s: &str) -> bool {
    match parse_numeric(s) {
        Some(parsed) => number.loosely_equals(parsed),
        None => number.render() == s,
    }
}

fn strings_loosely_equal(a: &str, b: &str) -> bool {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => x.loosely_equals(y),
        _ => a == b,
    }
}

/// Loose (`==`-style) equality between an input and a constant
///
/// Null against a string compares with the empty string; null or bool
/// against anything else compares truthiness; numbers compare numerically,
/// including against numeric strings; two numeric strings compare
/// numerically. Arrays only ever equal null or a bool. Objects without a
/// string capability and callables count as the number 1.
pub fn loose_eq(value: &Value, constant: &Constant) -> bool {
    match (value, constant) {
        (Value::Null, Constant::Null) => true,
        (Value::Null, Constant::String(s)) => s.is_empty(),
        (Value::String(s), Constant::Null) => s.is_empty(),
        (v, Constant::Null) => !is_truthy(v),
        (Value::Null, c) => !constant_truthy(c),
        (Value::Bool(b), c) => *b == constant_truthy(c),
        (v, Constant::Bool(b)) => is_truthy(v) == *b,

        (Value::Int(a), c) => match constant_number(c) {
            Some(n) => Number::Int(*a).loosely_equals(n),
            None => match c {
                Constant::String(s) => number_eq_string(Number::Int(*a), s),
                _ => false,
            },
        },
        (Value::Float(a), c) => match constant_number(c) {
            Some(n) => Number::Float(*a).loosely_equals(n),
            None => match c {
                Constant::String(s) => number_eq_string(Number::Float(*a), s),
                _ => false,
            },
        },
        (Value::String(s), c) => match c {
            Constant::String(t) => strings_loosely_equal(s, t),
            other => constant_number(other)
                .map(|n| number_eq_string(n, s))
                .unwrap_or(false),
        },

        (Value::Array(_), _) => false,
        (Value::Object(o), Constant::String(s)) => {
            o.to_string_value().map(|t| t == *s).unwrap_or(false)
        }
        (Value::Object(_) | Value::Callable(_), c) => constant_number(c)
            .map(|n| Number::Int(1).loosely_equals(n))
            .unwrap_or(false),
        (Value::Resource(r), c) => constant_number(c)
            .map(|n| Number::Int(r.id() as i64).loosely_equals(n))
            .unwrap_or(false),
    }
}

// ============================================================================
// Constant projections
// ============================================================================

/// String projection of a constant
pub fn constant_to_string(constant: &Constant, precision: usize) -> String {
    match constant {
        Constant::Null => String::new(),
        Constant::Bool(true) => "1".to_string(),
        Constant::Bool(false) => String::new(),
        Constant::Int(i) => i.to_string(),
        Constant::Float(f) => format_float(*f, precision),
        Constant::String(s) => s.to_string(),
    }
}

/// Integer projection of a constant
pub fn constant_to_int(constant: &Constant) -> i64 {
    match constant {
        Constant::Null => 0,
        Constant::Bool(b) => *b as i64,
        Constant::Int(i) => *i,
        Constant::Float(f) => float_to_int(*f),
        Constant::String(s) => string_to_int(s),
    }
}

/// Float projection of a constant
pub fn constant_to_float(constant: &Constant) -> f64 {
    match constant {
        Constant::Null => 0.0,
        Constant::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Constant::Int(i) => *i as f64,
        Constant::Float(f) => *f,
        Constant::String(s) => string_to_float(s),
    }
}

// ============================================================================
// Lenient string coercion
// ============================================================================

/// Convert any input into a string, best effort
///
/// Arrays record an advisory notice and become `"Array"`. Objects without a
/// string capability and callables record a notice and then fail with
/// [`Error::NotStringConvertible`]. Notices carry `location`.
pub fn coerce_to_string(
    value: &Value,
    ctx: &mut ConversionContext,
    location: &'static Location<'static>,
) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) => Ok(String::new()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(format_float(*f, ctx.config().precision)),
        Value::String(s) => Ok(s.clone()),
        Value::Array(_) => {
            ctx.notice(Severity::Notice, "Array to string conversion", location);
            Ok(ARRAY_TOKEN.to_string())
        }
        Value::Object(object) => match object.to_string_value() {
            Some(s) => Ok(s),
            None => Err(not_convertible(object.class_name(), ctx, location)),
        },
        Value::Callable(callable) => Err(not_convertible(callable.class_name(), ctx, location)),
        Value::Resource(resource) => {
            tracing::debug!(
                target: "typeval::convert",
                id = resource.id(),
                kind = resource.kind(),
                "resource converted to its descriptive name"
            );
            Ok(resource.descriptive_name())
        }
    }
}

fn not_convertible(
    class: &str,
    ctx: &mut ConversionContext,
    location: &'static Location<'static>,
) -> Error {
    ctx.notice(
        Severity::Notice,
        format!("Object of class {} to string conversion", class),
        location,
    );
    Error::not_string_convertible(class)
}
