//! Persisted record format
//!
//! Typed values persist as a [`PersistedRecord`]: the type name plus an
//! ordered list of named constant fields. Two encodings are supported:
//!
//! - **Text**: `O:<len>:"<TypeName>":<count>:{<key><value>...}` where keys
//!   are `s:<len>:"...";` and values are `N;`, `b:0;`, `i:<n>;`,
//!   `d:<float>;` or `s:<len>:"...";`. Lengths count bytes.
//! - **Binary**: MessagePack of the same structure.

use crate::constant::Constant;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Write;

/// Name of the field holding the stored value
pub const DEFAULT_FIELD: &str = "__default";

/// Type-tagged list of named fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    type_name: String,
    fields: Vec<(String, Constant)>,
}

impl PersistedRecord {
    /// Record with no fields
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Record holding a single `__default` field
    pub fn with_default(type_name: impl Into<String>, value: Constant) -> Self {
        Self::new(type_name).with_field(DEFAULT_FIELD, value)
    }

    /// Builder-style field append
    pub fn with_field(mut self, name: impl Into<String>, value: Constant) -> Self {
        self.fields.push((name.into(), value));
        self
    }

    /// Type tag
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Fail unless the record is tagged `expected`
    pub fn expect_type(&self, expected: &str) -> Result<()> {
        if self.type_name != expected {
            return Err(Error::Serialization(format!(
                "expected record of type {}, found {}",
                expected, self.type_name
            )));
        }
        Ok(())
    }

    /// Consume a record that must hold exactly one `__default` field
    pub fn into_default_field(self) -> Result<Constant> {
        let count = self.fields.len();
        let mut fields = self.fields.into_iter();
        match (fields.next(), count) {
            (Some((key, value)), 1) if key == DEFAULT_FIELD => Ok(value),
            _ => Err(Error::Serialization(format!(
                "record of type {} must hold exactly one {} field, found {}",
                self.type_name, DEFAULT_FIELD, count
            ))),
        }
    }

    // ========================================================================
    // Binary encoding
    // ========================================================================

    /// Serialize to bytes (MessagePack)
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec(self)?)
    }

    /// Deserialize from bytes (MessagePack)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(rmp_serde::from_slice(data)?)
    }

    // ========================================================================
    // Text encoding
    // ========================================================================

    /// Encode as text
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "O:{}:\"{}\":{}:{{",
            self.type_name.len(),
            self.type_name,
            self.fields.len()
        );
        for (key, value) in &self.fields {
            write_string(&mut out, key);
            write_constant(&mut out, value);
        }
        out.push('}');
        out
    }

    /// Decode from text
    pub fn parse_text(input: &str) -> Result<Self> {
        let mut cursor = Cursor::new(input);
        cursor.expect("O:")?;
        let name_len = cursor.read_number::<usize>(b':')?;
        cursor.expect("\"")?;
        let type_name = cursor.take(name_len)?.to_string();
        cursor.expect("\":")?;
        let count = cursor.read_number::<usize>(b':')?;
        cursor.expect("{")?;

        let mut fields = Vec::with_capacity(count.min(16));
        for _ in 0..count {
            let key = match cursor.read_constant()? {
                Constant::String(key) => key.into_owned(),
                other => {
                    return Err(Error::Serialization(format!(
                        "field name must be a string, found {:?}",
                        other
                    )))
                }
            };
            let value = cursor.read_constant()?;
            fields.push((key, value));
        }
        cursor.expect("}")?;
        cursor.finish()?;

        Ok(Self { type_name, fields })
    }
}

fn write_string(out: &mut String, s: &str) {
    let _ = write!(out, "s:{}:\"{}\";", s.len(), s);
}

fn write_constant(out: &mut String, value: &Constant) {
    match value {
        Constant::Null => out.push_str("N;"),
        Constant::Bool(b) => {
            let _ = write!(out, "b:{};", u8::from(*b));
        }
        Constant::Int(i) => {
            let _ = write!(out, "i:{};", i);
        }
        Constant::Float(f) => {
            let _ = if f.is_nan() {
                write!(out, "d:NAN;")
            } else if f.is_infinite() {
                write!(out, "d:{}INF;", if *f < 0.0 { "-" } else { "" })
            } else {
                // Display is the shortest representation that parses back exactly
                write!(out, "d:{};", f)
            };
        }
        Constant::String(s) => write_string(out, s),
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn error(&self, what: &str) -> Error {
        Error::serialization(format_args!("{} at offset {}", what, self.pos))
    }

    fn expect(&mut self, literal: &str) -> Result<()> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", literal)))
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn read_until(&mut self, delimiter: u8) -> Result<&'a str> {
        let rest = &self.input.as_bytes()[self.pos..];
        let end = rest
            .iter()
            .position(|b| *b == delimiter)
            .ok_or_else(|| self.error(&format!("missing '{}'", delimiter as char)))?;
        let token = &self.input[self.pos..self.pos + end];
        self.pos += end + 1;
        Ok(token)
    }

    fn read_number<T: std::str::FromStr>(&mut self, delimiter: u8) -> Result<T> {
        let start = self.pos;
        let token = self.read_until(delimiter)?;
        token.parse().map_err(|_| {
            Error::serialization(format_args!("invalid number '{}' at offset {}", token, start))
        })
    }

    fn take(&mut self, len: usize) -> Result<&'a str> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or_else(|| self.error("length exceeds input"))?;
        let token = self
            .input
            .get(self.pos..end)
            .ok_or_else(|| self.error("length exceeds input"))?;
        self.pos = end;
        Ok(token)
    }

    fn read_constant(&mut self) -> Result<Constant> {
        match self.peek() {
            Some(b'N') => {
                self.expect("N;")?;
                Ok(Constant::Null)
            }
            Some(b'b') => {
                self.expect("b:")?;
                match self.read_until(b';')? {
                    "0" => Ok(Constant::Bool(false)),
                    "1" => Ok(Constant::Bool(true)),
                    _ => Err(self.error("invalid bool")),
                }
            }
            Some(b'i') => {
                self.expect("i:")?;
                Ok(Constant::Int(self.read_number(b';')?))
            }
            Some(b'd') => {
                self.expect("d:")?;
                let start = self.pos;
                let token = self.read_until(b';')?;
                let f = match token {
                    "NAN" => f64::NAN,
                    "INF" => f64::INFINITY,
                    "-INF" => f64::NEG_INFINITY,
                    other => other.parse().map_err(|_| {
                        Error::Serialization(format!(
                            "invalid float '{}' at offset {}",
                            other, start
                        ))
                    })?,
                };
                Ok(Constant::Float(f))
            }
            Some(b's') => {
                self.expect("s:")?;
                let len = self.read_number::<usize>(b':')?;
                self.expect("\"")?;
                let s = self.take(len)?.to_string();
                self.expect("\";")?;
                Ok(Constant::String(Cow::Owned(s)))
            }
            Some(_) => Err(self.error("unsupported value tag")),
            None => Err(self.error("unexpected end of record")),
        }
    }

    fn finish(&self) -> Result<()> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.error("trailing data"))
        }
    }
}
