//! Error types for typeval
//!
//! This module defines all error types produced while constructing,
//! persisting, and configuring typed values.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for typeval operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for typed value construction and persistence
#[derive(Debug, Error)]
pub enum Error {
    /// A typed string received an input it refuses in the current mode
    #[error("Value not a string")]
    InvalidInitialValue,

    /// A composite input had no way to become a string, even leniently
    #[error("Object of class {class} could not be converted to string")]
    NotStringConvertible {
        /// Class name of the offending object
        class: String,
    },

    /// An enum received a value outside its constant set
    #[error("Value not a const in enum {type_name}")]
    NotAnEnumConstant {
        /// Fully qualified name of the enum type
        type_name: String,
    },

    /// Persisted record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration value or document
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a `NotAnEnumConstant` for the given enum type name
    pub fn not_an_enum_constant(type_name: impl Into<String>) -> Self {
        Error::NotAnEnumConstant {
            type_name: type_name.into(),
        }
    }

    /// Build a `NotStringConvertible` for the given class name
    pub fn not_string_convertible(class: impl Into<String>) -> Self {
        Error::NotStringConvertible {
            class: class.into(),
        }
    }

    /// Build a `Serialization` error from any displayable cause
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        Error::Serialization(reason.to_string())
    }
}

impl From<rmp_serde::encode::Error> for Error {
    fn from(e: rmp_serde::encode::Error) -> Self {
        Error::serialization(e)
    }
}

impl From<rmp_serde::decode::Error> for Error {
    fn from(e: rmp_serde::decode::Error) -> Self {
        Error::serialization(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
