//! Coercion configuration via `typeval.toml`
//!
//! Controls how floats are rendered and where notices go. Every field has a
//! default, so an empty file is a valid configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by hosts that keep one on disk.
pub const CONFIG_FILE_NAME: &str = "typeval.toml";

/// Significant digits used when a float becomes a string.
pub const DEFAULT_PRECISION: usize = 14;

/// Largest precision that still changes the rendered digits of an f64.
pub const MAX_PRECISION: usize = 17;

/// Coercion configuration loaded from `typeval.toml`.
///
/// # Example
///
/// ```toml
/// # Significant digits for float to string conversion (1-17)
/// precision = 14
///
/// # Collect notices in the caller's diagnostics list
/// report_notices = true
///
/// # Mirror notices to tracing
/// log_notices = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoercionConfig {
    /// Significant digits for float to string conversion.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Record notices in the caller's `Diagnostics`.
    #[serde(default = "default_true")]
    pub report_notices: bool,
    /// Emit notices through `tracing`.
    #[serde(default = "default_true")]
    pub log_notices: bool,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_true() -> bool {
    true
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            report_notices: true,
            log_notices: true,
        }
    }
}

impl CoercionConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is outside `1..=17`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PRECISION).contains(&self.precision) {
            return Err(Error::Config(format!(
                "precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# typeval coercion configuration
#
# Significant digits used when a float is converted to a string (1-17).
# 14 renders 0.9999999999999999 as "1"; 17 keeps every digit.
precision = 14

# Record notices (e.g. "Array to string conversion") in the caller's
# diagnostics list.
report_notices = true

# Mirror notices to tracing under the "typeval::notice" target.
log_notices = true
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CoercionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => {
                Error::Config(format!("config file '{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
