//! Diagnostic side channel
//!
//! Lenient coercion of composite inputs emits non-fatal notices. Instead of a
//! process-wide "last error" slot, notices are collected in a [`Diagnostics`]
//! list owned by the caller's [`ConversionContext`], and mirrored to
//! `tracing` under the `typeval::notice` target.

use crate::config::CoercionConfig;
use std::fmt;
use std::panic::Location;

/// Severity of a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Advisory: the operation continued
    Notice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Notice => f.write_str("Notice"),
        }
    }
}

/// A single diagnostic record with the construction site that caused it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    severity: Severity,
    message: String,
    file: &'static str,
    line: u32,
    column: u32,
}

impl Notice {
    /// Create a record located at `location`
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Severity level
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Source file of the construction site
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the construction site
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source column of the construction site
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} in {} on line {}",
            self.severity, self.message, self.file, self.line
        )
    }
}

/// Ordered list of notices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    notices: Vec<Notice>,
}

impl Diagnostics {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Most recent record
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Remove and return all records
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Drop all records
    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

/// Configuration plus notice sink threaded through a construction
///
/// One context can serve many constructions; notices accumulate until
/// taken or cleared.
#[derive(Debug, Clone, Default)]
pub struct ConversionContext {
    config: CoercionConfig,
    diagnostics: Diagnostics,
}

impl ConversionContext {
    /// Context with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with an explicit configuration
    pub fn with_config(config: CoercionConfig) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &CoercionConfig {
        &self.config
    }

    /// Collected notices
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Collected notices, mutably
    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Remove and return all collected notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.diagnostics.take()
    }

    /// Emit a notice located at `location`
    pub fn notice(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        location: &'static Location<'static>,
    ) {
        let notice = Notice::new(severity, message, location);
        if self.config.log_notices {
            tracing::warn!(
                target: "typeval::notice",
                severity = %notice.severity(),
                file = notice.file(),
                line = notice.line(),
                column = notice.column(),
                "{}",
                notice.message()
            );
        }
        if self.config.report_notices {
            self.diagnostics.push(notice);
        }
    }
}
