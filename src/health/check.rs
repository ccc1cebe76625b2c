//! Core health check trait and types

use std::fmt;

use crate::error::Result;

/// Nagios status level of a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Everything is fine
    Ok,
    /// Something looks off, but nobody needs paging
    Warning,
    /// Broken
    Critical,
    /// The probe could not tell
    Unknown,
    /// A numeric status outside the plugin contract
    Undefined(i32),
}

impl StatusLevel {
    /// Maps a numeric plugin status onto a level; never fails
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => StatusLevel::Ok,
            1 => StatusLevel::Warning,
            2 => StatusLevel::Critical,
            3 => StatusLevel::Unknown,
            other => StatusLevel::Undefined(other),
        }
    }

    /// Process exit code for this level
    ///
    /// Undefined levels exit as UNKNOWN.
    pub fn exit_code(&self) -> i32 {
        match self {
            StatusLevel::Ok => 0,
            StatusLevel::Warning => 1,
            StatusLevel::Critical => 2,
            StatusLevel::Unknown | StatusLevel::Undefined(_) => 3,
        }
    }

    /// Returns true for OK and WARNING
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusLevel::Ok | StatusLevel::Warning)
    }

    /// Prefix placed before the summary text on the status line
    pub fn prefix(&self) -> String {
        match self {
            StatusLevel::Undefined(code) => format!("UNKNOWN: Exit code '{}' undefined: ", code),
            level => format!("{}: ", level),
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Ok => f.write_str("OK"),
            StatusLevel::Warning => f.write_str("WARNING"),
            StatusLevel::Critical => f.write_str("CRITICAL"),
            StatusLevel::Unknown | StatusLevel::Undefined(_) => f.write_str("UNKNOWN"),
        }
    }
}

/// Outcome of one probe, ready for the reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthResult {
    /// Overall status level
    pub status: StatusLevel,
    /// One-line summary shown after the level
    pub text: String,
    /// Performance data shown after the `|`
    pub perfdata: String,
    /// Detail lines printed below the status line
    pub details: Vec<String>,
}

impl HealthResult {
    /// Creates a result with the given status and no perfdata or details
    pub fn new(status: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
            perfdata: String::new(),
            details: Vec::new(),
        }
    }

    /// Creates an OK result
    pub fn ok(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Ok, text)
    }

    /// Creates a WARNING result
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, text)
    }

    /// Creates a CRITICAL result
    pub fn critical(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Critical, text)
    }

    /// Creates an UNKNOWN result
    pub fn unknown(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Unknown, text)
    }

    /// Sets the performance data string
    pub fn with_perfdata(mut self, perfdata: impl Into<String>) -> Self {
        self.perfdata = perfdata.into();
        self
    }

    /// Sets the detail lines
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Process exit code for this result
    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}

/// Trait for probes that produce a single health result
pub trait SystemCheck {
    /// Name of the system being checked
    fn name(&self) -> &'static str;

    /// Perform the health check
    ///
    /// Errors are fatal to the probe and are reported by the caller.
    fn check(&self) -> Result<HealthResult>;

    /// Optional description of what this check validates
    fn description(&self) -> Option<&'static str> {
        None
    }
}
