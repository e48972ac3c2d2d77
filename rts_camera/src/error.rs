//! Error types for the RTS camera crate
//!
//! The camera math itself never fails: degenerate inputs are clamped.
//! These errors only come from the boundary (configuration files,
//! role lookups by name).

use std::fmt;
use std::panic::Location;
use crate::log::LogSeverity;

/// Result type for camera crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera crate errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A configuration value is outside its valid range
    InvalidConfig(String),

    /// Configuration text could not be parsed
    ConfigParse(String),

    /// Configuration file exists but could not be read
    Io(String),

    /// A role name did not match any camera role
    UnknownCameraRole(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::ConfigParse(msg) => write!(f, "Config parse error: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::UnknownCameraRole(name) => write!(f, "Unknown camera role: {}", name),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error before handing it back to the caller.
///
/// The entry carries the file:line of the call site, not of this helper.
#[track_caller]
pub(crate) fn log_and_return(source: &str, error: Error) -> Error {
    let location = Location::caller();
    crate::log::log_detailed(
        LogSeverity::Error,
        source,
        error.to_string(),
        location.file(),
        location.line(),
    );
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
