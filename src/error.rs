//! Unified error types for the Signalglow firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! control loop's error handling uniform.  All variants are `Copy` so they
//! can be passed around without allocation.
//!
//! Scan failures are deliberately fatal: the loop propagates the first one
//! and terminates rather than retrying, and the supervisor (task watchdog /
//! abort path) restarts the device.  An empty scan result is NOT an error;
//! the monitor substitutes the configured floor signal and carries on.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The radio scan primitive failed.
    Scan(ScanError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "scan: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Scan errors
// ---------------------------------------------------------------------------

/// Failure of the underlying radio scan.  Always fatal to the control loop;
/// there is no retry policy (see module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The station interface is not up (stopped, or never started).
    RadioUnavailable,
    /// The WiFi driver rejected or aborted the scan.  Carries the raw
    /// `esp_err_t` code on device builds.
    ScanFailed(i32),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadioUnavailable => write!(f, "radio unavailable"),
            Self::ScanFailed(code) => write!(f, "driver scan failed (esp_err {code})"),
        }
    }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

impl std::error::Error for ScanError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
