//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (the WiFi scanner, the LED driver, the idle primitive)
//! implement these traits.  The
//! [`MonitorService`](super::service::MonitorService) consumes them via
//! generics, so the domain core never touches hardware directly and the
//! whole loop runs against mocks on the host.

use crate::duty::DutyCommand;
use crate::error::ScanError;
use crate::signal::ApObservation;

// ───────────────────────────────────────────────────────────────
// Scanner port (driven adapter: radio → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to observe nearby access points.
pub trait ScannerPort {
    /// Run one blocking radio scan and return every sighted access point.
    ///
    /// Latency is substantial (hundreds of milliseconds to seconds) and
    /// accepted; the scan IS the cycle's pacing.  A failure here is fatal
    /// to the loop; there is no retry policy.
    fn scan(&mut self) -> Result<Vec<ApObservation>, ScanError>;
}

// ───────────────────────────────────────────────────────────────
// LED port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the indicator.
pub trait LedPort {
    /// Program the three PWM channels, red/green/blue order.  Infallible:
    /// duty values are bounded by construction and the LEDC duty write
    /// cannot meaningfully fail once the channels are configured.
    fn apply(&mut self, commands: &[DutyCommand; 3]);
}

// ───────────────────────────────────────────────────────────────
// Idle port (driven adapter: domain → platform scheduler)
// ───────────────────────────────────────────────────────────────

/// End-of-cycle cooperative yield.
///
/// Implementations must reset the task watchdog; skipping a cycle's yield
/// is a liveness bug that ends in a device reset, not a style choice.
pub trait IdlePort {
    /// Feed the watchdog and hand the CPU back to the platform until the
    /// next cycle.
    fn yield_now(&mut self);
}
