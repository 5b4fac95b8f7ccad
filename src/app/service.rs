//! Monitor service: the hexagonal core.
//!
//! [`MonitorService`] owns the configuration and runs the sense-map-drive
//! cycle.  All I/O flows through port traits injected at call sites, making
//! the entire loop testable with mock adapters.
//!
//! ```text
//!  ScannerPort ──▶ ┌────────────────────────┐
//!                  │     MonitorService      │
//!     LedPort ◀──  │  reduce · map · drive   │
//!    IdlePort ◀──  └────────────────────────┘
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use log::{error, info};

use crate::color::{self, Rgb};
use crate::config::MonitorConfig;
use crate::duty::duty_commands;
use crate::error::Result;
use crate::signal::{effective_rssi, matched_count};

use super::ports::{IdlePort, LedPort, ScannerPort};

// ───────────────────────────────────────────────────────────────
// CycleReport
// ───────────────────────────────────────────────────────────────

/// Outcome of one completed cycle, for diagnostics.  Everything here is
/// derived; nothing is retained between cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// Access points sighted by the scan.
    pub observed: usize,
    /// How many of those belong to the monitored set.
    pub matched: usize,
    /// Effective signal after reduction (floor when `matched == 0`).
    pub rssi_dbm: i32,
    /// Normalized hue in `[0, 5/6]`.
    pub hue: f32,
    /// Color driven onto the indicator.
    pub color: Rgb,
}

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

/// The monitor service orchestrates the sense-map-drive loop.
pub struct MonitorService {
    config: MonitorConfig,
    cycle_count: u64,
}

impl MonitorService {
    /// Construct the service, rejecting invalid configuration up front.
    pub fn new(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cycle_count: 0,
        })
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: scan → reduce → map → drive.
    ///
    /// A scan failure propagates immediately; everything downstream of a
    /// successful scan is infallible.
    pub fn tick(
        &mut self,
        scanner: &mut impl ScannerPort,
        led: &mut impl LedPort,
    ) -> Result<CycleReport> {
        self.cycle_count += 1;

        // 1. Observe nearby access points via ScannerPort.
        let observations = scanner.scan()?;

        // 2. Reduce to a single effective signal.  An empty match is
        //    routine (AP out of range) and silently becomes the floor.
        let rssi_dbm = effective_rssi(
            &observations,
            &self.config.monitored_ssids,
            self.config.rssi_min,
        );

        // 3. Map the signal onto the color wheel.
        let hue = color::rssi_hue(rssi_dbm, self.config.rssi_min, self.config.rssi_max);
        let rgb = color::hsv_to_rgb(hue, 1.0, 1.0);

        // 4. Drive the indicator via LedPort.
        led.apply(&duty_commands(rgb, self.config.pwm_freq_hz));

        Ok(CycleReport {
            observed: observations.len(),
            matched: matched_count(&observations, &self.config.monitored_ssids),
            rssi_dbm,
            hue,
            color: rgb,
        })
    }

    // ── Loop ──────────────────────────────────────────────────

    /// Run cycles until `stop` is raised or a scan fails.
    ///
    /// `stop` is checked at the top of every cycle; the firmware passes a
    /// flag that never rises, and tests use it to bound the loop.  The
    /// yield runs after every completed cycle without exception; it feeds
    /// the task watchdog.
    pub fn run(
        &mut self,
        scanner: &mut impl ScannerPort,
        led: &mut impl LedPort,
        idle: &mut impl IdlePort,
        stop: &AtomicBool,
    ) -> Result<()> {
        info!(
            "monitor loop started: watching {} SSID(s), {}..={} dBm",
            self.config.monitored_ssids.len(),
            self.config.rssi_min,
            self.config.rssi_max
        );

        while !stop.load(Ordering::Relaxed) {
            let report = match self.tick(scanner, led) {
                Ok(report) => report,
                Err(e) => {
                    error!("cycle {} aborted, terminating monitor: {e}", self.cycle_count);
                    return Err(e);
                }
            };

            info!(
                "rssi {} dBm -> hue {:.3} -> rgb ({:.2}, {:.2}, {:.2}) [{}/{} APs matched]",
                report.rssi_dbm,
                report.hue,
                report.color.r,
                report.color.g,
                report.color.b,
                report.matched,
                report.observed
            );

            idle.yield_now();
        }

        info!("monitor loop stopped after {} cycles", self.cycle_count);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total cycles attempted since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }
}
