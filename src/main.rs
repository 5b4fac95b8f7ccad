//! Signalglow firmware entry point.
//!
//! Hexagonal architecture around a single sense-map-drive loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  WifiScanner        RgbLed          CycleIdle            │
//! │  (ScannerPort)      (LedPort)       (IdlePort+watchdog)  │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │          MonitorService (pure logic)           │      │
//! │  │          reduce · map · drive                  │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod app;
mod adapters;
mod color;
mod config;
mod drivers;
mod duty;
mod error;
mod pins;
mod signal;

// ── Imports ───────────────────────────────────────────────────
use core::sync::atomic::AtomicBool;

use anyhow::Result;
use log::info;

use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;

use adapters::wifi::WifiScanner;
use app::service::MonitorService;
use config::MonitorConfig;
use drivers::idle::CycleIdle;
use drivers::rgb_led::RgbLed;
use drivers::watchdog::Watchdog;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Signalglow v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = MonitorConfig::default();

    // ── 3. Hardware bring-up ──────────────────────────────────
    if let Err(e) = drivers::hw_init::init_led_pwm(config.pwm_freq_hz) {
        // PWM init failure is critical: log and halt.  The watchdog
        // resets the device after its timeout elapses.
        log::error!("LED PWM init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new();

    // ── 4. Platform handles ───────────────────────────────────
    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    // ── 5. Construct adapters ─────────────────────────────────
    let mut scanner = WifiScanner::new(peripherals.modem, sysloop, nvs)?;
    let mut led = RgbLed::new(config.pwm_freq_hz);
    let mut idle = CycleIdle::new(watchdog, config.cycle_delay_ms);

    // ── 6. Construct the service and run ──────────────────────
    let mut monitor = MonitorService::new(config)?;

    // The device has no stop source; the flag exists so the same loop is
    // drivable (and stoppable) in host tests.
    let stop = AtomicBool::new(false);

    info!("System ready. Entering monitor loop.");
    monitor.run(&mut scanner, &mut led, &mut idle, &stop)?;

    Ok(())
}
