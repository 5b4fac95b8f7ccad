//! WiFi scan adapter.
//!
//! Implements [`ScannerPort`], the hexagonal boundary for radio sensing.
//! The station interface is brought up once, credential-less (a scan needs
//! an active interface, not an association), and every cycle runs one
//! blocking active scan.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF WiFi driver calls via
//!   `esp_idf_svc::wifi` (`BlockingWifi<EspWifi>`).
//! - **all other targets**: a deterministic synthetic scan table for
//!   host-side tests, with an oscillating RSSI on the default monitored
//!   SSID, a periodic dropout, and two static neighbor networks.

use log::info;

use crate::app::ports::ScannerPort;
use crate::config::Ssid;
use crate::error::ScanError;
use crate::signal::ApObservation;

#[cfg(target_os = "espidf")]
use crate::error::{Error, Result};
#[cfg(target_os = "espidf")]
use esp_idf_hal::modem::Modem;
#[cfg(target_os = "espidf")]
use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    nvs::EspDefaultNvsPartition,
    wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi},
};

// ───────────────────────────────────────────────────────────────
// Scanner adapter
// ───────────────────────────────────────────────────────────────

pub struct WifiScanner {
    #[cfg(target_os = "espidf")]
    wifi: BlockingWifi<EspWifi<'static>>,
    /// Simulation: cycle counter driving the synthetic RSSI oscillation.
    #[cfg(not(target_os = "espidf"))]
    sim_cycle: u32,
}

#[cfg(target_os = "espidf")]
fn init_err(stage: &'static str) -> impl FnOnce(esp_idf_svc::sys::EspError) -> Error {
    move |e| {
        log::error!("WiFi init: {stage}: {e}");
        Error::Init(stage)
    }
}

#[cfg(target_os = "espidf")]
impl WifiScanner {
    /// Bring the station interface up in scan-only mode.
    ///
    /// The NVS partition is handed to the driver for its radio calibration
    /// store; the monitor itself persists nothing.
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        nvs: EspDefaultNvsPartition,
    ) -> Result<Self> {
        let driver = EspWifi::new(modem, sysloop.clone(), Some(nvs))
            .map_err(init_err("wifi driver creation failed"))?;
        let mut wifi =
            BlockingWifi::wrap(driver, sysloop).map_err(init_err("wifi event wiring failed"))?;

        wifi.set_configuration(&Configuration::Client(ClientConfiguration::default()))
            .map_err(init_err("station configuration rejected"))?;
        wifi.start().map_err(init_err("wifi start failed"))?;

        info!("WiFi: station up, scan-only (no credentials)");
        Ok(Self { wifi })
    }

    fn platform_scan(&mut self) -> core::result::Result<Vec<ApObservation>, ScanError> {
        match self.wifi.is_started() {
            Ok(true) => {}
            Ok(false) => return Err(ScanError::RadioUnavailable),
            Err(e) => return Err(ScanError::ScanFailed(e.code())),
        }

        let access_points = self
            .wifi
            .scan()
            .map_err(|e| ScanError::ScanFailed(e.code()))?;

        Ok(access_points
            .into_iter()
            .map(|ap| {
                let mut ssid = Ssid::new();
                let _ = ssid.push_str(ap.ssid.as_str());
                ApObservation {
                    ssid,
                    rssi_dbm: ap.signal_strength,
                }
            })
            .collect())
    }
}

#[cfg(not(target_os = "espidf"))]
impl WifiScanner {
    pub fn new() -> Self {
        info!("WiFi(sim): station up (synthetic scan table)");
        Self { sim_cycle: 0 }
    }

    fn platform_scan(&mut self) -> core::result::Result<Vec<ApObservation>, ScanError> {
        self.sim_cycle = self.sim_cycle.wrapping_add(1);

        let mut observations = vec![
            sim_observation("CoffeeHouse", -72),
            sim_observation("Fritz!Box 7590", -86),
        ];

        // The monitored AP drops out every 8th cycle to exercise the
        // floor-substitution path.
        if self.sim_cycle % 8 != 0 {
            let oscillation = ((self.sim_cycle % 12) as i8) - 6; // -6..+5
            observations.push(sim_observation(
                "AndroidAP",
                (-60_i8).saturating_add(oscillation),
            ));
        }

        info!(
            "WiFi(sim): scan cycle {} -> {} APs",
            self.sim_cycle,
            observations.len()
        );
        Ok(observations)
    }
}

#[cfg(not(target_os = "espidf"))]
fn sim_observation(name: &str, rssi_dbm: i8) -> ApObservation {
    let mut ssid = Ssid::new();
    let _ = ssid.push_str(name);
    ApObservation { ssid, rssi_dbm }
}

// ───────────────────────────────────────────────────────────────
// ScannerPort
// ───────────────────────────────────────────────────────────────

impl ScannerPort for WifiScanner {
    fn scan(&mut self) -> core::result::Result<Vec<ApObservation>, ScanError> {
        self.platform_scan()
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
