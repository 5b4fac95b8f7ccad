//! System configuration parameters
//!
//! All tunable parameters for the Signalglow monitor.  Fixed at process
//! start; nothing here is persisted or runtime-mutable.

use heapless::{String, Vec};

use crate::error::{Error, Result};

/// Maximum SSID length per 802.11 (bytes).
pub const SSID_MAX_LEN: usize = 32;
/// How many access point names the monitor can watch at once.
pub const MAX_MONITORED_SSIDS: usize = 4;

/// A network name, fixed-capacity so scan results copy without allocating.
pub type Ssid = String<SSID_MAX_LEN>;

/// Core monitor configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    // --- Sensing ---
    /// Access point names the indicator tracks; strongest match wins.
    pub monitored_ssids: Vec<Ssid, MAX_MONITORED_SSIDS>,
    /// Weakest signal of interest (dBm).  At or below this the lamp shows
    /// pure red; also substituted when no monitored AP is visible.
    pub rssi_min: i32,
    /// Strongest signal of interest (dBm).  At or above this the lamp shows
    /// the top-of-scale color.
    pub rssi_max: i32,

    // --- Actuation ---
    /// LEDC PWM frequency for all three LED channels (Hz).
    pub pwm_freq_hz: u32,

    // --- Timing ---
    /// Extra idle between cycles (milliseconds).  The blocking scan already
    /// dominates the cycle period, so 0 is a valid setting.
    pub cycle_delay_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        let mut monitored_ssids = Vec::new();
        let mut ssid = Ssid::new();
        let _ = ssid.push_str("AndroidAP");
        let _ = monitored_ssids.push(ssid);

        Self {
            monitored_ssids,
            rssi_min: -80,
            rssi_max: -30,
            pwm_freq_hz: 120,
            cycle_delay_ms: 0,
        }
    }
}

impl MonitorConfig {
    /// Sanity-check the configuration before the loop starts.
    pub fn validate(&self) -> Result<()> {
        if self.monitored_ssids.is_empty() {
            return Err(Error::Config("monitored SSID set is empty"));
        }
        if self.rssi_min >= self.rssi_max {
            return Err(Error::Config("rssi range inverted or empty"));
        }
        if self.pwm_freq_hz == 0 || self.pwm_freq_hz > 40_000 {
            return Err(Error::Config("pwm frequency out of range"));
        }
        if self.cycle_delay_ms > 60_000 {
            return Err(Error::Config("cycle delay over one minute"));
        }
        Ok(())
    }
}
