//! RGB indicator LED driver.
//!
//! Three LEDC PWM channels (CH0-2) drive a common-cathode RGB LED.
//! Implements [`LedPort`]: the duty of each channel is programmed per
//! command, while the shared timer frequency is reprogrammed only when a
//! command carries a different value than the last one applied.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the LEDC channels via hw_init.
//! On host/test: tracks state in-memory only.

use crate::app::ports::LedPort;
use crate::drivers::hw_init;
use crate::duty::DutyCommand;

pub struct RgbLed {
    /// Timer frequency currently programmed (Hz).
    freq_hz: u32,
    /// Last duties applied, red/green/blue order.
    current: [u16; 3],
}

impl RgbLed {
    /// Assumes [`hw_init::init_led_pwm`] already ran with `freq_hz`.
    pub fn new(freq_hz: u32) -> Self {
        Self {
            freq_hz,
            current: [0, 0, 0],
        }
    }

    pub fn off(&mut self) {
        hw_init::ledc_set(hw_init::LEDC_CH_LED_R, 0);
        hw_init::ledc_set(hw_init::LEDC_CH_LED_G, 0);
        hw_init::ledc_set(hw_init::LEDC_CH_LED_B, 0);
        self.current = [0, 0, 0];
    }

    pub fn current_duties(&self) -> [u16; 3] {
        self.current
    }

    /// Timer frequency last programmed through this driver.
    pub fn current_freq_hz(&self) -> u32 {
        self.freq_hz
    }
}

// ── LedPort implementation ────────────────────────────────────

impl LedPort for RgbLed {
    fn apply(&mut self, commands: &[DutyCommand; 3]) {
        // All three commands carry the same frequency; the timer owns it.
        if commands[0].freq_hz != self.freq_hz {
            hw_init::ledc_set_freq_hz(commands[0].freq_hz);
            self.freq_hz = commands[0].freq_hz;
        }

        hw_init::ledc_set(hw_init::LEDC_CH_LED_R, commands[0].duty);
        hw_init::ledc_set(hw_init::LEDC_CH_LED_G, commands[1].duty);
        hw_init::ledc_set(hw_init::LEDC_CH_LED_B, commands[2].duty);
        self.current = [commands[0].duty, commands[1].duty, commands[2].duty];
    }
}
