//! One-shot hardware peripheral initialization.
//!
//! Configures the LEDC timer and the three LED channels using raw ESP-IDF
//! sys calls.  Called once from `main()` before the monitor loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LedcTimerFailed(rc) => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
        }
    }
}

// ── LEDC PWM ─────────────────────────────────────────────────

pub const LEDC_CH_LED_R: u32 = 0;
pub const LEDC_CH_LED_G: u32 = 1;
pub const LEDC_CH_LED_B: u32 = 2;

/// Configure LEDC timer 0 plus the three LED channels, all duties at zero.
///
/// The frequency is a timer-level setting shared by every channel; change
/// it later through [`ledc_set_freq_hz`].
#[cfg(target_os = "espidf")]
pub fn init_led_pwm(freq_hz: u32) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the monitor loop; single-threaded.
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_10_BIT,
        freq_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK {
        return Err(HwInitError::LedcTimerFailed(ret));
    }

    let led_gpios = [pins::LED_R_GPIO, pins::LED_G_GPIO, pins::LED_B_GPIO];
    for (i, &gpio) in led_gpios.iter().enumerate() {
        let channel = ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: ledc_channel_t_LEDC_CHANNEL_0 + i as u32,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: gpio,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        };
        let ret = unsafe { ledc_channel_config(&channel) };
        if ret != ESP_OK {
            return Err(HwInitError::LedcChannelFailed(ret));
        }
    }

    info!(
        "hw_init: LEDC configured ({} Hz, 10-bit, R=CH0 G=CH1 B=CH2)",
        freq_hz
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_led_pwm(freq_hz: u32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): LEDC init skipped ({freq_hz} Hz requested)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u16) {
    // SAFETY: LEDC channels were configured in init_led_pwm(); duty register
    // writes are race-free since only the main loop calls this function.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, u32::from(duty));
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u16) {}

/// Reprogram the shared timer frequency.  Affects all three channels.
#[cfg(target_os = "espidf")]
pub fn ledc_set_freq_hz(freq_hz: u32) {
    // SAFETY: Timer 0 was configured in init_led_pwm(); main-loop only.
    unsafe {
        ledc_set_freq(ledc_mode_t_LEDC_LOW_SPEED_MODE, ledc_timer_t_LEDC_TIMER_0, freq_hz);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set_freq_hz(_freq_hz: u32) {}
