//! Color to PWM duty conversion.
//!
//! Bridges the mapper's normalized color to what the LEDC peripheral
//! actually takes: one `(frequency, duty)` pair per channel.  Rounding is
//! half-away-from-zero via `f32::round`, which for these non-negative
//! channels is plain round-half-up: half scale (0.5) becomes 512 of 1023.

use crate::color::Rgb;
use crate::pins;

/// One PWM programming command for a single LED channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyCommand {
    /// PWM frequency (Hz).  Identical across the three channels; the LEDC
    /// timer owns it.
    pub freq_hz: u32,
    /// Duty level in `[0, LED_PWM_FULL_DUTY]`.
    pub duty: u16,
}

/// Convert a normalized color into the three per-channel commands, in
/// red/green/blue order.
///
/// Duty never leaves `[0, LED_PWM_FULL_DUTY]` because every channel of a
/// mapper-produced [`Rgb`] lies in `[0, 1]`.
pub fn duty_commands(color: Rgb, freq_hz: u32) -> [DutyCommand; 3] {
    let scale = |channel: f32| (f32::from(pins::LED_PWM_FULL_DUTY) * channel).round() as u16;
    [
        DutyCommand {
            freq_hz,
            duty: scale(color.r),
        },
        DutyCommand {
            freq_hz,
            duty: scale(color.g),
        },
        DutyCommand {
            freq_hz,
            duty: scale(color.b),
        },
    ]
}
