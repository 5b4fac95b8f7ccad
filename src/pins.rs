//! GPIO / peripheral pin assignments for the Signalglow indicator board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// RGB indicator LED (discrete common-cathode, one LEDC channel per color)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 14;
pub const LED_G_GPIO: i32 = 12;
pub const LED_B_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  10-bit gives 0 – 1023 duty levels.
pub const LED_PWM_RESOLUTION_BITS: u32 = 10;
/// Highest duty level at the configured resolution: `(1 << bits) - 1`.
pub const LED_PWM_FULL_DUTY: u16 = 1023;
