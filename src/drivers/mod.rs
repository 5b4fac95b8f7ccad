//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod hw_init;
pub mod idle;
pub mod rgb_led;
pub mod watchdog;
