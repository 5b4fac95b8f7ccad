//! End-of-cycle idle driver.
//!
//! Implements [`IdlePort`]: feeds the task watchdog, then optionally
//! delays before the next cycle so the radio stack and other platform
//! housekeeping get CPU time.  With a zero delay the blocking scan itself
//! provides the scheduling gap; the feed is the part that must never be
//! skipped.

use crate::app::ports::IdlePort;
use crate::drivers::watchdog::Watchdog;

pub struct CycleIdle {
    watchdog: Watchdog,
    delay_ms: u32,
}

impl CycleIdle {
    pub fn new(watchdog: Watchdog, delay_ms: u32) -> Self {
        Self { watchdog, delay_ms }
    }
}

// ── IdlePort implementation ───────────────────────────────────

impl IdlePort for CycleIdle {
    fn yield_now(&mut self) {
        self.watchdog.feed();

        if self.delay_ms > 0 {
            #[cfg(target_os = "espidf")]
            esp_idf_hal::delay::FreeRtos::delay_ms(self.delay_ms);

            #[cfg(not(target_os = "espidf"))]
            std::thread::sleep(std::time::Duration::from_millis(u64::from(self.delay_ms)));
        }
    }
}
