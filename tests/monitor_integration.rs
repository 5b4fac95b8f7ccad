//! Integration tests: MonitorService loop against scripted mock ports.
//!
//! Drives the real service through whole cycles and asserts on the exact
//! PWM frames the LED port receives, plus the loop mechanics (yield per
//! cycle, stop flag, fail-fast on scan errors).

use std::sync::atomic::{AtomicBool, Ordering};

use signalglow::app::ports::{IdlePort, LedPort, ScannerPort};
use signalglow::app::service::MonitorService;
use signalglow::config::{MonitorConfig, Ssid};
use signalglow::duty::DutyCommand;
use signalglow::error::{Error, ScanError};
use signalglow::pins::LED_PWM_FULL_DUTY;
use signalglow::signal::ApObservation;

// ── Mock implementations ──────────────────────────────────────

/// Replays a fixed scan script, one entry per cycle.  Exhausting the script
/// yields empty scans so a runaway loop fails an assertion instead of
/// panicking inside the mock.
struct ScriptedScanner {
    script: Vec<Result<Vec<ApObservation>, ScanError>>,
    cursor: usize,
}

impl ScriptedScanner {
    fn new(script: Vec<Result<Vec<ApObservation>, ScanError>>) -> Self {
        Self { script, cursor: 0 }
    }

    fn scans_performed(&self) -> usize {
        self.cursor
    }
}

impl ScannerPort for ScriptedScanner {
    fn scan(&mut self) -> Result<Vec<ApObservation>, ScanError> {
        let step = self
            .script
            .get(self.cursor)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()));
        self.cursor += 1;
        step
    }
}

struct RecordingLed {
    frames: Vec<[DutyCommand; 3]>,
}

impl RecordingLed {
    fn new() -> Self {
        Self { frames: Vec::new() }
    }
}

impl LedPort for RecordingLed {
    fn apply(&mut self, commands: &[DutyCommand; 3]) {
        self.frames.push(*commands);
    }
}

/// Counts yields and raises the stop flag once the requested number of
/// cycles has completed.
struct CountingIdle<'a> {
    yields: usize,
    stop_after: usize,
    stop: &'a AtomicBool,
}

impl<'a> CountingIdle<'a> {
    fn new(stop_after: usize, stop: &'a AtomicBool) -> Self {
        Self {
            yields: 0,
            stop_after,
            stop,
        }
    }
}

impl IdlePort for CountingIdle<'_> {
    fn yield_now(&mut self) {
        self.yields += 1;
        if self.yields >= self.stop_after {
            self.stop.store(true, Ordering::Relaxed);
        }
    }
}

fn observation(name: &str, rssi_dbm: i8) -> ApObservation {
    let mut ssid = Ssid::new();
    let _ = ssid.push_str(name);
    ApObservation { ssid, rssi_dbm }
}

// ── Full-loop color frames ────────────────────────────────────

#[test]
fn ceiling_signal_drives_a_full_magenta_frame() {
    let stop = AtomicBool::new(false);
    let mut scanner = ScriptedScanner::new(vec![Ok(vec![observation("AndroidAP", -30)])]);
    let mut led = RecordingLed::new();
    let mut idle = CountingIdle::new(1, &stop);
    let mut monitor = MonitorService::new(MonitorConfig::default()).unwrap();

    monitor
        .run(&mut scanner, &mut led, &mut idle, &stop)
        .unwrap();

    assert_eq!(led.frames.len(), 1);
    let [r, g, b] = led.frames[0];
    assert_eq!(r.duty, LED_PWM_FULL_DUTY, "red rail at top of scale");
    assert_eq!(g.duty, 0, "green off at top of scale");
    assert_eq!(b.duty, LED_PWM_FULL_DUTY, "blue rail at top of scale");
}

#[test]
fn unmonitored_networks_drive_the_floor_red_frame() {
    let stop = AtomicBool::new(false);
    let mut scanner = ScriptedScanner::new(vec![Ok(vec![
        observation("CoffeeHouse", -40),
        observation("Fritz!Box 7590", -50),
    ])]);
    let mut led = RecordingLed::new();
    let mut idle = CountingIdle::new(1, &stop);
    let mut monitor = MonitorService::new(MonitorConfig::default()).unwrap();

    monitor
        .run(&mut scanner, &mut led, &mut idle, &stop)
        .unwrap();

    let [r, g, b] = led.frames[0];
    assert_eq!(
        (r.duty, g.duty, b.duty),
        (LED_PWM_FULL_DUTY, 0, 0),
        "strong foreign networks must not color the lamp"
    );
}

#[test]
fn empty_scan_is_a_routine_floor_cycle() {
    let stop = AtomicBool::new(false);
    let mut scanner = ScriptedScanner::new(vec![Ok(Vec::new())]);
    let mut led = RecordingLed::new();
    let mut idle = CountingIdle::new(1, &stop);
    let mut monitor = MonitorService::new(MonitorConfig::default()).unwrap();

    let result = monitor.run(&mut scanner, &mut led, &mut idle, &stop);

    assert!(result.is_ok(), "an empty scan is not an error");
    let [r, g, b] = led.frames[0];
    assert_eq!((r.duty, g.duty, b.duty), (LED_PWM_FULL_DUTY, 0, 0));
}

#[test]
fn midscale_signal_rounds_the_blue_channel_up() {
    // -55 dBm sits exactly halfway through -80..=-30: green sector with
    // blue at half scale, and 511.5 rounds up to 512.
    let stop = AtomicBool::new(false);
    let mut scanner = ScriptedScanner::new(vec![Ok(vec![observation("AndroidAP", -55)])]);
    let mut led = RecordingLed::new();
    let mut idle = CountingIdle::new(1, &stop);
    let mut monitor = MonitorService::new(MonitorConfig::default()).unwrap();

    monitor
        .run(&mut scanner, &mut led, &mut idle, &stop)
        .unwrap();

    let [r, g, b] = led.frames[0];
    assert_eq!((r.duty, g.duty, b.duty), (0, LED_PWM_FULL_DUTY, 512));
}

#[test]
fn configured_frequency_reaches_every_channel() {
    let stop = AtomicBool::new(false);
    let config = MonitorConfig {
        pwm_freq_hz: 240,
        ..MonitorConfig::default()
    };
    let mut scanner = ScriptedScanner::new(vec![Ok(vec![observation("AndroidAP", -60)])]);
    let mut led = RecordingLed::new();
    let mut idle = CountingIdle::new(1, &stop);
    let mut monitor = MonitorService::new(config).unwrap();

    monitor
        .run(&mut scanner, &mut led, &mut idle, &stop)
        .unwrap();

    for command in led.frames[0] {
        assert_eq!(command.freq_hz, 240);
    }
}

// ── Loop mechanics ────────────────────────────────────────────

#[test]
fn one_yield_follows_every_completed_cycle() {
    let stop = AtomicBool::new(false);
    let script: Vec<Result<Vec<ApObservation>, ScanError>> = (0..5)
        .map(|_| Ok(vec![observation("AndroidAP", -60)]))
        .collect();
    let mut scanner = ScriptedScanner::new(script);
    let mut led = RecordingLed::new();
    let mut idle = CountingIdle::new(5, &stop);
    let mut monitor = MonitorService::new(MonitorConfig::default()).unwrap();

    monitor
        .run(&mut scanner, &mut led, &mut idle, &stop)
        .unwrap();

    assert_eq!(scanner.scans_performed(), 5);
    assert_eq!(led.frames.len(), 5);
    assert_eq!(idle.yields, 5, "the watchdog feed must not be skipped");
    assert_eq!(monitor.cycle_count(), 5);
}

#[test]
fn preset_stop_flag_skips_scanning_entirely() {
    let stop = AtomicBool::new(true);
    let mut scanner = ScriptedScanner::new(vec![Ok(vec![observation("AndroidAP", -60)])]);
    let mut led = RecordingLed::new();
    let mut idle = CountingIdle::new(1, &stop);
    let mut monitor = MonitorService::new(MonitorConfig::default()).unwrap();

    let result = monitor.run(&mut scanner, &mut led, &mut idle, &stop);

    assert!(result.is_ok());
    assert_eq!(scanner.scans_performed(), 0, "stop must be checked before scanning");
    assert!(led.frames.is_empty());
    assert_eq!(idle.yields, 0);
}

#[test]
fn scan_failure_terminates_the_run() {
    let stop = AtomicBool::new(false);
    let mut scanner = ScriptedScanner::new(vec![
        Ok(vec![observation("AndroidAP", -45)]),
        Err(ScanError::ScanFailed(-257)),
    ]);
    let mut led = RecordingLed::new();
    // Stop threshold far beyond the script: only the error may end the run.
    let mut idle = CountingIdle::new(100, &stop);
    let mut monitor = MonitorService::new(MonitorConfig::default()).unwrap();

    let result = monitor.run(&mut scanner, &mut led, &mut idle, &stop);

    assert_eq!(result, Err(Error::Scan(ScanError::ScanFailed(-257))));
    assert_eq!(
        led.frames.len(),
        1,
        "only the successful cycle may drive the LED"
    );
    assert_eq!(idle.yields, 1, "the failed cycle must not yield");
    assert_eq!(scanner.scans_performed(), 2);
}

#[test]
fn radio_outage_terminates_the_run_immediately() {
    let stop = AtomicBool::new(false);
    let mut scanner = ScriptedScanner::new(vec![Err(ScanError::RadioUnavailable)]);
    let mut led = RecordingLed::new();
    let mut idle = CountingIdle::new(100, &stop);
    let mut monitor = MonitorService::new(MonitorConfig::default()).unwrap();

    let result = monitor.run(&mut scanner, &mut led, &mut idle, &stop);

    assert_eq!(result, Err(Error::Scan(ScanError::RadioUnavailable)));
    assert!(led.frames.is_empty(), "no frame may be driven on a failed cycle");
    assert_eq!(monitor.cycle_count(), 1, "the failed attempt still counts");
}
