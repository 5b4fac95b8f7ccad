//! Signal-to-color mapping.
//!
//! Pure functions, no hardware anywhere: a signal strength in dBm becomes a
//! hue on a restricted stretch of the color wheel, then an RGB triple via
//! the canonical six-sector HSV conversion.  Weak signals sit at red
//! (hue 0), strong ones at magenta (hue 5/6).  The final sixth of the wheel
//! stays unused so the strongest signal cannot wrap back toward red and
//! become indistinguishable from the weakest.

/// Normalized RGB color; every channel lies in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Fraction of the color wheel the indicator sweeps (red through magenta).
pub const HUE_SPAN: f32 = 5.0 / 6.0;

/// Map a signal strength onto the hue range `[0, HUE_SPAN]`.
///
/// Signals outside `[rssi_min, rssi_max]` clamp to the nearest bound, so the
/// result is defined and bounded for any `i32` input.  Requires
/// `rssi_min < rssi_max` (guaranteed by config validation).
pub fn rssi_hue(rssi_dbm: i32, rssi_min: i32, rssi_max: i32) -> f32 {
    debug_assert!(rssi_min < rssi_max);
    // Subtract in f32: arbitrary i32 inputs must not overflow.
    let t = (rssi_dbm as f32 - rssi_min as f32) / (rssi_max as f32 - rssi_min as f32);
    t.clamp(0.0, 1.0) * HUE_SPAN
}

/// Canonical six-sector HSV to RGB conversion.
///
/// `h` is a fraction of a full wheel rotation (wraps outside `[0,1)`);
/// `s` and `v` are saturation and value in `[0,1]`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    if s == 0.0 {
        return Rgb { r: v, g: v, b: v };
    }
    // Wrap into [0, 1).  For a tiny negative h the subtraction rounds to
    // exactly 1.0; the rem_euclid below folds that case onto sector 0.
    let h = h - h.floor();
    let sector = (h * 6.0) as i32;
    let f = h * 6.0 - sector as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector.rem_euclid(6) {
        0 => Rgb { r: v, g: t, b: p },
        1 => Rgb { r: q, g: v, b: p },
        2 => Rgb { r: p, g: v, b: t },
        3 => Rgb { r: p, g: q, b: v },
        4 => Rgb { r: t, g: p, b: v },
        _ => Rgb { r: v, g: p, b: q },
    }
}

/// Full mapper: signal strength straight to the indicator color
/// (fully saturated, full value).
pub fn rssi_to_rgb(rssi_dbm: i32, rssi_min: i32, rssi_max: i32) -> Rgb {
    hsv_to_rgb(rssi_hue(rssi_dbm, rssi_min, rssi_max), 1.0, 1.0)
}
