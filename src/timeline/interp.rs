use crate::foundation::math::{clamp_unit, lerp};
use crate::timeline::anchors::{bracket, nearest_anchor};

/// Timeline position at and above which the dark theme applies.
pub const DARK_MODE_THRESHOLD: f64 = 0.5;

/// Ambient readings derived from a timeline value.
///
/// Numeric fields are interpolated between the bracketing anchors; `label` is the label of
/// the single nearest anchor and does not interpolate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimeInfo {
    /// Interpolated hour on a 24-hour clock (`12..=24`).
    pub hour: u32,
    /// Nearest anchor's label.
    pub label: &'static str,
    /// Interpolated illuminance in lux.
    pub illuminance: u32,
    /// Interpolated color temperature in kelvin.
    #[serde(rename = "colorTemperatureK")]
    pub color_temperature_k: u32,
}

/// Project a timeline value onto [`TimeInfo`].
///
/// Safe standalone: `t` is clamped (NaN reads as noon).
pub fn time_info(t: f64) -> TimeInfo {
    let t = clamp_unit(t);
    let (lo, hi) = bracket(t);
    let width = hi.position - lo.position;
    let f = if width > 0.0 {
        (t - lo.position) / width
    } else {
        0.0
    };

    let mix = |a: u32, b: u32| lerp(f64::from(a), f64::from(b), f).round() as u32;

    TimeInfo {
        hour: mix(lo.hour24, hi.hour24),
        label: nearest_anchor(t).hour_label,
        illuminance: mix(lo.illuminance, hi.illuminance),
        color_temperature_k: mix(lo.color_temperature_k, hi.color_temperature_k),
    }
}

/// Dark-mode flag: `true` iff the clamped timeline is at or past [`DARK_MODE_THRESHOLD`].
pub fn is_dark_mode(t: f64) -> bool {
    clamp_unit(t) >= DARK_MODE_THRESHOLD
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/interp.rs"]
mod tests;
