use crate::foundation::math::clamp_unit;

/// Icon shown for an anchor on icon-only axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorIcon {
    /// High sun.
    Sun,
    /// Afternoon sun behind cloud.
    CloudSun,
    /// Sun at the horizon.
    Sunset,
    /// Night.
    Moon,
}

impl AnchorIcon {
    /// Stable identifier for icon lookup in a host asset set.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::CloudSun => "cloud-sun",
            Self::Sunset => "sunset",
            Self::Moon => "moon",
        }
    }
}

/// One fixed reference point on the noon-to-midnight timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnchorPreset {
    /// Timeline position in `[0, 1]`.
    pub position: f64,
    /// 12-hour clock label, e.g. `"4pm"`.
    pub hour_label: &'static str,
    /// Hour on a 24-hour clock; midnight is `24`.
    pub hour24: u32,
    /// Ambient illuminance in lux.
    pub illuminance: u32,
    /// Correlated color temperature in kelvin.
    pub color_temperature_k: u32,
    /// Icon for compact axes.
    pub icon: AnchorIcon,
}

/// The interpolation domain: sorted by position, spanning exactly `[0, 1]`.
///
/// Illuminance and color temperature decrease monotonically from first to last.
pub const ANCHORS: [AnchorPreset; 4] = [
    AnchorPreset {
        position: 0.0,
        hour_label: "12pm",
        hour24: 12,
        illuminance: 480,
        color_temperature_k: 4400,
        icon: AnchorIcon::Sun,
    },
    AnchorPreset {
        position: 0.33,
        hour_label: "4pm",
        hour24: 16,
        illuminance: 380,
        color_temperature_k: 4000,
        icon: AnchorIcon::CloudSun,
    },
    AnchorPreset {
        position: 0.67,
        hour_label: "8pm",
        hour24: 20,
        illuminance: 200,
        color_temperature_k: 3300,
        icon: AnchorIcon::Sunset,
    },
    AnchorPreset {
        position: 1.0,
        hour_label: "12am",
        hour24: 24,
        illuminance: 80,
        color_temperature_k: 2700,
        icon: AnchorIcon::Moon,
    },
];

/// Index of the anchor closest to `t` (clamped).
///
/// Ties resolve to the first anchor encountered in ascending order. Every consumer that
/// needs a discrete anchor (labels, snapping, tick highlighting) goes through here.
pub fn nearest_anchor_index(t: f64) -> usize {
    let t = clamp_unit(t);
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;
    for (i, a) in ANCHORS.iter().enumerate() {
        let d = (t - a.position).abs();
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

/// Anchor closest to `t`; see [`nearest_anchor_index`].
pub fn nearest_anchor(t: f64) -> &'static AnchorPreset {
    &ANCHORS[nearest_anchor_index(t)]
}

/// Bracketing anchors `(lower, upper)` with `lower.position <= t <= upper.position`.
///
/// Segments are scanned in ascending order and both ends are inclusive, so the first
/// matching segment wins when `t` sits exactly on an interior anchor.
pub(crate) fn bracket(t: f64) -> (&'static AnchorPreset, &'static AnchorPreset) {
    let t = clamp_unit(t);
    for w in ANCHORS.windows(2) {
        if w[0].position <= t && t <= w[1].position {
            return (&w[0], &w[1]);
        }
    }
    // Unreachable for a table spanning [0, 1]; degenerate zero-width fallback.
    let last = &ANCHORS[ANCHORS.len() - 1];
    (last, last)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/anchors.rs"]
mod tests;
