use crate::foundation::math::clamp_unit;

/// Simulated minutes between noon and midnight.
pub const MINUTES_PER_CYCLE: f64 = 720.0;

/// 12-hour clock label for scroll progress `p`, e.g. `"3:00pm"`.
///
/// Maps `[0, 1]` linearly onto noon..midnight independently of the anchor table. `p` is
/// clamped; NaN reads as noon.
pub fn clock_label(p: f64) -> String {
    let total_minutes = (clamp_unit(p) * MINUTES_PER_CYCLE).round() as u32;
    let hours24 = 12 + total_minutes / 60;
    let minutes = total_minutes % 60;
    match hours24 {
        12 => format!("12:{minutes:02}pm"),
        h if h >= 24 => format!("12:{minutes:02}am"),
        h => format!("{}:{minutes:02}pm", h - 12),
    }
}

/// Whole-percent readout for progress `p`, e.g. `"25%"`.
pub fn percent_label(p: f64) -> String {
    format!("{}%", (clamp_unit(p) * 100.0).round() as u32)
}

/// Scroll offsets that map to progress `0` and `1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    /// Offset where progress is `0`.
    pub start: f64,
    /// Offset where progress is `1`.
    pub end: f64,
}

impl ScrollRange {
    /// Range from `start` to `end`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Progress for a raw scroll offset, clamped to `[0, 1]`.
    ///
    /// A zero-width (or inverted) range behaves as a step at `start`.
    pub fn progress(self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        let span = self.end - self.start;
        if span > 0.0 {
            clamp_unit((offset - self.start) / span)
        } else if offset >= self.start {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/clock.rs"]
mod tests;
