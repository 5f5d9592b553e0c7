/// Clamp `v` into `[0, 1]`, mapping NaN to `0`.
///
/// This is the single sanitizing rule for every normalized scalar in the engine.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        tracing::warn!("non-finite normalized value sanitized to 0");
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

/// Clamp `v` into `[lo, hi]`, mapping NaN to `lo`.
pub fn clamp_range(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        tracing::warn!("non-finite value sanitized to lower bound {lo}");
        return lo;
    }
    v.clamp(lo, hi)
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Quantize a unit weight to an 8-bit coverage value.
pub(crate) fn unit_to_u8(t: f64) -> u16 {
    ((clamp_unit(t) * 255.0).round() as i32).clamp(0, 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
