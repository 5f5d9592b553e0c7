use crate::foundation::error::{DaylightError, DaylightResult};
use crate::foundation::math::{mul_div255_u8, unit_to_u8};
use crate::raster::bitmap::PremulImage;
use crate::widgets::blend::BlendWeights;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over of `src` scaled by `opacity` onto `dst`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f64) -> PremulRgba8 {
    let coverage = unit_to_u8(opacity);
    let src = src.map(|c| mul_div255_u8(u16::from(c), coverage));
    if src[3] == 0 {
        return dst;
    }
    let keep = 255 - u16::from(src[3]);
    std::array::from_fn(|i| src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), keep)))
}

/// Per-pixel `day * weights.day + night * weights.night`, using [`BlendWeights::coverage`].
pub fn crossfade(day: PremulRgba8, night: PremulRgba8, weights: BlendWeights) -> PremulRgba8 {
    let (day_cov, night_cov) = weights.coverage();
    std::array::from_fn(|i| {
        mul_div255_u8(u16::from(day[i]), day_cov)
            .saturating_add(mul_div255_u8(u16::from(night[i]), night_cov))
    })
}

/// Composite the two layers into one `size` image.
///
/// Every present layer is stretched to `size`, so both cover the same footprint. With both
/// layers present the result is a true cross-fade; a lone layer is drawn at its own weight
/// over transparency; with neither, the result is fully transparent.
#[tracing::instrument(skip(day, night), fields(has_day = day.is_some(), has_night = night.is_some()))]
pub fn blend_images(
    day: Option<&PremulImage>,
    night: Option<&PremulImage>,
    weights: BlendWeights,
    size: (u32, u32),
) -> DaylightResult<PremulImage> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(DaylightError::validation("blend footprint must be non-empty"));
    }

    let mut out = PremulImage::transparent(width, height);
    match (day, night) {
        (Some(d), Some(n)) => {
            let d = d.resized(width, height)?;
            let n = n.resized(width, height)?;
            crossfade_in_place(&mut out.data, &d.data, &n.data, weights)?;
        }
        (Some(d), None) => {
            let d = d.resized(width, height)?;
            over_in_place(&mut out.data, &d.data, weights.day)?;
        }
        (None, Some(n)) => {
            let n = n.resized(width, height)?;
            over_in_place(&mut out.data, &n.data, weights.night)?;
        }
        (None, None) => {}
    }
    Ok(out)
}

/// [`over`] applied across two equal-length RGBA8 buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f64) -> DaylightResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(DaylightError::image(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// [`crossfade`] of two equal-length buffers into `dst`.
pub fn crossfade_in_place(
    dst: &mut [u8],
    day: &[u8],
    night: &[u8],
    weights: BlendWeights,
) -> DaylightResult<()> {
    if dst.len() != day.len() || dst.len() != night.len() || !dst.len().is_multiple_of(4) {
        return Err(DaylightError::image(
            "crossfade_in_place expects equal-length rgba8 buffers",
        ));
    }
    for ((o, d), n) in dst
        .chunks_exact_mut(4)
        .zip(day.chunks_exact(4))
        .zip(night.chunks_exact(4))
    {
        let out = crossfade([d[0], d[1], d[2], d[3]], [n[0], n[1], n[2], n[3]], weights);
        o.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
