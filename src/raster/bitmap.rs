use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Size;
use crate::foundation::error::{DaylightError, DaylightResult};

/// Raster image in row-major premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PremulImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl PremulImage {
    /// Fully transparent image.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap a straight-alpha RGBA image, premultiplying it.
    pub fn from_straight(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            data,
        }
    }

    /// Pixel dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Stretch to exactly `width x height`. Filtering premultiplied data avoids dark fringes.
    pub fn resized(&self, width: u32, height: u32) -> DaylightResult<Self> {
        if self.width == width && self.height == height {
            return Ok(self.clone());
        }
        let buf = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| DaylightError::image("pixel buffer does not match its dimensions"))?;
        let out = image::imageops::resize(&buf, width, height, image::imageops::FilterType::Triangle);
        Ok(Self {
            width,
            height,
            data: out.into_raw(),
        })
    }

    /// Convert back to straight alpha for encoding.
    pub fn to_straight(&self) -> DaylightResult<image::RgbaImage> {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| DaylightError::image("pixel buffer does not match its dimensions"))
    }
}

/// Decode an encoded image (PNG, JPEG, ...) into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> DaylightResult<PremulImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(PremulImage::from_straight(dyn_img.to_rgba8()))
}

/// Load and decode an image file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_image(path: impl AsRef<Path>) -> DaylightResult<PremulImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("read image '{}'", path.display()))?;
    let img = decode_image(&bytes)?;
    tracing::debug!(width = img.width, height = img.height, "image loaded");
    Ok(img)
}

/// Natural pixel size of an image file, read from its header.
pub fn probe_size(path: impl AsRef<Path>) -> DaylightResult<Size> {
    let path = path.as_ref();
    let (w, h) = image::image_dimensions(path).map_err(|e| {
        DaylightError::image(format!("probe dimensions of '{}': {e}", path.display()))
    })?;
    Ok(Size::new(f64::from(w), f64::from(h)))
}

/// Encode as PNG and write to `path`, creating parent directories.
pub fn save_png(img: &PremulImage, path: impl AsRef<Path>) -> DaylightResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let straight = img.to_straight()?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(straight)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| DaylightError::image(format!("encode png: {e}")))?;
    std::fs::write(path, &buf).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bitmap.rs"]
mod tests;
