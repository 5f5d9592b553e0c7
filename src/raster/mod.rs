/// Premultiplied bitmaps and image I/O.
pub mod bitmap;
/// Pixel-level blending of day and night layers.
pub mod composite;
