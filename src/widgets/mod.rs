/// Day/night crossfade renderer.
pub mod blend;
/// Snapping time slider.
pub mod slider;
