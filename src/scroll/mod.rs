/// Scroll progress adapter.
pub mod adapter;
/// Clock and percent labels for scroll progress.
pub mod clock;
