/// Fixed anchor presets along the timeline.
pub mod anchors;
/// Piecewise-linear interpolation between anchors.
pub mod interp;
