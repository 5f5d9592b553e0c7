//! Daylight is a timeline-driven day/night interpolation engine.
//!
//! A single normalized timeline value `T` in `[0, 1]` covers a twelve-hour cycle from noon to
//! midnight. Everything else is derived from it on read:
//!
//! - Interpolated [`TimeInfo`] (hour, illuminance, color temperature) and the dark-mode flag
//! - A shared [`TimeState`] container that consumers reach through a [`Scope`]
//! - A snapping [`SnapSlider`] and a [`DayNightBlend`] crossfade renderer
//! - A [`ScrollProgressAdapter`] that drives labels and a blend from scroll progress
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Engine configuration loaded from JSON.
pub mod config;
/// CPU pixel compositing for blend frames.
pub mod raster;
/// Scroll-driven progress labels and blend driving.
pub mod scroll;
/// Shared time state container, scope lookup and themes.
pub mod state;
/// Anchor presets and interpolation over the timeline.
pub mod timeline;
/// Slider and day/night blend consumers.
pub mod widgets;

pub use crate::foundation::core::{Point, Rect, Rgba8, Size, TransitionMode};
pub use crate::foundation::error::{DaylightError, DaylightResult};
pub use crate::foundation::math::{clamp_range, clamp_unit};

pub use crate::config::{BlendConfig, EngineConfig, SliderConfig};
pub use crate::raster::bitmap::{PremulImage, decode_image, load_image, probe_size, save_png};
pub use crate::raster::composite::blend_images;
pub use crate::scroll::adapter::{RetainedText, ScrollProgressAdapter, TextNode};
pub use crate::scroll::clock::{ScrollRange, clock_label, percent_label};
pub use crate::state::container::{Subscription, TimeSnapshot, TimeState};
pub use crate::state::scope::Scope;
pub use crate::state::theme::{Theme, ThemeMode, ThemePair};
pub use crate::timeline::anchors::{ANCHORS, AnchorIcon, AnchorPreset, nearest_anchor};
pub use crate::timeline::interp::{DARK_MODE_THRESHOLD, TimeInfo, is_dark_mode, time_info};
pub use crate::widgets::blend::{
    BlendContent, BlendFrame, BlendLayer, BlendWeights, DayNightBlend, ImageSource, LayerKind,
    Sizing,
};
pub use crate::widgets::slider::{
    SliderFrame, SliderVariant, SnapSlider, Tick, TickMark, snap_raw,
};
