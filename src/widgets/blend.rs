use std::cell::Cell;
use std::fmt;
use std::path::Path;

use crate::foundation::core::{Point, Rect, Size, TransitionMode};
use crate::foundation::error::DaylightResult;
use crate::foundation::math::{clamp_unit, unit_to_u8};
use crate::raster::bitmap::probe_size;
use crate::state::container::TimeState;
use crate::state::scope::Scope;

/// Complementary layer opacities for one timeline value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BlendWeights {
    /// Opacity of the day layer, `1 - t`.
    pub day: f64,
    /// Opacity of the night layer, `t`.
    pub night: f64,
}

impl BlendWeights {
    /// Weights at timeline `t` (clamped). Computed per call, never shared between consumers.
    pub fn at(t: f64) -> Self {
        let t = clamp_unit(t);
        Self {
            day: 1.0 - t,
            night: t,
        }
    }

    /// 8-bit `(day, night)` coverages for pixel compositing.
    ///
    /// Only the night weight is quantized; day takes the complement so the pair always sums
    /// to exactly 255 and an opaque crossfade stays opaque.
    pub fn coverage(self) -> (u16, u16) {
        let night = unit_to_u8(self.night);
        (255 - night, night)
    }
}

/// Caller-supplied image for one layer. The URI is not validated.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageSource {
    /// Path or URL handed to the host's image loader.
    pub uri: String,
    /// Natural pixel size, once known.
    #[serde(default)]
    pub natural_size: Option<Size>,
}

impl ImageSource {
    /// Source with unknown natural size.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            natural_size: None,
        }
    }

    /// Record the natural size reported by the host.
    pub fn with_natural_size(mut self, width: f64, height: f64) -> Self {
        self.natural_size = Some(Size::new(width, height));
        self
    }

    /// Source for a local file, reading its natural size from the image header.
    pub fn probe(path: impl AsRef<Path>) -> DaylightResult<Self> {
        let path = path.as_ref();
        let size = probe_size(path)?;
        Ok(Self {
            uri: path.to_string_lossy().into_owned(),
            natural_size: Some(size),
        })
    }

    fn usable_size(&self) -> Option<Size> {
        self.natural_size
            .filter(|s| s.width.is_finite() && s.height.is_finite())
            .filter(|s| s.width > 0.0 && s.height > 0.0)
    }
}

/// How the blend footprint is sized.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Sizing {
    /// Fixed `width / height` ratio; both layers are positioned over the same box.
    AspectRatio {
        /// Width divided by height.
        ratio: f64,
    },
    /// The day image's natural dimensions decide the box; night stretches to fill it.
    Intrinsic,
}

impl Default for Sizing {
    fn default() -> Self {
        Self::AspectRatio {
            ratio: DayNightBlend::FALLBACK_RATIO,
        }
    }
}

/// Which layer a [`BlendLayer`] draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Base layer.
    Day,
    /// Overlay.
    Night,
}

/// One positioned image layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlendLayer {
    /// Day or night.
    pub kind: LayerKind,
    /// Source URI.
    pub uri: String,
    /// Box the layer is drawn into (always the full footprint).
    pub rect: Rect,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
}

/// What occupies the footprint.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "layers", rename_all = "snake_case")]
pub enum BlendContent {
    /// Present layers, base first.
    Layers(Vec<BlendLayer>),
    /// Neither source supplied.
    Placeholder,
}

/// Layout of a blend for one render pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlendFrame {
    /// Box occupied by the blend.
    pub footprint: Rect,
    /// Layers or placeholder.
    pub content: BlendContent,
    /// Weights used for the layers.
    pub weights: BlendWeights,
    /// Opacity smoothing hint for this instance.
    pub transition: TransitionMode,
}

enum BlendTimeline {
    Shared(TimeState),
    Driven(Cell<f64>),
}

/// Day/night cross-fade renderer.
///
/// A pure consumer of its timeline: the only computation beyond layout is the
/// complementary-weight formula in [`BlendWeights::at`].
pub struct DayNightBlend {
    day: Option<ImageSource>,
    night: Option<ImageSource>,
    sizing: Sizing,
    transition: TransitionMode,
    timeline: BlendTimeline,
}

impl DayNightBlend {
    /// Width/height ratio used when nothing better is known.
    pub const FALLBACK_RATIO: f64 = 16.0 / 9.0;

    /// Default smoothing for discrete (anchor-to-anchor) changes.
    pub const DEFAULT_TRANSITION: TransitionMode = TransitionMode::Smooth { duration_ms: 500 };

    /// Renderer reading the container visible from `scope`.
    pub fn connected(
        scope: &Scope,
        day: Option<ImageSource>,
        night: Option<ImageSource>,
    ) -> DaylightResult<Self> {
        let state = scope.use_time_state("DayNightBlend")?;
        Ok(Self {
            day,
            night,
            sizing: Sizing::default(),
            transition: Self::DEFAULT_TRANSITION,
            timeline: BlendTimeline::Shared(state),
        })
    }

    /// Renderer driven by an external high-frequency value; transitions start disabled.
    pub fn driven(day: Option<ImageSource>, night: Option<ImageSource>, initial: f64) -> Self {
        Self {
            day,
            night,
            sizing: Sizing::default(),
            transition: TransitionMode::Disabled,
            timeline: BlendTimeline::Driven(Cell::new(clamp_unit(initial))),
        }
    }

    /// Detach from the container, keeping sources, sizing and smoothing.
    ///
    /// The driven value starts at the timeline the renderer currently shows. A renderer that is
    /// already driven is returned unchanged.
    pub fn into_driven(self) -> Self {
        let timeline = match self.timeline {
            BlendTimeline::Shared(state) => {
                tracing::debug!("detaching blend from its container");
                BlendTimeline::Driven(Cell::new(state.timeline()))
            }
            driven @ BlendTimeline::Driven(_) => driven,
        };
        Self { timeline, ..self }
    }

    /// Return `true` when the timeline comes from [`Self::drive`] rather than a container.
    pub fn is_driven(&self) -> bool {
        matches!(self.timeline, BlendTimeline::Driven(_))
    }

    /// Set the sizing mode.
    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Set the smoothing mode for this instance.
    pub fn with_transition(mut self, transition: TransitionMode) -> Self {
        self.transition = transition;
        self
    }

    /// Switch smoothing at runtime.
    pub fn set_transition(&mut self, transition: TransitionMode) {
        self.transition = transition;
    }

    /// Smoothing mode for this instance.
    pub fn transition(&self) -> TransitionMode {
        self.transition
    }

    /// Day source, if any.
    pub fn day(&self) -> Option<&ImageSource> {
        self.day.as_ref()
    }

    /// Night source, if any.
    pub fn night(&self) -> Option<&ImageSource> {
        self.night.as_ref()
    }

    /// Replace the day source (e.g. once its natural size is known).
    pub fn set_day(&mut self, day: Option<ImageSource>) {
        self.day = day;
    }

    /// Replace the night source.
    pub fn set_night(&mut self, night: Option<ImageSource>) {
        self.night = night;
    }

    /// Timeline value this instance renders.
    pub fn timeline(&self) -> f64 {
        match &self.timeline {
            BlendTimeline::Shared(state) => state.timeline(),
            BlendTimeline::Driven(v) => v.get(),
        }
    }

    /// Push a new value into a driven renderer.
    ///
    /// Connected renderers only read their container; for them this returns `false` and
    /// leaves the container untouched.
    pub fn drive(&self, t: f64) -> bool {
        match &self.timeline {
            BlendTimeline::Driven(v) => {
                v.set(clamp_unit(t));
                true
            }
            BlendTimeline::Shared(_) => {
                tracing::warn!("ignoring drive() on a container-bound blend");
                false
            }
        }
    }

    /// Weights for the current timeline.
    pub fn weights(&self) -> BlendWeights {
        BlendWeights::at(self.timeline())
    }

    /// Footprint size for an available width.
    pub fn footprint_size(&self, width: f64) -> Size {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let ratio = match self.sizing {
            Sizing::AspectRatio { ratio } => sanitize_ratio(ratio),
            Sizing::Intrinsic => self
                .day
                .as_ref()
                .and_then(ImageSource::usable_size)
                .or_else(|| self.night.as_ref().and_then(ImageSource::usable_size))
                .map(|s| s.width / s.height)
                .unwrap_or(Self::FALLBACK_RATIO),
        };
        Size::new(width, width / ratio)
    }

    /// Layout at the current timeline.
    pub fn frame(&self, origin: Point, width: f64) -> BlendFrame {
        self.frame_at(self.timeline(), origin, width)
    }

    /// Layout at an explicit timeline value.
    pub fn frame_at(&self, t: f64, origin: Point, width: f64) -> BlendFrame {
        let footprint = Rect::from_origin_size(origin, self.footprint_size(width));
        let weights = BlendWeights::at(t);

        let mut layers = Vec::with_capacity(2);
        if let Some(day) = &self.day {
            layers.push(BlendLayer {
                kind: LayerKind::Day,
                uri: day.uri.clone(),
                rect: footprint,
                opacity: weights.day,
            });
        }
        if let Some(night) = &self.night {
            layers.push(BlendLayer {
                kind: LayerKind::Night,
                uri: night.uri.clone(),
                rect: footprint,
                opacity: weights.night,
            });
        }

        let content = if layers.is_empty() {
            BlendContent::Placeholder
        } else {
            BlendContent::Layers(layers)
        };

        BlendFrame {
            footprint,
            content,
            weights,
            transition: self.transition,
        }
    }
}

fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        DayNightBlend::FALLBACK_RATIO
    }
}

impl fmt::Debug for DayNightBlend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = match self.timeline {
            BlendTimeline::Shared(_) => "shared",
            BlendTimeline::Driven(_) => "driven",
        };
        f.debug_struct("DayNightBlend")
            .field("day", &self.day)
            .field("night", &self.night)
            .field("sizing", &self.sizing)
            .field("transition", &self.transition)
            .field("timeline", &bound)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/blend.rs"]
mod tests;
