use std::cell::Cell;
use std::fmt;

use crate::foundation::core::{Rect, TransitionMode};
use crate::foundation::error::DaylightResult;
use crate::foundation::math::{clamp_range, clamp_unit};
use crate::state::container::TimeState;
use crate::state::scope::Scope;
use crate::timeline::anchors::{ANCHORS, AnchorIcon, AnchorPreset, nearest_anchor_index};

/// Upper bound of the control surface's interaction range.
pub const SLIDER_RANGE_MAX: f64 = 100.0;

/// Presentation of the slider axis. Both variants commit through the same snap path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderVariant {
    /// Full axis with text labels under each anchor.
    #[default]
    Labeled,
    /// Icon-only axis.
    Compact,
}

impl SliderVariant {
    fn default_track(self) -> Rect {
        match self {
            Self::Labeled => Rect::new(0.0, 0.0, SLIDER_RANGE_MAX, 40.0),
            Self::Compact => Rect::new(0.0, 0.0, SLIDER_RANGE_MAX, 24.0),
        }
    }
}

/// Snap a raw control value in `[0, 100]` to its nearest anchor.
///
/// Out-of-range and NaN input is clamped first; this never fails.
pub fn snap_raw(raw: f64) -> &'static AnchorPreset {
    let t = clamp_range(raw, 0.0, SLIDER_RANGE_MAX) / SLIDER_RANGE_MAX;
    &ANCHORS[nearest_anchor_index(t)]
}

/// Where a slider reads and writes its committed value.
pub enum SliderBinding {
    /// Shared container; commits are visible to every consumer of it.
    Connected(TimeState),
    /// Disconnected value owned by this slider (isolated previews).
    Local(Cell<f64>),
}

impl SliderBinding {
    fn value(&self) -> f64 {
        match self {
            Self::Connected(state) => state.timeline(),
            Self::Local(v) => v.get(),
        }
    }

    fn write(&self, value: f64) {
        match self {
            Self::Connected(state) => {
                state.set_timeline(value);
            }
            Self::Local(v) => v.set(clamp_unit(value)),
        }
    }
}

impl fmt::Debug for SliderBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected(state) => f.debug_tuple("Connected").field(state).finish(),
            Self::Local(v) => f.debug_tuple("Local").field(&v.get()).finish(),
        }
    }
}

/// Visual mark drawn for an anchor tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickMark {
    /// Hour label (labeled axis).
    Label(&'static str),
    /// Icon (compact axis).
    Icon(AnchorIcon),
}

/// One anchor tick on the axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Tick {
    /// Index into [`ANCHORS`].
    pub anchor_index: usize,
    /// Anchor timeline position.
    pub position: f64,
    /// Horizontal coordinate on the track.
    pub x: f64,
    /// What to draw.
    pub mark: TickMark,
    /// Nearest-anchor highlight.
    pub active: bool,
}

/// Everything a host needs to draw the slider for one pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SliderFrame {
    /// Axis presentation.
    pub variant: SliderVariant,
    /// Track rectangle.
    pub track: Rect,
    /// Value the knob shows: the drag preview while dragging, else the committed value.
    pub value: f64,
    /// Knob center x.
    pub knob_x: f64,
    /// A gesture is in progress.
    pub dragging: bool,
    /// Anchor ticks, ascending.
    pub ticks: Vec<Tick>,
    /// Knob/opacity smoothing hint.
    pub transition: TransitionMode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Gesture {
    Idle,
    Dragging { raw: f64 },
}

type ChangeCallback = Box<dyn FnMut(f64)>;

/// Draggable/clickable control that commits only anchor positions.
///
/// Raw pointer positions are mapped to `[0, 100]`, divided by 100 and snapped to the nearest
/// anchor on release. Intermediate drag positions are kept as a transient preview and are
/// never written to the binding or passed to `on_change`.
pub struct SnapSlider {
    variant: SliderVariant,
    binding: SliderBinding,
    track: Rect,
    transition: TransitionMode,
    gesture: Gesture,
    on_change: Option<ChangeCallback>,
}

impl SnapSlider {
    /// Default smoothing for anchor-to-anchor moves.
    pub const DEFAULT_TRANSITION: TransitionMode = TransitionMode::Smooth { duration_ms: 300 };

    /// Slider bound to the container visible from `scope`.
    pub fn connected(scope: &Scope, variant: SliderVariant) -> DaylightResult<Self> {
        let state = scope.use_time_state("SnapSlider")?;
        Ok(Self::with_binding(SliderBinding::Connected(state), variant))
    }

    /// Disconnected slider owning its own value, starting at `initial` (clamped).
    pub fn local(initial: f64, variant: SliderVariant) -> Self {
        Self::with_binding(SliderBinding::Local(Cell::new(clamp_unit(initial))), variant)
    }

    fn with_binding(binding: SliderBinding, variant: SliderVariant) -> Self {
        Self {
            variant,
            binding,
            track: variant.default_track(),
            transition: Self::DEFAULT_TRANSITION,
            gesture: Gesture::Idle,
            on_change: None,
        }
    }

    /// Place the axis on a host-provided track rectangle.
    pub fn with_track(mut self, track: Rect) -> Self {
        self.track = track;
        self
    }

    /// Set the smoothing mode.
    pub fn with_transition(mut self, transition: TransitionMode) -> Self {
        self.transition = transition;
        self
    }

    /// Callback invoked with the snapped anchor position on every commit.
    pub fn on_change(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Switch smoothing at runtime, e.g. when an external driver attaches.
    pub fn set_transition(&mut self, transition: TransitionMode) {
        self.transition = transition;
    }

    /// Axis presentation.
    pub fn variant(&self) -> SliderVariant {
        self.variant
    }

    /// Where commits go.
    pub fn binding(&self) -> &SliderBinding {
        &self.binding
    }

    /// Committed value.
    pub fn value(&self) -> f64 {
        self.binding.value()
    }

    /// Value to display: drag preview during a gesture, committed value otherwise.
    pub fn display_value(&self) -> f64 {
        match self.gesture {
            Gesture::Dragging { raw } => raw / SLIDER_RANGE_MAX,
            Gesture::Idle => self.value(),
        }
    }

    /// Return `true` while a pointer gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Map a pointer x-coordinate to the `[0, 100]` control range.
    pub fn raw_from_x(&self, x: f64) -> f64 {
        let width = self.track.width();
        if width.is_nan() || width <= 0.0 {
            return 0.0;
        }
        let raw = (x - self.track.x0) / width * SLIDER_RANGE_MAX;
        clamp_range(raw, 0.0, SLIDER_RANGE_MAX)
    }

    /// Start a drag at pointer `x`.
    pub fn pointer_down(&mut self, x: f64) {
        let raw = self.raw_from_x(x);
        tracing::trace!(raw, "slider drag start");
        self.gesture = Gesture::Dragging { raw };
    }

    /// Update the transient drag preview. No commit happens here.
    pub fn pointer_move(&mut self, x: f64) {
        if let Gesture::Dragging { .. } = self.gesture {
            let raw = self.raw_from_x(x);
            tracing::trace!(raw, "slider drag move");
            self.gesture = Gesture::Dragging { raw };
        }
    }

    /// Finish a drag at pointer `x`, committing the snapped value.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn pointer_up(&mut self, x: f64) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        let raw = self.raw_from_x(x);
        self.gesture = Gesture::Idle;
        Some(self.commit_raw(raw))
    }

    /// Abandon the current drag without committing.
    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Press and release at the same point.
    pub fn click(&mut self, x: f64) -> f64 {
        self.pointer_down(x);
        self.pointer_up(x).unwrap_or_else(|| self.value())
    }

    /// Snap a raw `[0, 100]` value and commit it.
    ///
    /// This is the single commit path for every variant and gesture.
    pub fn commit_raw(&mut self, raw: f64) -> f64 {
        let anchor = snap_raw(raw);
        self.commit_anchor(anchor)
    }

    /// Move to the adjacent anchor (`delta` of `+1`/`-1`) and commit it.
    pub fn step(&mut self, delta: i32) -> f64 {
        let current = nearest_anchor_index(self.value()) as i64;
        let last = (ANCHORS.len() - 1) as i64;
        let next = (current + i64::from(delta)).clamp(0, last) as usize;
        self.commit_anchor(&ANCHORS[next])
    }

    fn commit_anchor(&mut self, anchor: &'static AnchorPreset) -> f64 {
        let value = anchor.position;
        tracing::debug!(value, label = anchor.hour_label, variant = ?self.variant, "slider commit");
        self.binding.write(value);
        if let Some(cb) = self.on_change.as_mut() {
            cb(value);
        }
        value
    }

    /// Follow a high-frequency external signal.
    ///
    /// Writes `value` (clamped, not snapped) to a local binding without calling `on_change`.
    /// Pair with [`TransitionMode::Disabled`] so the knob does not lag. A connected slider
    /// only ever commits anchor positions, so it ignores this and returns `false`.
    pub fn drive(&mut self, value: f64) -> bool {
        match &self.binding {
            SliderBinding::Local(v) => {
                self.gesture = Gesture::Idle;
                v.set(clamp_unit(value));
                true
            }
            SliderBinding::Connected(_) => {
                tracing::warn!("ignoring drive() on a container-bound slider");
                false
            }
        }
    }

    /// Anchor highlighted by the read-only indicator for the committed value.
    pub fn active_anchor(&self) -> &'static AnchorPreset {
        &ANCHORS[nearest_anchor_index(self.value())]
    }

    /// Layout for the current pass.
    pub fn frame(&self) -> SliderFrame {
        let value = clamp_unit(self.display_value());
        let active = nearest_anchor_index(value);
        let x_at = |t: f64| self.track.x0 + t * self.track.width();

        let ticks = ANCHORS
            .iter()
            .enumerate()
            .map(|(i, a)| Tick {
                anchor_index: i,
                position: a.position,
                x: x_at(a.position),
                mark: match self.variant {
                    SliderVariant::Labeled => TickMark::Label(a.hour_label),
                    SliderVariant::Compact => TickMark::Icon(a.icon),
                },
                active: i == active,
            })
            .collect();

        SliderFrame {
            variant: self.variant,
            track: self.track,
            value,
            knob_x: x_at(value),
            dragging: self.is_dragging(),
            ticks,
            transition: self.transition,
        }
    }
}

impl fmt::Debug for SnapSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapSlider")
            .field("variant", &self.variant)
            .field("binding", &self.binding)
            .field("track", &self.track)
            .field("transition", &self.transition)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/slider.rs"]
mod tests;
