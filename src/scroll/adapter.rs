use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::foundation::core::TransitionMode;
use crate::foundation::error::DaylightResult;
use crate::foundation::math::clamp_unit;
use crate::scroll::clock::{ScrollRange, clock_label, percent_label};
use crate::state::container::TimeState;
use crate::state::scope::Scope;
use crate::widgets::blend::DayNightBlend;

/// Retained display text that can be updated in place.
///
/// Writing here must not cause any surrounding content to be rebuilt.
pub trait TextNode {
    /// Replace the node's text.
    fn set_text(&mut self, text: &str);
}

impl<T: TextNode> TextNode for Rc<RefCell<T>> {
    fn set_text(&mut self, text: &str) {
        self.borrow_mut().set_text(text);
    }
}

/// In-memory [`TextNode`] that counts its writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RetainedText {
    text: String,
    writes: u64,
}

impl RetainedText {
    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many times the text was replaced.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl TextNode for RetainedText {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
    }
}

struct Target {
    node: Box<dyn TextNode>,
    last: Option<String>,
}

impl Target {
    fn new(node: impl TextNode + 'static) -> Self {
        Self {
            node: Box::new(node),
            last: None,
        }
    }

    fn write(&mut self, text: String) {
        if self.last.as_deref() == Some(text.as_str()) {
            return;
        }
        self.node.set_text(&text);
        self.last = Some(text);
    }
}

/// Turns scroll progress into a clock readout on a high-frequency path.
///
/// Each update writes straight into retained text nodes; nothing else is re-derived. The
/// adapter is not a writer of the shared timeline unless [`Self::mirror_into`] wires it up.
pub struct ScrollProgressAdapter {
    label: Target,
    percent: Option<Target>,
    range: Option<ScrollRange>,
    blend: Option<DayNightBlend>,
    mirror: Option<TimeState>,
    progress: f64,
}

impl ScrollProgressAdapter {
    /// Adapter writing the clock label into `label`.
    pub fn new(label: impl TextNode + 'static) -> Self {
        Self {
            label: Target::new(label),
            percent: None,
            range: None,
            blend: None,
            mirror: None,
            progress: 0.0,
        }
    }

    /// Also write a percentage readout into `node`.
    pub fn with_percent(mut self, node: impl TextNode + 'static) -> Self {
        self.percent = Some(Target::new(node));
        self
    }

    /// Convert raw offsets through `range` in [`Self::on_scroll`].
    pub fn with_range(mut self, range: ScrollRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Forward progress into `blend` as its timeline, with smoothing disabled.
    ///
    /// A container-bound blend is detached first (see [`DayNightBlend::into_driven`]) so it
    /// follows progress instead of the shared value.
    pub fn drive_blend(mut self, blend: DayNightBlend) -> Self {
        let mut blend = blend.into_driven();
        blend.set_transition(TransitionMode::Disabled);
        blend.drive(self.progress);
        self.blend = Some(blend);
        self
    }

    /// Mirror progress into the container visible from `scope`.
    pub fn mirror_into(mut self, scope: &Scope) -> DaylightResult<Self> {
        self.mirror = Some(scope.use_time_state("ScrollProgressAdapter")?);
        Ok(self)
    }

    /// Latest progress value.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Driven blend, if any.
    pub fn blend(&self) -> Option<&DayNightBlend> {
        self.blend.as_ref()
    }

    /// Handle a raw scroll offset. Without a range, the offset is taken as progress.
    pub fn on_scroll(&mut self, offset: f64) -> f64 {
        let p = match self.range {
            Some(range) => range.progress(offset),
            None => offset,
        };
        self.on_progress(p);
        self.progress
    }

    /// Handle a progress update from the scroll tracker.
    pub fn on_progress(&mut self, p: f64) {
        let p = clamp_unit(p);
        self.progress = p;
        tracing::trace!(progress = p, "scroll tick");

        self.label.write(clock_label(p));
        if let Some(percent) = self.percent.as_mut() {
            percent.write(percent_label(p));
        }
        if let Some(blend) = &self.blend {
            blend.drive(p);
        }
        if let Some(state) = &self.mirror {
            state.set_timeline(p);
        }
    }
}

impl fmt::Debug for ScrollProgressAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollProgressAdapter")
            .field("progress", &self.progress)
            .field("label", &self.label.last)
            .field("range", &self.range)
            .field("blend", &self.blend)
            .field("mirrored", &self.mirror.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/adapter.rs"]
mod tests;
