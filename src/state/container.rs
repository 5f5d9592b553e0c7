use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::foundation::math::clamp_unit;
use crate::state::theme::{Theme, ThemePair};
use crate::timeline::interp::{TimeInfo, is_dark_mode, time_info};

/// Derived view of the container at one instant.
///
/// Every field is computed from the same stored timeline value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSnapshot {
    /// Stored timeline value in `[0, 1]`.
    pub timeline: f64,
    /// `timeline >= 0.5`.
    pub is_dark_mode: bool,
    /// Interpolated ambient readings.
    pub time_info: TimeInfo,
}

impl TimeSnapshot {
    /// Derive a snapshot from a raw timeline value (clamped).
    pub fn at(timeline: f64) -> Self {
        let timeline = clamp_unit(timeline);
        Self {
            timeline,
            is_dark_mode: is_dark_mode(timeline),
            time_info: time_info(timeline),
        }
    }
}

/// Handle returned by [`TimeState::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Rc<dyn Fn(&TimeSnapshot)>;

struct Inner {
    timeline: f64,
    revision: u64,
    next_subscription: u64,
    listeners: Vec<(Subscription, Listener)>,
}

/// Shared time state container.
///
/// Cloning yields another handle to the same container. All mutation goes through
/// [`TimeState::set_timeline`]; derived values are recomputed on every read and never cached.
/// Listeners run synchronously inside `set_timeline`, after the new value is stored, so no
/// reader can observe the old value once notification starts. If a listener commits again,
/// the outer notification stops and every listener's last delivery is the newest value.
#[derive(Clone)]
pub struct TimeState {
    inner: Rc<RefCell<Inner>>,
    themes: Rc<ThemePair>,
}

impl TimeState {
    /// Container with the built-in themes, starting at `initial` (clamped).
    pub fn new(initial: f64) -> Self {
        Self::with_themes(initial, ThemePair::default())
    }

    /// Container selecting between caller-supplied themes.
    pub fn with_themes(initial: f64, themes: ThemePair) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                timeline: clamp_unit(initial),
                revision: 0,
                next_subscription: 0,
                listeners: Vec::new(),
            })),
            themes: Rc::new(themes),
        }
    }

    /// Current timeline value.
    pub fn timeline(&self) -> f64 {
        self.inner.borrow().timeline
    }

    /// Store `max(0, min(1, value))`; NaN stores `0`. Never fails.
    ///
    /// Returns `true` when the stored value changed (and listeners were notified).
    pub fn set_timeline(&self, value: f64) -> bool {
        let next = clamp_unit(value);
        let (prev, committed, listeners) = {
            let mut inner = self.inner.borrow_mut();
            if inner.timeline == next {
                return false;
            }
            let prev = inner.timeline;
            inner.timeline = next;
            inner.revision += 1;
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (prev, inner.revision, listeners)
        };

        tracing::debug!(from = prev, to = next, "timeline committed");
        if is_dark_mode(prev) != is_dark_mode(next) {
            tracing::debug!(theme = %self.theme().name, "theme switched");
        }

        let snapshot = TimeSnapshot::at(next);
        for listener in listeners {
            // A listener wrote back; the nested commit already notified everyone.
            if self.revision() != committed {
                tracing::trace!(superseded = next, "stopping stale notification");
                break;
            }
            listener(&snapshot);
        }
        true
    }

    /// Dark-mode flag for the current value.
    pub fn is_dark_mode(&self) -> bool {
        is_dark_mode(self.timeline())
    }

    /// Interpolated readings for the current value.
    pub fn time_info(&self) -> TimeInfo {
        time_info(self.timeline())
    }

    /// Theme selected by the current dark-mode flag.
    pub fn theme(&self) -> &Theme {
        self.themes.select(self.is_dark_mode())
    }

    /// Both themes this container selects from.
    pub fn themes(&self) -> &ThemePair {
        &self.themes
    }

    /// All derived values for the current timeline.
    pub fn snapshot(&self) -> TimeSnapshot {
        TimeSnapshot::at(self.timeline())
    }

    /// Number of committed changes since construction.
    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    /// Register a listener run after every committed change.
    pub fn subscribe(&self, listener: impl Fn(&TimeSnapshot) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = Subscription(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != subscription);
        inner.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Return `true` when both handles refer to the same container.
    pub fn same_container(&self, other: &TimeState) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for TimeState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for TimeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TimeState")
            .field("timeline", &inner.timeline)
            .field("revision", &inner.revision)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/container.rs"]
mod tests;
