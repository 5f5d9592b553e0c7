use crate::foundation::error::{DaylightError, DaylightResult};
use crate::state::container::TimeState;

/// Injection point for the shared container into a consumer tree.
///
/// A scope either carries a [`TimeState`] or it does not; child scopes inherit their parent's
/// container unless they provide their own.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    container: Option<TimeState>,
}

impl Scope {
    /// Scope with no container. Consumers that require one fail to mount here.
    pub fn root() -> Self {
        Self::default()
    }

    /// Scope providing `state` to everything mounted beneath it.
    pub fn provide(state: TimeState) -> Self {
        Self {
            container: Some(state),
        }
    }

    /// Child scope that inherits this scope's container.
    pub fn child(&self) -> Self {
        self.clone()
    }

    /// Child scope providing a different container, shadowing the inherited one.
    pub fn with_container(&self, state: TimeState) -> Self {
        Self::provide(state)
    }

    /// Container visible from this scope, if any.
    pub fn try_time_state(&self) -> Option<&TimeState> {
        self.container.as_ref()
    }

    /// Container visible from this scope.
    ///
    /// Errors with [`DaylightError::MissingContainer`] naming `consumer` when absent: reading
    /// derived values without a container is a programming error, not a recoverable state.
    pub fn use_time_state(&self, consumer: &str) -> DaylightResult<TimeState> {
        self.container.clone().ok_or_else(|| {
            tracing::error!(consumer, "consumer mounted outside a time state container");
            DaylightError::missing_container(consumer)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/scope.rs"]
mod tests;
