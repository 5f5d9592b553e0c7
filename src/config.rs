//! JSON-backed engine configuration.
//!
//! Every field has a default, so `{}` is a valid config.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::TransitionMode;
use crate::foundation::error::{DaylightError, DaylightResult};
use crate::state::container::TimeState;
use crate::state::scope::Scope;
use crate::state::theme::{ThemeMode, ThemePair};
use crate::widgets::blend::{DayNightBlend, ImageSource, Sizing};
use crate::widgets::slider::{SliderVariant, SnapSlider};

/// Slider settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Axis presentation.
    pub variant: SliderVariant,
    /// Knob smoothing; `0` disables it.
    pub transition_ms: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            variant: SliderVariant::Labeled,
            transition_ms: 300,
        }
    }
}

/// Blend renderer settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// Opacity smoothing for discrete changes; `0` disables it.
    pub transition_ms: u32,
    /// Footprint sizing.
    pub sizing: Sizing,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            transition_ms: 500,
            sizing: Sizing::default(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Timeline value the container starts at (clamped).
    pub initial_timeline: f64,
    /// Light/dark themes the container selects between.
    pub themes: ThemePair,
    /// Slider settings.
    pub slider: SliderConfig,
    /// Blend settings.
    pub blend: BlendConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_timeline: 0.0,
            themes: ThemePair::default(),
            slider: SliderConfig::default(),
            blend: BlendConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DaylightResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| DaylightError::serde(format!("parse engine config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> DaylightResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a config file.
    pub fn from_path(path: impl AsRef<Path>) -> DaylightResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DaylightError::config(format!("open engine config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(path = %path.display(), "engine config loaded");
        Ok(cfg)
    }

    /// Reject values that cannot be clamped into something meaningful.
    pub fn validate(&self) -> DaylightResult<()> {
        if !self.initial_timeline.is_finite() {
            return Err(DaylightError::config("initial_timeline must be finite"));
        }
        if let Sizing::AspectRatio { ratio } = self.blend.sizing
            && !(ratio.is_finite() && ratio > 0.0)
        {
            return Err(DaylightError::config(
                "blend.sizing.ratio must be finite and > 0",
            ));
        }
        if self.themes.light.mode != ThemeMode::Light {
            return Err(DaylightError::config("themes.light must have mode 'light'"));
        }
        if self.themes.dark.mode != ThemeMode::Dark {
            return Err(DaylightError::config("themes.dark must have mode 'dark'"));
        }
        Ok(())
    }

    /// Container seeded from this config.
    pub fn build_state(&self) -> TimeState {
        TimeState::with_themes(self.initial_timeline, self.themes.clone())
    }

    /// Slider bound to the container visible from `scope`, styled from this config.
    pub fn build_slider(&self, scope: &Scope) -> DaylightResult<SnapSlider> {
        Ok(SnapSlider::connected(scope, self.slider.variant)?
            .with_transition(transition(self.slider.transition_ms)))
    }

    /// Blend bound to the container visible from `scope`, styled from this config.
    pub fn build_blend(
        &self,
        scope: &Scope,
        day: Option<ImageSource>,
        night: Option<ImageSource>,
    ) -> DaylightResult<DayNightBlend> {
        Ok(DayNightBlend::connected(scope, day, night)?
            .with_sizing(self.blend.sizing)
            .with_transition(transition(self.blend.transition_ms)))
    }
}

fn transition(ms: u32) -> TransitionMode {
    if ms == 0 {
        TransitionMode::Disabled
    } else {
        TransitionMode::Smooth { duration_ms: ms }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
