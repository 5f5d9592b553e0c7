use crate::foundation::core::Rgba8;

/// Which of the two themes a [`Theme`] is meant to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Daytime palette.
    Light,
    /// Nighttime palette.
    Dark,
}

/// Static visual theme selected by the dark-mode flag.
///
/// The engine only chooses between two of these; it never builds or mutates them at runtime.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    /// Display name.
    pub name: String,
    /// Intended mode.
    pub mode: ThemeMode,
    /// Page background.
    pub background: Rgba8,
    /// Card and panel surfaces.
    pub surface: Rgba8,
    /// Primary text.
    pub text: Rgba8,
    /// Secondary text.
    pub text_muted: Rgba8,
    /// Highlight color (active tick, slider knob).
    pub accent: Rgba8,
    /// Hairlines and outlines.
    pub border: Rgba8,
    /// Hint for the styling layer when switching to this theme.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u32,
}

fn default_transition_ms() -> u32 {
    300
}

impl Theme {
    /// Built-in daytime palette.
    pub fn light() -> Self {
        Self {
            name: "light".to_owned(),
            mode: ThemeMode::Light,
            background: Rgba8::rgb(0xfa, 0xf7, 0xf2),
            surface: Rgba8::rgb(0xff, 0xff, 0xff),
            text: Rgba8::rgb(0x1c, 0x1b, 0x19),
            text_muted: Rgba8::rgb(0x6b, 0x67, 0x60),
            accent: Rgba8::rgb(0xd9, 0x8a, 0x2b),
            border: Rgba8::rgb(0xe4, 0xdf, 0xd6),
            transition_ms: default_transition_ms(),
        }
    }

    /// Built-in nighttime palette.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_owned(),
            mode: ThemeMode::Dark,
            background: Rgba8::rgb(0x12, 0x14, 0x1c),
            surface: Rgba8::rgb(0x1c, 0x1f, 0x2a),
            text: Rgba8::rgb(0xee, 0xec, 0xe8),
            text_muted: Rgba8::rgb(0x9a, 0x9c, 0xa6),
            accent: Rgba8::rgb(0x8f, 0xa8, 0xff),
            border: Rgba8::rgb(0x2e, 0x32, 0x40),
            transition_ms: default_transition_ms(),
        }
    }
}

/// The light/dark pair a container selects from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ThemePair {
    /// Used while the dark-mode flag is off.
    pub light: Theme,
    /// Used while the dark-mode flag is on.
    pub dark: Theme,
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }
}

impl ThemePair {
    /// Pure selection by dark-mode flag.
    pub fn select(&self, is_dark_mode: bool) -> &Theme {
        if is_dark_mode { &self.dark } else { &self.light }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/theme.rs"]
mod tests;
