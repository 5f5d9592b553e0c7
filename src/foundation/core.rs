use std::fmt;

use crate::foundation::error::{DaylightError, DaylightResult};

pub use kurbo::{Point, Rect, Size};

/// Straight-alpha RGBA8 color.
///
/// Serialized as `#rrggbb` or `#rrggbbaa` so theme files stay hand-editable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> DaylightResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let byte = |i: usize| -> DaylightResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| DaylightError::validation(format!("invalid hex color '{s}'")))
        };
        match hex.len() {
            3 if hex.is_ascii() => {
                let mut out = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16).ok_or_else(|| {
                        DaylightError::validation(format!("invalid hex color '{s}'"))
                    })? as u8;
                    out[i] = v * 17;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 if hex.is_ascii() => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 if hex.is_ascii() => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(DaylightError::validation(format!(
                "hex color '{s}' must have 3, 6 or 8 digits"
            ))),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = DaylightError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

/// How a visual consumer smooths changes of a derived value.
///
/// The engine never times transitions itself; this is a hint for the styling layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionMode {
    /// Ease between discrete values over `duration_ms`.
    Smooth {
        /// Transition length in milliseconds.
        duration_ms: u32,
    },
    /// Track the driving value immediately (high-frequency programmatic sources).
    Disabled,
}

impl TransitionMode {
    /// Transition length, or `None` when smoothing is suppressed.
    pub fn duration(self) -> Option<std::time::Duration> {
        match self {
            Self::Smooth { duration_ms } if duration_ms > 0 => Some(
                std::time::Duration::from_millis(u64::from(duration_ms)),
            ),
            _ => None,
        }
    }

    /// Return `true` when smoothing is suppressed.
    pub fn is_disabled(self) -> bool {
        self.duration().is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
