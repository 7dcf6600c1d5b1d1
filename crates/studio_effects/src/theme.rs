//! Typed surface colours consumed by the CSS and particle generators.
//!
//! Theme values arrive as loose optional strings from the editor. They are validated once here;
//! anything missing or unparsable falls back to the default colour for that slot.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback primary colour.
pub const DEFAULT_PRIMARY: HexColor = HexColor::rgb(0x2c, 0x2c, 0x2c);
/// Fallback accent colour.
pub const DEFAULT_ACCENT: HexColor = HexColor::rgb(0x66, 0x7e, 0xea);
/// Fallback surface background colour.
pub const DEFAULT_BACKGROUND: HexColor = HexColor::rgb(0xff, 0xff, 0xff);
/// Fallback text colour.
pub const DEFAULT_TEXT: HexColor = HexColor::rgb(0x2c, 0x2c, 0x2c);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a colour string is rejected.
pub enum ColorParseError {
    /// The value does not start with `#`.
    #[error("colour `{0}` must start with '#'")]
    MissingHash(String),
    /// The value is not 3 or 6 hex digits long.
    #[error("colour `{0}` must have 3 or 6 hex digits")]
    BadLength(String),
    /// The value contains a non-hex digit.
    #[error("colour `{0}` contains a non-hex digit")]
    BadDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Opaque sRGB colour parsed from `#rgb` or `#rrggbb`.
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl HexColor {
    /// Builds a colour from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` with `alpha` clamped into `[0, 1]`.
    pub fn rgba(self, alpha: f32) -> String {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, alpha)
    }

    /// Parses `raw`, falling back to `fallback` on any failure.
    pub fn parse_or(raw: Option<&str>, fallback: HexColor) -> HexColor {
        raw.and_then(|value| value.parse().ok()).unwrap_or(fallback)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let Some(digits) = trimmed.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(raw.to_string()));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(raw.to_string()));
        }
        let channel = |hex: &str| u8::from_str_radix(hex, 16);
        let parsed = match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                (expand(0), expand(1), expand(2))
            }
            6 => (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ),
            _ => return Err(ColorParseError::BadLength(raw.to_string())),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(ColorParseError::BadDigit(raw.to_string())),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Unvalidated theme colours as supplied by editor form state.
pub struct RawSurfaceTheme {
    /// Primary colour.
    pub primary_color: Option<String>,
    /// Accent colour.
    pub accent_color: Option<String>,
    /// Background colour.
    pub background_color: Option<String>,
    /// Text colour.
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Validated surface colours.
pub struct SurfaceTheme {
    /// Primary colour.
    pub primary: HexColor,
    /// Accent colour.
    pub accent: HexColor,
    /// Background colour.
    pub background: HexColor,
    /// Text colour.
    pub text: HexColor,
}

impl Default for SurfaceTheme {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY,
            accent: DEFAULT_ACCENT,
            background: DEFAULT_BACKGROUND,
            text: DEFAULT_TEXT,
        }
    }
}

impl From<&RawSurfaceTheme> for SurfaceTheme {
    fn from(raw: &RawSurfaceTheme) -> Self {
        Self {
            primary: HexColor::parse_or(raw.primary_color.as_deref(), DEFAULT_PRIMARY),
            accent: HexColor::parse_or(raw.accent_color.as_deref(), DEFAULT_ACCENT),
            background: HexColor::parse_or(raw.background_color.as_deref(), DEFAULT_BACKGROUND),
            text: HexColor::parse_or(raw.text_color.as_deref(), DEFAULT_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("#fff".parse::<HexColor>(), Ok(HexColor::rgb(255, 255, 255)));
        assert_eq!(
            "#2C2C2C".parse::<HexColor>(),
            Ok(HexColor::rgb(0x2c, 0x2c, 0x2c))
        );
        assert_eq!(HexColor::rgb(0x66, 0x7e, 0xea).to_string(), "#667eea");
    }

    #[test]
    fn rejects_malformed_colours() {
        assert!(matches!(
            "2c2c2c".parse::<HexColor>(),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            "#12345".parse::<HexColor>(),
            Err(ColorParseError::BadLength(_))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<HexColor>(),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn raw_theme_falls_back_per_slot() {
        let raw = RawSurfaceTheme {
            primary_color: Some("#ff0000".to_string()),
            accent_color: Some("not-a-colour".to_string()),
            background_color: None,
            text_color: Some(String::new()),
        };
        let theme = SurfaceTheme::from(&raw);
        assert_eq!(theme.primary, HexColor::rgb(255, 0, 0));
        assert_eq!(theme.accent, DEFAULT_ACCENT);
        assert_eq!(theme.background, DEFAULT_BACKGROUND);
        assert_eq!(theme.text.to_string(), "#2c2c2c");
    }

    #[test]
    fn rgba_clamps_alpha() {
        assert_eq!(HexColor::rgb(1, 2, 3).rgba(1.7), "rgba(1, 2, 3, 1.00)");
        assert_eq!(HexColor::rgb(1, 2, 3).rgba(0.25), "rgba(1, 2, 3, 0.25)");
    }
}
