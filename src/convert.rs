use serde::{Deserialize, Serialize};

use crate::error::ParseHexError;
use crate::models::{Hsl, Rgb};

/// A color in any of the three supported representations.
///
/// The variant is fixed at construction, so conversions dispatch on a match
/// instead of probing the value's shape. Strings always enter as
/// [`Color::Hex`] and are only validated when a conversion actually has to
/// parse them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
    Hex(String),
}

impl Color {
    /// Normalizes to RGB. Only hex input can fail; the other variants
    /// convert without error.
    pub fn into_rgb(self) -> Result<Rgb, ParseHexError> {
        match self {
            Self::Rgb(rgb) => Ok(rgb),
            Self::Hsl(hsl) => Ok(hsl.into_rgb()),
            Self::Hex(hex) => Rgb::from_hex(&hex),
        }
    }

    /// Like [`Color::into_rgb`], but degrades malformed hex to black with a
    /// logged warning instead of failing.
    pub fn into_rgb_lossy(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Hsl(hsl) => hsl.into_rgb(),
            Self::Hex(hex) => Rgb::from_hex_lossy(&hex),
        }
    }

    /// Normalizes to HSL, converting through RGB where needed.
    pub fn into_hsl(self) -> Result<Hsl, ParseHexError> {
        match self {
            Self::Rgb(rgb) => Ok(Hsl::from_rgb(rgb)),
            Self::Hsl(hsl) => Ok(hsl),
            Self::Hex(hex) => Hsl::from_hex(&hex),
        }
    }

    /// Like [`Color::into_hsl`], but degrades malformed hex to black with a
    /// logged warning instead of failing.
    pub fn into_hsl_lossy(self) -> Hsl {
        match self {
            Self::Rgb(rgb) => Hsl::from_rgb(rgb),
            Self::Hsl(hsl) => hsl,
            Self::Hex(hex) => Hsl::from_rgb(Rgb::from_hex_lossy(&hex)),
        }
    }

    /// Normalizes to a hex string. Hex input passes through unchanged and
    /// unvalidated; the other variants encode through [`Rgb::into_hex`].
    pub fn into_hex(self) -> String {
        match self {
            Self::Rgb(rgb) => rgb.into_hex(),
            Self::Hsl(hsl) => hsl.into_hex(),
            Self::Hex(hex) => hex,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

impl From<String> for Color {
    fn from(hex: String) -> Self {
        Self::Hex(hex)
    }
}

impl From<&str> for Color {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_owned())
    }
}
