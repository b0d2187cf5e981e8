use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{error::ParseHexError, CHANNEL_MAX, CHANNEL_MIN};

/// Matches 6-digit hex color codes and the 3-digit shorthand, with or
/// without the `#` prefix.
pub static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([a-fA-F0-9]{6}|[a-fA-F0-9]{3})$").unwrap()
});

/// An RGB color with `f64` channels, nominally in `[0, 255]`.
///
/// Channels are never clamped or rounded here. Conversions keep whatever the
/// math produces, and [`Rgb::blend`] returns fractional channels on purpose;
/// values only collapse to whole bytes when encoded with [`Rgb::into_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const BLACK: Self = Self {
        red: CHANNEL_MIN,
        green: CHANNEL_MIN,
        blue: CHANNEL_MIN,
    };

    pub const WHITE: Self = Self {
        red: CHANNEL_MAX,
        green: CHANNEL_MAX,
        blue: CHANNEL_MAX,
    };

    /// Parses a `#rrggbb` string.
    ///
    /// The `#` prefix is required even though [`HEX_PATTERN`] accepts its
    /// absence. The 3-digit shorthand also passes the pattern but is not
    /// expanded: only complete two-digit groups are consumed, so `"#abc"`
    /// fills the red channel from `ab` and leaves green and blue at zero.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        if !HEX_PATTERN.is_match(hex) {
            return Err(ParseHexError::InvalidFormat(hex.to_owned()));
        }

        let Some(digits) = hex.strip_prefix('#') else {
            return Err(ParseHexError::MissingPrefix(hex.to_owned()));
        };

        let mut channels = [0_u8; 3];
        let groups = (0..digits.len().saturating_sub(1)).step_by(2);
        for (channel, start) in channels.iter_mut().zip(groups) {
            *channel = u8::from_str_radix(&digits[start..start + 2], 16).unwrap_or_default();
        }

        Ok(Self {
            red: f64::from(channels[0]),
            green: f64::from(channels[1]),
            blue: f64::from(channels[2]),
        })
    }

    /// Parses like [`Rgb::from_hex`] but degrades to black on failure,
    /// logging a warning. Callers that need to tell true black apart from a
    /// parse failure should stay with the strict form.
    pub fn from_hex_lossy(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|err| {
            log::warn!("{err}, falling back to black");
            Self::BLACK
        })
    }

    /// Encodes as `#rrggbb`, truncating each channel toward zero and
    /// saturating outside `[0, 255]`.
    pub fn into_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.red as u8, self.green as u8, self.blue as u8
        )
    }

    /// Interpolates each channel linearly toward `blend`: level 0 keeps
    /// `self`, level 1 lands on `blend`. The level is not clamped and the
    /// result is left unrounded.
    pub fn blend(self, blend: Self, level: f64) -> Self {
        let mix = |base: f64, target: f64| base * (1.0 - level) + target * level;

        Self {
            red: mix(self.red, blend.red),
            green: mix(self.green, blend.green),
            blue: mix(self.blue, blend.blue),
        }
    }
}
