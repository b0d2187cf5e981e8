use serde::{Deserialize, Serialize};

use crate::convert::Color;
use crate::error::ParseHexError;
use crate::models::Rgb;

/// Blend ratios for ramp levels 1 through 9. The last two steps sit off the
/// 0.1 grid so the ramp keeps visibly distinct shades near its target.
pub const BLEND_LEVELS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.78, 0.85];

/// A base color with its nine-step light and dark ramps, hex-encoded.
///
/// `light[0]` and `dark[0]` hold level 1 (ratio `BLEND_LEVELS[0]`), up
/// through level 9 at index 8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendLevelColor {
    pub default: String,
    pub light: [String; 9],
    pub dark: [String; 9],
}

/// Blends two colors of any representation: per channel,
/// `base * (1 - level) + blend * level`.
///
/// The result keeps fractional channels and is not clamped, so levels
/// outside `[0, 1]` extrapolate. Encode through [`Rgb::into_hex`] once whole
/// bytes are wanted.
pub fn blend_color(
    base: impl Into<Color>,
    blend: impl Into<Color>,
    level: f64,
) -> Result<Rgb, ParseHexError> {
    let base = base.into().into_rgb()?;
    let blend = blend.into().into_rgb()?;

    Ok(base.blend(blend, level))
}

/// Derives the light and dark level ramps of a base color given in any
/// representation.
///
/// The base is normalized to hex first and every ramp entry blends from that
/// re-parsed value, so fractional channels are truncated away before any
/// blending. The ramp directions keep a long-standing inversion: `light`
/// levels step toward black and `dark` levels toward white.
pub fn blend_level_color(base: impl Into<Color>) -> Result<BlendLevelColor, ParseHexError> {
    let default = base.into().into_hex();
    let rgb = Rgb::from_hex(&default)?;

    Ok(BlendLevelColor {
        light: BLEND_LEVELS.map(|level| rgb.blend(Rgb::BLACK, level).into_hex()),
        dark: BLEND_LEVELS.map(|level| rgb.blend(Rgb::WHITE, level).into_hex()),
        default,
    })
}
