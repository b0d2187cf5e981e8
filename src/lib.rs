//! Color conversion and blending for theme palettes.
//!
//! Converts colors between RGB, HSL and hex string representations and
//! derives nine-step light and dark ramps from a base color. Every operation
//! is a pure function over plain value types; nothing here installs a logger
//! or touches global state.
//!
//! ```
//! use colorblend::{blend_level_color, Color, Rgb};
//!
//! let rgb = Color::from("#ffa500").into_rgb()?;
//! assert_eq!(rgb, Rgb { red: 255.0, green: 165.0, blue: 0.0 });
//!
//! let ramp = blend_level_color(rgb)?;
//! assert_eq!(ramp.default, "#ffa500");
//! assert_eq!(ramp.dark[8], "#fff1d8");
//! # Ok::<(), colorblend::ParseHexError>(())
//! ```

pub mod blend;
pub mod convert;
pub mod error;
pub mod models;

pub use {
    blend::{blend_color, blend_level_color, BlendLevelColor, BLEND_LEVELS},
    convert::Color,
    error::ParseHexError,
    models::{Hsl, Rgb, HEX_PATTERN},
};

/// Nominal lower bound of an RGB channel.
pub const CHANNEL_MIN: f64 = 0.0;

/// Nominal upper bound of an RGB channel, and the divisor used when
/// normalizing channels to fractions.
pub const CHANNEL_MAX: f64 = 255.0;

pub(crate) const FLOAT_TOLERANCE: f64 = 0.0001;
