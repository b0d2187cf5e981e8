pub mod rgb;
pub mod hsl;

pub use {
    hsl::Hsl,
    rgb::{Rgb, HEX_PATTERN},
};
