use serde::{Deserialize, Serialize};

use super::Rgb;
use crate::{error::ParseHexError, CHANNEL_MAX, FLOAT_TOLERANCE};

/// An HSL color: hue in degrees `[0, 360)`, saturation and lightness as
/// fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Converts from RGB. Achromatic input (all channels equal) maps to zero
    /// hue and zero saturation.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let red = rgb.red / CHANNEL_MAX;
        let green = rgb.green / CHANNEL_MAX;
        let blue = rgb.blue / CHANNEL_MAX;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let mut hue = if delta == 0.0 {
            0.0
        } else if (max - red).abs() < FLOAT_TOLERANCE {
            60.0 * ((green - blue) / delta) + (if green >= blue { 0.0 } else { 360.0 })
        } else if (max - green).abs() < FLOAT_TOLERANCE {
            60.0 * ((blue - red) / delta) + 120.0
        } else {
            60.0 * ((red - green) / delta) + 240.0
        };

        if hue > 360.0 {
            hue -= 360.0;
        }

        let lightness = f64::midpoint(max, min);

        let saturation = if lightness == 0.0 || delta == 0.0 {
            0.0
        } else if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - (max + min))
        };

        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Converts to RGB, rounding each channel to the nearest whole value.
    pub fn into_rgb(self) -> Rgb {
        let q = if self.lightness < 0.5 {
            self.lightness * (1.0 + self.saturation)
        } else {
            self.lightness + self.saturation - self.lightness * self.saturation
        };
        let p = 2.0 * self.lightness - q;

        // Hue as a fraction of a turn, shifted a third per channel and
        // wrapped back into [0, 1].
        let hue_unit = self.hue / 360.0;
        let wrap = |position: f64| {
            if position < 0.0 {
                position + 1.0
            } else if position > 1.0 {
                position - 1.0
            } else {
                position
            }
        };

        let channel = |position: f64| {
            let intensity = if position < 1.0 / 6.0 {
                p + (q - p) * 6.0 * position
            } else if position < 0.5 {
                q
            } else if position < 2.0 / 3.0 {
                p + (q - p) * 6.0 * (2.0 / 3.0 - position)
            } else {
                p
            };

            (intensity * CHANNEL_MAX).round()
        };

        Rgb {
            red: channel(wrap(hue_unit + 1.0 / 3.0)),
            green: channel(wrap(hue_unit)),
            blue: channel(wrap(hue_unit - 1.0 / 3.0)),
        }
    }

    /// Parses a hex string through [`Rgb::from_hex`], with the same strict
    /// rules and quirks.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        Rgb::from_hex(hex).map(Self::from_rgb)
    }

    pub fn into_hex(self) -> String {
        self.into_rgb().into_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn primary_hues_land_on_their_angles() {
        assert_eq!(
            Hsl::from_rgb(Rgb {
                red: 255.0,
                green: 0.0,
                blue: 0.0
            }),
            Hsl {
                hue: 0.0,
                saturation: 1.0,
                lightness: 0.5
            }
        );
        assert_eq!(
            Hsl::from_rgb(Rgb {
                red: 0.0,
                green: 255.0,
                blue: 0.0
            }),
            Hsl {
                hue: 120.0,
                saturation: 1.0,
                lightness: 0.5
            }
        );
        assert_eq!(
            Hsl::from_rgb(Rgb {
                red: 0.0,
                green: 0.0,
                blue: 255.0
            }),
            Hsl {
                hue: 240.0,
                saturation: 1.0,
                lightness: 0.5
            }
        );
    }

    #[test]
    fn achromatic_input_has_zero_hue_and_saturation() {
        let gray = Hsl::from_rgb(Rgb {
            red: 128.0,
            green: 128.0,
            blue: 128.0,
        });
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert_eq!(gray.lightness, 128.0 / 255.0);

        assert_eq!(
            Hsl::from_rgb(Rgb::BLACK),
            Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: 0.0
            }
        );
        assert_eq!(Hsl::from_rgb(Rgb::WHITE).lightness, 1.0);
    }

    #[test]
    fn converts_a_saturated_blue() {
        let hsl = Hsl::from_rgb(Rgb {
            red: 64.0,
            green: 158.0,
            blue: 255.0,
        });
        assert!(close(hsl.hue, 210.47120418848166));
        assert_eq!(hsl.saturation, 1.0);
        assert!(close(hsl.lightness, 0.6254901960784314));
    }

    #[test]
    fn converts_a_dark_desaturated_blue() {
        let hsl = Hsl::from_rgb(Rgb {
            red: 18.0,
            green: 52.0,
            blue: 86.0,
        });
        assert!(close(hsl.hue, 210.0));
        assert!(close(hsl.saturation, 0.653846153846154));
        assert!(close(hsl.lightness, 0.20392156862745098));
    }

    #[test]
    fn orange_hue_wraps_into_the_first_sector() {
        let hsl = Hsl::from_rgb(Rgb {
            red: 255.0,
            green: 165.0,
            blue: 0.0,
        });
        assert!(close(hsl.hue, 38.82352941176471));
        assert_eq!(hsl.saturation, 1.0);
        assert_eq!(hsl.lightness, 0.5);
    }

    #[test]
    fn pure_red_converts_back_exactly() {
        assert_eq!(
            Hsl {
                hue: 0.0,
                saturation: 1.0,
                lightness: 0.5
            }
            .into_rgb(),
            Rgb {
                red: 255.0,
                green: 0.0,
                blue: 0.0
            }
        );
    }

    #[test]
    fn achromatic_hsl_spreads_lightness_evenly() {
        assert_eq!(
            Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness: 0.5
            }
            .into_rgb(),
            Rgb {
                red: 128.0,
                green: 128.0,
                blue: 128.0
            }
        );
    }

    #[test]
    fn hex_composition_round_trips() {
        let hsl = Hsl::from_hex("#409eff").unwrap();
        assert_eq!(hsl.into_hex(), "#409eff");
    }

    #[test]
    fn malformed_hex_propagates_the_error() {
        assert_eq!(
            Hsl::from_hex("409eff"),
            Err(ParseHexError::MissingPrefix("409eff".to_owned()))
        );
    }

    quickcheck::quickcheck! {
        fn rgb_round_trip_stays_within_one_step(red: u8, green: u8, blue: u8) -> bool {
            let rgb = Rgb {
                red: f64::from(red),
                green: f64::from(green),
                blue: f64::from(blue),
            };
            let back = Hsl::from_rgb(rgb).into_rgb();

            (back.red - rgb.red).abs() <= 1.0
                && (back.green - rgb.green).abs() <= 1.0
                && (back.blue - rgb.blue).abs() <= 1.0
        }
    }
}
