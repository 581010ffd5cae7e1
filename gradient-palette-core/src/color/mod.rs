//! Color representations used by the palette generator.
//!
//! [`Rgb`] holds 8-bit channels and is what every writer receives.
//! [`Hsv`] holds hue in degrees and saturation/value as unit fractions;
//! it is the space the gradient stepper walks.

mod convert;
mod delta;
mod parse;

pub use convert::{hsv_to_rgb, rgb_to_hsv};
pub use delta::{delta, extract_min_max, AbsDiff, ColorTriple, Extrema};

use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for caller-supplied hue values, in degrees.
pub const MAX_HUE: f64 = 360.0;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray with all three channels set to `level`.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    pub const fn black() -> Self {
        Self::gray(0)
    }

    pub const fn white() -> Self {
        Self::gray(255)
    }

    /// Builds a color from wider integers, rejecting channels outside 0-255.
    pub fn try_from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &str, value: i64| {
            u8::try_from(value).map_err(|_| {
                PaletteError::OutOfRangeInput(format!("{name} channel {value} not in 0-255"))
            })
        };
        Ok(Self::new(channel("red", r)?, channel("green", g)?, channel("blue", b)?))
    }

    /// Channels as an array in r, g, b order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An HSV color.
///
/// Hue is in degrees. Values at or beyond 360 are tolerated during
/// gradient iteration and wrap when converted. Saturation and value are
/// fractions; [`hsv_to_rgb`] clamps them to 0.0-1.0 before converting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Returns a copy with saturation and value clamped to 0.0-1.0.
    pub fn clamped(self) -> Self {
        Self::new(
            self.hue,
            self.saturation.clamp(0.0, 1.0),
            self.value.clamp(0.0, 1.0),
        )
    }

    /// Checks that the color is usable as a caller-supplied endpoint.
    ///
    /// Hue must lie in 0-360 degrees, saturation and value in 0.0-1.0,
    /// and no component may be NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if !self.hue.is_finite() || !(0.0..=MAX_HUE).contains(&self.hue) {
            return Err(PaletteError::OutOfRangeInput(format!(
                "hue {} not in 0-{MAX_HUE}",
                self.hue
            )));
        }
        for (name, component) in [("saturation", self.saturation), ("value", self.value)] {
            if !component.is_finite() || !(0.0..=1.0).contains(&component) {
                return Err(PaletteError::OutOfRangeInput(format!(
                    "{name} {component} not in 0-1"
                )));
            }
        }
        Ok(())
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }
}

impl From<(f64, f64, f64)> for Hsv {
    fn from((hue, saturation, value): (f64, f64, f64)) -> Self {
        Self::new(hue, saturation, value)
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsv({:.2}, {:.2}, {:.2})",
            self.hue, self.saturation, self.value
        )
    }
}
