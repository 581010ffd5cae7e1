//! Text forms of [`Rgb`] and [`Hsv`].
//!
//! RGB accepts `#rrggbb`, `#rgb` or `r,g,b`. HSV accepts `h,s,v`, with
//! whitespace allowed around each component. Malformed text yields
//! [`PaletteError::InvalidColor`]; well-formed numbers outside their range
//! yield [`PaletteError::OutOfRangeInput`].

use super::{Hsv, Rgb};
use crate::error::{PaletteError, Result};
use std::str::FromStr;

fn split_components(s: &str) -> Result<[&str; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(PaletteError::InvalidColor(format!(
            "expected three comma separated components, got '{s}'"
        ))),
    }
}

fn parse_hex(hex: &str) -> Result<Rgb> {
    let invalid = || PaletteError::InvalidColor(format!("invalid hex color '#{hex}'"));
    let digit = |c: u8| (c as char).to_digit(16).map(|d| d as u8).ok_or_else(invalid);

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => Ok(Rgb::new(
            digit(bytes[0])? * 17,
            digit(bytes[1])? * 17,
            digit(bytes[2])? * 17,
        )),
        6 => {
            let pair = |i: usize| -> Result<u8> {
                Ok(digit(bytes[i])? << 4 | digit(bytes[i + 1])?)
            };
            Ok(Rgb::new(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => Err(invalid()),
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PaletteError::InvalidColor("empty color string".to_string()));
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let [r, g, b] = split_components(s)?;
        let channel = |text: &str| {
            text.parse::<i64>()
                .map_err(|_| PaletteError::InvalidColor(format!("invalid channel '{text}'")))
        };
        Rgb::try_from_channels(channel(r)?, channel(g)?, channel(b)?)
    }
}

impl FromStr for Hsv {
    type Err = PaletteError;

    /// Parses `h,s,v` and validates it as a caller-supplied endpoint.
    fn from_str(s: &str) -> Result<Self> {
        let [h, sat, val] = split_components(s.trim())?;
        let component = |text: &str| {
            text.parse::<f64>()
                .map_err(|_| PaletteError::InvalidColor(format!("invalid component '{text}'")))
        };
        let hsv = Hsv::new(component(h)?, component(sat)?, component(val)?);
        hsv.validate()?;
        Ok(hsv)
    }
}
