//! RGB <-> HSV conversion.
//!
//! RGB channels are 8-bit (0-255). HSV hue is in degrees, saturation and
//! value are fractions in 0.0-1.0.

use super::{Hsv, Rgb};

/// Converts an 8-bit RGB color to HSV.
///
/// Achromatic inputs (all channels equal) have no defined hue; they get
/// hue 0 so the result is always deterministic. Black also gets
/// saturation 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let saturation = if max > 0.0 { chroma / max } else { 0.0 };

    let hue = if chroma == 0.0 {
        0.0
    } else {
        let sector = if max == r {
            (g - b) / chroma
        } else if max == g {
            2.0 + (b - r) / chroma
        } else {
            4.0 + (r - g) / chroma
        };
        let degrees = sector * 60.0;
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    };

    Hsv::new(hue, saturation, max)
}

/// Converts an HSV color to 8-bit RGB.
///
/// Saturation and value are clamped to 0.0-1.0 first. Any finite hue is
/// accepted and reduced to one of the six 60 degree sectors, so 360 maps
/// to the same color as 0. Channels are rounded, not truncated.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv {
        hue,
        saturation: s,
        value: v,
    } = hsv.clamped();

    if s == 0.0 {
        return Rgb::gray(to_channel(v));
    }

    let hue = if hue.is_finite() { hue } else { 0.0 };
    let position = hue / 60.0;
    let whole = position.floor();
    let f = position - whole;
    let sector = (whole as i64).rem_euclid(6);

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(fraction: f64) -> u8 {
    (fraction * 255.0).round().clamp(0.0, 255.0) as u8
}
