//! Fixed palettes.
//!
//! [`extensive_palette`] reproduces the general purpose palette the
//! generator shipped with before ranges were configurable: a short gray
//! ramp followed by sixteen hues at five saturation levels and nine value
//! levels each, with two extra dark shades after the darkest value.
//!
//! The shipped palette was computed in single precision, and several of
//! its channels sit on a rounding boundary. Shifting therefore runs in
//! `f32` here rather than through the `f64` conversions in
//! [`crate::color`], so every entry matches the published files.

use crate::color::Rgb;

const GRAY_SEED: Rgb = Rgb::gray(253);
const HUE_SEED: Rgb = Rgb::new(253, 3, 3);

/// Hue spacing between the sixteen hue columns, in degrees.
const HUE_STEP: f32 = 22.5;

/// Value factors of the two shades inserted after the darkest step.
const EXTRA_DARK_FACTORS: [f32; 2] = [
    ((25.0 * 1.2 + 3.0) / 255.0) as f32,
    ((25.0 * 1.5 + 3.0) / 255.0) as f32,
];

fn seed_to_hsv(seed: Rgb) -> (f32, f32, f32) {
    let channel = |c: u8| (f64::from(c) / 255.0) as f32;
    let (r, g, b) = (channel(seed.r), channel(seed.g), channel(seed.b));

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if max == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let saturation = delta / max;
    if delta == 0.0 {
        return (0.0, saturation, max);
    }

    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let mut hue = sector * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    (hue, saturation, max)
}

fn hsv_to_seed(hue: f32, saturation: f32, value: f32) -> Rgb {
    let channel = |x: f32| (f64::from(x) * 255.0).round().clamp(0.0, 255.0) as u8;
    let (s, v) = (saturation.clamp(0.0, 1.0), value.clamp(0.0, 1.0));
    if s == 0.0 {
        return Rgb::gray(channel(v));
    }

    let position = hue / 60.0;
    let whole = position.floor();
    let f = position - whole;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (whole as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Converts `seed` to HSV, adds `hue_shift` to the hue, scales saturation
/// and value by the given factors, and converts back, all in `f32`.
pub fn shift_color(seed: Rgb, hue_shift: f32, saturation_factor: f32, value_factor: f32) -> Rgb {
    let (hue, saturation, value) = seed_to_hsv(seed);
    hsv_to_seed(
        hue + hue_shift,
        saturation * saturation_factor,
        value * value_factor,
    )
}

/// Pushes `shift_color(seed, ..)` for each value level, plus the two extra
/// dark shades right after level 1.
fn push_value_ramp(
    colors: &mut Vec<Rgb>,
    seed: Rgb,
    hue_shift: f32,
    saturation_factor: f32,
    skip: &[u32],
) {
    for level in (1..=10).filter(|level| !skip.contains(level)) {
        let value_factor = (f64::from(level) / 10.0) as f32;
        colors.push(shift_color(seed, hue_shift, saturation_factor, value_factor));
        if level == 1 {
            for factor in EXTRA_DARK_FACTORS {
                colors.push(shift_color(seed, hue_shift, saturation_factor, factor));
            }
        }
    }
}

/// The 891-color "Extensive Palette", in its historical order.
pub fn extensive_palette() -> Vec<Rgb> {
    let mut colors = Vec::with_capacity(891);

    colors.push(shift_color(Rgb::gray(3), 1.0, 1.0, 0.0));
    colors.push(shift_color(Rgb::gray(25), 1.0, 1.0, 0.65));
    push_value_ramp(&mut colors, GRAY_SEED, 1.0, 1.0, &[5, 8, 9]);

    for column in 0..=15u32 {
        let hue_shift = column as f32 * HUE_STEP;
        for saturation_level in (2..=10u32).step_by(2) {
            let saturation_factor = (f64::from(saturation_level) / 10.0) as f32;
            push_value_ramp(&mut colors, HUE_SEED, hue_shift, saturation_factor, &[8]);
        }
    }

    colors
}
