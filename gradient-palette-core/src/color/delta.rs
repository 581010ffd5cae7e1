//! Per-axis differences and bounds between two colors.
//!
//! Both [`Rgb`] and [`Hsv`] are three-axis values, so the same functions
//! work on either space through [`ColorTriple`].

use super::{Hsv, Rgb};

/// Absolute difference between two axis values.
pub trait AbsDiff: Copy + PartialOrd {
    fn abs_diff_of(self, other: Self) -> Self;
}

impl AbsDiff for u8 {
    fn abs_diff_of(self, other: Self) -> Self {
        self.abs_diff(other)
    }
}

impl AbsDiff for f64 {
    fn abs_diff_of(self, other: Self) -> Self {
        (self - other).abs()
    }
}

/// A color made of three numeric axes.
pub trait ColorTriple: Copy {
    type Axis: AbsDiff;

    fn axes(self) -> [Self::Axis; 3];
    fn from_axes(axes: [Self::Axis; 3]) -> Self;
}

impl ColorTriple for Rgb {
    type Axis = u8;

    fn axes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    fn from_axes([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl ColorTriple for Hsv {
    type Axis = f64;

    fn axes(self) -> [f64; 3] {
        [self.hue, self.saturation, self.value]
    }

    fn from_axes([hue, saturation, value]: [f64; 3]) -> Self {
        Hsv::new(hue, saturation, value)
    }
}

/// Lower and upper bound of each axis over a pair of colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema<C> {
    pub min: C,
    pub max: C,
}

/// Per-axis absolute difference between `a` and `b`.
pub fn delta<C: ColorTriple>(a: C, b: C) -> C {
    let [a0, a1, a2] = a.axes();
    let [b0, b1, b2] = b.axes();
    C::from_axes([a0.abs_diff_of(b0), a1.abs_diff_of(b1), a2.abs_diff_of(b2)])
}

/// Per-axis `(min, max)` of `a` and `b`.
///
/// The returned colors mix axes from both inputs; `min.hue` may come from
/// `a` while `min.value` comes from `b`.
pub fn extract_min_max<C: ColorTriple>(a: C, b: C) -> Extrema<C> {
    let a = a.axes();
    let b = b.axes();
    let mut min = a;
    let mut max = a;
    for axis in 0..3 {
        if b[axis] < min[axis] {
            min[axis] = b[axis];
        }
        if b[axis] > max[axis] {
            max[axis] = b[axis];
        }
    }
    Extrema {
        min: C::from_axes(min),
        max: C::from_axes(max),
    }
}
