//! Gradient stepping through HSV space.
//!
//! A [`ColorRange`] spans two HSV endpoints with a step count per axis.
//! [`GradientStepper`] enumerates every point of the resulting 3D grid,
//! hue outermost and value innermost, and converts each point to RGB on
//! its own, so no color depends on the one emitted before it.

use crate::color::{hsv_to_rgb, Hsv, Rgb};
use crate::error::{Axis, PaletteError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slack allowed past an axis end before a walk stops.
///
/// Same unit as the axis: degrees for hue, fraction for saturation and value.
/// Positions are computed from their index rather than by repeated
/// addition, and the last one is pinned to the axis end, so a walk never
/// overshoots and never loses its final row to rounding. Every emitted
/// value stays within this bound.
pub const AXIS_TOLERANCE: f64 = 0.01;

/// Largest grid a single range may describe.
///
/// Larger step counts are rejected with [`PaletteError::OutOfRangeInput`]
/// before anything is allocated.
pub const MAX_GRID_POINTS: usize = 1 << 20;

/// Number of grid positions along each HSV axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCounts {
    pub hue: u32,
    pub saturation: u32,
    pub value: u32,
}

impl StepCounts {
    pub const fn new(hue: u32, saturation: u32, value: u32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Number of grid points, `hue * saturation * value`, or `None` if the
    /// product does not fit in `usize`.
    pub fn checked_total(&self) -> Option<usize> {
        (self.hue as usize)
            .checked_mul(self.saturation as usize)?
            .checked_mul(self.value as usize)
    }

    /// Number of grid points, saturating at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.checked_total().unwrap_or(usize::MAX)
    }

    /// Rejects grids larger than [`MAX_GRID_POINTS`].
    fn check_size(&self) -> Result<()> {
        match self.checked_total() {
            Some(total) if total <= MAX_GRID_POINTS => Ok(()),
            _ => Err(PaletteError::OutOfRangeInput(format!(
                "{}x{}x{} grid exceeds {MAX_GRID_POINTS} colors",
                self.hue, self.saturation, self.value
            ))),
        }
    }
}

impl From<(u32, u32, u32)> for StepCounts {
    fn from((hue, saturation, value): (u32, u32, u32)) -> Self {
        Self::new(hue, saturation, value)
    }
}

impl Default for StepCounts {
    fn default() -> Self {
        Self::new(6, 3, 4)
    }
}

/// Evenly spaced positions along one axis, always walked low to high.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisWalk {
    low: f64,
    high: f64,
    increment: f64,
    count: u32,
}

impl AxisWalk {
    /// Orders the endpoints, then derives the increment.
    ///
    /// One step is only meaningful when the axis has no span; anything
    /// else would need a division by zero.
    fn new(axis: Axis, start: f64, end: f64, steps: u32) -> Result<Self> {
        let (low, high) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        let span = high - low;

        let increment = match steps {
            0 => return Err(PaletteError::InvalidStepCount { axis, steps }),
            1 if span == 0.0 => 0.0,
            1 => return Err(PaletteError::InvalidStepCount { axis, steps }),
            n => span / f64::from(n - 1),
        };

        Ok(Self {
            low,
            high,
            increment,
            count: steps,
        })
    }

    fn values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.count as usize);
        for index in 0..self.count {
            if index + 1 == self.count {
                values.push(self.high);
            } else {
                let position = self.low + self.increment * f64::from(index);
                values.push(position.min(self.high));
            }
        }
        values
    }
}

/// Start and end HSV colors plus the per-axis step counts between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    start: Hsv,
    end: Hsv,
    steps: StepCounts,
}

impl ColorRange {
    /// Validates both endpoints and the step counts.
    ///
    /// Endpoints outside 0-360 hue or 0-1 saturation/value give
    /// [`PaletteError::OutOfRangeInput`], as does a grid larger than
    /// [`MAX_GRID_POINTS`]. A step count below 2 on an axis whose endpoints
    /// differ gives [`PaletteError::InvalidStepCount`].
    pub fn new(start: Hsv, end: Hsv, steps: StepCounts) -> Result<Self> {
        start.validate()?;
        end.validate()?;
        let range = Self { start, end, steps };
        range.walks()?;
        steps.check_size()?;
        Ok(range)
    }

    pub fn start(&self) -> Hsv {
        self.start
    }

    pub fn end(&self) -> Hsv {
        self.end
    }

    pub fn steps(&self) -> StepCounts {
        self.steps
    }

    fn walks(&self) -> Result<[AxisWalk; 3]> {
        Ok([
            AxisWalk::new(Axis::Hue, self.start.hue, self.end.hue, self.steps.hue)?,
            AxisWalk::new(
                Axis::Saturation,
                self.start.saturation,
                self.end.saturation,
                self.steps.saturation,
            )?,
            AxisWalk::new(
                Axis::Value,
                self.start.value,
                self.end.value,
                self.steps.value,
            )?,
        ])
    }

    /// Iterator over every grid point of this range.
    pub fn stepper(&self) -> Result<GradientStepper> {
        GradientStepper::new(self.start, self.end, self.steps)
    }
}

/// Position of a grid point along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    pub hue: usize,
    pub saturation: usize,
    pub value: usize,
}

/// One enumerated grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub index: GridIndex,
    pub hsv: Hsv,
    pub rgb: Rgb,
}

/// Walks the hue x saturation x value grid between two HSV colors.
///
/// Value varies fastest, then saturation, then hue.
#[derive(Debug, Clone)]
pub struct GradientStepper {
    hues: Vec<f64>,
    saturations: Vec<f64>,
    values: Vec<f64>,
    position: usize,
}

impl GradientStepper {
    /// Builds a stepper without validating endpoint ranges.
    ///
    /// Step counts and the grid size are still checked. Saturation and
    /// value are clamped when each point is converted.
    pub fn new(start: Hsv, end: Hsv, steps: StepCounts) -> Result<Self> {
        let hue = AxisWalk::new(Axis::Hue, start.hue, end.hue, steps.hue)?;
        let saturation = AxisWalk::new(
            Axis::Saturation,
            start.saturation,
            end.saturation,
            steps.saturation,
        )?;
        let value = AxisWalk::new(Axis::Value, start.value, end.value, steps.value)?;
        steps.check_size()?;

        let stepper = Self {
            hues: hue.values(),
            saturations: saturation.values(),
            values: value.values(),
            position: 0,
        };
        debug!(
            "Gradient grid {}x{}x{} ({} points)",
            stepper.hues.len(),
            stepper.saturations.len(),
            stepper.values.len(),
            stepper.total()
        );
        Ok(stepper)
    }

    /// Total number of grid points, independent of iteration progress.
    pub fn total(&self) -> usize {
        self.hues.len() * self.saturations.len() * self.values.len()
    }

    fn point_at(&self, flat: usize) -> GridPoint {
        let per_hue = self.saturations.len() * self.values.len();
        let index = GridIndex {
            hue: flat / per_hue,
            saturation: (flat / self.values.len()) % self.saturations.len(),
            value: flat % self.values.len(),
        };
        let hsv = Hsv::new(
            self.hues[index.hue],
            self.saturations[index.saturation],
            self.values[index.value],
        )
        .clamped();
        GridPoint {
            index,
            hsv,
            rgb: hsv_to_rgb(hsv),
        }
    }
}

impl Iterator for GradientStepper {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.position >= self.total() {
            return None;
        }
        let point = self.point_at(self.position);
        self.position += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GradientStepper {}

/// Generates the RGB colors of every grid point between `start` and `end`.
///
/// The result holds exactly `steps.total()` colors in grid order.
pub fn create_gradient(start: Hsv, end: Hsv, steps: StepCounts) -> Result<Vec<Rgb>> {
    let range = ColorRange::new(start, end, steps)?;
    Ok(range.stepper()?.map(|point| point.rgb).collect())
}
