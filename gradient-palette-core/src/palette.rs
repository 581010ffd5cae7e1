//! Palette assembly.
//!
//! [`PaletteAssembler`] runs the gradient stepper, optionally removes
//! duplicates, and produces a [`Palette`]: an indexed, immutable color
//! sequence that any [`PaletteWriter`] can serialize.

use crate::color::{Hsv, Rgb};
use crate::dedup::deduplicate;
use crate::error::Result;
use crate::gradient::ColorRange;
use crate::writer::{PaletteHeader, PaletteWriter};
use tracing::debug;

/// Name used when the caller does not pick one.
pub const DEFAULT_PALETTE_NAME: &str = "Extensive Palette";

/// Options for [`PaletteAssembler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteOptions {
    /// Palette name written into file headers
    pub name: String,
    /// Drop repeated colors, keeping the first occurrence
    pub deduplicate: bool,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_PALETTE_NAME.to_string(),
            deduplicate: false,
        }
    }
}

/// A color together with its zero-based palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub index: usize,
    pub color: Rgb,
}

/// Replaces control characters such as newlines with spaces, so a name
/// always fits on the single header line every format gives it.
pub fn single_line_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// An ordered, finished palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    endpoints: Option<(Hsv, Hsv)>,
    colors: Vec<Rgb>,
}

impl Palette {
    /// Wraps an already generated color sequence.
    ///
    /// Control characters in `name` are replaced with spaces.
    pub fn new(name: impl Into<String>, colors: Vec<Rgb>) -> Self {
        let name = name.into();
        Self {
            name: single_line_name(&name),
            endpoints: None,
            colors,
        }
    }

    /// Records the HSV endpoints the palette was generated between.
    pub fn with_endpoints(mut self, start: Hsv, end: Hsv) -> Self {
        self.endpoints = Some((start, end));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoints(&self) -> Option<(Hsv, Hsv)> {
        self.endpoints
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors paired with their palette index.
    pub fn entries(&self) -> impl Iterator<Item = PaletteEntry> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(index, &color)| PaletteEntry { index, color })
    }

    pub fn header(&self) -> PaletteHeader<'_> {
        PaletteHeader {
            name: &self.name,
            endpoints: self.endpoints,
            total: self.colors.len(),
        }
    }

    /// Drives `writer` through `begin`, one `write_entry` per color, and `end`.
    pub fn write_to<W: PaletteWriter + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.begin(&self.header())?;
        for entry in self.entries() {
            writer.write_entry(entry.index, entry.color)?;
        }
        writer.end(self.len())
    }
}

/// Builds palettes from color ranges.
#[derive(Debug, Clone, Default)]
pub struct PaletteAssembler {
    options: PaletteOptions,
}

impl PaletteAssembler {
    pub fn new(options: PaletteOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PaletteOptions {
        &self.options
    }

    /// Walks `range` and returns the finished palette.
    pub fn assemble(&self, range: &ColorRange) -> Result<Palette> {
        let colors: Vec<Rgb> = range.stepper()?.map(|point| point.rgb).collect();
        let generated = colors.len();

        let colors = if self.options.deduplicate {
            deduplicate(&colors)
        } else {
            colors
        };

        debug!(
            "Assembled palette '{}' with {} colors ({} generated)",
            self.options.name,
            colors.len(),
            generated
        );

        Ok(Palette::new(self.options.name.clone(), colors)
            .with_endpoints(range.start(), range.end()))
    }

    /// Wraps a precomputed color sequence, applying the same options.
    pub fn assemble_colors(&self, colors: Vec<Rgb>) -> Palette {
        let colors = if self.options.deduplicate {
            deduplicate(&colors)
        } else {
            colors
        };
        Palette::new(self.options.name.clone(), colors)
    }
}
