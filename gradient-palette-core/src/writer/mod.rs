//! Palette serialization.
//!
//! Every output format implements [`PaletteWriter`], which receives a
//! palette in three phases: one `begin` with the header data, one
//! `write_entry` per indexed color, and one `end` with the final count.
//! Writers wrap any [`std::io::Write`], so they work the same on files,
//! buffers, or stdout.

pub mod gpl;
pub mod html;
pub mod json;

pub use gpl::GplWriter;
pub use html::HtmlWriter;
pub use json::JsonWriter;

use crate::color::{Hsv, Rgb};
use crate::error::Result;

/// Data available to a writer before any color is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteHeader<'a> {
    pub name: &'a str,
    /// HSV start and end of the generating gradient, if there was one
    pub endpoints: Option<(Hsv, Hsv)>,
    /// Number of colors that will follow
    pub total: usize,
}

/// Receiver of an indexed color sequence.
pub trait PaletteWriter {
    /// Writes whatever precedes the first color.
    fn begin(&mut self, header: &PaletteHeader<'_>) -> Result<()>;

    /// Writes one color at its palette index.
    fn write_entry(&mut self, index: usize, color: Rgb) -> Result<()>;

    /// Writes whatever follows the last color and flushes.
    fn end(&mut self, total: usize) -> Result<()>;
}

impl<T: PaletteWriter + ?Sized> PaletteWriter for Box<T> {
    fn begin(&mut self, header: &PaletteHeader<'_>) -> Result<()> {
        (**self).begin(header)
    }

    fn write_entry(&mut self, index: usize, color: Rgb) -> Result<()> {
        (**self).write_entry(index, color)
    }

    fn end(&mut self, total: usize) -> Result<()> {
        (**self).end(total)
    }
}
