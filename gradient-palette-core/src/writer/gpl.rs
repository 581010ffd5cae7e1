//! GIMP `.gpl` palette files.
//!
//! ```text
//! GIMP Palette
//! Name: Nature
//! Columns: 4
//! # Generated File
//! 34 139 34 Index 0
//! 135 206 235 Index 1
//! ```

use super::{PaletteHeader, PaletteWriter};
use crate::color::Rgb;
use crate::error::Result;
use crate::palette::single_line_name;
use std::io::Write;

/// Column count advertised in the header.
pub const GPL_COLUMNS: u32 = 4;

pub struct GplWriter<W: Write> {
    writer: W,
}

impl<W: Write> GplWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PaletteWriter for GplWriter<W> {
    fn begin(&mut self, header: &PaletteHeader<'_>) -> Result<()> {
        write!(
            self.writer,
            "GIMP Palette\nName: {}\nColumns: {GPL_COLUMNS}\n# Generated File\n",
            single_line_name(header.name)
        )?;
        Ok(())
    }

    fn write_entry(&mut self, index: usize, color: Rgb) -> Result<()> {
        writeln!(
            self.writer,
            "{} {} {} Index {index}",
            color.r, color.g, color.b
        )?;
        Ok(())
    }

    fn end(&mut self, _total: usize) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
