//! JSON color arrays as read by Crocotile3D.
//!
//! The output is a single line: `[{"r":0,"g":128,"b":255},{"r":200,"g":20,"b":220}]`.

use super::{PaletteHeader, PaletteWriter};
use crate::color::Rgb;
use crate::error::Result;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PaletteWriter for JsonWriter<W> {
    fn begin(&mut self, _header: &PaletteHeader<'_>) -> Result<()> {
        self.written = 0;
        self.writer.write_all(b"[")?;
        Ok(())
    }

    fn write_entry(&mut self, _index: usize, color: Rgb) -> Result<()> {
        if self.written > 0 {
            self.writer.write_all(b",")?;
        }
        serde_json::to_writer(&mut self.writer, &color).map_err(std::io::Error::from)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self, _total: usize) -> Result<()> {
        self.writer.write_all(b"]")?;
        self.writer.flush()?;
        Ok(())
    }
}
