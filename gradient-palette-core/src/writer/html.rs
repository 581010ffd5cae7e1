//! HTML preview pages.
//!
//! The page shows the palette header, the ranges a gradient palette was
//! generated from (when known), and every color as a swatch in rows of
//! [`SWATCHES_PER_ROW`].

use super::{PaletteHeader, PaletteWriter};
use crate::color::{extract_min_max, hsv_to_rgb, Hsv, Rgb};
use crate::error::Result;
use std::io::Write;

pub const SWATCHES_PER_ROW: usize = 10;

const PAGE_HEAD: &str = "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>Color Palette Preview</title>\
<style>body{ background: linear-gradient(to bottom, #dadada, #555) fixed; background-color: #ccc; } \
#title{ margin: 20px; } \
table{ border-collapse: collapse; margin: 20px; } td{ padding: 10px; } \
.swatches{ margin: 20px; } .row{ width: 700px; height: 38px; } \
.swatch{ display: inline; padding: 4px; border: 4px solid black; }</style>\
</head><body>\n";

const PAGE_TAIL: &str = "</div>\n</body></html>\n";

fn swatch(color: Rgb) -> String {
    format!(
        "<span class=\"swatch\" style=\"background-color: rgb({}, {}, {});\">&nbsp;&nbsp;&nbsp;</span>",
        color.r, color.g, color.b
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub struct HtmlWriter<W: Write> {
    writer: W,
    row_open: bool,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_pair(&mut self, label: &str, low: Rgb, high: Rgb) -> Result<()> {
        writeln!(
            self.writer,
            "<tr><td align=\"right\">{label} between&nbsp;&nbsp;&nbsp;{}\
             &nbsp;&nbsp;&nbsp;and&nbsp;&nbsp;&nbsp;{}</td></tr>",
            swatch(low),
            swatch(high)
        )?;
        Ok(())
    }

    fn write_ranges(&mut self, start: Hsv, end: Hsv) -> Result<()> {
        let extrema = extract_min_max(start, end);
        let (min, max) = (extrema.min, extrema.max);
        let mid_hue = (min.hue + max.hue) / 2.0;

        self.writer.write_all(b"<div class=\"ranges\"><table>\n")?;
        self.write_pair("Gradient", hsv_to_rgb(start), hsv_to_rgb(end))?;
        self.write_pair(
            "Hue",
            hsv_to_rgb(Hsv::new(min.hue, 1.0, 1.0)),
            hsv_to_rgb(Hsv::new(max.hue, 1.0, 1.0)),
        )?;
        self.write_pair(
            "Saturation",
            hsv_to_rgb(Hsv::new(mid_hue, min.saturation, 1.0)),
            hsv_to_rgb(Hsv::new(mid_hue, max.saturation, 1.0)),
        )?;
        self.write_pair(
            "Value",
            hsv_to_rgb(Hsv::new(mid_hue, 1.0, min.value)),
            hsv_to_rgb(Hsv::new(mid_hue, 1.0, max.value)),
        )?;
        writeln!(
            self.writer,
            "<tr><td align=\"right\">HSV min: {:.2}, {:.2}, {:.2}<br>\
             HSV max: {:.2}, {:.2}, {:.2}</td></tr>",
            min.hue, min.saturation, min.value, max.hue, max.saturation, max.value
        )?;
        self.writer.write_all(b"</table></div>\n")?;
        Ok(())
    }
}

impl<W: Write> PaletteWriter for HtmlWriter<W> {
    fn begin(&mut self, header: &PaletteHeader<'_>) -> Result<()> {
        self.row_open = false;
        self.writer.write_all(PAGE_HEAD.as_bytes())?;
        writeln!(
            self.writer,
            "<div id=\"title\">GIMP Palette<br>Name: {}<br>Colors: {}<br># Generated File</div>",
            escape(header.name),
            header.total
        )?;
        if let Some((start, end)) = header.endpoints {
            self.write_ranges(start, end)?;
        }
        self.writer.write_all(b"<div class=\"swatches\">\n")?;
        Ok(())
    }

    fn write_entry(&mut self, index: usize, color: Rgb) -> Result<()> {
        if index % SWATCHES_PER_ROW == 0 {
            if self.row_open {
                self.writer.write_all(b"</div>\n")?;
            }
            self.writer.write_all(b"<div class=\"row\">\n")?;
            self.row_open = true;
        }
        writeln!(self.writer, "{}", swatch(color))?;
        Ok(())
    }

    fn end(&mut self, _total: usize) -> Result<()> {
        if self.row_open {
            self.writer.write_all(b"</div>\n")?;
            self.row_open = false;
        }
        self.writer.write_all(PAGE_TAIL.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
