//! Writing palettes to files.
//!
//! Each [`OutputFormat`] maps to a writer and a default file name. Any I/O
//! failure while opening or writing a file is reported once, as
//! [`PaletteError::WriterUnavailable`] naming that file, and stops the
//! export.

use crate::error::{PaletteError, Result};
use crate::palette::Palette;
use crate::writer::{GplWriter, HtmlWriter, JsonWriter, PaletteWriter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// GIMP palette
    Gpl,
    /// HTML preview page
    Html,
    /// Crocotile3D JSON palette
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Gpl,
        OutputFormat::Html,
        OutputFormat::Json,
    ];

    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Gpl => "color_palette.gpl",
            OutputFormat::Html => "preview.html",
            OutputFormat::Json => "color_palette.json.c3dpal",
        }
    }

    /// Writer for this format over `output`.
    pub fn writer<'a, W: Write + 'a>(self, output: W) -> Box<dyn PaletteWriter + 'a> {
        match self {
            OutputFormat::Gpl => Box::new(GplWriter::new(output)),
            OutputFormat::Html => Box::new(HtmlWriter::new(output)),
            OutputFormat::Json => Box::new(JsonWriter::new(output)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Gpl => write!(f, "gpl"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gpl" | "gimp" => Ok(OutputFormat::Gpl),
            "html" => Ok(OutputFormat::Html),
            "json" | "c3dpal" => Ok(OutputFormat::Json),
            other => Err(PaletteError::OutOfRangeInput(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

/// Where and in which formats a palette is exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub formats: Vec<OutputFormat>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            formats: OutputFormat::ALL.to_vec(),
        }
    }
}

/// Writes `palette` to a single file in `format`.
pub fn export_to_file(palette: &Palette, format: OutputFormat, path: &Path) -> Result<()> {
    let unavailable = |source| PaletteError::WriterUnavailable {
        target: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(unavailable)?;
    write_palette(palette, format, BufWriter::new(file), &path.display().to_string())?;

    info!(
        "Wrote {} colors to {} ({format})",
        palette.len(),
        path.display()
    );
    Ok(())
}

/// Streams `palette` in `format` into `output`.
///
/// An I/O failure part way through is reported as
/// [`PaletteError::WriterUnavailable`] for `target`.
pub fn write_palette<W: Write>(
    palette: &Palette,
    format: OutputFormat,
    output: W,
    target: &str,
) -> Result<()> {
    let mut writer = format.writer(output);
    palette
        .write_to(&mut writer)
        .map_err(|e| e.into_writer_unavailable(target))
}

/// Writes `palette` in every requested format, returning the created paths.
///
/// Stops at the first file that cannot be written.
pub fn export_palette(palette: &Palette, options: &ExportOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(options.formats.len());
    for &format in &options.formats {
        let path = options.output_dir.join(format.default_file_name());
        export_to_file(palette, format, &path)?;
        written.push(path);
    }
    Ok(written)
}
