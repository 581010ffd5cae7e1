//! # gradient-palette
//!
//! Deterministic color palettes generated by walking HSV space between
//! two endpoints, written as GIMP palettes, HTML previews, or Crocotile3D
//! JSON arrays.
//!
//! ## Features
//!
//! - **Exact conversions**: RGB <-> HSV with rounding to 8-bit channels
//! - **Gradient grids**: hue x saturation x value grids with a fixed,
//!   reproducible order
//! - **Deduplication**: optional, order preserving
//! - **Writers**: GIMP `.gpl`, HTML preview, and JSON, over any `io::Write`
//!
//! ## Quick Start
//!
//! ```rust
//! use gradient_palette::{
//!     ColorRange, GplWriter, Hsv, PaletteAssembler, PaletteOptions, Result, StepCounts,
//! };
//!
//! # fn main() -> Result<()> {
//! let range = ColorRange::new(
//!     Hsv::new(40.0, 0.2, 0.3),
//!     Hsv::new(300.0, 0.7, 0.8),
//!     StepCounts::new(6, 3, 4),
//! )?;
//!
//! let palette = PaletteAssembler::new(PaletteOptions::default()).assemble(&range)?;
//! assert_eq!(palette.len(), 72);
//!
//! let mut writer = GplWriter::new(Vec::new());
//! palette.write_to(&mut writer)?;
//! let gpl = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(gpl.starts_with("GIMP Palette\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Exporting files
//!
//! ```rust,no_run
//! use gradient_palette::{export_palette, presets, ExportOptions, Palette};
//!
//! # fn main() -> gradient_palette::Result<()> {
//! let palette = Palette::new("Extensive Palette", presets::extensive_palette());
//! let written = export_palette(&palette, &ExportOptions::default())?;
//! for path in written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`color`] - RGB/HSV types, conversion, per-axis deltas, parsing
//! - [`gradient`] - Step counts, color ranges and the grid stepper
//! - [`dedup`] - Order-preserving duplicate removal
//! - [`palette`] - Palette assembly and indexed entries
//! - [`writer`] - The writer interface and the three formats
//! - [`export`] - File output
//! - [`presets`] - Built-in fixed palettes

pub mod color;
pub mod dedup;
pub mod error;
pub mod export;
pub mod gradient;
pub mod palette;
pub mod presets;
pub mod writer;

pub use color::{delta, extract_min_max, hsv_to_rgb, rgb_to_hsv, ColorTriple, Extrema, Hsv, Rgb};
pub use dedup::deduplicate;
pub use error::{Axis, PaletteError, Result};
pub use export::{export_palette, export_to_file, write_palette, ExportOptions, OutputFormat};
pub use gradient::{
    create_gradient, ColorRange, GradientStepper, GridIndex, GridPoint, StepCounts,
    AXIS_TOLERANCE, MAX_GRID_POINTS,
};
pub use palette::{Palette, PaletteAssembler, PaletteEntry, PaletteOptions, DEFAULT_PALETTE_NAME};
pub use writer::{GplWriter, HtmlWriter, JsonWriter, PaletteHeader, PaletteWriter};

/// Current version of gradient-palette
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
