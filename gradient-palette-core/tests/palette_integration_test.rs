//! Integration tests for palette generation and export
//!
//! Runs ranges through the assembler and writes the results to temporary
//! directories in every supported format.

use gradient_palette::{
    export_palette, export_to_file, hsv_to_rgb, presets, ColorRange, ExportOptions, Hsv,
    OutputFormat, Palette, PaletteAssembler, PaletteError, PaletteOptions, Rgb, StepCounts,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn example_range() -> ColorRange {
    ColorRange::new(
        Hsv::new(40.0, 0.2, 0.3),
        Hsv::new(300.0, 0.7, 0.8),
        StepCounts::new(6, 3, 4),
    )
    .expect("example range should be valid")
}

fn export_all(palette: &Palette) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let options = ExportOptions {
        output_dir: dir.path().to_path_buf(),
        formats: OutputFormat::ALL.to_vec(),
    };
    export_palette(palette, &options).expect("export should succeed");
    dir
}

#[test]
fn test_end_to_end_gradient_export() {
    let palette = PaletteAssembler::new(PaletteOptions::default())
        .assemble(&example_range())
        .unwrap();
    assert_eq!(palette.len(), 72);

    let dir = export_all(&palette);

    let gpl = fs::read_to_string(dir.path().join("color_palette.gpl")).unwrap();
    let lines: Vec<&str> = gpl.lines().collect();
    assert_eq!(lines.len(), 4 + 72);
    assert_eq!(lines[0], "GIMP Palette");
    assert_eq!(lines[1], "Name: Extensive Palette");
    assert_eq!(lines[4], "77 71 61 Index 0");

    let last = hsv_to_rgb(Hsv::new(300.0, 0.7, 0.8));
    assert_eq!(
        lines[75],
        format!("{} {} {} Index 71", last.r, last.g, last.b)
    );

    let json = fs::read_to_string(dir.path().join("color_palette.json.c3dpal")).unwrap();
    let parsed: Vec<Rgb> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, palette.colors());

    let html = fs::read_to_string(dir.path().join("preview.html")).unwrap();
    assert!(html.contains("Colors: 72"));
    assert!(html.contains("Gradient between"));
    assert_eq!(html.matches("class=\"swatch\"").count(), 72 + 8);
}

#[test]
fn test_gpl_indices_match_positions_after_dedup() {
    let range = ColorRange::new(
        Hsv::new(0.0, 0.0, 0.0),
        Hsv::new(120.0, 1.0, 1.0),
        StepCounts::new(3, 3, 3),
    )
    .unwrap();
    let options = PaletteOptions {
        name: "Dedup".to_string(),
        deduplicate: true,
    };
    let palette = PaletteAssembler::new(options).assemble(&range).unwrap();
    assert!(palette.len() < 27, "black and grays repeat across hues");

    let dir = export_all(&palette);
    let gpl = fs::read_to_string(dir.path().join("color_palette.gpl")).unwrap();
    for (position, line) in gpl.lines().skip(4).enumerate() {
        assert!(
            line.ends_with(&format!(" Index {position}")),
            "line {line:?} should carry index {position}"
        );
    }
}

#[test]
fn test_extensive_preset_export() {
    let palette = Palette::new("Extensive Palette", presets::extensive_palette());
    let dir = export_all(&palette);

    let gpl = fs::read_to_string(dir.path().join("color_palette.gpl")).unwrap();
    assert_eq!(gpl.lines().count(), 4 + 891);

    let html = fs::read_to_string(dir.path().join("preview.html")).unwrap();
    assert!(!html.contains("Gradient between"));
    assert_eq!(html.matches("<div class=\"row\">").count(), 90);
}

#[test]
fn test_writer_unavailable_when_target_is_directory() {
    let dir = TempDir::new().unwrap();
    let palette = Palette::new("blocked", vec![Rgb::white()]);

    let err = export_to_file(&palette, OutputFormat::Json, dir.path()).unwrap_err();
    assert!(matches!(err, PaletteError::WriterUnavailable { .. }));
}

#[test]
fn test_export_stops_at_first_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let palette = Palette::new("stop", vec![Rgb::white()]);
    let options = ExportOptions {
        output_dir: missing.clone(),
        formats: vec![OutputFormat::Gpl, OutputFormat::Json],
    };

    let err = export_palette(&palette, &options).unwrap_err();
    assert!(matches!(err, PaletteError::WriterUnavailable { .. }));
    assert!(!missing.exists());
}
