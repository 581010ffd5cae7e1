//! Integration tests for the gradpal CLI
//!
//! Runs the built binary against temporary directories and checks the files
//! it writes and the summary it prints.

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary path
fn get_cli_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    if path.ends_with("deps") {
        path.pop(); // Remove "deps" directory
    }
    path.push("gradpal");
    #[cfg(windows)]
    path.set_extension("exe");
    path
}

fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

fn run_cli_command(args: &[&str]) -> Result<std::process::Output> {
    let output = Command::new(get_cli_path()).args(args).output()?;
    Ok(output)
}

/// Color lines of a GIMP palette, without the four header lines
fn gpl_color_lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).expect("Failed to read GPL file");
    assert!(content.starts_with("GIMP Palette\n"));
    content.lines().skip(4).map(str::to_string).collect()
}

#[test]
fn test_cli_gradient_defaults() {
    let temp_dir = setup_temp_dir();
    let dir = temp_dir.path().to_str().unwrap();

    let output = run_cli_command(&["gradient", "-o", dir]).expect("CLI command should run");
    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Name: Extensive Palette"));
    assert!(stdout.contains("Colors: 72"));

    let lines = gpl_color_lines(&temp_dir.path().join("color_palette.gpl"));
    assert_eq!(lines.len(), 72);
    assert_eq!(lines[0], "77 71 61 Index 0");
    assert_eq!(lines[71], "204 61 204 Index 71");

    assert!(temp_dir.path().join("preview.html").exists());
    assert!(temp_dir.path().join("color_palette.json.c3dpal").exists());
}

#[test]
fn test_cli_gradient_custom_range() {
    let temp_dir = setup_temp_dir();
    let dir = temp_dir.path().to_str().unwrap();

    let output = run_cli_command(&[
        "gradient", "-s", "0,1,1", "-e", "120,1,1", "--steps", "2,1,1", "-f", "gpl", "-n",
        "Primaries", "-o", dir,
    ])
    .expect("CLI command should run");
    assert!(output.status.success(), "Command should succeed");

    let content = fs::read_to_string(temp_dir.path().join("color_palette.gpl")).unwrap();
    assert!(content.contains("Name: Primaries"));
    let lines = gpl_color_lines(&temp_dir.path().join("color_palette.gpl"));
    assert_eq!(lines, vec!["255 0 0 Index 0", "0 255 0 Index 1"]);

    assert!(!temp_dir.path().join("preview.html").exists());
    assert!(!temp_dir.path().join("color_palette.json.c3dpal").exists());
}

#[test]
fn test_cli_gradient_invalid_steps() {
    let temp_dir = setup_temp_dir();
    let dir = temp_dir.path().to_str().unwrap();

    let output =
        run_cli_command(&["gradient", "--steps", "1,3,4", "-o", dir]).expect("CLI should run");
    assert!(!output.status.success(), "Command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid step count"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("color_palette.gpl").exists());
}

#[test]
fn test_cli_gradient_oversized_grid() {
    let temp_dir = setup_temp_dir();
    let dir = temp_dir.path().to_str().unwrap();

    let output = run_cli_command(&["gradient", "--steps", "3000000,3000000,3000000", "-o", dir])
        .expect("CLI should run");
    assert!(!output.status.success(), "Command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input out of range"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("color_palette.gpl").exists());
}

#[test]
fn test_cli_gradient_out_of_range_color() {
    let output = run_cli_command(&["gradient", "-s", "40,1.5,0.3"]).expect("CLI should run");
    assert!(!output.status.success(), "Command should fail");
}

#[test]
fn test_cli_gradient_config_file() {
    let temp_dir = setup_temp_dir();
    let config_path = temp_dir.path().join("palette.json");
    fs::write(
        &config_path,
        r#"{
            "name": "From Config",
            "start": { "hue": 0.0, "saturation": 0.0, "value": 0.0 },
            "end": { "hue": 0.0, "saturation": 0.0, "value": 1.0 },
            "steps": { "hue": 1, "saturation": 1, "value": 3 },
            "formats": ["json"]
        }"#,
    )
    .unwrap();

    let output = run_cli_command(&[
        "gradient",
        "-c",
        config_path.to_str().unwrap(),
        "-o",
        temp_dir.path().to_str().unwrap(),
    ])
    .expect("CLI should run");
    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Name: From Config"));

    let json = fs::read_to_string(temp_dir.path().join("color_palette.json.c3dpal")).unwrap();
    assert_eq!(
        json,
        r#"[{"r":0,"g":0,"b":0},{"r":128,"g":128,"b":128},{"r":255,"g":255,"b":255}]"#
    );
    assert!(!temp_dir.path().join("color_palette.gpl").exists());
}

#[test]
fn test_cli_gradient_missing_config_file() {
    let temp_dir = setup_temp_dir();
    let missing = temp_dir.path().join("nope.json");

    let output = run_cli_command(&["gradient", "-c", missing.to_str().unwrap()])
        .expect("CLI should run");
    assert!(!output.status.success(), "Command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_cli_gradient_dedup_flag() {
    let temp_dir = setup_temp_dir();
    let dir = temp_dir.path().to_str().unwrap();

    let output = run_cli_command(&[
        "gradient", "-s", "0,0,0", "-e", "120,0,0", "--steps", "3,2,2", "-d", "-f", "gpl", "-o",
        dir,
    ])
    .expect("CLI should run");
    assert!(output.status.success(), "Command should succeed");

    // Every point is black once saturation and value are zero
    let lines = gpl_color_lines(&temp_dir.path().join("color_palette.gpl"));
    assert_eq!(lines, vec!["0 0 0 Index 0"]);
}

#[test]
fn test_cli_extensive_command() {
    let temp_dir = setup_temp_dir();
    let dir = temp_dir.path().to_str().unwrap();

    let output = run_cli_command(&["extensive", "-o", dir]).expect("CLI should run");
    assert!(output.status.success(), "Command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Colors: 891"));

    let lines = gpl_color_lines(&temp_dir.path().join("color_palette.gpl"));
    assert_eq!(lines.len(), 891);
    assert_eq!(lines[0], "0 0 0 Index 0");

    let html = fs::read_to_string(temp_dir.path().join("preview.html")).unwrap();
    assert!(html.contains("Colors: 891"));
}

#[test]
fn test_cli_convert_rgb() {
    let output = run_cli_command(&["convert", "#ff0000"]).expect("CLI should run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RGB: 255 0 0 (#ff0000)"), "stdout: {stdout}");
    assert!(stdout.contains("HSV: 0.00 1.0000 1.0000"), "stdout: {stdout}");
}

#[test]
fn test_cli_convert_hsv() {
    let output = run_cli_command(&["convert", "--hsv", "40,0.2,0.3"]).expect("CLI should run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RGB: 77 71 61 (#4d473d)"), "stdout: {stdout}");
}

#[test]
fn test_cli_convert_invalid_color() {
    let output = run_cli_command(&["convert", "not-a-color"]).expect("CLI should run");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid RGB color"));
}

#[test]
fn test_cli_unwritable_output_dir() {
    let temp_dir = setup_temp_dir();
    let missing = temp_dir.path().join("missing");

    let output = run_cli_command(&["extensive", "-o", missing.to_str().unwrap()])
        .expect("CLI should run");
    assert!(!output.status.success(), "Command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write palette files"));
}

#[test]
fn test_cli_help_lists_commands() {
    let output = run_cli_command(&["--help"]).expect("CLI should run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["gradient", "extensive", "convert"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}
