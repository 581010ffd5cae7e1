mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::GradientConfig;
use gradient_palette::{
    export_palette, presets, ColorRange, ExportOptions, Hsv, OutputFormat, Palette,
    PaletteAssembler, PaletteOptions, Rgb, StepCounts, DEFAULT_PALETTE_NAME,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gradpal",
    about = "Generate GIMP, HTML and Crocotile3D palettes from HSV gradients",
    version,
    author
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Directory the palette files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Formats to write (gpl, html, json); all three if omitted
    #[arg(short, long = "format")]
    formats: Vec<OutputFormat>,

    /// Remove repeated colors, keeping the first occurrence
    #[arg(short, long)]
    dedup: bool,

    /// Palette name written into file headers
    #[arg(short, long)]
    name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a palette by stepping between two HSV colors
    Gradient {
        /// Start color as "hue,saturation,value"
        #[arg(short, long)]
        start: Option<Hsv>,

        /// End color as "hue,saturation,value"
        #[arg(short, long)]
        end: Option<Hsv>,

        /// Step counts as "hue,saturation,value"
        #[arg(long, value_parser = parse_steps)]
        steps: Option<StepCounts>,

        /// JSON file with default settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write the built-in extensive palette
    Extensive {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a color in both RGB and HSV
    Convert {
        /// Color as "#rrggbb", "r,g,b", or with --hsv "h,s,v"
        color: String,

        /// Read the color as HSV instead of RGB
        #[arg(long)]
        hsv: bool,
    },
}

fn parse_steps(text: &str) -> std::result::Result<StepCounts, String> {
    let counts: Vec<u32> = text
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("invalid step count: {e}"))?;
    match counts.as_slice() {
        [h, s, v] => Ok(StepCounts::new(*h, *s, *v)),
        _ => Err(format!("expected three step counts, got '{text}'")),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gradient_palette=debug,gradpal=debug"
    } else {
        "gradient_palette=info,gradpal=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn export_options(
    output: &OutputArgs,
    config_formats: Option<Vec<OutputFormat>>,
) -> ExportOptions {
    let formats = if !output.formats.is_empty() {
        output.formats.clone()
    } else {
        config_formats.unwrap_or_else(|| OutputFormat::ALL.to_vec())
    };
    ExportOptions {
        output_dir: output.output_dir.clone(),
        formats,
    }
}

fn write_palette(palette: &Palette, options: &ExportOptions) -> Result<()> {
    let written = export_palette(palette, options).context("Failed to write palette files")?;

    println!("GIMP Palette");
    println!("Name: {}", palette.name());
    println!("Colors: {}", palette.len());
    for path in written {
        println!("✓ Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Gradient {
            start,
            end,
            steps,
            config,
            output,
        } => {
            let file = match &config {
                Some(path) => GradientConfig::load(path)?,
                None => GradientConfig::default(),
            };
            debug!("Loaded configuration: {:?}", file);

            let start = start.or(file.start).unwrap_or(Hsv::new(40.0, 0.2, 0.3));
            let end = end.or(file.end).unwrap_or(Hsv::new(300.0, 0.7, 0.8));
            let steps = steps.or(file.steps).unwrap_or_default();

            let range = ColorRange::new(start, end, steps).context("Invalid gradient range")?;
            let options = PaletteOptions {
                name: output
                    .name
                    .clone()
                    .or(file.name)
                    .unwrap_or_else(|| DEFAULT_PALETTE_NAME.to_string()),
                deduplicate: output.dedup || file.deduplicate.unwrap_or(false),
            };

            let palette = PaletteAssembler::new(options)
                .assemble(&range)
                .context("Failed to generate gradient")?;
            write_palette(&palette, &export_options(&output, file.formats))?;
        }

        Commands::Extensive { output } => {
            let options = PaletteOptions {
                name: output
                    .name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PALETTE_NAME.to_string()),
                deduplicate: output.dedup,
            };
            let palette =
                PaletteAssembler::new(options).assemble_colors(presets::extensive_palette());
            write_palette(&palette, &export_options(&output, None))?;
        }

        Commands::Convert { color, hsv } => {
            let (rgb, hsv) = if hsv {
                let hsv: Hsv = color.parse().context("Invalid HSV color")?;
                (hsv.to_rgb(), hsv)
            } else {
                let rgb: Rgb = color.parse().context("Invalid RGB color")?;
                (rgb, rgb.to_hsv())
            };
            println!("RGB: {} {} {} ({})", rgb.r, rgb.g, rgb.b, rgb.to_hex());
            println!(
                "HSV: {:.2} {:.4} {:.4}",
                hsv.hue, hsv.saturation, hsv.value
            );
        }
    }

    Ok(())
}
