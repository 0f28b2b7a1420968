//! Command-line interface implementation

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::density::{parse_density, Density};
use crate::frame::Frame;
use crate::output::{generate_output_path, save_png};
use crate::size::Size;
use crate::table::{entries, resolve};
use crate::transform::{AllocatingPool, BadgeSpriteTransform};

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Badgesprite - cut badge icons out of a pre-baked sprite sheet
#[derive(Parser)]
#[command(name = "bdg")]
#[command(about = "Badgesprite - cut badge icons out of a pre-baked sprite sheet")]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crop a badge from a sprite sheet PNG
    Crop {
        /// Sprite sheet image for the chosen density
        sheet: PathBuf,

        /// Output file or directory (ends with /).
        /// If omitted: {sheet}_{size}_{density}.png
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Badge size: small, medium, large, xlarge, badge_60 or an ordinal
        #[arg(long)]
        size: Option<Size>,

        /// Density tag: ldpi, mdpi, hdpi, xhdpi, xxhdpi or xxxhdpi
        #[arg(long)]
        density: Option<String>,

        /// Use the dark theme frame
        #[arg(long)]
        dark: bool,

        /// Output width (default: frame width)
        #[arg(long)]
        width: Option<u32>,

        /// Output height (default: frame height)
        #[arg(long)]
        height: Option<u32>,

        /// Path to badge.toml (default: discovered from the working directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the sprite sheet frame for a badge as JSON
    Frame {
        #[arg(long, default_value = "large")]
        size: Size,

        #[arg(long)]
        density: Density,

        #[arg(long)]
        dark: bool,
    },

    /// Print the cache identity and disk cache key for a badge
    Id {
        #[arg(long, default_value = "large")]
        size: Size,

        #[arg(long)]
        density: String,

        #[arg(long)]
        dark: bool,
    },

    /// Print the whole frame table as JSON
    Table,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Crop {
            sheet,
            output,
            size,
            density,
            dark,
            width,
            height,
            config,
        } => {
            let overrides = CliOverrides {
                size,
                density,
                dark: dark.then_some(true),
                width,
                height,
            };
            run_crop(&sheet, output.as_deref(), config.as_deref(), &overrides)
        }
        Commands::Frame {
            size,
            density,
            dark,
        } => print_json(&resolve(size, density, dark)),
        Commands::Id {
            size,
            density,
            dark,
        } => {
            let transform = BadgeSpriteTransform::new(size, density, dark);
            println!("{}", transform.id());
            println!("{}", transform.disk_cache_key());
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Table => run_table(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Execute the crop command
fn run_crop(
    sheet: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    let mut config = match load_config(config_path) {
        Ok(c) => c.badge,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    merge_cli_overrides(&mut config, overrides);

    let density = match parse_density(&config.density) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let source = match image::open(sheet) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            eprintln!("Error: Cannot open sprite sheet '{}': {}", sheet.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let frame = resolve(config.size, density, config.dark);
    let out_width = config.width.unwrap_or(frame.width);
    let out_height = config.height.unwrap_or(frame.height);

    let transform = BadgeSpriteTransform::new(config.size, config.density, config.dark);
    let badge = match transform.transform(&mut AllocatingPool, &source, out_width, out_height) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let out_path = generate_output_path(sheet, &transform, output);
    if let Err(e) = save_png(&badge, &out_path) {
        eprintln!("Error: Failed to save '{}': {}", out_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", out_path.display());
    ExitCode::from(EXIT_SUCCESS)
}

#[derive(Serialize)]
struct TableEntry {
    size: &'static str,
    ordinal: i64,
    density: Density,
    light: Frame,
    dark: Frame,
}

fn run_table() -> ExitCode {
    let rows: Vec<TableEntry> = entries()
        .map(|(size, density, set)| TableEntry {
            size: size.code(),
            ordinal: size.ordinal(),
            density,
            light: set.light,
            dark: set.dark,
        })
        .collect();
    print_json(&rows)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
