use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iconhue::models::RunConfig;
use iconhue::services::{AugmentPipeline, BatchDriver, Normalizer};

#[derive(Parser)]
#[command(name = "iconhue")]
#[command(about = "Attach dominant icon colors to a technology fingerprint database")]
struct Cli {
    /// YAML config file (falls back to CONFIG_FILE, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract colors for every icon and write the augmented database
    Run {
        /// Directory of icon files (non-recursive)
        #[arg(long)]
        icons_dir: Option<PathBuf>,

        /// Fingerprint database to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path for the augmented database
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale applied to SVG intrinsic size
        #[arg(long)]
        svg_scale: Option<f32>,
    },
    /// Print the dominant color of a single icon
    Color {
        /// Icon file (SVG and JPEG are converted to a sibling PNG first)
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iconhue=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = RunConfig::load(config_file.as_deref());

    match cli.command {
        Some(Commands::Color { file }) => run_color_command(&config, &file),
        Some(Commands::Run {
            icons_dir,
            input,
            output,
            svg_scale,
        }) => {
            let config = RunConfig {
                icons_dir: icons_dir.unwrap_or(config.icons_dir),
                input_database: input.unwrap_or(config.input_database),
                output_database: output.unwrap_or(config.output_database),
                svg_scale: svg_scale.unwrap_or(config.svg_scale),
                ..config
            };
            run_batch_command(config)
        }
        None => run_batch_command(config),
    }
}

/// Process the icons directory and save the augmented database
fn run_batch_command(config: RunConfig) -> anyhow::Result<()> {
    tracing::info!(
        icons_dir = %config.icons_dir.display(),
        input = %config.input_database.display(),
        output = %config.output_database.display(),
        "Starting run"
    );

    let report = AugmentPipeline::new(config).run()?;

    println!("Total: {}", report.total);
    println!("Total Extracted: {}", report.extracted);
    Ok(())
}

/// Print one file's dominant color
fn run_color_command(config: &RunConfig, file: &Path) -> anyhow::Result<()> {
    let driver = BatchDriver::new(Normalizer::from_config(config));
    match driver.extract_converted(file)? {
        Some(color) => {
            println!("{} ({} pixels)", color.to_hex(), color.count);
            Ok(())
        }
        None => anyhow::bail!("Could not convert {}", file.display()),
    }
}
