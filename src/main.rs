//! # Starfield Main Entry Point
//!
//! Parses the command line, sets up logging and the macroquad window, then
//! runs the frame loop until the window is closed or Escape is pressed.

use clap::{Parser, ValueEnum};
use log::{debug, error, info, LevelFilter};
use macroquad::prelude::*;
use starfield::{
    create_rng, FrameLoop, MacroquadSurface, StarField, StarfieldConfig, StarfieldResult,
};

/// Which of the built-in configurations to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// 600k stars, deep field, 60 fps
    Dense,
    /// 10k stars, shallow field, 144 fps
    Compact,
}

/// Command line arguments for the starfield.
#[derive(Parser, Debug)]
#[command(name = "starfield")]
#[command(about = "A warp-speed starfield animation")]
#[command(version)]
struct Args {
    /// Random seed for star placement (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Built-in configuration to use
    #[arg(long, value_enum, default_value = "dense")]
    preset: Preset,

    /// Run in a window instead of fullscreen
    #[arg(long)]
    windowed: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn config(&self) -> StarfieldConfig {
        match self.preset {
            Preset::Dense => StarfieldConfig::new(),
            Preset::Compact => StarfieldConfig::compact(),
        }
    }
}

fn window_conf() -> Conf {
    let args = Args::parse();
    let config = args.config();
    Conf {
        window_title: "Starfield".to_string(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        fullscreen: !args.windowed,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> StarfieldResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Starfield v{}", starfield::VERSION);

    if let Err(e) = run(&args).await {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

/// Initializes env_logger at the requested level; `RUST_LOG` still overrides
/// per-module filters.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

/// Builds the star field and display, then runs the frame loop.
async fn run(args: &Args) -> StarfieldResult<()> {
    let config = args.config();
    config.validate()?;
    info!("Using {:?} preset", args.preset);
    debug!("Configuration: {}", serde_json::to_string(&config)?);

    let seed = args.seed.unwrap_or_else(::rand::random);
    info!("Generating {} stars with seed: {}", config.star_count, seed);
    let mut rng = create_rng(seed);
    let mut field = StarField::initialize(&config, &mut rng)?;

    let mut surface = MacroquadSurface::new(&config).await?;

    let report = FrameLoop::new(&config).run(&mut field, &mut surface).await?;
    info!("Exiting after {} frames", report.frames);
    Ok(())
}
