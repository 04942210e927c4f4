use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use sprite_snake::game::GameConfig;
use sprite_snake::modes::{HeadlessMode, HumanMode};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

#[derive(Parser)]
#[command(name = "sprite-snake")]
#[command(version, about = "Fixed-timestep grid snake")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// JSON game configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u8>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u8>,

    /// Frames between movement ticks
    #[arg(long)]
    frame_delay: Option<u16>,

    /// Fixed RNG seed instead of platform entropy
    #[arg(long)]
    seed: Option<u16>,

    /// Display frames per second in play mode
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Frames to simulate in headless mode
    #[arg(long, default_value = "600")]
    frames: u64,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level
    #[arg(long, default_value = "info")]
    log_level: Level,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play in the terminal
    Play,
    /// Simulate without a display and print the final state as JSON
    Headless,
}

fn setup_logging(cli: &Cli) -> Result<()> {
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_max_level(cli.log_level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // the terminal owns stderr while playing
        None if cli.mode == Mode::Play => {}
        None => {
            tracing_subscriber::fmt()
                .with_max_level(cli.log_level)
                .compact()
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if let Some(frame_delay) = cli.frame_delay {
        config.frame_delay = frame_delay;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {}", e))?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let config = load_config(&cli)?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let mut human_mode = HumanMode::new(config, cli.fps);
            human_mode.run()?;
        }
        Mode::Headless => {
            let state = HeadlessMode::new(config, cli.frames).run()?;
            let json =
                serde_json::to_string_pretty(&state).context("Failed to serialize game state")?;
            println!("{}", json);
        }
    }

    Ok(())
}
