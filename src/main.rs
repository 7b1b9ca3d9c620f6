//! # Burrow Main Entry Point
//!
//! Generates a world from a seed, or plays an input script against one, and
//! prints the resulting map and status line.

use burrow::{
    play_script, BurrowResult, GameSession, GenerationConfig, Script, TextRenderer,
    DEFAULT_SAVE_FILE,
};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Command line arguments for Burrow.
#[derive(Parser, Debug)]
#[command(name = "burrow")]
#[command(about = "Seeded room-and-corridor dungeons with a coin hunt on top")]
#[command(version)]
struct Args {
    /// World seed; a random one is used when neither --seed nor --input is given
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "input")]
    seed: Option<i64>,

    /// Input script, e.g. N42SWWDD:Q (new game, four moves, save and quit)
    #[arg(short, long)]
    input: Option<String>,

    /// JSON file overriding generation settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save file read by L scripts and written by :Q
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also print the placed rooms in placement order
    #[arg(long)]
    rooms: bool,
}

fn main() -> BurrowResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    log::info!("Starting Burrow v{}", burrow::VERSION);

    let config = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::default(),
    };

    let session = match &args.input {
        Some(text) => {
            let script = Script::parse(text)?;
            play_script(&script, &config, &args.save_file)?
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            GameSession::new(seed, &config)?
        }
    };

    print!("{}", TextRenderer::new(args.rooms).render_frame(&session));
    Ok(())
}

/// Sets up `env_logger`; `RUST_LOG` takes precedence over `--log-level`.
fn initialize_logging(log_level: &str) {
    let level = log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
