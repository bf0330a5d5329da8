//! SmileTrack CLI: leaderboard and smiling-shot scoring from the terminal.
//!
//! Usage:
//!   smiletrack submit --name <NAME> --smiles <N>   Save today's score
//!   smiletrack leaderboard                         Show current rankings
//!   smiletrack score <VIDEO> [OPTIONS]             Count smiling shots in a video
//!   smiletrack config                              Show effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use smiletrack_common::config::AppConfig;
use smiletrack_scorer::FaceRegion;

mod commands;

#[derive(Parser)]
#[command(
    name = "smiletrack",
    about = "Track how often you smile through your practice shots",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/smiletrack/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a score for today
    Submit {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// How many smiles you got out of 30
        #[arg(short, long, default_value = "15", value_parser = clap::value_parser!(u32).range(0..=30))]
        smiles: u32,

        /// Leaderboard directory (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show the ranked leaderboard
    Leaderboard {
        /// Leaderboard directory (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Count smiling shots in a raw RGB24 video
    Score {
        /// Path to packed RGB24 frames (e.g. `ffmpeg -f rawvideo -pix_fmt rgb24`)
        video: PathBuf,

        /// Frame width in pixels
        #[arg(long)]
        width: u32,

        /// Frame height in pixels
        #[arg(long)]
        height: u32,

        /// Source frame rate
        #[arg(long, default_value = "30")]
        fps: f64,

        /// Emotion classifier to use
        #[arg(long, value_enum, default_value = "random")]
        classifier: ClassifierKind,

        /// Per-frame label track for the replay classifier (JSONL)
        #[arg(long, required_if_eq("classifier", "replay"))]
        labels: Option<PathBuf>,

        /// Seed for the random classifier
        #[arg(long)]
        seed: Option<u64>,

        /// Face region to crop before classifying: x,y,width,height
        #[arg(long)]
        face: Option<FaceRegion>,

        /// Write the shot report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Submit { .. } => "submit",
            Commands::Leaderboard { .. } => "leaderboard",
            Commands::Score { .. } => "score",
            Commands::Config => "config",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierKind {
    /// Coin flip per frame
    Random,
    /// Replay precomputed labels
    Replay,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    smiletrack_common::logging::init_logging(&config.logging);
    tracing::info!(
        command = cli.command.name(),
        leaderboard_dir = %config.leaderboard_dir.display(),
        "smiletrack starting"
    );

    match cli.command {
        Commands::Submit { name, smiles, dir } => {
            commands::submit::run(dir.unwrap_or(config.leaderboard_dir), name, smiles)
        }
        Commands::Leaderboard { dir } => {
            commands::leaderboard::run(dir.unwrap_or(config.leaderboard_dir))
        }
        Commands::Score {
            video,
            width,
            height,
            fps,
            classifier,
            labels,
            seed,
            face,
            report,
        } => commands::score::run(
            &config,
            commands::score::ScoreArgs {
                video,
                width,
                height,
                fps,
                classifier,
                labels,
                seed,
                face,
                report,
            },
        ),
        Commands::Config => commands::config::run(&config, cli.config),
    }
}
