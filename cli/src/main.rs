//! Keepsake CLI - save and restore game mementos

use clap::{Parser, Subcommand};
use keepsake_cli::{
    format_state, init_logging, inspect, play, save_state, PlayOptions, StoreOverrides,
    DEFAULT_GAME_KEY,
};
use keepsake_core::{GameState, StoreConfig};
use keepsake_state::{open_store, SaveSystem};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "keepsake")]
#[command(about = "Keepsake - game state mementos in a settings store")]
#[command(version)]
struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory for the on-disk store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Settings namespace
    #[arg(short, long)]
    namespace: Option<String>,

    /// Use an in-memory store (nothing survives the process)
    #[arg(long)]
    memory: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the example session: restore, lose a life, score, save, reload
    Play {
        /// Save slot key
        #[arg(short, long, default_value = DEFAULT_GAME_KEY)]
        key: String,

        /// Times the monsters eat the player
        #[arg(long, default_value = "1")]
        monster_attacks: u32,

        /// Bursts of massive points
        #[arg(long, default_value = "1")]
        point_bursts: u32,

        /// Start over if the stored memento is unreadable
        #[arg(long)]
        reset_corrupt: bool,
    },

    /// Save an explicit game state
    Save {
        /// Save slot key
        #[arg(short, long)]
        key: String,

        #[arg(long, default_value = "3", allow_negative_numbers = true)]
        attempts: i64,

        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        level: i64,

        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        score: i64,
    },

    /// Load and print a saved game state
    Show {
        /// Save slot key
        #[arg(short, long)]
        key: String,
    },

    /// List saved keys
    List,

    /// Print the raw memento stored under a key
    Inspect {
        /// Save slot key
        #[arg(short, long)]
        key: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::default(),
    };
    let overrides = StoreOverrides {
        data_dir: cli.data_dir.clone(),
        namespace: cli.namespace.clone(),
        memory: cli.memory,
    };
    let config = overrides.apply(base)?;

    init_logging(&config.log_level)?;
    debug!(backend = config.backend.as_str(), namespace = %config.namespace, "opening store");

    let system = SaveSystem::new(open_store(&config)?);

    match cli.command {
        Commands::Play { key, monster_attacks, point_bursts, reset_corrupt } => {
            let options = PlayOptions { key, monster_attacks, point_bursts, reset_corrupt };
            let report = play(&system, &options)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Session:  {}", report.origin);
                println!("Started:  {}", report.started);
                println!("Saved:    {}", report.saved);
                println!("Reloaded: {}", report.reloaded);
            }
        }

        Commands::Save { key, attempts, level, score } => {
            let state = save_state(&system, &key, GameState::new(attempts, level, score))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("✅ Saved '{}'", key);
                println!("{}", format_state(&key, &state));
            }
        }

        Commands::Show { key } => {
            let state = system.load(&key)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("{}", format_state(&key, &state));
            }
        }

        Commands::List => {
            let keys = system.keys()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&keys)?);
            } else if keys.is_empty() {
                println!("No saved games.");
            } else {
                for key in keys {
                    println!("{}", key);
                }
            }
        }

        Commands::Inspect { key } => {
            println!("{}", inspect(&system, &key)?);
        }
    }

    Ok(())
}
