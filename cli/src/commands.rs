//! CLI Commands

use keepsake_core::{
    Backend, Game, GameState, KeepsakeError, KeepsakeResult, SettingsStore, StoreConfig,
};
use keepsake_state::SaveSystem;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Key the example session saves under
pub const DEFAULT_GAME_KEY: &str = "My Fav Game";

/// Command-line overrides applied on top of a configuration file
#[derive(Debug, Default, Clone)]
pub struct StoreOverrides {
    pub data_dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub memory: bool,
}

impl StoreOverrides {
    pub fn apply(&self, mut config: StoreConfig) -> KeepsakeResult<StoreConfig> {
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if self.memory {
            config.backend = Backend::Memory;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Options for a play session
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub key: String,
    pub monster_attacks: u32,
    pub point_bursts: u32,
    pub reset_corrupt: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            key: DEFAULT_GAME_KEY.to_string(),
            monster_attacks: 1,
            point_bursts: 1,
            reset_corrupt: false,
        }
    }
}

/// Where a play session's game came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrigin {
    /// No save existed
    Fresh,
    /// Continued from a stored memento
    Restored,
    /// The stored memento was unreadable and has been replaced
    ResetCorrupt,
}

impl fmt::Display for SessionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SessionOrigin::Fresh => "new game",
            SessionOrigin::Restored => "restored from save",
            SessionOrigin::ResetCorrupt => "unreadable save replaced",
        };
        f.write_str(text)
    }
}

/// Outcome of a play session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayReport {
    pub key: String,
    pub origin: SessionOrigin,
    pub started: GameState,
    pub saved: GameState,
    pub reloaded: GameState,
}

/// Restore or start a game, play it, save it and load it back
pub fn play<S: SettingsStore>(
    system: &SaveSystem<S>,
    options: &PlayOptions,
) -> KeepsakeResult<PlayReport> {
    let (mut game, origin) = match system.load_game(&options.key) {
        Ok(game) => (game, SessionOrigin::Restored),
        Err(KeepsakeError::NotFound(_)) => (Game::new(), SessionOrigin::Fresh),
        Err(err @ KeepsakeError::DecodingFailure(_)) => {
            if !options.reset_corrupt {
                return Err(err);
            }
            warn!(key = %options.key, error = %err, "discarding unreadable save");
            (Game::new(), SessionOrigin::ResetCorrupt)
        }
        Err(err) => return Err(err),
    };
    let started = *game.state();

    for _ in 0..options.monster_attacks {
        game.monsters_eat_player();
    }
    for _ in 0..options.point_bursts {
        game.rack_up_massive_points();
    }

    system.save_game(&game, &options.key)?;
    let saved = *game.state();

    game = system.load_game(&options.key)?;
    info!(key = %options.key, state = %game.state(), "game saved and reloaded");

    Ok(PlayReport {
        key: options.key.clone(),
        origin,
        started,
        saved,
        reloaded: *game.state(),
    })
}

/// Store an explicit state under `key`
pub fn save_state<S: SettingsStore>(
    system: &SaveSystem<S>,
    key: &str,
    state: GameState,
) -> KeepsakeResult<GameState> {
    system.save(&state, key)?;
    Ok(state)
}

/// Render a memento's raw bytes: text when it is UTF-8, hex otherwise
pub fn inspect<S: SettingsStore>(system: &SaveSystem<S>, key: &str) -> KeepsakeResult<String> {
    let bytes = system
        .store()
        .get(key)?
        .ok_or_else(|| KeepsakeError::NotFound(key.to_string()))?;
    Ok(render_bytes(&bytes))
}

pub fn render_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => format!("hex:{}", hex::encode(bytes)),
    }
}

/// Human-readable state table
pub fn format_state(key: &str, state: &GameState) -> String {
    format!(
        "Game:     {}\nAttempts: {}\nLevel:    {}\nScore:    {}",
        key, state.attempts_remaining, state.level, state.score
    )
}
