//! Core types for Keepsake
//!
//! The originator (`Game`), the state it owns, and the opaque memento a
//! caretaker stores on its behalf.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attempts a new game starts with
pub const DEFAULT_ATTEMPTS: i64 = 3;

/// Level a new game starts on
pub const DEFAULT_LEVEL: i64 = 1;

/// Points awarded by a single burst of massive points
pub const MASSIVE_POINTS: i64 = 9000;

/// Game state captured in a memento.
///
/// Every field falls back to its default when absent from an encoded
/// memento, so older saves lacking newer fields still decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    /// Lives left; not floored at zero
    pub attempts_remaining: i64,
    pub level: i64,
    pub score: i64,
}

impl GameState {
    pub fn new(attempts_remaining: i64, level: i64, score: i64) -> Self {
        Self {
            attempts_remaining,
            level,
            score,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            attempts_remaining: DEFAULT_ATTEMPTS,
            level: DEFAULT_LEVEL,
            score: 0,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attempts={} level={} score={}",
            self.attempts_remaining, self.level, self.score
        )
    }
}

/// The originator: a game that mutates its own state during play
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Start a new game at the default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a game from a restored state
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the current state with a restored one
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
    }

    /// Score saturates at `i64::MAX`
    pub fn rack_up_massive_points(&mut self) {
        self.state.score = self.state.score.saturating_add(MASSIVE_POINTS);
    }

    /// No floor at zero; saturates at `i64::MIN`
    pub fn monsters_eat_player(&mut self) {
        self.state.attempts_remaining = self.state.attempts_remaining.saturating_sub(1);
    }
}

/// Opaque serialized snapshot of a `GameState`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Memento(Vec<u8>);

impl Memento {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Memento(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Memento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Memento({} bytes)", self.0.len())
    }
}
