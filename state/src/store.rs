//! Caretaker: saves and restores game state by key
//!
//! `SaveSystem` turns a `GameState` into a memento and hands the bytes to an
//! injected settings store. It never keeps a reference to the state itself,
//! and it reports every failure to the caller rather than logging it.

use keepsake_core::{
    Backend, Game, GameState, KeepsakeError, KeepsakeResult, SettingsStore, StoreConfig,
};
use tracing::debug;

use crate::memento::{decode_state, encode_state};
use crate::memory::MemorySettingsStore;
use crate::persistent::SledSettingsStore;

/// Saves and loads game state mementos in a settings store
pub struct SaveSystem<S> {
    store: S,
}

impl<S: SettingsStore> SaveSystem<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Encode `state` and store it under `key`, replacing any earlier save
    pub fn save(&self, state: &GameState, key: &str) -> KeepsakeResult<()> {
        validate_key(key)?;
        let memento = encode_state(state)?;
        self.store.set(key, memento.as_bytes())?;
        debug!(key, bytes = memento.len(), "memento saved");
        Ok(())
    }

    /// Restore the state stored under `key`
    pub fn load(&self, key: &str) -> KeepsakeResult<GameState> {
        let bytes = self
            .store
            .get(key)?
            .ok_or_else(|| KeepsakeError::NotFound(key.to_string()))?;
        let state = decode_state(&bytes)?;
        debug!(key, "memento loaded");
        Ok(state)
    }

    /// Save a game's current state
    pub fn save_game(&self, game: &Game, key: &str) -> KeepsakeResult<()> {
        self.save(game.state(), key)
    }

    /// Rebuild a game from the state stored under `key`
    pub fn load_game(&self, key: &str) -> KeepsakeResult<Game> {
        self.load(key).map(Game::from_state)
    }

    pub fn exists(&self, key: &str) -> KeepsakeResult<bool> {
        self.store.exists(key)
    }

    /// Keys of all stored entries, sorted
    pub fn keys(&self) -> KeepsakeResult<Vec<String>> {
        self.store.keys()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

fn validate_key(key: &str) -> KeepsakeResult<()> {
    if key.is_empty() {
        return Err(KeepsakeError::InvalidKey("key must not be empty".into()));
    }
    Ok(())
}

/// Open the settings store selected by `config`
pub fn open_store(config: &StoreConfig) -> KeepsakeResult<Box<dyn SettingsStore>> {
    config.validate()?;
    match config.backend {
        Backend::Memory => Ok(Box::new(MemorySettingsStore::new())),
        Backend::Sled => Ok(Box::new(SledSettingsStore::from_config(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::create_memory_store;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Store whose every operation fails
    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn get(&self, _key: &str) -> KeepsakeResult<Option<Vec<u8>>> {
            Err(KeepsakeError::StorageError("disk unplugged".into()))
        }

        fn set(&self, _key: &str, _value: &[u8]) -> KeepsakeResult<()> {
            Err(KeepsakeError::StorageError("disk unplugged".into()))
        }

        fn delete(&self, _key: &str) -> KeepsakeResult<()> {
            Err(KeepsakeError::StorageError("disk unplugged".into()))
        }

        fn keys(&self) -> KeepsakeResult<Vec<String>> {
            Err(KeepsakeError::StorageError("disk unplugged".into()))
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let system = SaveSystem::new(MemorySettingsStore::new());
        let states = [
            GameState::default(),
            GameState::new(0, 99, 1_234_567),
            GameState::new(-3, 1, 0),
            GameState::new(i64::MAX, i64::MIN, -1),
        ];

        for (i, state) in states.iter().enumerate() {
            let key = format!("slot-{}", i);
            system.save(state, &key).unwrap();
            assert_eq!(&system.load(&key).unwrap(), state);
        }
    }

    #[test]
    fn test_save_overwrites_previous_memento() {
        let system = SaveSystem::new(MemorySettingsStore::new());
        system.save(&GameState::new(3, 1, 100), "slot").unwrap();
        system.save(&GameState::new(1, 4, 200), "slot").unwrap();

        assert_eq!(system.load("slot").unwrap(), GameState::new(1, 4, 200));
        assert_eq!(system.keys().unwrap(), vec!["slot"]);
    }

    #[test]
    fn test_load_missing_key_is_not_found() {
        let system = SaveSystem::new(MemorySettingsStore::new());
        let err = system.load("never saved").unwrap_err();
        assert!(matches!(err, KeepsakeError::NotFound(ref key) if key == "never saved"));
        assert!(!system.exists("never saved").unwrap());
    }

    #[test]
    fn test_favourite_game_session() {
        let system = SaveSystem::new(MemorySettingsStore::new());
        let mut game = Game::new();
        assert_eq!(game.state(), &GameState::new(3, 1, 0));

        game.monsters_eat_player();
        game.rack_up_massive_points();
        system.save_game(&game, "My Fav Game").unwrap();

        let restored = system.load_game("My Fav Game").unwrap();
        assert_eq!(restored.state(), &GameState::new(2, 1, 9000));
        assert_eq!(restored, game);
    }

    #[test]
    fn test_corrupt_payload_is_decoding_failure() {
        let system = SaveSystem::new(MemorySettingsStore::new());
        system.store().set("slot", b"\x00garbage{").unwrap();

        let err = system.load("slot").unwrap_err();
        assert!(matches!(err, KeepsakeError::DecodingFailure(_)));
    }

    #[test]
    fn test_empty_key_rejected_before_store() {
        let system = SaveSystem::new(MemorySettingsStore::new());
        let err = system.save(&GameState::default(), "").unwrap_err();
        assert!(matches!(err, KeepsakeError::InvalidKey(_)));
        assert!(system.store().is_empty());
    }

    #[test]
    fn test_store_errors_propagate() {
        let system = SaveSystem::new(BrokenStore);
        assert!(matches!(
            system.save(&GameState::default(), "slot"),
            Err(KeepsakeError::StorageError(_))
        ));
        assert!(matches!(system.load("slot"), Err(KeepsakeError::StorageError(_))));
        assert!(matches!(system.keys(), Err(KeepsakeError::StorageError(_))));
    }

    #[test]
    fn test_saved_state_is_a_copy() {
        let system = SaveSystem::new(MemorySettingsStore::new());
        let mut game = Game::new();
        system.save_game(&game, "slot").unwrap();

        game.rack_up_massive_points();
        assert_eq!(system.load("slot").unwrap(), GameState::default());
    }

    #[test]
    fn test_shared_store_handle() {
        let store = create_memory_store();
        let system = SaveSystem::new(Arc::clone(&store));
        system.save(&GameState::new(1, 2, 3), "slot").unwrap();

        let raw = store.get("slot").unwrap().unwrap();
        assert_eq!(decode_state(&raw).unwrap(), GameState::new(1, 2, 3));
    }

    #[test]
    fn test_sled_saves_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig {
            data_dir: tmp.path().to_path_buf(),
            ..StoreConfig::default()
        };

        {
            let system = SaveSystem::new(open_store(&config).unwrap());
            system.save(&GameState::new(2, 1, 9000), "My Fav Game").unwrap();
        }

        let system = SaveSystem::new(open_store(&config).unwrap());
        assert_eq!(system.load("My Fav Game").unwrap(), GameState::new(2, 1, 9000));
    }

    #[test]
    fn test_open_memory_store_from_config() {
        let system = SaveSystem::new(open_store(&StoreConfig::memory()).unwrap());
        system.save(&GameState::default(), "slot").unwrap();
        assert!(system.exists("slot").unwrap());
        assert!(system.into_inner().exists("slot").unwrap());
    }
}
