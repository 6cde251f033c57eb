//! Keepsake State Management
//! 
//! Saves and restores game state as mementos in a key-value settings store.
//! Backends: an in-memory map and an on-disk sled database.

pub mod memento;
pub mod store;
pub mod memory;
pub mod persistent;

pub use memento::*;
pub use store::*;
pub use memory::*;
pub use persistent::*;
