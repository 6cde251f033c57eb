//! Keepsake Core Library
//! 
//! Core types, traits, and abstractions for Keepsake game-state mementos.
//! This crate provides the foundation for the store backends and the CLI.

pub mod types;
pub mod traits;
pub mod error;
pub mod config;

pub use types::*;
pub use traits::*;
pub use error::*;
pub use config::*;
