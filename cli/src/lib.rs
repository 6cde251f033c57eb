//! Keepsake CLI library
//!
//! Command handlers and logging setup for the `keepsake` binary.

pub mod commands;
pub mod logging;

pub use commands::*;
pub use logging::init_logging;
