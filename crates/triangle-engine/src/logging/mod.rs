//! Logging utilities.
//!
//! This module centralizes logger initialization. Code logs through the
//! standard `log` facade; the backend is `env_logger` on native targets and
//! the browser console on wasm32.

mod init;

pub use init::{init_logging, LoggingConfig};
