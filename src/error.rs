//! Error types for engine configuration.
//!
//! Gameplay itself never fails: bad drop ids and out-of-phase inputs are
//! ignored. Only caller bugs (unknown profile names, malformed settings)
//! surface as errors.

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
