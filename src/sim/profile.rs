//! Difficulty profiles
//!
//! Named presets selected before a run. The table is static and read-only;
//! a selection UI can list it with [`profiles`].

use serde::Serialize;

use crate::error::ConfigError;

/// A named bundle of difficulty parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyProfile {
    pub name: &'static str,
    /// Pixels per tick
    pub drop_speed: f32,
    pub spawn_interval_ms: u32,
    /// Probability that a spawned drop is harmful
    pub pollutant_chance: f64,
    pub time_limit_secs: u32,
    pub description: &'static str,
}

const PROFILES: [DifficultyProfile; 4] = [
    DifficultyProfile {
        name: "easy",
        drop_speed: 1.5,
        spawn_interval_ms: 1200,
        pollutant_chance: 0.2,
        time_limit_secs: 90,
        description: "Slow drops, few pollutants, 90 seconds",
    },
    DifficultyProfile {
        name: "normal",
        drop_speed: 2.0,
        spawn_interval_ms: 1000,
        pollutant_chance: 0.3,
        time_limit_secs: 60,
        description: "The classic game, 60 seconds",
    },
    DifficultyProfile {
        name: "hard",
        drop_speed: 3.0,
        spawn_interval_ms: 800,
        pollutant_chance: 0.4,
        time_limit_secs: 45,
        description: "Faster drops and more pollutants, 45 seconds",
    },
    DifficultyProfile {
        name: "extreme",
        drop_speed: 4.0,
        spawn_interval_ms: 600,
        pollutant_chance: 0.45,
        time_limit_secs: 30,
        description: "A 30 second downpour",
    },
];

/// All built-in profiles, easiest first
pub fn profiles() -> &'static [DifficultyProfile] {
    &PROFILES
}

impl DifficultyProfile {
    /// Look up a profile by name (case-insensitive)
    pub fn by_name(name: &str) -> Result<&'static DifficultyProfile, ConfigError> {
        PROFILES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(name.to_string()))
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        PROFILES[1]
    }
}
