//! Water Drop - a timed falling-drop arcade game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (drops, clock, scoring, session state)
//! - `settings`: Engine configuration (surface size, cadences, seed)
//! - `error`: Configuration error types
//! - `web`: Browser binding (wasm32 only)

pub mod error;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::ConfigError;
pub use settings::Settings;
pub use sim::{Cue, Session};

/// Game configuration constants
pub mod consts {
    /// Physics/render tick period (~60 Hz)
    pub const TICK_MS: u64 = 16;
    /// Countdown tick period
    pub const COUNTDOWN_MS: u64 = 1000;
    /// How long a collected drop lingers before removal
    pub const COLLECT_GRACE_MS: u64 = 500;

    /// Default play surface dimensions (pixels)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;
    /// Drop sprite width, used to keep spawns inside the surface
    pub const DROP_WIDTH: f32 = 40.0;
    /// Spawn height, above the visible top edge
    pub const SPAWN_OFFSET: f32 = -50.0;

    /// Score deltas
    pub const COLLECT_REWARD: u32 = 10;
    pub const POLLUTANT_PENALTY: u32 = 10;
    pub const MISS_PENALTY: u32 = 5;

    /// Escalation cadence, in elapsed seconds
    pub const ESCALATION_PERIOD_SECS: u32 = 15;
    pub const ESCALATION_SPEED_STEP: f32 = 0.5;
    pub const ESCALATION_INTERVAL_STEP_MS: u32 = 100;
    pub const ESCALATION_CHANCE_STEP: f64 = 0.05;
    /// Floor for the spawn interval
    pub const MIN_SPAWN_INTERVAL_MS: u32 = 500;
    /// Ceiling for the pollutant chance
    pub const MAX_POLLUTANT_CHANCE: f64 = 0.5;
}
