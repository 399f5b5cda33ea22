//! Cues: one-way notifications from the engine to the presentation layer
//!
//! Each cue carries enough data to render without querying the engine.

use serde::Serialize;

use super::drops::{DropId, DropKind};

/// Why a drop left the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RemovalReason {
    /// Beneficial drop hit the ground
    Missed,
    /// Grace period after a click ran out
    Collected,
    /// Swept away by game end / start / reset
    Cleared,
}

/// Tone of a feedback message or popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Cue {
    GameStarted {
        difficulty: &'static str,
    },
    GameEnded {
        final_score: u32,
    },
    DropSpawned {
        id: DropId,
        kind: DropKind,
        x: f32,
    },
    DropAdvanced {
        id: DropId,
        y: f32,
    },
    DropRemoved {
        id: DropId,
        reason: RemovalReason,
    },
    /// `delta` is what was actually applied, after clamping at zero
    ScoreChanged {
        score: u32,
        delta: i32,
    },
    TimeChanged {
        seconds_left: u32,
    },
    MilestoneFired {
        message: &'static str,
    },
    DifficultyIncreased {
        drop_speed: f32,
        spawn_interval_ms: u32,
        pollutant_chance: f64,
    },
    Feedback {
        message: &'static str,
        polarity: Polarity,
    },
    /// Floating score text at the drop's last position
    ScorePopup {
        x: f32,
        y: f32,
        text: &'static str,
        polarity: Polarity,
    },
}
