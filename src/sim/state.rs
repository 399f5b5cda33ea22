//! Session state and core simulation types
//!
//! Everything the rules read or write lives in `SessionState`, except the
//! drops themselves (owned by `DropField`) and the timers (owned by the
//! scheduler).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::escalation::{Escalation, Tuning};
use super::milestone::MilestoneTracker;
use super::profile::DifficultyProfile;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Before the first start, or after a reset
    Idle,
    /// Active gameplay
    Running,
    /// Timer expired, score final
    Ended,
}

/// RNG seed wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Rule-facing state of one session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub phase: GamePhase,
    pub score: u32,
    pub time_remaining_secs: u32,
    /// Selected profile
    pub difficulty: DifficultyProfile,
    /// Current speed/interval/chance (profile values plus escalation)
    pub tuning: Tuning,
    pub escalation: Escalation,
    pub milestones: MilestoneTracker,
}

impl SessionState {
    /// A fresh Idle state for `profile`
    pub fn new(profile: DifficultyProfile) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            time_remaining_secs: profile.time_limit_secs,
            difficulty: profile,
            tuning: profile.tuning(),
            escalation: Escalation::default(),
            milestones: MilestoneTracker::default(),
        }
    }

    /// Restore everything a run may have changed to the profile defaults
    pub fn restore_defaults(&mut self) {
        self.score = 0;
        self.time_remaining_secs = self.difficulty.time_limit_secs;
        self.tuning = self.difficulty.tuning();
        self.escalation.reset();
        self.milestones.reset();
    }

    /// Seconds elapsed in the current run
    pub fn elapsed_secs(&self) -> u32 {
        self.difficulty
            .time_limit_secs
            .saturating_sub(self.time_remaining_secs)
    }

    /// Add (or, negative, subtract) points, clamping at zero.
    ///
    /// Returns the delta that was actually applied.
    pub fn adjust_score(&mut self, delta: i32) -> i32 {
        let before = self.score;
        self.score = if delta >= 0 {
            self.score.saturating_add(delta.unsigned_abs())
        } else {
            self.score.saturating_sub(delta.unsigned_abs())
        };
        self.score as i32 - before as i32
    }
}

impl DifficultyProfile {
    /// Starting tuning for a run on this profile
    pub fn tuning(&self) -> Tuning {
        Tuning {
            drop_speed: self.drop_speed,
            spawn_interval_ms: self.spawn_interval_ms,
            pollutant_chance: self.pollutant_chance,
        }
    }
}
