//! In-run difficulty escalation
//!
//! Escalation is keyed to absolute elapsed-second boundaries rather than
//! `remaining % 15`, so a late or skipped countdown tick cannot make a step
//! disappear: every boundary crossed is applied exactly once.

use serde::Serialize;

use crate::consts::*;

/// The difficulty parameters that drift during a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tuning {
    pub drop_speed: f32,
    pub spawn_interval_ms: u32,
    pub pollutant_chance: f64,
}

impl Tuning {
    /// Apply one escalation step
    pub fn stiffen(&mut self) {
        self.drop_speed += ESCALATION_SPEED_STEP;
        self.spawn_interval_ms = self
            .spawn_interval_ms
            .saturating_sub(ESCALATION_INTERVAL_STEP_MS)
            .max(MIN_SPAWN_INTERVAL_MS);
        self.pollutant_chance =
            (self.pollutant_chance + ESCALATION_CHANCE_STEP).min(MAX_POLLUTANT_CHANCE);
    }
}

/// Tracks the next elapsed-seconds boundary at which to escalate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Escalation {
    next_boundary_secs: u32,
}

impl Default for Escalation {
    fn default() -> Self {
        Self {
            next_boundary_secs: ESCALATION_PERIOD_SECS,
        }
    }
}

impl Escalation {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of escalation steps due now.
    ///
    /// Boundaries that coincide with the end of the run (nothing remaining)
    /// never fire.
    pub fn due_steps(&mut self, elapsed_secs: u32, remaining_secs: u32) -> u32 {
        if remaining_secs == 0 {
            return 0;
        }
        let mut steps = 0;
        while elapsed_secs >= self.next_boundary_secs {
            steps += 1;
            self.next_boundary_secs += ESCALATION_PERIOD_SECS;
        }
        steps
    }
}
