//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Injected time only (no wall clock)
//! - Seeded RNG only
//! - Stable iteration order (by drop ID)
//! - No rendering or platform dependencies

pub mod clock;
pub mod cue;
pub mod drops;
pub mod escalation;
pub mod milestone;
pub mod profile;
pub mod session;
pub mod state;

pub use clock::{Scheduler, Timer};
pub use cue::{Cue, Polarity, RemovalReason};
pub use drops::{DropField, DropId, DropKind, WaterDrop};
pub use escalation::{Escalation, Tuning};
pub use milestone::{DEFAULT_MILESTONES, Milestone, MilestoneTracker};
pub use profile::{DifficultyProfile, profiles};
pub use session::{Command, Session};
pub use state::{GamePhase, RngState, SessionState};
