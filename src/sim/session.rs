//! Session state machine
//!
//! A `Session` is the single actor that owns all game state. Every input
//! (player clicks, timer callbacks, start/reset) goes through `&mut self`, so
//! mutations are serialized by construction. Effects are buffered as cues
//! for the presentation layer to drain.

use rand_pcg::Pcg32;

use super::clock::{Scheduler, Timer};
use super::cue::{Cue, Polarity, RemovalReason};
use super::drops::{DropField, DropId, DropKind};
use super::profile::DifficultyProfile;
use super::state::{GamePhase, RngState, SessionState};
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Queued input for [`Session::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectDifficulty(String),
    Start(String),
    Reset,
    Collect(DropId),
}

#[derive(Debug)]
pub struct Session {
    settings: Settings,
    state: SessionState,
    drops: DropField,
    scheduler: Scheduler,
    rng: Pcg32,
    /// Engine time, advanced only by `advance_to`
    now_ms: u64,
    cues: Vec<Cue>,
}

impl Session {
    /// Create an Idle session on the default profile, seeded from settings
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let rng = RngState::new(settings.seed).to_rng();
        Self::with_rng(settings, rng)
    }

    /// Create an Idle session with an explicit random source
    pub fn with_rng(settings: Settings, rng: Pcg32) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            settings,
            state: SessionState::new(DifficultyProfile::default()),
            drops: DropField::new(),
            scheduler: Scheduler::new(),
            rng,
            now_ms: 0,
            cues: Vec::new(),
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn drops(&self) -> &DropField {
        &self.drops
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Cues emitted since the last drain
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Resize the play surface (takes effect on the next spawn/tick)
    pub fn set_surface(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            log::warn!("Ignoring invalid surface size {}x{}", width, height);
            return;
        }
        self.settings.surface_width = width;
        self.settings.surface_height = height;
    }

    /// Dispatch a queued input
    pub fn apply(&mut self, command: Command) -> Result<(), ConfigError> {
        match command {
            Command::SelectDifficulty(name) => self.select_difficulty(&name),
            Command::Start(name) => self.start(&name),
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::Collect(id) => {
                self.collect_drop(id);
                Ok(())
            }
        }
    }

    /// Choose the profile for the next run. Only honored while Idle.
    pub fn select_difficulty(&mut self, name: &str) -> Result<(), ConfigError> {
        let profile = DifficultyProfile::by_name(name)?;
        if self.state.phase != GamePhase::Idle {
            log::debug!(
                "Ignoring difficulty change to {} while {:?}",
                profile.name,
                self.state.phase
            );
            return Ok(());
        }
        self.state = SessionState::new(*profile);
        Ok(())
    }

    /// Begin a run on the named profile. Ignored while already Running.
    pub fn start(&mut self, name: &str) -> Result<(), ConfigError> {
        let profile = DifficultyProfile::by_name(name)?;
        if self.state.phase == GamePhase::Running {
            log::debug!("Ignoring start while a run is in progress");
            return Ok(());
        }

        self.clear_drops();
        self.state.difficulty = *profile;
        self.state.restore_defaults();
        self.state.phase = GamePhase::Running;
        self.scheduler.activate(
            self.now_ms,
            self.settings.tick_ms,
            u64::from(self.state.tuning.spawn_interval_ms),
            self.settings.countdown_ms,
        );

        log::info!("Game started on {} ({}s)", profile.name, profile.time_limit_secs);
        self.emit(Cue::GameStarted {
            difficulty: profile.name,
        });
        self.emit(Cue::ScoreChanged { score: 0, delta: 0 });
        self.emit(Cue::TimeChanged {
            seconds_left: self.state.time_remaining_secs,
        });
        self.feedback("Game Started! Collect the blue drops!", Polarity::Good);
        Ok(())
    }

    /// Return to Idle after a run. Ignored while Running.
    pub fn reset(&mut self) {
        if self.state.phase == GamePhase::Running {
            log::debug!("Ignoring reset while a run is in progress");
            return;
        }
        self.scheduler.deactivate();
        self.clear_drops();
        self.state.restore_defaults();
        self.state.phase = GamePhase::Idle;
        log::info!("Session reset");
    }

    /// Player clicked a drop
    pub fn collect_drop(&mut self, id: DropId) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        let Some(drop) = self.drops.collect(id) else {
            log::debug!("Ignoring click on unknown or collected drop {}", id.0);
            return;
        };
        let (kind, pos) = (drop.kind, drop.pos);

        match kind {
            DropKind::Harmful => {
                self.change_score(-(POLLUTANT_PENALTY as i32));
                self.feedback("Pollutant! -10 points", Polarity::Bad);
                self.popup(pos.x, pos.y, "-10", Polarity::Bad);
            }
            DropKind::Beneficial => {
                self.change_score(COLLECT_REWARD as i32);
                self.feedback("Great! +10 points", Polarity::Good);
                self.popup(pos.x, pos.y, "+10", Polarity::Good);
            }
        }

        self.scheduler
            .defer_removal(self.now_ms, self.settings.collect_grace_ms, id);
    }

    /// Physics tick: move drops, score misses
    pub fn on_tick(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        let exited = self
            .drops
            .advance(self.state.tuning.drop_speed, self.settings.surface_height);

        let advanced: Vec<Cue> = self
            .drops
            .iter()
            .filter(|d| !d.collected)
            .map(|d| Cue::DropAdvanced { id: d.id, y: d.pos.y })
            .collect();
        self.cues.extend(advanced);

        for drop in exited {
            // Pollutants that fall out unclicked are dropped without a trace
            if drop.kind == DropKind::Harmful {
                continue;
            }
            self.emit(Cue::DropRemoved {
                id: drop.id,
                reason: RemovalReason::Missed,
            });
            self.change_score(-(MISS_PENALTY as i32));
            self.feedback("-5", Polarity::Bad);
            self.popup(drop.pos.x, drop.pos.y, "-5", Polarity::Bad);
        }
    }

    /// Spawn tick: create one drop
    pub fn on_spawn_tick(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        let drop = self.drops.spawn(
            &mut self.rng,
            self.state.tuning.pollutant_chance,
            self.settings.max_spawn_x(),
            self.settings.spawn_offset,
        );
        let cue = Cue::DropSpawned {
            id: drop.id,
            kind: drop.kind,
            x: drop.pos.x,
        };
        self.emit(cue);
    }

    /// Countdown tick: one second passes
    pub fn on_countdown_tick(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        self.state.time_remaining_secs = self.state.time_remaining_secs.saturating_sub(1);
        self.emit(Cue::TimeChanged {
            seconds_left: self.state.time_remaining_secs,
        });

        if self.state.time_remaining_secs == 0 {
            self.end();
            return;
        }

        let steps = self
            .state
            .escalation
            .due_steps(self.state.elapsed_secs(), self.state.time_remaining_secs);
        if steps == 0 {
            return;
        }
        for _ in 0..steps {
            self.state.tuning.stiffen();
            let t = self.state.tuning;
            log::debug!(
                "Difficulty increased: speed={} interval={}ms chance={:.2}",
                t.drop_speed,
                t.spawn_interval_ms,
                t.pollutant_chance
            );
            self.emit(Cue::DifficultyIncreased {
                drop_speed: t.drop_speed,
                spawn_interval_ms: t.spawn_interval_ms,
                pollutant_chance: t.pollutant_chance,
            });
        }
        self.scheduler
            .reschedule_spawn(self.now_ms, u64::from(self.state.tuning.spawn_interval_ms));
        self.feedback("Difficulty Increased!", Polarity::Good);
    }

    /// Run every timer due up to `now_ms`, in order.
    ///
    /// Time never moves backwards; an earlier `now_ms` is ignored.
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms < self.now_ms {
            return;
        }
        while let Some((due, timer)) = self.scheduler.pop_due(now_ms) {
            self.now_ms = due;
            match timer {
                Timer::Tick => self.on_tick(),
                Timer::Spawn => self.on_spawn_tick(),
                Timer::Countdown => self.on_countdown_tick(),
                Timer::Removal(id) => self.finish_collect(id),
            }
        }
        self.now_ms = now_ms;
    }

    /// Grace period over: the collected drop leaves the surface
    fn finish_collect(&mut self, id: DropId) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        if self.drops.remove(id).is_some() {
            self.emit(Cue::DropRemoved {
                id,
                reason: RemovalReason::Collected,
            });
        }
    }

    fn end(&mut self) {
        self.scheduler.deactivate();
        self.clear_drops();
        self.state.phase = GamePhase::Ended;
        log::info!("Game over, final score {}", self.state.score);
        self.emit(Cue::GameEnded {
            final_score: self.state.score,
        });
    }

    fn clear_drops(&mut self) {
        for id in self.drops.clear() {
            self.emit(Cue::DropRemoved {
                id,
                reason: RemovalReason::Cleared,
            });
        }
    }

    fn change_score(&mut self, delta: i32) {
        let applied = self.state.adjust_score(delta);
        let score = self.state.score;
        self.emit(Cue::ScoreChanged {
            score,
            delta: applied,
        });
        for message in self.state.milestones.evaluate(score) {
            log::info!("Milestone reached at {}: {}", score, message);
            self.emit(Cue::MilestoneFired { message });
        }
    }

    fn feedback(&mut self, message: &'static str, polarity: Polarity) {
        self.emit(Cue::Feedback { message, polarity });
    }

    fn popup(&mut self, x: f32, y: f32, text: &'static str, polarity: Polarity) {
        self.emit(Cue::ScorePopup {
            x,
            y,
            text,
            polarity,
        });
    }

    fn emit(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
