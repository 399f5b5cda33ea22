//! Game clock and scheduler
//!
//! Three periodic timers (physics tick, spawn, countdown) plus one-shot
//! deferred drop removals. Time is injected in milliseconds; nothing here
//! reads the wall clock. Due timers are handed out one at a time so the
//! caller can reschedule or cancel between deliveries.

use super::drops::DropId;

/// A timer that came due. Variant order breaks ties at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Timer {
    Tick,
    Spawn,
    Countdown,
    Removal(DropId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Periodic {
    period_ms: u64,
    next_due_ms: u64,
}

impl Periodic {
    /// Periods are at least 1 ms so re-arming always moves forward
    fn starting_at(now_ms: u64, period_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: now_ms + period_ms,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheduler {
    tick: Option<Periodic>,
    spawn: Option<Periodic>,
    countdown: Option<Periodic>,
    /// (due, removal), kept sorted by due time then insertion
    deferred: Vec<(u64, DropId)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start all three periodic timers from `now_ms`
    pub fn activate(&mut self, now_ms: u64, tick_ms: u64, spawn_ms: u64, countdown_ms: u64) {
        self.tick = Some(Periodic::starting_at(now_ms, tick_ms));
        self.spawn = Some(Periodic::starting_at(now_ms, spawn_ms));
        self.countdown = Some(Periodic::starting_at(now_ms, countdown_ms));
        self.deferred.clear();
    }

    /// Cancel every timer, including pending removals
    pub fn deactivate(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.tick.is_some() || self.spawn.is_some() || self.countdown.is_some()
    }

    /// Replace the spawn timer with a new period starting at `now_ms`.
    ///
    /// The pending spawn is superseded, never stacked.
    pub fn reschedule_spawn(&mut self, now_ms: u64, spawn_ms: u64) {
        if self.spawn.is_some() {
            self.spawn = Some(Periodic::starting_at(now_ms, spawn_ms));
        }
    }

    pub fn spawn_period_ms(&self) -> Option<u64> {
        self.spawn.map(|s| s.period_ms)
    }

    /// Schedule a one-shot removal `delay_ms` from `now_ms`
    pub fn defer_removal(&mut self, now_ms: u64, delay_ms: u64, id: DropId) {
        let due = now_ms + delay_ms;
        let at = self.deferred.partition_point(|&(d, _)| d <= due);
        self.deferred.insert(at, (due, id));
    }

    pub fn pending_removals(&self) -> usize {
        self.deferred.len()
    }

    /// Pop the earliest timer due at or before `until_ms`.
    ///
    /// Periodic timers are re-armed for their next period as they fire.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(u64, Timer)> {
        let mut best: Option<(u64, Timer)> = None;
        let mut consider = |due: u64, timer: Timer| {
            if due <= until_ms && best.is_none_or(|b| (due, timer) < b) {
                best = Some((due, timer));
            }
        };

        if let Some(t) = self.tick {
            consider(t.next_due_ms, Timer::Tick);
        }
        if let Some(t) = self.spawn {
            consider(t.next_due_ms, Timer::Spawn);
        }
        if let Some(t) = self.countdown {
            consider(t.next_due_ms, Timer::Countdown);
        }
        if let Some(&(due, id)) = self.deferred.first() {
            consider(due, Timer::Removal(id));
        }

        let (due, timer) = best?;
        match timer {
            Timer::Tick => Self::rearm(&mut self.tick),
            Timer::Spawn => Self::rearm(&mut self.spawn),
            Timer::Countdown => Self::rearm(&mut self.countdown),
            Timer::Removal(_) => {
                self.deferred.remove(0);
            }
        }
        Some((due, timer))
    }

    fn rearm(slot: &mut Option<Periodic>) {
        if let Some(t) = slot {
            t.next_due_ms += t.period_ms;
        }
    }
}
