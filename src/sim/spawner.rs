//! Balloon spawn scheduler
//!
//! A due time on the match clock instead of a self-rescheduling callback. The
//! delay to the next spawn is read from the difficulty current at the moment of
//! rescheduling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum SpawnSchedule {
    /// Not started yet
    Idle,
    /// Next spawn fires at this match-clock time (ms)
    Due(f64),
    /// Cancelled after the last firing
    Stopped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    schedule: SpawnSchedule,
    fired: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            schedule: SpawnSchedule::Idle,
            fired: 0,
        }
    }
}

impl Spawner {
    /// Number of scheduled spawns that have fired
    pub fn fired(&self) -> u32 {
        self.fired
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.schedule, SpawnSchedule::Stopped)
    }

    /// Next due time, if a spawn is pending
    pub fn due_ms(&self) -> Option<f64> {
        match self.schedule {
            SpawnSchedule::Due(at) => Some(at),
            _ => None,
        }
    }

    /// Arm the first scheduled spawn `interval_ms` after `now_ms`
    pub fn arm(&mut self, now_ms: f64, interval_ms: f32) {
        self.schedule = SpawnSchedule::Due(now_ms + interval_ms as f64);
    }

    /// Fire once if due. The caller spawns a balloon when this returns true,
    /// then calls [`Spawner::reschedule`] or [`Spawner::stop`].
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        match self.schedule {
            SpawnSchedule::Due(at) if at <= now_ms => {
                self.fired += 1;
                true
            }
            _ => false,
        }
    }

    /// Queue the next spawn relative to the one that just fired
    pub fn reschedule(&mut self, interval_ms: f32) {
        if let SpawnSchedule::Due(at) = self.schedule {
            self.schedule = SpawnSchedule::Due(at + interval_ms as f64);
        }
    }

    pub fn stop(&mut self) {
        self.schedule = SpawnSchedule::Stopped;
    }
}
