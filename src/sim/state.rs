//! Match state and lifecycle types
//!
//! Everything the per-second and per-frame passes mutate, apart from the
//! balloon arena, lives in [`MatchState`].

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::wind::Wind;
use crate::consts::TIME_LIMIT;

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Created, nothing spawned yet
    NotStarted,
    /// Countdown, wind and spawner active
    Running,
    /// Time is up, airborne balloons still resolving
    Ending,
    /// All balloons resolved (terminal)
    Finished,
}

/// Final tally reported once the match is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub score: u32,
    pub missed: u32,
}

/// Notifications for the presentation side, drained after each step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    PhaseChanged(MatchPhase),
    Spawned { id: u32 },
    Popped { id: u32 },
    Escaped { id: u32 },
    TallyChanged { score: u32, missed: u32 },
    ClockChanged { remaining_secs: u32 },
    Finished(MatchSummary),
}

/// Counters, clock and environment of one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Whole seconds since start
    pub elapsed_secs: u32,
    /// Balloons popped
    pub score: u32,
    /// Balloons that escaped through the top
    pub missed: u32,
    /// Balloons created so far
    pub spawned: u32,
    pub wind: Wind,
    /// Difficulty as of the latest second tick
    pub difficulty: Difficulty,
    pub phase: MatchPhase,
    /// Frame ticks processed
    pub frames: u64,
}

impl MatchState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            elapsed_secs: 0,
            score: 0,
            missed: 0,
            spawned: 0,
            wind: Wind::default(),
            difficulty: Difficulty::default(),
            phase: MatchPhase::NotStarted,
            frames: 0,
        }
    }

    /// True once time is up
    pub fn ended(&self) -> bool {
        matches!(self.phase, MatchPhase::Ending | MatchPhase::Finished)
    }

    /// Whether frame ticks and spawns are processed
    pub fn is_live(&self) -> bool {
        matches!(self.phase, MatchPhase::Running | MatchPhase::Ending)
    }

    /// Seconds left on the countdown
    pub fn remaining_secs(&self) -> u32 {
        TIME_LIMIT.saturating_sub(self.elapsed_secs)
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            score: self.score,
            missed: self.missed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_blank() {
        let state = MatchState::new(42);
        assert_eq!(state.phase, MatchPhase::NotStarted);
        assert_eq!(state.summary(), MatchSummary { score: 0, missed: 0 });
        assert_eq!(state.wind, Wind(0));
        assert_eq!(state.remaining_secs(), TIME_LIMIT);
        assert!(!state.ended());
        assert!(!state.is_live());
    }

    #[test]
    fn test_phase_predicates() {
        let mut state = MatchState::new(1);
        state.phase = MatchPhase::Ending;
        assert!(state.ended() && state.is_live());
        state.phase = MatchPhase::Finished;
        assert!(state.ended() && !state.is_live());
    }

    #[test]
    fn test_state_serializes() {
        let state = MatchState::new(7);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"phase\":\"NotStarted\""));
    }
}
