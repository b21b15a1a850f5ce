//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick driven only (no wall clock)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod balloon;
pub mod collision;
pub mod defender;
pub mod difficulty;
pub mod engine;
pub mod field;
pub mod spawner;
pub mod state;
pub mod wind;

pub use balloon::{Balloon, Color};
pub use collision::{balloon_escaped, balloon_tip_hit};
pub use defender::Defender;
pub use difficulty::{Difficulty, lift_speed, spawn_interval_ms};
pub use engine::{FrameReport, SimulationEngine};
pub use field::Field;
pub use spawner::Spawner;
pub use state::{MatchEvent, MatchPhase, MatchState, MatchSummary};
pub use wind::Wind;
