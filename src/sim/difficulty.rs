//! Difficulty curve
//!
//! Spawn cadence and lift speed both interpolate linearly over the match.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty parameters at one instant of the match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Milliseconds between spawns
    pub spawn_interval_ms: f32,
    /// Per-frame rise of newly spawned balloons
    pub lift_speed: f32,
}

impl Difficulty {
    /// Evaluate the curve. Elapsed time past the limit is clamped.
    pub fn at(elapsed_secs: u32) -> Self {
        Self {
            spawn_interval_ms: spawn_interval_ms(elapsed_secs),
            lift_speed: lift_speed(elapsed_secs),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::at(0)
    }
}

/// Fraction of the match that has elapsed, in [0, 1]
#[inline]
fn progress(elapsed_secs: u32) -> f32 {
    elapsed_secs.min(TIME_LIMIT) as f32 / TIME_LIMIT as f32
}

/// Decreases from MAX_TIMEOUT to MIN_TIMEOUT
pub fn spawn_interval_ms(elapsed_secs: u32) -> f32 {
    MAX_TIMEOUT - (MAX_TIMEOUT - MIN_TIMEOUT) * progress(elapsed_secs)
}

/// Increases from MIN_ANTI_GRAVITY to MAX_ANTI_GRAVITY
pub fn lift_speed(elapsed_secs: u32) -> f32 {
    MIN_ANTI_GRAVITY + (MAX_ANTI_GRAVITY - MIN_ANTI_GRAVITY) * progress(elapsed_secs)
}
