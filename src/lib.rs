//! Balloon Blast - a wind-swept balloon popping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (difficulty, wind, balloons, match lifecycle)
//! - `driver`: Single-threaded clock that serializes second and frame ticks
//! - `renderer`: Render collaborator interface and a logging implementation
//! - `autopilot`: Demo input that steers the defender on its own
//! - `settings`: Host-side configuration loaded from JSON

pub mod autopilot;
pub mod driver;
pub mod error;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::MatchDriver;
pub use error::{ConfigError, FieldError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Match duration in seconds
    pub const TIME_LIMIT: u32 = 60;

    /// Balloon size range
    pub const MIN_RADIUS: f32 = 10.0;
    pub const MAX_RADIUS: f32 = 50.0;

    /// Milliseconds between spawns at the end and start of a match
    pub const MIN_TIMEOUT: f32 = 200.0;
    pub const MAX_TIMEOUT: f32 = 800.0;

    /// Per-frame upward displacement at the start and end of a match
    pub const MIN_ANTI_GRAVITY: f32 = 2.0;
    pub const MAX_ANTI_GRAVITY: f32 = 8.0;

    /// Largest wind change per second
    pub const WIND_ADD: i32 = 2;
    /// Soft bound of the wind random walk
    pub const MAX_WIND: i32 = 10;

    /// Defender geometry (the tip sits at y = DEFENDER_HEIGHT)
    pub const DEFENDER_HEIGHT: f32 = 50.0;
    pub const DEFENDER_WIDTH: f32 = 10.0;

    /// Length of one countdown tick
    pub const SECOND_MS: f64 = 1000.0;

    /// Balloon palette (0xRRGGBB)
    pub const COLORS: [u32; 10] = [
        0x8125A7, 0xE45599, 0xC4DC61, 0x4EE5DC, 0x45B043, 0x886C70, 0x487FB3, 0xF96DCC,
        0xD55E58, 0xE38B2B,
    ];
}

/// Round with halves going toward positive infinity (`-0.5` becomes `0`, `0.5` becomes `1`)
#[inline]
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(-1.51), -2.0);
    }
}
