//! Host settings
//!
//! Gameplay constants are compiled in (see [`crate::consts`]); these are the
//! knobs of the host running a match. Loaded from a JSON file, any missing key
//! falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::Field;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` picks one from the system clock
    pub seed: Option<u64>,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Clock ===
    /// Frame ticks per second
    pub frame_rate: f64,

    // === Input ===
    /// Let the autopilot drive the pointer
    pub autopilot: bool,
    /// Autopilot pointer speed (units per frame)
    pub autopilot_speed: f32,

    // === Debug ===
    /// Log an ASCII snapshot every N frames at debug level (0 = never)
    pub snapshot_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            field_width: 800.0,
            field_height: 600.0,

            frame_rate: 60.0,

            autopilot: true,
            autopilot_speed: 6.0,

            snapshot_every: 0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check everything a match needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field()?;
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConfigError::FrameRate(self.frame_rate));
        }
        Ok(())
    }

    pub fn field(&self) -> Result<Field, ConfigError> {
        Ok(Field::new(self.field_width, self.field_height)?)
    }

    /// Configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
