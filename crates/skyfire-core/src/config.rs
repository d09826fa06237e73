//! Session configuration.
//!
//! Gameplay tuning lives in [`crate::constants`]; this struct only carries
//! the knobs a host is expected to change: the RNG seed, spawn cadence, and
//! how star drift relates to frame time.

use serde::{Deserialize, Serialize};

use crate::constants::{ENEMY_SPAWN_INTERVAL_MS, STAR_SPAWN_INTERVAL_MS};
use crate::error::ConfigError;

/// How stars advance towards the camera.
///
/// Enemies and projectiles always move a fixed amount per tick. Stars were
/// designed to move at a real-world speed instead; under a varying frame rate
/// the two families drift apart. `FixedStep` puts stars on the per-tick
/// model as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarMotion {
    /// Scale drift and spin by the measured frame delta.
    #[default]
    WallClock,
    /// Treat every tick as exactly one nominal frame.
    FixedStep,
}

/// Configuration for a [`GameSession`](crate::session::GameSession).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. Same seed and same inputs give the same session.
    pub seed: u64,
    /// Milliseconds between enemy spawns.
    pub enemy_interval_ms: u64,
    /// Milliseconds between star spawns.
    pub star_interval_ms: u64,
    /// Upper bound on the frame delta fed to star motion, in seconds.
    pub max_frame_delta_secs: f32,
    /// Star drift model.
    pub star_motion: StarMotion,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            star_interval_ms: STAR_SPAWN_INTERVAL_MS,
            max_frame_delta_secs: 0.25,
            star_motion: StarMotion::default(),
        }
    }
}

impl SessionConfig {
    /// Returns the default configuration with a different seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Checks the configuration for values the session cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero spawn interval or a non-positive
    /// frame delta cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemy_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { timer: "enemy" });
        }
        if self.star_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { timer: "star" });
        }
        if !(self.max_frame_delta_secs.is_finite() && self.max_frame_delta_secs > 0.0) {
            return Err(ConfigError::InvalidFrameDelta(self.max_frame_delta_secs));
        }
        Ok(())
    }
}
