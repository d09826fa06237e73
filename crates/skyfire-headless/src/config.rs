//! Run configuration for the headless driver.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skyfire_core::SessionConfig;

/// What to run and for how long.
///
/// Loaded from JSON; every field is optional.
///
/// ```json
/// {
///   "ticks": 3600,
///   "frame_ms": 16,
///   "restart_on_game_over": true,
///   "session": { "seed": 7, "star_motion": "fixed_step" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of steps to run.
    pub ticks: u64,
    /// Simulated milliseconds between steps.
    pub frame_ms: u64,
    /// Restart automatically after a game over instead of stopping.
    pub restart_on_game_over: bool,
    /// Log the HUD every this many ticks (0 disables).
    pub hud_every: u64,
    /// Pace steps against the system clock instead of simulated time.
    pub realtime: bool,
    /// Session settings.
    pub session: SessionConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 60 * 60,
            frame_ms: 16,
            restart_on_game_over: false,
            hud_every: 300,
            realtime: false,
            session: SessionConfig::default(),
        }
    }
}

impl RunConfig {
    /// Reads a run configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read run config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid run config {}", path.display()))
    }

    /// Parses a run configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("malformed JSON")?;
        if config.frame_ms == 0 {
            anyhow::bail!("frame_ms must be greater than zero");
        }
        config.session.validate()?;
        Ok(config)
    }
}
