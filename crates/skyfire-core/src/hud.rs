//! UI boundary: the numbers a HUD shows.

use serde::{Deserialize, Serialize};

use crate::constants::{HEALTH_BAND_HEALTHY, HEALTH_BAND_WARNING, MAX_HEALTH};

/// Session phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Spawning, movement and combat run.
    #[default]
    Active,
    /// The player died. Only effects keep animating until a restart.
    Over,
}

/// Color band of the health bar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthBand {
    /// Above 60%.
    Healthy,
    /// Above 30% and at most 60%.
    Warning,
    /// 30% or less.
    Critical,
}

impl HealthBand {
    /// Classifies a health percentage.
    #[must_use]
    pub fn from_percent(percent: f32) -> Self {
        if percent > HEALTH_BAND_HEALTHY {
            Self::Healthy
        } else if percent > HEALTH_BAND_WARNING {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

/// Snapshot of the HUD after a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudState {
    /// Current score.
    pub score: u64,
    /// Current health, 0..=350.
    pub health: u32,
    /// Health as a percentage of the maximum.
    pub health_percent: f32,
    /// Health bar color band.
    pub band: HealthBand,
    /// Session phase.
    pub phase: GamePhase,
    /// Score at the moment of death; `Some` only while the phase is Over.
    pub final_score: Option<u64>,
}

impl HudState {
    /// Builds the HUD state from raw session values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(score: u64, health: u32, phase: GamePhase, final_score: Option<u64>) -> Self {
        let health_percent = health.min(MAX_HEALTH) as f32 / MAX_HEALTH as f32 * 100.0;
        Self {
            score,
            health,
            health_percent,
            band: HealthBand::from_percent(health_percent),
            phase,
            final_score,
        }
    }

    /// Returns true if the game-over screen should be shown.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_health_is_healthy() {
        let hud = HudState::new(0, MAX_HEALTH, GamePhase::Active, None);
        assert!((hud.health_percent - 100.0).abs() < f32::EPSILON);
        assert_eq!(hud.band, HealthBand::Healthy);
        assert!(!hud.is_game_over());
    }

    #[test]
    fn band_thresholds_are_exclusive() {
        assert_eq!(HealthBand::from_percent(60.0), HealthBand::Warning);
        assert_eq!(HealthBand::from_percent(60.1), HealthBand::Healthy);
        assert_eq!(HealthBand::from_percent(30.0), HealthBand::Critical);
        assert_eq!(HealthBand::from_percent(30.1), HealthBand::Warning);
    }

    #[test]
    fn band_follows_health() {
        // 140/350 = 40%
        let hud = HudState::new(0, 140, GamePhase::Active, None);
        assert_eq!(hud.band, HealthBand::Warning);
        // 70/350 = 20%
        let hud = HudState::new(0, 70, GamePhase::Active, None);
        assert_eq!(hud.band, HealthBand::Critical);
    }

    #[test]
    fn game_over_carries_final_score() {
        let hud = HudState::new(230, 0, GamePhase::Over, Some(230));
        assert!(hud.is_game_over());
        assert_eq!(hud.final_score, Some(230));
        assert_eq!(hud.band, HealthBand::Critical);
    }
}
