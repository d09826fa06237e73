//! Error types.
//!
//! The simulation itself cannot fail; out-of-range state is clamped and
//! fatal game conditions are phase transitions. Only configuration is
//! validated.

use thiserror::Error;

/// Invalid session configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A spawn timer period was zero.
    #[error("{timer} spawn interval must be greater than zero")]
    ZeroInterval {
        /// Which timer (`"enemy"` or `"star"`)
        timer: &'static str,
    },
    /// The frame delta cap was not a positive finite number.
    #[error("max_frame_delta_secs must be positive and finite, got {0}")]
    InvalidFrameDelta(f32),
}
