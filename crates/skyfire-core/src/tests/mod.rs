//! Cross-module tests for the session loop.
//!
//! - **Integration tests**: whole-session scenarios through inputs and steps
//! - **Determinism tests**: same seed and inputs give identical sessions
//! - **Invariant tests**: property tests over random input scripts
//!
//! # Test Structure
//!
//! - `integration.rs`: End-to-end scenarios
//! - `determinism.rs`: Replay comparisons
//! - `invariants.rs`: `proptest` properties for health and score
//! - `helpers.rs`: Session setup and entity placement utilities

mod helpers;

// Re-export for convenience
pub use helpers::*;
