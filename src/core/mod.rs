//! Core module - pure game logic with no external dependencies
//!
//! This module contains the simulation state machine, scoring rules, and the
//! snapshot type readers consume. It has zero dependencies on UI or I/O.

pub mod engine;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use engine::{GameState, Phase};
pub use scoring::score_for;
pub use snapshot::GameSnapshot;
