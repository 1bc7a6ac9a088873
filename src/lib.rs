//! tui-dropshot: a terminal ball-drop arcade game.
//!
//! A ball swings side-to-side near the top of the play field. Drop it, watch
//! gravity pull it toward the target on the ground line, and score points by
//! landing close to the target center.
//!
//! Module layout:
//!
//! - [`core`]: pure simulation (state machine, scoring, snapshots) with zero
//!   dependencies on UI, networking, or I/O
//! - [`input`]: crossterm key events mapped to game actions
//! - [`term`]: framebuffer-based terminal rendering
//! - [`scores`]: persistent top-10 leaderboard (the result recorder)
//! - [`types`]: shared constants and pure data types

pub mod core;
pub mod input;
pub mod scores;
pub mod term;
pub mod types;
