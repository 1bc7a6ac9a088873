//! Core types shared across the application
//! This module contains pure data types and tuning constants with no
//! external dependencies

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;

/// Horizontal swing speed while the ball oscillates (percent per tick)
pub const BALL_SPEED: f32 = 1.0;

/// Downward acceleration applied each falling tick (percent per tick)
pub const GRAVITY: f32 = 0.1;

/// Ball spawn position (percent of play-field width/height)
pub const SPAWN_X: f32 = 50.0;
pub const SPAWN_Y: f32 = 10.0;

/// Wall bounce margins. The swing reflects here rather than at 0/100 so the
/// ball stays visually inside the frame border.
pub const WALL_LEFT_X: f32 = 5.0;
pub const WALL_RIGHT_X: f32 = 95.0;

/// Vertical threshold where a falling ball contacts the ground
pub const GROUND_Y: f32 = 85.0;

/// Horizontal center of the target
pub const TARGET_CENTER_X: f32 = 50.0;

/// Scoring tiers as (max distance from target center, points).
///
/// Evaluated in ascending order with inclusive comparison, so a distance
/// exactly on a boundary lands in the tighter (higher-score) tier.
pub const SCORE_TIERS: [(f32, u32); 4] = [(1.0, 100), (2.0, 75), (5.0, 50), (8.0, 25)];

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Release the swinging ball into the fall phase
    Drop,
    /// Start a fresh round
    Restart,
}
