//! Read-only snapshots of engine state.
//!
//! Readers (the game view, the result recorder, tests) never touch the
//! engine directly; they get a value copy that cannot feed back into the
//! simulation.

/// Immutable snapshot of one round's state.
///
/// `is_moving` and `is_falling` are mutually exclusive while a round is
/// live; both read false once `game_over` is set. `score` is meaningful
/// only once `game_over` is true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub is_moving: bool,
    pub is_falling: bool,
    pub game_over: bool,
    pub score: u32,
}

impl GameSnapshot {
    /// Whether a drop press would do anything in this state.
    pub fn can_drop(&self) -> bool {
        self.is_moving
    }
}
