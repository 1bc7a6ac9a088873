//! Simulation engine - the ball-drop state machine
//!
//! The engine owns the authoritative round state and advances it one fixed
//! step per [`GameState::tick`]. It is pure and deterministic: no timing, no
//! I/O, no allocation on the tick path. The presentation loop supplies the
//! tick cadence and reads state back through [`GameState::snapshot`].
//!
//! A round moves through three phases:
//!
//! ```text
//! Swinging --drop_ball--> Falling --ground contact--> Ended
//!     ^                                                 |
//!     +---------------- start/reset -------------------+
//! ```
//!
//! `Ended` is terminal: `tick` and `drop_ball` become no-ops (never errors)
//! until the next `start`/`reset`. Out-of-phase calls are defined behavior,
//! which keeps late or duplicated user input harmless.

use crate::core::scoring::score_for;
use crate::core::snapshot::GameSnapshot;
use crate::types::{
    GameAction, BALL_SPEED, GRAVITY, GROUND_Y, SPAWN_X, SPAWN_Y, WALL_LEFT_X, WALL_RIGHT_X,
};

/// Phase of a round. Exactly one phase is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball oscillates horizontally between the wall margins
    Swinging,
    /// Ball accelerates straight down under gravity
    Falling,
    /// Ball contacted the ground; score is final
    Ended,
}

/// Complete simulation state for one round.
///
/// Positions and velocities live in the normalized `[0, 100]` percent
/// coordinate space; `ball_x` stays within the wall margins by reflection.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    ball_x: f32,
    ball_y: f32,
    velocity_x: f32,
    velocity_y: f32,
    phase: Phase,
    score: u32,
}

impl GameState {
    /// Create a fresh engine, already in the swing phase.
    pub fn new() -> Self {
        Self {
            ball_x: SPAWN_X,
            ball_y: SPAWN_Y,
            velocity_x: BALL_SPEED,
            velocity_y: 0.0,
            phase: Phase::Swinging,
            score: 0,
        }
    }

    /// Begin a round: full state replacement back to the spawn configuration.
    ///
    /// Always succeeds, from any phase.
    pub fn start(&mut self) {
        *self = Self::new();
    }

    /// Alias of [`GameState::start`].
    pub fn reset(&mut self) {
        self.start();
    }

    /// Release the ball into the fall phase.
    ///
    /// No-op once the round has ended, and idempotent while already falling:
    /// duplicate presses leave `velocity_x = 0` and the phase unchanged.
    pub fn drop_ball(&mut self) {
        if self.phase == Phase::Ended {
            return;
        }
        self.phase = Phase::Falling;
        self.velocity_x = 0.0;
    }

    /// Advance the simulation by one fixed step.
    ///
    /// No-op once the round has ended. The two motion rules are mutually
    /// exclusive per tick; there is no combined horizontal+vertical motion.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::Swinging => {
                self.ball_x += self.velocity_x;
                // Reflect at the wall margins, not at the field edges.
                if self.ball_x <= WALL_LEFT_X || self.ball_x >= WALL_RIGHT_X {
                    self.velocity_x = -self.velocity_x;
                }
            }
            Phase::Falling => {
                self.velocity_y += GRAVITY;
                self.ball_y += self.velocity_y;
                // Ground contact is checked against the post-integration
                // position every tick, so large deltas cannot skip it.
                if self.ball_y >= GROUND_Y {
                    self.phase = Phase::Ended;
                    self.score = score_for(self.ball_x);
                }
            }
            Phase::Ended => {}
        }
    }

    /// Apply a user action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Drop => self.drop_ball(),
            GameAction::Restart => self.reset(),
        }
    }

    /// Read-only snapshot of the latest state.
    ///
    /// Reflects the most recent `tick`/`drop_ball`/`start` synchronously.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            ball_x: self.ball_x,
            ball_y: self.ball_y,
            velocity_x: self.velocity_x,
            velocity_y: self.velocity_y,
            is_moving: self.phase == Phase::Swinging,
            is_falling: self.phase == Phase::Falling,
            game_over: self.phase == Phase::Ended,
            score: self.score,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ball_x(&self) -> f32 {
        self.ball_x
    }

    pub fn ball_y(&self) -> f32 {
        self.ball_y
    }

    /// Final score; 0 until the round ends.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Whether a drop press would do anything right now.
    pub fn can_drop(&self) -> bool {
        self.phase == Phase::Swinging
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a freshly started game until the swing reaches `target_x`.
    fn swing_until(game: &mut GameState, target_x: f32) {
        for _ in 0..1000 {
            if (game.ball_x() - target_x).abs() < f32::EPSILON {
                return;
            }
            game.tick();
        }
        panic!("swing never reached x={target_x}");
    }

    #[test]
    fn test_initial_state() {
        let game = GameState::new();
        let snap = game.snapshot();
        assert_eq!(snap.ball_x, 50.0);
        assert_eq!(snap.ball_y, 10.0);
        assert_eq!(snap.velocity_x, 1.0);
        assert_eq!(snap.velocity_y, 0.0);
        assert!(snap.is_moving);
        assert!(!snap.is_falling);
        assert!(!snap.game_over);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_drop_is_idempotent() {
        let mut game = GameState::new();
        game.tick();
        game.drop_ball();
        let first = game.snapshot();
        assert!(first.is_falling);
        assert_eq!(first.velocity_x, 0.0);

        game.drop_ball();
        assert_eq!(game.snapshot(), first);
    }

    #[test]
    fn test_wall_reflection_right() {
        let mut game = GameState::new();
        // Spawn at 50 moving +1: 44 ticks puts the ball at 94.
        for _ in 0..44 {
            game.tick();
        }
        assert_eq!(game.ball_x(), 94.0);
        assert_eq!(game.snapshot().velocity_x, 1.0);

        // Crossing 95 flips the sign exactly at the margin.
        game.tick();
        assert_eq!(game.ball_x(), 95.0);
        assert_eq!(game.snapshot().velocity_x, -1.0);

        game.tick();
        assert_eq!(game.ball_x(), 94.0);
    }

    #[test]
    fn test_wall_reflection_left() {
        let mut game = GameState::new();
        swing_until(&mut game, 5.0);
        // Reflection already happened on the tick that reached the margin.
        assert_eq!(game.snapshot().velocity_x, 1.0);
        game.tick();
        assert_eq!(game.ball_x(), 6.0);
    }

    #[test]
    fn test_gravity_accumulates_per_tick() {
        let mut game = GameState::new();
        game.drop_ball();

        let mut prev_vy = game.snapshot().velocity_y;
        let mut prev_y = game.ball_y();
        while !game.game_over() {
            game.tick();
            let snap = game.snapshot();
            if snap.game_over {
                break;
            }
            assert!(
                (snap.velocity_y - (prev_vy + GRAVITY)).abs() < 1e-5,
                "velocity_y must grow by exactly GRAVITY each falling tick"
            );
            assert!(snap.ball_y > prev_y);
            prev_vy = snap.velocity_y;
            prev_y = snap.ball_y;
        }
    }

    #[test]
    fn test_ground_contact_ends_round_with_score() {
        let mut game = GameState::new();
        game.drop_ball();
        for _ in 0..1000 {
            if game.game_over() {
                break;
            }
            game.tick();
        }
        assert!(game.game_over());
        assert!(game.ball_y() >= GROUND_Y);
        // Dropped dead center without swinging: bullseye.
        assert_eq!(game.ball_x(), 50.0);
        assert_eq!(game.score(), 100);
    }

    #[test]
    fn test_tick_is_noop_after_game_over() {
        let mut game = GameState::new();
        game.drop_ball();
        while !game.game_over() {
            game.tick();
        }

        let terminal = game.snapshot();
        for _ in 0..100 {
            game.tick();
            assert_eq!(game.snapshot(), terminal);
        }
    }

    #[test]
    fn test_drop_is_noop_after_game_over() {
        let mut game = GameState::new();
        game.drop_ball();
        while !game.game_over() {
            game.tick();
        }

        let terminal = game.snapshot();
        game.drop_ball();
        assert_eq!(game.snapshot(), terminal);
    }

    #[test]
    fn test_reset_replaces_terminal_state() {
        let mut game = GameState::new();
        game.drop_ball();
        while !game.game_over() {
            game.tick();
        }

        game.reset();
        assert_eq!(game.snapshot(), GameState::new().snapshot());
    }

    #[test]
    fn test_apply_action_maps_to_operations() {
        let mut game = GameState::new();
        game.apply_action(GameAction::Drop);
        assert!(game.snapshot().is_falling);

        game.apply_action(GameAction::Restart);
        assert!(game.snapshot().is_moving);
        assert!(game.can_drop());
    }
}
