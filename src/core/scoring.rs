//! Scoring module - tiered distance-to-target scoring
//!
//! The score is a deliberately discontinuous step function of the ball's
//! final horizontal position, not a continuous falloff. Thresholds are
//! inclusive and checked tightest-first, so a landing exactly on a tier
//! boundary earns the higher score.

use crate::types::{SCORE_TIERS, TARGET_CENTER_X};

/// Score for a ball that landed at horizontal position `ball_x`.
pub fn score_for(ball_x: f32) -> u32 {
    let distance = (ball_x - TARGET_CENTER_X).abs();
    for &(max_distance, points) in SCORE_TIERS.iter() {
        if distance <= max_distance {
            return points;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullseye() {
        assert_eq!(score_for(50.0), 100);
        assert_eq!(score_for(51.0), 100);
        assert_eq!(score_for(49.0), 100);
    }

    #[test]
    fn test_tier_table() {
        assert_eq!(score_for(52.0), 75);
        assert_eq!(score_for(55.0), 50);
        assert_eq!(score_for(58.0), 25);
        assert_eq!(score_for(59.0), 0);

        // Mirrored on the left side of the target.
        assert_eq!(score_for(48.0), 75);
        assert_eq!(score_for(45.0), 50);
        assert_eq!(score_for(42.0), 25);
        assert_eq!(score_for(41.0), 0);
    }

    #[test]
    fn test_inclusive_boundaries_resolve_to_tighter_tier() {
        // distance == 1.0 is tier 100, not 75; same pattern down the table.
        assert_eq!(score_for(51.0), 100);
        assert_eq!(score_for(52.0), 75);
        assert_eq!(score_for(55.0), 50);
        assert_eq!(score_for(58.0), 25);
    }

    #[test]
    fn test_far_misses_score_zero() {
        assert_eq!(score_for(0.0), 0);
        assert_eq!(score_for(100.0), 0);
        assert_eq!(score_for(58.5), 0);
    }
}
