//! Scoring module - points and star rating for a solved puzzle
//!
//! - Base score is 1000.
//! - Each move beyond the optimal count costs 50 points.
//! - Each second beyond a 30 second grace period costs 1 point.
//! - The score never drops below 100.
//!
//! Stars: 1 for any solve, 2 within two moves of optimal, 3 at or under optimal.

use serde::{Deserialize, Serialize};

/// Starting score before penalties.
pub const BASE_SCORE: u32 = 1000;

/// Penalty per move over optimal.
pub const EXTRA_MOVE_PENALTY: u32 = 50;

/// Seconds of play that cost nothing.
pub const TIME_GRACE_SECS: u32 = 30;

/// Lowest score a solve can earn.
pub const MIN_SCORE: u32 = 100;

/// Moves over optimal that still earn two stars.
pub const TWO_STAR_SLACK: u32 = 2;

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    /// 1 to 3.
    pub stars: u8,
}

/// Points lost to moves beyond `optimal_moves`
pub fn move_penalty(moves_used: u32, optimal_moves: u32) -> u32 {
    moves_used
        .saturating_sub(optimal_moves)
        .saturating_mul(EXTRA_MOVE_PENALTY)
}

/// Points lost to time beyond the grace period
pub fn time_penalty(time_secs: u32) -> u32 {
    time_secs.saturating_sub(TIME_GRACE_SECS)
}

/// Star rating for a solve
pub fn calculate_stars(moves_used: u32, optimal_moves: u32) -> u8 {
    if moves_used <= optimal_moves {
        3
    } else if moves_used <= optimal_moves.saturating_add(TWO_STAR_SLACK) {
        2
    } else {
        1
    }
}

/// Score and stars for a solve
pub fn calculate_score(moves_used: u32, time_secs: u32, optimal_moves: u32) -> ScoreResult {
    let score = BASE_SCORE
        .saturating_sub(move_penalty(moves_used, optimal_moves))
        .saturating_sub(time_penalty(time_secs))
        .max(MIN_SCORE);

    ScoreResult {
        score,
        stars: calculate_stars(moves_used, optimal_moves),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_fast_solve() {
        let result = calculate_score(3, 10, 3);
        assert_eq!(result, ScoreResult { score: 1000, stars: 3 });
    }

    #[test]
    fn test_fewer_than_optimal_not_penalized() {
        assert_eq!(calculate_score(2, 0, 3).score, 1000);
        assert_eq!(calculate_score(2, 0, 3).stars, 3);
    }

    #[test]
    fn test_extra_moves_penalty() {
        assert_eq!(calculate_score(4, 0, 3).score, 950);
        assert_eq!(calculate_score(5, 0, 3).score, 900);
    }

    #[test]
    fn test_time_grace_period() {
        assert_eq!(calculate_score(3, 30, 3).score, 1000);
        assert_eq!(calculate_score(3, 31, 3).score, 999);
        assert_eq!(calculate_score(3, 90, 3).score, 940);
    }

    #[test]
    fn test_combined_penalties() {
        // 2 extra moves (-100) and 45s (-15)
        assert_eq!(calculate_score(5, 45, 3).score, 885);
    }

    #[test]
    fn test_score_floor() {
        assert_eq!(calculate_score(100, 0, 3).score, MIN_SCORE);
        assert_eq!(calculate_score(3, 10_000, 3).score, MIN_SCORE);
        assert_eq!(calculate_score(u32::MAX, u32::MAX, 0).score, MIN_SCORE);
    }

    #[test]
    fn test_star_thresholds() {
        assert_eq!(calculate_stars(3, 3), 3);
        assert_eq!(calculate_stars(4, 3), 2);
        assert_eq!(calculate_stars(5, 3), 2);
        assert_eq!(calculate_stars(6, 3), 1);
        assert_eq!(calculate_stars(0, 0), 3);
    }

    #[test]
    fn test_monotonic_in_moves() {
        for time in [0, 30, 60, 600] {
            let mut last = u32::MAX;
            for moves in 0..40 {
                let score = calculate_score(moves, time, 4).score;
                assert!(score <= last);
                last = score;
            }
        }
    }

    #[test]
    fn test_monotonic_in_time() {
        for moves in [3, 5, 9] {
            let mut last = u32::MAX;
            for time in 0..1200 {
                let score = calculate_score(moves, time, 3).score;
                assert!(score <= last);
                last = score;
            }
        }
    }

    #[test]
    fn test_penalty_helpers() {
        assert_eq!(move_penalty(2, 5), 0);
        assert_eq!(move_penalty(7, 5), 100);
        assert_eq!(time_penalty(12), 0);
        assert_eq!(time_penalty(42), 12);
    }
}
