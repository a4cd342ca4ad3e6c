//! Player stats - streak bookkeeping after a completed puzzle
//!
//! Storage belongs to the caller; this module only decides how the numbers
//! move when a result comes in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::generator::parse_date;

/// Long-lived per-player counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub visitor_id: String,
    pub username: String,
    pub streak: u32,
    pub best_streak: u32,
    pub games_played: u32,
    pub total_stars: u32,
    /// `YYYY-MM-DD` of the last completed puzzle.
    pub last_played_date: Option<String>,
}

impl PlayerStats {
    /// Fresh stats for a first-time player
    pub fn new(visitor_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            visitor_id: visitor_id.into(),
            username: username.into(),
            streak: 0,
            best_streak: 0,
            games_played: 0,
            total_stars: 0,
            last_played_date: None,
        }
    }

    /// Fold a completed puzzle on `date` into the counters
    ///
    /// The streak grows when the previous completion was the day before,
    /// holds when it was the same day, and restarts at 1 otherwise.
    pub fn record_completion(&mut self, date: &str, stars: u8) -> Result<(), PuzzleError> {
        let today = parse_date(date)?;
        let last = self
            .last_played_date
            .as_deref()
            .and_then(|d| parse_date(d).ok());

        self.streak = match last {
            Some(last) if Some(last) == today.pred_opt() => self.streak.saturating_add(1),
            Some(last) if last == today => self.streak.max(1),
            _ => 1,
        };
        self.best_streak = self.best_streak.max(self.streak);
        self.games_played = self.games_played.saturating_add(1);
        self.total_stars = self.total_stars.saturating_add(u32::from(stars));
        self.last_played_date = Some(date.to_string());
        Ok(())
    }

    /// Whether the stored streak is still alive on `today`
    pub fn streak_is_current(&self, today: NaiveDate) -> bool {
        let Some(last) = self
            .last_played_date
            .as_deref()
            .and_then(|d| parse_date(d).ok())
        else {
            return false;
        };
        last == today || Some(last) == today.pred_opt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_completion_starts_streak() {
        let mut stats = PlayerStats::new("t2_abc", "solver");
        stats.record_completion("2026-02-01", 3).unwrap();
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.total_stars, 3);
        assert_eq!(stats.last_played_date.as_deref(), Some("2026-02-01"));
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let mut stats = PlayerStats::new("v", "u");
        for (date, stars) in [("2026-02-27", 1), ("2026-02-28", 2), ("2026-03-01", 3)] {
            stats.record_completion(date, stars).unwrap();
        }
        assert_eq!(stats.streak, 3);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.total_stars, 6);
    }

    #[test]
    fn test_gap_resets_streak_but_keeps_best() {
        let mut stats = PlayerStats::new("v", "u");
        stats.record_completion("2026-02-01", 3).unwrap();
        stats.record_completion("2026-02-02", 3).unwrap();
        stats.record_completion("2026-02-05", 1).unwrap();
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.games_played, 3);
    }

    #[test]
    fn test_same_day_replay_holds_streak() {
        let mut stats = PlayerStats::new("v", "u");
        stats.record_completion("2026-02-01", 3).unwrap();
        stats.record_completion("2026-02-02", 3).unwrap();
        stats.record_completion("2026-02-02", 2).unwrap();
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.games_played, 3);
    }

    #[test]
    fn test_bad_date_leaves_stats_untouched() {
        let mut stats = PlayerStats::new("v", "u");
        let before = stats.clone();
        assert!(stats.record_completion("02/01/2026", 3).is_err());
        assert_eq!(stats, before);
    }

    #[test]
    fn test_streak_currency() {
        let mut stats = PlayerStats::new("v", "u");
        let day = |s| parse_date(s).unwrap();
        assert!(!stats.streak_is_current(day("2026-02-01")));
        stats.record_completion("2026-02-01", 3).unwrap();
        assert!(stats.streak_is_current(day("2026-02-01")));
        assert!(stats.streak_is_current(day("2026-02-02")));
        assert!(!stats.streak_is_current(day("2026-02-03")));
    }

    #[test]
    fn test_stats_use_wire_field_names() {
        let v = serde_json::to_value(PlayerStats::new("v", "u")).unwrap();
        assert_eq!(v["visitorId"], "v");
        assert_eq!(v["bestStreak"], 0);
        assert!(v["lastPlayedDate"].is_null());
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = PlayerStats {
            streak: u32::MAX,
            best_streak: u32::MAX,
            games_played: u32::MAX,
            total_stars: u32::MAX - 1,
            last_played_date: Some("2026-02-01".to_string()),
            ..PlayerStats::new("v", "u")
        };
        stats.record_completion("2026-02-02", 3).unwrap();
        assert_eq!(stats.streak, u32::MAX);
        assert_eq!(stats.best_streak, u32::MAX);
        assert_eq!(stats.games_played, u32::MAX);
        assert_eq!(stats.total_stars, u32::MAX);
    }
}
