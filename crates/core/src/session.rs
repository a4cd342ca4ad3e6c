//! Play session - explicit state for one attempt at a puzzle
//!
//! The session owns the shape stack, the move history, the elapsed time and
//! the win/lose status. Callers feed it moves and clock readings; it never
//! reads the wall clock itself.
//!
//! Undo pops the shape stack instead of replaying an inverse transform, so
//! the restored state is exactly what was there before.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::hints::{difference_hints, Hint};
use crate::matching::matches;
use crate::scoring::{calculate_score, ScoreResult};
use crate::transform::{apply, can_apply};
use crate::types::{Puzzle, ShapeState, TransformType, MAX_MOVES, TIME_LIMIT_SECS};

/// Limits for one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRules {
    /// Moves allowed before the attempt is lost.
    pub max_moves: u32,
    /// Countdown length, started by the first move.
    pub time_limit_secs: u32,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            max_moves: MAX_MOVES,
            time_limit_secs: TIME_LIMIT_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    TimeUp,
    OutOfMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Playing,
    Won,
    Lost(LossReason),
}

impl SessionStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, SessionStatus::Playing)
    }
}

/// What the store persists for a solved puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub score: u32,
    pub moves: u32,
    pub time: u32,
    pub stars: u8,
    pub move_history: Vec<TransformType>,
}

/// One attempt at a puzzle
#[derive(Debug, Clone)]
pub struct PlaySession {
    puzzle: Puzzle,
    rules: SessionRules,
    /// Start shape at the bottom, current shape on top.
    shapes: Vec<ShapeState>,
    moves: Vec<TransformType>,
    started: bool,
    elapsed_secs: u32,
    status: SessionStatus,
}

impl PlaySession {
    pub fn new(puzzle: Puzzle, rules: SessionRules) -> Self {
        let shapes = vec![puzzle.start_shape];
        Self {
            puzzle,
            rules,
            shapes,
            moves: Vec::new(),
            started: false,
            elapsed_secs: 0,
            status: SessionStatus::Playing,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn rules(&self) -> SessionRules {
        self.rules
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Shape currently shown to the player
    pub fn current(&self) -> &ShapeState {
        self.shapes.last().unwrap_or(&self.puzzle.start_shape)
    }

    pub fn moves(&self) -> &[TransformType] {
        &self.moves
    }

    pub fn moves_used(&self) -> u32 {
        self.moves.len() as u32
    }

    /// Whether the countdown is running (set by the first accepted move).
    pub fn started(&self) -> bool {
        self.started
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn time_remaining(&self) -> u32 {
        self.rules.time_limit_secs.saturating_sub(self.elapsed_secs)
    }

    /// Whether the current shape matches the target
    pub fn is_match(&self) -> bool {
        matches(self.current(), &self.puzzle.target_shape)
    }

    /// Whether a control for `transform` should be enabled.
    pub fn can_apply(&self, transform: TransformType) -> bool {
        !self.status.is_finished()
            && self.moves_used() < self.rules.max_moves
            && can_apply(self.current(), transform)
    }

    /// Differences between the current shape and the target
    pub fn hints(&self) -> Vec<Hint> {
        difference_hints(self.current(), &self.puzzle.target_shape)
    }

    /// Apply a player move
    ///
    /// Refused moves leave the session untouched and do not count.
    pub fn apply(&mut self, transform: TransformType) -> Result<SessionStatus, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::Finished);
        }
        if self.started && self.time_remaining() == 0 {
            return Err(MoveError::TimeUp);
        }
        if self.moves_used() >= self.rules.max_moves {
            return Err(MoveError::OutOfMoves {
                limit: self.rules.max_moves,
            });
        }
        if !can_apply(self.current(), transform) {
            return Err(MoveError::NotApplicable(transform));
        }

        let next = apply(self.current(), transform);
        self.shapes.push(next);
        self.moves.push(transform);
        self.started = true;

        if self.is_match() {
            self.status = SessionStatus::Won;
        } else if self.moves_used() >= self.rules.max_moves {
            self.status = SessionStatus::Lost(LossReason::OutOfMoves);
        }

        debug!(
            "move {} {} -> {:?} ({:?})",
            self.moves_used(),
            transform.as_str(),
            next,
            self.status
        );
        Ok(self.status)
    }

    /// Take back the last move; `false` if there is none or the attempt is over
    pub fn undo(&mut self) -> bool {
        if self.status.is_finished() || self.moves.is_empty() {
            return false;
        }
        self.moves.pop();
        self.shapes.pop();
        debug!("undo -> {:?}", self.current());
        true
    }

    /// Start the countdown without making a move
    ///
    /// Normally the first accepted move starts it.
    pub fn start(&mut self) {
        if !self.status.is_finished() {
            self.started = true;
        }
    }

    /// Replay a recorded attempt that took `total_secs` in all
    ///
    /// The clock starts before the first move and move `i` of `n` lands at
    /// `total_secs * (i + 1) / n`, so the last one lands at `total_secs`.
    /// Refused moves are returned with their reason and do not stop the replay.
    pub fn replay(
        &mut self,
        moves: &[TransformType],
        total_secs: u32,
    ) -> Vec<(TransformType, MoveError)> {
        let mut rejected = Vec::new();
        let count = moves.len() as u64;
        self.start();

        for (i, &transform) in moves.iter().enumerate() {
            let at = u64::from(total_secs) * (i as u64 + 1) / count;
            if self.tick(at as u32).is_finished() {
                break;
            }
            match self.apply(transform) {
                Ok(status) if status.is_finished() => break,
                Ok(_) => {}
                Err(err) => rejected.push((transform, err)),
            }
        }
        self.tick(total_secs);
        rejected
    }

    /// Record seconds elapsed since the first move
    ///
    /// Ignored before the clock starts and after the attempt has ended. The
    /// clock never runs backwards.
    pub fn tick(&mut self, elapsed_secs: u32) -> SessionStatus {
        if !self.started || self.status.is_finished() {
            return self.status;
        }
        self.elapsed_secs = self.elapsed_secs.max(elapsed_secs);
        if self.time_remaining() == 0 {
            self.status = SessionStatus::Lost(LossReason::TimeUp);
            debug!("time up after {elapsed_secs}s");
        }
        self.status
    }

    /// Score for a won attempt, `None` otherwise
    pub fn result(&self) -> Option<ScoreResult> {
        if self.status != SessionStatus::Won {
            return None;
        }
        Some(calculate_score(
            self.moves_used(),
            self.elapsed_secs,
            self.puzzle.optimal_moves,
        ))
    }

    /// Submission payload for a won attempt, `None` otherwise
    pub fn submission(&self) -> Option<ScoreSubmission> {
        let result = self.result()?;
        Some(ScoreSubmission {
            score: result.score,
            moves: self.moves_used(),
            time: self.elapsed_secs,
            stars: result.stars,
            move_history: self.moves.clone(),
        })
    }
}
