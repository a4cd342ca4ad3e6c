//! Puzzle generator - one solvable puzzle per calendar date
//!
//! The date string is the only input. It seeds a [`SeededRandom`], which picks
//! a start shape and walks it forward through a handful of legal transforms;
//! wherever the walk ends becomes the target. Every transform has an inverse,
//! so the target is always reachable, and the walk length is reported as the
//! "optimal" move count (an upper bound, never searched for minimality).
//!
//! # Draw order
//!
//! The order of RNG draws below is part of the output format. Changing it
//! changes every puzzle:
//!
//! 1. start rung on the morph ladder, then colour
//! 2. category count, then a Fisher-Yates shuffle of the three categories
//! 3. transform count
//! 4. coverage pass: one transform per selected category
//! 5. fill pass: random category, then random transform, at most
//!    [`FILL_ATTEMPTS`] times
//! 6. floor pass: fixed [`FALLBACK_TRANSFORMS`], no draws
//!
//! A move is kept only if it is legal and changes the state under plain
//! structural equality, not the symmetry-aware [`matches`](crate::matching::matches).

use arrayvec::ArrayVec;
use chrono::{Datelike, NaiveDate};
use log::{debug, trace};

use crate::error::PuzzleError;
use crate::rng::SeededRandom;
use crate::transform::try_apply;
use crate::types::{
    Puzzle, ShapeState, TransformCategory, TransformType, MORPHABLE_SHAPES, SHAPE_COLORS,
};

/// Launch date (2026-01-31, day 1) as days from the common era.
pub const EPOCH_DAYS_FROM_CE: i32 = 739_647;

/// Maximum random draws in the fill pass.
pub const FILL_ATTEMPTS: u32 = 20;

/// Applied in order when the random passes leave the path too short.
pub const FALLBACK_TRANSFORMS: [TransformType; 3] = [
    TransformType::RotateCw,
    TransformType::FlipH,
    TransformType::MorphUp,
];

/// Minimum path length the floor pass tries to reach.
pub const MIN_TRANSFORMS: usize = 3;

/// Upper end of the requested transform count.
pub const MAX_TRANSFORMS: usize = 5;

/// `max_moves` never drops below this.
pub const MIN_MAX_MOVES: u32 = 12;

/// Extra moves granted over the optimal count.
pub const MOVE_ALLOWANCE: u32 = 6;

const MIN_DIFFICULTY: i64 = 4;
const MAX_DIFFICULTY: i64 = 7;
const DAYS_PER_DIFFICULTY_STEP: i64 = 20;

/// A puzzle together with the path the generator took to build it
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPuzzle {
    pub puzzle: Puzzle,
    /// Transforms applied from start to target, in order.
    pub path: ArrayVec<TransformType, MAX_TRANSFORMS>,
    /// Categories selected for this puzzle, in shuffled order.
    pub selected_categories: Vec<TransformCategory>,
    /// Selected categories that the coverage pass actually used.
    pub used_categories: Vec<TransformCategory>,
    /// Transform count requested before the passes ran.
    pub requested_transforms: usize,
    /// Fill-pass draws consumed (at most [`FILL_ATTEMPTS`]).
    pub fill_attempts: u32,
}

/// Generate the puzzle for a `YYYY-MM-DD` date
///
/// Pure and deterministic: the same string always yields the same puzzle.
pub fn generate(date: &str) -> Result<Puzzle, PuzzleError> {
    generate_detailed(date).map(|generated| generated.puzzle)
}

/// Like [`generate`], but also returns the path and pass statistics
pub fn generate_detailed(date: &str) -> Result<GeneratedPuzzle, PuzzleError> {
    let day_number = day_number(date)?;
    let difficulty = base_difficulty(day_number);
    let mut rng = SeededRandom::new(date);

    let rung = rng.next_int(0, MORPHABLE_SHAPES.len() as i64 - 1) as usize;
    let color_index = rng.next_int(0, SHAPE_COLORS.len() as i64 - 1) as u8;
    let start_shape = ShapeState::new(MORPHABLE_SHAPES[rung], color_index);

    let category_count = rng.next_int(2, 3) as usize;
    let mut selected = rng.shuffled(&TransformCategory::ALL);
    selected.truncate(category_count);

    let max_requested = (MAX_TRANSFORMS as i64).min(difficulty + 2);
    let requested = rng.next_int(MIN_TRANSFORMS as i64, max_requested) as usize;

    let mut walk = Walk::new(start_shape);
    let mut used = Vec::with_capacity(selected.len());

    // Coverage pass
    for &category in &selected {
        if walk.len() >= requested {
            break;
        }
        let options = category.transforms();
        let Some(&transform) = rng.pick(&options) else {
            continue;
        };
        if walk.step(transform) {
            used.push(category);
        }
    }

    // Fill pass
    let mut fill_attempts = 0;
    while walk.len() < requested && fill_attempts < FILL_ATTEMPTS {
        fill_attempts += 1;
        let Some(&category) = rng.pick(&selected) else {
            break;
        };
        let options = category.transforms();
        let Some(&transform) = rng.pick(&options) else {
            continue;
        };
        if !walk.step(transform) {
            trace!("fill attempt {fill_attempts}: {} rejected", transform.as_str());
        }
    }

    // Floor pass
    for transform in FALLBACK_TRANSFORMS {
        if walk.len() >= MIN_TRANSFORMS {
            break;
        }
        walk.step(transform);
    }

    let optimal_moves = walk.len() as u32;
    let puzzle = Puzzle {
        id: date.to_string(),
        day_number,
        start_shape,
        target_shape: walk.shape,
        optimal_moves,
        max_moves: MIN_MAX_MOVES.max(optimal_moves + MOVE_ALLOWANCE),
    };

    debug!(
        "Generated puzzle: day={} transforms={:?} categories={:?} optimal={}",
        day_number,
        walk.path.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
        used.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        optimal_moves
    );

    Ok(GeneratedPuzzle {
        puzzle,
        path: walk.path,
        selected_categories: selected,
        used_categories: used,
        requested_transforms: requested,
        fill_attempts,
    })
}

/// Parse a strict `YYYY-MM-DD` date
pub fn parse_date(date: &str) -> Result<NaiveDate, PuzzleError> {
    if date.len() != 10 {
        return Err(PuzzleError::InvalidDate {
            date: date.to_string(),
        });
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| PuzzleError::InvalidDate {
        date: date.to_string(),
    })
}

/// Whole days since launch, plus one. Dates before launch give values <= 0.
pub fn day_number(date: &str) -> Result<i64, PuzzleError> {
    let date = parse_date(date)?;
    Ok(i64::from(date.num_days_from_ce() - EPOCH_DAYS_FROM_CE) + 1)
}

/// Difficulty step for a day: 4 at launch, +1 every 20 days, capped at 7
///
/// Days before launch count as day 0.
pub fn base_difficulty(day_number: i64) -> i64 {
    (MIN_DIFFICULTY + day_number.max(0) / DAYS_PER_DIFFICULTY_STEP).min(MAX_DIFFICULTY)
}

/// Forward walk from the start shape
struct Walk {
    shape: ShapeState,
    path: ArrayVec<TransformType, MAX_TRANSFORMS>,
}

impl Walk {
    fn new(start: ShapeState) -> Self {
        Self {
            shape: start,
            path: ArrayVec::new(),
        }
    }

    fn len(&self) -> usize {
        self.path.len()
    }

    /// Apply `transform` if legal and structurally non-trivial.
    fn step(&mut self, transform: TransformType) -> bool {
        if self.path.is_full() {
            return false;
        }
        match try_apply(&self.shape, transform) {
            Some(next) if next != self.shape => {
                self.shape = next;
                self.path.push(transform);
                true
            }
            _ => false,
        }
    }
}
