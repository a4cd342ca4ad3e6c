//! Core puzzle logic - pure, deterministic, and testable
//!
//! Everything a daily shape puzzle needs lives here, with **no I/O**: no
//! clock, no network, no storage. Callers pass in dates and elapsed seconds.
//!
//! - **Deterministic**: the same date string yields the same puzzle on every platform
//! - **Portable**: the only inputs are strings and integers
//!
//! # Module Structure
//!
//! - [`rng`]: string-seeded LCG shared by every consumer
//! - [`transform`]: the six moves and their effect on a shape
//! - [`matching`]: symmetry-aware shape equivalence
//! - [`generator`]: date to puzzle, via a random walk from the start shape
//! - [`scoring`]: points and stars for a solve
//! - [`session`]: one player's attempt, with move cap, timer, and undo
//! - [`hints`]: visible differences between two shapes
//! - [`share`]: the spoiler-free result card
//! - [`stats`]: streak bookkeeping
//!
//! # Example
//!
//! ```
//! use shapeswifter_core::{generate, PlaySession, SessionRules, SessionStatus};
//! use shapeswifter_core::types::TransformType;
//!
//! let puzzle = generate("2026-02-01").unwrap();
//! assert_eq!(puzzle.optimal_moves, 5);
//!
//! let mut session = PlaySession::new(puzzle, SessionRules::default());
//! session.apply(TransformType::MorphUp).unwrap();
//! assert_eq!(session.status(), SessionStatus::Playing);
//! ```

pub mod error;
pub mod generator;
pub mod hints;
pub mod matching;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod share;
pub mod stats;
pub mod transform;

pub use shapeswifter_types as types;

// Re-export commonly used items for convenience
pub use error::{MoveError, ParseError, PuzzleError};
pub use generator::{day_number, generate, generate_detailed, GeneratedPuzzle};
pub use hints::{difference_hints, Hint};
pub use matching::matches;
pub use rng::{hash_seed, SeededRandom};
pub use scoring::{calculate_score, ScoreResult};
pub use session::{LossReason, PlaySession, ScoreSubmission, SessionRules, SessionStatus};
pub use share::{format_time, share_text, ShareCard};
pub use stats::PlayerStats;
pub use transform::{apply, can_apply, inverse, parse_moves};
