use thiserror::Error;

use crate::types::TransformType;

/// Puzzle generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid puzzle date '{date}': expected YYYY-MM-DD")]
    InvalidDate { date: String },
}

/// Reasons a move is refused by a play session
///
/// A refused move is not counted against the move cap.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Transform {} cannot be applied to the current shape", .0.as_str())]
    NotApplicable(TransformType),

    #[error("Move limit of {limit} reached")]
    OutOfMoves { limit: u32 },

    #[error("Time is up")]
    TimeUp,

    #[error("Session already finished")]
    Finished,
}

/// Input parsing errors at the caller boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown transform '{token}'")]
    UnknownTransform { token: String },
}
