//! Transform algebra - legal moves and their effect on a shape
//!
//! Every function here is pure and total over the closed `TransformType` set.
//! `apply` returns a new state; fields a transform does not touch are copied.

use crate::error::ParseError;
use crate::types::{ShapeState, ShapeType, TransformType, FULL_TURN, MORPHABLE_SHAPES, ROTATION_STEP};

/// Whether `transform` has an effect on `shape`
///
/// Only morphs can be blocked: at either end of the ladder, or for kinds that
/// are not on it at all.
pub fn can_apply(shape: &ShapeState, transform: TransformType) -> bool {
    match transform {
        TransformType::MorphUp => morph_target(shape.kind, 1).is_some(),
        TransformType::MorphDown => morph_target(shape.kind, -1).is_some(),
        _ => true,
    }
}

/// Apply a transform, returning the new state
///
/// A blocked morph returns the shape unchanged.
pub fn apply(shape: &ShapeState, transform: TransformType) -> ShapeState {
    let mut next = *shape;
    match transform {
        TransformType::RotateCw => {
            next.rotation = (shape.rotation % FULL_TURN + ROTATION_STEP) % FULL_TURN
        }
        TransformType::RotateCcw => {
            next.rotation = (shape.rotation % FULL_TURN + FULL_TURN - ROTATION_STEP) % FULL_TURN
        }
        TransformType::FlipH => next.flipped_h = !shape.flipped_h,
        TransformType::FlipV => next.flipped_v = !shape.flipped_v,
        TransformType::MorphUp => {
            if let Some(kind) = morph_target(shape.kind, 1) {
                next.kind = kind;
            }
        }
        TransformType::MorphDown => {
            if let Some(kind) = morph_target(shape.kind, -1) {
                next.kind = kind;
            }
        }
    }
    next
}

/// Apply only when legal; `None` when `can_apply` rejects the move.
pub fn try_apply(shape: &ShapeState, transform: TransformType) -> Option<ShapeState> {
    if can_apply(shape, transform) {
        Some(apply(shape, transform))
    } else {
        None
    }
}

/// The move that undoes `transform`
pub fn inverse(transform: TransformType) -> TransformType {
    match transform {
        TransformType::RotateCw => TransformType::RotateCcw,
        TransformType::RotateCcw => TransformType::RotateCw,
        TransformType::FlipH => TransformType::FlipH,
        TransformType::FlipV => TransformType::FlipV,
        TransformType::MorphUp => TransformType::MorphDown,
        TransformType::MorphDown => TransformType::MorphUp,
    }
}

/// Fold a move list over a start state, skipping blocked moves.
pub fn apply_all(start: &ShapeState, transforms: &[TransformType]) -> ShapeState {
    transforms
        .iter()
        .fold(*start, |shape, &t| try_apply(&shape, t).unwrap_or(shape))
}

/// Parse a move list such as `"rotate_cw, flip_h morph_up"`
///
/// Tokens are separated by commas or whitespace; empty input is an empty list.
pub fn parse_moves(input: &str) -> Result<Vec<TransformType>, ParseError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            TransformType::from_str(token).ok_or_else(|| ParseError::UnknownTransform {
                token: token.to_string(),
            })
        })
        .collect()
}

fn morph_target(kind: ShapeType, step: isize) -> Option<ShapeType> {
    let index = kind.ladder_index()? as isize + step;
    if index < 0 {
        return None;
    }
    MORPHABLE_SHAPES.get(index as usize).copied()
}
