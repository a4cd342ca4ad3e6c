//! Difference hints - what still separates the current shape from the target
//!
//! Hints compare raw fields, not the symmetry-normalised ones, and never
//! mention colour (no move changes it).

use std::fmt;

use crate::types::{ShapeState, FULL_TURN};

/// One visible difference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Target has this many more sides.
    AddSides(u8),
    /// Target has this many fewer sides.
    CutSides(u8),
    /// Quarter-turn rotation (either direction) away.
    Rotate,
    /// Half turn away.
    RotateTwice,
    FlipH,
    FlipV,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::AddSides(n) => write!(f, "⬡ +{n} sides"),
            Hint::CutSides(n) => write!(f, "△ -{n} sides"),
            Hint::Rotate => write!(f, "↻ Rotate"),
            Hint::RotateTwice => write!(f, "↻ Rotate ×2"),
            Hint::FlipH => write!(f, "⇆ Flip H"),
            Hint::FlipV => write!(f, "⇅ Flip V"),
        }
    }
}

/// List the differences between `current` and `target`, in display order
///
/// Side-count hints only appear when both kinds are polygons on the morph
/// ladder; star and arrow get none.
pub fn difference_hints(current: &ShapeState, target: &ShapeState) -> Vec<Hint> {
    let mut hints = Vec::new();

    if current.kind != target.kind {
        if let (Some(have), Some(want)) = (current.kind.sides(), target.kind.sides()) {
            if want > have {
                hints.push(Hint::AddSides(want - have));
            } else {
                hints.push(Hint::CutSides(have - want));
            }
        }
    }

    if current.rotation != target.rotation {
        let diff = (target.rotation % FULL_TURN + FULL_TURN - current.rotation % FULL_TURN)
            % FULL_TURN;
        match diff {
            90 | 270 => hints.push(Hint::Rotate),
            180 => hints.push(Hint::RotateTwice),
            _ => {}
        }
    }

    if current.flipped_h != target.flipped_h {
        hints.push(Hint::FlipH);
    }
    if current.flipped_v != target.flipped_v {
        hints.push(Hint::FlipV);
    }

    hints
}
