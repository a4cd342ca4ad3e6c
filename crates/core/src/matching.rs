//! Shape equivalence - symmetry-aware win detection
//!
//! Two states match when they would be drawn identically. Rotation is reduced
//! modulo each kind's rotational symmetry, and flips are dropped for kinds that
//! are mirror-symmetric at every reachable rotation.
//!
//! The generator's "did this move change anything" check uses plain `==`
//! instead; see [`crate::generator`].

use crate::types::{ShapeState, ShapeType, FULL_TURN};

/// Maximum scale difference treated as equal.
pub const SCALE_TOLERANCE: f64 = 0.005;

/// Degrees after which the outline repeats.
pub fn rotational_symmetry(kind: ShapeType) -> u16 {
    match kind {
        ShapeType::Triangle => 120,
        ShapeType::Square => 90,
        ShapeType::Hexagon => 60,
        ShapeType::Pentagon | ShapeType::Star | ShapeType::Arrow => FULL_TURN,
    }
}

/// Whether flips are invisible for this kind.
pub fn is_mirror_symmetric(kind: ShapeType) -> bool {
    matches!(kind, ShapeType::Square | ShapeType::Hexagon)
}

/// Canonical representative: rotation reduced, flips cleared where invisible.
pub fn normalize(shape: &ShapeState) -> ShapeState {
    let mut out = *shape;
    out.rotation = shape.rotation % rotational_symmetry(shape.kind);
    if is_mirror_symmetric(shape.kind) {
        out.flipped_h = false;
        out.flipped_v = false;
    }
    out
}

/// Whether `a` and `b` are visually indistinguishable
pub fn matches(a: &ShapeState, b: &ShapeState) -> bool {
    if a.kind != b.kind || a.color_index != b.color_index {
        return false;
    }
    if (a.scale - b.scale).abs() > SCALE_TOLERANCE {
        return false;
    }

    let a = normalize(a);
    let b = normalize(b);
    a.flipped_h == b.flipped_h && a.flipped_v == b.flipped_v && a.rotation == b.rotation
}
