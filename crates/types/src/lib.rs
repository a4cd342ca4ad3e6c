//! Core types module - shared data structures and constants
//!
//! This crate defines the value types exchanged between the puzzle core and its
//! callers (server handlers, client previews, the CLI). Everything here is plain
//! data with stable JSON field names, so a `Puzzle` serialized by one side can be
//! read back by the other.
//!
//! # Shapes
//!
//! | Kind | Sides | On morph ladder |
//! |------|-------|-----------------|
//! | `triangle` | 3 | yes (bottom) |
//! | `square` | 4 | yes |
//! | `pentagon` | 5 | yes |
//! | `hexagon` | 6 | yes (top) |
//! | `star` | - | no |
//! | `arrow` | - | no |
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_MOVES` | 5 | Hard move cap per attempt |
//! | `TIME_LIMIT_SECS` | 30 | Countdown length |
//! | `ROTATION_STEP` | 90 | Degrees per rotate move |
//! | `SHARE_MOVE_LIMIT` | 8 | Moves rendered in share text |
//!
//! # Examples
//!
//! ```
//! use shapeswifter_types::{ShapeState, ShapeType, TransformType, MORPHABLE_SHAPES};
//!
//! let shape = ShapeState::new(ShapeType::Square, 2);
//! assert_eq!(shape.rotation, 0);
//! assert_eq!(shape.color(), Some("#FFE66D"));
//!
//! assert_eq!(TransformType::from_str("rotate_cw"), Some(TransformType::RotateCw));
//! assert_eq!(MORPHABLE_SHAPES[0], ShapeType::Triangle);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hard move cap enforced per attempt.
pub const MAX_MOVES: u32 = 5;

/// Countdown length in seconds.
pub const TIME_LIMIT_SECS: u32 = 30;

/// Degrees added or removed by a single rotate move.
pub const ROTATION_STEP: u16 = 90;

/// One full turn in degrees.
pub const FULL_TURN: u16 = 360;

/// Number of moves rendered as emoji in share text.
pub const SHARE_MOVE_LIMIT: usize = 8;

/// Fixed colour palette; `ShapeState::color_index` indexes into it.
pub const SHAPE_COLORS: [&str; 6] = [
    "#FF6B6B", "#4ECDC4", "#FFE66D", "#A29BFE", "#55EFC4", "#FD79A8",
];

/// Every shape kind, in declaration order.
pub const SHAPE_TYPES: [ShapeType; 6] = [
    ShapeType::Triangle,
    ShapeType::Square,
    ShapeType::Pentagon,
    ShapeType::Hexagon,
    ShapeType::Star,
    ShapeType::Arrow,
];

/// The morph ladder: `morph_up` climbs one rung, `morph_down` descends one.
pub const MORPHABLE_SHAPES: [ShapeType; 4] = [
    ShapeType::Triangle,
    ShapeType::Square,
    ShapeType::Pentagon,
    ShapeType::Hexagon,
];

/// Polygon kinds a shape can take
///
/// Star and arrow are display-only: they exist in the data model but never
/// appear on the morph ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
    Star,
    Arrow,
}

impl ShapeType {
    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeswifter_types::ShapeType;
    ///
    /// assert_eq!(ShapeType::from_str("Hexagon"), Some(ShapeType::Hexagon));
    /// assert_eq!(ShapeType::from_str("octagon"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "triangle" => Some(ShapeType::Triangle),
            "square" => Some(ShapeType::Square),
            "pentagon" => Some(ShapeType::Pentagon),
            "hexagon" => Some(ShapeType::Hexagon),
            "star" => Some(ShapeType::Star),
            "arrow" => Some(ShapeType::Arrow),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Triangle => "triangle",
            ShapeType::Square => "square",
            ShapeType::Pentagon => "pentagon",
            ShapeType::Hexagon => "hexagon",
            ShapeType::Star => "star",
            ShapeType::Arrow => "arrow",
        }
    }

    /// Side count for ladder polygons; `None` for star and arrow.
    pub fn sides(&self) -> Option<u8> {
        match self {
            ShapeType::Triangle => Some(3),
            ShapeType::Square => Some(4),
            ShapeType::Pentagon => Some(5),
            ShapeType::Hexagon => Some(6),
            ShapeType::Star | ShapeType::Arrow => None,
        }
    }

    /// Position on the morph ladder, if the kind is on it.
    pub fn ladder_index(&self) -> Option<usize> {
        MORPHABLE_SHAPES.iter().position(|kind| kind == self)
    }
}

/// Visual state of the player's shape
///
/// Replaced wholesale on every move; never mutated in place by the core.
/// Deserializing rejects states no sequence of moves can reach (see
/// [`ShapeState::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawShapeState")]
pub struct ShapeState {
    #[serde(rename = "type")]
    pub kind: ShapeType,
    /// Degrees, always a multiple of 90 in [0, 360).
    pub rotation: u16,
    pub scale: f64,
    pub flipped_h: bool,
    pub flipped_v: bool,
    /// Index into [`SHAPE_COLORS`].
    pub color_index: u8,
}

impl ShapeState {
    /// Unrotated, unflipped shape at unit scale.
    pub fn new(kind: ShapeType, color_index: u8) -> Self {
        Self {
            kind,
            rotation: 0,
            scale: 1.0,
            flipped_h: false,
            flipped_v: false,
            color_index,
        }
    }

    /// Hex colour from the palette, `None` if the index is out of range.
    pub fn color(&self) -> Option<&'static str> {
        SHAPE_COLORS.get(self.color_index as usize).copied()
    }

    /// Check the fields a client or store could have corrupted
    pub fn validate(&self) -> Result<(), InvalidShape> {
        if self.rotation >= FULL_TURN || self.rotation % ROTATION_STEP != 0 {
            return Err(InvalidShape::Rotation(self.rotation));
        }
        if self.color().is_none() {
            return Err(InvalidShape::ColorIndex(self.color_index));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(InvalidShape::Scale(self.scale));
        }
        Ok(())
    }
}

/// Why a deserialized [`ShapeState`] was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidShape {
    Rotation(u16),
    ColorIndex(u8),
    Scale(f64),
}

impl fmt::Display for InvalidShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidShape::Rotation(r) => {
                write!(f, "rotation {r} is not a multiple of {ROTATION_STEP} below {FULL_TURN}")
            }
            InvalidShape::ColorIndex(i) => {
                write!(f, "color index {i} is outside the {}-colour palette", SHAPE_COLORS.len())
            }
            InvalidShape::Scale(s) => write!(f, "scale {s} must be finite and positive"),
        }
    }
}

impl std::error::Error for InvalidShape {}

/// Wire form of [`ShapeState`], before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShapeState {
    #[serde(rename = "type")]
    kind: ShapeType,
    rotation: u16,
    scale: f64,
    flipped_h: bool,
    flipped_v: bool,
    color_index: u8,
}

impl TryFrom<RawShapeState> for ShapeState {
    type Error = InvalidShape;

    fn try_from(raw: RawShapeState) -> Result<Self, Self::Error> {
        let shape = ShapeState {
            kind: raw.kind,
            rotation: raw.rotation,
            scale: raw.scale,
            flipped_h: raw.flipped_h,
            flipped_v: raw.flipped_v,
            color_index: raw.color_index,
        };
        shape.validate()?;
        Ok(shape)
    }
}

/// Player moves
///
/// The set is closed; every transform has an inverse (see the core crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformType {
    /// Rotate 90° clockwise
    RotateCw,
    /// Rotate 90° counter-clockwise
    RotateCcw,
    /// Mirror across the vertical axis
    FlipH,
    /// Mirror across the horizontal axis
    FlipV,
    /// Add a side (one rung up the morph ladder)
    MorphUp,
    /// Cut a side (one rung down the morph ladder)
    MorphDown,
}

impl TransformType {
    /// All transforms, in control-panel order.
    pub const ALL: [TransformType; 6] = [
        TransformType::RotateCw,
        TransformType::RotateCcw,
        TransformType::FlipH,
        TransformType::FlipV,
        TransformType::MorphUp,
        TransformType::MorphDown,
    ];

    /// Parse transform token (case-insensitive, wire names)
    ///
    /// # Examples
    ///
    /// ```
    /// use shapeswifter_types::TransformType;
    ///
    /// assert_eq!(TransformType::from_str("flip_h"), Some(TransformType::FlipH));
    /// assert_eq!(TransformType::from_str("MORPH_UP"), Some(TransformType::MorphUp));
    /// assert_eq!(TransformType::from_str("scale_up"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate_cw" => Some(TransformType::RotateCw),
            "rotate_ccw" => Some(TransformType::RotateCcw),
            "flip_h" => Some(TransformType::FlipH),
            "flip_v" => Some(TransformType::FlipV),
            "morph_up" => Some(TransformType::MorphUp),
            "morph_down" => Some(TransformType::MorphDown),
            _ => None,
        }
    }

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformType::RotateCw => "rotate_cw",
            TransformType::RotateCcw => "rotate_ccw",
            TransformType::FlipH => "flip_h",
            TransformType::FlipV => "flip_v",
            TransformType::MorphUp => "morph_up",
            TransformType::MorphDown => "morph_down",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            TransformType::RotateCw => "Rotate CW",
            TransformType::RotateCcw => "Rotate CCW",
            TransformType::FlipH => "Flip H",
            TransformType::FlipV => "Flip V",
            TransformType::MorphUp => "Add Side",
            TransformType::MorphDown => "Cut Side",
        }
    }

    /// Glyph used in share text.
    pub fn emoji(&self) -> &'static str {
        match self {
            TransformType::RotateCw => "🔄",
            TransformType::RotateCcw => "🔃",
            TransformType::FlipH => "↔️",
            TransformType::FlipV => "↕️",
            TransformType::MorphUp => "➕",
            TransformType::MorphDown => "✂️",
        }
    }

    pub fn category(&self) -> TransformCategory {
        match self {
            TransformType::RotateCw | TransformType::RotateCcw => TransformCategory::Rotation,
            TransformType::FlipH | TransformType::FlipV => TransformCategory::Flip,
            TransformType::MorphUp | TransformType::MorphDown => TransformCategory::Morph,
        }
    }
}

/// Move families the generator draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformCategory {
    Rotation,
    Flip,
    Morph,
}

impl TransformCategory {
    /// Canonical order before shuffling.
    pub const ALL: [TransformCategory; 3] = [
        TransformCategory::Rotation,
        TransformCategory::Flip,
        TransformCategory::Morph,
    ];

    /// The two transforms in this family.
    pub fn transforms(&self) -> [TransformType; 2] {
        match self {
            TransformCategory::Rotation => [TransformType::RotateCw, TransformType::RotateCcw],
            TransformCategory::Flip => [TransformType::FlipH, TransformType::FlipV],
            TransformCategory::Morph => [TransformType::MorphUp, TransformType::MorphDown],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformCategory::Rotation => "rotation",
            TransformCategory::Flip => "flip",
            TransformCategory::Morph => "morph",
        }
    }
}

/// One day's puzzle
///
/// Generated once per date and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// `YYYY-MM-DD`, also the generator seed.
    pub id: String,
    /// Days since launch; launch day is day 1.
    pub day_number: i64,
    pub start_shape: ShapeState,
    pub target_shape: ShapeState,
    /// Length of the generator's forward path (an upper bound on the shortest solution).
    pub optimal_moves: u32,
    pub max_moves: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_ordered_by_sides() {
        let sides: Vec<u8> = MORPHABLE_SHAPES.iter().filter_map(|k| k.sides()).collect();
        assert_eq!(sides, vec![3, 4, 5, 6]);
        assert_eq!(ShapeType::Star.ladder_index(), None);
        assert_eq!(ShapeType::Arrow.ladder_index(), None);
        assert_eq!(ShapeType::Pentagon.ladder_index(), Some(2));
    }

    #[test]
    fn test_every_transform_round_trips_its_wire_name() {
        for t in TransformType::ALL {
            assert_eq!(TransformType::from_str(t.as_str()), Some(t));
        }
        for kind in SHAPE_TYPES {
            assert_eq!(ShapeType::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_categories_partition_the_transforms() {
        for category in TransformCategory::ALL {
            for t in category.transforms() {
                assert_eq!(t.category(), category);
            }
        }
    }

    #[test]
    fn test_shape_state_uses_wire_field_names() {
        let shape = ShapeState::new(ShapeType::Triangle, 4);
        let v = serde_json::to_value(shape).unwrap();
        assert_eq!(v["type"], "triangle");
        assert_eq!(v["rotation"], 0);
        assert_eq!(v["flippedH"], false);
        assert_eq!(v["flippedV"], false);
        assert_eq!(v["colorIndex"], 4);
        assert_eq!(v["scale"], 1.0);
    }

    #[test]
    fn test_puzzle_uses_wire_field_names() {
        let start = ShapeState::new(ShapeType::Square, 0);
        let puzzle = Puzzle {
            id: "2026-02-01".to_string(),
            day_number: 2,
            start_shape: start,
            target_shape: start,
            optimal_moves: 3,
            max_moves: 12,
        };
        let json = serde_json::to_string(&puzzle).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        for key in ["id", "dayNumber", "startShape", "targetShape", "optimalMoves", "maxMoves"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, puzzle);
    }

    #[test]
    fn test_transform_serializes_as_snake_case() {
        let v = serde_json::to_value(TransformType::MorphDown).unwrap();
        assert_eq!(v, "morph_down");
        let t: TransformType = serde_json::from_str("\"rotate_ccw\"").unwrap();
        assert_eq!(t, TransformType::RotateCcw);
    }

    #[test]
    fn test_out_of_range_color_has_no_hex() {
        let shape = ShapeState::new(ShapeType::Star, 6);
        assert_eq!(shape.color(), None);
    }

    fn shape_json(rotation: u16, color_index: u8) -> String {
        format!(
            r#"{{"type":"square","rotation":{rotation},"scale":1,"flippedH":false,"flippedV":true,"colorIndex":{color_index}}}"#
        )
    }

    #[test]
    fn test_deserialize_accepts_reachable_states() {
        for rotation in [0, 90, 180, 270] {
            let shape: ShapeState = serde_json::from_str(&shape_json(rotation, 5)).unwrap();
            assert_eq!(shape.rotation, rotation);
            assert!(shape.flipped_v);
            assert_eq!(shape.scale, 1.0);
        }
    }

    #[test]
    fn test_deserialize_rejects_unreachable_states() {
        for (rotation, color_index) in [(65500, 0), (360, 0), (45, 0), (90, 6), (0, 255)] {
            let result = serde_json::from_str::<ShapeState>(&shape_json(rotation, color_index));
            assert!(result.is_err(), "rotation {rotation} colour {color_index}");
        }
        let zero_scale = r#"{"type":"star","rotation":0,"scale":0,"flippedH":false,"flippedV":false,"colorIndex":0}"#;
        assert!(serde_json::from_str::<ShapeState>(zero_scale).is_err());
    }

    #[test]
    fn test_puzzle_with_bad_shape_is_rejected() {
        let json = format!(
            r#"{{"id":"2026-02-01","dayNumber":2,"startShape":{},"targetShape":{},"optimalMoves":3,"maxMoves":12}}"#,
            shape_json(0, 1),
            shape_json(45, 1)
        );
        let err = serde_json::from_str::<Puzzle>(&json).unwrap_err();
        assert!(err.to_string().contains("rotation 45"));
    }

    #[test]
    fn test_validate_reports_field() {
        let mut shape = ShapeState::new(ShapeType::Hexagon, 0);
        assert_eq!(shape.validate(), Ok(()));
        shape.rotation = 30;
        assert_eq!(shape.validate(), Err(InvalidShape::Rotation(30)));
        shape.rotation = 0;
        shape.color_index = 7;
        assert_eq!(shape.validate(), Err(InvalidShape::ColorIndex(7)));
    }
}
