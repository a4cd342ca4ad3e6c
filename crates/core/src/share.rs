//! Share text - the spoiler-free result card players paste into comments

use crate::types::{TransformType, SHARE_MOVE_LIMIT};

/// Everything the share card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard<'a> {
    pub day_number: i64,
    pub stars: u8,
    pub moves: u32,
    pub optimal_moves: u32,
    pub streak: u32,
    pub move_history: &'a [TransformType],
}

/// Star glyphs: filled for earned stars, hollow for the rest of three.
pub fn star_string(stars: u8) -> String {
    let earned = stars.min(3) as usize;
    format!("{}{}", "⭐".repeat(earned), "☆".repeat(3 - earned))
}

/// Emoji for the first moves of a history, space separated.
pub fn move_emojis(moves: &[TransformType]) -> String {
    moves
        .iter()
        .take(SHARE_MOVE_LIMIT)
        .map(|t| t.emoji())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the full share text
pub fn share_text(card: &ShareCard<'_>) -> String {
    let perfect = if card.moves == card.optimal_moves {
        "✨ PERFECT"
    } else {
        ""
    };
    format!(
        "🔷 ShapeSwifter Day #{}\n{}\n{}\nMoves: {}/{} {}\n🔥 {} day streak\n\nPlay at reddit.com/r/ShapeSwifter",
        card.day_number,
        star_string(card.stars),
        move_emojis(card.move_history),
        card.moves,
        card.optimal_moves,
        perfect,
        card.streak,
    )
}

/// `MM:SS` for a number of seconds
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
