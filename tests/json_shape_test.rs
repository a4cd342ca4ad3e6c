//! Wire field names for the values callers persist or send to clients

use shapeswifter::core::{generate, PlayerStats, PlaySession, SessionRules};
use shapeswifter::types::{Puzzle, TransformType};

#[test]
fn puzzle_json_uses_client_field_names() {
    let puzzle = generate("2026-02-01").unwrap();
    let v = serde_json::to_value(&puzzle).unwrap();

    assert_eq!(v["id"], "2026-02-01");
    assert_eq!(v["dayNumber"], 2);
    assert_eq!(v["optimalMoves"], 5);
    assert_eq!(v["maxMoves"], 12);

    let start = &v["startShape"];
    assert_eq!(start["type"], "triangle");
    assert_eq!(start["rotation"], 0);
    assert_eq!(start["scale"], 1.0);
    assert_eq!(start["flippedH"], false);
    assert_eq!(start["colorIndex"], 0);

    let target = &v["targetShape"];
    assert_eq!(target["type"], "hexagon");
    assert_eq!(target["rotation"], 90);
    assert_eq!(target["flippedV"], true);
}

#[test]
fn puzzle_json_parses_back() {
    let puzzle = generate("2026-07-04").unwrap();
    let json = serde_json::to_string(&puzzle).unwrap();
    let back: Puzzle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, puzzle);
}

#[test]
fn submission_json_field_names() {
    let puzzle = generate("2026-03-15").unwrap();
    let mut session = PlaySession::new(puzzle, SessionRules::default());
    session.apply(TransformType::FlipH).unwrap();

    let v = serde_json::to_value(session.submission().unwrap()).unwrap();
    assert_eq!(v["score"], 1000);
    assert_eq!(v["moves"], 1);
    assert_eq!(v["time"], 0);
    assert_eq!(v["stars"], 3);
    assert_eq!(v["moveHistory"], serde_json::json!(["flip_h"]));
}

#[test]
fn stats_json_parses_stored_record() {
    let stored = r#"{"visitorId":"t2_x","username":"x","streak":3,"bestStreak":7,"gamesPlayed":20,"totalStars":41,"lastPlayedDate":"2026-03-01"}"#;
    let mut stats: PlayerStats = serde_json::from_str(stored).unwrap();
    stats.record_completion("2026-03-02", 3).unwrap();
    assert_eq!(stats.streak, 4);
    assert_eq!(stats.best_streak, 7);
    assert_eq!(stats.games_played, 21);
}
