#![cfg(feature = "std")]

use minimax_rank::{GameStatus, Mark, Move};

#[test]
fn move_and_status_serialize_as_json() {
    let mv = Move::new(2, 0);
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(json, r#"{"row":2,"col":0}"#);
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mv);

    let status = GameStatus::Won(Mark::X);
    let json = serde_json::to_value(status).unwrap();
    assert_eq!(json, serde_json::json!({ "Won": "X" }));
}
