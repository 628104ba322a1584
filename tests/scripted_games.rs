//! Replays scripted games and checks the move log they produce.

use serde::Deserialize;

use chess_match::board::{Coordinate, Game, Team};

#[derive(Deserialize)]
struct GameSet {
    games: Vec<ScriptedGame>,
}

#[derive(Deserialize)]
struct ScriptedGame {
    name: String,
    moves: String,
    log: Vec<String>,
    #[serde(default)]
    captured_white: usize,
    #[serde(default)]
    captured_black: usize,
}

fn parse_pair(mv: &str) -> (Coordinate, Coordinate) {
    let (from, to) = mv.split_at(2);
    (
        from.parse().expect("bad origin square"),
        to.parse().expect("bad destination square"),
    )
}

#[test]
fn scripted_games_produce_expected_logs() {
    let data = include_str!("data/games.json");
    let set: GameSet = serde_json::from_str(data).expect("invalid games.json");
    assert!(!set.games.is_empty());

    for scripted in &set.games {
        let mut game = Game::new();
        for mv in scripted.moves.split_whitespace() {
            let (from, to) = parse_pair(mv);
            if let Err(e) = game.play(from, to) {
                panic!("{}: {mv} rejected: {e}", scripted.name);
            }
        }

        let log: Vec<&str> = game.move_log().iter().map(String::as_str).collect();
        assert_eq!(log, scripted.log, "log mismatch in {}", scripted.name);
        assert_eq!(
            game.captured(Team::White).count(),
            scripted.captured_white,
            "white captures in {}",
            scripted.name
        );
        assert_eq!(
            game.captured(Team::Black).count(),
            scripted.captured_black,
            "black captures in {}",
            scripted.name
        );
        let expected_turn = if scripted.log.len() % 2 == 0 {
            Team::White
        } else {
            Team::Black
        };
        assert_eq!(game.turn(), expected_turn, "turn after {}", scripted.name);
    }
}

#[test]
fn rejected_moves_leave_game_untouched() {
    let mut game = Game::new();
    let before = game.clone();
    let (from, to) = parse_pair("e2e5");
    assert!(game.play(from, to).is_err());
    assert_eq!(game.board(), before.board());
    assert_eq!(game.turn(), Team::White);
    assert!(game.move_log().is_empty());
}
