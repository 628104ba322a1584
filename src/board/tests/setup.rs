//! New game layout and selection tests.

use super::{play_line, sq};
use crate::board::{Game, MoveError, PieceKind, Team};

#[test]
fn test_new_game_layout() {
    let game = Game::new();
    assert_eq!(game.turn(), Team::White);
    assert_eq!(game.active_pieces(Team::White).count(), 16);
    assert_eq!(game.active_pieces(Team::Black).count(), 16);
    assert_eq!(game.captured(Team::White).count(), 0);
    assert!(game.selected_piece().is_none());
    assert!(game.move_guide().is_empty());
    assert!(game.move_log().is_empty());
    assert!(game.special_move().is_none());

    let back_rank = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (column, kind) in back_rank.into_iter().enumerate() {
        let black = game.board().piece_at(crate::board::Coordinate::new(0, column)).unwrap();
        let white = game.board().piece_at(crate::board::Coordinate::new(7, column)).unwrap();
        assert_eq!((black.kind, black.team), (kind, Team::Black));
        assert_eq!((white.kind, white.team), (kind, Team::White));
    }
    assert_eq!(game.piece_at(sq("e1")).unwrap().name(), "White King");
    assert_eq!(game.piece_at(sq("d8")).unwrap().name(), "Black Queen");
}

#[test]
fn test_every_piece_position_matches_its_cell() {
    let game = Game::new();
    for team in Team::BOTH {
        for piece in game.active_pieces(team) {
            assert_eq!(game.board().id_at(piece.position), Some(piece.id));
            assert!(!piece.has_moved);
        }
    }
}

#[test]
fn test_new_game_resets_everything() {
    let mut game = Game::new();
    play_line(&mut game, "e2e4 d7d5 e4d5");
    assert_eq!(game.captured(Team::Black).count(), 1);

    game.new_game();
    assert_eq!(game.turn(), Team::White);
    assert!(game.move_log().is_empty());
    assert_eq!(game.captured(Team::Black).count(), 0);
    assert_eq!(game.active_pieces(Team::Black).count(), 16);
    assert_eq!(game.board().symbols(), Game::new().board().symbols());
}

#[test]
fn test_select_own_piece_builds_guide() {
    let mut game = Game::new();
    assert!(game.select(sq("e2")));
    assert_eq!(game.selected_piece().map(|p| p.position), Some(sq("e2")));
    assert_eq!(game.move_guide(), &[sq("e3"), sq("e4")]);
}

#[test]
fn test_select_rejects_opponent_and_empty_cells() {
    let mut game = Game::new();
    assert!(!game.select(sq("e7")), "Black cannot be selected on White's turn");
    assert!(!game.select(sq("e4")), "empty cell");
    assert!(game.selected_piece().is_none());

    assert!(game.select(sq("g1")));
    assert!(!game.select(sq("g8")));
    assert_eq!(
        game.selected_piece().map(|p| p.position),
        Some(sq("g1")),
        "rejected selection keeps the previous one"
    );
}

#[test]
fn test_select_piece_by_id() {
    let mut game = Game::new();
    let knight = game.piece_at(sq("b1")).unwrap().id;
    let enemy = game.piece_at(sq("b8")).unwrap().id;
    assert!(game.select_piece(knight));
    assert!(!game.select_piece(enemy));
}

#[test]
fn test_move_without_selection() {
    let mut game = Game::new();
    assert_eq!(game.try_move(sq("e4")), Err(MoveError::NoSelection));
    assert!(!game.move_piece(sq("e4")));
    assert_eq!(game.turn(), Team::White);
}

#[test]
fn test_selection_cleared_after_move() {
    let mut game = Game::new();
    assert!(game.select(sq("e2")));
    assert!(game.move_piece(sq("e4")));
    assert!(game.selected_piece().is_none());
    assert!(game.move_guide().is_empty());
}

#[test]
fn test_snapshot_reflects_state() {
    let mut game = Game::new();
    play_line(&mut game, "e2e4 d7d5 e4d5");
    assert!(game.select(sq("b8")));
    let snap = game.snapshot();
    assert_eq!(snap.turn, Team::Black);
    assert_eq!(snap.selected, Some(sq("b8")));
    assert_eq!(snap.move_log, vec!["e4", "d5", "exd5"]);
    assert_eq!(snap.captured_black, vec!['p']);
    assert!(snap.captured_white.is_empty());
    assert_eq!(snap.cells[3][3], Some('P'));
}
