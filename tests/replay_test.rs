//! Integration tests for game replay: side filtering, determinism and the
//! special moves (castling, en passant, promotion).

mod common;

use common::game;
use repertoire_core::replay::{replay, replay_all};
use repertoire_core::{Color, PlyRecord, PositionKey};

fn records(moves: &[&str], side: Color) -> Vec<PlyRecord> {
    replay(&game(moves, side), side)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_replay_is_deterministic() {
    let g = game(&["d4", "Nf6", "c4", "e6", "Nc3", "Bb4", "Qc2", "O-O"], Color::Black);
    let first: Vec<_> = replay(&g, Color::Black).collect();
    let second: Vec<_> = replay(&g, Color::Black).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_record_count_matches_side() {
    let moves = ["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4"];
    assert_eq!(records(&moves, Color::White).len(), 4);
    assert_eq!(records(&moves, Color::Black).len(), 3);
}

#[test]
fn test_castling_moves_king_and_rook() {
    let moves = ["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "O-O", "Nf6", "d3"];
    let white = records(&moves, Color::White);

    assert_eq!(white[3].played.to_string(), "e1g1");
    assert_eq!(
        white[4].position.as_str(),
        "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1 w kq -"
    );

    // the same game in coordinate notation lands on the same keys
    let uci = ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "e1g1", "g8f6", "d2d3"];
    assert_eq!(records(&uci, Color::White), white);
}

#[test]
fn test_en_passant_removes_the_captured_pawn() {
    let moves = ["e4", "Nf6", "e5", "d5", "exd6", "exd6", "d4"];
    let white = records(&moves, Color::White);

    assert_eq!(
        white[2].position.as_str(),
        "rnbqkb1r/ppp1pppp/5n2/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6"
    );
    assert_eq!(white[2].played.to_string(), "e5d6");
    assert_eq!(
        white[3].position.as_str(),
        "rnbqkb1r/ppp2ppp/3p1n2/8/8/8/PPPP1PPP/RNBQKBNR w KQkq -"
    );
}

#[test]
fn test_promotion_replaces_the_pawn() {
    let moves = ["e4", "d5", "exd5", "c6", "dxc6", "Nf6", "cxb7", "Nbd7", "bxa8=Q"];
    let g = game(&moves, Color::White);

    let white: Vec<_> = replay(&g, Color::White).collect::<Result<_, _>>().unwrap();
    assert_eq!(white.last().unwrap().played.to_string(), "b7a8q");

    let mut all = replay_all(&g);
    assert_eq!(all.by_ref().count(), moves.len());
    assert_eq!(
        PositionKey::from_board(all.board()).as_str(),
        "Q1bqkb1r/p2npppp/5n2/8/8/8/PPPP1PPP/RNBQKBNR b KQk -"
    );
}

#[test]
fn test_malformed_move_reports_ply() {
    let g = game(&["e4", "e5", "Nf3", "Nf3"], Color::Black);
    let results: Vec<_> = replay(&g, Color::Black).collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.ply, 3);
    assert_eq!(err.notation, "Nf3");
}
