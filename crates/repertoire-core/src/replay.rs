//! Game replay: walks a game's move list from the starting position and
//! reports the position each move was played from.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{Chess, Color, Move, Position};

use crate::error::MalformedMoveError;
use crate::game::Game;
use crate::moves::PlayedMove;
use crate::position::PositionKey;

/// One half-move: the position before it, the move, and who played it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyRecord {
    /// Zero-based half-move index within the game.
    pub ply: usize,
    pub position: PositionKey,
    pub played: PlayedMove,
    pub side: Color,
}

/// Lazy replay of one game.
///
/// Every move is applied to the board, but records are only yielded for
/// moves made by the target side. The first move that cannot be applied
/// yields a single `Err` and ends the iteration.
pub struct Replay<'a> {
    moves: Enumerate<slice::Iter<'a, String>>,
    board: Chess,
    target: Option<Color>,
    finished: bool,
}

/// Replay `game`, yielding the plies played by `target`.
pub fn replay(game: &Game, target: Color) -> Replay<'_> {
    Replay::new(game, Some(target))
}

/// Replay `game`, yielding every ply regardless of side.
pub fn replay_all(game: &Game) -> Replay<'_> {
    Replay::new(game, None)
}

impl<'a> Replay<'a> {
    fn new(game: &'a Game, target: Option<Color>) -> Self {
        Self {
            moves: game.moves.iter().enumerate(),
            board: Chess::default(),
            target,
            finished: false,
        }
    }

    /// The board after every move consumed so far.
    pub fn board(&self) -> &Chess {
        &self.board
    }

    fn fail(&mut self, ply: usize, notation: &str, reason: String) -> MalformedMoveError {
        self.finished = true;
        MalformedMoveError {
            ply,
            notation: notation.to_string(),
            reason,
        }
    }
}

impl Iterator for Replay<'_> {
    type Item = Result<PlyRecord, MalformedMoveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some((ply, notation)) = self.moves.next() {
            let mv = match parse_move(&self.board, notation) {
                Ok(mv) => mv,
                Err(reason) => return Some(Err(self.fail(ply, notation, reason))),
            };
            let Some(played) = PlayedMove::from_move(&mv) else {
                return Some(Err(self.fail(ply, notation, "not a board move".into())));
            };

            let side = self.board.turn();
            let record = if self.target.map_or(true, |target| target == side) {
                Some(PlyRecord {
                    ply,
                    position: PositionKey::from_board(&self.board),
                    played,
                    side,
                })
            } else {
                None
            };

            // Castling, en passant and promotion are all handled by shakmaty.
            self.board.play_unchecked(mv);

            if let Some(record) = record {
                return Some(Ok(record));
            }
        }

        self.finished = true;
        None
    }
}

impl FusedIterator for Replay<'_> {}

/// Resolve one move in coordinate (`g1f3`) or SAN (`Nf3`, `O-O`, `exd8=Q+`)
/// notation against the current board. Only legal moves are accepted.
pub fn parse_move(board: &Chess, notation: &str) -> Result<Move, String> {
    let notation = notation.trim();

    if let Ok(uci) = notation.parse::<UciMove>() {
        return uci
            .to_move(board)
            .map_err(|e| format!("illegal move: {e}"));
    }

    let san: SanPlus = notation
        .parse()
        .map_err(|e| format!("unreadable notation: {e}"))?;
    san.san
        .to_move(board)
        .map_err(|e| format!("illegal move: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(moves: &[&str], side: Color) -> Game {
        Game::new(moves.iter().copied(), side)
    }

    #[test]
    fn test_only_target_side_is_emitted() {
        let g = game(&["e4", "e5", "Nf3", "Nc6", "Bb5"], Color::White);

        let white: Vec<_> = replay(&g, Color::White).collect::<Result<_, _>>().unwrap();
        assert_eq!(white.len(), 3);
        assert!(white.iter().all(|r| r.side == Color::White));
        assert_eq!(white.iter().map(|r| r.ply).collect::<Vec<_>>(), vec![0, 2, 4]);

        let black: Vec<_> = replay(&g, Color::Black).collect::<Result<_, _>>().unwrap();
        assert_eq!(black.len(), 2);
        assert_eq!(black[0].played.to_string(), "e7e5");
    }

    #[test]
    fn test_first_record_is_starting_position() {
        let g = game(&["d4"], Color::White);
        let records: Vec<_> = replay(&g, Color::White).collect::<Result<_, _>>().unwrap();
        assert_eq!(records[0].position, PositionKey::starting());
        assert_eq!(records[0].played.to_string(), "d2d4");
    }

    #[test]
    fn test_uci_and_san_mix() {
        let g = game(&["e2e4", "e5", "g1f3", "Nc6"], Color::Black);
        let records: Vec<_> = replay(&g, Color::Black).collect::<Result<_, _>>().unwrap();
        assert_eq!(records[1].played.to_string(), "b8c6");
    }

    #[test]
    fn test_illegal_move_stops_replay() {
        let g = game(&["e4", "e5", "Ke3", "Nc6"], Color::White);
        let mut it = replay(&g, Color::White);

        assert!(it.next().unwrap().is_ok());
        let err = it.next().unwrap().unwrap_err();
        assert_eq!(err.ply, 2);
        assert_eq!(err.notation, "Ke3");
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_garbage_notation_is_malformed() {
        let g = game(&["e4", "??"], Color::Black);
        let err = replay(&g, Color::Black).next().unwrap().unwrap_err();
        assert_eq!(err.ply, 1);
    }

    #[test]
    fn test_board_reflects_all_moves_after_exhaustion() {
        let g = game(&["e4", "e5"], Color::White);
        let mut it = replay(&g, Color::White);
        while it.next().is_some() {}
        assert_eq!(
            PositionKey::from_board(it.board()).as_str(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq -"
        );
    }
}
