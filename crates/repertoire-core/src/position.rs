//! Canonical position keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode};

use crate::error::InvalidPositionError;

pub const STARTING_KEY: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

/// Board placement, side to move, castling rights and en-passant square.
///
/// Move counters are dropped and the en-passant square is only kept when a
/// capture on it is legal, so the same position reached through different
/// move orders always yields the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionKey(String);

impl PositionKey {
    pub fn from_board(board: &Chess) -> Self {
        let fen = Fen::from_position(board, EnPassantMode::Legal).to_string();
        let fields: Vec<&str> = fen.split(' ').take(4).collect();
        Self(fields.join(" "))
    }

    /// Canonicalize an external FEN (six fields) or EPD-style (four fields)
    /// string.
    pub fn from_fen(input: &str) -> Result<Self, InvalidPositionError> {
        let trimmed = input.trim();
        let invalid = |reason: String| InvalidPositionError {
            input: input.to_string(),
            reason,
        };

        let fields = trimmed.split_whitespace().count();
        let full = match fields {
            4 => format!("{trimmed} 0 1"),
            6 => trimmed.to_string(),
            0 => return Err(invalid("empty position".into())),
            n => return Err(invalid(format!("expected 4 or 6 fields, found {n}"))),
        };

        let fen: Fen = full.parse().map_err(|e| invalid(format!("{e}")))?;
        let board: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;

        Ok(Self::from_board(&board))
    }

    pub fn starting() -> Self {
        Self(STARTING_KEY.to_string())
    }

    /// Side to move in this position.
    pub fn turn(&self) -> Color {
        match self.0.split(' ').nth(1) {
            Some("b") => Color::Black,
            _ => Color::White,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
