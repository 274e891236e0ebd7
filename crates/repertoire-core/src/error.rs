//! Error types for replay, position parsing and filtering.

use thiserror::Error;

/// A move in a game's move list could not be applied to the board.
///
/// Fatal for that one game only; index construction records it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed move {notation:?} at ply {ply}: {reason}")]
pub struct MalformedMoveError {
    /// Zero-based half-move index within the game.
    pub ply: usize,
    pub notation: String,
    pub reason: String,
}

/// A query key did not describe a valid board state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid position {input:?}: {reason}")]
pub struct InvalidPositionError {
    pub input: String,
    pub reason: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown time control: {0}")]
pub struct UnknownTimeControlError(pub String);
