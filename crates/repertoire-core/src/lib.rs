//! Position-indexed move statistics for a single player's games.
//!
//! Games are replayed once with [`replay::replay`], every position the
//! player reached is folded into a [`index::PositionIndex`], and the index
//! then answers "what does this player usually play here?" queries.

pub mod error;
pub mod filter;
pub mod game;
pub mod game_data;
pub mod index;
pub mod moves;
pub mod pgn;
pub mod position;
pub mod replay;
pub mod search;
pub mod table;

pub use error::{InvalidPositionError, MalformedMoveError, UnknownTimeControlError};
pub use game::Game;
pub use index::{BuildReport, GameFailure, MoveCount, PositionIndex, Repertoire};
pub use moves::PlayedMove;
pub use position::PositionKey;
pub use replay::{replay, PlyRecord};
pub use shakmaty::Color;
