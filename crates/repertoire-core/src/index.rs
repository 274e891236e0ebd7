//! Position index: which moves a player chose from each position, and how
//! often.

use std::cmp::Reverse;
use std::collections::HashMap;

use shakmaty::Color;
use tracing::{debug, info, warn};

use crate::error::{InvalidPositionError, MalformedMoveError};
use crate::game::Game;
use crate::moves::PlayedMove;
use crate::position::PositionKey;
use crate::replay::{replay, PlyRecord};

/// A move and the number of times it was played from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCount {
    pub played: PlayedMove,
    pub count: u32,
}

impl MoveCount {
    /// Percentage of `total` this move accounts for, rounded to one decimal.
    pub fn share(&self, total: u32) -> f64 {
        if total == 0 {
            return 0.0;
        }
        ((self.count as f64 / total as f64) * 1000.0).round() / 10.0
    }
}

/// A game that could not be replayed and was left out of the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFailure {
    /// Position of the game in the input sequence.
    pub game: usize,
    pub error: MalformedMoveError,
}

/// Summary of one index build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub side: Color,
    /// Games replayed in full and folded into the index.
    pub indexed: usize,
    /// Games where the player had the other colour.
    pub other_side: usize,
    /// Records folded into the index.
    pub plies: usize,
    pub failures: Vec<GameFailure>,
}

impl BuildReport {
    fn new(side: Color) -> Self {
        Self {
            side,
            indexed: 0,
            other_side: 0,
            plies: 0,
            failures: Vec::new(),
        }
    }
}

/// Position -> (move -> count) for one player and one colour.
///
/// Built once from a game list and read-only afterwards. A different game
/// list (for example after filtering) gets a fresh index.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    positions: HashMap<PositionKey, HashMap<PlayedMove, u32>>,
    report: BuildReport,
}

impl PositionIndex {
    /// Replay every game the player played as `side` and count the moves
    /// they made from each position.
    ///
    /// Games that fail to replay are recorded in the report and contribute
    /// nothing, not even the plies before the bad move.
    pub fn build<'a, I>(games: I, side: Color) -> Self
    where
        I: IntoIterator<Item = &'a Game>,
    {
        let mut index = Self {
            positions: HashMap::new(),
            report: BuildReport::new(side),
        };

        for (i, game) in games.into_iter().enumerate() {
            if game.player_side != side {
                index.report.other_side += 1;
                continue;
            }

            match replay(game, side).collect::<Result<Vec<PlyRecord>, _>>() {
                Ok(records) => {
                    index.report.plies += records.len();
                    index.report.indexed += 1;
                    for record in records {
                        index.insert(record);
                    }
                }
                Err(error) => {
                    warn!(game = i, ply = error.ply, notation = %error.notation, "Skipping game: {}", error.reason);
                    index.report.failures.push(GameFailure { game: i, error });
                }
            }
        }

        info!(
            side = ?side,
            indexed = index.report.indexed,
            skipped = index.report.failures.len(),
            positions = index.positions.len(),
            "Position index built"
        );

        index
    }

    fn insert(&mut self, record: PlyRecord) {
        *self
            .positions
            .entry(record.position)
            .or_default()
            .entry(record.played)
            .or_insert(0) += 1;
    }

    pub fn side(&self) -> Color {
        self.report.side
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Number of distinct positions the player moved from.
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Moves played from `position`, most frequent first. Equal counts are
    /// ordered by the move's coordinate text. Empty when the player never
    /// reached the position.
    pub fn query(&self, position: &PositionKey) -> Vec<MoveCount> {
        let Some(moves) = self.positions.get(position) else {
            debug!(position = %position, "Position not in index");
            return Vec::new();
        };

        let mut ranked: Vec<MoveCount> = moves
            .iter()
            .map(|(&played, &count)| MoveCount { played, count })
            .collect();
        ranked.sort_by_cached_key(|m| (Reverse(m.count), m.played.to_string()));
        ranked
    }

    /// The single most frequent move from `position`, if any.
    pub fn most_common(&self, position: &PositionKey) -> Option<PlayedMove> {
        self.query(position).first().map(|m| m.played)
    }

    /// Times the player reached `position` (sum of its move counts).
    pub fn total_at(&self, position: &PositionKey) -> u32 {
        self.positions
            .get(position)
            .map(|moves| moves.values().sum())
            .unwrap_or(0)
    }

    pub fn query_fen(&self, fen: &str) -> Result<Vec<MoveCount>, InvalidPositionError> {
        Ok(self.query(&PositionKey::from_fen(fen)?))
    }

    pub fn most_common_fen(&self, fen: &str) -> Result<Option<PlayedMove>, InvalidPositionError> {
        Ok(self.most_common(&PositionKey::from_fen(fen)?))
    }
}

/// Both colour indices for one game list.
#[derive(Debug, Clone)]
pub struct Repertoire {
    pub white: PositionIndex,
    pub black: PositionIndex,
}

impl Repertoire {
    pub fn build(games: &[Game]) -> Self {
        Self {
            white: PositionIndex::build(games, Color::White),
            black: PositionIndex::build(games, Color::Black),
        }
    }

    pub fn for_side(&self, side: Color) -> &PositionIndex {
        match side {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}
