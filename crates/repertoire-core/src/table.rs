//! Plain-text move tables.

use std::fmt;

use crate::index::MoveCount;

/// Ranked moves rendered one per line as `move: count`, e.g.
///
/// ```text
/// g1f3: 158
/// d1h5: 27
/// ```
pub struct MoveTable<'a> {
    moves: &'a [MoveCount],
    percentages: bool,
}

impl<'a> MoveTable<'a> {
    pub fn new(moves: &'a [MoveCount]) -> Self {
        Self {
            moves,
            percentages: false,
        }
    }

    /// Append each move's share of the position total.
    pub fn with_percentages(mut self) -> Self {
        self.percentages = true;
        self
    }
}

impl fmt::Display for MoveTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total: u32 = self.moves.iter().map(|m| m.count).sum();
        for m in self.moves {
            write!(f, "{}: {}", m.played, m.count)?;
            if self.percentages {
                write!(f, " ({:.1}%)", m.share(total))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
