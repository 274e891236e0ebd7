//! Played moves in coordinate form.

use std::fmt;
use std::str::FromStr;

use shakmaty::uci::UciMove;
use shakmaty::{File, Move, Role, Square};

/// A move as origin and destination squares plus an optional promotion.
///
/// Castling is stored as the king's two-square step (`e1g1`, `e8c8`), the
/// same shape UCI uses, so its textual form is stable across notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl PlayedMove {
    pub fn new(from: Square, to: Square, promotion: Option<Role>) -> Self {
        Self { from, to, promotion }
    }

    /// Convert a legal shakmaty move. Returns `None` for drops, which cannot
    /// occur in standard chess.
    pub fn from_move(mv: &Move) -> Option<Self> {
        match *mv {
            Move::Castle { king, rook } => {
                let file = if rook.file() > king.file() { File::G } else { File::C };
                Some(Self::new(king, Square::from_coords(file, king.rank()), None))
            }
            _ => Some(Self::new(mv.from()?, mv.to(), mv.promotion())),
        }
    }
}

impl fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

impl FromStr for PlayedMove {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<UciMove>() {
            Ok(UciMove::Normal { from, to, promotion }) => Ok(Self::new(from, to, promotion)),
            Ok(_) => Err(format!("not a board move: {s}")),
            Err(e) => Err(format!("invalid coordinate move {s:?}: {e}")),
        }
    }
}
