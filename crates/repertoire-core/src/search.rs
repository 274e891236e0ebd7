//! Finding the games that pass through a position.

use shakmaty::Color;

use crate::game::Game;
use crate::position::PositionKey;
use crate::replay::replay_all;

/// Whether `game` reaches `position` at any point, including after its last
/// move. A game that fails to replay only matches on positions before the
/// bad move.
pub fn reaches(game: &Game, position: &PositionKey) -> bool {
    let mut plies = replay_all(game);
    for record in plies.by_ref() {
        match record {
            Ok(record) if record.position == *position => return true,
            Ok(_) => {}
            // The board still holds the position the bad move was tried from.
            Err(_) => break,
        }
    }
    PositionKey::from_board(plies.board()) == *position
}

/// Games reaching `position`, optionally only those where the player had
/// `side`.
pub fn games_reaching<'a, I>(games: I, position: &PositionKey, side: Option<Color>) -> Vec<&'a Game>
where
    I: IntoIterator<Item = &'a Game>,
{
    games
        .into_iter()
        .filter(|game| side.map_or(true, |side| game.player_side == side))
        .filter(|game| reaches(game, position))
        .collect()
}
