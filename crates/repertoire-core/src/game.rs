//! The read-only game view consumed by replay and indexing.

use shakmaty::Color;

use crate::game_data::GameData;

/// One game from the player's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Moves from the standard starting position, SAN or UCI.
    pub moves: Vec<String>,
    /// Colour the player of interest had in this game.
    pub player_side: Color,
    pub time_control: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}

impl Game {
    pub fn new<S: Into<String>>(moves: impl IntoIterator<Item = S>, player_side: Color) -> Self {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
            player_side,
            time_control: None,
            date: None,
            link: None,
        }
    }

    pub fn with_time_control(mut self, time_control: impl Into<String>) -> Self {
        self.time_control = Some(time_control.into());
        self
    }

    /// View a parsed game from `username`'s side. Usernames compare
    /// case-insensitively; `None` when the player is on neither side.
    pub fn for_player(data: &GameData, username: &str) -> Option<Self> {
        let player_side = if data.metadata.white.eq_ignore_ascii_case(username) {
            Color::White
        } else if data.metadata.black.eq_ignore_ascii_case(username) {
            Color::Black
        } else {
            return None;
        };

        Some(Self {
            moves: data.moves.clone(),
            player_side,
            time_control: data.metadata.time_control.clone(),
            date: data.metadata.date.clone(),
            link: data.metadata.link.clone(),
        })
    }
}
