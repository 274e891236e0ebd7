//! Time-control filtering over game lists.

use std::str::FromStr;

use crate::error::UnknownTimeControlError;
use crate::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeClass {
    Bullet,
    Blitz,
    Rapid,
    Daily,
}

impl TimeClass {
    fn time_controls(self) -> &'static [&'static str] {
        match self {
            TimeClass::Bullet => &["60", "60+1", "120+0", "120+1"],
            TimeClass::Blitz => &["180", "180+2", "300"],
            TimeClass::Rapid => &["600", "900+10", "1800"],
            TimeClass::Daily => &["86400"],
        }
    }

    pub fn contains(self, time_control: &str) -> bool {
        if self == TimeClass::Daily && time_control.starts_with("1/") {
            return true;
        }
        self.time_controls().contains(&time_control)
    }
}

/// Which games to keep, by time control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeControlFilter {
    All,
    Class(TimeClass),
    /// Literal PGN `TimeControl` value, e.g. `"180+2"`.
    Exact(String),
}

impl TimeControlFilter {
    pub fn matches(&self, game: &Game) -> bool {
        match (self, game.time_control.as_deref()) {
            (TimeControlFilter::All, _) => true,
            (_, None) => false,
            (TimeControlFilter::Class(class), Some(tc)) => class.contains(tc),
            (TimeControlFilter::Exact(wanted), Some(tc)) => wanted == tc,
        }
    }
}

impl FromStr for TimeControlFilter {
    type Err = UnknownTimeControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.chars().any(|c| c.is_ascii_digit()) {
            return Ok(TimeControlFilter::Exact(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(TimeControlFilter::All),
            "bullet" => Ok(TimeControlFilter::Class(TimeClass::Bullet)),
            "blitz" => Ok(TimeControlFilter::Class(TimeClass::Blitz)),
            "rapid" => Ok(TimeControlFilter::Class(TimeClass::Rapid)),
            "daily" => Ok(TimeControlFilter::Class(TimeClass::Daily)),
            _ => Err(UnknownTimeControlError(s.to_string())),
        }
    }
}

/// Keep the games matching `predicate`. The input is left untouched.
pub fn filter_games<'a, P>(games: &'a [Game], predicate: P) -> Vec<&'a Game>
where
    P: Fn(&Game) -> bool,
{
    games.iter().filter(|&game| predicate(game)).collect()
}
