//! Explorer configuration from environment variables and command-line flags

use std::env;
use std::path::PathBuf;

use repertoire_core::filter::TimeControlFilter;
use repertoire_core::Color;

use crate::error::ExplorerError;

#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    /// Username whose games are indexed
    pub player: Option<String>,

    /// Directory holding Chess.com archive JSON and PGN files
    pub archive_dir: PathBuf,

    /// Directory for bincode game caches
    pub cache_dir: PathBuf,

    /// Default time-control filter
    pub time_control: String,
}

impl ExplorerConfig {
    pub fn from_env() -> Self {
        Self {
            player: env::var("EXPLORER_PLAYER").ok().filter(|p| !p.is_empty()),
            archive_dir: env::var("EXPLORER_ARCHIVE_DIR")
                .unwrap_or_else(|_| "archives".to_string())
                .into(),
            cache_dir: env::var("EXPLORER_CACHE_DIR")
                .unwrap_or_else(|_| "cache".to_string())
                .into(),
            time_control: env::var("EXPLORER_TIME_CONTROL").unwrap_or_else(|_| "all".to_string()),
        }
    }
}

/// One explorer run, after flags have been applied over the configuration.
#[derive(Clone, Debug)]
pub struct Options {
    pub player: String,
    pub archive_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub time_control: TimeControlFilter,
    /// Colour to index; defaults to the side to move in the queried position.
    pub color: Option<Color>,
    /// Position to query; defaults to the starting position.
    pub fen: Option<String>,
    pub json: bool,
    /// List the games reaching the position instead of the move table.
    pub list_games: bool,
    pub use_cache: bool,
    pub refresh: bool,
}

pub const USAGE: &str = "Usage: explorer [--player NAME] [--archives DIR] [--cache-dir DIR] \
[--color white|black] [--time-control all|bullet|blitz|rapid|daily|<tc>] [--fen FEN] \
[--json] [--games] [--cache] [--refresh]";

impl Options {
    /// Apply command-line flags (without the program name) over `config`.
    pub fn parse(args: &[String], config: ExplorerConfig) -> Result<Self, ExplorerError> {
        let mut player = config.player;
        let mut archive_dir = config.archive_dir;
        let mut cache_dir = config.cache_dir;
        let mut time_control = config.time_control;
        let mut color = None;
        let mut fen = None;
        let mut json = false;
        let mut list_games = false;
        let mut use_cache = false;
        let mut refresh = false;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .cloned()
                    .ok_or_else(|| ExplorerError::Usage(format!("{flag} needs a value")))
            };
            let mut takes_value = true;
            match flag {
                "--player" => player = Some(value()?),
                "--archives" => archive_dir = value()?.into(),
                "--cache-dir" => cache_dir = value()?.into(),
                "--time-control" => time_control = value()?,
                "--color" => color = Some(parse_color(&value()?)?),
                "--fen" => fen = Some(value()?),
                "--json" => {
                    json = true;
                    takes_value = false;
                }
                "--games" => {
                    list_games = true;
                    takes_value = false;
                }
                "--cache" => {
                    use_cache = true;
                    takes_value = false;
                }
                "--refresh" => {
                    refresh = true;
                    takes_value = false;
                }
                other => return Err(ExplorerError::Usage(format!("unknown argument {other}"))),
            }
            i += if takes_value { 2 } else { 1 };
        }

        let player = player.ok_or(ExplorerError::Config("EXPLORER_PLAYER not set and no --player given"))?;

        Ok(Self {
            player,
            archive_dir,
            cache_dir,
            time_control: time_control.parse()?,
            color,
            fen,
            json,
            list_games,
            use_cache,
            refresh,
        })
    }
}

pub fn parse_color(s: &str) -> Result<Color, ExplorerError> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(ExplorerError::Usage(format!("unknown color {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExplorerConfig {
        ExplorerConfig {
            player: None,
            archive_dir: "archives".into(),
            cache_dir: "cache".into(),
            time_control: "all".into(),
        }
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flags_override_config() {
        let opts = Options::parse(
            &args(&["--player", "hikaru", "--color", "Black", "--time-control", "blitz", "--json"]),
            config(),
        )
        .unwrap();
        assert_eq!(opts.player, "hikaru");
        assert_eq!(opts.color, Some(Color::Black));
        assert!(opts.json);
        assert!(!opts.use_cache);
        assert_eq!(opts.archive_dir, PathBuf::from("archives"));
    }

    #[test]
    fn test_player_required() {
        let err = Options::parse(&args(&["--json"]), config()).unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
    }

    #[test]
    fn test_missing_value_and_unknown_flag() {
        assert!(matches!(
            Options::parse(&args(&["--player"]), config()),
            Err(ExplorerError::Usage(_))
        ));
        assert!(matches!(
            Options::parse(&args(&["--player", "a", "--bogus"]), config()),
            Err(ExplorerError::Usage(_))
        ));
        assert!(matches!(
            Options::parse(&args(&["--player", "a", "--time-control", "classical"]), config()),
            Err(ExplorerError::UnknownTimeControl(_))
        ));
    }
}
