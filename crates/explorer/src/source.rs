//! Game sources on disk.
//!
//! Two formats are read from the archive directory:
//! - `*.json`: Chess.com monthly archives (`{"games": [{"pgn": ...}, ...]}`)
//! - `*.pgn`: plain PGN databases, streamed with `pgn-reader`

use std::fs::{self, File};
use std::io::BufReader;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use pgn_reader::{RawTag, Reader, SanPlus, Skip, Visitor};
use repertoire_core::game_data::{GameData, GameMetadata};
use repertoire_core::pgn::parse_pgn;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ExplorerError;

const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Deserialize)]
struct Archive {
    #[serde(default)]
    games: Vec<ArchiveGame>,
}

#[derive(Deserialize)]
struct ArchiveGame {
    pgn: Option<String>,
    time_control: Option<String>,
    rules: Option<String>,
    url: Option<String>,
}

/// Load every game file in `dir`, in path order.
pub fn load_dir(dir: &Path) -> Result<Vec<GameData>, ExplorerError> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for ext in ["json", "pgn"] {
        let pattern = format!("{}/*.{ext}", dir.display());
        paths.extend(glob::glob(&pattern)?.filter_map(|p| p.ok()));
    }
    paths.sort();

    let mut games = Vec::new();
    for path in &paths {
        let loaded = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => load_archive_file(path)?,
            _ => load_pgn_file(path)?,
        };
        debug!(path = %path.display(), games = loaded.len(), "Loaded game file");
        games.extend(loaded);
    }

    info!(files = paths.len(), games = games.len(), dir = %dir.display(), "Game files loaded");
    Ok(games)
}

pub fn load_archive_file(path: &Path) -> Result<Vec<GameData>, ExplorerError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_archive(&text)?)
}

/// Parse a Chess.com monthly archive. Variant games and games without PGN
/// are skipped.
pub fn parse_archive(text: &str) -> Result<Vec<GameData>, serde_json::Error> {
    let archive: Archive = serde_json::from_str(text)?;

    Ok(archive
        .games
        .into_iter()
        .filter(|game| game.rules.as_deref().unwrap_or("chess") == "chess")
        .filter_map(|game| {
            let mut data = parse_pgn(game.pgn.as_deref()?)?;
            if data.metadata.time_control.is_none() {
                data.metadata.time_control = game.time_control;
            }
            if data.metadata.link.is_none() {
                data.metadata.link = game.url;
            }
            Some(data)
        })
        .collect())
}

pub fn load_pgn_file(path: &Path) -> Result<Vec<GameData>, ExplorerError> {
    let file = File::open(path)?;
    let mut reader = Reader::new(BufReader::new(file));
    let mut collector = GameCollector::default();

    while reader
        .read_game(&mut collector)
        .map_err(|e| ExplorerError::Pgn {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
        .is_some()
    {}

    Ok(collector.games)
}

/// Tags collected during header parsing.
#[derive(Default)]
struct GameTags {
    white: Option<String>,
    black: Option<String>,
    result: Option<String>,
    date: Option<String>,
    time_control: Option<String>,
    eco: Option<String>,
    event: Option<String>,
    link: Option<String>,
    custom_start: bool,
}

/// Visitor that collects the mainline moves of each game.
#[derive(Default)]
struct GameCollector {
    games: Vec<GameData>,
}

impl Visitor for GameCollector {
    type Tags = GameTags;
    type Movetext = GameData;
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<(), GameTags> {
        ControlFlow::Continue(GameTags::default())
    }

    fn tag(&mut self, tags: &mut GameTags, name: &[u8], value: RawTag<'_>) -> ControlFlow<()> {
        let value = value.decode_utf8_lossy().into_owned();
        match name {
            b"White" => tags.white = Some(value),
            b"Black" => tags.black = Some(value),
            b"Result" => tags.result = Some(value),
            b"Date" => tags.date = Some(value),
            b"TimeControl" => tags.time_control = Some(value),
            b"ECO" => tags.eco = Some(value),
            b"Event" => tags.event = Some(value),
            b"Link" => tags.link = Some(value),
            b"FEN" => tags.custom_start = value != STANDARD_START_FEN,
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: GameTags) -> ControlFlow<(), GameData> {
        if tags.custom_start {
            return ControlFlow::Break(());
        }

        ControlFlow::Continue(GameData {
            metadata: GameMetadata {
                white: tags.white.unwrap_or_else(|| "Unknown".to_string()),
                black: tags.black.unwrap_or_else(|| "Unknown".to_string()),
                result: tags.result.unwrap_or_else(|| "*".to_string()),
                date: tags.date,
                time_control: tags.time_control,
                eco: tags.eco,
                event: tags.event,
                link: tags.link,
            },
            moves: Vec::new(),
        })
    }

    fn san(&mut self, game: &mut GameData, san_plus: SanPlus) -> ControlFlow<()> {
        game.moves.push(san_plus.to_string());
        ControlFlow::Continue(())
    }

    fn begin_variation(&mut self, _game: &mut GameData) -> ControlFlow<(), Skip> {
        // Side lines are not part of the game as played.
        ControlFlow::Continue(Skip(true))
    }

    fn end_game(&mut self, game: GameData) {
        if !game.moves.is_empty() {
            self.games.push(game);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_archive_skips_variants() {
        let text = r#"{"games": [
            {"pgn": "[White \"a\"]\n[Black \"b\"]\n\n1. e4 e5 *", "time_control": "600", "rules": "chess", "url": "https://www.chess.com/game/live/1"},
            {"pgn": "[White \"a\"]\n[Black \"b\"]\n\n1. e4 e5 *", "time_control": "600", "rules": "chess960"},
            {"time_control": "600", "rules": "chess"}
        ]}"#;

        let games = parse_archive(text).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].metadata.time_control.as_deref(), Some("600"));
        assert_eq!(games[0].metadata.link.as_deref(), Some("https://www.chess.com/game/live/1"));
        assert_eq!(games[0].moves, vec!["e4", "e5"]);
    }

    #[test]
    fn test_parse_archive_rejects_bad_json() {
        assert!(parse_archive("{not json").is_err());
    }
}
