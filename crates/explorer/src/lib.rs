//! Player move explorer.
//!
//! Loads a player's games from disk, narrows them by time control, builds a
//! position index for one colour and reports what the player plays from a
//! given position.

pub mod cache;
pub mod config;
pub mod error;
pub mod output;
pub mod source;

use repertoire_core::filter::filter_games;
use repertoire_core::game_data::GameData;
use repertoire_core::search::games_reaching;
use repertoire_core::{Game, PositionIndex, PositionKey};
use tracing::{info, warn};

use crate::config::Options;
use crate::error::ExplorerError;

/// Game list for the configured player, from the cache when allowed.
pub fn load_games(options: &Options) -> Result<Vec<GameData>, ExplorerError> {
    let path = cache::cache_path(&options.cache_dir, &options.player);

    if options.use_cache && !options.refresh && path.exists() {
        let games = cache::load_games(&path)?;
        info!(path = %path.display(), games = games.len(), "Loaded games from cache");
        return Ok(games);
    }

    let games = source::load_dir(&options.archive_dir)?;
    if options.use_cache {
        cache::save_games(&games, &path)?;
        info!(path = %path.display(), games = games.len(), "Saved game cache");
    }
    Ok(games)
}

/// Run one query and return the rendered output.
pub fn run(options: &Options) -> Result<String, ExplorerError> {
    let data = load_games(options)?;
    let games: Vec<Game> = data
        .iter()
        .filter_map(|d| Game::for_player(d, &options.player))
        .collect();
    if games.len() < data.len() {
        info!(
            skipped = data.len() - games.len(),
            player = %options.player,
            "Ignoring games the player did not take part in"
        );
    }

    let selected = filter_games(&games, |g| options.time_control.matches(g));
    info!(games = selected.len(), filter = ?options.time_control, "Games selected");

    let position = match &options.fen {
        Some(fen) => PositionKey::from_fen(fen)?,
        None => PositionKey::starting(),
    };
    let color = options.color.unwrap_or_else(|| position.turn());
    if color != position.turn() {
        warn!(color = ?color, position = %position, "Player is not the side to move in this position");
    }

    if options.list_games {
        let reaching = games_reaching(selected.iter().copied(), &position, Some(color));
        return Ok(output::render_games(&reaching));
    }

    let index = PositionIndex::build(selected.iter().copied(), color);
    let report = index.report();
    if !report.failures.is_empty() {
        warn!(failed = report.failures.len(), indexed = report.indexed, "Some games could not be replayed");
    }

    let moves = index.query(&position);
    if options.json {
        let doc = output::render_json(&position, color, &moves);
        Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
    } else {
        Ok(output::render_text(&position, color, &moves))
    }
}
