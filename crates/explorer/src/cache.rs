//! On-disk game cache.
//!
//! The parsed game list for a player is stored as bincode so later runs can
//! skip re-reading the archive directory. Pass `--refresh` to rebuild it.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use repertoire_core::game_data::GameData;

use crate::error::ExplorerError;

/// Cache file for `player` inside `dir`. Usernames are case-insensitive.
pub fn cache_path(dir: &Path, player: &str) -> PathBuf {
    dir.join(format!("{}.bin", player.to_ascii_lowercase()))
}

/// Load a cached game list.
pub fn load_games<P: AsRef<Path>>(path: P) -> Result<Vec<GameData>, ExplorerError> {
    let reader = BufReader::new(File::open(path)?);
    let games: Vec<GameData> = bincode::deserialize_from(reader)?;
    Ok(games)
}

/// Save a game list, creating the cache directory if needed.
pub fn save_games<P: AsRef<Path>>(games: &[GameData], path: P) -> Result<(), ExplorerError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, games)?;
    Ok(())
}
