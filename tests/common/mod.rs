#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use repertoire_core::{Color, Game};

/// After 1. e4 e5 2. Nf3 Nc6 3. Nc3 Nf6, White to move.
pub const FOUR_KNIGHTS: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/4P3/2N2N2/PPPP1PPP/R1BQKB1R w KQkq - 4 4";

const MAIN_LINE: [&str; 6] = ["e4", "e5", "Nf3", "Nc6", "Nc3", "Nf6"];
const KNIGHTS_FIRST: [&str; 6] = ["Nf3", "Nc6", "Nc3", "Nf6", "e4", "e5"];

/// White's replies in the four-knights position and how often they were played.
pub const FOUR_KNIGHTS_REPLIES: [(&str, u32); 6] = [
    ("Nd5", 27),
    ("Bd3", 16),
    ("Bc4", 15),
    ("d3", 4),
    ("a3", 3),
    ("d4", 2),
];

pub fn game(moves: &[&str], side: Color) -> Game {
    Game::new(moves.iter().copied(), side)
}

/// 67 White games reaching the four-knights position (every third one via
/// the knights-first move order), plus a few unrelated games.
pub fn four_knights_corpus() -> Vec<Game> {
    let mut games = Vec::new();
    let mut n = 0;
    for (reply, count) in FOUR_KNIGHTS_REPLIES {
        for _ in 0..count {
            let line = if n % 3 == 0 { KNIGHTS_FIRST } else { MAIN_LINE };
            let mut moves: Vec<&str> = line.to_vec();
            moves.push(reply);
            games.push(game(&moves, Color::White));
            n += 1;
        }
    }

    for _ in 0..5 {
        games.push(game(&["d4", "d5", "c4"], Color::White));
    }
    for _ in 0..3 {
        games.push(game(&["e4", "e5", "Nf3", "Nc6", "Nc3", "Nf6", "Bb5"], Color::Black));
    }
    games
}

/// Generate a unique suffix based on timestamp to avoid collisions.
pub fn unique_suffix() -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}", ts % 1_000_000_000)
}

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("explorer-{name}-{}", unique_suffix()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
