//! Rendering query results for the terminal.

use repertoire_core::table::MoveTable;
use repertoire_core::{Color, Game, MoveCount, PlayedMove, PositionKey};
use serde_json::{json, Value as JsonValue};

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Human-readable move table with a header line.
pub fn render_text(position: &PositionKey, color: Color, moves: &[MoveCount]) -> String {
    if moves.is_empty() {
        return format!(
            "No games where the player reached {position} as {}\n",
            color_name(color)
        );
    }

    let total: u32 = moves.iter().map(|m| m.count).sum();
    format!(
        "{position} ({}, {total} games)\n{}",
        color_name(color),
        MoveTable::new(moves).with_percentages()
    )
}

/// JSON document for one position query.
pub fn render_json(position: &PositionKey, color: Color, moves: &[MoveCount]) -> JsonValue {
    let total: u32 = moves.iter().map(|m| m.count).sum();
    let most_common: Option<PlayedMove> = moves.first().map(|m| m.played);

    let moves: Vec<JsonValue> = moves
        .iter()
        .map(|m| {
            json!({
                "move": m.played.to_string(),
                "count": m.count,
                "share": m.share(total),
            })
        })
        .collect();

    json!({
        "fen": position.as_str(),
        "color": color_name(color),
        "total": total,
        "moves": moves,
        "mostCommon": most_common.map(|m| m.to_string()),
    })
}

/// One line per game: date, time control and link when known.
pub fn render_games(games: &[&Game]) -> String {
    let mut out = format!("{} games\n", games.len());
    for game in games {
        out.push_str(&format!(
            "{}  {:>8}  {}\n",
            game.date.as_deref().unwrap_or("????.??.??"),
            game.time_control.as_deref().unwrap_or("-"),
            game.link.as_deref().unwrap_or("")
        ));
    }
    out
}
