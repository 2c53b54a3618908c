//! Public score sheet for observing a game without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::state::{Game, GameId, PlayerId, PlayerRound};

/// Game-level header present in every sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetHeader {
    pub game_id: GameId,
    pub blind: bool,
    pub round_limit: u8,
    pub rounds_played: u8,
    pub current_round: Option<u8>,
    pub complete: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetPlayer {
    pub id: PlayerId,
    pub name: String,
}

/// One recorded round; `lines` follow seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub round_no: u8,
    pub lines: Vec<PlayerRound>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub header: SheetHeader,
    pub players: Vec<SheetPlayer>,
    pub rows: Vec<SheetRow>,
    /// Running totals in seat order.
    pub totals: Vec<i32>,
}

pub fn score_sheet(game: &Game) -> ScoreSheet {
    let players = game.players();
    let rows = game
        .rounds()
        .iter()
        .map(|round| SheetRow {
            round_no: round.round_no(),
            lines: players
                .iter()
                .filter_map(|p| round.result_for(p.id).copied())
                .collect(),
        })
        .collect();

    ScoreSheet {
        header: SheetHeader {
            game_id: game.id(),
            blind: game.is_blind(),
            round_limit: game.round_limit(),
            rounds_played: game.rounds_played(),
            current_round: game.current_round(),
            complete: game.is_complete(),
        },
        players: players
            .iter()
            .map(|p| SheetPlayer {
                id: p.id,
                name: p.name.clone(),
            })
            .collect(),
        rows,
        totals: players.iter().map(|p| game.total_for(p.id)).collect(),
    }
}

/// Render a stored score as display points (tenths), e.g. `52` → `"5.2"`.
pub fn format_points(score: i32) -> String {
    let sign = if score < 0 { "-" } else { "" };
    let abs = score.unsigned_abs();
    format!("{sign}{}.{}", abs / 10, abs % 10)
}
