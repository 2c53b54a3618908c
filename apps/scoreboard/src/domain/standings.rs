use serde::{Deserialize, Serialize};

use crate::domain::players::Player;
use crate::domain::state::Game;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: Player,
    pub total_score: i32,
    /// 1-based competition rank.
    pub rank: usize,
}

/// Players ordered by total score, highest first.
///
/// Ties share the rank of the first player in the tie group and the next
/// lower total takes its 1-based position ("1224" ranking). Players with
/// equal totals keep seat order.
pub fn ranked_standings(game: &Game) -> Vec<Standing> {
    let mut rows: Vec<(Player, i32)> = game
        .players()
        .iter()
        .map(|p| {
            let total = game.total_for(p.id);
            (Player { score: total, ..p.clone() }, total)
        })
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    let totals: Vec<i32> = rows.iter().map(|(_, total)| *total).collect();
    rows.into_iter()
        .zip(competition_ranks(&totals))
        .map(|((player, total_score), rank)| Standing {
            player,
            total_score,
            rank,
        })
        .collect()
}

/// Competition ranks for totals already sorted in descending order.
pub fn competition_ranks(sorted_totals: &[i32]) -> Vec<usize> {
    let mut ranks = Vec::with_capacity(sorted_totals.len());
    for (idx, total) in sorted_totals.iter().enumerate() {
        let rank = match (idx.checked_sub(1), ranks.last()) {
            (Some(prev), Some(&prev_rank)) if sorted_totals[prev] == *total => prev_rank,
            _ => idx + 1,
        };
        ranks.push(rank);
    }
    ranks
}

/// Players holding rank 1. Empty only for an empty table.
pub fn leaders(standings: &[Standing]) -> Vec<&Player> {
    standings
        .iter()
        .filter(|s| s.rank == 1)
        .map(|s| &s.player)
        .collect()
}
