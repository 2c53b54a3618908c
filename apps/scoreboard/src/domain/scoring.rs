use std::cmp::Ordering;

use crate::domain::rules::{BLIND_BASE, NORMAL_BASE};
use crate::domain::state::{PlayerId, PlayerRound};
use crate::domain::validation::ValidatedRound;

pub const fn base_multiplier(blind: bool) -> i32 {
    if blind {
        BLIND_BASE
    } else {
        NORMAL_BASE
    }
}

/// Score for one player in one round.
///
/// Meeting the call scores `call * base`; every trick beyond it adds one.
/// Falling short loses `call * base` no matter how many tricks were missed.
/// Stored scores are tenths of a displayed point.
pub fn round_score(call: u32, made: u32, blind: bool) -> i32 {
    let base = base_multiplier(blind);
    let called = i32::try_from(call).unwrap_or(i32::MAX).saturating_mul(base);
    match made.cmp(&call) {
        Ordering::Greater => {
            let over = i32::try_from(made - call).unwrap_or(i32::MAX);
            called.saturating_add(over)
        }
        Ordering::Equal => called,
        Ordering::Less => -called,
    }
}

/// Apply the scoring rule to every entry of a validated round, in seat order.
pub fn score_round(round: &ValidatedRound, blind: bool) -> Vec<(PlayerId, PlayerRound)> {
    round
        .entries()
        .iter()
        .map(|(pid, entry)| {
            (
                *pid,
                PlayerRound {
                    call: entry.call,
                    made: entry.made,
                    score: round_score(entry.call, entry.made, blind),
                },
            )
        })
        .collect()
}
