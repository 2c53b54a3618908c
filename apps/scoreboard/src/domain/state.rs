use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::players::Player;
use crate::domain::rules::TableSize;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

opaque_id!(
    /// Stable identity of a seated player.
    PlayerId
);
opaque_id!(
    /// Identity of a recorded round.
    RoundId
);
opaque_id!(
    /// Identity of a game.
    GameId
);

/// Overall game progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Players are still being registered.
    Setup,
    /// Waiting for round `n` (1-based) to be submitted.
    InRound(u8),
    /// Every configured round has been recorded.
    Complete,
}

/// One player's line in a recorded round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRound {
    pub call: u32,
    pub made: u32,
    pub score: i32,
}

/// A recorded round. Holds exactly one line per seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    id: RoundId,
    round_no: u8,
    results: BTreeMap<PlayerId, PlayerRound>,
}

impl Round {
    pub(crate) fn new(
        round_no: u8,
        results: impl IntoIterator<Item = (PlayerId, PlayerRound)>,
    ) -> Self {
        Self {
            id: RoundId::new(),
            round_no,
            results: results.into_iter().collect(),
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn round_no(&self) -> u8 {
        self.round_no
    }

    pub fn result_for(&self, player: PlayerId) -> Option<&PlayerRound> {
        self.results.get(&player)
    }

    pub fn score_for(&self, player: PlayerId) -> Option<i32> {
        self.results.get(&player).map(|r| r.score)
    }

    /// Score mapping keyed by player id.
    pub fn scores(&self) -> impl Iterator<Item = (PlayerId, i32)> + '_ {
        self.results.iter().map(|(pid, r)| (*pid, r.score))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Entire game container: seated players, recorded rounds and settings.
///
/// A `Game` is a snapshot. Transitions in [`crate::domain::game`] borrow it
/// immutably and hand back a new value, so a rejected submission can never
/// leave a partially recorded round behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) id: GameId,
    pub(crate) players: Vec<Player>,
    pub(crate) rounds: Vec<Round>,
    pub(crate) blind: bool,
    pub(crate) round_limit: u8,
}

impl Game {
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn is_blind(&self) -> bool {
        self.blind
    }

    pub fn round_limit(&self) -> u8 {
        self.round_limit
    }

    pub fn rounds_played(&self) -> u8 {
        self.rounds.len() as u8
    }

    pub fn table_size(&self) -> TableSize {
        match self.players.len() {
            3 => TableSize::Three,
            _ => TableSize::Four,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.rounds_played() >= self.round_limit {
            Phase::Complete
        } else {
            Phase::InRound(self.rounds_played() + 1)
        }
    }

    /// Round number awaiting submission, or `None` once the game is over.
    pub fn current_round(&self) -> Option<u8> {
        match self.phase() {
            Phase::InRound(n) => Some(n),
            Phase::Setup | Phase::Complete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    /// Sum of a player's scores over every recorded round.
    pub fn total_for(&self, player: PlayerId) -> i32 {
        self.rounds
            .iter()
            .filter_map(|r| r.score_for(player))
            .fold(0i32, i32::saturating_add)
    }
}
