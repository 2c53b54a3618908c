use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 4;
pub const DEFAULT_ROUND_LIMIT: u8 = 5;

/// Score multiplier per called trick for an ordinary call.
pub const NORMAL_BASE: i32 = 10;
/// Score multiplier per called trick for a blind call.
pub const BLIND_BASE: i32 = 20;

/// Table sizes supported by the scoreboard.
///
/// A four-handed table deals 13 tricks per round; a three-handed table
/// deals 17. Both thresholds below follow from the size of the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSize {
    Three,
    Four,
}

impl TableSize {
    pub fn from_player_count(count: usize) -> Option<Self> {
        match count {
            3 => Some(TableSize::Three),
            4 => Some(TableSize::Four),
            _ => None,
        }
    }

    /// Like [`TableSize::from_player_count`] but with a display-ready error.
    pub fn require(count: usize) -> Result<Self, DomainError> {
        Self::from_player_count(count).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Player count must be {MIN_PLAYERS} or {MAX_PLAYERS}, got {count}"),
            )
        })
    }

    pub const fn player_count(self) -> usize {
        match self {
            TableSize::Three => 3,
            TableSize::Four => 4,
        }
    }

    /// Smallest acceptable sum of all calls in one round.
    pub const fn min_total_call(self) -> u32 {
        match self {
            TableSize::Three => 13,
            TableSize::Four => 9,
        }
    }

    /// Tricks available in one round; the made values must add up to this.
    pub const fn tricks_per_round(self) -> u32 {
        match self {
            TableSize::Three => 17,
            TableSize::Four => 13,
        }
    }
}

pub fn validate_round_limit(limit: u8) -> Result<u8, DomainError> {
    if limit == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidRoundLimit,
            "Round limit must be at least 1",
        ));
    }
    Ok(limit)
}
