//! Player identity and table setup.
//!
//! A [`PlayerRegistry`] collects names until every seat is filled, then
//! finalizes into a [`Game`]. Identity never changes after a player is added.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::game::create_game_from_players;
use crate::domain::rules::TableSize;
use crate::domain::state::{Game, Phase, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Running total cache. Refreshed from the recorded rounds on every
    /// transition; [`Game::total_for`] is the authoritative value.
    pub score: i32,
}

impl Player {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id: PlayerId::new(),
            name: normalize_name(name)?,
            score: 0,
        })
    }
}

/// Trim a display name and reject it if nothing is left.
pub fn normalize_name(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            "Player name must not be empty",
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn ensure_unique_name(players: &[Player], name: &str) -> Result<(), DomainError> {
    let lowered = name.to_lowercase();
    if players.iter().any(|p| p.name.to_lowercase() == lowered) {
        return Err(DomainError::conflict(
            ConflictKind::DuplicatePlayer,
            format!("A player named '{name}' is already seated"),
        ));
    }
    Ok(())
}

/// Seats players one by one before a game starts.
#[derive(Debug, Clone)]
pub struct PlayerRegistry {
    table: TableSize,
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new(player_count: usize) -> Result<Self, DomainError> {
        let table = TableSize::require(player_count)?;
        Ok(Self {
            table,
            players: Vec::with_capacity(table.player_count()),
        })
    }

    pub fn add(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        if self.is_ready() {
            return Err(DomainError::conflict(
                ConflictKind::RegistryFull,
                format!("All {} seats are taken", self.capacity()),
            ));
        }
        let player = Player::new(name)?;
        ensure_unique_name(&self.players, &player.name)?;
        let id = player.id;
        debug!(player_id = %id, name = %player.name, "Player seated");
        self.players.push(player);
        Ok(id)
    }

    /// Remove a seated player; later players move up one seat.
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.table.player_count()
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.players.len()
    }

    pub fn is_ready(&self) -> bool {
        self.players.len() == self.capacity()
    }

    pub fn phase(&self) -> Phase {
        Phase::Setup
    }

    /// Start the game. Blocked until every seat is filled.
    pub fn finalize(self, blind: bool, round_limit: u8) -> Result<Game, DomainError> {
        if !self.is_ready() {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "Need {} players to start, {} seated",
                    self.capacity(),
                    self.players.len()
                ),
            ));
        }
        create_game_from_players(self.players, blind, round_limit)
    }
}
