//! Round input types and the aggregate checks a round must pass before it
//! is scored.
//!
//! The totals must reconcile with the deck: with no record of actual card
//! play, arithmetic consistency is the integrity check.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::players::Player;
use crate::domain::rules::TableSize;
use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

/// A parsed call/made pair for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEntry {
    pub call: u32,
    pub made: u32,
}

impl RoundEntry {
    pub const fn new(call: u32, made: u32) -> Self {
        Self { call, made }
    }
}

/// Unparsed text as typed by a user. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub call: Option<String>,
    pub made: Option<String>,
}

impl RawEntry {
    pub fn new(call: impl Into<String>, made: impl Into<String>) -> Self {
        Self {
            call: Some(call.into()),
            made: Some(made.into()),
        }
    }

    /// Strict parse: blank or non-numeric text is an error, never zero.
    pub fn parse(&self) -> Result<RoundEntry, DomainError> {
        Ok(RoundEntry {
            call: parse_count("call", self.call.as_deref())?,
            made: parse_count("made", self.made.as_deref())?,
        })
    }
}

/// Parse a non-negative trick count.
pub fn parse_count(field: &str, text: Option<&str>) -> Result<u32, DomainError> {
    let text = text.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingInput,
            format!("Missing {field} value"),
        ));
    }
    text.parse::<u32>().map_err(|_| {
        DomainError::validation(
            ValidationKind::MissingInput,
            format!("Invalid {field} value '{text}': expected a non-negative whole number"),
        )
    })
}

/// Proposed round: one entry per player id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundInput {
    entries: BTreeMap<PlayerId, RoundEntry>,
}

impl RoundInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, player: PlayerId, call: u32, made: u32) -> Self {
        self.insert(player, RoundEntry::new(call, made));
        self
    }

    pub fn insert(&mut self, player: PlayerId, entry: RoundEntry) -> Option<RoundEntry> {
        self.entries.insert(player, entry)
    }

    pub fn get(&self, player: PlayerId) -> Option<&RoundEntry> {
        self.entries.get(&player)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse raw text for every player; the first unparsable value wins.
    /// A player listed twice is rejected rather than overwritten.
    pub fn from_raw<I>(raw: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (PlayerId, RawEntry)>,
    {
        let mut input = Self::new();
        for (player, entry) in raw {
            if input.insert(player, entry.parse()?).is_some() {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateEntry,
                    format!("Duplicate entry for player {player}"),
                ));
            }
        }
        Ok(input)
    }
}

impl FromIterator<(PlayerId, RoundEntry)> for RoundInput {
    fn from_iter<T: IntoIterator<Item = (PlayerId, RoundEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A round that passed every check, with entries in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRound {
    entries: Vec<(PlayerId, RoundEntry)>,
}

impl ValidatedRound {
    pub fn entries(&self) -> &[(PlayerId, RoundEntry)] {
        &self.entries
    }

    pub fn total_call(&self) -> u64 {
        self.entries.iter().map(|(_, e)| u64::from(e.call)).sum()
    }

    pub fn total_made(&self) -> u64 {
        self.entries.iter().map(|(_, e)| u64::from(e.made)).sum()
    }
}

/// Check completeness and both aggregate constraints.
///
/// Order: completeness, then total call minimum, then total made.
pub fn validate_round(
    players: &[Player],
    input: &RoundInput,
) -> Result<ValidatedRound, DomainError> {
    let table = TableSize::require(players.len())?;

    if let Some(stray) = input
        .entries
        .keys()
        .find(|pid| !players.iter().any(|p| p.id == **pid))
    {
        return Err(DomainError::validation(
            ValidationKind::UnknownPlayer,
            format!("Player {stray} is not part of this game"),
        ));
    }

    let mut entries = Vec::with_capacity(players.len());
    for player in players {
        let entry = input.get(player.id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MissingInput,
                format!("Missing call and made for {}", player.name),
            )
        })?;
        entries.push((player.id, *entry));
    }
    let round = ValidatedRound { entries };

    let required = table.min_total_call();
    if round.total_call() < u64::from(required) {
        return Err(DomainError::validation(
            ValidationKind::InsufficientTotalCall { required },
            format!("Total call must be at least {required}. Reshuffle cards."),
        ));
    }

    let expected = table.tricks_per_round();
    if round.total_made() != u64::from(expected) {
        return Err(DomainError::validation(
            ValidationKind::MadeTotalMismatch { expected },
            format!("Total made must be exactly {expected}."),
        ));
    }

    Ok(round)
}
