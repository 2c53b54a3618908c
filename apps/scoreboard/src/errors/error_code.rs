//! Error codes for the scoreboard.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are the exact strings a
//! collaborator receives in structured error reports.

use core::fmt;

use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup
    /// Player count is not 3 or 4
    InvalidPlayerCount,
    /// Blank player name
    InvalidPlayerName,
    /// Name already used at this table
    DuplicatePlayer,
    /// Table already has every seat filled
    RegistryFull,
    /// Round limit out of range
    InvalidRoundLimit,

    // Round submission
    /// Call or made value missing or unparsable
    MissingInput,
    /// Round input references a player not in the game
    UnknownPlayer,
    /// Same player listed twice in one round
    DuplicateEntry,
    /// Total call below the table minimum
    InsufficientTotalCall,
    /// Total made does not match the tricks dealt
    MadeTotalMismatch,
    /// Game already reached its round limit
    GameComplete,

    // System
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::RegistryFull => "REGISTRY_FULL",
            Self::InvalidRoundLimit => "INVALID_ROUND_LIMIT",

            Self::MissingInput => "MISSING_INPUT",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",
            Self::InsufficientTotalCall => "INSUFFICIENT_TOTAL_CALL",
            Self::MadeTotalMismatch => "MADE_TOTAL_MISMATCH",
            Self::GameComplete => "GAME_COMPLETE",

            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::InvalidPlayerCount => Self::InvalidPlayerCount,
            ValidationKind::InvalidPlayerName => Self::InvalidPlayerName,
            ValidationKind::MissingInput => Self::MissingInput,
            ValidationKind::UnknownPlayer => Self::UnknownPlayer,
            ValidationKind::DuplicateEntry => Self::DuplicateEntry,
            ValidationKind::InsufficientTotalCall { .. } => Self::InsufficientTotalCall,
            ValidationKind::MadeTotalMismatch { .. } => Self::MadeTotalMismatch,
            ValidationKind::InvalidRoundLimit => Self::InvalidRoundLimit,
        }
    }
}

impl From<&ConflictKind> for ErrorCode {
    fn from(kind: &ConflictKind) -> Self {
        match kind {
            ConflictKind::GameComplete => Self::GameComplete,
            ConflictKind::RegistryFull => Self::RegistryFull,
            ConflictKind::DuplicatePlayer => Self::DuplicatePlayer,
        }
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => kind.into(),
            DomainError::Conflict(kind, _) => kind.into(),
        }
    }
}
