//! Domain-level error type used by the scoring engine and its callers.
//!
//! This error type is presentation-agnostic. Every variant carries a
//! human-readable detail string that a caller can show as-is; the kind
//! carries the structured data (required totals and the like).

use thiserror::Error;

/// Validation kinds for rejected setup or round input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Player count is not 3 or 4, or does not match the names supplied.
    InvalidPlayerCount,
    /// Player name is empty after trimming.
    InvalidPlayerName,
    /// A call or made value is absent, blank or not a non-negative integer.
    MissingInput,
    /// Round input names a player that is not seated in the game.
    UnknownPlayer,
    /// Round input carries more than one entry for the same player.
    DuplicateEntry,
    /// Sum of calls is below the table minimum.
    InsufficientTotalCall { required: u32 },
    /// Sum of made tricks does not reconcile with the deck.
    MadeTotalMismatch { expected: u32 },
    /// Round limit must be at least one round.
    InvalidRoundLimit,
}

/// Conflicts with the current game or registry state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// All configured rounds have been played.
    GameComplete,
    /// Every seat at the table is already taken.
    RegistryFull,
    /// Another player already uses this name.
    DuplicatePlayer,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input or business rule violation
    #[error("validation error: {1}")]
    Validation(ValidationKind, String),
    /// Operation conflicts with current state
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    /// Display-ready detail without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::Conflict(_, d) => d,
        }
    }

    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Conflict(..) => None,
        }
    }

    pub fn conflict_kind(&self) -> Option<&ConflictKind> {
        match self {
            DomainError::Conflict(kind, _) => Some(kind),
            DomainError::Validation(..) => None,
        }
    }
}
