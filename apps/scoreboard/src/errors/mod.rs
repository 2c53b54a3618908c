//! Error handling for the scoreboard.

pub mod domain;
pub mod error_code;

pub use domain::{ConflictKind, DomainError, ValidationKind};
pub use error_code::ErrorCode;
