#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{
    create_game, create_game_with, format_points, is_complete, ranked_standings, score_sheet,
    submit_round, Game, Player, PlayerId, PlayerRegistry, RawEntry, RoundEntry, RoundInput,
    ScoreSheet, Standing,
};
pub use error::{AppError, ProblemDetails};
pub use errors::{ConflictKind, DomainError, ErrorCode, ValidationKind};
pub use services::GameSession;
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
