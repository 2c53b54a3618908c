//! Domain layer: pure scoring rules, validation and game lifecycle.

pub mod game;
pub mod game_transition;
pub mod players;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod standings;
pub mod state;
pub mod validation;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props_standings;
#[cfg(test)]
mod tests_props_validation;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use game::{create_game, create_game_with, is_complete, submit_round};
pub use game_transition::{derive_game_transitions, GameTransition};
pub use players::{Player, PlayerRegistry};
pub use rules::{TableSize, DEFAULT_ROUND_LIMIT};
pub use scoring::round_score;
pub use snapshot::{format_points, score_sheet, ScoreSheet};
pub use standings::{ranked_standings, Standing};
pub use state::{Game, GameId, Phase, PlayerId, PlayerRound, Round, RoundId};
pub use validation::{validate_round, RawEntry, RoundEntry, RoundInput, ValidatedRound};
