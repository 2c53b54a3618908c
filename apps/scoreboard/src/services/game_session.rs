//! Serialized access to one game shared between call sites.
//!
//! `submit_round` is check-then-append, so every submission for a game runs
//! under that game's lock. Readers get cloned snapshots.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::domain::game::submit_round;
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::snapshot::{score_sheet, ScoreSheet};
use crate::domain::standings::{ranked_standings, Standing};
use crate::domain::state::{Game, GameId};
use crate::domain::validation::RoundInput;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub game: Game,
    pub transitions: Vec<GameTransition>,
}

#[derive(Debug)]
pub struct GameSession {
    id: GameId,
    current: Mutex<Game>,
}

impl GameSession {
    pub fn new(game: Game) -> Self {
        Self {
            id: game.id(),
            current: Mutex::new(game),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// Submit a round against the current snapshot and swap in the result.
    pub fn submit(&self, input: &RoundInput) -> Result<SubmitOutcome, DomainError> {
        let mut current = self.current.lock();
        let next = match submit_round(&current, input) {
            Ok(next) => next,
            Err(e) => {
                warn!(game_id = %self.id, error = %e, "Round rejected");
                return Err(e);
            }
        };

        let transitions = derive_game_transitions(&current, &next);
        for transition in &transitions {
            match transition {
                GameTransition::RoundRecorded { round_no } => {
                    debug!(game_id = %self.id, round = round_no, "Transition: round recorded");
                }
                GameTransition::GameEnded => {
                    info!(game_id = %self.id, "Game complete");
                }
            }
        }

        *current = next.clone();
        Ok(SubmitOutcome {
            game: next,
            transitions,
        })
    }

    pub fn snapshot(&self) -> Game {
        self.current.lock().clone()
    }

    pub fn standings(&self) -> Vec<Standing> {
        ranked_standings(&self.current.lock())
    }

    pub fn score_sheet(&self) -> ScoreSheet {
        score_sheet(&self.current.lock())
    }

    pub fn is_complete(&self) -> bool {
        self.current.lock().is_complete()
    }
}
