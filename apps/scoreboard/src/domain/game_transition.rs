use crate::domain::state::Game;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: a new round was appended.
    RoundRecorded { round_no: u8 },

    /// Edge-triggered: the game reached its round limit.
    GameEnded,
}

/// Derive transitions from before/after snapshots of the same game.
pub fn derive_game_transitions(before: &Game, after: &Game) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    for round in after.rounds().iter().skip(before.rounds().len()) {
        transitions.push(GameTransition::RoundRecorded {
            round_no: round.round_no(),
        });
    }

    if !before.is_complete() && after.is_complete() {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
