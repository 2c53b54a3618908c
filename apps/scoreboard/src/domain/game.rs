//! Game lifecycle: creation and round submission.
//!
//! Every transition takes the current [`Game`] by reference and returns the
//! next snapshot. On error the caller still holds the untouched original.

use tracing::{debug, info};

use crate::config::game::GameConfig;
use crate::domain::players::{ensure_unique_name, Player};
use crate::domain::rules::{validate_round_limit, TableSize};
use crate::domain::scoring::score_round;
use crate::domain::state::{Game, GameId, Phase, Round};
use crate::domain::validation::{validate_round, RoundInput};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Create a game with the default round limit.
pub fn create_game<S: AsRef<str>>(
    names: &[S],
    player_count: usize,
    blind: bool,
) -> Result<Game, DomainError> {
    let config = GameConfig {
        player_count,
        blind,
        ..GameConfig::default()
    };
    create_game_with(&config, names)
}

pub fn create_game_with<S: AsRef<str>>(
    config: &GameConfig,
    names: &[S],
) -> Result<Game, DomainError> {
    config.validate()?;
    if names.len() != config.player_count {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!(
                "Expected {} player names, got {}",
                config.player_count,
                names.len()
            ),
        ));
    }

    let mut players: Vec<Player> = Vec::with_capacity(names.len());
    for name in names {
        let player = Player::new(name.as_ref())?;
        ensure_unique_name(&players, &player.name)?;
        players.push(player);
    }
    create_game_from_players(players, config.blind, config.round_limit)
}

pub(crate) fn create_game_from_players(
    players: Vec<Player>,
    blind: bool,
    round_limit: u8,
) -> Result<Game, DomainError> {
    TableSize::require(players.len())?;
    let round_limit = validate_round_limit(round_limit)?;

    let game = Game {
        id: GameId::new(),
        players: players
            .into_iter()
            .map(|p| Player { score: 0, ..p })
            .collect(),
        rounds: Vec::new(),
        blind,
        round_limit,
    };
    info!(
        game_id = %game.id,
        players = game.players.len(),
        blind,
        round_limit,
        "Game created"
    );
    Ok(game)
}

/// Validate, score and record one round.
pub fn submit_round(game: &Game, input: &RoundInput) -> Result<Game, DomainError> {
    let round_no = match game.phase() {
        Phase::InRound(n) => n,
        Phase::Setup | Phase::Complete => {
            return Err(DomainError::conflict(
                ConflictKind::GameComplete,
                format!("All {} rounds have been played", game.round_limit),
            ));
        }
    };

    let validated = validate_round(&game.players, input)?;
    let results = score_round(&validated, game.blind);

    let mut next = game.clone();
    next.rounds.push(Round::new(round_no, results));
    refresh_score_cache(&mut next);

    info!(game_id = %next.id, round = round_no, "Round recorded");
    debug!(game_id = %next.id, phase = ?next.phase(), "Transition");
    Ok(next)
}

pub fn is_complete(game: &Game) -> bool {
    game.is_complete()
}

fn refresh_score_cache(game: &mut Game) {
    let totals: Vec<i32> = game.players.iter().map(|p| game.total_for(p.id)).collect();
    for (player, total) in game.players.iter_mut().zip(totals) {
        player.score = total;
    }
}
