//! Seeded random games for exercising the engine end to end.
//!
//! Rounds are generated to satisfy both aggregate checks, so every
//! submission is expected to succeed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scoreboard::domain::ranked_standings;
use scoreboard::{
    create_game_with, submit_round, DomainError, Game, GameConfig, RoundEntry, RoundInput,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GameResult {
    pub game_no: u32,
    /// Final totals in seat order.
    pub final_scores: Vec<i32>,
    /// Seats sharing rank 1.
    pub winners: Vec<usize>,
    pub rounds: u8,
}

pub struct Simulator {
    rng: ChaCha8Rng,
    config: GameConfig,
}

impl Simulator {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
        }
    }

    pub fn simulate_game(&mut self, game_no: u32) -> Result<GameResult, DomainError> {
        let names: Vec<String> = (0..self.config.player_count)
            .map(|seat| format!("Seat {seat}"))
            .collect();
        let mut game = create_game_with(&self.config, &names)?;

        while !game.is_complete() {
            let input = self.random_round(&game);
            game = submit_round(&game, &input)?;
        }
        debug!(game_no, "Simulated game complete");
        Ok(summarize(game_no, &game))
    }

    /// Calls reaching at least the table minimum and made counts that use
    /// every trick exactly once.
    fn random_round(&mut self, game: &Game) -> RoundInput {
        let table = game.table_size();
        let n = table.player_count();
        let call_total = self
            .rng
            .random_range(table.min_total_call()..=table.tricks_per_round());
        let calls = self.split(call_total, n);
        let made = self.split(table.tricks_per_round(), n);

        game.players()
            .iter()
            .zip(calls.into_iter().zip(made))
            .map(|(p, (call, made))| (p.id, RoundEntry::new(call, made)))
            .collect()
    }

    /// Uniform random split of `total` into `parts` non-negative counts.
    fn split(&mut self, total: u32, parts: usize) -> Vec<u32> {
        let mut cuts: Vec<u32> = (1..parts).map(|_| self.rng.random_range(0..=total)).collect();
        cuts.sort_unstable();
        cuts.push(total);

        let mut prev = 0;
        cuts.into_iter()
            .map(|cut| {
                let part = cut - prev;
                prev = cut;
                part
            })
            .collect()
    }
}

fn summarize(game_no: u32, game: &Game) -> GameResult {
    let standings = ranked_standings(game);
    let winners = game
        .players()
        .iter()
        .enumerate()
        .filter(|(_, p)| standings.iter().any(|s| s.rank == 1 && s.player.id == p.id))
        .map(|(seat, _)| seat)
        .collect();

    GameResult {
        game_no,
        final_scores: game.players().iter().map(|p| p.score).collect(),
        winners,
        rounds: game.rounds_played(),
    }
}
