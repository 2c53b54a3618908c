//! `callbreak` - replay scripted Call Break games or simulate random ones.

mod output;
mod report;
mod script;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use output::OutputWriter;
use scoreboard::{ranked_standings, score_sheet, AppError, GameConfig};
use script::{play_script, Script};
use simulator::Simulator;
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "callbreak")]
#[command(about = "Call Break scoreboard: validate, score and rank rounds")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit structured JSON logs filtered by RUST_LOG
    #[arg(long, global = true, conflicts_with = "verbose")]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSON game script and print standings
    Play {
        /// Script file with players and rounds
        #[arg(long)]
        script: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write the score sheet (JSON) and rounds (CSV) here
        #[arg(long)]
        output_dir: Option<String>,

        /// Gzip the JSON score sheet
        #[arg(long, requires = "output_dir")]
        compress: bool,
    },
    /// Play random valid games and summarize wins by seat
    Simulate {
        /// Number of games to simulate
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Players per table (3 or 4)
        #[arg(long)]
        players: Option<usize>,

        /// Score every game at the blind multiplier
        #[arg(long)]
        blind: bool,

        /// Seed for deterministic runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        scoreboard::init_tracing();
    } else {
        let filter = if args.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // CALLBREAK_* variables supply defaults; flags and scripts override them
    let base = GameConfig::from_env()?;

    match args.command {
        Command::Play {
            script,
            format,
            output_dir,
            compress,
        } => run_play(&script, format, output_dir.as_deref(), compress, base),
        Command::Simulate {
            games,
            players,
            blind,
            seed,
        } => {
            let config = GameConfig {
                player_count: players.unwrap_or(base.player_count),
                blind: blind || base.blind,
                ..base
            };
            run_simulate(games, config, seed)
        }
    }
}

fn run_play(
    path: &std::path::Path,
    format: OutputFormat,
    output_dir: Option<&str>,
    compress: bool,
    base: GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = Script::load(path)?;
    let outcome = play_script(script, base).map_err(AppError::from)?;
    let sheet = score_sheet(&outcome.game);

    match format {
        OutputFormat::Text => {
            print!("{}", report::render_game(&ranked_standings(&outcome.game), &sheet));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sheet)?),
    }

    if let Some(dir) = output_dir {
        let writer = OutputWriter::new(dir, compress)?;
        let (json_path, csv_path) = writer.write_sheet(&sheet)?;
        info!("Score sheet written to: {}", json_path.display());
        info!("Rounds CSV written to: {}", csv_path.display());
    }

    if outcome.ignored > 0 {
        eprintln!(
            "Ignored {} round(s) after the game ended",
            outcome.ignored
        );
    }
    if let Some(rejection) = outcome.rejected {
        let problem = AppError::from(rejection.error).problem();
        eprintln!(
            "Round {} rejected ({}): {}",
            rejection.round_no, problem.code, problem.detail
        );
        return Err(problem.detail.into());
    }
    Ok(())
}

fn run_simulate(
    games: u32,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate().map_err(AppError::from)?;
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, games, players = config.player_count, "Starting simulation");

    let mut simulator = Simulator::new(seed, config);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_no in 1..=games {
        match simulator.simulate_game(game_no) {
            Ok(result) => {
                info!(game_no, scores = ?result.final_scores, "Game completed");
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_no, e);
            }
        }
    }

    println!("Seed: {seed}");
    report::print_summary(&results, errors, start.elapsed(), games);
    Ok(())
}
