//! Scripted games: a JSON file describing players and every round's
//! call/made values, replayed through the scoring engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use scoreboard::{
    create_game_with, submit_round, DomainError, Game, GameConfig, PlayerId, RawEntry,
    RoundInput, ValidationKind,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// A count as written in the script: `"3"` and `3` are both accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Count(u64),
    Text(String),
}

impl ScriptValue {
    fn into_text(self) -> String {
        match self {
            ScriptValue::Count(n) => n.to_string(),
            ScriptValue::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptEntry {
    #[serde(default)]
    pub call: Option<ScriptValue>,
    #[serde(default)]
    pub made: Option<ScriptValue>,
}

impl From<ScriptEntry> for RawEntry {
    fn from(entry: ScriptEntry) -> Self {
        RawEntry {
            call: entry.call.map(ScriptValue::into_text),
            made: entry.made.map(ScriptValue::into_text),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub players: Vec<String>,
    #[serde(default)]
    pub blind: Option<bool>,
    #[serde(default)]
    pub round_limit: Option<u8>,
    /// Rounds keyed by player name.
    #[serde(default)]
    pub rounds: Vec<BTreeMap<String, ScriptEntry>>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {e}", path.display()))?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Game settings: script values win over `base`.
    pub fn config(&self, base: GameConfig) -> GameConfig {
        GameConfig {
            player_count: self.players.len(),
            blind: self.blind.unwrap_or(base.blind),
            round_limit: self.round_limit.unwrap_or(base.round_limit),
        }
    }
}

/// A round the engine refused; later rounds are not attempted.
#[derive(Debug)]
pub struct Rejection {
    /// 1-based position of the round in the script.
    pub round_no: usize,
    pub error: DomainError,
}

#[derive(Debug)]
pub struct PlayOutcome {
    pub game: Game,
    pub rejected: Option<Rejection>,
    /// Script rounds beyond the round limit.
    pub ignored: usize,
}

/// Replay a script from a fresh game.
pub fn play_script(script: Script, base: GameConfig) -> Result<PlayOutcome, DomainError> {
    let config = script.config(base);
    let mut game = create_game_with(&config, &script.players)?;
    let total = script.rounds.len();

    for (idx, round) in script.rounds.into_iter().enumerate() {
        let round_no = idx + 1;
        if game.is_complete() {
            let ignored = total - idx;
            warn!(ignored, "Script has rounds beyond the round limit");
            return Ok(PlayOutcome {
                game,
                rejected: None,
                ignored,
            });
        }

        let input = match round_input(&game, round) {
            Ok(input) => input,
            Err(error) => {
                return Ok(PlayOutcome {
                    game,
                    rejected: Some(Rejection { round_no, error }),
                    ignored: 0,
                })
            }
        };
        match submit_round(&game, &input) {
            Ok(next) => {
                debug!(round_no, "Script round accepted");
                game = next;
            }
            Err(error) => {
                warn!(round_no, %error, "Script round rejected");
                return Ok(PlayOutcome {
                    game,
                    rejected: Some(Rejection { round_no, error }),
                    ignored: 0,
                });
            }
        }
    }

    info!(rounds = game.rounds_played(), "Script finished");
    Ok(PlayOutcome {
        game,
        rejected: None,
        ignored: 0,
    })
}

/// Resolve names to player ids and parse raw values.
fn round_input(
    game: &Game,
    round: BTreeMap<String, ScriptEntry>,
) -> Result<RoundInput, DomainError> {
    let mut raw: Vec<(PlayerId, RawEntry)> = Vec::with_capacity(round.len());
    for (name, entry) in round {
        let player = game
            .players()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownPlayer,
                    format!("Unknown player '{name}'"),
                )
            })?;
        raw.push((player.id, entry.into()));
    }
    RoundInput::from_raw(raw)
}
