use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{validate_round_limit, TableSize, DEFAULT_ROUND_LIMIT};
use crate::error::AppError;
use crate::errors::domain::DomainError;

pub const ENV_PLAYERS: &str = "CALLBREAK_PLAYERS";
pub const ENV_BLIND: &str = "CALLBREAK_BLIND";
pub const ENV_ROUND_LIMIT: &str = "CALLBREAK_ROUND_LIMIT";

/// Settings fixed when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats at the table (3 or 4).
    pub player_count: usize,
    /// Whether calls are placed blind and scored at the higher multiplier.
    pub blind: bool,
    /// Rounds played before the game ends.
    pub round_limit: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            blind: false,
            round_limit: DEFAULT_ROUND_LIMIT,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        TableSize::require(self.player_count)?;
        validate_round_limit(self.round_limit)?;
        Ok(())
    }

    /// Build a config from environment variables, falling back to defaults
    /// for anything unset. Set-but-invalid values are errors.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            player_count: parse_var(ENV_PLAYERS)?.unwrap_or(defaults.player_count),
            blind: parse_bool_var(ENV_BLIND)?.unwrap_or(defaults.blind),
            round_limit: parse_var(ENV_ROUND_LIMIT)?.unwrap_or(defaults.round_limit),
        };
        config
            .validate()
            .map_err(|e| AppError::config(e.detail().to_string()))?;
        Ok(config)
    }
}

/// Read an optional environment variable and parse it
fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
        Err(_) => Ok(None),
    }
}

fn parse_bool_var(name: &str) -> Result<Option<bool>, AppError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(AppError::config(format!(
                "Environment variable '{name}' must be a boolean, got '{raw}'"
            ))),
        },
        Err(_) => Ok(None),
    }
}
