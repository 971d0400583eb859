//! Match configuration loaded from TOML.

use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::MIN_DIM;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Environment variable naming a config file to use when none is passed.
pub const CONFIG_ENV: &str = "NOUGHTS_CONFIG";

/// Board size, players and trial count for a match or simulation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board side length.
    #[serde(default = "default_dim")]
    dim: usize,

    /// Who plays crosses and moves first.
    #[serde(default = "default_player_one")]
    player_one: PlayerKind,

    /// Who plays noughts.
    #[serde(default = "default_player_two")]
    player_two: PlayerKind,

    /// Number of games in a simulation.
    #[serde(default = "default_games")]
    games: usize,

    /// Seed for reproducible random agents.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_dim() -> usize {
    MIN_DIM
}

#[instrument]
fn default_player_one() -> PlayerKind {
    PlayerKind::AlphaBeta
}

#[instrument]
fn default_player_two() -> PlayerKind {
    PlayerKind::Random
}

#[instrument]
fn default_games() -> usize {
    100
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            dim: default_dim(),
            player_one: default_player_one(),
            player_two: default_player_two(),
            games: default_games(),
            seed: None,
        }
    }
}

/// Values given on the command line, applied over a loaded config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Board side length.
    pub dim: Option<usize>,
    /// Player one kind.
    pub player_one: Option<PlayerKind>,
    /// Player two kind.
    pub player_two: Option<PlayerKind>,
    /// Number of games.
    pub games: Option<usize>,
    /// Random seed.
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Defaults for interactive play: a human against the alpha-beta agent.
    #[instrument]
    pub fn interactive() -> Self {
        Self {
            player_one: PlayerKind::Human,
            player_two: PlayerKind::AlphaBeta,
            games: 1,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            dim = config.dim,
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Resolves the config to start from.
    ///
    /// Resolution order:
    /// 1. `path`, when given
    /// 2. the file named by `$NOUGHTS_CONFIG`
    /// 3. `fallback`
    #[instrument(skip(fallback))]
    pub fn resolve(path: Option<&Path>, fallback: Self) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            debug!(path = %env_path, "Using NOUGHTS_CONFIG env var");
            return Self::from_file(PathBuf::from(env_path));
        }

        debug!("No config file, using defaults");
        Ok(fallback)
    }

    /// Replaces every field that was given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(dim) = overrides.dim {
            self.dim = dim;
        }
        if let Some(kind) = overrides.player_one {
            self.player_one = kind;
        }
        if let Some(kind) = overrides.player_two {
            self.player_two = kind;
        }
        if let Some(games) = overrides.games {
            self.games = games;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// Checks the config can be played.
    ///
    /// Simulations are unattended, so they reject human players.
    #[instrument(skip(self))]
    pub fn validate(&self, unattended: bool) -> Result<(), ConfigError> {
        if self.dim < MIN_DIM {
            return Err(ConfigError::new(format!(
                "Board dimension must be at least {}, got {}",
                MIN_DIM, self.dim
            )));
        }

        if self.games == 0 {
            return Err(ConfigError::new("Number of games must be at least 1"));
        }

        if unattended && (self.player_one.is_human() || self.player_two.is_human()) {
            return Err(ConfigError::new("Simulations cannot include human players"));
        }

        let searching = self.player_one.is_search() || self.player_two.is_search();
        if searching && self.dim > MIN_DIM {
            warn!(
                dim = self.dim,
                "Exhaustive search on boards larger than 3x3 can take a very long time"
            );
        }

        Ok(())
    }
}

/// Match configuration that could not be loaded or would not play.
///
/// Carries the file and line that rejected the config.
#[derive(Debug, Clone, Display, Error)]
#[display("Match config rejected: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What was wrong with the match config.
    pub message: String,
    /// Line that raised the error.
    pub line: u32,
    /// File that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error located at the caller.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        let message = message.into();
        debug!(%message, "Rejecting match config");
        Self {
            message,
            line: caller.line(),
            file: caller.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_points_at_raiser() {
        let err = MatchConfig::default()
            .with_overrides(&ConfigOverrides {
                games: Some(0),
                ..ConfigOverrides::default()
            })
            .validate(true)
            .unwrap_err();
        assert!(err.file.ends_with("config.rs"), "{}", err.file);
        assert!(err.to_string().starts_with("Match config rejected: Number of games"));
    }
}
