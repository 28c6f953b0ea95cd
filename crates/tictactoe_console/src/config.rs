//! Console configuration: TOML defaults overridden by CLI flags.

use crate::cli::{Mode, PlayArgs};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::{Difficulty, EngineError, GameEngine, SeededTieBreaker};
use tracing::{debug, info, instrument};

/// Settings for a series of matches.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Who plays seat 2.
    #[serde(default = "default_mode")]
    mode: Mode,

    /// Mark for seat 1.
    #[serde(default = "default_mark1")]
    mark1: String,

    /// Mark for seat 2 in two-player games.
    #[serde(default = "default_mark2")]
    mark2: String,

    /// Machine tier.
    #[serde(default = "default_difficulty")]
    difficulty: Difficulty,

    /// Fixed seed for the machine; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Machine "thinking" delay in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// Log filter used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_mode() -> Mode {
    Mode::Machine
}

fn default_mark1() -> String {
    "X".to_string()
}

fn default_mark2() -> String {
    "O".to_string()
}

fn default_difficulty() -> Difficulty {
    Difficulty::Heuristic
}

fn default_think_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            mark1: default_mark1(),
            mark2: default_mark2(),
            difficulty: default_difficulty(),
            seed: None,
            think_ms: default_think_ms(),
            log_level: default_log_level(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, args: &PlayArgs, log_level: Option<&str>) -> Self {
        if let Some(mode) = args.mode {
            self.mode = mode;
        }
        if let Some(mark1) = &args.mark1 {
            self.mark1 = mark1.clone();
        }
        if let Some(mark2) = &args.mark2 {
            self.mark2 = mark2.clone();
        }
        if let Some(difficulty) = args.difficulty {
            self.difficulty = difficulty;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(think_ms) = args.think_ms {
            self.think_ms = think_ms;
        }
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        self
    }

    /// Machine delay as a duration.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }

    /// Builds the engine for match number `match_no` (1-based).
    ///
    /// With a fixed seed each match gets its own derived seed, so a series
    /// is reproducible without every match playing out the same way.
    #[instrument(skip(self))]
    pub fn build_engine(&self, match_no: u64) -> Result<GameEngine, EngineError> {
        match self.mode {
            Mode::TwoPlayer => GameEngine::two_player(self.mark1.as_str(), self.mark2.as_str()),
            Mode::Machine => GameEngine::against_machine_with(
                self.mark1.as_str(),
                self.difficulty,
                self.tie_breaker(match_no),
            ),
        }
    }

    fn tie_breaker(&self, match_no: u64) -> SeededTieBreaker {
        match self.seed {
            Some(seed) => SeededTieBreaker::new(seed.wrapping_add(match_no)),
            None => SeededTieBreaker::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tictactoe_engine::Seat;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.mode(), &Mode::Machine);
        assert_eq!(config.think_delay(), Duration::from_millis(1000));
        assert_eq!(config.difficulty(), &Difficulty::Heuristic);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"two-player\"\nmark2 = \"@\"\nthink_ms = 0").unwrap();

        let config = ConsoleConfig::from_file(file.path()).unwrap();
        assert_eq!(config.mode(), &Mode::TwoPlayer);
        assert_eq!(config.mark1(), "X");
        assert_eq!(config.mark2(), "@");
        assert_eq!(config.think_ms(), &0);
    }

    #[test]
    fn test_bad_file_reports_location() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "difficulty = \"impossible\"").unwrap();

        let err = ConsoleConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConsoleConfig::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win() {
        let args = PlayArgs {
            mode: Some(Mode::TwoPlayer),
            mark1: Some("A".to_string()),
            think_ms: Some(5),
            ..PlayArgs::default()
        };
        let config = ConsoleConfig::default().with_overrides(&args, Some("debug"));
        assert_eq!(config.mode(), &Mode::TwoPlayer);
        assert_eq!(config.mark1(), "A");
        assert_eq!(config.mark2(), "O");
        assert_eq!(config.think_ms(), &5);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_build_engine_per_mode() {
        let machine = ConsoleConfig::default().build_engine(1).unwrap();
        assert!(machine.is_machine_enabled());

        let args = PlayArgs {
            mode: Some(Mode::TwoPlayer),
            mark2: Some("x".to_string()),
            ..PlayArgs::default()
        };
        let people = ConsoleConfig::default().with_overrides(&args, None).build_engine(1).unwrap();
        assert_eq!(people.mark(Seat::Two).as_str(), "x");
    }

    #[test]
    fn test_build_engine_rejects_reserved_mark() {
        let args = PlayArgs {
            mark1: Some("m".to_string()),
            ..PlayArgs::default()
        };
        let config = ConsoleConfig::default().with_overrides(&args, None);
        assert!(matches!(config.build_engine(1), Err(EngineError::Configuration(_))));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = ConsoleConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: ConsoleConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
