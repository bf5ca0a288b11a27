//! Engine configuration, validated before any simulation state exists.

use std::fmt;
use std::time::Duration;

use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_FALL_CYCLE_SECS, MAX_BOARD_HEIGHT,
    MAX_BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
};

pub const ENV_BOARD_WIDTH: &str = "TETRIS_BOARD_WIDTH";
pub const ENV_BOARD_HEIGHT: &str = "TETRIS_BOARD_HEIGHT";
pub const ENV_FALL_CYCLE_SECS: &str = "TETRIS_FALL_CYCLE_SECS";
pub const ENV_SEED: &str = "TETRIS_SEED";

/// Longest accepted gravity interval, in seconds.
pub const MAX_FALL_CYCLE_SECS: f32 = 3600.0;

/// Construction-time settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub board_width: u16,
    pub board_height: u16,
    /// Seconds between gravity ticks. Consumed by the scheduler, not the core.
    pub fall_cycle_secs: f32,
    /// Spawn randomizer seed; `None` lets the caller pick one.
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH as u16,
            board_height: DEFAULT_BOARD_HEIGHT as u16,
            fall_cycle_secs: DEFAULT_FALL_CYCLE_SECS,
            seed: None,
        }
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    BoardWidth(u16),
    BoardHeight(u16),
    FallCycle(f32),
    Parse { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardWidth(w) => write!(
                f,
                "board width {} outside {}..={}",
                w, MIN_BOARD_WIDTH, MAX_BOARD_WIDTH
            ),
            ConfigError::BoardHeight(h) => write!(
                f,
                "board height {} outside {}..={}",
                h, MIN_BOARD_HEIGHT, MAX_BOARD_HEIGHT
            ),
            ConfigError::FallCycle(secs) => {
                write!(
                    f,
                    "fall cycle must be in (0, {}] seconds, got {}",
                    MAX_FALL_CYCLE_SECS, secs
                )
            }
            ConfigError::Parse { var, value } => write!(f, "cannot parse {}={:?}", var, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_WIDTH as u16..=MAX_BOARD_WIDTH as u16).contains(&self.board_width) {
            return Err(ConfigError::BoardWidth(self.board_width));
        }
        if !(MIN_BOARD_HEIGHT as u16..=MAX_BOARD_HEIGHT as u16).contains(&self.board_height) {
            return Err(ConfigError::BoardHeight(self.board_height));
        }
        let secs = self.fall_cycle_secs;
        if !(secs > 0.0 && secs <= MAX_FALL_CYCLE_SECS) {
            return Err(ConfigError::FallCycle(secs));
        }
        Ok(())
    }

    /// Gravity interval as a `Duration`.
    ///
    /// An unvalidated, unrepresentable value falls back to the default.
    pub fn fall_cycle(&self) -> Duration {
        Duration::try_from_secs_f32(self.fall_cycle_secs)
            .unwrap_or_else(|_| Duration::from_secs_f32(DEFAULT_FALL_CYCLE_SECS))
    }

    /// Create from environment variables.
    ///
    /// Unset variables keep their defaults. The result is validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`EngineConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(w) = parse_var(&lookup, ENV_BOARD_WIDTH)? {
            config.board_width = w;
        }
        if let Some(h) = parse_var(&lookup, ENV_BOARD_HEIGHT)? {
            config.board_height = h;
        }
        if let Some(secs) = parse_var(&lookup, ENV_FALL_CYCLE_SECS)? {
            config.fall_cycle_secs = secs;
        }
        config.seed = parse_var(&lookup, ENV_SEED)?;

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ConfigError::Parse {
        var,
        value: raw.clone(),
    })
}
