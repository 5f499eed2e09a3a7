//! Data-driven game tuning
//!
//! Every number the simulation cares about lives in [`GameConfig`] so a
//! driver can load alternate layouts from JSON without recompiling. Defaults
//! reproduce the classic 480x320 layout.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width
    pub arena_width: f32,
    /// Playfield height
    pub arena_height: f32,

    /// Ball radius
    pub ball_radius: f32,
    /// Serve velocity per tick
    pub ball_start_vel: (f32, f32),

    /// Paddle dimensions
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle displacement per tick of sustained intent
    pub paddle_speed: f32,

    /// Brick grid dimensions
    pub brick_columns: u32,
    pub brick_rows: u32,
    /// Single brick dimensions
    pub brick_width: f32,
    pub brick_height: f32,
    /// Gap between neighboring bricks
    pub brick_padding: f32,
    /// Grid offset from the arena's top-left corner
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_start_vel: BALL_START_VEL,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

/// Why a config was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// Not valid JSON / wrong shape
    Parse(serde_json::Error),
    /// Parsed fine but the numbers make no playable game
    Invalid(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot produce a playable session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::Invalid("arena dimensions must be positive"));
        }
        if self.ball_radius <= 0.0 {
            return Err(ConfigError::Invalid("ball radius must be positive"));
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(ConfigError::Invalid("paddle dimensions must be positive"));
        }
        if self.paddle_width > self.arena_width {
            return Err(ConfigError::Invalid("paddle wider than arena"));
        }
        if self.brick_columns == 0 || self.brick_rows == 0 {
            return Err(ConfigError::Invalid("brick grid must have at least one cell"));
        }
        if self.brick_width <= 0.0 || self.brick_height <= 0.0 {
            return Err(ConfigError::Invalid("brick dimensions must be positive"));
        }
        Ok(())
    }
}
