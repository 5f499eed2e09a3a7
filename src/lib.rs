//! Brickfall - a single-screen brick breaker simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Data-driven game tuning
//!
//! Rendering and input are external collaborators: the simulation consumes a
//! [`sim::TickInput`] built by whatever owns the keyboard and exposes a
//! read-only [`sim::Snapshot`] each tick for whatever owns the screen.

pub mod config;
pub mod sim;

pub use config::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve velocity per tick (up and to the right)
    pub const BALL_START_VEL: (f32, f32) = (2.0, -2.0);
    /// Serve height above the bottom edge
    pub const BALL_START_LIFT: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Fixed paddle displacement per tick of sustained intent
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Gap between neighboring bricks
    pub const BRICK_PADDING: f32 = 10.0;
    /// Grid offset from the arena's top-left corner
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
}
