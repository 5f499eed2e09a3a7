//! Game state and core simulation types
//!
//! Everything the simulation owns lives here. State is plain data with no
//! hidden globals: a session is one [`GameState`] value, advanced by
//! [`crate::sim::tick`] and discarded (or replaced) when the outcome turns
//! terminal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// Fixed rectangular playfield bounds, immutable for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// One destructible cell of the brick grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Transitions true -> false exactly once, never reverts
    pub alive: bool,
}

impl Brick {
    /// The brick's footprint for collision testing
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The grid of destructible bricks
///
/// Storage is column-major (column 0..C-1, row 0..R-1 within each column),
/// which is also the collision scan order. Grid dimensions are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    columns: u32,
    rows: u32,
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out the grid from the config.
    ///
    /// Each brick's position is a pure function of its (column, row) index:
    /// `x = column * (width + padding) + offset_left` and likewise for y.
    pub fn layout(config: &GameConfig) -> Self {
        let mut bricks = Vec::with_capacity((config.brick_columns * config.brick_rows) as usize);
        for column in 0..config.brick_columns {
            for row in 0..config.brick_rows {
                bricks.push(Brick {
                    x: column as f32 * (config.brick_width + config.brick_padding)
                        + config.brick_offset_left,
                    y: row as f32 * (config.brick_height + config.brick_padding)
                        + config.brick_offset_top,
                    width: config.brick_width,
                    height: config.brick_height,
                    alive: true,
                });
            }
        }
        Self {
            columns: config.brick_columns,
            rows: config.brick_rows,
            bricks,
        }
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total cell count, alive or not
    #[inline]
    pub fn total(&self) -> u32 {
        self.columns * self.rows
    }

    #[inline]
    fn index(&self, column: u32, row: u32) -> usize {
        debug_assert!(column < self.columns && row < self.rows);
        (column * self.rows + row) as usize
    }

    pub fn get(&self, column: u32, row: u32) -> &Brick {
        &self.bricks[self.index(column, row)]
    }

    /// Bricks in scan order, tagged with their (column, row) identity
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Brick)> {
        let rows = self.rows;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| (i as u32 / rows, i as u32 % rows, b))
    }

    /// Mark a brick destroyed.
    ///
    /// Returns true if the brick was newly destroyed, false if it was already
    /// gone (idempotent). The caller owns scoring: exactly one score point
    /// per true return.
    pub fn destroy(&mut self, column: u32, row: u32) -> bool {
        let index = self.index(column, row);
        let brick = &mut self.bricks[index];
        let was_alive = brick.alive;
        brick.alive = false;
        was_alive
    }

    /// Count of bricks still alive (monotonically non-increasing)
    pub fn remaining(&self) -> u32 {
        self.bricks.iter().filter(|b| b.alive).count() as u32
    }

    /// The win condition: no brick left alive
    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }
}

/// The player's paddle, pinned to the bottom edge of the arena
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge; always within [0, arena.width - width]
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Displacement per tick of sustained intent
    pub speed: f32,
}

impl Paddle {
    /// Apply one tick of movement intent, clamped to the arena.
    ///
    /// At most one direction is honored per tick; right intent wins when
    /// both are held.
    pub fn apply_move(&mut self, left: bool, right: bool, arena_width: f32) {
        if right {
            self.x += self.speed;
        } else if left {
            self.x -= self.speed;
        }
        self.x = self.x.clamp(0.0, arena_width - self.width);
    }

    /// Closed catch interval on the x axis
    #[inline]
    pub fn catches(&self, ball_x: f32) -> bool {
        ball_x >= self.x && ball_x <= self.x + self.width
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-tick displacement; components flip sign on bounce but magnitude
    /// is never scaled
    pub vel: Vec2,
    pub radius: f32,
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Simulation is live
    Playing,
    /// All bricks destroyed (terminal)
    Won,
    /// Ball passed the paddle (terminal)
    Lost,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    /// Human-readable result for the session driver; None while playing
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::Won => Some("You win, congratulations!"),
            Outcome::Lost => Some("Game over!"),
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub bricks: BrickField,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Exactly one point per brick destroyed
    pub score: u32,
    pub outcome: Outcome,
}

impl GameState {
    /// Start a fresh session: full brick grid, paddle centered, ball served
    /// from just above the paddle moving up and to the right.
    pub fn new(config: &GameConfig) -> Self {
        let arena = Arena {
            width: config.arena_width,
            height: config.arena_height,
        };
        let (dx, dy) = config.ball_start_vel;
        Self {
            arena,
            bricks: BrickField::layout(config),
            paddle: Paddle {
                x: (config.arena_width - config.paddle_width) / 2.0,
                width: config.paddle_width,
                height: config.paddle_height,
                speed: config.paddle_speed,
            },
            ball: Ball {
                pos: Vec2::new(
                    config.arena_width / 2.0,
                    config.arena_height - crate::consts::BALL_START_LIFT,
                ),
                vel: Vec2::new(dx, dy),
                radius: config.ball_radius,
            },
            score: 0,
            outcome: Outcome::Playing,
        }
    }

    /// Read-only view of the current state for the Renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            outcome: self.outcome,
            ball: self.ball,
            paddle_x: self.paddle.x,
            paddle_y: self.arena.height - self.paddle.height,
            paddle_width: self.paddle.width,
            paddle_height: self.paddle.height,
            columns: self.bricks.columns(),
            rows: self.bricks.rows(),
            bricks: self.bricks.iter().map(|(_, _, b)| *b).collect(),
        }
    }
}

/// Per-tick read-only snapshot for the Renderer
///
/// The Renderer gets copies, never references into the live state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub score: u32,
    pub outcome: Outcome,
    pub ball: Ball,
    pub paddle_x: f32,
    pub paddle_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub columns: u32,
    pub rows: u32,
    /// Scan order: column-major, matching layout
    pub bricks: Vec<Brick>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_positions() {
        let field = BrickField::layout(&GameConfig::default());
        assert_eq!(field.total(), 15);
        assert_eq!(field.remaining(), 15);

        // First brick sits at the grid offset
        let b = field.get(0, 0);
        assert_eq!((b.x, b.y), (30.0, 30.0));

        // x advances by width + padding per column, y by height + padding per row
        let b = field.get(2, 1);
        assert_eq!((b.x, b.y), (30.0 + 2.0 * 85.0, 30.0 + 30.0));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut field = BrickField::layout(&GameConfig::default());
        assert!(field.destroy(1, 2));
        assert!(!field.destroy(1, 2));
        assert_eq!(field.remaining(), 14);
        assert!(!field.get(1, 2).alive);
    }

    #[test]
    fn test_all_destroyed() {
        let mut field = BrickField::layout(&GameConfig::default());
        assert!(!field.all_destroyed());
        for column in 0..field.columns() {
            for row in 0..field.rows() {
                field.destroy(column, row);
            }
        }
        assert!(field.all_destroyed());
        assert_eq!(field.remaining(), 0);
    }

    #[test]
    fn test_iter_is_column_major() {
        let field = BrickField::layout(&GameConfig::default());
        let order: Vec<(u32, u32)> = field.iter().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(&order[..4], &[(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(order.len(), 15);
    }

    #[test]
    fn test_paddle_clamps_at_edges() {
        let mut paddle = Paddle {
            x: 3.0,
            width: 75.0,
            height: 10.0,
            speed: 7.0,
        };
        paddle.apply_move(true, false, 480.0);
        assert_eq!(paddle.x, 0.0);

        paddle.x = 480.0 - 75.0 - 3.0;
        paddle.apply_move(false, true, 480.0);
        assert_eq!(paddle.x, 480.0 - 75.0);
    }

    #[test]
    fn test_paddle_right_intent_wins() {
        let mut paddle = Paddle {
            x: 100.0,
            width: 75.0,
            height: 10.0,
            speed: 7.0,
        };
        paddle.apply_move(true, true, 480.0);
        assert_eq!(paddle.x, 107.0);
    }

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.outcome, Outcome::Playing);
        assert_eq!(state.paddle.x, (480.0 - 75.0) / 2.0);
        assert_eq!(state.ball.pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.bricks.remaining(), 15);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(&GameConfig::default());
        state.bricks.destroy(0, 0);
        state.score = 1;

        let snap = state.snapshot();
        assert_eq!(snap.score, 1);
        assert_eq!(snap.bricks.len(), 15);
        assert!(!snap.bricks[0].alive);
        assert!(snap.bricks[1].alive);
        assert_eq!(snap.paddle_y, 320.0 - 10.0);
    }

    #[test]
    fn test_outcome_messages() {
        assert!(Outcome::Playing.message().is_none());
        assert!(Outcome::Won.message().unwrap().contains("win"));
        assert!(Outcome::Lost.message().unwrap().contains("over"));
    }
}
