//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous tick per rendered frame, no suspension
//! - Stable brick scan order (column-major, matching layout)
//! - No rendering or platform dependencies
//!
//! The tick that causes a Won/Lost transition is the last tick that mutates
//! state; every call after that is a no-op.

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BottomContact, bottom_contact, first_brick_hit, hits_side_wall, hits_top_wall};
pub use rect::Rect;
pub use state::{Arena, Ball, Brick, BrickField, GameState, Outcome, Paddle, Snapshot};
pub use tick::{TickInput, tick};
