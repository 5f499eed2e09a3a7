//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! Everything in the arena is a rectangle except the ball, and the ball only
//! ever collides as a point (its center) or as a predicted circle edge, so
//! this is the whole geometry kit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Open-interval containment: points exactly on an edge do not count.
    ///
    /// Brick hits use this test so grazing the boundary is a miss.
    #[inline]
    pub fn contains_open(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}
