//! Collision detection for the ball against bricks, walls, and paddle
//!
//! Detection is deliberately simple and inherited as-is from the classic
//! game: bricks test the ball's *center* point only, and walls test the
//! *predicted* next position so the ball cannot tunnel past a boundary in a
//! single tick at typical speeds.

use glam::Vec2;

use super::state::{Arena, Ball, BrickField, Paddle};

/// Find the first alive brick containing the ball's center.
///
/// Scan order is column-major (column 0..C-1, row 0..R-1), matching layout
/// order. The test is open-interval, so exact-edge contact is a miss. At
/// most one brick is hit per tick; the first match wins even when the ball
/// geometrically overlaps several.
pub fn first_brick_hit(ball_pos: Vec2, field: &BrickField) -> Option<(u32, u32)> {
    field
        .iter()
        .find(|(_, _, brick)| brick.alive && brick.rect().contains_open(ball_pos))
        .map(|(column, row, _)| (column, row))
}

/// Would the ball's next position leave the side walls?
///
/// Checked against the predicted position `x + dx`, keeping the full ball
/// (center ± radius) inside `[0, arena.width]`.
#[inline]
pub fn hits_side_wall(ball: &Ball, arena: &Arena) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > arena.width - ball.radius || next_x < ball.radius
}

/// Would the ball's next position cross the top wall?
#[inline]
pub fn hits_top_wall(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y < ball.radius
}

/// What happens at the bottom edge this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomContact {
    /// Ball is not reaching the bottom this tick
    None,
    /// Paddle is under the ball: bounce
    Caught,
    /// Paddle missed: the session is lost
    Missed,
}

/// Classify bottom-edge contact for the predicted next position.
///
/// The catch test uses the ball's x-center only, not radius-aware edges.
pub fn bottom_contact(ball: &Ball, arena: &Arena, paddle: &Paddle) -> BottomContact {
    if ball.pos.y + ball.vel.y <= arena.height - ball.radius {
        return BottomContact::None;
    }
    if paddle.catches(ball.pos.x) {
        BottomContact::Caught
    } else {
        BottomContact::Missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::BrickField;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            radius: 10.0,
        }
    }

    const ARENA: Arena = Arena {
        width: 480.0,
        height: 320.0,
    };

    #[test]
    fn test_brick_hit_center_inside() {
        let field = BrickField::layout(&GameConfig::default());
        // Inside brick (0,0) at (30,30,75,20)
        assert_eq!(
            first_brick_hit(Vec2::new(60.0, 40.0), &field),
            Some((0, 0))
        );
        // Between brick rows: padding gap, no hit
        assert_eq!(first_brick_hit(Vec2::new(60.0, 55.0), &field), None);
    }

    #[test]
    fn test_brick_hit_edge_is_miss() {
        let field = BrickField::layout(&GameConfig::default());
        // Exactly on the left edge of brick (0,0)
        assert_eq!(first_brick_hit(Vec2::new(30.0, 40.0), &field), None);
        // Exactly on the bottom edge
        assert_eq!(first_brick_hit(Vec2::new(60.0, 50.0), &field), None);
    }

    #[test]
    fn test_brick_hit_skips_destroyed() {
        let mut field = BrickField::layout(&GameConfig::default());
        field.destroy(0, 0);
        assert_eq!(first_brick_hit(Vec2::new(60.0, 40.0), &field), None);
    }

    #[test]
    fn test_brick_hit_first_match_wins() {
        let field = BrickField::layout(&GameConfig::default());
        // Centers cannot overlap two bricks in the default layout, but scan
        // order is still observable: the earliest (column, row) in
        // column-major order is returned.
        let hit = first_brick_hit(Vec2::new(60.0, 40.0), &field).unwrap();
        assert_eq!(hit, (0, 0));
    }

    #[test]
    fn test_side_wall_prediction() {
        // Next x = 472 > 480 - 10
        assert!(hits_side_wall(&ball_at(470.0, 100.0, 2.0, 2.0), &ARENA));
        // Next x = 8 < 10
        assert!(hits_side_wall(&ball_at(10.0, 100.0, -2.0, 2.0), &ARENA));
        // Comfortably inside
        assert!(!hits_side_wall(&ball_at(240.0, 100.0, 2.0, 2.0), &ARENA));
        // Touching the limit exactly is not a hit
        assert!(!hits_side_wall(&ball_at(468.0, 100.0, 2.0, 2.0), &ARENA));
    }

    #[test]
    fn test_top_wall_prediction() {
        assert!(hits_top_wall(&ball_at(240.0, 11.0, 2.0, -2.0)));
        assert!(!hits_top_wall(&ball_at(240.0, 12.0, 2.0, -2.0)));
    }

    #[test]
    fn test_bottom_contact_caught_vs_missed() {
        let paddle = Paddle {
            x: 100.0,
            width: 75.0,
            height: 10.0,
            speed: 7.0,
        };
        // Over the paddle
        assert_eq!(
            bottom_contact(&ball_at(120.0, 309.0, 2.0, 2.0), &ARENA, &paddle),
            BottomContact::Caught
        );
        // Past the paddle
        assert_eq!(
            bottom_contact(&ball_at(250.0, 309.0, 2.0, 2.0), &ARENA, &paddle),
            BottomContact::Missed
        );
        // Not reaching the bottom yet
        assert_eq!(
            bottom_contact(&ball_at(250.0, 100.0, 2.0, 2.0), &ARENA, &paddle),
            BottomContact::None
        );
    }

    #[test]
    fn test_bottom_contact_interval_is_closed() {
        let paddle = Paddle {
            x: 100.0,
            width: 75.0,
            height: 10.0,
            speed: 7.0,
        };
        assert_eq!(
            bottom_contact(&ball_at(100.0, 309.0, 0.0, 2.0), &ARENA, &paddle),
            BottomContact::Caught
        );
        assert_eq!(
            bottom_contact(&ball_at(175.0, 309.0, 0.0, 2.0), &ARENA, &paddle),
            BottomContact::Caught
        );
    }
}
