//! Per-frame simulation tick
//!
//! One call advances the session by exactly one frame: paddle intent is
//! applied, the ball is collision-tested against bricks, walls, and paddle,
//! and the terminal conditions are evaluated. The external driver schedules
//! one call per rendered frame and stops once the outcome turns terminal.

use super::collision::{BottomContact, bottom_contact, first_brick_hit, hits_side_wall, hits_top_wall};
use super::state::{GameState, Outcome, Snapshot};

/// Movement intent for a single tick
///
/// Sustained key-press state, captured edge-triggered by the input source
/// and read once at the start of each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the session by one frame.
///
/// Once the outcome is terminal this is a guaranteed no-op: the driver and
/// Renderer may keep calling it safely until they react to the result.
///
/// Within a live tick the order is fixed:
/// 1. paddle movement from intent
/// 2. brick collision at the ball's current center (at most one brick;
///    always a vertical reflection, whichever side was struck)
/// 3. side/top wall reflection against the predicted next position
/// 4. bottom edge: paddle bounce or loss
/// 5. position update using the possibly-inverted velocity
pub fn tick(state: &mut GameState, input: &TickInput) -> Snapshot {
    if state.outcome.is_terminal() {
        return state.snapshot();
    }

    state
        .paddle
        .apply_move(input.move_left, input.move_right, state.arena.width);

    if let Some((column, row)) = first_brick_hit(state.ball.pos, &state.bricks)
        && state.bricks.destroy(column, row)
    {
        state.ball.vel.y = -state.ball.vel.y;
        state.score += 1;
        log::debug!("Brick ({column}, {row}) destroyed, score {}", state.score);

        if state.score == state.bricks.total() {
            state.outcome = Outcome::Won;
            return state.snapshot();
        }
    }

    if hits_side_wall(&state.ball, &state.arena) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if hits_top_wall(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
    } else {
        match bottom_contact(&state.ball, &state.arena, &state.paddle) {
            BottomContact::None => {}
            BottomContact::Caught => state.ball.vel.y = -state.ball.vel.y,
            BottomContact::Missed => {
                state.outcome = Outcome::Lost;
                return state.snapshot();
            }
        }
    }

    let vel = state.ball.vel;
    state.ball.pos += vel;

    state.snapshot()
}
