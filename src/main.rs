//! Headless demo driver
//!
//! Stands in for the renderer/input pair: runs the simulation with a simple
//! ball-tracking paddle until the session ends, logging progress. Pass a
//! JSON config path to play a non-default layout.

use brickfall::GameConfig;
use brickfall::sim::{GameState, TickInput, tick};

/// Safety valve for layouts the tracker cannot clear
const MAX_TICKS: u64 = 1_000_000;

fn load_config() -> GameConfig {
    let Some(path) = std::env::args().nth(1) else {
        return GameConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::error!("Bad config {path}: {e}, using defaults");
                GameConfig::default()
            }
        },
        Err(e) => {
            log::error!("Cannot read {path}: {e}, using defaults");
            GameConfig::default()
        }
    }
}

/// Track the ball: press toward it whenever it is off paddle center
fn autopilot(state: &GameState) -> TickInput {
    let paddle_center = state.paddle.x + state.paddle.width / 2.0;
    TickInput {
        move_left: state.ball.pos.x < paddle_center,
        move_right: state.ball.pos.x > paddle_center,
    }
}

fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let config = load_config();
    let mut state = GameState::new(&config);
    log::info!(
        "Session: {}x{} arena, {}x{} bricks",
        state.arena.width,
        state.arena.height,
        state.bricks.columns(),
        state.bricks.rows()
    );

    let mut ticks: u64 = 0;
    let mut last_score = 0;
    while !state.outcome.is_terminal() && ticks < MAX_TICKS {
        let input = autopilot(&state);
        let snapshot = tick(&mut state, &input);
        ticks += 1;
        if snapshot.score != last_score {
            last_score = snapshot.score;
            log::info!(
                "Score {} ({} bricks left) at tick {ticks}",
                snapshot.score,
                state.bricks.remaining()
            );
        }
    }

    match state.outcome.message() {
        Some(message) => log::info!("{message} Final score {} in {ticks} ticks", state.score),
        None => log::warn!(
            "Stopped after {MAX_TICKS} ticks with {} bricks left",
            state.bricks.remaining()
        ),
    }

    match serde_json::to_string(&state.snapshot()) {
        Ok(json) => log::debug!("Final snapshot: {json}"),
        Err(e) => log::error!("Snapshot serialization failed: {e}"),
    }
}
