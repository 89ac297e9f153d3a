//! Physics stages
//!
//! Each stage is a pure function of the previous state. Collision checks look
//! at the tentative position `pos + vel` while the ball still sits at `pos`,
//! so a bounce is decided before the ball would cross a boundary.

use glam::Vec2;

use super::state::{Court, GameState};

/// A single step of the per-tick pipeline
pub type Stage = fn(GameState, &Court) -> GameState;

/// Stages in execution order
pub const PIPELINE: [Stage; 4] = [collide_walls, check_out_of_court, move_paddle, move_ball];

/// Reflect the ball off the side walls and the top wall
///
/// Only the velocity sign changes here.
pub fn collide_walls(state: GameState, court: &Court) -> GameState {
    let next = state.ball_pos + state.ball_vel;
    let r = court.ball_radius;
    let mut vel = state.ball_vel;

    if next.x > court.width - r || next.x < r {
        vel.x = -vel.x;
    }
    if next.y < r {
        vel.y = -vel.y;
    }

    GameState {
        ball_vel: vel,
        ..state
    }
}

/// Bottom edge: bounce off the paddle or end the game
pub fn check_out_of_court(state: GameState, court: &Court) -> GameState {
    let next_y = state.ball_pos.y + state.ball_vel.y;
    if next_y <= court.height - court.ball_radius {
        return state;
    }

    let x = state.ball_pos.x;
    if x > state.paddle_x && x < state.paddle_x + court.paddle_width {
        log::debug!("Paddle hit at x={:.1} (paddle {:.1})", x, state.paddle_x);
        GameState {
            ball_vel: Vec2::new(state.ball_vel.x, -state.ball_vel.y),
            ..state
        }
    } else {
        GameState {
            is_over: true,
            ..state
        }
    }
}

/// Slide the paddle while a direction is held
///
/// Both directions are tested against the same starting position, so holding
/// left and right together cancels out.
pub fn move_paddle(state: GameState, court: &Court) -> GameState {
    let x = state.paddle_x;
    let max_x = court.paddle_max_x();

    let mut delta = 0.0;
    if state.right_held && x < max_x {
        delta += court.paddle_step;
    }
    if state.left_held && x > 0.0 {
        delta -= court.paddle_step;
    }

    GameState {
        paddle_x: (x + delta).clamp(0.0, max_x),
        ..state
    }
}

/// Advance the ball by its (already reflected) velocity
///
/// A ball that has just left the court stays put so the losing frame shows
/// where it crossed.
pub fn move_ball(state: GameState, _court: &Court) -> GameState {
    if state.is_over {
        return state;
    }
    GameState {
        ball_pos: state.ball_pos + state.ball_vel,
        ..state
    }
}
