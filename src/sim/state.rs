//! Game state and court configuration
//!
//! `GameState` is a plain value: every stage takes one by value and returns
//! the next. `Court` holds the dimensions that never change during a game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::edit::Direction;

/// Immutable court configuration
///
/// Built by [`Settings::court`](crate::Settings::court), which rejects
/// dimensions the physics cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Court {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) ball_radius: f32,
    pub(crate) paddle_width: f32,
    pub(crate) paddle_height: f32,
    pub(crate) paddle_step: f32,
    pub(crate) ball_velocity: Vec2,
    pub(crate) ball_start_offset: f32,
}

impl Court {
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn ball_radius(&self) -> f32 {
        self.ball_radius
    }

    #[inline]
    pub fn paddle_width(&self) -> f32 {
        self.paddle_width
    }

    #[inline]
    pub fn paddle_height(&self) -> f32 {
        self.paddle_height
    }

    #[inline]
    pub fn paddle_step(&self) -> f32 {
        self.paddle_step
    }

    /// Rightmost legal paddle position (left edge)
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.width - self.paddle_width
    }
}

/// Snapshot of everything needed to render and simulate one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Ball center, court-relative
    pub ball_pos: Vec2,
    /// Ball displacement per tick
    pub ball_vel: Vec2,
    /// Left edge of the paddle (its vertical position is the court bottom)
    pub paddle_x: f32,
    pub left_held: bool,
    pub right_held: bool,
    /// Terminal flag, never cleared once set
    pub is_over: bool,
}

impl GameState {
    /// Starting state: ball centered near the bottom, paddle centered
    pub fn new(court: &Court) -> Self {
        Self {
            ball_pos: Vec2::new(court.width / 2.0, court.height - court.ball_start_offset),
            ball_vel: court.ball_velocity,
            paddle_x: (court.width - court.paddle_width) / 2.0,
            left_held: false,
            right_held: false,
            is_over: false,
        }
    }

    /// Hold state of one direction
    pub fn held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left_held,
            Direction::Right => self.right_held,
        }
    }

    /// Copy of this state with one hold flag replaced
    pub fn with_held(self, direction: Direction, held: bool) -> Self {
        match direction {
            Direction::Left => Self {
                left_held: held,
                ..self
            },
            Direction::Right => Self {
                right_held: held,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    #[test]
    fn test_initial_state_layout() {
        let court = Settings::default().court(480.0, 320.0).unwrap();
        let state = GameState::new(&court);

        assert_eq!(state.ball_pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.ball_vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle_x, (480.0 - 75.0) / 2.0);
        assert!(!state.left_held);
        assert!(!state.right_held);
        assert!(!state.is_over);
    }

    #[test]
    fn test_with_held_touches_one_flag() {
        let court = Settings::default().court(480.0, 320.0).unwrap();
        let state = GameState::new(&court).with_held(Direction::Right, true);

        assert!(state.held(Direction::Right));
        assert!(!state.held(Direction::Left));

        let state = state.with_held(Direction::Right, false);
        assert_eq!(state, GameState::new(&court));
    }

    #[test]
    fn test_paddle_max_x() {
        let court = Settings::default().court(300.0, 200.0).unwrap();
        assert_eq!(court.paddle_max_x(), 225.0);
    }
}
