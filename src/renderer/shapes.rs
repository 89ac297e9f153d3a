//! Shape generation for 2D primitives

use glam::Vec2;

use crate::sim::{Court, GameState};

/// Filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
}

/// Filled axis-aligned rectangle, `origin` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }
}

/// Everything drawn for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shapes {
    pub ball: Disc,
    /// Paddle, resting on the bottom edge of the court
    pub paddle: Rect,
}

impl Shapes {
    pub fn from_state(state: &GameState, court: &Court) -> Self {
        Self {
            ball: Disc {
                center: state.ball_pos,
                radius: court.ball_radius(),
            },
            paddle: Rect {
                origin: Vec2::new(state.paddle_x, court.height() - court.paddle_height()),
                size: Vec2::new(court.paddle_width(), court.paddle_height()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    #[test]
    fn test_initial_frame_shapes() {
        let court = Settings::default().court(480.0, 320.0).unwrap();
        let shapes = Shapes::from_state(&GameState::new(&court), &court);

        assert_eq!(shapes.ball.center, Vec2::new(240.0, 290.0));
        assert_eq!(shapes.ball.radius, 10.0);
        assert_eq!(shapes.paddle.min(), Vec2::new(202.5, 310.0));
        assert_eq!(shapes.paddle.max(), Vec2::new(277.5, 320.0));
    }
}
