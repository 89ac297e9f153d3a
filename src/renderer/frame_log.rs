//! Headless render sink for native runs

use super::{RenderSink, Shapes};
use crate::sim::{Court, GameState};

/// Records frames and traces them through `log`
#[derive(Debug, Default)]
pub struct FrameLog {
    frames: u64,
    last: Option<Shapes>,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Most recent frame
    pub fn last(&self) -> Option<&Shapes> {
        self.last.as_ref()
    }
}

impl RenderSink for FrameLog {
    fn draw(&mut self, state: &GameState, court: &Court) {
        let shapes = Shapes::from_state(state, court);
        self.frames += 1;
        log::trace!(
            "frame {}: ball ({:.1}, {:.1}) paddle x={:.1}{}",
            self.frames,
            shapes.ball.center.x,
            shapes.ball.center.y,
            shapes.paddle.origin.x,
            if state.is_over { " [over]" } else { "" }
        );
        self.last = Some(shapes);
    }
}
