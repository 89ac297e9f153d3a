//! Rendering module
//!
//! The core never draws. A [`RenderSink`] receives every frame, terminal
//! frames included, and turns it into [`Shapes`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame_log;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use frame_log::FrameLog;
pub use shapes::{Disc, Rect, Shapes};

use crate::sim::{Court, GameState};

/// Consumer of rendered frames
pub trait RenderSink {
    fn draw(&mut self, state: &GameState, court: &Court);
}
