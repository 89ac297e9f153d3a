//! Court Ball - a single-player ball-and-paddle game
//!
//! Core modules:
//! - `sim`: Deterministic frame pipeline (state, queued edits, physics stages)
//! - `game_loop`: Host state machine driving ticks, rendering and game over
//! - `renderer`: Render sinks (canvas on web, log on native)
//! - `platform`: Input signals and the native recurring timer
//! - `settings`: Tuning and court validation

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game_loop::{GameLoop, HostPhase};
pub use settings::{Settings, SettingsError};
pub use sim::{Court, Direction, FrameEngine, GameState, StateEdit, TickOutcome};

/// Game configuration constants
pub mod consts {
    /// Timer period between ticks (milliseconds)
    pub const TICK_PERIOD_MS: u64 = 10;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_VX: f32 = 2.0;
    pub const BALL_START_VY: f32 = -2.0;
    /// Initial distance of the ball above the bottom edge
    pub const BALL_START_OFFSET: f32 = 30.0;

    /// Paddle defaults - fixed to the bottom edge of the court
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Paddle displacement per tick while a direction is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Court size used by the native headless host
    pub const NATIVE_COURT_WIDTH: f32 = 480.0;
    pub const NATIVE_COURT_HEIGHT: f32 = 320.0;
}
