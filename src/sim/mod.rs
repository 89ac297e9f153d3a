//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - No randomness
//! - Queued edits applied in arrival order, before physics
//! - No rendering or platform dependencies

pub mod edit;
pub mod engine;
pub mod stages;
pub mod state;

pub use edit::{Direction, EditQueue, EditSender, StateEdit};
pub use engine::{FrameEngine, TickOutcome};
pub use stages::{PIPELINE, Stage};
pub use state::{Court, GameState};
