//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (key names to direction signals)
//! - Ticks (recurring timer on native; `setInterval` on web lives in main.rs)

pub mod input;
#[cfg(not(target_arch = "wasm32"))]
pub mod timer;

pub use input::{InputSignals, direction_for_key, key_down, key_up};
#[cfg(not(target_arch = "wasm32"))]
pub use timer::{RecurringTimer, TimerHandle};
