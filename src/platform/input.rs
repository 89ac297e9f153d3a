//! Keyboard input handling
//!
//! Hosts report raw key names; the core only understands two directions.
//! Every key event still becomes an edit, unknown keys as the identity edit.

use crate::sim::edit::{self, Direction, EditSender, StateEdit};

/// Press/release signals for the two directional controls
pub trait InputSignals {
    fn on_press(&self, direction: Direction);
    fn on_release(&self, direction: Direction);
}

impl InputSignals for EditSender {
    fn on_press(&self, direction: Direction) {
        self.push(edit::hold(direction, true));
    }

    fn on_release(&self, direction: Direction) {
        self.push(edit::hold(direction, false));
    }
}

/// Map a key name (DOM `KeyboardEvent.key` style) to a direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" | "Left" => Some(Direction::Left),
        "ArrowRight" | "Right" => Some(Direction::Right),
        _ => None,
    }
}

fn key_edit(key: &str, held: bool) -> StateEdit {
    match direction_for_key(key) {
        Some(direction) => edit::hold(direction, held),
        None => edit::identity(),
    }
}

/// Handle key down event
pub fn key_down(sender: &EditSender, key: &str) {
    sender.push(key_edit(key, true));
}

/// Handle key up event
pub fn key_up(sender: &EditSender, key: &str) {
    sender.push(key_edit(key, false));
}
