//! Queued state edits
//!
//! Input handlers never touch the authoritative state. They push edits into
//! an [`EditQueue`] through an [`EditSender`], and the engine folds the whole
//! queue over the state at the start of the next tick.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// One buffered effect of an input event
pub type StateEdit = Box<dyn FnOnce(GameState) -> GameState + Send + 'static>;

/// The two directional controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Edit that sets the hold flag of `direction`
pub fn hold(direction: Direction, held: bool) -> StateEdit {
    Box::new(move |state: GameState| state.with_held(direction, held))
}

/// Edit that leaves the state untouched (unrecognized input)
pub fn identity() -> StateEdit {
    Box::new(|state: GameState| state)
}

type Pending = Arc<Mutex<Vec<StateEdit>>>;

fn lock(pending: &Pending) -> MutexGuard<'_, Vec<StateEdit>> {
    // Edits are plain values; a panicking producer cannot leave the Vec half-written
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Pending edits shared between producers and the engine
#[derive(Default)]
pub struct EditQueue {
    pending: Pending,
}

impl EditQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Producer handle; clone it freely across threads and event handlers
    pub fn sender(&self) -> EditSender {
        EditSender {
            pending: Arc::clone(&self.pending),
        }
    }

    /// Remove every queued edit in arrival order
    ///
    /// The swap happens under the lock, so a concurrent push lands either in
    /// the returned batch or in the next one, never both and never neither.
    pub fn take(&self) -> Vec<StateEdit> {
        std::mem::take(&mut *lock(&self.pending))
    }

    pub fn len(&self) -> usize {
        lock(&self.pending).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for EditQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditQueue").field("pending", &self.len()).finish()
    }
}

/// Append-only handle to an [`EditQueue`]
#[derive(Clone)]
pub struct EditSender {
    pending: Pending,
}

impl EditSender {
    /// Queue an edit for the next tick
    pub fn push(&self, edit: StateEdit) {
        lock(&self.pending).push(edit);
    }

    /// Queue a closure as an edit
    pub fn push_fn<F>(&self, edit: F)
    where
        F: FnOnce(GameState) -> GameState + Send + 'static,
    {
        self.push(Box::new(edit));
    }
}

impl std::fmt::Debug for EditSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSender")
            .field("pending", &lock(&self.pending).len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use std::thread;

    fn start_state() -> GameState {
        let court = Settings::default().court(480.0, 320.0).unwrap();
        GameState::new(&court)
    }

    #[test]
    fn test_hold_and_release_edits() {
        let state = start_state();
        let pressed = hold(Direction::Left, true)(state);
        assert!(pressed.left_held);
        assert!(!pressed.right_held);

        let released = hold(Direction::Left, false)(pressed);
        assert_eq!(released, state);
    }

    #[test]
    fn test_identity_edit() {
        let state = start_state();
        assert_eq!(identity()(state), state);
    }

    #[test]
    fn test_take_preserves_arrival_order_and_clears() {
        let queue = EditQueue::new();
        let sender = queue.sender();
        sender.push_fn(|s| GameState {
            paddle_x: 10.0,
            ..s
        });
        sender.push_fn(|s| GameState {
            paddle_x: s.paddle_x * 3.0,
            ..s
        });
        assert_eq!(queue.len(), 2);

        let folded = queue
            .take()
            .into_iter()
            .fold(start_state(), |state, edit| edit(state));
        assert_eq!(folded.paddle_x, 30.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_concurrent_producers_lose_nothing() {
        let queue = EditQueue::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sender = queue.sender();
                thread::spawn(move || {
                    for _ in 0..250 {
                        sender.push(identity());
                    }
                })
            })
            .collect();

        let mut drained = 0;
        for handle in handles {
            drained += queue.take().len();
            handle.join().unwrap();
        }
        drained += queue.take().len();

        assert_eq!(drained, 1000);
    }
}
