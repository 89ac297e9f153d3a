//! Frame engine
//!
//! Owns the authoritative state and the pending edit queue, and advances the
//! state by exactly one tick per call.

use super::edit::{EditQueue, EditSender, StateEdit};
use super::stages::PIPELINE;
use super::state::{Court, GameState};

/// What a call to [`FrameEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Physics ran and the game continues
    Running,
    /// Physics ran and this tick ended the game
    Ended,
    /// The game was already over; nothing was simulated
    Over,
}

pub struct FrameEngine {
    court: Court,
    state: GameState,
    queue: EditQueue,
    ticks: u64,
}

impl FrameEngine {
    /// Engine at the starting state for `court`
    pub fn new(court: Court) -> Self {
        log::info!(
            "Frame engine created ({}x{} court, paddle {})",
            court.width(),
            court.height(),
            court.paddle_width()
        );
        Self::with_state(court, GameState::new(&court))
    }

    /// Engine resuming from an arbitrary state
    pub fn with_state(court: Court, state: GameState) -> Self {
        Self {
            court,
            state,
            queue: EditQueue::new(),
            ticks: 0,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    /// Ticks executed so far, terminal ticks included
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    /// Producer handle for input handlers
    pub fn sender(&self) -> EditSender {
        self.queue.sender()
    }

    /// Queue an edit for the next tick
    pub fn push(&self, edit: StateEdit) {
        self.queue.sender().push(edit);
    }

    /// Number of edits waiting for the next tick
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Advance one frame
    ///
    /// Drains the queue, then runs the physics stages in order. On the tick
    /// that ends the game the paddle still moves but the ball stays where it
    /// was when the miss was detected.
    pub fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;
        let edits = self.queue.take();

        if self.state.is_over {
            if !edits.is_empty() {
                log::trace!("Discarding {} edits after game over", edits.len());
            }
            return TickOutcome::Over;
        }

        let applied = edits.len();
        let state = edits.into_iter().fold(self.state, |state, edit| edit(state));
        if applied > 0 {
            log::debug!("Tick {}: applied {} queued edits", self.ticks, applied);
        }

        let court = &self.court;
        self.state = PIPELINE
            .iter()
            .fold(state, |state, stage| stage(state, court));

        if self.state.is_over {
            log::info!(
                "Game over at tick {} (ball x={:.1}, paddle x={:.1})",
                self.ticks,
                self.state.ball_pos.x,
                self.state.paddle_x
            );
            TickOutcome::Ended
        } else {
            TickOutcome::Running
        }
    }
}

impl std::fmt::Debug for FrameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameEngine")
            .field("court", &self.court)
            .field("state", &self.state)
            .field("queue", &self.queue)
            .field("ticks", &self.ticks)
            .finish()
    }
}
