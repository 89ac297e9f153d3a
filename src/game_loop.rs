//! Host loop
//!
//! Drives the engine from a timer: tick, render, and fire the game-over
//! notification once. States run `Running` -> `Over`; a reset throws the
//! engine away and builds a fresh one.

use crate::renderer::RenderSink;
use crate::sim::{EditSender, FrameEngine, GameState, TickOutcome};

/// Host-side game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPhase {
    /// Ticks are being scheduled
    Running,
    /// The game ended; the timer should be cancelled
    Over,
}

/// One engine, its render sink, and the pending game-over notification
pub struct GameLoop<R, N> {
    engine: FrameEngine,
    renderer: R,
    on_game_over: Option<N>,
    phase: HostPhase,
}

impl<R, N> GameLoop<R, N>
where
    R: RenderSink,
    N: FnOnce(),
{
    pub fn new(engine: FrameEngine, renderer: R, on_game_over: N) -> Self {
        let phase = if engine.is_over() {
            HostPhase::Over
        } else {
            HostPhase::Running
        };
        Self {
            engine,
            renderer,
            on_game_over: Some(on_game_over),
            phase,
        }
    }

    /// Run one timer callback: tick, draw, and notify on the losing tick
    pub fn frame(&mut self) -> HostPhase {
        let (phase, notify) = self.step();
        if let Some(notify) = notify {
            notify();
        }
        phase
    }

    /// Tick and draw, handing back the notification instead of calling it
    fn step(&mut self) -> (HostPhase, Option<N>) {
        let outcome = self.engine.tick();
        self.renderer.draw(&self.engine.state(), self.engine.court());

        let notify = match outcome {
            TickOutcome::Running => None,
            TickOutcome::Ended => {
                self.phase = HostPhase::Over;
                self.on_game_over.take()
            }
            TickOutcome::Over => {
                self.phase = HostPhase::Over;
                None
            }
        };
        (self.phase, notify)
    }

    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    pub fn engine(&self) -> &FrameEngine {
        &self.engine
    }

    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    /// Producer handle for this engine's edit queue
    pub fn sender(&self) -> EditSender {
        self.engine.sender()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Discard the engine and start over on the same court
    ///
    /// Senders handed out before the reset feed the discarded engine; input
    /// handlers must be rewired with [`GameLoop::sender`].
    pub fn reset<M: FnOnce()>(self, on_game_over: M) -> GameLoop<R, M> {
        log::info!("Game reset after {} ticks", self.engine.ticks());
        let court = *self.engine.court();
        GameLoop::new(FrameEngine::new(court), self.renderer, on_game_over)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{RunHandle, start};

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::ops::ControlFlow;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
    use std::time::Duration;

    use super::{GameLoop, HostPhase};
    use crate::platform::timer::{RecurringTimer, TimerHandle};
    use crate::renderer::RenderSink;
    use crate::sim::{EditSender, GameState};

    type Shared<R, N> = Arc<Mutex<GameLoop<R, N>>>;

    fn lock<R, N>(game: &Shared<R, N>) -> MutexGuard<'_, GameLoop<R, N>> {
        game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a recurring timer that drives `game` every `period`
    ///
    /// The timer cancels itself on game over. The game-over notification runs
    /// on the timer thread after the game lock is released.
    pub fn start<R, N>(game: GameLoop<R, N>, period: Duration) -> std::io::Result<RunHandle<R, N>>
    where
        R: RenderSink + Send + 'static,
        N: FnOnce() + Send + 'static,
    {
        let sender = game.sender();
        let game = Arc::new(Mutex::new(game));
        let timer = drive(Arc::clone(&game), period)?;

        Ok(RunHandle {
            game,
            sender,
            timer,
        })
    }

    pub(super) fn drive<R, N>(shared: Shared<R, N>, period: Duration) -> std::io::Result<TimerHandle>
    where
        R: RenderSink + Send + 'static,
        N: FnOnce() + Send + 'static,
    {
        log::info!("Game started ({} ms per tick)", period.as_millis());
        RecurringTimer::every(period, move || {
            let (phase, notify) = lock(&shared).step();
            if let Some(notify) = notify {
                notify();
            }
            match phase {
                HostPhase::Running => ControlFlow::Continue(()),
                HostPhase::Over => {
                    log::info!("Timer stopped: game over");
                    ControlFlow::Break(())
                }
            }
        })
    }

    /// A running game and the handle that cancels its timer
    pub struct RunHandle<R, N> {
        game: Shared<R, N>,
        sender: EditSender,
        timer: TimerHandle,
    }

    impl<R, N> RunHandle<R, N>
    where
        R: RenderSink,
        N: FnOnce(),
    {
        /// Producer handle for input sources
        pub fn sender(&self) -> EditSender {
            self.sender.clone()
        }

        pub fn state(&self) -> GameState {
            lock(&self.game).state()
        }

        pub fn phase(&self) -> HostPhase {
            lock(&self.game).phase()
        }

        /// Whether the timer is still scheduling ticks
        pub fn is_running(&self) -> bool {
            !self.timer.is_cancelled()
        }

        /// Inspect the loop between ticks
        pub fn with<T>(&self, f: impl FnOnce(&GameLoop<R, N>) -> T) -> T {
            f(&lock(&self.game))
        }

        /// Cancel the timer (game reload or shutdown)
        pub fn stop(&self) {
            if !self.timer.is_cancelled() {
                log::info!("Timer stopped");
            }
            self.timer.cancel();
        }

        /// Wait until the timer thread exits and take the game back
        ///
        /// Blocks until game over unless [`RunHandle::stop`] was called. The
        /// returned loop can be [`reset`](GameLoop::reset) and started again.
        pub fn join(self) -> std::thread::Result<GameLoop<R, N>> {
            let RunHandle { game, timer, .. } = self;
            timer.join()?;
            match Arc::try_unwrap(game) {
                Ok(game) => Ok(game.into_inner().unwrap_or_else(PoisonError::into_inner)),
                Err(_) => Err(Box::new("game loop still shared after timer exit")
                    as Box<dyn std::any::Any + Send>),
            }
        }
    }
}
