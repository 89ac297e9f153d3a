//! Native recurring timer
//!
//! Fires a callback on a background thread at a fixed period until the
//! callback breaks or the handle cancels it.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Fixed-rate timer on its own thread
pub struct RecurringTimer;

impl RecurringTimer {
    /// Call `callback` every `period` until it returns `Break` or the
    /// returned handle is cancelled
    pub fn every<F>(period: Duration, mut callback: F) -> std::io::Result<TimerHandle>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let thread = thread::Builder::new()
            .name("court-ball-timer".into())
            .spawn(move || {
                let mut next = Instant::now() + period;
                while !flag.load(Ordering::Acquire) {
                    let now = Instant::now();
                    if next > now {
                        thread::sleep(next - now);
                    } else if now - next > period {
                        // Fell behind (suspended process); don't burst to catch up
                        next = now;
                    }
                    if flag.load(Ordering::Acquire) {
                        break;
                    }
                    if callback().is_break() {
                        flag.store(true, Ordering::Release);
                        break;
                    }
                    next += period;
                }
                log::debug!("Timer thread stopped");
            })?;

        Ok(TimerHandle {
            cancelled,
            thread: Some(thread),
        })
    }
}

/// Cancellation handle for a [`RecurringTimer`]
///
/// Dropping the handle cancels the timer.
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Stop firing; a callback already running finishes first
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Wait for the timer thread to exit
    ///
    /// Returns immediately after a cancel or a breaking callback; otherwise
    /// blocks until one of those happens.
    pub fn join(mut self) -> thread::Result<()> {
        match self.thread.take() {
            Some(thread) => thread.join(),
            None => Ok(()),
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
