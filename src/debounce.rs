//! Trailing-edge debounce primitive
//!
//! Coalesces bursts of signals into a single execution: every signal pushes
//! the deadline out by the quiet window, and [`Debouncer::fire`] reports true
//! exactly once, after the last signal's window has elapsed. Deadlines use
//! `tokio::time::Instant`, so tests drive this with the paused clock.

use std::time::Duration;

use tokio::time::Instant;

/// Deadline-based debouncer with a configurable quiet window
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a signal, pushing the deadline out by the quiet window
    pub fn signal(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// True exactly once per burst, after the quiet window has elapsed
    pub fn fire(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// A signal is waiting for its quiet window
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Sleep until the current deadline (no-op when nothing is pending)
    pub async fn wait(&self) {
        if let Some(deadline) = self.deadline {
            tokio::time::sleep_until(deadline).await;
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
