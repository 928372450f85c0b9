//! Debounced search input.
//!
//! Keystrokes arm a [`DebounceTimer`]; only when input pauses for the full
//! delay is the text emitted. Submitting or clearing emits immediately.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One arm of a [`DebounceTimer`]; stale once the timer moves on.
#[derive(Debug)]
struct Generation {
    current: Arc<AtomicU64>,
    mine: u64,
}

impl Generation {
    fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.mine
    }
}

/// Owns at most one pending expiry task.
///
/// Every arm and cancel bumps a generation counter, and an expiry only
/// fires while its generation is still current. Aborting the task alone
/// cannot stop one that a worker is already polling. Dropping the timer
/// invalidates whatever is pending.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    generation: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `on_expiry` after `delay` unless re-armed or cancelled first.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn arm<F>(&mut self, delay: Duration, on_expiry: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let generation = self.next_generation();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.is_current() {
                on_expiry();
            }
        }));
    }

    /// Invalidates the pending expiry. Returns whether one was still pending.
    pub fn cancel(&mut self) -> bool {
        self.generation.fetch_add(1, Ordering::AcqRel);
        match self.handle.take() {
            Some(handle) => {
                let pending = !handle.is_finished();
                handle.abort();
                pending
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn next_generation(&self) -> Generation {
        let mine = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        Generation {
            current: Arc::clone(&self.generation),
            mine,
        }
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Search box controller: idle or pending-debounce.
///
/// Emissions are delivered on the channel returned by
/// [`SearchController::new`]; the stores page is the usual subscriber.
#[derive(Debug)]
pub struct SearchController {
    text: String,
    delay: Duration,
    timer: DebounceTimer,
    emit: mpsc::UnboundedSender<String>,
}

impl SearchController {
    #[must_use]
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (emit, emissions) = mpsc::unbounded_channel();
        let controller = Self {
            text: String::new(),
            delay,
            timer: DebounceTimer::new(),
            emit,
        };
        (controller, emissions)
    }

    /// Records a keystroke; `text` is the full input content after the edit.
    ///
    /// An edit that leaves the box empty is treated as [`Self::clear`].
    pub fn input(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.clear();
            return;
        }

        self.text = text;
        let emit = self.emit.clone();
        let snapshot = self.text.clone();
        self.timer.arm(self.delay, move || {
            tracing::debug!(query = %snapshot, "search debounce elapsed");
            let _ = emit.send(snapshot);
        });
    }

    /// Emits the current text now, skipping any pending debounce.
    pub fn submit(&mut self) {
        self.timer.cancel();
        self.send_now();
    }

    /// Empties the box and emits `""` immediately.
    pub fn clear(&mut self) {
        self.text.clear();
        self.timer.cancel();
        self.send_now();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    fn send_now(&self) {
        let _ = self.emit.send(self.text.clone());
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
