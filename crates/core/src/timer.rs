// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-shot debounce timer for the transitional inactive signal

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

struct TimerState {
    /// True while a sleeper is armed and its action has neither fired
    /// nor been cancelled
    pending: bool,
    /// Bumped on every arm and cancel; a sleeper fires only if its
    /// generation is still current
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

/// Single-shot, cancelable delay that suppresses re-arming
///
/// `arm` while a delay is already pending is a no-op: the delay is not
/// restarted or extended. `cancel` suppresses a pending action before it
/// fires. The race between firing and `cancel` resolves deterministically
/// at the claim of the pending flag: the action runs under the timer's
/// lock, so a `cancel` that loses the claim returns only after the action
/// has completed, and a `cancel` that wins suppresses it entirely.
///
/// Cloning yields another handle to the same timer.
#[derive(Clone)]
pub struct InactivityTimer {
    state: Arc<Mutex<TimerState>>,
}

impl InactivityTimer {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TimerState {
                pending: false,
                generation: 0,
                handle: None,
            })),
        }
    }

    /// Whether an armed delay has not yet fired or been cancelled
    pub fn is_pending(&self) -> bool {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).pending
    }

    /// Schedule `action` to run once after `delay`
    ///
    /// No-op while a delay is already pending. Must be called from within
    /// a tokio runtime.
    pub fn arm<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.pending {
            return;
        }
        state.pending = true;
        state.generation += 1;
        let generation = state.generation;

        let shared = Arc::clone(&self.state);
        state.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = shared.lock().unwrap_or_else(|e| e.into_inner());
            if !state.pending || state.generation != generation {
                return;
            }
            state.pending = false;
            state.handle = None;
            // Still holding the lock: a cancel racing this claim blocks
            // until the action completes.
            action();
        }));
    }

    /// Suppress a pending action; no-op when none is pending
    pub fn cancel(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if !state.pending {
            return;
        }
        state.pending = false;
        state.generation += 1;
        if let Some(handle) = state.handle.take() {
            // Abort lands at the sleep await point; a sleeper already
            // past it is disarmed by the generation bump above.
            handle.abort();
        }
    }
}

impl Default for InactivityTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
