// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform lifecycle signals and observer fan-out

use std::sync::{Arc, RwLock};

/// Lifecycle state reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSignal {
    /// App is foregrounded and interactive
    Resumed,
    /// App is visible but not receiving input (transitional)
    Inactive,
    /// App is backgrounded
    Paused,
    /// App is shutting down or detached from the platform view
    Detached,
    /// App is fully obscured by another window; not mapped to any
    /// observer call
    Hidden,
}

/// Receives mapped lifecycle signals
///
/// Implementors subscribe to a [`SignalDispatcher`], which maps raw
/// platform signals onto these three calls.
pub trait LifecycleObserver: Send + Sync {
    fn on_resume(&self);
    fn on_inactive(&self);
    fn on_pause(&self);
}

/// Fans platform signals out to subscribed observers
///
/// `Resumed` maps to `on_resume`, `Inactive` to `on_inactive`, and both
/// `Paused` and `Detached` to `on_pause`. Unmapped signal kinds are
/// dropped with a warning, never treated as fatal.
pub struct SignalDispatcher {
    observers: Arc<RwLock<Vec<Arc<dyn LifecycleObserver>>>>,
}

impl SignalDispatcher {
    pub fn new() -> Self {
        Self {
            observers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe an observer to all future signals
    pub fn subscribe(&self, observer: Arc<dyn LifecycleObserver>) {
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        observers.push(observer);
    }

    /// Deliver a platform signal to every subscriber, in subscription order
    pub fn dispatch(&self, signal: PlatformSignal) {
        let observers = self.observers.read().unwrap_or_else(|e| e.into_inner());
        match signal {
            PlatformSignal::Resumed => {
                for observer in observers.iter() {
                    observer.on_resume();
                }
            }
            PlatformSignal::Inactive => {
                for observer in observers.iter() {
                    observer.on_inactive();
                }
            }
            PlatformSignal::Paused | PlatformSignal::Detached => {
                for observer in observers.iter() {
                    observer.on_pause();
                }
            }
            other => {
                tracing::warn!(signal = ?other, "ignoring unmapped lifecycle signal");
            }
        }
    }

    /// Count of subscribed observers
    pub fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl Default for SignalDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SignalDispatcher {
    fn clone(&self) -> Self {
        Self {
            observers: Arc::clone(&self.observers),
        }
    }
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
