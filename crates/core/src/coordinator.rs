// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocker-set state machine that gates resource network activity
//!
//! The coordinator tracks a set of named blockers and an explicit
//! running flag. Resources run exactly while the set is empty; start and
//! stop are dispatched once per actual transition, never once per
//! blocker change. The transitional inactive signal is debounced so a
//! momentary loss of focus does not thrash resources that refresh fully
//! on every start.

use crate::blocker::Blocker;
use crate::config::CoordinatorConfig;
use crate::registry::ResourceRegistry;
use crate::resource::Resource;
use crate::signal::LifecycleObserver;
use crate::timer::InactivityTimer;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

struct CoordinatorState {
    blockers: HashSet<Blocker>,
    /// Flipped only by transition evaluation, never recomputed from the
    /// blocker count, so repeated blocker changes cannot re-dispatch
    running: bool,
    registry: ResourceRegistry,
}

struct Inner {
    state: Mutex<CoordinatorState>,
    timer: InactivityTimer,
    debounce: Duration,
}

/// Decides when registered resources may perform network activity
///
/// Initially stopped, with the app-lifecycle blocker plus any configured
/// blockers present. Blocker mutation, transition evaluation, and
/// dispatch happen atomically under one lock: a transition notifies the
/// full registry before the next mutation is processed. Cloning yields
/// another handle to the same coordinator.
#[derive(Clone)]
pub struct LifecycleCoordinator {
    inner: Arc<Inner>,
}

impl LifecycleCoordinator {
    pub fn new(config: CoordinatorConfig) -> Self {
        let mut blockers: HashSet<Blocker> = config.initial_blockers.into_iter().collect();
        blockers.insert(Blocker::app_lifecycle());

        let mut registry = ResourceRegistry::new();
        for resource in config.initial_resources {
            registry.register(resource);
        }

        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(CoordinatorState {
                    blockers,
                    running: false,
                    registry,
                }),
                timer: InactivityTimer::new(),
                debounce: config.debounce,
            }),
        }
    }

    /// Register a resource for start/stop/clear dispatch
    ///
    /// Usable at any time, including before the first transition; the
    /// same handle registered twice is stored once.
    pub fn register_resource(&self, resource: Arc<dyn Resource>) {
        self.lock_state().registry.register(resource);
    }

    /// Add a named blocker
    ///
    /// Adding a blocker that is already present is a no-op. The first
    /// blocker to arrive while running stops every resource, in
    /// registration order; further blockers only change set membership.
    pub fn add_blocker(&self, blocker: Blocker) {
        let mut state = self.lock_state();
        if !state.blockers.insert(blocker.clone()) {
            return;
        }
        tracing::debug!(blocker = %blocker, total = state.blockers.len(), "blocker added");

        if state.running {
            state.running = false;
            tracing::debug!("stopping resources");
            for resource in state.registry.iter() {
                resource.stop();
            }
        }
    }

    /// Remove a named blocker
    ///
    /// Removing a blocker that is not present is a no-op. Resources
    /// start, in registration order, only when the last blocker leaves
    /// the set.
    pub fn remove_blocker(&self, blocker: &Blocker) {
        let mut state = self.lock_state();
        if !state.blockers.remove(blocker) {
            return;
        }
        tracing::debug!(blocker = %blocker, remaining = state.blockers.len(), "blocker removed");

        if state.blockers.is_empty() && !state.running {
            state.running = true;
            tracing::debug!("starting resources");
            for resource in state.registry.iter() {
                resource.start();
            }
        }
    }

    /// Dispatch `clear` to every registered resource, in registration order
    ///
    /// Unconditional: callers are responsible for clearing only while
    /// stopped; the coordinator does not enforce that precondition.
    pub fn clear_data(&self) {
        let state = self.lock_state();
        tracing::debug!(resources = state.registry.len(), "clearing resources");
        for resource in state.registry.iter() {
            resource.clear();
        }
    }

    /// Whether the last evaluated transition left resources running
    pub fn is_running(&self) -> bool {
        self.lock_state().running
    }

    fn lock_state(&self) -> MutexGuard<'_, CoordinatorState> {
        self.inner.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for LifecycleCoordinator {
    fn default() -> Self {
        Self::new(CoordinatorConfig::default())
    }
}

// Lock order is fixed: the timer lock is never acquired while holding
// the state lock. on_resume/on_pause cancel before locking state, and
// the armed action re-enters through add_blocker, which takes the state
// lock on its own.
impl LifecycleObserver for LifecycleCoordinator {
    fn on_resume(&self) {
        self.inner.timer.cancel();
        self.remove_blocker(&Blocker::app_lifecycle());
    }

    fn on_pause(&self) {
        self.inner.timer.cancel();
        self.add_blocker(Blocker::app_lifecycle());
    }

    fn on_inactive(&self) {
        let coordinator = self.clone();
        self.inner.timer.arm(self.inner.debounce, move || {
            coordinator.add_blocker(Blocker::app_lifecycle());
        });
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
