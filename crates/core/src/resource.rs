// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Managed resource capability set consumed by the coordinator

use std::sync::{Arc, Mutex};

/// A data-caching component whose network activity the coordinator gates
///
/// All three calls are synchronous, non-blocking triggers; what a
/// resource does internally when started, stopped, or cleared is its
/// own concern. The coordinator invokes them sequentially from inside
/// its critical section, so implementations should return promptly.
pub trait Resource: Send + Sync {
    /// Begin network activity (e.g. start polling)
    fn start(&self);

    /// Halt network activity
    fn stop(&self);

    /// Drop cached data
    fn clear(&self);
}

/// Recorded call to a resource method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCall {
    Start,
    Stop,
    Clear,
}

/// Recording fake resource for tests
///
/// Cloning shares the call log, so a clone kept by the test observes
/// calls made through the registered handle.
#[derive(Clone, Default)]
pub struct FakeResource {
    calls: Arc<Mutex<Vec<ResourceCall>>>,
}

impl FakeResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in the order they were made
    pub fn calls(&self) -> Vec<ResourceCall> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of recorded calls of one kind
    pub fn count(&self, call: ResourceCall) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|c| **c == call)
            .count()
    }

    fn record(&self, call: ResourceCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

impl Resource for FakeResource {
    fn start(&self) {
        self.record(ResourceCall::Start);
    }

    fn stop(&self) {
        self.record(ResourceCall::Stop);
    }

    fn clear(&self) {
        self.record(ResourceCall::Clear);
    }
}
