// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named blocker tokens that keep managed resources stopped

use serde::{Deserialize, Serialize};

/// Name of the well-known blocker driven by platform lifecycle signals
pub const APP_LIFECYCLE: &str = "app-lifecycle";

/// A named reason that resources must stay stopped
///
/// Two blockers with the same name are the same blocker: equality,
/// hashing, and set membership are on the name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blocker(pub String);

impl Blocker {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The blocker present while the app is backgrounded
    pub fn app_lifecycle() -> Self {
        Self(APP_LIFECYCLE.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Blocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "blocker_tests.rs"]
mod tests;
