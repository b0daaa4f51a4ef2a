// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Construction-time configuration for the coordinator

use crate::blocker::Blocker;
use crate::resource::Resource;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Default grace period before an inactive signal counts as paused
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(20);

/// Configuration for coordinator construction
///
/// Deserializable from TOML so applications can keep the debounce and
/// their own blocker names in config files; resources are wired in code.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Grace period before a debounced inactive signal stops resources
    #[serde(with = "humantime_serde")]
    pub debounce: Duration,
    /// Application-defined blockers present from the start, in addition
    /// to the implicit app-lifecycle blocker
    pub initial_blockers: Vec<Blocker>,
    /// Resources registered before the first transition
    #[serde(skip)]
    pub initial_resources: Vec<Arc<dyn Resource>>,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            initial_blockers: Vec::new(),
            initial_resources: Vec::new(),
        }
    }
}

impl CoordinatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_blocker(mut self, blocker: Blocker) -> Self {
        self.initial_blockers.push(blocker);
        self
    }

    pub fn with_resource(mut self, resource: Arc<dyn Resource>) -> Self {
        self.initial_resources.push(resource);
        self
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid coordinator config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
